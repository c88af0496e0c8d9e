mod credentials;
mod models;
