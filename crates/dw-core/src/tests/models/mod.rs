mod history_item;
mod history_record;
mod output_file;
mod user;
