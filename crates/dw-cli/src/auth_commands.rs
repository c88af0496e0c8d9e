use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Verify credentials and record the login
    SignIn {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Register a new account
    SignUp {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        full_name: Option<String>,
    },
}
