use clap::Subcommand;

#[derive(Subcommand)]
pub enum OutputFileCommands {
    /// Record a generated file against a history run
    Log {
        /// History ID
        #[arg(long)]
        history_id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        path: String,

        /// Size in bytes
        #[arg(long)]
        size: i64,
    },
}
