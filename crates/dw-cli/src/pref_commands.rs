use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum PrefCommands {
    /// Show the preferred output format
    Get {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,
    },

    /// Save the preferred output format
    Set {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,

        /// Output format name, e.g. Excel
        #[arg(long)]
        format: String,
    },
}
