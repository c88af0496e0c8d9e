use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum FileCommands {
    /// Newest output files of a user
    Recent {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,

        /// Maximum number of files (default: defaults.recent_limit)
        #[arg(long)]
        count: Option<u32>,
    },
}
