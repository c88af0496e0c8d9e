use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Runs per input file type
    FileTypes {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,
    },
}
