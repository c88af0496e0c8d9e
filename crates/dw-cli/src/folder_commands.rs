use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum FolderCommands {
    /// Most recently updated folders of a user
    List {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,

        /// Maximum number of folders (default: defaults.recent_limit)
        #[arg(long)]
        count: Option<u32>,
    },
}
