use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// Latest processing runs with type and format names
    Recent {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,

        /// Maximum number of runs (default: defaults.recent_limit)
        #[arg(long)]
        count: Option<u32>,
    },

    /// Start a processing run; prints the new history id
    Create {
        /// User ID (UUID)
        #[arg(long)]
        user_id: Uuid,

        /// Input file type name, e.g. CSV (unknown names resolve to the fallback type)
        #[arg(long)]
        file_type: String,

        /// Output format name (default: the user's preference)
        #[arg(long)]
        output_format: Option<String>,

        /// Prompt the run was started with
        #[arg(long)]
        prompt: String,

        /// Kind of processing, e.g. transform
        #[arg(long)]
        process_type: String,
    },

    /// Record the processing time of a run
    Timing {
        /// History ID
        #[arg(long)]
        id: i64,

        /// Processing time in milliseconds
        #[arg(long)]
        ms: i32,
    },

    /// Record the outcome and processing time of a run
    Status {
        /// History ID
        #[arg(long)]
        id: i64,

        /// Whether the run succeeded
        #[arg(long, action = clap::ArgAction::Set)]
        success: bool,

        /// Processing time in milliseconds
        #[arg(long)]
        ms: i32,
    },
}
