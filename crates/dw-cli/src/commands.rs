use crate::{
    auth_commands::AuthCommands, file_commands::FileCommands, folder_commands::FolderCommands,
    history_commands::HistoryCommands, lookup_commands::LookupCommands,
    output_file_commands::OutputFileCommands, pref_commands::PrefCommands,
    stats_commands::StatsCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in or register
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Generated output files
    Files {
        #[command(subcommand)]
        action: FileCommands,
    },

    /// User folders
    Folders {
        #[command(subcommand)]
        action: FolderCommands,
    },

    /// Usage statistics
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },

    /// Output format preference
    Prefs {
        #[command(subcommand)]
        action: PrefCommands,
    },

    /// Processing history
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },

    /// Output file records
    OutputFile {
        #[command(subcommand)]
        action: OutputFileCommands,
    },

    /// Resolve file type and output format ids
    Lookup {
        #[command(subcommand)]
        action: LookupCommands,
    },
}
