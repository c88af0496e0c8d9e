use clap::Subcommand;

#[derive(Subcommand)]
pub enum LookupCommands {
    /// Id of a file type, falling back to the catch-all type
    FileType { name: String },

    /// Id of an output format, falling back to the default id
    OutputFormat { name: String },
}
