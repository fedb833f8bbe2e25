use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "buildvals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve build values for a flavour and emit them as KEY=value lines
    Resolve {
        /// Server flavour (e.g., prod, staging)
        #[arg(value_name = "SERVER_FLAVOUR")]
        server_flavour: String,

        /// Company to resolve, matched case-insensitively against company ids
        #[arg(long)]
        company: Option<String>,

        /// Company configuration file [default: config.json]
        #[arg(long = "config", value_name = "FILE")]
        config_file: Option<PathBuf>,

        /// Firebase services descriptor [default: app/google-services.json]
        #[arg(long = "services", value_name = "FILE")]
        services_file: Option<PathBuf>,

        /// File to append KEY=value lines to (defaults to $GITHUB_OUTPUT)
        #[arg(long, value_name = "FILE")]
        github_output: Option<PathBuf>,

        /// Also print the resolved values as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or replace a filename prefix on every APK in a directory
    Rename {
        /// Directory containing the APK files
        #[arg(value_name = "DIRECTORY")]
        path: PathBuf,

        /// New prefix (empty string to only strip the existing prefix)
        new_prefix: String,

        /// Existing prefix to replace
        #[arg(default_value = "")]
        existing_prefix: String,
    },

    /// Show version information
    Version,
}
