//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vocabgen")]
#[command(
    about = "Generate form-to-lemma lookup tables from morphological dictionaries",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate dictionaries declared in vocabgen.toml (default command)
    Generate {
        /// Manifest to use instead of discovering vocabgen.toml
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Only generate these languages (repeatable)
        #[arg(short, long = "language", value_name = "CODE")]
        languages: Vec<String>,
    },

    /// Generate one dictionary from the given inputs without a manifest
    Build {
        /// Language code, also used as the Go package name
        #[arg(short, long)]
        language: String,

        /// Generated file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format (rust, go)
        #[arg(short, long, default_value = "rust")]
        format: String,

        /// Custom template file
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Dictionary files or directories, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Parse and merge dictionary files without writing anything
    Check {
        /// Dictionary files or directories, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Write a default vocabgen.toml
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
