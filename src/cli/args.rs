// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (convert, preview, or init-config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a Notion HTML table export into an Anki CSV file
    Convert {
        /// Exported Notion HTML file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// CSV file to write (defaults to INPUT with a .csv extension)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Print the extracted cards as JSON without writing a file
    Preview {
        /// Exported Notion HTML file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Write a default config file
    InitConfig {
        /// Where to create the config file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}
