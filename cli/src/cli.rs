use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "scrim",
    version = scrim_core::version(),
    about = "scrim - a host-agnostic loading overlay engine",
)]
pub struct Args {
    /// Specify custom configuration file path
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Specify custom configuration file path"
    )]
    pub config_path: Option<PathBuf>,

    /// Use default configuration and ignore config files
    #[arg(
        long = "defaults",
        help = "Use default configuration and ignore config files"
    )]
    pub use_defaults: bool,

    /// Suppress debug output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable trace output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Drive the overlay engine against the in-memory host and print the
    /// document after each step
    Demo {
        /// Repeat the demonstration until Ctrl+C
        #[arg(long)]
        forever: bool,
    },
    /// Classify a viewport and user-agent string
    Device {
        /// User-agent string to classify (defaults to a desktop browser)
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1440)]
        width: u32,
        /// Viewport height in pixels
        #[arg(long, default_value_t = 900)]
        height: u32,
    },
    /// Print the annotated default configuration
    Config {
        /// Write to the default config path instead of stdout
        #[arg(long)]
        write: bool,
    },
}

pub fn parse_args() -> Args {
    Args::parse()
}
