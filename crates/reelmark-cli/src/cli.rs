use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "reel - video bookmark links for markdown notes, backed by mpv")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'off'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/reelmark/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// mpv binary to launch (overrides config file)
    #[arg(long, global = true)]
    pub mpv_path: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the video links in a document, in document order
    List {
        /// Markdown document to scan
        document: PathBuf,

        /// Emit the controls as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Append video link blocks for the given media files
    Add {
        /// Markdown document to modify
        document: PathBuf,

        /// Media files to link (at least one)
        #[arg(required = true)]
        videos: Vec<PathBuf>,
    },

    /// Open a linked video in mpv and write the exit position back
    Open {
        /// Markdown document containing the link
        document: PathBuf,

        /// Zero-based index of the link, as shown by `reel list`
        index: usize,
    },
}
