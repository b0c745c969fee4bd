use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "A recursive ray tracer for spheres, planes and point lights")]
pub struct Args {
    /// Scene file (JSON); renders the built-in demo scene when omitted
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels (overrides the scene file)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (overrides the scene file)
    #[arg(long)]
    pub height: Option<u32>,

    /// Anti-aliasing samples per axis (overrides the scene file)
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum ray casts per sample (overrides the scene file)
    #[arg(long, short = 'b')]
    pub bounces: Option<u32>,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
