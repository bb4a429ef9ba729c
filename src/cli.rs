use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "ppm-raytracer")]
#[command(about = "Render sphere scenes to plain-text PPM")]
pub struct Args {
    /// Scene description (TOML). Without it the classic two-sphere scene is rendered
    #[arg(short = 'c', long)]
    pub scene: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,

    /// Image width in pixels, overrides the scene file
    #[arg(long)]
    pub width: Option<u32>,

    /// Number of samples per pixel, overrides the scene file
    #[arg(long, short = 's')]
    pub samples_per_pixel: Option<u32>,

    /// Bounce limit, overrides the scene file
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Write linear colors instead of gamma 2 corrected ones
    #[arg(long)]
    pub no_gamma: bool,

    /// Seed for sample jitter, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shade scanlines on a single thread
    #[arg(long)]
    pub single_threaded: bool,

    /// Show a scanline progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Output path: "-" for stdout, *.png for PNG, anything else is written as PPM
    #[arg(short, long, default_value = "-")]
    pub output: String,
}
