//! Command line configuration for the `trailcam` binary.

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Drive the wildlife photographer agent", long_about = None)]
pub struct Arguments {
    #[arg(
        short = 's',
        long = "script",
        help = "Replay these event codes instead of reading stdin (s r a f o t)"
    )]
    pub script: Option<String>,

    #[arg(
        short = 'l',
        long = "log-level",
        env = "TRAILCAM_LOG",
        help = "Log level used when RUST_LOG is not set",
        default_value = "warn",
        value_parser = parse_log_level
    )]
    pub log_level: LevelFilter,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            script: None,
            log_level: LevelFilter::WARN,
        }
    }
}

/// Validates that a log level string is valid
fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    level.parse::<LevelFilter>().map_err(|_| {
        format!(
            "Invalid log level: '{}'. Valid levels: off, error, warn, info, debug, trace",
            level
        )
    })
}
