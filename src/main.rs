use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trailcam::agent::RunSummary;
use trailcam::config::Arguments;
use trailcam::game::{photographer, ConsoleEnvironment, EnvironmentError, ScriptedEnvironment};

fn main() -> Result<()> {
    let arguments = Arguments::parse();

    // RUST_LOG overrides the command line level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(arguments.log_level.to_string())),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting trailcam with log level: {}", arguments.log_level);

    let outcome = match arguments.script {
        Some(codes) => photographer(ScriptedEnvironment::from_codes(&codes)).run(),
        None => {
            let stdin = io::stdin();
            let environment = ConsoleEnvironment::new(stdin.lock(), io::stdout());
            photographer(environment).run()
        }
    };

    finish(outcome)
}

fn finish(outcome: Result<RunSummary, EnvironmentError>) -> Result<()> {
    match outcome {
        Ok(summary) => {
            info!(
                "Game over after {} cycles, {} actions",
                summary.cycles, summary.actions
            );
            Ok(())
        }
        Err(err) if err.is_end_of_input() => {
            info!("Event source ended: {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
