use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use shapeboard::config::Config;
use shapeboard::engine::EngineCore;
use shapeboard::replay::{self, ReplayError, Summary};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("shapeboard: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let path = std::env::args().nth(1);
    match run(config, path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}

/// Replay the stream at `path` (stdin when absent), printing each action and
/// a final summary as JSON lines.
fn run(config: Config, path: Option<&str>) -> Result<(), ReplayError> {
    let events = match path {
        Some(path) => replay::parse_events(BufReader::new(File::open(path)?))?,
        None => replay::parse_events(io::stdin().lock())?,
    };
    tracing::info!(events = events.len(), source = path.unwrap_or("stdin"), "replaying event stream");

    let mut core = EngineCore::with_config(config);
    let actions = replay::run(&mut core, &events);

    let mut out = io::stdout().lock();
    for action in &actions {
        writeln!(out, "{}", serde_json::to_string(action).map_err(ReplayError::Encode)?)?;
    }
    let summary = serde_json::to_string(&Summary::of(&core)).map_err(ReplayError::Encode)?;
    writeln!(out, "{summary}")?;
    Ok(())
}
