//! Examine overlay replay CLI
//!
//! Replays a scripted session of user actions, text events, session resets
//! and render cycles, and prints what the overlay would draw on each cycle.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use examine_cli::{Replay, ReplayError, Script, logging};
use examine_core::{ExamineConfig, ExamineConfigExt};

#[derive(Parser, Debug)]
#[command(name = "examine-replay")]
#[command(about = "Replay a scripted examine session against a fake scene")]
#[command(version)]
struct Args {
    /// Path to the replay script (TOML)
    #[arg(short, long)]
    script: PathBuf,

    /// Overlay configuration file (TOML); defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Replay failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let config = match &args.config {
        Some(path) => ExamineConfig::load_from(path)?,
        None => ExamineConfig::default(),
    };
    let script = Script::load(&args.script)?;

    let mut replay = Replay::new(config, script.scene.build());
    let summary = replay.run(&script)?;

    if !args.quiet {
        for line in replay.transcript() {
            println!("{line}");
        }
    }
    println!(
        "{} events, {} resolved, {} desyncs, {} dropped, {} renders",
        summary.events, summary.resolved, summary.desyncs, summary.dropped, summary.renders
    );
    Ok(())
}
