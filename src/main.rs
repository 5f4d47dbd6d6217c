use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use agentlog::output::{EventPresenter, PresenterConfig, Verbosity};
use agentlog::replay::replay;

#[derive(Parser)]
#[command(name = "agentlog")]
#[command(about = "Replay a recorded agent event stream as a console transcript", long_about = None)]
struct Cli {
    /// Path to a JSONL event file ('-' or absent reads stdin)
    path: Option<PathBuf>,

    /// Show full payloads (overrides the DEBUG_VERBOSE environment variable)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.verbose {
        PresenterConfig::new().verbosity(Verbosity::Verbose)
    } else {
        PresenterConfig::new()
    };
    let mut presenter = EventPresenter::new(io::stdout(), config);

    let stats = match &cli.path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open event file {:?}", path))?;
            run(BufReader::new(file), &mut presenter)?
        }
        _ => run(io::stdin().lock(), &mut presenter)?,
    };

    println!();
    println!(
        "Replayed {} event(s) ({} skipped)",
        stats.presented, stats.skipped
    );

    Ok(())
}

fn run<R: BufRead>(
    reader: R,
    presenter: &mut EventPresenter<io::Stdout>,
) -> Result<agentlog::ReplayStats> {
    replay(reader, presenter).context("Failed to read event stream")
}
