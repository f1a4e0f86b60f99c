use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use relay_splits::{ResultsError, ResultsFixer};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Split solo-relay results into per-rider rows", long_about = None)]
struct Cli {
    /// Tab-delimited results export
    #[arg(value_hint = ValueHint::FilePath)]
    results: PathBuf,

    /// Tab-delimited signup roster (First Name, Last Name, Bib, Category)
    #[arg(long, alias = "signup", value_hint = ValueHint::FilePath)]
    roster: PathBuf,

    /// Log every row decision
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            if let Some(results_err) = err.downcast_ref::<ResultsError>() {
                for suggestion in results_err.recovery_suggestions() {
                    eprintln!("  - {suggestion}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let outcome = ResultsFixer::default()
        .fix_file(&cli.results, &cli.roster)
        .with_context(|| format!("fixing {}", cli.results.display()))?;
    println!("{}", outcome.output.display());
    Ok(())
}
