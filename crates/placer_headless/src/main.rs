//! Headless placement driver.
//!
//! Runs a placement session without an engine, driven by a RON script
//! of frame inputs. Prints per-run results and a final ASCII occupancy
//! map to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in demo script
//! cargo run -p placer_headless -- demo
//!
//! # Run a script file
//! cargo run -p placer_headless -- run --script scripts/fill_row.ron
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use placer_headless::render::render_ascii;
use placer_headless::runner::{run_script, RunSummary};
use placer_headless::script::Script;

#[derive(Parser)]
#[command(name = "placer_headless")]
#[command(about = "Headless tile placement driver for scripted runs and CI")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script file
    Run {
        /// Path to a RON script
        #[arg(short, long)]
        script: PathBuf,
    },
    /// Run the built-in demo script
    Demo,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(name: &str, summary: &RunSummary) {
    println!("script: {name}");
    println!("frames: {}", summary.frames);
    println!("commits: {}", summary.commits.len());
    println!("occupied: {}", summary.session.grid().occupied_count());
    print!("{}", render_ascii(summary.session.grid()));
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let script = match cli.command {
        Commands::Run { script } => match Script::load(&script) {
            Ok(script) => script,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        Commands::Demo => Script::demo(),
    };

    match run_script(&script) {
        Ok(summary) => {
            print_summary(&script.name, &summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
