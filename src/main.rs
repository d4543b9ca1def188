//! jmerge CLI
//!
//! Entry point for the `jmerge` command-line tool.

use clap::Parser;
use jmerge::{run, PipelineConfig, DEFAULT_OVERLAY_PATH};
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "jmerge")]
#[command(about = "Shallow-merge an overlay JSON object file into an object read from stdin", version)]
struct Cli {
    /// Path to the overlay JSON file
    #[arg(long, short = 'f', default_value = DEFAULT_OVERLAY_PATH)]
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    let config = PipelineConfig {
        overlay_path: cli.file,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run(&mut stdin.lock(), &mut stdout.lock(), &config) {
        eprintln!("error: {}", e);
        process::exit(e.exit_code());
    }
}
