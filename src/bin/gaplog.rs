//! Usage:
//!   gaplog info "service started"                 Log one line to stdout
//!   gaplog --dir logs --gap 1h --file-name %Y-%m-%d_%H.log warn "disk 91%"
//!                                                  Log to hourly-rotated files
//!   tail -f access.log | gaplog --fields info     One record per stdin line

use clap::Parser;
use gaplog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gaplog: {e}");
            ExitCode::FAILURE
        }
    }
}
