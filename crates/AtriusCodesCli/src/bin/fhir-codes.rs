//! FHIR code system CLI executable
//!
//! See the cli module documentation for detailed usage information.

use std::io;

use atrius_codes_cli::cli::{Args, init_tracing, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)
}
