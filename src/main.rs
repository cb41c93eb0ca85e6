use std::path::PathBuf;

use clap::Parser;
use timed_quiz::{Quiz, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to append log output to
    #[arg(long, default_value_os_t = logging::default_log_path())]
    log_file: PathBuf,

    /// Log filter, e.g. `info` or `timed_quiz=debug`
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init(&args.log_file, &args.log_level) {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = Quiz::new().run() {
        tracing::error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
