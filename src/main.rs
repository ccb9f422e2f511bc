use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use prolog_syntax::report::{check_files, discover_files, render, write_report};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Check numbered Prolog files (1.txt, 2.txt, ...) for syntax errors.
#[derive(Parser, Debug)]
struct Args {
    /// Directory holding the numbered input files
    #[arg(long, default_value = "Prolog-Parser", value_name = "dir")]
    dir: PathBuf,

    /// Write the report to
    #[arg(short = 'o', long, default_value = "parser_output.txt", value_name = "outname")]
    output: PathBuf,

    /// Trace every matched token and recorded error
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Do not echo the report to stdout
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let files = discover_files(&args.dir);
    if files.is_empty() {
        info!(dir = %args.dir.display(), "no numbered input files found");
    }

    let reports = check_files(&files, args.debug);
    let failed = reports.iter().filter(|report| !report.is_correct()).count();
    info!(files = reports.len(), failed, "checked input files");

    if let Err(err) = write_report(&args.output, &reports) {
        error!(path = %args.output.display(), %err, "failed to write report");
        return ExitCode::FAILURE;
    }

    if !args.quiet {
        print!("{}", render(&reports));
    }

    ExitCode::SUCCESS
}
