/// Check Pages - reports whether the worksheets page still carries mock data
///
/// The main entry point. It parses the logging flags, sets up logging, runs
/// the inspector on the fixed page and maps the outcome to an exit status.

use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};
use std::fs::File;
use std::process;

use check_pages::{app, utils::output_formatter, TARGET_PATH};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "check_pages",
    version,
    about = "Checks whether Worksheets.jsx still initializes state from mock data",
    long_about = "Reads frontend/src/pages/Worksheets.jsx from the current directory and reports
whether it still contains an inline `useState([` initializer and is larger
than 1000 characters."
)]
struct Args {
    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<String>,
}

/// Main entry point function
fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("{}", output_formatter::format_error(&format!("{:#}", e)));
        process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::run(&mut out) {
        debug!("Inspection of {} failed: {:#}", TARGET_PATH, e);
        eprintln!("{}", output_formatter::format_error(&format!("{:#}", e)));
        process::exit(1);
    }
}

/// Set up logging to stderr, or to a file when one is given
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .map_err(|e| anyhow::anyhow!("Failed to create log file {}: {}", path, e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;

    Ok(())
}
