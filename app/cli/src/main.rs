use anyhow::{Context, Result};
use bench_compare::{emit, scan, DiscoveryStats, ReportConfig, ReportError};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Generate comparison tables from benchmark agregate_stat.log files
#[derive(Parser)]
#[command(name = "bench-compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Results directory [default: ../Results next to the executable]
    #[arg(short, long, value_name = "DIR")]
    results_dir: Option<PathBuf>,

    /// Table configuration file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the tables without writing CSV files
    #[arg(long)]
    no_csv: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print only the tables
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity flags
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up logging based on verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logging initialized at {} level", log_level);
}

/// Load the report configuration, falling back to the built-in tables
fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let config = match &cli.config {
        Some(path) => {
            info!("Loading table configuration from {}", path.display());
            ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?
        }
        None => ReportConfig::default(),
    };
    Ok(config.with_write_csv(!cli.no_csv))
}

/// Directory name looked up next to the tool when no root is given
const DEFAULT_RESULTS_DIR: &str = "Results";

/// Make `path` absolute without requiring it to exist
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(path))
}

/// `Results` beside the directory holding the executable
fn default_results_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the executable")?;
    let exe_dir = exe
        .parent()
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))?;
    let base = exe_dir.parent().unwrap_or(exe_dir);
    Ok(base.join(DEFAULT_RESULTS_DIR))
}

/// Resolve the results root from the command line or the tool location
fn resolve_results_dir(cli: &Cli) -> Result<PathBuf> {
    match &cli.results_dir {
        Some(dir) => absolute(dir),
        None => default_results_dir(),
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;
    let results_dir = resolve_results_dir(cli)?;
    debug!("Results directory: {}", results_dir.display());

    let progress = create_progress_bar(cli.quiet, "Scanning results");
    let scanned = scan(&config, &results_dir);
    progress.finish_and_clear();

    let discovery = match scanned {
        Ok(discovery) => discovery,
        Err(e) => return report_failure(e),
    };

    let mut stdout = io::stdout().lock();
    let summary = match emit(&config, &results_dir, discovery, &mut stdout) {
        Ok(summary) => summary,
        Err(e) => return report_failure(e),
    };
    drop(stdout);
    log_discovery(&summary.stats);

    if !cli.quiet {
        for path in &summary.csv_files {
            println!("\nSaved: {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print a report failure and map it to its exit code
fn report_failure(e: ReportError) -> Result<ExitCode> {
    match e {
        ReportError::ResultsDirNotFound { .. } | ReportError::NoResults { .. } => {
            println!("{}", e);
        }
        _ => error!("{}", e),
    }
    Ok(ExitCode::from(e.exit_code()))
}

fn log_discovery(stats: &DiscoveryStats) {
    debug!(
        "{} log files, {} runs, {} short paths, {} unreadable entries",
        stats.files_found, stats.entries, stats.skipped_short_paths, stats.walk_errors
    );
}

/// Create a spinner shown on stderr while the results tree is walked
fn create_progress_bar(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
