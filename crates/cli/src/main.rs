//! LS-8 command-line runner.
//!
//! Loads a program image and executes it until `HLT`. It performs:
//! 1. **Argument parsing:** Exactly one image path, plus optional `--trace`, `--stats` and `--config`.
//! 2. **Logging setup:** `tracing` output goes to stderr so program output on stdout stays clean.
//! 3. **Exit policy:** 0 on halt, 2 if the image is missing, 1 for everything else.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use ls8_core::common::error::{EXIT_FAILURE, EXIT_SUCCESS};
use ls8_core::sim::loader;
use ls8_core::{Config, Cpu};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 virtual machine",
    long_about = "Run an LS-8 program image: one 8-digit binary literal per line, '#' starts a comment.\n\nExamples:\n  ls8 programs/print8.ls8\n  ls8 --trace programs/call.ls8\n  ls8 --stats --config ls8.json programs/mult.ls8"
)]
struct Cli {
    /// Program image to run.
    image: PathBuf,

    /// Log a trace line before every instruction (stderr).
    #[arg(long)]
    trace: bool,

    /// Print execution statistics after the program halts.
    #[arg(long)]
    stats: bool,

    /// JSON configuration file (reset PC/SP, tracing).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("usage: ls8 <image-file>");
            process::exit(EXIT_FAILURE);
        }
    };

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("ls8: {msg}");
            process::exit(EXIT_FAILURE);
        }
    };

    init_logging(config.general.trace_instructions);
    process::exit(run(&cli, &config));
}

/// Builds the log filter. Tracing forces `ls8_core=trace`; otherwise
/// `RUST_LOG` wins, falling back to `warn`.
fn log_filter(trace: bool) -> EnvFilter {
    if trace {
        EnvFilter::new("ls8_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Installs the stderr subscriber.
fn init_logging(trace: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(trace))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Loads the `--config` file, or the defaults, and folds `--trace` into it.
fn resolve_config(cli: &Cli) -> Result<Config, String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    Ok(config)
}

/// Loads the image, runs the program and returns the exit status.
fn run(cli: &Cli, config: &Config) -> i32 {
    tracing::debug!(image = %cli.image.display(), ?config, "starting");

    let image = match loader::load_image_file(&cli.image) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("ls8: {e}");
            return e.exit_code();
        }
    };

    let mut cpu = Cpu::new(config);
    if let Err(e) = cpu.load_image(&image) {
        eprintln!("ls8: {e}");
        return e.exit_code();
    }

    let status = match cpu.run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            if cpu.trace {
                cpu.dump_state();
            }
            e.exit_code()
        }
    };

    if cli.stats {
        cpu.stats.print();
    }
    status
}

/// Reads a JSON configuration file.
fn load_config(path: &Path) -> Result<Config, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("could not read {}: {e}", path.display()))?;
    Config::from_json(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}
