//! dwmbar - status bar generator for dwm.
//!
//! Without a command, renders the status line into the X root window name
//! once per interval. `dwmbar next` / `dwmbar prev` switch the display mode
//! of a running instance through the mode file and exit.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use dwmbar::app::{self, FATAL_STATUS, LoopExit, LoopOptions};
use dwmbar::collector::{Collector, RealFs, RealRunner, SourcePaths};
use dwmbar::compose::{Composer, STATUS_PADDING};
use dwmbar::config::{
    Config, DEFAULT_INTERFACES_FILE, DEFAULT_MAX_MODE, DEFAULT_MIN_MODE, DEFAULT_MODE_FILE,
    DEFAULT_START_MODE, DEFAULT_WX_LOG, SinkKind,
};
use dwmbar::mode::{ModeController, ModeRange, Step};
use dwmbar::sink::{RootWindowSink, StatusSink, StdoutSink};

const USAGE_ERROR: &str = "unknown usage option. abort.";

/// Status bar generator for dwm.
#[derive(Parser)]
#[command(name = "dwmbar", about = "Status bar generator for dwm", version)]
struct Args {
    /// `next` or `prev` to switch the mode of a running instance.
    command: Option<String>,

    /// Refresh interval in seconds.
    #[arg(short, long, default_value = "1")]
    interval: u64,

    /// File holding the current display mode.
    #[arg(long, default_value = DEFAULT_MODE_FILE)]
    mode_file: PathBuf,

    /// Weather log maintained by the weather script.
    #[arg(long, default_value = DEFAULT_WX_LOG)]
    wx_log: PathBuf,

    /// Connected-interfaces file maintained by the network script.
    #[arg(long, default_value = DEFAULT_INTERFACES_FILE)]
    interfaces_file: PathBuf,

    /// Path to /proc filesystem (for testing/mocking).
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Path to /sys filesystem (for testing/mocking).
    #[arg(long, default_value = "/sys")]
    sys_path: PathBuf,

    /// Lowest mode `next`/`prev` cycle through.
    #[arg(long, default_value_t = DEFAULT_MIN_MODE)]
    min_mode: u8,

    /// Highest mode `next`/`prev` cycle through.
    #[arg(long, default_value_t = DEFAULT_MAX_MODE)]
    max_mode: u8,

    /// Mode written to the mode file on start and on restart.
    #[arg(long, default_value_t = DEFAULT_START_MODE)]
    start_mode: u8,

    /// Print status lines to stdout instead of setting the root window name.
    #[arg(long)]
    stdout: bool,

    /// Render a single status line and exit.
    #[arg(long)]
    once: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            interval: Duration::from_secs(self.interval),
            mode_file: self.mode_file.clone(),
            sources: SourcePaths {
                proc_path: self.proc_path.clone(),
                sys_path: self.sys_path.clone(),
                wx_log: self.wx_log.clone(),
                interfaces_file: self.interfaces_file.clone(),
            },
            modes: ModeRange {
                min: self.min_mode,
                max: self.max_mode,
            },
            start_mode: self.start_mode,
            sink: if self.stdout {
                SinkKind::Stdout
            } else {
                SinkKind::RootWindow
            },
            once: self.once,
        }
    }
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Logs go to stderr so `--stdout` output stays clean.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("dwmbar={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Bad flags and extra arguments; `--help` and `--version` are not.
fn is_usage_error(e: &clap::Error) -> bool {
    !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Handles `next` / `prev`.
fn run_command(command: &str, modes: &ModeController) -> ExitCode {
    let step = match command.parse::<Step>() {
        Ok(step) => step,
        Err(_) => {
            println!("{}", USAGE_ERROR);
            return ExitCode::FAILURE;
        }
    };

    match modes.step(step) {
        Ok(mode) => {
            info!("Mode set to {}", mode);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Cannot switch mode: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_usage_error(&e) => {
            println!("{}", USAGE_ERROR);
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    init_logging(args.verbose, args.quiet);

    let config = match args.config().validate() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let modes = ModeController::new(&config.mode_file, config.modes, config.start_mode);

    if let Some(command) = &args.command {
        return run_command(command, &modes);
    }

    info!("dwmbar {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: interval={}s, modes={}..={}, mode_file={}",
        config.interval.as_secs(),
        config.modes.min,
        config.modes.max,
        config.mode_file.display()
    );

    let collector = Collector::new(RealFs::new(), RealRunner::new(), config.sources.clone());
    let mut composer = Composer::new(collector);

    let mut sink: Box<dyn StatusSink> = match config.sink {
        SinkKind::RootWindow => Box::new(RootWindowSink::new(RealRunner::new())),
        SinkKind::Stdout => Box::new(StdoutSink::new(io::stdout())),
    };

    // Setup graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let opts = LoopOptions {
        interval: config.interval,
        max_ticks: config.once.then_some(1),
    };

    match app::run(&mut composer, &modes, sink.as_mut(), &running, &opts) {
        Ok(LoopExit::UnknownMode(mode)) => {
            info!("Stopped on mode {}", mode);
            ExitCode::SUCCESS
        }
        Ok(LoopExit::Shutdown) => {
            info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Ok(LoopExit::TickLimit) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Render loop failed: {}", e);
            if let Err(e) = sink.publish(&format!("{}{}", FATAL_STATUS, STATUS_PADDING)) {
                warn!("Could not publish failure status: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flag_is_usage_error() {
        let err = Args::try_parse_from(["dwmbar", "--bogus"]).err().unwrap();
        assert!(is_usage_error(&err));
    }

    #[test]
    fn second_positional_is_usage_error() {
        let err = Args::try_parse_from(["dwmbar", "next", "extra"]).err().unwrap();
        assert!(is_usage_error(&err));
    }

    #[test]
    fn help_and_version_are_not_usage_errors() {
        let err = Args::try_parse_from(["dwmbar", "--help"]).err().unwrap();
        assert!(!is_usage_error(&err));
        let err = Args::try_parse_from(["dwmbar", "--version"]).err().unwrap();
        assert!(!is_usage_error(&err));
    }

    #[test]
    fn command_word_parses() {
        let args = Args::try_parse_from(["dwmbar", "next", "--stdout"]).unwrap();
        assert_eq!(args.command.as_deref(), Some("next"));
        assert!(args.config().validate().is_ok());
    }
}
