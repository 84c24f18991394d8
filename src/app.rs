//! The render loop.

use std::fmt;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use tracing::{debug, info};

use crate::collector::{CommandRunner, FileSystem};
use crate::compose::Composer;
use crate::mode::{ModeController, ModeError, ModeValue};
use crate::sink::StatusSink;

/// Published when the loop dies on a fatal error.
pub const FATAL_STATUS: &str = "\x04Exception at the main loop. Abort.";

const SLEEP_SLICE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    pub interval: Duration,
    /// Stop after this many published ticks.
    pub max_ticks: Option<u64>,
}

/// Why the loop ended without an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    /// The mode file named a mode without a layout.
    UnknownMode(ModeValue),
    Shutdown,
    TickLimit,
}

#[derive(Debug)]
pub enum LoopError {
    ModeFile(ModeError),
    Sink(io::Error),
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::ModeFile(e) => write!(f, "{}", e),
            LoopError::Sink(e) => write!(f, "failed to publish status: {}", e),
        }
    }
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoopError::ModeFile(e) => Some(e),
            LoopError::Sink(e) => Some(e),
        }
    }
}

impl From<ModeError> for LoopError {
    fn from(e: ModeError) -> Self {
        LoopError::ModeFile(e)
    }
}

/// Sleeps for `duration`, waking early once `running` is cleared.
fn sleep_while_running(duration: Duration, running: &AtomicBool) {
    let mut remaining = duration;
    while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
        let sleep_time = remaining.min(SLEEP_SLICE);
        std::thread::sleep(sleep_time);
        remaining = remaining.saturating_sub(sleep_time);
    }
}

/// Runs ticks until shutdown, an unknown mode, or the tick limit.
///
/// The start mode is written to the mode file first. Sampler baselines are
/// taken one interval before the first tick, so the first rendered rates
/// cover a full interval. After each tick the mode file is re-read;
/// `restart` resets the samplers, writes the start mode again and waits
/// one more interval. Blank content keeps the current mode, as seen while
/// another process rewrites the file.
pub fn run<F, R, S>(
    composer: &mut Composer<F, R>,
    modes: &ModeController,
    sink: &mut S,
    running: &AtomicBool,
    opts: &LoopOptions,
) -> Result<LoopExit, LoopError>
where
    F: FileSystem + Clone,
    R: CommandRunner,
    S: StatusSink + ?Sized,
{
    composer.prime();
    let mut mode = modes.write_start()?;
    let mut ticks: u64 = 0;

    info!("Starting render loop in mode {}", mode);
    sleep_while_running(opts.interval, running);

    loop {
        if !running.load(Ordering::SeqCst) {
            return Ok(LoopExit::Shutdown);
        }

        let Some(status) = composer.compose(mode, Local::now()) else {
            info!("Mode {} has no layout, exiting", mode);
            return Ok(LoopExit::UnknownMode(ModeValue::Mode(mode)));
        };
        sink.publish(&status).map_err(LoopError::Sink)?;
        ticks += 1;

        if opts.max_ticks.is_some_and(|max| ticks >= max) {
            return Ok(LoopExit::TickLimit);
        }

        sleep_while_running(opts.interval, running);
        if !running.load(Ordering::SeqCst) {
            return Ok(LoopExit::Shutdown);
        }

        mode = match modes.read()? {
            ModeValue::Mode(m) => {
                if m != mode {
                    debug!("Mode changed: {} -> {}", mode, m);
                }
                m
            }
            ModeValue::Restart => {
                info!("Restart requested, resetting samplers");
                composer.reset();
                let start = modes.write_start()?;
                sleep_while_running(opts.interval, running);
                start
            }
            ModeValue::Empty => {
                debug!("Mode file is empty, keeping mode {}", mode);
                mode
            }
            other @ ModeValue::Unknown(_) => {
                info!("Mode file holds {}, exiting", other);
                return Ok(LoopExit::UnknownMode(other));
            }
        };
    }
}
