//! Segment builders, one module per kind of segment.
//!
//! Every builder takes the sampler result as-is and decides what to show:
//! the reading, a placeholder text, or nothing at all. Failures are logged
//! at `debug` and never propagate past the widget.

pub mod battery;
pub mod clock;
pub mod cpu;
pub mod memory;
pub mod music;
pub mod network;
pub mod temps;
pub mod volume;
pub mod weather;

/// Facts shared between the segments of one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickContext {
    /// A battery gauge was drawn this tick; other segments drop their bars
    /// to keep the status line short.
    pub battery_bar_shown: bool,
}
