//! Metric samplers for the status bar.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Collector                           │
//! │  ┌────────────────┐ ┌──────────────────┐ ┌────────────────┐  │
//! │  │SystemCollector │ │PowerSupply       │ │ sidecar / tools│  │
//! │  │ /proc/stat     │ │ /sys/class/      │ │ parsers        │  │
//! │  │ /proc/meminfo  │ │   power_supply   │ │                │  │
//! │  │ /proc/net/dev  │ └────────┬─────────┘ └───┬────────┬───┘  │
//! │  └───────┬────────┘          │               │        │      │
//! │          └───────────┬───────┴───────────────┘        │      │
//! │                ┌─────▼──────┐                  ┌──────▼────┐ │
//! │                │ FileSystem │ (trait)          │ Command-  │ │
//! │                └─────┬──────┘                  │ Runner    │ │
//! └──────────────────────┼─────────────────────────┴─────┬─────┴─┘
//!               ┌────────┴───────┐                ┌──────┴──────┐
//!           RealFs            MockFs          RealRunner   MockRunner
//! ```
//!
//! The `Collector` also owns the delta state (`crate::rates`) for CPU and
//! network, so each tick only needs `&mut Collector`.
//!
//! # Usage
//!
//! ```
//! use dwmbar::collector::{Collector, MockFs, MockRunner, SourcePaths};
//!
//! let mut collector = Collector::new(
//!     MockFs::typical_laptop(),
//!     MockRunner::typical_laptop(),
//!     SourcePaths::default(),
//! );
//! collector.prime();
//! assert_eq!(collector.memory_percent().unwrap(), 25);
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod error;
pub mod mock;
pub mod procfs;
pub mod sidecar;
pub mod sysfs;
pub mod tools;
pub mod traits;

pub use collector::{Collector, NetworkReading, SourcePaths};
pub use error::SampleError;
pub use mock::{MockFs, MockRunner};
pub use traits::{CommandRunner, FileSystem, RealFs, RealRunner};
