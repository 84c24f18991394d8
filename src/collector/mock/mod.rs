//! In-memory sources for testing.
//!
//! `MockFs` stands in for `/proc`, `/sys` and the sidecar files, `MockRunner`
//! for the external tools. `scenarios` holds ready-made machine states.

mod filesystem;
mod runner;
mod scenarios;

pub use filesystem::MockFs;
pub use runner::MockRunner;
