//! Collectors for Linux `/proc` filesystem.
//!
//! This module provides parsers and collectors for reading system
//! information from the `/proc` virtual filesystem.

pub mod parser;
pub mod system;

pub use parser::ParseError;
pub use system::SystemCollector;
