//! dwmbar - status bar generator for the dwm window manager.
//!
//! Provides:
//! - `collector` - `/proc`, `/sys`, sidecar-file and external-tool sampling
//! - `rates` - delta state for CPU jiffies and network byte counters
//! - `fmt` - unit tiering for rates, totals and percentages
//! - `bar` - Unicode block gauge renderer
//! - `segment` - styled status-line fragments (icons, color bytes, arrows)
//! - `widgets` - one segment builder per metric
//! - `compose` - per-mode layouts and per-segment degradation
//! - `mode` - the mode file shared with the key-binding script
//! - `sink` - where the composed status line goes
//! - `app` - the polling loop
//! - `config` - validated runtime settings

pub mod app;
pub mod bar;
pub mod collector;
pub mod compose;
pub mod config;
pub mod fmt;
pub mod mode;
pub mod rates;
pub mod segment;
pub mod sink;
pub mod widgets;
