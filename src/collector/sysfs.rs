//! Battery state from `/sys/class/power_supply`.
//!
//! Each supply is a directory holding one value per file:
//!
//! ```text
//! /sys/class/power_supply/BAT0/type      Battery
//! /sys/class/power_supply/BAT0/status    Discharging
//! /sys/class/power_supply/BAT0/capacity  57
//! /sys/class/power_supply/AC/type        Mains
//! ```

use crate::collector::error::SampleError;
use crate::collector::procfs::parser::ParseError;
use crate::collector::traits::FileSystem;
use std::path::{Path, PathBuf};

/// Charging state reported in the `status` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryState {
    Charging,
    Discharging,
    Full,
    NotCharging,
    Unknown,
}

/// One battery reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryInfo {
    pub name: String,
    pub percent: u8,
    pub state: BatteryState,
}

/// Parses the content of a supply's `status` file.
pub fn parse_battery_state(content: &str) -> BatteryState {
    match content.trim() {
        "Charging" => BatteryState::Charging,
        "Discharging" => BatteryState::Discharging,
        "Full" => BatteryState::Full,
        "Not charging" => BatteryState::NotCharging,
        _ => BatteryState::Unknown,
    }
}

/// Parses the content of a supply's `capacity` file, clamped to 100.
pub fn parse_capacity(content: &str) -> Result<u8, ParseError> {
    let value: u32 = content
        .trim()
        .parse()
        .map_err(|_| ParseError::new(format!("invalid capacity {:?}", content.trim())))?;
    Ok(value.min(100) as u8)
}

/// Finds and reads the first battery under `<sys_path>/class/power_supply`.
#[derive(Debug, Clone)]
pub struct PowerSupplyCollector<F: FileSystem> {
    fs: F,
    supply_dir: PathBuf,
}

impl<F: FileSystem> PowerSupplyCollector<F> {
    pub fn new(fs: F, sys_path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            supply_dir: sys_path.as_ref().join("class").join("power_supply"),
        }
    }

    /// Returns the first battery found, or `None` on machines without one.
    pub fn collect_battery(&self) -> Result<Option<BatteryInfo>, SampleError> {
        if !self.fs.exists(&self.supply_dir) {
            return Ok(None);
        }

        let mut supplies = self.fs.read_dir(&self.supply_dir)?;
        supplies.sort();

        for dir in supplies {
            let is_battery = self
                .fs
                .read_to_string(&dir.join("type"))
                .map(|t| t.trim() == "Battery")
                .unwrap_or(false);
            if !is_battery || !self.fs.exists(&dir.join("capacity")) {
                continue;
            }

            let percent = parse_capacity(&self.fs.read_to_string(&dir.join("capacity"))?)?;
            let state = self
                .fs
                .read_to_string(&dir.join("status"))
                .map(|s| parse_battery_state(&s))
                .unwrap_or(BatteryState::Unknown);
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            return Ok(Some(BatteryInfo {
                name,
                percent,
                state,
            }));
        }

        Ok(None)
    }
}
