//! Runtime configuration and its defaults.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::collector::SourcePaths;
use crate::compose::LAYOUT_COUNT;
use crate::mode::ModeRange;

/// Shared with the window manager keybindings; keep in sync with them.
pub const DEFAULT_MODE_FILE: &str = "/tmp/DWM_statusbar_mode.dat";
/// Maintained by the weather fetch script.
pub const DEFAULT_WX_LOG: &str = "/data/.tmp/tartu_wx_log.txt";
/// Maintained by the network-manager dispatcher script.
pub const DEFAULT_INTERFACES_FILE: &str = "/tmp/connected_interfaces.dat";

pub const DEFAULT_MIN_MODE: u8 = 1;
pub const DEFAULT_MAX_MODE: u8 = LAYOUT_COUNT;
pub const DEFAULT_START_MODE: u8 = 1;

/// Where status lines are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkKind {
    #[default]
    RootWindow,
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interval: Duration,
    pub mode_file: PathBuf,
    pub sources: SourcePaths,
    pub modes: ModeRange,
    pub start_mode: u8,
    pub sink: SinkKind,
    /// Render a single tick and exit.
    pub once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            mode_file: PathBuf::from(DEFAULT_MODE_FILE),
            sources: SourcePaths::default(),
            modes: ModeRange {
                min: DEFAULT_MIN_MODE,
                max: DEFAULT_MAX_MODE,
            },
            start_mode: DEFAULT_START_MODE,
            sink: SinkKind::default(),
            once: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ModeRange { min: u8, max: u8 },
    StartMode { start: u8, min: u8, max: u8 },
    ZeroInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ModeRange { min, max } => write!(
                f,
                "invalid mode range {}..={} (modes 1..={} exist)",
                min, max, LAYOUT_COUNT
            ),
            ConfigError::StartMode { start, min, max } => {
                write!(f, "start mode {} is outside {}..={}", start, min, max)
            }
            ConfigError::ZeroInterval => write!(f, "interval must be at least one second"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Checks the mode range against the available layouts and the
    /// interval against the loop mode.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let ModeRange { min, max } = self.modes;
        if min < 1 || max > LAYOUT_COUNT || min > max {
            return Err(ConfigError::ModeRange { min, max });
        }
        if !self.modes.contains(self.start_mode) {
            return Err(ConfigError::StartMode {
                start: self.start_mode,
                min,
                max,
            });
        }
        if self.interval.is_zero() && !self.once {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default().validate().unwrap();
        assert_eq!(config.modes, ModeRange { min: 1, max: 4 });
        assert_eq!(config.mode_file, PathBuf::from("/tmp/DWM_statusbar_mode.dat"));
        assert_eq!(config.sink, SinkKind::RootWindow);
    }

    #[test]
    fn mode_range_must_fit_layouts() {
        let config = Config {
            modes: ModeRange { min: 0, max: 3 },
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ModeRange { min: 0, max: 3 }));

        let config = Config {
            modes: ModeRange { min: 1, max: 9 },
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            modes: ModeRange { min: 3, max: 2 },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn start_mode_inside_range() {
        let config = Config {
            modes: ModeRange { min: 2, max: 3 },
            start_mode: 1,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartMode {
                start: 1,
                min: 2,
                max: 3
            })
        );
    }

    #[test]
    fn zero_interval_only_for_single_tick() {
        let config = Config {
            interval: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(config.clone().validate(), Err(ConfigError::ZeroInterval));
        assert!(Config { once: true, ..config }.validate().is_ok());
    }
}
