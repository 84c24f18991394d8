//! Display mode stored in a small shared file.
//!
//! The file holds a single integer, or the word `restart`. Keybindings in
//! the window manager run `dwmbar next` / `dwmbar prev` to rewrite it; the
//! running loop re-reads it after every tick.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

/// Mode file content that asks the loop to reset itself.
pub const RESTART_SENTINEL: &str = "restart";

/// Decoded mode file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeValue {
    Mode(u8),
    Restart,
    /// Blank file, as caught between truncate and write by a writer that
    /// does not replace the file atomically.
    Empty,
    Unknown(String),
}

impl ModeValue {
    pub fn parse(content: &str) -> Self {
        let content = content.trim();
        if content.is_empty() {
            return ModeValue::Empty;
        }
        if content == RESTART_SENTINEL {
            return ModeValue::Restart;
        }
        match content.parse::<u8>() {
            Ok(mode) => ModeValue::Mode(mode),
            Err(_) => ModeValue::Unknown(content.to_string()),
        }
    }
}

impl fmt::Display for ModeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeValue::Mode(m) => write!(f, "{}", m),
            ModeValue::Restart => f.write_str(RESTART_SENTINEL),
            ModeValue::Empty => f.write_str("<empty>"),
            ModeValue::Unknown(s) => write!(f, "{:?}", s),
        }
    }
}

/// Direction of a mode change requested from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// A command-line word that is neither `next` nor `prev`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Step {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" => Ok(Step::Next),
            "prev" => Ok(Step::Prev),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Inclusive range the `next`/`prev` commands cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRange {
    pub min: u8,
    pub max: u8,
}

impl ModeRange {
    pub fn contains(&self, mode: u8) -> bool {
        (self.min..=self.max).contains(&mode)
    }

    /// Next mode, wrapping past `max` to `min`.
    pub fn next(&self, mode: u8) -> u8 {
        if mode >= self.max || mode < self.min {
            self.min
        } else {
            mode + 1
        }
    }

    /// Previous mode, wrapping below `min` to `max`.
    pub fn prev(&self, mode: u8) -> u8 {
        if mode <= self.min || mode > self.max {
            self.max
        } else {
            mode - 1
        }
    }

    pub fn step(&self, mode: u8, step: Step) -> u8 {
        match step {
            Step::Next => self.next(mode),
            Step::Prev => self.prev(mode),
        }
    }
}

/// Error accessing the mode file.
#[derive(Debug)]
pub enum ModeError {
    Io(io::Error),
    /// The file holds something `next`/`prev` cannot step from.
    Invalid(String),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::Io(e) => write!(f, "mode file I/O error: {}", e),
            ModeError::Invalid(s) => write!(f, "mode file holds {:?}, not a mode", s),
        }
    }
}

impl std::error::Error for ModeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModeError::Io(e) => Some(e),
            ModeError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ModeError {
    fn from(e: io::Error) -> Self {
        ModeError::Io(e)
    }
}

/// Reads and writes the mode file.
#[derive(Debug, Clone)]
pub struct ModeController {
    path: PathBuf,
    range: ModeRange,
    start: u8,
}

impl ModeController {
    pub fn new(path: impl Into<PathBuf>, range: ModeRange, start: u8) -> Self {
        Self {
            path: path.into(),
            range,
            start,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn start_mode(&self) -> u8 {
        self.start
    }

    pub fn read(&self) -> Result<ModeValue, ModeError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(ModeValue::parse(&content))
    }

    /// Replaces the file through a sibling temp file and `rename`, so a
    /// concurrent reader sees either the old or the new mode.
    pub fn write(&self, mode: u8) -> Result<(), ModeError> {
        let tmp = self.tmp_path();
        fs::write(&tmp, mode.to_string())?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!("Mode file {} set to {}", self.path.display(), mode);
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Writes the start mode and returns it.
    pub fn write_start(&self) -> Result<u8, ModeError> {
        self.write(self.start)?;
        Ok(self.start)
    }

    /// Applies `step` to the stored mode and writes the result back.
    ///
    /// A pending `restart` or a blank file counts as the start mode.
    /// Unrecognized content is an error and leaves the file untouched.
    pub fn step(&self, step: Step) -> Result<u8, ModeError> {
        let current = match self.read()? {
            ModeValue::Mode(m) => m,
            ModeValue::Restart | ModeValue::Empty => self.start,
            ModeValue::Unknown(s) => return Err(ModeError::Invalid(s)),
        };
        let mode = self.range.step(current, step);
        self.write(mode)?;
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RANGE: ModeRange = ModeRange { min: 1, max: 3 };

    fn controller(dir: &TempDir, content: Option<&str>) -> ModeController {
        let path = dir.path().join("mode.dat");
        if let Some(content) = content {
            fs::write(&path, content).unwrap();
        }
        ModeController::new(path, RANGE, 1)
    }

    #[test]
    fn parse_values() {
        assert_eq!(ModeValue::parse("2"), ModeValue::Mode(2));
        assert_eq!(ModeValue::parse(" 3\n"), ModeValue::Mode(3));
        assert_eq!(ModeValue::parse("restart\n"), ModeValue::Restart);
        assert_eq!(ModeValue::parse("abc"), ModeValue::Unknown("abc".to_string()));
        assert_eq!(ModeValue::parse(""), ModeValue::Empty);
        assert_eq!(ModeValue::parse(" \n"), ModeValue::Empty);
    }

    #[test]
    fn step_words() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!("prev".parse::<Step>(), Ok(Step::Prev));
        assert_eq!(
            "foo".parse::<Step>(),
            Err(UnknownCommand("foo".to_string()))
        );
    }

    #[test]
    fn range_wraps() {
        assert_eq!(RANGE.next(1), 2);
        assert_eq!(RANGE.next(3), 1);
        assert_eq!(RANGE.prev(1), 3);
        assert_eq!(RANGE.prev(2), 1);
        // Out-of-range values step back into the range.
        assert_eq!(RANGE.next(9), 1);
        assert_eq!(RANGE.prev(9), 3);
        assert_eq!(RANGE.prev(0), 3);
        assert!(RANGE.contains(3));
        assert!(!RANGE.contains(4));
    }

    #[test]
    fn next_at_max_wraps_to_min() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some("3"));
        assert_eq!(modes.step(Step::Next).unwrap(), 1);
        assert_eq!(fs::read_to_string(modes.path()).unwrap(), "1");
    }

    #[test]
    fn prev_at_min_wraps_to_max() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some("1"));
        assert_eq!(modes.step(Step::Prev).unwrap(), 3);
        assert_eq!(modes.read().unwrap(), ModeValue::Mode(3));
    }

    #[test]
    fn step_from_restart_uses_start_mode() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some(RESTART_SENTINEL));
        assert_eq!(modes.step(Step::Next).unwrap(), 2);
    }

    #[test]
    fn invalid_content_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some("garbage"));
        assert!(matches!(modes.step(Step::Next), Err(ModeError::Invalid(_))));
        assert_eq!(fs::read_to_string(modes.path()).unwrap(), "garbage");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, None);
        assert!(matches!(modes.read(), Err(ModeError::Io(_))));
        assert_eq!(modes.write_start().unwrap(), 1);
        assert_eq!(modes.read().unwrap(), ModeValue::Mode(1));
    }

    #[test]
    fn write_replaces_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some("1"));
        modes.write(3).unwrap();

        assert_eq!(modes.read().unwrap(), ModeValue::Mode(3));
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("mode.dat")]);
    }

    #[test]
    fn step_from_blank_file_uses_start_mode() {
        let dir = TempDir::new().unwrap();
        let modes = controller(&dir, Some(""));
        assert_eq!(modes.step(Step::Prev).unwrap(), 3);
    }
}
