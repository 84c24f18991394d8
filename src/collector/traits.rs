//! Abstractions over the places samples come from.
//!
//! `FileSystem` covers `/proc`, `/sys` and the sidecar files written by other
//! scripts. `CommandRunner` covers the external tools (`amixer`, `mpc`,
//! `sensors`, ...). Both have in-memory counterparts in [`super::mock`] so the
//! samplers can be exercised without a real desktop session.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Abstraction for read-only filesystem access.
pub trait FileSystem {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Lists entries in a directory.
    ///
    /// # Returns
    /// A vector of paths to entries in the directory, or an I/O error.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path)?;
        let mut paths = Vec::new();
        for entry in entries {
            paths.push(entry?.path());
        }
        Ok(paths)
    }
}

/// Abstraction for running an external program and capturing its stdout.
pub trait CommandRunner {
    /// Runs `program` with `args` and returns its standard output.
    ///
    /// A program that cannot be spawned (not installed) surfaces as
    /// `io::ErrorKind::NotFound`; a non-zero exit status is an error too.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String>;
}

/// Runs programs through `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealRunner;

impl RealRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                program, output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
