//! Scripted stand-in for external programs.

use crate::collector::traits::CommandRunner;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

/// Returns canned output per command line and records every invocation.
///
/// Command lines are keyed as the program followed by its arguments, joined
/// with single spaces (`"amixer get Master"`). Unknown command lines behave
/// like a program that is not installed.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    outputs: HashMap<String, Result<String, String>>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful run.
    pub fn add_output(&mut self, command_line: impl Into<String>, stdout: impl Into<String>) {
        self.outputs
            .insert(command_line.into(), Ok(stdout.into()));
    }

    /// Scripts a run that exits with a failure status.
    pub fn add_failure(&mut self, command_line: impl Into<String>, message: impl Into<String>) {
        self.outputs
            .insert(command_line.into(), Err(message.into()));
    }

    /// Forgets a scripted command, making it "not installed".
    pub fn remove(&mut self, command_line: &str) {
        self.outputs.remove(command_line);
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let mut command_line = program.to_string();
        for arg in args {
            command_line.push(' ');
            command_line.push_str(arg);
        }
        self.calls.borrow_mut().push(command_line.clone());

        match self.outputs.get(&command_line) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(message)) => Err(io::Error::other(message.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", program),
            )),
        }
    }
}
