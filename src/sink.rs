//! Where the finished status line goes.

use std::io::{self, Write};

use crate::collector::CommandRunner;

/// Receives one status line per tick.
pub trait StatusSink {
    fn publish(&mut self, status: &str) -> io::Result<()>;
}

/// Sets the X root window name, which dwm draws as its status text.
pub struct RootWindowSink<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> RootWindowSink<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> StatusSink for RootWindowSink<R> {
    fn publish(&mut self, status: &str) -> io::Result<()> {
        self.runner.run("xsetroot", &["-name", status]).map(|_| ())
    }
}

/// Writes one line per status, for terminals and pipes.
pub struct StdoutSink<W: Write> {
    out: W,
}

impl<W: Write> StdoutSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> StatusSink for StdoutSink<W> {
    fn publish(&mut self, status: &str) -> io::Result<()> {
        writeln!(self.out, "{}", status)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockRunner;

    #[test]
    fn root_window_runs_xsetroot() {
        let mut runner = MockRunner::new();
        runner.add_output("xsetroot -name \x07hi", "");
        let mut sink = RootWindowSink::new(runner);
        sink.publish("\x07hi").unwrap();
        assert_eq!(sink.runner.calls(), vec!["xsetroot -name \x07hi".to_string()]);
    }

    #[test]
    fn root_window_reports_missing_xsetroot() {
        let mut sink = RootWindowSink::new(MockRunner::new());
        let err = sink.publish("status").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn stdout_one_line_per_status() {
        let mut sink = StdoutSink::new(Vec::new());
        sink.publish("a").unwrap();
        sink.publish("b").unwrap();
        assert_eq!(sink.out, b"a\nb\n");
    }
}
