use std::fmt;
use std::io::{self, Write};

/// Receives the one-line progress signals of a fetch or clean run.
pub trait Reporter {
    fn begin_fetch(&mut self);
    fn fetching(&mut self, name: &str);
    fn fetched(&mut self, output: &str);
    fn failed(&mut self, name: &str);
    fn begin_clean(&mut self);
    fn removed(&mut self, output: &str);
    fn done(&mut self);
}

/// Renders progress in the plain console format:
///
/// ```text
/// Fetching documentation packages...
///   Fetching: <name>
///     -> <output>
///     FAILED: <name>
/// Done.
/// ```
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        let result = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(err) = result {
            tracing::debug!("Failed to write progress line: {}", err);
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn begin_fetch(&mut self) {
        self.line(format_args!("Fetching documentation packages..."));
    }

    fn fetching(&mut self, name: &str) {
        self.line(format_args!("  Fetching: {name}"));
    }

    fn fetched(&mut self, output: &str) {
        self.line(format_args!("    -> {output}"));
    }

    fn failed(&mut self, name: &str) {
        self.line(format_args!("    FAILED: {name}"));
    }

    fn begin_clean(&mut self) {
        self.line(format_args!("Cleaning documentation packages..."));
    }

    fn removed(&mut self, output: &str) {
        self.line(format_args!("  Removed: {output}"));
    }

    fn done(&mut self) {
        self.line(format_args!("Done."));
    }
}
