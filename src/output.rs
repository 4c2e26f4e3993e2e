//! Write trait abstractions for the timing report and diagnostics.

use std::{
    fmt::{self, Debug, Formatter},
    fs::File,
    io::{self, ErrorKind::BrokenPipe, LineWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

/// `Writer` dynamic dispatches the `Write` trait.
pub type Writer = Box<dyn Write>;

/// `Output` writes to either a file or a stream like stdout or stderr.
pub struct Output {
    writer: Writer,
}

impl Debug for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("writer", &"<dyn Write>")
            .finish()
    }
}

impl Default for Output {
    /// Default output is stdout
    fn default() -> Self {
        Self::stdout()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Output {
    /// Creates an `Output` from optional arguments, choosing between file or stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn new(output: Option<&Path>) -> Result<Self> {
        match output {
            Some(path) if path == Path::new("-") => Ok(Self::stdout()),
            Some(path) => Self::file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Creates an `Output` that writes to a file with error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .map(|file| -> Writer { Box::new(LineWriter::new(file)) })
            .with_context(|| format!("failed to create output file: {}", path.display()))?;

        Ok(Self { writer: file })
    }

    /// Creates an `Output` that writes to stdout.
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout().lock()),
        }
    }

    /// Creates an `Output` that writes to stderr.
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr().lock()),
        }
    }

    /// Creates an `Output` from a writer.
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    /// Writes a line to the writer, handling `BrokenPipe` errors gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error on write failures other than a broken pipe.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        Self::handle_broken_pipe(self.writer.write_all(line.as_bytes()))
    }

    /// Flushes the writer, ensuring all output is written.
    ///
    /// # Errors
    ///
    /// Returns an error on flush failures other than a broken pipe.
    pub fn flush(&mut self) -> Result<()> {
        Self::handle_broken_pipe(self.writer.flush())
    }

    /// Processes the result of a write, handling `BrokenPipe` errors gracefully.
    fn handle_broken_pipe(result: io::Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                BrokenPipe => Ok(()),
                _ => Err(err.into()),
            },
        }
    }
}
