//! Console input/output channel used by prompts

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented console channel
pub trait ConsoleIo {
    /// Write `content` without a trailing newline
    fn write(&mut self, content: &str) -> io::Result<()>;

    /// Write `content` followed by a newline; `""` writes a blank line
    fn writeln(&mut self, content: &str) -> io::Result<()>;

    /// Read one line with its terminator stripped
    fn read(&mut self) -> io::Result<String>;
}

/// [`ConsoleIo`] over any buffered reader and writer
pub struct StreamIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamIo<R, W> {
    /// Wrap a reader and writer
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamIo<StdinLock<'static>, Stdout> {
    /// Channel over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleIo for StreamIo<R, W> {
    fn write(&mut self, content: &str) -> io::Result<()> {
        self.writer.write_all(content.as_bytes())?;
        // Prompts must be visible before the read blocks
        self.writer.flush()
    }

    fn writeln(&mut self, content: &str) -> io::Result<()> {
        writeln!(self.writer, "{content}")?;
        self.writer.flush()
    }

    fn read(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was read",
            ));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
