//! Output sinks the pattern demos write their lines to

use std::io::{self, Write};

/// Line-oriented destination for demo output
pub trait OutputSink {
    /// Write one line of text; the sink appends the line terminator
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Writes to the process's standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutSink {
    fn line(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)
    }
}

/// Collects lines in memory
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for BufferSink {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}

/// Adapts any [`io::Write`] into an [`OutputSink`]
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn line(&mut self, text: &str) -> io::Result<()> {
        (**self).line(text)
    }
}
