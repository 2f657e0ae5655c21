//! Streaming plain-text formatter
//!
//! This module provides `PlainFormatter` which writes each rendered line
//! straight to the wrapped writer, for use with `TreeRenderer`.

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::tree::{TreeOutput, connector, human_size};

/// Plain-text output formatter. Names are written as their raw bytes, so
/// file names that are not valid UTF-8 come out unchanged.
pub struct PlainFormatter<W: Write> {
    writer: W,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TreeOutput for PlainFormatter<W> {
    fn output_root(&mut self, name: &OsStr) -> io::Result<()> {
        self.writer.write_all(name.as_encoded_bytes())?;
        writeln!(self.writer)
    }

    fn output_node(
        &mut self,
        name: &OsStr,
        is_last: bool,
        prefix: &str,
        size: Option<u64>,
    ) -> io::Result<()> {
        write!(self.writer, "{}{}", prefix, connector(is_last))?;
        self.writer.write_all(name.as_encoded_bytes())?;
        if let Some(bytes) = size {
            write!(self.writer, " ({})", human_size(bytes))?;
        }
        writeln!(self.writer)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
