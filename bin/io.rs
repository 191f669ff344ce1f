use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Lines, Read, Write};
use tracing::instrument;

/// A line oriented text interface.
#[derive(Debug)]
pub struct Io<W: Write, R: Read> {
    writer: W,
    reader: Lines<BufReader<R>>,
}

impl<W: Write, R: Read> Io<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Io {
            writer,
            reader: BufReader::new(reader).lines(),
        }
    }

    /// Receive the next non-blank line, or `None` once the input is exhausted.
    #[instrument(level = "trace", skip(self), ret, err)]
    pub fn recv(&mut self) -> io::Result<Option<String>> {
        for line in self.reader.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line.trim().to_string()));
            }
        }

        Ok(None)
    }

    /// Send a message, which may span several lines.
    #[instrument(level = "trace", skip(self, msg), err, fields(%msg))]
    pub fn send<T: Display>(&mut self, msg: T) -> io::Result<()> {
        writeln!(&mut self.writer, "{}", msg)
    }

    /// Flush the internal buffers.
    #[instrument(level = "trace", skip(self), err)]
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::empty, str};
    use test_strategy::proptest;

    #[proptest]
    fn recv_trims_lines(#[strategy("[a-z0-9, ]*[a-z0-9,][a-z0-9, ]*")] s: String) {
        let input = format!("{s}\n");
        let mut io = Io::new(empty(), input.as_bytes());
        assert_eq!(io.recv()?, Some(s.trim().to_string()));
        assert_eq!(io.recv()?, None);
    }

    #[test]
    fn recv_skips_blank_lines() {
        let mut io = Io::new(empty(), "\n  \nboard\n".as_bytes());
        assert_eq!(io.recv().unwrap(), Some("board".into()));
        assert_eq!(io.recv().unwrap(), None);
    }

    #[proptest]
    fn send_appends_line_break(s: String) {
        let mut buf = Vec::new();
        let mut io = Io::new(&mut buf, empty());
        io.send(&s)?;
        io.flush()?;
        drop(io);
        assert_eq!(str::from_utf8(&buf)?, format!("{s}\n"));
    }
}
