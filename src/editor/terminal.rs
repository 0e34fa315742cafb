//! Line-oriented console I/O
//!
//! Wraps a buffered reader and a writer so the editor can be driven by
//! stdin/stdout or by scripted input in tests.

use crate::error::{CommandError, CommandResult};
use std::io::{self, BufRead, Write};

/// Console used by the editor and its commands
pub struct Terminal<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Terminal<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Read one line with trailing whitespace removed; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than failing the
    /// read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        line.truncate(line.trim_end().len());
        Ok(Some(line))
    }

    /// Write text without a newline and flush it
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write a line of text
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Show a prompt and read the reply
    pub fn prompt(&mut self, text: &str) -> CommandResult<String> {
        self.print(text)?;
        self.read_line()?.ok_or(CommandError::InputClosed)
    }

    /// Prompt for a single value until `accept` is satisfied
    ///
    /// Each reply is converted with `parse`; rejected values re-prompt with
    /// the same text. Fails only if the input ends.
    pub fn prompt_value<T>(
        &mut self,
        text: &str,
        parse: impl Fn(&str) -> T,
        accept: impl Fn(&T) -> bool,
    ) -> CommandResult<T> {
        loop {
            let reply = self.prompt(text)?;
            let value = parse(&reply);
            if accept(&value) {
                return Ok(value);
            }
            tracing::trace!(reply = %reply, "Value rejected, prompting again");
        }
    }
}

/// Lenient base-10 integer parse
///
/// Skips leading whitespace, takes an optional sign and as many digits as
/// follow. Text without digits is 0; out-of-range values saturate.
pub fn parse_long(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
