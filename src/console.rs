use std::io::{BufRead, Write};

use crate::error::LotteryError;

const CLEAR_SEQUENCE: &str = "\x1b[H\x1b[2J";

/// Line based console over any reader/writer pair, stdin/stdout in the binary
/// and in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Console {
            input,
            output,
            clear_screen,
        }
    }

    /// Reads one line without its line ending. End of input is an error: the
    /// game can't make progress without the player. Invalid UTF-8 is replaced
    /// rather than rejected, so it reaches the caller as ordinary bad input.
    pub fn read_line(&mut self) -> Result<String, LotteryError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(LotteryError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn say(&mut self, text: &str) -> Result<(), LotteryError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes text without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: &str) -> Result<(), LotteryError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), LotteryError> {
        if self.clear_screen {
            self.prompt(CLEAR_SEQUENCE)?;
        }
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
