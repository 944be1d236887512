use std::io::{BufRead, Write};
use crate::error::SessionError;

/// Line-oriented terminal the session talks through.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), SessionError> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show `message` without a newline and read the answer.
    pub fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    /// Prompt for a whole number.
    pub fn prompt_number(&mut self, message: &str) -> Result<i64, SessionError> {
        let answer = self.prompt(message)?;
        answer
            .trim()
            .parse()
            .map_err(|_| SessionError::MalformedNumericInput(answer.trim().to_string()))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
