//! Confirmation prompt backed by the terminal

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::batch::Confirm;
use crate::error::Result;

/// Asks on the terminal, or reads one line from stdin when it is piped.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let answer = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        ask_line(prompt, &mut io::stdin().lock(), &mut io::stdout())
    }
}

/// Write `prompt` on the current line and read a single answer line.
fn ask_line<R, W>(prompt: &str, input: &mut R, output: &mut W) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}: ", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
