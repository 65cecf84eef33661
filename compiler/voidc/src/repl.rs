//! Line-at-a-time evaluation loop.

use std::io::{self, BufRead, Write};

use tracing::debug;
use void_eval::Session;

const PROMPT: &str = ">> ";

/// Input line that ends the loop.
const EXIT: &str = "exit";

/// Read lines from `input` until end of input or `exit`, evaluating each in
/// `session` and writing its inspect form to `output`.
pub fn run(
    session: &mut Session,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim() == EXIT {
            debug!("exit requested");
            return Ok(());
        }

        let value = session.evaluate(source);
        writeln!(output, "{value}")?;
    }
}

#[cfg(test)]
mod tests;
