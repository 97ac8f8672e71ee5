//! Interactive command loop for the assistant bot.
//!
//! Reads one command per line and writes one reply per command. The loop
//! ends on `exit`/`close` or at end of input.

pub mod handlers;
pub mod parser;

pub use handlers::{AssistantBot, Reply};
pub use parser::{parse_input, Command, ParsedInput};

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Printed once when the loop starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Run the bot over `input` and `output` until the user leaves.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_bot<R, W>(
    bot: &mut AssistantBot,
    mut input: R,
    output: &mut W,
    prompt: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("end of input, leaving");
            break;
        }

        let reply = bot.handle(&line);
        writeln!(output, "{}", reply.text())?;
        if reply.is_exit() {
            break;
        }
    }

    output.flush()?;
    Ok(())
}
