use crate::prelude::*;
use autodocs_core::confirm::{build_warning, is_approval, CONFIRM_PROMPT};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Show the warning for `files` on the terminal and wait for the operator.
pub async fn confirm_action(files: &[String]) -> Result<bool> {
    confirm_blocking(files.to_vec(), || (std::io::stdin().lock(), anstream::stdout())).await
}

/// Run the confirmation gate on the blocking pool.
///
/// `open` is called on the blocking thread, so handles such as a locked stdin
/// never need to cross threads and the runtime keeps its workers free.
pub async fn confirm_blocking<F, R, W>(files: Vec<String>, open: F) -> Result<bool>
where
    F: FnOnce() -> (R, W) + Send + 'static,
    R: BufRead,
    W: Write,
{
    tokio::task::spawn_blocking(move || {
        let (mut input, mut output) = open();
        confirm_with(&files, &mut input, &mut output)
    })
    .await
    .context("Confirmation task failed")?
}

/// Confirmation gate over arbitrary handles.
///
/// Reads a single line. End of input counts as a rejection.
pub fn confirm_with<R: BufRead, W: Write>(
    files: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    writeln!(output, "{}", build_warning(files).yellow()).context("Failed to write warning")?;
    write!(output, "{}", CONFIRM_PROMPT.bold()).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    if read == 0 {
        log::debug!("No answer on stdin, treating as a rejection");
        return Ok(false);
    }

    Ok(is_approval(&answer))
}
