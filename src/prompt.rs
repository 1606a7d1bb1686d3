//! Interactive selection of the directory to convert.
//!
//! Asks whether to use the current directory and, if not, which folder to
//! use instead:
//!
//! ```text
//! ? Do you want to use the current directory? [Y/n] n
//! ? What is the folder path? (press enter to use the current directory) web/src
//! ```
//!
//! Relative answers are resolved against the current directory.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Prompts on stdin/stdout for the root directory.
///
/// # Errors
///
/// Returns `Err` on I/O errors or when stdin is closed before an answer.
pub fn resolve_root_directory(cwd: &Path) -> Result<PathBuf> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    resolve_root_with(&mut input, &mut output, cwd)
}

/// Same as [`resolve_root_directory`] over arbitrary streams.
pub fn resolve_root_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    cwd: &Path,
) -> Result<PathBuf> {
    if confirm(input, output, "Do you want to use the current directory?")? {
        return Ok(cwd.to_path_buf());
    }

    write!(
        output,
        "{} {} {} ",
        "?".green().bold(),
        "What is the folder path?".bold(),
        "(press enter to use the current directory)".dimmed()
    )?;
    output.flush()?;

    let answer = read_answer(input)?;
    if answer.is_empty() {
        return Ok(cwd.to_path_buf());
    }

    // An absolute answer replaces `cwd` entirely.
    Ok(cwd.join(answer))
}

/// Yes/no question defaulting to yes. Repeats until the answer is valid.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    loop {
        write!(
            output,
            "{} {} {} ",
            "?".green().bold(),
            question.bold(),
            "[Y/n]".dimmed()
        )?;
        output.flush()?;

        match read_answer(input)?.to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                log::debug!("Unrecognized answer: {:?}", other);
                writeln!(output, "{}", "Please answer 'y' or 'n'.".yellow())?;
            }
        }
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow::anyhow!("No answer received: input stream closed").into());
    }
    Ok(line.trim().to_string())
}
