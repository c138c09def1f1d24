use anyhow::Result;
use std::io::{BufRead, IsTerminal, Write};

/// Print `question` on stderr and read one trimmed line from stdin.
/// EOF reads as an empty answer.
pub(super) fn ask(question: &str) -> Result<String> {
    eprint!("{question}");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Like [`ask`], but a blank answer is `None`.
pub(super) fn ask_optional(question: &str) -> Result<Option<String>> {
    let answer = ask(question)?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

/// `[y/N]` confirmation. Non-interactive stdin confirms, so scripts piping
/// into urun are not blocked.
pub(super) fn confirm(question: &str) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }
    let answer = ask(&format!("{question} [y/N]: "))?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
