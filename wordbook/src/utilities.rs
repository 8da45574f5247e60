use std::io::{self, Write};

/// Prints the prompt and reads one line, `None` once stdin is exhausted.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn str_to_bool(str: &str) -> Option<bool> {
    match &str.trim().to_ascii_lowercase()[..] {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" => Some(true),
        "n" | "no" | "nope" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, question: &str) -> bool {
        (*self)(question)
    }
}

/// Confirms on the terminal, anything but a yes counts as no.
pub struct Terminal;

impl Confirm for Terminal {
    fn confirm(&mut self, question: &str) -> bool {
        match input(&format!("{question} (y/N): ")) {
            Ok(Some(answer)) => str_to_bool(&answer).unwrap_or(false),
            Ok(None) => false,
            Err(error) => {
                tracing::warn!(%error, "couldn't read confirmation");
                false
            }
        }
    }
}
