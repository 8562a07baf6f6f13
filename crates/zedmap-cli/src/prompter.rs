//! Interactive line prompting for the search loop.

use std::io::{self, BufRead, Write};

/// Prompt for a trimmed line of input. Returns `None` on EOF or a
/// read error.
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompt for a 1-based selection until a valid one is entered.
/// Returns `None` on EOF.
pub fn prompt_selection(prompt: &str, max: usize) -> Option<usize> {
    loop {
        let line = prompt_line(prompt)?;
        match parse_selection(&line, max) {
            Some(n) => return Some(n),
            None => eprintln!("Invalid selection, enter a number between 1 and {}", max),
        }
    }
}

/// Parse a 1-based selection, rejecting non-numbers and out-of-range
/// values.
fn parse_selection(input: &str, max: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n),
        _ => None,
    }
}
