//! Line-based interactive prompts.
//!
//! Each prompt reads from a caller-supplied `BufRead` so tests can drive
//! the flows with scripted input. Validation failures re-prompt; end of
//! input surfaces as an `UnexpectedEof` error.

use std::io::{self, BufRead, Write};

fn read_line(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of input",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt until a non-empty value is supplied.
pub fn prompt_required(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    loop {
        let text = read_line(input, label)?;
        if !text.is_empty() {
            return Ok(text);
        }
        println!("This value is required.");
    }
}

/// Prompt once; an empty answer is a valid "not set".
pub fn prompt_optional(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    read_line(input, label)
}

/// Prompt until the answer is y/yes or n/no (case-insensitive).
pub fn prompt_yes_no(input: &mut impl BufRead, label: &str) -> io::Result<bool> {
    loop {
        match read_line(input, label)?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter y or n."),
        }
    }
}

/// A container name creatable by the runtime: lowercase letters, digits,
/// `-`, `_`, and `.` only.
pub fn valid_container_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.'))
}

/// Prompt until a valid container name is supplied.
pub fn prompt_container_name(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    loop {
        let text = read_line(input, label)?;
        if text.is_empty() {
            println!("Container name is required.");
            continue;
        }
        if text.contains(' ') {
            println!("Container name cannot contain spaces. Use '-', '_', or '.' instead.");
            continue;
        }
        if !valid_container_name(&text) {
            println!("Container name must be lowercase and may only contain a-z, 0-9, '-', '_' and '.'");
            continue;
        }
        return Ok(text);
    }
}
