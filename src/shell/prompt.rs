//! Line-based input prompts
//!
//! Every reader returns `Ok(None)` at end of input so callers can wind down
//! instead of spinning on an exhausted stream.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::record::{truncate_name, validate_score, Subject, MAX_NAME_BYTES};

/// Read one line without its line terminator
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Ask for a student name until a non-blank one is given
///
/// The result is already cut down to the storage budget.
pub fn prompt_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    write!(out, "Name (max {} bytes): ", MAX_NAME_BYTES)?;
    out.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let name = truncate_name(line.trim());
        if !name.is_empty() {
            return Ok(Some(name));
        }

        write!(out, "Name must not be empty. Enter a name: ")?;
        out.flush()?;
    }
}

/// Ask for a subject score until one within [0, 100] is given
pub fn prompt_score<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    subject: Subject,
) -> Result<Option<i32>> {
    write!(out, "{} score: ", subject)?;
    out.flush()?;

    loop {
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let parsed = line
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|score| validate_score(subject, score).ok());
        if let Some(score) = parsed {
            return Ok(Some(score));
        }

        tracing::debug!("Rejected {} score input {:?}", subject, line.trim());
        write!(out, "Invalid score. Enter a number between 0 and 100: ")?;
        out.flush()?;
    }
}
