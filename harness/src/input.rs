//! Console input parsing.
//!
//! Every world takes its input as one line (or, for grids, a block of
//! lines). Parsing happens before any search starts; a malformed token
//! aborts the run instead of being skipped.

use thiserror::Error;

/// Typed failure for input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input was empty (or whitespace only) where content is required.
    #[error("input is empty")]
    Empty,
    /// A whitespace-delimited token is not an integer.
    #[error("token {position} ({token:?}) is not an integer")]
    MalformedToken { token: String, position: usize },
    /// A value that must be positive was zero or negative.
    #[error("token {position} ({value}) must be a positive integer")]
    NonPositive { value: i64, position: usize },
    /// A character that must be a decimal digit was not.
    #[error("character {position} ({ch:?}) is not a decimal digit")]
    NonDigit { ch: char, position: usize },
    /// A digit value outside `0..=9`.
    #[error("digit {position} ({value}) is outside 0..=9")]
    DigitOutOfRange { value: u8, position: usize },
}

/// Parse whitespace-delimited integers.
///
/// An empty or blank line yields an empty vector; callers decide whether
/// that is a usage error.
///
/// # Errors
///
/// Returns [`InputError::MalformedToken`] for the first token that does not
/// parse as `i64`. Positions are 1-based.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, InputError> {
    line.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<i64>()
                .map_err(|_| InputError::MalformedToken {
                    token: token.to_string(),
                    position: i + 1,
                })
        })
        .collect()
}

/// Parse whitespace-delimited integers that must all be positive.
///
/// # Errors
///
/// Returns [`InputError::MalformedToken`] or [`InputError::NonPositive`].
pub fn parse_positive(line: &str) -> Result<Vec<u64>, InputError> {
    parse_numbers(line)?
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            u64::try_from(value)
                .ok()
                .filter(|v| *v > 0)
                .ok_or(InputError::NonPositive {
                    value,
                    position: i + 1,
                })
        })
        .collect()
}

/// Parse a single non-negative integer (the Euler 169 input).
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line, [`InputError::MalformedToken`]
/// if the line is not exactly one integer, or [`InputError::NonPositive`] for a
/// negative value.
pub fn parse_count(line: &str) -> Result<u64, InputError> {
    let numbers = parse_numbers(line)?;
    match numbers.as_slice() {
        [] => Err(InputError::Empty),
        [value] => u64::try_from(*value).map_err(|_| InputError::NonPositive {
            value: *value,
            position: 1,
        }),
        [_, second, ..] => Err(InputError::MalformedToken {
            token: second.to_string(),
            position: 2,
        }),
    }
}

/// Parse a line of decimal digits, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::Empty`] for a blank line or [`InputError::NonDigit`]
/// for the first character outside `0-9`.
pub fn parse_digits(line: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            ch.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(InputError::NonDigit {
                    ch,
                    position: i + 1,
                })
        })
        .collect()
}

/// Parse a character grid, one row per line.
///
/// Trailing carriage returns are stripped; trailing blank lines are dropped.
/// Rows may have different lengths.
///
/// # Errors
///
/// Returns [`InputError::Empty`] if no non-blank row remains.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<char>>, InputError> {
    let mut rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.trim_end_matches('\r').chars().collect())
        .collect();
    while rows.last().is_some_and(|row: &Vec<char>| row.iter().all(|c| c.is_whitespace())) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(rows)
}
