//! Parsing sequences from text.
//!
//! Accepts values separated by commas and/or whitespace, optionally wrapped
//! in brackets, so both `5 2 9` and `[5, 2, 9]` read the same.

use crate::error::{InvalidInputError, Result};

/// Parse every token into a flat sequence of `f64` values.
pub fn parse_sequence<I, S>(tokens: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();

    for token in tokens {
        let pieces = token
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|piece| piece.trim_matches(|c| c == '[' || c == ']'))
            .filter(|piece| !piece.is_empty());

        for piece in pieces {
            let value = piece
                .parse::<f64>()
                .map_err(|_| InvalidInputError::NotANumber {
                    token: piece.to_string(),
                })?;
            values.push(value);
        }
    }

    Ok(values)
}
