// crates/core/src/tokens.rs
use std::io::BufRead;

use crate::error::{FilterError, Result};

/// Separator set of the original stream tokenizer: ASCII space, `\t`, `\n`,
/// `\v`, `\f`, `\r`. (`u8::is_ascii_whitespace` leaves out vertical tab.)
#[must_use]
pub const fn is_token_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

/// Exclusion predicate applied to every token before it is counted.
#[derive(Debug, Clone, Default)]
pub struct TokenCountOptions {
    pub exclude: Vec<String>,
}

impl TokenCountOptions {
    fn is_excluded(&self, token: &[u8]) -> bool {
        self.exclude.iter().any(|word| word.as_bytes() == token)
    }
}

/// Folds the input stream into a count of whitespace-delimited tokens.
///
/// A token is a maximal run of non-separator bytes; non-text bytes tokenize
/// the same as text. Tokens matching an `exclude` entry are skipped.
///
/// # Errors
///
/// Returns `FilterError::Read` when the underlying stream fails.
pub fn count_tokens<R: BufRead>(mut reader: R, options: &TokenCountOptions) -> Result<u64> {
    let mut count: u64 = 0;
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf().map_err(FilterError::Read)?;
        if buf.is_empty() {
            break;
        }
        let consumed = buf.len();
        for &byte in buf {
            if is_token_separator(byte) {
                if !token.is_empty() {
                    if !options.is_excluded(&token) {
                        count += 1;
                    }
                    token.clear();
                }
            } else {
                token.push(byte);
            }
        }
        reader.consume(consumed);
    }
    // A final token may end at end-of-input rather than at a separator.
    if !token.is_empty() && !options.is_excluded(&token) {
        count += 1;
    }
    Ok(count)
}
