//! Program Image Loading.
//!
//! Programs are supplied either as raw big-endian instruction bytes or as a
//! hexadecimal text image with one instruction word per line, the format
//! produced by most MIPS toolchains for memory initialisation files:
//!
//! ```text
//! // bubble sort
//! 3c1d0001   # lui sp, 0x1
//! 0x27bdfff0
//! ```
//!
//! Blank lines, `//` and `#` comments, an optional `0x` prefix and `_` digit
//! separators are accepted.

use crate::common::error::SimError;

/// Parses a hexadecimal program image into instruction words.
///
/// # Errors
///
/// Returns [`SimError::ProgramParse`] for the first token that is not a 32-bit
/// hexadecimal number.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_hex_image;
///
/// let words = parse_hex_image("// prologue\n8c0a0000\n0x0000_0000 # nop\n")?;
/// assert_eq!(words, vec![0x8c0a_0000, 0]);
/// # Ok::<(), mipsim_core::common::SimError>(())
/// ```
pub fn parse_hex_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        for token in line.split_whitespace() {
            words.push(parse_word(token).ok_or_else(|| SimError::ProgramParse {
                line: idx + 1,
                text: token.to_string(),
            })?);
        }
    }
    Ok(words)
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_word(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty() || digits.len() > 8 {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
