//! Address Trace Loader.
//!
//! Reads the address streams that drive a simulation. A trace is plain text:
//! 1. **Tokens:** Unsigned integers, decimal or `0x`-prefixed hexadecimal,
//!    optionally grouped with `_`.
//! 2. **Separators:** Any whitespace or commas.
//! 3. **Comments:** `#` runs to the end of the line.
//!
//! Negative numbers are rejected here, so the hierarchy only ever sees valid
//! unsigned addresses.

use std::fs;
use std::path::Path;

use crate::common::{ByteAddr, SimError};

/// Parses a single address token.
///
/// # Returns
///
/// `None` if the token is not an unsigned decimal or hexadecimal integer.
pub fn parse_address(token: &str) -> Option<ByteAddr> {
    let digits = token.replace('_', "");
    let value = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u64>().ok()?,
    };
    Some(ByteAddr(value))
}

/// Parses a trace into byte addresses, in order.
///
/// # Errors
///
/// Returns [`SimError::Trace`] for the first token that is not a valid
/// address.
pub fn parse_trace(text: &str) -> Result<Vec<ByteAddr>, SimError> {
    let mut addrs = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        for token in code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let addr = parse_address(token).ok_or_else(|| SimError::Trace {
                line: idx + 1,
                token: token.to_string(),
            })?;
            addrs.push(addr);
        }
    }
    Ok(addrs)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or
/// [`SimError::Trace`] if it contains a malformed token.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<ByteAddr>, SimError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let addrs = parse_trace(&text)?;
    tracing::info!(path = %path.display(), count = addrs.len(), "trace loaded");
    Ok(addrs)
}
