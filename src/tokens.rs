//! Whitespace-separated token input.
//!
//! [`TokenScanner`] pulls tokens straight out of a `BufRead`'s internal buffer
//! and only copies bytes into the caller's buffer, so reading a large text
//! token does not go through an intermediate `String`.
//!
//! ```
//! use wildscan::tokens::TokenScanner;
//!
//! let mut scanner = TokenScanner::new(&b"  a?a\n abacaba\n"[..]);
//! assert_eq!(scanner.expect_token("pattern")?, b"a?a");
//! assert_eq!(scanner.expect_token("text")?, b"abacaba");
//! assert!(scanner.expect_token("extra").is_err());
//! # Ok::<(), wildscan::WildscanError>(())
//! ```

use crate::error::WildscanError;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Reads whitespace-separated tokens from a buffered reader.
pub struct TokenScanner<R: BufRead> {
    reader: R,
    eof: bool,
}

impl<R: BufRead> TokenScanner<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader, eof: false }
    }

    /// Reads the next token into `token_buf`.
    /// Returns Ok(true) if a token was read, Ok(false) on EOF, Err on I/O error.
    pub fn next_token(&mut self, token_buf: &mut Vec<u8>) -> io::Result<bool> {
        token_buf.clear();

        while !self.eof {
            let buffer = self.reader.fill_buf()?;
            if buffer.is_empty() {
                self.eof = true;
                break;
            }

            let skip = if token_buf.is_empty() {
                buffer
                    .iter()
                    .position(|b| !b.is_ascii_whitespace())
                    .unwrap_or(buffer.len())
            } else {
                0
            };

            let rest = &buffer[skip..];
            match rest.iter().position(|b| b.is_ascii_whitespace()) {
                Some(end) => {
                    token_buf.extend_from_slice(&rest[..end]);
                    let consumed = skip + end;
                    self.reader.consume(consumed);
                    if !token_buf.is_empty() {
                        return Ok(true);
                    }
                }
                None => {
                    // Token may continue in the next chunk
                    token_buf.extend_from_slice(rest);
                    let consumed = buffer.len();
                    self.reader.consume(consumed);
                }
            }
        }

        Ok(!token_buf.is_empty())
    }

    /// Next token; a missing token is [`WildscanError::EmptyInput`].
    pub fn expect_token(&mut self, what: &str) -> Result<Vec<u8>, WildscanError> {
        let mut token = Vec::new();
        if self.next_token(&mut token)? {
            Ok(token)
        } else {
            Err(WildscanError::EmptyInput(format!("expected {}", what)))
        }
    }

    /// Next token parsed as `T`; unparsable tokens are
    /// [`WildscanError::InvalidInput`].
    pub fn expect_parse<T: FromStr>(&mut self, what: &str) -> Result<T, WildscanError> {
        let token = self.expect_token(what)?;
        std::str::from_utf8(&token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                WildscanError::InvalidInput(format!(
                    "cannot parse {} from '{}'",
                    what,
                    String::from_utf8_lossy(&token)
                ))
            })
    }
}
