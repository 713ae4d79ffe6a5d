//! Symbol alphabets.
//!
//! An [`Alphabet`] is a contiguous, inclusive range of byte values. Symbols are
//! mapped to dense indices `0..len()` so that trie nodes and transition tables
//! can use plain arrays instead of maps.
//!
//! ```
//! use wildscan::Alphabet;
//!
//! let alphabet = Alphabet::lowercase();
//! assert_eq!(alphabet.len(), 26);
//! assert_eq!(alphabet.index(b'c'), Some(2));
//! assert_eq!(alphabet.index(b'?'), None);
//!
//! let digits: Alphabet = "0-9".parse()?;
//! assert_eq!(digits.symbol(9), b'9');
//! # Ok::<(), wildscan::WildscanError>(())
//! ```

use crate::error::WildscanError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Contiguous inclusive byte range used as the symbol set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alphabet {
    first: u8,
    last: u8,
}

impl Alphabet {
    /// Creates an alphabet covering `first..=last`.
    ///
    /// # Errors
    ///
    /// Returns [`WildscanError::InvalidConfig`] if `first > last`.
    pub fn new(first: u8, last: u8) -> Result<Self, WildscanError> {
        if first > last {
            return Err(WildscanError::InvalidConfig(format!(
                "alphabet range is inverted: {:?}-{:?}",
                first as char, last as char
            )));
        }
        Ok(Self { first, last })
    }

    /// The lowercase ASCII letters `a..=z`.
    pub const fn lowercase() -> Self {
        Self {
            first: b'a',
            last: b'z',
        }
    }

    /// Number of symbols in the alphabet (never zero).
    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always false; an alphabet holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First symbol of the range.
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Last symbol of the range.
    pub fn last(&self) -> u8 {
        self.last
    }

    /// Whether `byte` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        (self.first..=self.last).contains(&byte)
    }

    /// Dense index of `byte`, or `None` if it lies outside the alphabet.
    #[inline]
    pub fn index(&self, byte: u8) -> Option<usize> {
        if self.contains(byte) {
            Some((byte - self.first) as usize)
        } else {
            None
        }
    }

    /// Symbol for a dense index. `index` must be below [`Alphabet::len`].
    #[inline]
    pub fn symbol(&self, index: usize) -> u8 {
        debug_assert!(index < self.len());
        self.first + index as u8
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first as char, self.last as char)
    }
}

impl FromStr for Alphabet {
    type Err = WildscanError;

    /// Parses `FROM-TO`, e.g. `a-z` or `0-9`. Both ends must be single bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [first, b'-', last] => Alphabet::new(*first, *last),
            _ => Err(WildscanError::InvalidConfig(format!(
                "alphabet must look like FROM-TO (e.g. a-z), got '{}'",
                s
            ))),
        }
    }
}
