//! Wildcard patterns and their literal runs.
//!
//! A pattern such as `ab??c?de` is split into the maximal wildcard-free runs
//! `ab@0`, `c@4` and `de@6`. Only the runs go into the automaton; the wildcard
//! gaps are implied by the offsets and the total pattern length.
//!
//! ```
//! use wildscan::pattern::split_runs;
//!
//! let runs = split_runs(b"??ab?c??", b'?');
//! assert_eq!(runs.len(), 2);
//! assert_eq!((runs[0].text(), runs[0].offset()), (&b"ab"[..], 2));
//! assert_eq!((runs[1].text(), runs[1].offset()), (&b"c"[..], 5));
//! ```

use crate::config::MatchConfig;
use crate::error::WildscanError;
use memchr::memchr;

/// A maximal literal substring of a pattern and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    text: Vec<u8>,
    offset: usize,
}

impl Run {
    /// Literal symbols of the run.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// 0-based start of the run inside the pattern.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Run length in symbols (never zero).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty runs are never produced.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Splits `pattern` into maximal runs of non-wildcard bytes.
///
/// Leading, trailing and repeated wildcards produce no empty runs. A pattern
/// made only of wildcards yields no runs at all.
pub fn split_runs(pattern: &[u8], wildcard: u8) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;

    while start < pattern.len() {
        let end = memchr(wildcard, &pattern[start..])
            .map(|rel| start + rel)
            .unwrap_or(pattern.len());
        if end > start {
            runs.push(Run {
                text: pattern[start..end].to_vec(),
                offset: start,
            });
        }
        start = end + 1;
    }

    runs
}

/// A validated pattern split into runs.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    pattern: Vec<u8>,
    runs: Vec<Run>,
}

impl WildcardPattern {
    /// Parses and validates `pattern` against `config`.
    ///
    /// # Errors
    ///
    /// - [`WildscanError::InvalidConfig`] if the config itself is invalid
    /// - [`WildscanError::InvalidPattern`] if the pattern is empty or contains a
    ///   symbol that is neither the wildcard nor in the alphabet
    pub fn parse(pattern: &[u8], config: &MatchConfig) -> Result<Self, WildscanError> {
        config.validate()?;

        if pattern.is_empty() {
            return Err(WildscanError::InvalidPattern("empty pattern".to_string()));
        }

        if let Some(pos) = pattern
            .iter()
            .position(|&b| b != config.wildcard && !config.alphabet.contains(b))
        {
            return Err(WildscanError::InvalidPattern(format!(
                "symbol {:?} at position {} is neither the wildcard {:?} nor in the alphabet {}",
                pattern[pos] as char, pos, config.wildcard as char, config.alphabet
            )));
        }

        Ok(Self {
            runs: split_runs(pattern, config.wildcard),
            pattern: pattern.to_vec(),
        })
    }

    /// The original pattern.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    /// Total pattern length, wildcards included.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always false; empty patterns are rejected by [`WildcardPattern::parse`].
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Literal runs in pattern order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Whether the pattern consists of wildcards only.
    pub fn is_all_wildcards(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of wildcard positions.
    pub fn wildcard_count(&self) -> usize {
        self.pattern.len() - self.runs.iter().map(Run::len).sum::<usize>()
    }
}
