//! Wildscan - Single-Wildcard Substring Search
//!
//! Wildscan finds every position where a pattern containing single-symbol
//! wildcards matches a text. The pattern's literal runs are compiled into one
//! Aho-Corasick automaton, the text is scanned once, and full matches are
//! reconstructed by aligning each run's hits to its offset in the pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use wildscan::{find_occurrences, MatchConfig, Matcher};
//!
//! // One-shot search with the default config (a-z, '?' wildcard)
//! assert_eq!(find_occurrences("a?a", "abacaba")?, vec![0, 2, 4]);
//!
//! // Compile once, search many texts
//! let matcher = Matcher::new(b"b??a", &MatchConfig::default())?;
//! assert_eq!(matcher.find_all(b"abacaba"), vec![1]);
//! assert_eq!(matcher.find_all(b"bxxabyya"), vec![0, 4]);
//! # Ok::<(), wildscan::WildscanError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! pattern ──► split_runs ──► [(run, offset)] ──► Trie ──► Automaton
//!                                                             │
//! text ───────────────────────────────────────► one scan ◄────┘
//!                                                   │
//!                                   RunMatchTable ──► HitCounter ──► positions
//! ```
//!
//! The crate also ships two small standalone tools that share nothing with the
//! automaton: balanced [`team`] selection and [`tournament`] closure.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod alphabet;
pub mod automaton;
pub mod config;
/// Error types for wildscan operations
pub mod error;
pub mod file_reader;
pub mod occurrences;
pub mod pattern;
pub mod team;
pub mod tokens;
pub mod tournament;
pub mod trie;

// Re-exports for Rust consumers
pub use crate::alphabet::Alphabet;
pub use crate::automaton::{Automaton, Scanner};
pub use crate::config::{MatchConfig, ScanStrategy};
pub use crate::error::{Result, WildscanError};
pub use crate::occurrences::{
    find_occurrences, find_occurrences_with, HitCounter, Matcher, RunMatchTable, Stats,
};
pub use crate::pattern::{split_runs, Run, WildcardPattern};
pub use crate::trie::{NodeId, Trie};

/// Library version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
