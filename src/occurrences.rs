//! Full-pattern occurrence search.
//!
//! The pattern's literal runs are fed into one [`Automaton`]. A single scan of
//! the text yields, for every run, the positions where it ends
//! ([`RunMatchTable`]). Each hit implies a candidate start of the whole pattern:
//!
//! ```text
//! candidate = (end - run.len() + 1) - run.offset()
//! ```
//!
//! A [`HitCounter`] counts hits per candidate. A candidate is a match once all
//! runs agree on it and the whole pattern fits in the text. Wildcard positions
//! are never inspected; they match any symbol.
//!
//! ```
//! use wildscan::find_occurrences;
//!
//! assert_eq!(find_occurrences("a?a", "abacaba")?, vec![0, 2, 4]);
//! assert_eq!(find_occurrences("a???a", "abcda")?, vec![0]);
//! # Ok::<(), wildscan::WildscanError>(())
//! ```

use crate::automaton::Automaton;
use crate::config::{MatchConfig, ScanStrategy};
use crate::error::WildscanError;
use crate::pattern::{Run, WildcardPattern};
use crate::trie::Trie;
use serde::Serialize;

/// Text end positions per run, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMatchTable {
    ends: Vec<Vec<usize>>,
}

impl RunMatchTable {
    /// Scans `text` once and records where each of `run_count` labels ends.
    pub fn scan(automaton: &Automaton, run_count: usize, text: &[u8]) -> Self {
        let mut ends = vec![Vec::new(); run_count];
        let mut scanner = automaton.scanner();

        for (pos, &symbol) in text.iter().enumerate() {
            for &label in scanner.make_transition(symbol) {
                ends[label as usize].push(pos);
            }
        }

        Self { ends }
    }

    /// End positions of run `run`.
    pub fn ends(&self, run: usize) -> &[usize] {
        &self.ends[run]
    }

    /// Number of runs tracked.
    pub fn run_count(&self) -> usize {
        self.ends.len()
    }

    /// Hits across all runs.
    pub fn total_hits(&self) -> usize {
        self.ends.iter().map(Vec::len).sum()
    }
}

/// Per-position count of runs confirming a pattern start there.
#[derive(Debug, Clone)]
pub struct HitCounter {
    counts: Vec<u32>,
}

impl HitCounter {
    /// A zeroed counter for a text of `text_len` symbols.
    pub fn new(text_len: usize) -> Self {
        Self {
            counts: vec![0; text_len],
        }
    }

    /// Shifts every run hit in `table` back to its implied pattern start and
    /// counts it. Hits implying a negative start are dropped.
    pub fn from_table(table: &RunMatchTable, runs: &[Run], text_len: usize) -> Self {
        let mut counter = Self::new(text_len);
        for (index, run) in runs.iter().enumerate() {
            for &end in table.ends(index) {
                let run_start = end + 1 - run.len();
                if let Some(candidate) = run_start.checked_sub(run.offset()) {
                    counter.record(candidate);
                }
            }
        }
        counter
    }

    /// Counts one confirming run at `candidate`.
    #[inline]
    pub fn record(&mut self, candidate: usize) {
        self.counts[candidate] += 1;
    }

    /// Runs confirming `pos`.
    pub fn count(&self, pos: usize) -> u32 {
        self.counts.get(pos).copied().unwrap_or(0)
    }

    /// Ascending positions confirmed by exactly `required` runs where a
    /// pattern of `pattern_len` symbols still fits.
    pub fn matches(&self, required: u32, pattern_len: usize) -> Vec<usize> {
        let text_len = self.counts.len();
        self.counts
            .iter()
            .enumerate()
            .filter(|&(pos, &count)| count == required && pos + pattern_len <= text_len)
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// Shape of a compiled [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Pattern length, wildcards included
    pub pattern_length: usize,
    /// Literal runs in the pattern
    pub run_count: usize,
    /// Wildcard positions in the pattern
    pub wildcard_count: usize,
    /// Automaton states, root included
    pub node_count: usize,
    /// Symbols in the alphabet
    pub alphabet_size: usize,
    /// Transition strategy
    pub strategy: ScanStrategy,
}

/// A pattern compiled into an automaton, reusable across texts.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
    pattern: WildcardPattern,
    automaton: Automaton,
    required_hits: u32,
}

impl Matcher {
    /// Compiles `pattern` under `config`.
    ///
    /// # Errors
    ///
    /// - [`WildscanError::InvalidConfig`] for an invalid config
    /// - [`WildscanError::InvalidPattern`] for an empty pattern or foreign symbols
    /// - [`WildscanError::MalformedAutomaton`] if construction fails internally
    pub fn new(pattern: &[u8], config: &MatchConfig) -> Result<Self, WildscanError> {
        let pattern = WildcardPattern::parse(pattern, config)?;
        let required_hits = u32::try_from(pattern.runs().len())
            .map_err(|_| WildscanError::InvalidPattern("too many literal runs".to_string()))?;

        let runs: Vec<&[u8]> = pattern.runs().iter().map(Run::text).collect();
        let automaton = Automaton::build(Trie::new(config.alphabet), &runs, config.strategy)?;

        Ok(Self {
            config: *config,
            pattern,
            automaton,
            required_hits,
        })
    }

    /// Every start position where the pattern matches `text`, ascending.
    ///
    /// An all-wildcard pattern matches at every start where it fits.
    pub fn find_all(&self, text: &[u8]) -> Vec<usize> {
        let pattern_len = self.pattern.len();
        if pattern_len > text.len() {
            return Vec::new();
        }

        if self.pattern.is_all_wildcards() {
            return (0..=text.len() - pattern_len).collect();
        }

        let table = self.run_matches(text);
        let counter = HitCounter::from_table(&table, self.pattern.runs(), text.len());
        let positions = counter.matches(self.required_hits, pattern_len);

        log::trace!(
            "scanned {} symbols: {} run hits, {} matches",
            text.len(),
            table.total_hits(),
            positions.len()
        );
        positions
    }

    /// Per-run end positions over `text`.
    pub fn run_matches(&self, text: &[u8]) -> RunMatchTable {
        RunMatchTable::scan(&self.automaton, self.pattern.runs().len(), text)
    }

    /// The parsed pattern.
    pub fn pattern(&self) -> &WildcardPattern {
        &self.pattern
    }

    /// The automaton built over the pattern's runs.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// The configuration this matcher was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Size figures for diagnostics.
    pub fn stats(&self) -> Stats {
        Stats {
            pattern_length: self.pattern.len(),
            run_count: self.pattern.runs().len(),
            wildcard_count: self.pattern.wildcard_count(),
            node_count: self.automaton.node_count(),
            alphabet_size: self.config.alphabet.len(),
            strategy: self.automaton.strategy(),
        }
    }
}

/// Finds every match of `pattern` (lowercase letters and `?`) in `text`.
///
/// Builds a [`Matcher`] with the default [`MatchConfig`], runs it once and drops it.
pub fn find_occurrences(pattern: &str, text: &str) -> Result<Vec<usize>, WildscanError> {
    find_occurrences_with(pattern.as_bytes(), text.as_bytes(), &MatchConfig::default())
}

/// [`find_occurrences`] with an explicit configuration.
pub fn find_occurrences_with(
    pattern: &[u8],
    text: &[u8],
    config: &MatchConfig,
) -> Result<Vec<usize>, WildscanError> {
    Ok(Matcher::new(pattern, config)?.find_all(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(pattern: &str, text: &str) -> Vec<usize> {
        find_occurrences(pattern, text).unwrap()
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(find("a?a", "abacaba"), vec![0, 2, 4]);
        assert_eq!(find("aa", "aaaa"), vec![0, 1, 2]);
        assert_eq!(find("a???a", "abcda"), vec![0]);
        assert!(find("a??a", "abcda").is_empty());
        assert!(find("z", "abacaba").is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(find("abcd", "abc").is_empty());
        assert!(find("a???", "abc").is_empty());
    }

    #[test]
    fn test_pattern_equal_to_text() {
        assert_eq!(find("abc", "abc"), vec![0]);
        assert_eq!(find("a?c", "abc"), vec![0]);
        assert!(find("abd", "abc").is_empty());
    }

    #[test]
    fn test_trailing_wildcard_stays_inside_text() {
        // "b" at 1 and 3 are both hits, but only 1 leaves room for "?"
        assert_eq!(find("b?", "abab"), vec![1]);
        assert_eq!(find("ab??", "xxabab"), vec![2]);
    }

    #[test]
    fn test_leading_wildcard_discards_negative_starts() {
        assert_eq!(find("?b", "bab"), vec![1]);
        assert_eq!(find("??a", "aaaa"), vec![0, 1]);
    }

    #[test]
    fn test_all_wildcards() {
        assert_eq!(find("??", "abcd"), vec![0, 1, 2]);
        assert_eq!(find("????", "abcd"), vec![0]);
        assert!(find("?????", "abcd").is_empty());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(
            find_occurrences("", "abc"),
            Err(WildscanError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_empty_text() {
        assert!(find("a", "").is_empty());
        assert!(find("?", "").is_empty());
    }

    #[test]
    fn test_repeated_runs() {
        // Both runs are "ab"; each hit counts for two candidates
        assert!(find("ab?ab", "ababab").is_empty());
        assert_eq!(find("ab?ab", "abxab"), vec![0]);
        assert_eq!(find("ab?ab", "abzabqab"), vec![0, 3]);
    }

    #[test]
    fn test_text_outside_alphabet_covered_by_wildcard() {
        assert_eq!(find("a?c", "a-c a c"), vec![0, 4]);
    }

    #[test]
    fn test_matcher_is_reusable() {
        let matcher = Matcher::new(b"a?a", &MatchConfig::default()).unwrap();
        let first = matcher.find_all(b"abacaba");
        let second = matcher.find_all(b"abacaba");
        assert_eq!(first, second);
        assert_eq!(matcher.find_all(b"aaa"), vec![0]);
    }

    #[test]
    fn test_dense_strategy_agrees() {
        let dense = MatchConfig::default().with_strategy(ScanStrategy::Dense);
        for (pattern, text) in [("a?a", "abacaba"), ("ab?ab", "abzabqab"), ("?c?", "cccc")] {
            assert_eq!(
                find_occurrences_with(pattern.as_bytes(), text.as_bytes(), &dense).unwrap(),
                find(pattern, text)
            );
        }
    }

    #[test]
    fn test_run_match_table_records_ends() {
        let matcher = Matcher::new(b"ab?b", &MatchConfig::default()).unwrap();
        let table = matcher.run_matches(b"abab");
        assert_eq!(table.run_count(), 2);
        assert_eq!(table.ends(0), &[1, 3]);
        assert_eq!(table.ends(1), &[1, 3]);
        assert_eq!(table.total_hits(), 4);
    }

    #[test]
    fn test_hit_counter() {
        let mut counter = HitCounter::new(4);
        counter.record(1);
        counter.record(1);
        counter.record(3);
        assert_eq!(counter.count(1), 2);
        assert_eq!(counter.count(10), 0);
        assert_eq!(counter.matches(2, 2), vec![1]);
        assert!(counter.matches(1, 2).is_empty());
        assert_eq!(counter.matches(1, 1), vec![3]);
    }

    #[test]
    fn test_stats() {
        let matcher = Matcher::new(b"ab?b", &MatchConfig::default()).unwrap();
        let stats = matcher.stats();
        assert_eq!(stats.pattern_length, 4);
        assert_eq!(stats.run_count, 2);
        assert_eq!(stats.wildcard_count, 1);
        // root, a, ab, b
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.alphabet_size, 26);
        assert_eq!(stats.strategy, ScanStrategy::Links);
    }
}
