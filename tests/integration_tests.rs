//! Integration tests for wildcard matching correctness
//!
//! These tests drive the public API end to end and compare the automaton
//! against a direct window-by-window checker.

use proptest::prelude::*;
use wildscan::team::select_team;
use wildscan::tournament::{Game, GameResult, Tournament};
use wildscan::{
    find_occurrences, find_occurrences_with, Alphabet, MatchConfig, Matcher, ScanStrategy,
    WildscanError,
};

/// Checks every window directly.
fn brute_force(pattern: &[u8], text: &[u8], wildcard: u8) -> Vec<usize> {
    if pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&pos| {
            pattern
                .iter()
                .zip(&text[pos..])
                .all(|(&p, &t)| p == wildcard || p == t)
        })
        .collect()
}

fn both_strategies() -> [MatchConfig; 2] {
    let config = MatchConfig::default();
    [
        config.with_strategy(ScanStrategy::Links),
        config.with_strategy(ScanStrategy::Dense),
    ]
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(find_occurrences("a?a", "abacaba").unwrap(), vec![0, 2, 4]);
    assert_eq!(find_occurrences("aa", "aaaa").unwrap(), vec![0, 1, 2]);
    assert_eq!(find_occurrences("a???a", "abcda").unwrap(), vec![0]);
    assert!(find_occurrences("a??a", "abcda").unwrap().is_empty());
    assert!(find_occurrences("z", "abacaba").unwrap().is_empty());
}

#[test]
fn test_pattern_equal_to_text() {
    assert_eq!(find_occurrences("ab?d", "abcd").unwrap(), vec![0]);
    assert!(find_occurrences("ab?e", "abcd").unwrap().is_empty());
}

#[test]
fn test_pattern_longer_than_text() {
    assert!(find_occurrences("abc?", "abc").unwrap().is_empty());
    assert!(find_occurrences("????", "abc").unwrap().is_empty());
}

#[test]
fn test_leading_and_trailing_wildcards_stay_in_bounds() {
    // "ab" occurs at 0 and 3; only the first leaves room for two more symbols
    assert_eq!(find_occurrences("ab??", "abxab").unwrap(), vec![0]);
    // A leading wildcard needs a symbol before the run
    assert_eq!(find_occurrences("??ab", "abxab").unwrap(), vec![1]);
    assert_eq!(find_occurrences("?b?", "abab").unwrap(), vec![0]);
}

#[test]
fn test_all_wildcards() {
    assert_eq!(find_occurrences("??", "abcd").unwrap(), vec![0, 1, 2]);
    assert_eq!(find_occurrences("?", "a").unwrap(), vec![0]);
}

#[test]
fn test_empty_pattern_is_rejected() {
    assert!(matches!(
        find_occurrences("", "abc"),
        Err(WildscanError::InvalidPattern(_))
    ));
}

#[test]
fn test_foreign_text_symbols() {
    // Text symbols outside the alphabet break literal runs but a wildcard covers them
    assert_eq!(find_occurrences("a?c", "aXcabc").unwrap(), vec![0, 3]);
    assert!(find_occurrences("abc", "abXc").unwrap().is_empty());
}

#[test]
fn test_matcher_is_reusable() {
    let matcher = Matcher::new(b"ab?", &MatchConfig::default()).unwrap();
    let first = matcher.find_all(b"abcabdab");
    let second = matcher.find_all(b"abcabdab");
    assert_eq!(first, vec![0, 3]);
    assert_eq!(first, second);
    assert_eq!(matcher.find_all(b"zzabz"), vec![2]);
}

#[test]
fn test_custom_alphabet() {
    let config = MatchConfig::new(b'.', Alphabet::new(b'0', b'9').unwrap());
    assert_eq!(
        find_occurrences_with(b"1.3", b"123 1x3 193", &config).unwrap(),
        vec![0, 4, 8]
    );
}

#[test]
fn test_stats_shape() {
    let matcher = Matcher::new(b"ab??cd?e", &MatchConfig::default()).unwrap();
    let stats = matcher.stats();
    assert_eq!(stats.pattern_length, 8);
    assert_eq!(stats.run_count, 3);
    assert_eq!(stats.wildcard_count, 3);
    assert_eq!(stats.alphabet_size, 26);
    assert_eq!(stats.strategy, ScanStrategy::Links);
    // root + "ab" + "cd" + "e"
    assert_eq!(stats.node_count, 6);
}

#[test]
fn test_team_and_tournament_through_public_api() {
    let team = select_team(&[3, 2, 5, 4, 1]).unwrap();
    assert_eq!(team.total_efficiency(), 14);
    assert_eq!(team.member_ids(), vec![1, 2, 3, 4]);

    let mut tournament = Tournament::new(3);
    tournament
        .record(Game {
            first: 1,
            second: 2,
            result: GameResult::FirstWins,
        })
        .unwrap();
    tournament
        .record(Game {
            first: 3,
            second: 2,
            result: GameResult::SecondWins,
        })
        .unwrap();
    assert_eq!(tournament.guaranteed_team_size().unwrap(), 3);
}

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'?']), 1..8)
}

fn text_strategy() -> impl Strategy<Value = Vec<u8>> {
    // 'Z' is outside the default alphabet
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'Z']), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_matches_brute_force(pattern in pattern_strategy(), text in text_strategy()) {
        let expected = brute_force(&pattern, &text, b'?');
        for config in both_strategies() {
            let found = find_occurrences_with(&pattern, &text, &config).unwrap();
            prop_assert_eq!(&found, &expected, "strategy {}", config.strategy);
        }
    }

    #[test]
    fn prop_literal_patterns_match_substring_scan(
        pattern in prop::collection::vec(prop::sample::select(vec![b'a', b'b']), 1..5),
        text in prop::collection::vec(prop::sample::select(vec![b'a', b'b']), 0..60),
    ) {
        let expected: Vec<usize> = text
            .windows(pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == pattern.as_slice())
            .map(|(i, _)| i)
            .collect();
        let found = find_occurrences_with(&pattern, &text, &MatchConfig::default()).unwrap();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_positions_ascending_and_in_bounds(pattern in pattern_strategy(), text in text_strategy()) {
        let found = find_occurrences_with(&pattern, &text, &MatchConfig::default()).unwrap();
        prop_assert!(found.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(found.iter().all(|&pos| pos + pattern.len() <= text.len()));
    }

    #[test]
    fn prop_team_is_best_balanced_window(efficiencies in prop::collection::vec(0u64..1000, 1..30)) {
        let team = select_team(&efficiencies).unwrap();

        let mut sorted = efficiencies.clone();
        sorted.sort_unstable();
        let mut best: u128 = 0;
        for l in 0..sorted.len() {
            for r in l..sorted.len() {
                if r - l < 2 || sorted[l] + sorted[l + 1] >= sorted[r] {
                    let sum: u128 = sorted[l..=r].iter().map(|&e| e as u128).sum();
                    best = best.max(sum);
                }
            }
        }
        prop_assert_eq!(team.total_efficiency(), best);

        let members: u128 = team.members().iter().map(|p| p.efficiency as u128).sum();
        prop_assert_eq!(members, best);
    }

    #[test]
    fn prop_tournament_answer_in_range(
        players in 1usize..12,
        games in prop::collection::vec((0usize..12, 0usize..12, 1u8..=3), 0..30),
    ) {
        let mut tournament = Tournament::new(players);
        for (a, b, code) in games {
            tournament
                .record(Game {
                    first: a % players + 1,
                    second: b % players + 1,
                    result: GameResult::try_from(code).unwrap(),
                })
                .unwrap();
        }
        let size = tournament.guaranteed_team_size().unwrap();
        prop_assert!((1..=players).contains(&size));
    }
}
