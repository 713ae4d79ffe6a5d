#![no_main]
use libfuzzer_sys::fuzz_target;
use wildscan::{MatchConfig, Matcher, ScanStrategy};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the strategy and where the pattern ends
    let strategy = if data[0] & 1 == 0 {
        ScanStrategy::Links
    } else {
        ScanStrategy::Dense
    };
    let rest = &data[1..];
    let split = (data[0] as usize >> 1) % rest.len() + 1;
    let (pattern, text) = rest.split_at(split);

    let config = MatchConfig::default().with_strategy(strategy);
    let matcher = match Matcher::new(pattern, &config) {
        Ok(m) => m,
        // Foreign symbols in the pattern are rejected up front
        Err(_) => return,
    };

    let found = matcher.find_all(text);

    let expected: Vec<usize> = if pattern.len() > text.len() {
        Vec::new()
    } else {
        (0..=text.len() - pattern.len())
            .filter(|&pos| {
                pattern
                    .iter()
                    .zip(&text[pos..])
                    .all(|(&p, &t)| p == b'?' || p == t)
            })
            .collect()
    };

    assert_eq!(found, expected, "pattern {:?} text {:?}", pattern, text);
});
