// crates/core/tests/property_tests.rs

use proptest::prelude::*;
use textfilters_core::reverse::{ReverseMode, ReverseOptions, reverse_stream};
use textfilters_core::tokens::{TokenCountOptions, count_tokens};

/// Records in a raw byte stream: one per `\n`, plus an unterminated tail.
fn record_count(input: &[u8]) -> u64 {
    let newlines = input.iter().filter(|&&b| b == b'\n').count() as u64;
    match input.last() {
        None | Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}

fn pass(input: &[u8], mode: ReverseMode) -> (Vec<u8>, u64) {
    let mut out = Vec::new();
    let records = reverse_stream(input, &mut out, &ReverseOptions { mode }).unwrap();
    (out, records)
}

proptest! {
    #[test]
    fn record_count_is_preserved(input in proptest::collection::vec(any::<u8>(), 0..2000)) {
        let (out, records) = pass(&input, ReverseMode::EveryLine);
        prop_assert_eq!(records, record_count(&input));
        // Reversal never creates or destroys a separator, so the output
        // carries exactly one \n per record.
        prop_assert_eq!(out.iter().filter(|&&b| b == b'\n').count() as u64, records);
    }

    #[test]
    fn every_line_double_pass_is_identity(lines in proptest::collection::vec("[ -~]{0,30}", 0..40)) {
        let input: Vec<u8> = lines.iter().flat_map(|l| {
            let mut record = l.clone().into_bytes();
            record.push(b'\n');
            record
        }).collect();
        let (once, _) = pass(&input, ReverseMode::EveryLine);
        let (twice, _) = pass(&once, ReverseMode::EveryLine);
        prop_assert_eq!(twice, input);
    }

    #[test]
    fn odd_only_double_pass_is_identity(lines in proptest::collection::vec("[ -~]{0,30}", 0..40)) {
        let input: Vec<u8> = lines.iter().flat_map(|l| {
            let mut record = l.clone().into_bytes();
            record.push(b'\n');
            record
        }).collect();
        let (once, _) = pass(&input, ReverseMode::OddLinesOnly);
        let (twice, _) = pass(&once, ReverseMode::OddLinesOnly);
        prop_assert_eq!(twice, input);
    }

    #[test]
    fn token_count_matches_split_model(input in "[a-z \t\n]{0,400}") {
        let counted = count_tokens(input.as_bytes(), &TokenCountOptions::default()).unwrap();
        prop_assert_eq!(counted, input.split_ascii_whitespace().count() as u64);
    }

    #[test]
    fn exclusion_never_increases_the_count(input in "[ab ]{0,200}") {
        let all = count_tokens(input.as_bytes(), &TokenCountOptions::default()).unwrap();
        let options = TokenCountOptions { exclude: vec!["a".to_string()] };
        let filtered = count_tokens(input.as_bytes(), &options).unwrap();
        prop_assert!(filtered <= all);
        let skipped = input.split_ascii_whitespace().filter(|t| *t == "a").count() as u64;
        prop_assert_eq!(filtered, all - skipped);
    }
}
