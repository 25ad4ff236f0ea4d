use archetype_lexicon::text::{is_normalized, normalize_term, tokenize, MAX_TERM_WORDS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "[ A-Za-z0-9_,.!?/-]{0,40}") {
        let once = normalize_term(&s);
        prop_assert_eq!(normalize_term(&once), once);
    }

    #[test]
    fn every_token_is_a_reachable_term(s in "[ A-Za-z0-9_,.!?/-]{0,40}") {
        for token in tokenize(&s) {
            prop_assert!(is_normalized(&token), "{:?}", token);
        }
    }

    #[test]
    fn short_normalized_phrases_are_accepted(
        words in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..=MAX_TERM_WORDS),
    ) {
        let phrase = words.join(" ");
        prop_assert!(is_normalized(&phrase));
        prop_assert_eq!(tokenize(&phrase), words);
    }
}
