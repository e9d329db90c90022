//! Property tests for file-name derived titles.

use std::path::PathBuf;

use proptest::prelude::*;

use vaultpress::fallback_title;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Separators become spaces and every word is capitalized.
    #[test]
    fn property_words_are_capitalized(
        words in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 1..=5),
        separators in proptest::collection::vec(prop_oneof![Just('-'), Just('_')], 4),
    ) {
        let mut stem = words[0].clone();
        for (i, word) in words.iter().enumerate().skip(1) {
            stem.push(separators[i - 1]);
            stem.push_str(word);
        }
        let path = PathBuf::from(format!("publish/{}.md", stem));

        let title = fallback_title(&path);

        prop_assert!(!title.contains('-') && !title.contains('_'));
        let title_words: Vec<&str> = title.split(' ').collect();
        prop_assert_eq!(title_words.len(), words.len());
        for (got, source) in title_words.iter().zip(&words) {
            let mut chars = source.chars();
            let first = chars.next().unwrap();
            let expected: String = first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect();
            prop_assert_eq!(*got, expected.as_str());
        }
    }

    /// PROPERTY: Only the file stem matters, never the directory.
    #[test]
    fn property_directory_is_ignored(
        dir in "[a-z]{1,8}",
        stem in "[a-z]{1,8}",
    ) {
        let nested = PathBuf::from(format!("{}/{}.md", dir, stem));
        let flat = PathBuf::from(format!("{}.md", stem));
        prop_assert_eq!(fallback_title(&nested), fallback_title(&flat));
    }
}
