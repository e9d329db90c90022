//! Property tests for note → page conversion.

use chrono::NaiveDate;
use proptest::prelude::*;

use vaultpress::{convert, DEFAULT_TITLE};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn note_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 #+_\\-]{0,30}").unwrap()
}

/// Body lines that can never be read as a heading.
fn body_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9 ]{0,30}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Converting a converted page changes nothing.
    #[test]
    fn property_convert_is_idempotent(
        lines in proptest::collection::vec(note_line(), 0..=10),
        fallback in "[A-Za-z ]{0,12}",
    ) {
        let once = convert(&lines.join("\n"), &fallback, date());
        let twice = convert(&once, &fallback, date());
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: Unless it already has one, every page gets a frontmatter block.
    #[test]
    fn property_output_starts_with_frontmatter(
        lines in proptest::collection::vec(note_line(), 1..=10),
    ) {
        prop_assume!(lines[0].trim() != "+++");
        let page = convert(&lines.join("\n"), "Fallback", date());
        prop_assert!(page.starts_with("+++\ntitle = \""));
        prop_assert!(page.contains("\ndate = 2024-05-01\n+++\n\n"));
    }

    /// PROPERTY: A first-line heading becomes the title and leaves the body.
    #[test]
    fn property_first_line_heading_is_lifted(
        title in "[A-Za-z][A-Za-z0-9 ]{0,20}",
        body in proptest::collection::vec(body_line(), 0..=6),
    ) {
        let body = body.join("\n");
        let note = format!("# {}\n\n{}", title, body);

        let page = convert(&note, "Fallback", date());

        let expected = format!(
            "+++\ntitle = \"{}\"\ndate = 2024-05-01\n+++\n\n{}",
            title.trim(),
            body
        );
        prop_assert_eq!(page, expected);
    }

    /// PROPERTY: Without any heading the fallback (or the default) names the page.
    #[test]
    fn property_headingless_notes_use_fallback(
        body in proptest::collection::vec(body_line(), 0..=6),
        fallback in "[A-Za-z ]{0,12}",
    ) {
        let page = convert(&body.join("\n"), &fallback, date());

        let expected_title = if fallback.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            fallback.clone()
        };
        let expected_title_line = format!("title = \"{}\"", expected_title);
        let expected_prefix = format!("+++\n{}\n", expected_title_line);
        prop_assert!(page.starts_with(&expected_prefix));
        prop_assert!(page.ends_with(&body.join("\n")));
    }
}
