//! Property-based tests for resource number extraction from API URLs.

use card_labeler::domain::models::parse_trailing_number;
use proptest::prelude::*;

proptest! {
    #[test]
    fn trailing_number_is_recovered(
        owner in "[A-Za-z0-9-]{1,20}",
        repo in "[A-Za-z0-9_.-]{1,20}",
        number in 1u64..=u64::MAX,
    ) {
        let url = format!("https://api.github.com/repos/{owner}/{repo}/issues/{number}");
        prop_assert_eq!(parse_trailing_number(&url), Some(number));
    }

    #[test]
    fn non_numeric_segment_is_rejected(segment in "[a-z]{1,10}") {
        let url = format!("https://api.github.com/projects/columns/{segment}");
        prop_assert_eq!(parse_trailing_number(&url), None);
    }

    #[test]
    fn never_panics(input in ".*") {
        let _ = parse_trailing_number(&input);
    }
}

#[test]
fn zero_is_not_a_resource_number() {
    let url = "https://api.github.com/projects/0";
    assert_eq!(parse_trailing_number(url), None);
}
