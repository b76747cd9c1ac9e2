// Order properties of the tag comparator, checked with proptest
use std::cmp::Ordering;

use proptest::prelude::*;
use tagsort_core::util::segment::compare_segments;
use tagsort_core::util::sort::compare_tag_names;

/// Names built from the characters the comparator treats specially
fn tag_name() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "0", "1", "2", "9", "10", "007", ".", "/", "_", "+", "a", "b", "B", "é", "\u{1F600}",
        ]),
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![tag_name(), any::<String>()]
}

proptest! {
    #[test]
    fn prop_reflexive(a in any_name()) {
        prop_assert_eq!(compare_tag_names(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_antisymmetric(a in any_name(), b in any_name()) {
        prop_assert_eq!(compare_tag_names(&a, &b), compare_tag_names(&b, &a).reverse());
    }

    #[test]
    fn prop_transitive(a in tag_name(), b in tag_name(), c in tag_name()) {
        let mut names = [a, b, c];
        names.sort_by(|x, y| compare_tag_names(x, y));
        prop_assert_ne!(compare_tag_names(&names[0], &names[1]), Ordering::Greater);
        prop_assert_ne!(compare_tag_names(&names[1], &names[2]), Ordering::Greater);
        prop_assert_ne!(compare_tag_names(&names[0], &names[2]), Ordering::Greater);
    }

    #[test]
    fn prop_segments_agree_with_comparator(a in any_name(), b in any_name()) {
        prop_assert_eq!(compare_segments(&a, &b), compare_tag_names(&a, &b));
    }

    #[test]
    fn prop_digit_free_names_without_breaks_sort_by_utf16(
        a in "[a-zA-Z+.-]{0,6}",
        b in "[a-zA-Z+.-]{0,6}",
    ) {
        let a16: Vec<u16> = a.encode_utf16().collect();
        let b16: Vec<u16> = b.encode_utf16().collect();
        prop_assert_eq!(compare_tag_names(&a, &b), a16.cmp(&b16));
    }
}
