// Unit tests for segment tokenization
use std::cmp::Ordering;
use tagsort_core::util::segment::{Segment, compare_segments, segments};

#[test]
fn test_segments_of_versioned_name() {
    let parts: Vec<_> = segments("v1.5/x_2").collect();
    assert_eq!(
        parts,
        vec![
            Segment::Char { ch: 'v' },
            Segment::Number {
                text: "1.5",
                value: 1.5
            },
            Segment::Break { ch: '/' },
            Segment::Char { ch: 'x' },
            Segment::Break { ch: '_' },
            Segment::Number {
                text: "2",
                value: 2.0
            },
        ]
    );
}

#[test]
fn test_second_decimal_point_is_a_char() {
    let texts: Vec<String> = segments("1.2.3").map(|s| s.text().into_owned()).collect();
    assert_eq!(texts, vec!["1.2", ".", "3"]);
}

#[test]
fn test_empty_name_has_no_segments() {
    assert_eq!(segments("").count(), 0);
}

#[test]
fn test_segment_kinds() {
    let kinds: Vec<&str> = segments("a/1").map(|s| s.kind()).collect();
    assert_eq!(kinds, vec!["char", "break", "number"]);
}

#[test]
fn test_segment_class_order() {
    let slash = Segment::Break { ch: '/' };
    let number = Segment::Number {
        text: "5",
        value: 5.0,
    };
    let underscore = Segment::Break { ch: '_' };
    let plus = Segment::Char { ch: '+' };

    assert_eq!(slash.cmp_segment(&number), Ordering::Less);
    assert_eq!(number.cmp_segment(&underscore), Ordering::Less);
    assert_eq!(underscore.cmp_segment(&plus), Ordering::Less);
    assert_eq!(plus.cmp_segment(&slash), Ordering::Greater);
}

#[test]
fn test_compare_segments_matches_examples() {
    assert_eq!(compare_segments("a2b", "a10b"), Ordering::Less);
    assert_eq!(compare_segments("a/a", "a+/a"), Ordering::Less);
    assert_eq!(compare_segments("v1.5", "v1.10"), Ordering::Greater);
}

#[test]
fn test_segments_serialize_with_kind_tag() {
    let parts: Vec<_> = segments("a_").collect();
    let json = serde_json::to_value(&parts).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"kind": "char", "ch": "a"},
            {"kind": "break", "ch": "_"},
        ])
    );
}
