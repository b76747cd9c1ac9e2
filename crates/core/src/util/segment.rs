//! Segment view of a tag name
//!
//! A name is read as a sequence of number runs, break characters and
//! ordinary characters. Comparing two segment sequences lexicographically
//! gives the same answer as [`compare_tag_names`](super::sort::compare_tag_names).

use std::cmp::Ordering;

use serde::Serialize;

use super::sort::{cmp_code_units, consume_number, is_digit, parse_number};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment<'a> {
    /// Digits with at most one decimal point, compared by value
    Number { text: &'a str, value: f64 },
    /// `/` or `_`
    Break { ch: char },
    /// Any other single character
    Char { ch: char },
}

impl<'a> Segment<'a> {
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Number { .. } => "number",
            Segment::Break { .. } => "break",
            Segment::Char { .. } => "char",
        }
    }

    /// Source text covered by this segment
    pub fn text(&self) -> std::borrow::Cow<'a, str> {
        match self {
            Segment::Number { text, .. } => std::borrow::Cow::Borrowed(*text),
            Segment::Break { ch } | Segment::Char { ch } => std::borrow::Cow::Owned(ch.to_string()),
        }
    }

    /// Order two segments the way the tag comparator orders them
    ///
    /// `'/'` < numbers < `'_'` < ordinary characters. A number meeting a
    /// break is ordered by its leading digit, since digits are breaks too.
    pub fn cmp_segment(&self, other: &Segment<'_>) -> Ordering {
        use Segment::*;
        match (self, other) {
            (Number { value: a, .. }, Number { value: b, .. }) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Break { ch: a }, Break { ch: b }) | (Char { ch: a }, Char { ch: b }) => {
                cmp_code_units(*a, *b)
            }
            (Number { text, .. }, Break { ch }) => cmp_code_units(lead_digit(text), *ch),
            (Break { ch }, Number { text, .. }) => cmp_code_units(*ch, lead_digit(text)),
            (Number { .. } | Break { .. }, Char { .. }) => Ordering::Less,
            (Char { .. }, Number { .. } | Break { .. }) => Ordering::Greater,
        }
    }
}

fn lead_digit(text: &str) -> char {
    text.chars().next().unwrap_or('0')
}

/// Iterator over the segments of a name, see [`segments`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.source[self.pos..].chars().next()?;
        let start = self.pos;

        if is_digit(ch) {
            self.pos = consume_number(self.source, start + 1);
            let text = &self.source[start..self.pos];
            return Some(Segment::Number {
                text,
                value: parse_number(text),
            });
        }

        self.pos += ch.len_utf8();
        Some(match ch {
            '/' | '_' => Segment::Break { ch },
            _ => Segment::Char { ch },
        })
    }
}

/// Split a name into its segments
///
/// ```
/// use tagsort_core::util::segment::{segments, Segment};
///
/// let parts: Vec<_> = segments("v1.5/x").collect();
/// assert_eq!(parts.len(), 4);
/// assert!(matches!(parts[1], Segment::Number { text: "1.5", .. }));
/// ```
pub fn segments(source: &str) -> Segments<'_> {
    Segments { source, pos: 0 }
}

/// Lexicographic comparison of two names' segment sequences
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    let mut a_iter = segments(a);
    let mut b_iter = segments(b);
    loop {
        match (a_iter.next(), b_iter.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp_segment(&y) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}
