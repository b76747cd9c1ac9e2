//! Asciinumeric sorting utilities for tag names and paths

use std::cmp::Ordering;
use std::path::Path;

/// Compare tag names asciinumerically, broken into components
///
/// Unlike plain lexical ordering this knows that `"a10b" > "a2b"`: runs of
/// digits (with at most one decimal point) are compared by numeric value.
/// Slashes, underscores and bare digits are break characters that sort
/// before every other character, so `"a/a" < "a+/a"` even though `'+'`
/// precedes `'/'` in ASCII.
///
/// The result is a total order over all strings and can be passed straight
/// to `sort_by`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use tagsort_core::util::sort::compare_tag_names;
///
/// assert_eq!(compare_tag_names("a2b", "a10b"), Ordering::Less);
/// assert_eq!(compare_tag_names("a/a", "a+/a"), Ordering::Less);
/// assert_eq!(compare_tag_names("v1.5", "v1.10"), Ordering::Greater);
/// ```
pub fn compare_tag_names(a: &str, b: &str) -> Ordering {
    let mut ai = 0;
    let mut bi = 0;
    loop {
        let Some(ac) = a[ai..].chars().next() else {
            return if bi == b.len() {
                Ordering::Equal
            } else {
                Ordering::Less
            };
        };
        let Some(bc) = b[bi..].chars().next() else {
            return Ordering::Greater;
        };

        if is_digit(ac) && is_digit(bc) {
            let (a_start, b_start) = (ai, bi);
            ai = consume_number(a, ai + 1);
            bi = consume_number(b, bi + 1);
            let an = parse_number(&a[a_start..ai]);
            let bn = parse_number(&b[b_start..bi]);
            match an.partial_cmp(&bn) {
                Some(Ordering::Less) => return Ordering::Less,
                Some(Ordering::Greater) => return Ordering::Greater,
                _ => continue,
            }
        }

        match (is_break(ac), is_break(bc)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => match cmp_code_units(ac, bc) {
                Ordering::Equal => {}
                unequal => return unequal,
            },
        }

        ai += ac.len_utf8();
        bi += bc.len_utf8();
    }
}

/// Integer form of [`compare_tag_names`]: -1, 0 or 1
pub fn compare_tag_names_sign(a: &str, b: &str) -> i32 {
    match compare_tag_names(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Stable in-place sort of names by [`compare_tag_names`]
pub fn sort_tag_names<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| compare_tag_names(a.as_ref(), b.as_ref()));
}

/// Stable in-place sort of arbitrary items by a borrowed tag-name key
///
/// ```
/// use tagsort_core::util::sort::sort_by_tag_name;
///
/// let mut runs = vec![("run10", 3), ("run2", 1), ("run1", 2)];
/// sort_by_tag_name(&mut runs, |r| r.0);
/// assert_eq!(runs[0].0, "run1");
/// assert_eq!(runs[2].0, "run10");
/// ```
pub fn sort_by_tag_name<T, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> &str,
{
    items.sort_by(|a, b| compare_tag_names(key(a), key(b)));
}

/// Compare paths component by component with [`compare_tag_names`]
///
/// Backslashes are treated as separators on every platform so paths coming
/// from Windows tools sort the same way. A path that is a prefix of another
/// sorts first.
pub fn compare_paths<P: AsRef<Path>>(a: P, b: P) -> Ordering {
    let a_str = a.as_ref().to_string_lossy().replace('\\', "/");
    let b_str = b.as_ref().to_string_lossy().replace('\\', "/");

    let mut a_components = a_str.split('/').filter(|c| !c.is_empty());
    let mut b_components = b_str.split('/').filter(|c| !c.is_empty());

    loop {
        match (a_components.next(), b_components.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a_comp), Some(b_comp)) => match compare_tag_names(a_comp, b_comp) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

// '_' is kept as a break for names that use it like a slash.
pub(crate) fn is_break(c: char) -> bool {
    c == '/' || c == '_' || is_digit(c)
}

/// Returns the byte index just past a number run whose first digit ends at `i`.
pub(crate) fn consume_number(s: &str, mut i: usize) -> usize {
    let bytes = s.as_bytes();
    let mut decimal = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {}
            b'.' if !decimal => decimal = true,
            _ => break,
        }
        i += 1;
    }
    i
}

/// Runs start with a digit and hold at most one '.', so parsing cannot fail.
/// Overlong runs saturate to infinity.
pub(crate) fn parse_number(run: &str) -> f64 {
    run.parse().unwrap_or(f64::NAN)
}

/// Order two characters by their UTF-16 code units.
pub(crate) fn cmp_code_units(a: char, b: char) -> Ordering {
    let mut a_buf = [0u16; 2];
    let mut b_buf = [0u16; 2];
    let a_units: &[u16] = a.encode_utf16(&mut a_buf);
    let b_units: &[u16] = b.encode_utf16(&mut b_buf);
    a_units.cmp(b_units)
}
