//! Subword boundary detection
//!
//! Decides whether an offset inside a working span's text is a stopping point
//! for subword motions. Letter/digit and case transitions stop in both
//! directions. Transitions into or out of whitespace and punctuation depend on
//! the scan direction, so forward motion stops just past a word and backward
//! motion stops just before one.
//!
//! | left \ right | Upper     | Lower | Digit | Whitespace | Other |
//! |--------------|-----------|-------|-------|------------|-------|
//! | Upper        | (acronym) | no    | yes   | fwd        | fwd   |
//! | Lower        | yes       | -     | yes   | fwd        | fwd   |
//! | Digit        | yes       | yes   | -     | fwd        | fwd   |
//! | Whitespace   | !fwd      | !fwd  | !fwd  | -          | fwd   |
//! | Other        | !fwd      | !fwd  | !fwd  | !fwd       | -     |
//!
//! A line feed on either side is always a boundary.

use crate::classify::{classify, Category};

/// Check whether `offset` in `text` is a subword boundary when scanning in
/// the given direction.
///
/// `offset == text.len()` is always a boundary and `offset == 0` never is.
/// Offsets past the end are treated like the end.
pub fn is_boundary(text: &[char], offset: usize, forward: bool) -> bool {
    if offset >= text.len() {
        return true;
    }
    if offset == 0 {
        return false;
    }

    let left = text[offset - 1];
    let right = text[offset];

    if left == '\n' || right == '\n' {
        return true;
    }

    let cat_left = classify(left);
    let cat_right = classify(right);

    if cat_left == cat_right {
        return cat_left == Category::UpperLetter && starts_capitalized_word(text, offset);
    }

    transition(cat_left, cat_right, forward)
}

/// Inside an uppercase run, split before the capital that begins a
/// capitalized word: `HTML|Parser` rather than `HTMLP|arser`.
fn starts_capitalized_word(text: &[char], offset: usize) -> bool {
    text.get(offset + 1)
        .is_some_and(|&ch| classify(ch) == Category::LowerLetter)
}

/// Boundary result for two differing categories
fn transition(left: Category, right: Category, forward: bool) -> bool {
    use Category::*;

    match (left, right) {
        (UpperLetter, LowerLetter) => false,
        (UpperLetter, Digit) => true,
        (LowerLetter, UpperLetter | Digit) => true,
        (Digit, UpperLetter | LowerLetter) => true,
        (UpperLetter | LowerLetter | Digit, Whitespace | Other) => forward,
        (Whitespace, UpperLetter | LowerLetter | Digit) => !forward,
        (Whitespace, Other) => forward,
        (Other, UpperLetter | LowerLetter | Digit | Whitespace) => !forward,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn both(s: &str, offset: usize) -> (bool, bool) {
        let text = chars(s);
        (is_boundary(&text, offset, true), is_boundary(&text, offset, false))
    }

    #[test]
    fn test_end_is_always_boundary() {
        for s in ["a", "ab", "a b", "HTML", "  ", "1.2"] {
            assert_eq!(both(s, s.chars().count()), (true, true), "{s:?}");
        }
    }

    #[test]
    fn test_start_is_never_boundary() {
        for s in ["a", "Ab", " a", ".x", "\nx"] {
            assert_eq!(both(s, 0), (false, false), "{s:?}");
        }
    }

    #[test]
    fn test_newline_forces_boundary() {
        assert_eq!(both("a\nb", 1), (true, true));
        assert_eq!(both("a\nb", 2), (true, true));
        // Same category on both sides still splits
        assert_eq!(both(" \n ", 1), (true, true));
        assert_eq!(both("\n\n", 1), (true, true));
    }

    #[test]
    fn test_carriage_return_is_plain_whitespace() {
        assert_eq!(both(" \r", 1), (false, false));
        assert_eq!(both("a\r", 1), (true, false));
    }

    #[test]
    fn test_same_category_is_not_boundary() {
        assert_eq!(both("ab", 1), (false, false));
        assert_eq!(both("12", 1), (false, false));
        assert_eq!(both("  ", 1), (false, false));
        assert_eq!(both("->", 1), (false, false));
    }

    #[test]
    fn test_digit_letter_transitions_are_directionless() {
        assert_eq!(both("a1", 1), (true, true));
        assert_eq!(both("A1", 1), (true, true));
        assert_eq!(both("1a", 1), (true, true));
        assert_eq!(both("1A", 1), (true, true));
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(both("fooBar", 3), (true, true));
        // Capital followed by lowercase stays together
        assert_eq!(both("Bar", 1), (false, false));
    }

    #[test]
    fn test_acronym_run() {
        let text = chars("HTMLParser");
        assert!(!is_boundary(&text, 1, true));
        assert!(!is_boundary(&text, 2, true));
        assert!(!is_boundary(&text, 3, true));
        assert!(is_boundary(&text, 4, true));
        assert!(is_boundary(&text, 4, false));
        assert!(!is_boundary(&text, 5, true));

        // Only a lowercase follower splits the run
        assert_eq!(both("ABC1", 2), (false, false));
    }

    #[test]
    fn test_acronym_without_lookahead_room() {
        // Offset at len - 1 cannot look past the right character
        assert_eq!(both("AB", 1), (false, false));
        assert_eq!(both("xAB", 2), (false, false));
    }

    #[test]
    fn test_word_to_punctuation_depends_on_direction() {
        assert_eq!(both("a.", 1), (true, false));
        assert_eq!(both("A.", 1), (true, false));
        assert_eq!(both("1.", 1), (true, false));
        assert_eq!(both(".a", 1), (false, true));
    }

    #[test]
    fn test_superscripts_and_fractions_act_as_punctuation() {
        assert_eq!(both("x²", 1), (true, false));
        assert_eq!(both("x²y", 2), (false, true));
        assert_eq!(both("1½", 1), (true, false));
        // Roman numerals are not uppercase letters
        assert_eq!(both("Ⅻa", 1), (false, true));
    }

    #[test]
    fn test_whitespace_transitions() {
        assert_eq!(both("a ", 1), (true, false));
        assert_eq!(both(" a", 1), (false, true));
        assert_eq!(both(" A", 1), (false, true));
        assert_eq!(both(" 1", 1), (false, true));
        assert_eq!(both(" .", 1), (true, false));
        assert_eq!(both(". ", 1), (false, true));
    }

    #[test]
    fn test_offset_past_end() {
        let text = chars("ab");
        assert!(is_boundary(&text, 5, false));
    }
}
