//! Character classification for subword navigation
//!
//! Letters and digits are matched by Unicode general category (Lu, Ll, Nd),
//! so superscripts, fractions, roman numerals and `ª` fall through to Other.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Character category used by subword boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Uppercase letters (`A`, `Ä`, `Σ`)
    UpperLetter,
    /// Lowercase letters (`a`, `ß`, `σ`)
    LowerLetter,
    /// Decimal digits in any script (`7`, `٣`)
    Digit,
    /// Whitespace, including line breaks
    Whitespace,
    /// Punctuation, symbols and uncased letters
    Other,
}

/// Classify a character. First match wins: upper, lower, digit, whitespace.
pub fn classify(ch: char) -> Category {
    match get_general_category(ch) {
        GeneralCategory::UppercaseLetter => Category::UpperLetter,
        GeneralCategory::LowercaseLetter => Category::LowerLetter,
        GeneralCategory::DecimalNumber => Category::Digit,
        _ if ch.is_whitespace() => Category::Whitespace,
        _ => Category::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_letters() {
        for ch in 'A'..='Z' {
            assert_eq!(classify(ch), Category::UpperLetter, "{ch:?}");
        }
        for ch in 'a'..='z' {
            assert_eq!(classify(ch), Category::LowerLetter, "{ch:?}");
        }
    }

    #[test]
    fn test_ascii_digits() {
        for ch in '0'..='9' {
            assert_eq!(classify(ch), Category::Digit, "{ch:?}");
        }
    }

    #[test]
    fn test_whitespace() {
        for ch in [' ', '\t', '\n', '\r', '\u{a0}'] {
            assert_eq!(classify(ch), Category::Whitespace, "{ch:?}");
        }
    }

    #[test]
    fn test_punctuation_is_other() {
        for ch in "_-.,;:()[]{}<>=+*/\\'\"!?@#$%^&|~`".chars() {
            assert_eq!(classify(ch), Category::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(classify('É'), Category::UpperLetter);
        assert_eq!(classify('é'), Category::LowerLetter);
        assert_eq!(classify('٣'), Category::Digit);
        // CJK ideographs have no case
        assert_eq!(classify('字'), Category::Other);
    }

    #[test]
    fn test_titlecase_is_other() {
        assert_eq!(classify('ǅ'), Category::Other);
    }

    #[test]
    fn test_non_decimal_numbers_are_other() {
        // No, Nl
        for ch in ['²', '½', '①', 'Ⅻ'] {
            assert_eq!(classify(ch), Category::Other, "{ch:?}");
        }
    }

    #[test]
    fn test_cased_symbols_outside_lu_ll_are_other() {
        // Lo, So with Other_Lowercase / Other_Uppercase
        for ch in ['ª', 'º', 'Ⓐ', 'ⓐ'] {
            assert_eq!(classify(ch), Category::Other, "{ch:?}");
        }
    }
}
