//! # Character Classes
//!
//! Per-character predicates used to clean and split raw text.
//!
//! Classification works on Unicode scalar values, using the general
//! categories from [`unicode_general_category`].

use unicode_general_category::{GeneralCategory, get_general_category};

/// Null, or the Unicode replacement character.
pub fn is_invalid(ch: char) -> bool {
    ch == '\0' || ch == '\u{FFFD}'
}

/// Control (`Cc`) or format (`Cf`) characters which are not whitespace.
///
/// `\t`, `\n`, `\r` and the ASCII separators `\x1C..=\x1F` are `Cc`,
/// but classify as whitespace.
pub fn is_control(ch: char) -> bool {
    if is_whitespace(ch) {
        return false;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::Control | GeneralCategory::Format
    )
}

/// ASCII whitespace controls, plus the space, line and paragraph separator categories.
pub fn is_whitespace(ch: char) -> bool {
    if matches!(
        ch,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{1F}'
    ) {
        return true;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Punctuation categories, plus the ASCII symbols conventionally split as punctuation.
///
/// Characters such as `$`, `+`, `<`, `^` and `` ` `` are symbols (`Sc`, `Sm`, `Sk`)
/// rather than punctuation; every non-alphanumeric printable ASCII character splits.
pub fn is_punctuation(ch: char) -> bool {
    if matches!(ch as u32, 33..=47 | 58..=64 | 91..=96 | 123..=126) {
        return true;
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}
