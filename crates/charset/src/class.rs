//! Per-character classification on top of Unicode general category.

use unicode_normalization::char::decompose_canonical;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Coarse class a character falls into for proof purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    UppercaseBase,
    LowercaseBase,
    Accented,
    ModifierLetter,
    OtherLetter,
    Digit,
    OtherNumber,
    Punctuation,
    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
    Mark,
    /// Whitespace, controls, format characters, private use and unassigned slots.
    Excluded,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        use GeneralCategory as Gc;

        match c.general_category() {
            Gc::UppercaseLetter | Gc::TitlecaseLetter if is_accented(c) => CharClass::Accented,
            Gc::LowercaseLetter if is_accented(c) => CharClass::Accented,
            Gc::UppercaseLetter | Gc::TitlecaseLetter => CharClass::UppercaseBase,
            Gc::LowercaseLetter => CharClass::LowercaseBase,
            Gc::ModifierLetter => CharClass::ModifierLetter,
            Gc::OtherLetter => CharClass::OtherLetter,
            Gc::DecimalNumber => CharClass::Digit,
            Gc::LetterNumber | Gc::OtherNumber => CharClass::OtherNumber,
            Gc::ConnectorPunctuation
            | Gc::DashPunctuation
            | Gc::OpenPunctuation
            | Gc::ClosePunctuation
            | Gc::InitialPunctuation
            | Gc::FinalPunctuation
            | Gc::OtherPunctuation => CharClass::Punctuation,
            Gc::MathSymbol => CharClass::MathSymbol,
            Gc::CurrencySymbol => CharClass::CurrencySymbol,
            Gc::ModifierSymbol => CharClass::ModifierSymbol,
            Gc::OtherSymbol => CharClass::OtherSymbol,
            Gc::NonspacingMark | Gc::SpacingMark | Gc::EnclosingMark => CharClass::Mark,
            _ => CharClass::Excluded,
        }
    }

    pub fn is_letter(self) -> bool {
        matches!(
            self,
            CharClass::UppercaseBase
                | CharClass::LowercaseBase
                | CharClass::Accented
                | CharClass::ModifierLetter
                | CharClass::OtherLetter
        )
    }
}

/// Whether the canonical decomposition of `c` carries a combining mark.
pub fn is_accented(c: char) -> bool {
    let mut parts = 0usize;
    let mut has_mark = false;
    decompose_canonical(c, |d| {
        if parts > 0 && is_combining_mark(d) {
            has_mark = true;
        }
        parts += 1;
    });
    has_mark
}

/// First character of the canonical decomposition, if `c` decomposes.
pub fn base_letter(c: char) -> Option<char> {
    let mut first = None;
    let mut parts = 0usize;
    decompose_canonical(c, |d| {
        if first.is_none() {
            first = Some(d);
        }
        parts += 1;
    });
    first.filter(|_| parts > 1)
}

pub fn is_combining_mark(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}
