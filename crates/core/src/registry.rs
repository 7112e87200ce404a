//! Static registry of proof kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    config::{
        ARABIC_WORDS_LARGE, ARABIC_WORDS_SMALL, CHARSET_FONT_SIZE, DIACRITIC_WORDS_LARGE,
        DIACRITIC_WORDS_SMALL, LARGE_TEXT_FONT_SIZE, SMALL_TEXT_FONT_SIZE, SPACING_FONT_SIZE,
    },
    features::FeatureTag,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofKind {
    FilteredCharacterSet,
    SpacingProof,
    BasicParagraphLarge,
    DiacriticWordsLarge,
    BasicParagraphSmall,
    PairedStylesParagraphSmall,
    GenerativeTextSmall,
    DiacriticWordsSmall,
    MiscParagraphSmall,
    ArCharacterSet,
    ArParagraphLarge,
    FaParagraphLarge,
    ArParagraphSmall,
    FaParagraphSmall,
    ArVocalizationParagraphSmall,
    ArLatMixedParagraphSmall,
    ArNumbersSmall,
}

/// Script a proof needs before it is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptRequirement {
    None,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "center" | "centre" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Curated passages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corpus {
    Misc,
    ArabicVocalization,
    ArabicLatinMixed,
    ArabicNumbers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Arabic,
    Farsi,
}

/// What a proof's content is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    Charset,
    Spacing,
    Paragraph,
    Diacritics { words_per_letter: usize },
    Paired,
    Generative,
    Corpus(Corpus),
    ArabicCharset,
    ArabicWords { language: Language, words_per_form: usize },
}

/// Registry entry for one proof kind.
#[derive(Debug, Clone, Copy)]
pub struct ProofDefinition {
    pub kind: ProofKind,
    pub id: &'static str,
    pub label: &'static str,
    pub font_size: f32,
    pub columns: u32,
    /// Default paragraph count for proofs with generated paragraphs.
    pub paragraphs: Option<u32>,
    pub script: ScriptRequirement,
    pub shape: ContentShape,
    /// Features off by default even when normally on.
    pub default_off: &'static [FeatureTag],
    /// Features that cannot be switched on.
    pub locked_off: &'static [FeatureTag],
}

impl ProofDefinition {
    pub fn is_arabic(&self) -> bool {
        self.script == ScriptRequirement::Arabic
    }

    pub fn is_charset(&self) -> bool {
        matches!(self.shape, ContentShape::Charset | ContentShape::ArabicCharset)
    }

    /// Tracking and alignment are user-settable.
    pub fn supports_formatting(&self) -> bool {
        !matches!(
            self.shape,
            ContentShape::Charset | ContentShape::Spacing | ContentShape::ArabicCharset
        )
    }

    /// Character-category toggles apply.
    pub fn has_categories(&self) -> bool {
        matches!(self.shape, ContentShape::Charset | ContentShape::Spacing)
    }

    pub fn direction(&self) -> Direction {
        if self.is_arabic() { Direction::Rtl } else { Direction::Ltr }
    }

    pub fn alignment(&self) -> Alignment {
        if self.is_charset() {
            Alignment::Center
        } else if self.is_arabic() {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// Default tracking at `font_size`.
    pub fn tracking(&self, font_size: f32) -> Option<f32> {
        self.is_charset().then(|| font_size / 1.5)
    }

    /// Large-text proofs get fewer samples per item.
    pub fn is_large(&self) -> bool {
        self.font_size >= LARGE_TEXT_FONT_SIZE
    }
}

const KERN_LIGA: &[FeatureTag] = &[FeatureTag("kern"), FeatureTag("liga")];
const KERN: &[FeatureTag] = &[FeatureTag("kern")];

#[allow(clippy::too_many_arguments)]
const fn def(
    kind: ProofKind,
    id: &'static str,
    label: &'static str,
    font_size: f32,
    columns: u32,
    paragraphs: Option<u32>,
    script: ScriptRequirement,
    shape: ContentShape,
) -> ProofDefinition {
    ProofDefinition {
        kind,
        id,
        label,
        font_size,
        columns,
        paragraphs,
        script,
        shape,
        default_off: &[],
        locked_off: &[],
    }
}

use ContentShape as S;
use ProofKind as K;
use ScriptRequirement::{Arabic, None as Any};

/// All proof kinds in default page order.
#[rustfmt::skip]
pub static REGISTRY: [ProofDefinition; 17] = [
    def(K::FilteredCharacterSet, "filtered_character_set", "Filtered Character Set", CHARSET_FONT_SIZE, 1, None, Any, S::Charset),
    ProofDefinition {
        default_off: KERN_LIGA,
        locked_off: KERN,
        ..def(K::SpacingProof, "spacing_proof", "Spacing Proof", SPACING_FONT_SIZE, 2, None, Any, S::Spacing)
    },
    def(K::BasicParagraphLarge, "basic_paragraph_large", "Basic Paragraph Large", LARGE_TEXT_FONT_SIZE, 1, Some(2), Any, S::Paragraph),
    def(K::DiacriticWordsLarge, "diacritic_words_large", "Diacritic Words Large", LARGE_TEXT_FONT_SIZE, 1, None, Any, S::Diacritics { words_per_letter: DIACRITIC_WORDS_LARGE }),
    def(K::BasicParagraphSmall, "basic_paragraph_small", "Basic Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, Some(5), Any, S::Paragraph),
    def(K::PairedStylesParagraphSmall, "paired_styles_paragraph_small", "Paired Styles Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, Some(5), Any, S::Paired),
    def(K::GenerativeTextSmall, "generative_text_small", "Generative Text Small", SMALL_TEXT_FONT_SIZE, 2, Some(3), Any, S::Generative),
    def(K::DiacriticWordsSmall, "diacritic_words_small", "Diacritic Words Small", SMALL_TEXT_FONT_SIZE, 2, None, Any, S::Diacritics { words_per_letter: DIACRITIC_WORDS_SMALL }),
    def(K::MiscParagraphSmall, "misc_paragraph_small", "Misc Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, None, Any, S::Corpus(Corpus::Misc)),
    def(K::ArCharacterSet, "ar_character_set", "Ar Character Set", CHARSET_FONT_SIZE, 1, None, Arabic, S::ArabicCharset),
    def(K::ArParagraphLarge, "ar_paragraph_large", "Ar Paragraph Large", LARGE_TEXT_FONT_SIZE, 1, Some(2), Arabic, S::ArabicWords { language: Language::Arabic, words_per_form: ARABIC_WORDS_LARGE }),
    def(K::FaParagraphLarge, "fa_paragraph_large", "Fa Paragraph Large", LARGE_TEXT_FONT_SIZE, 1, Some(2), Arabic, S::ArabicWords { language: Language::Farsi, words_per_form: ARABIC_WORDS_LARGE }),
    def(K::ArParagraphSmall, "ar_paragraph_small", "Ar Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, Some(5), Arabic, S::ArabicWords { language: Language::Arabic, words_per_form: ARABIC_WORDS_SMALL }),
    def(K::FaParagraphSmall, "fa_paragraph_small", "Fa Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, Some(5), Arabic, S::ArabicWords { language: Language::Farsi, words_per_form: ARABIC_WORDS_SMALL }),
    def(K::ArVocalizationParagraphSmall, "ar_vocalization_paragraph_small", "Ar Vocalization Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, None, Arabic, S::Corpus(Corpus::ArabicVocalization)),
    def(K::ArLatMixedParagraphSmall, "ar_lat_mixed_paragraph_small", "Ar-Lat Mixed Paragraph Small", SMALL_TEXT_FONT_SIZE, 2, None, Arabic, S::Corpus(Corpus::ArabicLatinMixed)),
    def(K::ArNumbersSmall, "ar_numbers_small", "Ar Numbers Small", SMALL_TEXT_FONT_SIZE, 2, None, Arabic, S::Corpus(Corpus::ArabicNumbers)),
];

impl ProofKind {
    pub fn definition(self) -> &'static ProofDefinition {
        // REGISTRY is declared in enum order.
        &REGISTRY[self as usize]
    }

    pub fn all() -> impl Iterator<Item = ProofKind> {
        REGISTRY.iter().map(|d| d.kind)
    }

    pub fn id(self) -> &'static str {
        self.definition().id
    }

    pub fn label(self) -> &'static str {
        self.definition().label
    }

    pub fn from_id(id: &str) -> Option<Self> {
        REGISTRY.iter().find(|d| d.id == id).map(|d| d.kind)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        REGISTRY.iter().find(|d| d.label == label).map(|d| d.kind)
    }
}

impl fmt::Display for ProofKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
