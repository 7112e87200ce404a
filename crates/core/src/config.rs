//! Configuration constants for proof assembly.

use std::time::Duration;

/// Base seed for generated text.
pub const WORDSIV_SEED: u64 = 987_654;

/// Base seed for the word-by-word style switching of paired proofs.
pub const DUAL_STYLE_SEED: u64 = 1_029_384_756;

/// Default point size of character-set proofs.
pub const CHARSET_FONT_SIZE: f32 = 56.0;

/// Default point size of the spacing proof.
pub const SPACING_FONT_SIZE: f32 = 10.0;

/// Default point size of large text proofs.
pub const LARGE_TEXT_FONT_SIZE: f32 = 21.0;

/// Default point size of small text proofs.
pub const SMALL_TEXT_FONT_SIZE: f32 = 8.0;

/// Global fallbacks when neither the occurrence nor its definition says otherwise.
pub const GLOBAL_PARAGRAPHS: u32 = 5;
pub const GLOBAL_TRACKING: f32 = 0.0;

/// Words per generated paragraph.
pub const DEFAULT_WORDS_PER_PARAGRAPH: u32 = 60;

/// Shortest and longest word the generator picks.
pub const MIN_WORD_LENGTH: usize = 5;
pub const MAX_WORD_LENGTH: usize = 14;

/// Accented sample words per letter in large and small diacritic proofs.
pub const DIACRITIC_WORDS_LARGE: usize = 3;
pub const DIACRITIC_WORDS_SMALL: usize = 4;

/// Words per positional form in large and small Arabic-script paragraphs.
pub const ARABIC_WORDS_LARGE: usize = 4;
pub const ARABIC_WORDS_SMALL: usize = 6;

/// Page margins in points.
pub const MARGIN_VERTICAL: f32 = 50.0;
pub const MARGIN_HORIZONTAL: f32 = 40.0;

/// Blank stand-in font used for unsupported characters.
pub const FALLBACK_FONT: &str = "AdobeBlank.otf";

/// Upper bound on one font-file read.
pub const FONT_READ_TIMEOUT: Duration = font_model::DEFAULT_READ_TIMEOUT;

/// Settings schema version written by this crate.
pub const SETTINGS_VERSION: &str = "1.0";
