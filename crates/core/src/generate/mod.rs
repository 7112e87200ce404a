//! Content strategies, one per [`ContentShape`].
//!
//! Every strategy is a pure function of its [`GenerateContext`]. Random
//! choices come from generators seeded by [`derive_seed`] over the font
//! identity, the occurrence key and a section name, so output does not depend
//! on the order in which units are generated.

mod arabic;
mod inventory;
mod latin;
pub mod words;

use std::collections::BTreeSet;

use charset::CharsetCategories;
use font_model::FontHandle;

use crate::{
    Content, ContentBuilder, FontInstance, PairedInstance, ProofInstanceConfig,
    corpus,
    registry::{ContentShape, Corpus},
};

/// Everything a strategy may look at.
#[derive(Debug, Clone, Copy)]
pub struct GenerateContext<'a> {
    pub instance: &'a FontInstance,
    pub categories: &'a CharsetCategories,
    pub config: &'a ProofInstanceConfig,
    pub paired: Option<&'a PairedInstance>,
}

impl<'a> GenerateContext<'a> {
    pub fn new(
        instance: &'a FontInstance,
        categories: &'a CharsetCategories,
        config: &'a ProofInstanceConfig,
    ) -> Self {
        Self { instance, categories, config, paired: None }
    }

    pub fn with_paired(mut self, paired: &'a PairedInstance) -> Self {
        self.paired = Some(paired);
        self
    }

    pub fn font(&self) -> &'a FontHandle {
        self.instance.font()
    }

    /// Seed for one section of this unit's content.
    ///
    /// Axis locations are not part of the seed, so every instance of a font
    /// gets the same text.
    pub fn seed(&self, base: u64, section: &str) -> u64 {
        let font = self.font();
        derive_seed(base, &[font.family_name(), font.style_name(), self.config.key.as_str(), section])
    }

    fn builder(&self) -> ContentBuilder<'a> {
        ContentBuilder::new(self.font())
    }

    /// Covered characters, as chars.
    fn coverage_chars(&self) -> BTreeSet<char> {
        self.font().coverage().iter().filter_map(|&cp| char::from_u32(cp)).collect()
    }
}

/// 64-bit FNV-1a over `base` and `parts`.
pub fn derive_seed(base: u64, parts: &[&str]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    let mut feed = |bytes: &[u8]| {
        for &b in bytes {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(PRIME);
        }
    };
    feed(&base.to_le_bytes());
    for part in parts {
        feed(part.as_bytes());
        feed(&[0xff]);
    }
    hash
}

/// Build the content of one proof unit.
pub fn generate(ctx: &GenerateContext<'_>) -> Content {
    match ctx.config.definition().shape {
        ContentShape::Charset => inventory::charset(ctx),
        ContentShape::Spacing => inventory::spacing(ctx),
        ContentShape::Paragraph => latin::paragraph(ctx),
        ContentShape::Diacritics { words_per_letter } => latin::diacritics(ctx, words_per_letter),
        ContentShape::Paired => latin::paired(ctx),
        ContentShape::Generative => latin::generative(ctx),
        ContentShape::Corpus(which) => curated(ctx, which),
        ContentShape::ArabicCharset => arabic::contextual_forms(ctx),
        ContentShape::ArabicWords { language, words_per_form } => {
            arabic::words(ctx, language, words_per_form)
        }
    }
}

fn curated(ctx: &GenerateContext<'_>, which: Corpus) -> Content {
    let text = match which {
        Corpus::Misc => {
            format!("{}\n{}\n", corpus::BIG_RANDOM_NUMBERS, corpus::ADDITIONAL_SMALL_TEXT)
        }
        Corpus::ArabicVocalization => format!("{}\n", corpus::ARABIC_VOCALIZATION),
        Corpus::ArabicLatinMixed => format!("{}\n", corpus::ARABIC_LATIN_MIXED),
        Corpus::ArabicNumbers => format!("{}\n", corpus::ARABIC_FARSI_URDU_NUMBERS),
    };
    let mut builder = ctx.builder();
    builder.push(&text);
    builder.finish()
}
