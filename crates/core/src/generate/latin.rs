//! Latin-script text proofs: paragraphs, generated text, diacritics and
//! paired styles.

use std::collections::BTreeSet;

use charset::{
    Category, CharsetCategories,
    templates::{LOWER_TEMPLATE, UPPER_TEMPLATE},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{
    GenerateContext,
    words::{Case, TextShape, WordPicker, WordQuery, upper},
};
use crate::{
    Content,
    config::{DUAL_STYLE_SEED, WORDSIV_SEED},
    corpus,
};

const INITIAL_CAPS: usize = 2;
const INITIAL_WORDS: usize = 4;
const NUMBER_SHARE: f64 = 0.1;
const PUNCTUATION_SHARE: f64 = 0.1;

/// Generated text plus whether the vocabulary had to be stretched.
struct Text {
    body: String,
    partial: bool,
}

pub(super) fn paragraph(ctx: &GenerateContext<'_>) -> Content {
    let text = paragraph_text(ctx);
    let mut builder = ctx.builder();
    builder.push(&text.body);
    if text.partial {
        builder.mark_partial();
    }
    builder.finish()
}

pub(super) fn generative(ctx: &GenerateContext<'_>) -> Content {
    let text = mixed_text(ctx);
    let mut builder = ctx.builder();
    builder.push(&text.body);
    if text.partial {
        builder.mark_partial();
    }
    builder.finish()
}

/// Paragraph text alternating word by word between the base and paired style.
pub(super) fn paired(ctx: &GenerateContext<'_>) -> Content {
    let text = paragraph_text(ctx);
    let mut builder = match ctx.paired {
        Some(paired) => ctx.builder().paired(paired.instance.font()),
        None => ctx.builder(),
    };

    let mut rng = StdRng::seed_from_u64(ctx.seed(DUAL_STYLE_SEED, "styles"));
    let mut in_paired = false;
    for (i, word) in text.body.split_whitespace().enumerate() {
        let every = rng.gen_range(1..5);
        if i % every == 0 {
            in_paired = i % 2 == 1;
        }
        let word = format!("{word} ");
        if in_paired {
            builder.push_paired(&word);
        } else {
            builder.push(&word);
        }
    }
    if text.partial {
        builder.mark_partial();
    }
    builder.finish()
}

/// ` |é| café idée été` for every accented or extended letter.
pub(super) fn diacritics(ctx: &GenerateContext<'_>, words_per_letter: usize) -> Content {
    let lowered: BTreeSet<char> =
        ctx.coverage_chars().into_iter().flat_map(char::to_lowercase).collect();
    let one_per_line = !ctx.config.definition().is_large();

    let mut text = String::new();
    let mut partial = false;
    for &letter in ctx.categories.chars(Category::AccentedPlus) {
        let key = letter.to_lowercase().next().unwrap_or(letter);
        let words = corpus::accented_words(key);
        if words.is_empty() {
            continue;
        }
        let available: Vec<&str> =
            words.iter().copied().filter(|w| w.chars().all(|c| lowered.contains(&c))).collect();
        let mut rng = StdRng::seed_from_u64(ctx.seed(WORDSIV_SEED, &letter.to_string()));
        let picked: Vec<&str> =
            available.choose_multiple(&mut rng, words_per_letter).copied().collect();
        partial |= picked.len() < words_per_letter;

        text.push_str(&format!(" |{letter}| "));
        for word in picked {
            if letter.is_uppercase() {
                text.push_str(&upper(word));
            } else {
                text.push_str(word);
            }
            text.push(' ');
        }
        if one_per_line {
            text.push('\n');
        }
    }

    let mut builder = ctx.builder();
    builder.push(&text);
    if partial {
        builder.mark_partial();
    }
    builder.finish()
}

fn covers_template(cats: &CharsetCategories, category: Category, template: &str) -> bool {
    template.chars().all(|c| cats.contains(category, c))
}

/// Curated text when the font covers the basic alphabet it needs, otherwise
/// generated text.
fn paragraph_text(ctx: &GenerateContext<'_>) -> Text {
    let cats = ctx.categories;
    let large = ctx.config.definition().is_large();
    let has_upper = covers_template(cats, Category::Uppercase, UPPER_TEMPLATE);
    let has_lower = covers_template(cats, Category::Lowercase, LOWER_TEMPLATE);
    let (mixed, lower, capitals) = if large {
        (corpus::BIG_MIXED_TEXT, corpus::BIG_LOWER_TEXT, corpus::BIG_UPPER_TEXT)
    } else {
        (corpus::SMALL_MIXED_TEXT, corpus::SMALL_LOWER_TEXT, corpus::SMALL_UPPER_TEXT)
    };

    let curated = if cats.uppercase_only() && has_upper {
        Some(capitals.to_string())
    } else if cats.lowercase_only() && has_lower {
        Some(lower.to_string())
    } else if has_upper && has_lower {
        Some(format!("{mixed} {capitals}"))
    } else {
        None
    };
    if let Some(body) = curated {
        return Text { body, partial: false };
    }

    if cats.uppercase_only() {
        single_case_text(ctx, Case::Upper)
    } else if cats.lowercase_only() {
        single_case_text(ctx, Case::Lower)
    } else {
        mixed_text(ctx)
    }
}

fn chars_of(cats: &CharsetCategories, categories: &[Category]) -> BTreeSet<char> {
    categories.iter().flat_map(|&c| cats.chars(c).iter().copied()).collect()
}

/// Per-paragraph generated running text over `glyphs`.
fn running_text(ctx: &GenerateContext<'_>, glyphs: &BTreeSet<char>, case: Case) -> (String, bool) {
    let shape = TextShape {
        glyphs,
        case,
        paragraphs: 1,
        words_per_paragraph: ctx.config.words_per_paragraph as usize,
        numbers: NUMBER_SHARE,
        punctuation: PUNCTUATION_SHARE,
    };
    let mut paragraphs = Vec::new();
    let mut partial = false;
    for index in 0..ctx.config.paragraphs {
        let mut picker =
            WordPicker::new(corpus::ENGLISH_WORDS, ctx.seed(WORDSIV_SEED, &format!("paragraph {index}")));
        paragraphs.extend(picker.paragraphs(&shape));
        partial |= picker.synthesized();
    }
    (paragraphs.join("\n"), partial)
}

/// Initial words for every base capital, then running text, then the same
/// running text in capitals.
fn mixed_text(ctx: &GenerateContext<'_>) -> Text {
    let cats = ctx.categories;
    let lower_base = chars_of(cats, &[Category::LowercaseBase]);

    let mut initials = Vec::new();
    let mut partial = false;
    for &capital in cats.chars(Category::UppercaseBase) {
        let Some(letter) = capital.to_lowercase().next() else { continue };
        let mut glyphs = lower_base.clone();
        glyphs.insert(capital);

        let mut picker =
            WordPicker::new(corpus::ENGLISH_WORDS, ctx.seed(WORDSIV_SEED, &capital.to_string()));
        initials.extend(picker.words(&WordQuery::new(&glyphs, Case::Cap, INITIAL_CAPS).starts_with(letter)));
        initials.extend(picker.words(&WordQuery::new(&glyphs, Case::Lower, INITIAL_WORDS).contains(letter)));
        partial |= picker.synthesized();
    }

    let glyphs = chars_of(
        cats,
        &[Category::Uppercase, Category::Lowercase, Category::Digits, Category::Punctuation],
    );
    let (running, stretched) = running_text(ctx, &glyphs, Case::Lower);
    partial |= stretched;

    let mut parts = Vec::new();
    if !initials.is_empty() {
        parts.push(initials.join(" "));
    }
    if !running.is_empty() {
        parts.push(running.clone());
        parts.push(upper(&running));
    }
    Text { body: parts.join("\n\n"), partial }
}

/// Text for fonts with only one case: words starting with each letter, then
/// running text.
fn single_case_text(ctx: &GenerateContext<'_>, case: Case) -> Text {
    let cats = ctx.categories;
    let letters = match case {
        Case::Upper => cats.chars(Category::Uppercase),
        _ => cats.chars(Category::Lowercase),
    };
    let coverage = ctx.coverage_chars();

    let mut initials = Vec::new();
    let mut partial = false;
    for &initial in letters {
        let Some(letter) = initial.to_lowercase().next() else { continue };
        let mut picker =
            WordPicker::new(corpus::ENGLISH_WORDS, ctx.seed(WORDSIV_SEED, &initial.to_string()));
        initials.extend(picker.words(&WordQuery::new(&coverage, case, INITIAL_WORDS).starts_with(letter)));
        partial |= picker.synthesized();
    }

    let (running, stretched) = running_text(ctx, &coverage, case);
    partial |= stretched;

    let mut body = initials.join(" ");
    if !running.is_empty() {
        if !body.is_empty() {
            body.push(' ');
        }
        if case == Case::Upper {
            body.push_str("- ");
        }
        body.push_str(&running);
    }
    Text { body, partial }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use charset::CharsetCategories;
    use font_model::FontHandle;

    use super::*;
    use crate::{
        FontInstance, PairKind, PairedInstance, ProofInstanceConfig, RunStyle, Settings,
        generate::generate,
    };

    fn config(key: &str) -> ProofInstanceConfig {
        let mut settings = Settings::default();
        settings.proof_options.insert(key.to_string(), true);
        settings.resolve(&BTreeSet::new()).unwrap().remove(0)
    }

    fn font(path: &str, chars: &str) -> Arc<FontHandle> {
        Arc::new(FontHandle::builder(path).with_chars(chars).build())
    }

    fn categories(font: &FontHandle) -> CharsetCategories {
        CharsetCategories::analyze(font.coverage())
    }

    const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,;:!?()- ";

    #[test]
    fn full_alphabet_uses_curated_text() {
        let font = font("Sample-Regular.ttf", LATIN);
        let instance = FontInstance::default_for(Arc::clone(&font));
        let cats = categories(&font);
        let config = config("basic_paragraph_large");
        let content = generate(&GenerateContext::new(&instance, &cats, &config));
        assert!(content.text().starts_with(corpus::BIG_MIXED_TEXT));
        assert!(!content.partial);
    }

    #[test]
    fn generated_text_is_reproducible_and_covered() {
        let font = font("Sample-Regular.ttf", "ABEHINORSTabehinorst0123., ");
        let instance = FontInstance::default_for(Arc::clone(&font));
        let cats = categories(&font);
        let config = config("generative_text_small");
        let ctx = GenerateContext::new(&instance, &cats, &config);

        let first = generate(&ctx);
        let second = generate(&ctx);
        assert_eq!(first, second);
        assert!(!first.is_empty());
        assert!(first.fallback.is_empty(), "{:?}", first.fallback);
    }

    #[test]
    fn diacritic_words_only_use_covered_letters() {
        let font = font("Sample-Regular.ttf", "abcdefilmnorstuéèÉ");
        let instance = FontInstance::default_for(Arc::clone(&font));
        let cats = categories(&font);
        let config = config("diacritic_words_small");
        let content = generate(&GenerateContext::new(&instance, &cats, &config));
        let text = content.text();
        assert!(text.contains(" |é| "));
        assert!(text.contains(" |É| "));
        for line in text.lines().filter(|l| l.contains("|é|")) {
            let words: Vec<&str> = line.split_whitespace().skip(1).collect();
            assert!(words.iter().all(|w| w.chars().all(|c| font.covers(c))), "{line}");
        }
    }

    #[test]
    fn paired_text_alternates_styles() {
        let regular = font("Sample-Regular.ttf", LATIN);
        let italic = font("Sample-Italic.ttf", LATIN);
        let instance = FontInstance::default_for(Arc::clone(&regular));
        let partner = PairedInstance {
            instance: FontInstance::default_for(italic),
            kind: PairKind::UprightItalic,
        };
        let cats = categories(&regular);
        let config = config("paired_styles_paragraph_small");
        let ctx = GenerateContext::new(&instance, &cats, &config).with_paired(&partner);
        let content = generate(&ctx);
        assert!(content.runs.iter().any(|r| r.style == RunStyle::Primary));
        assert!(content.runs.iter().any(|r| r.style == RunStyle::Paired));
    }

    #[test]
    fn font_without_letters_yields_no_text() {
        let font = font("Symbols-Regular.ttf", "+-=");
        let instance = FontInstance::default_for(Arc::clone(&font));
        let cats = categories(&font);
        let config = config("basic_paragraph_small");
        assert!(generate(&GenerateContext::new(&instance, &cats, &config)).is_empty());
    }

    #[test]
    fn lowercase_only_font_gets_lowercase_text() {
        let font = font("Sample-Lower.ttf", "abehinorst ");
        let instance = FontInstance::default_for(Arc::clone(&font));
        let cats = categories(&font);
        assert!(cats.lowercase_only());
        let mut config = config("basic_paragraph_small");
        config.paragraphs = 2;
        config.words_per_paragraph = 10;

        let content = generate(&GenerateContext::new(&instance, &cats, &config));
        assert!(!content.is_empty());
        assert!(content.fallback.is_empty(), "{:?}", content.fallback);
        assert_eq!(content.text().lines().count(), 2);
    }
}
