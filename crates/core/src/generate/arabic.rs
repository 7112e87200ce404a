//! Arabic-script proofs: contextual forms and per-letter word lists.

use charset::{
    Category,
    templates::{AR_TEMPLATE, ARFA_DUAL_JOIN, ARFA_RIGHT_JOIN, BEH, FA_TEMPLATE, HAMZA},
};
use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::GenerateContext;
use crate::{
    Content,
    config::WORDSIV_SEED,
    corpus::{AR_WORDS, FA_WORDS},
    features::POSITIONAL_FORMS,
    registry::Language,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Initial,
    Medial,
    Final,
}

impl Position {
    const ALL: [Position; 3] = [Position::Initial, Position::Medial, Position::Final];

    fn matches(self, word: &str, letter: char) -> bool {
        match self {
            Position::Initial => word.starts_with(letter),
            Position::Final => word.ends_with(letter),
            Position::Medial => {
                let chars: Vec<char> = word.chars().collect();
                chars.len() > 2 && chars[1..chars.len() - 1].contains(&letter)
            }
        }
    }
}

fn has_positional_forms(ctx: &GenerateContext<'_>) -> bool {
    POSITIONAL_FORMS.iter().all(|f| ctx.font().has_feature(f.tag()))
}

/// Isolated form of every letter in the Arabic block, followed by its joined
/// forms when the font shapes them.
pub(super) fn contextual_forms(ctx: &GenerateContext<'_>) -> Content {
    let joined = has_positional_forms(ctx);
    let mut text = String::new();
    for &c in ctx.categories.chars(Category::ArabicBlock) {
        if c == HAMZA {
            text.push_str(&format!("{c} "));
        } else if ARFA_DUAL_JOIN.contains(c) {
            if joined {
                text.push_str(&format!("{c} {c}{c}{c} "));
            } else {
                text.push_str(&format!("{c} "));
            }
        } else if ARFA_RIGHT_JOIN.contains(c) {
            if joined {
                text.push_str(&format!("{c} {BEH}{c} "));
            } else {
                text.push_str(&format!("{c} "));
            }
        }
    }

    let mut builder = ctx.builder();
    builder.push(&text);
    builder.finish()
}

/// For each covered template letter: the letter, then words using it in
/// initial, medial and final position.
///
/// A letter with no usable word marks the content partial. When the font
/// shapes joined forms, so does a position the vocabulary has words for but
/// the font's coverage rules out.
pub(super) fn words(ctx: &GenerateContext<'_>, language: Language, per_form: usize) -> Content {
    let (template, vocabulary) = match language {
        Language::Arabic => (AR_TEMPLATE, AR_WORDS),
        Language::Farsi => (FA_TEMPLATE, FA_WORDS),
    };
    let font = ctx.font();
    let joined = has_positional_forms(ctx);
    let usable: Vec<&str> =
        vocabulary.iter().copied().filter(|w| w.chars().all(|c| font.covers(c))).collect();

    let mut text = String::new();
    let mut partial = false;
    for letter in template.chars().filter(|&c| font.covers(c)) {
        text.push_str(&format!("{letter}. "));
        let mut rng = StdRng::seed_from_u64(ctx.seed(WORDSIV_SEED, &letter.to_string()));
        let (picked, missing) = letter_words(letter, vocabulary, &usable, per_form, &mut rng);
        if picked.is_empty() {
            partial = true;
        } else {
            text.push_str(&picked.join(" "));
            text.push(' ');
            if joined && !missing.is_empty() {
                debug!("{letter}: no usable word for {missing:?}");
                partial = true;
            }
        }
        text.push('\n');
    }

    let mut builder = ctx.builder();
    builder.push(&text);
    if partial {
        builder.mark_partial();
    }
    builder.finish()
}

/// Up to `per_form` words from `usable` per position of `letter`, and the
/// positions `vocabulary` has words for that `usable` cannot fill.
fn letter_words<'a>(
    letter: char,
    vocabulary: &[&str],
    usable: &[&'a str],
    per_form: usize,
    rng: &mut StdRng,
) -> (Vec<&'a str>, Vec<Position>) {
    let mut picked = Vec::new();
    let mut missing = Vec::new();
    for position in Position::ALL {
        let candidates: Vec<&str> =
            usable.iter().copied().filter(|w| position.matches(w, letter)).collect();
        if candidates.is_empty() {
            if vocabulary.iter().any(|w| position.matches(w, letter)) {
                missing.push(position);
            }
            continue;
        }
        picked.extend(candidates.choose_multiple(rng, per_form).copied());
    }
    (picked, missing)
}
