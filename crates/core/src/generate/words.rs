//! Seeded word picking constrained to a glyph set.

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// How vocabulary words are cased before they are checked against the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    /// First letter uppercase, rest lowercase.
    Cap,
    Upper,
}

impl Case {
    pub fn apply(self, word: &str) -> String {
        match self {
            Case::Lower => word.to_lowercase(),
            Case::Upper => upper(word),
            Case::Cap => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => upper(&first.to_string()) + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Uppercase with a capital sharp s instead of `SS`.
pub fn upper(text: &str) -> String {
    text.replace('ß', "ẞ").to_uppercase()
}

/// Constraints for one [`WordPicker::words`] call.
#[derive(Debug, Clone)]
pub struct WordQuery<'a> {
    pub glyphs: &'a BTreeSet<char>,
    pub case: Case,
    /// Lowercase letter the word must start with.
    pub starts_with: Option<char>,
    /// Lowercase letter the word must contain.
    pub contains: Option<char>,
    pub min_len: usize,
    pub max_len: usize,
    pub count: usize,
}

impl<'a> WordQuery<'a> {
    pub fn new(glyphs: &'a BTreeSet<char>, case: Case, count: usize) -> Self {
        Self {
            glyphs,
            case,
            starts_with: None,
            contains: None,
            min_len: MIN_WORD_LENGTH,
            max_len: MAX_WORD_LENGTH,
            count,
        }
    }

    pub fn starts_with(mut self, letter: char) -> Self {
        self.starts_with = Some(letter);
        self
    }

    pub fn contains(mut self, letter: char) -> Self {
        self.contains = Some(letter);
        self
    }

    pub fn lengths(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len.max(min_len);
        self
    }

    fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_len || len > self.max_len {
            return false;
        }
        if self.starts_with.is_some_and(|c| !word.starts_with(c)) {
            return false;
        }
        if self.contains.is_some_and(|c| !word.contains(c)) {
            return false;
        }
        self.case.apply(word).chars().all(|c| self.glyphs.contains(&c))
    }
}

/// Picks vocabulary words with a seeded generator.
///
/// When no vocabulary word satisfies a query, pseudo-words are built from the
/// allowed letters instead and the picker remembers that it had to.
#[derive(Debug)]
pub struct WordPicker<'v> {
    vocabulary: &'v [&'static str],
    rng: StdRng,
    synthesized: bool,
}

impl<'v> WordPicker<'v> {
    pub fn new(vocabulary: &'v [&'static str], seed: u64) -> Self {
        Self { vocabulary, rng: StdRng::seed_from_u64(seed), synthesized: false }
    }

    /// Pseudo-words were generated for at least one query.
    pub fn synthesized(&self) -> bool {
        self.synthesized
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn words(&mut self, query: &WordQuery<'_>) -> Vec<String> {
        if query.count == 0 {
            return Vec::new();
        }
        let candidates: Vec<&str> =
            self.vocabulary.iter().copied().filter(|w| query.accepts(w)).collect();
        if candidates.is_empty() {
            return self.synthesize(query);
        }
        (0..query.count)
            .filter_map(|_| candidates.choose(&mut self.rng))
            .map(|w| query.case.apply(w))
            .collect()
    }

    fn synthesize(&mut self, query: &WordQuery<'_>) -> Vec<String> {
        let inner_case = if query.case == Case::Cap { Case::Lower } else { query.case };
        let letters: Vec<char> = query
            .glyphs
            .iter()
            .flat_map(|c| c.to_lowercase())
            .filter(|c| c.is_alphabetic())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter(|c| inner_case.apply(&c.to_string()).chars().all(|u| query.glyphs.contains(&u)))
            .collect();
        let required: Vec<char> = query.starts_with.into_iter().chain(query.contains).collect();
        if letters.is_empty() || required.iter().any(|c| !letters.contains(c)) {
            return Vec::new();
        }

        self.synthesized = true;
        let min_len = query.min_len.max(required.len()).max(1);
        let max_len = query.max_len.max(min_len);
        (0..query.count)
            .map(|_| {
                let len = self.rng.gen_range(min_len..=max_len);
                let mut word: Vec<char> =
                    (0..len).filter_map(|_| letters.choose(&mut self.rng).copied()).collect();
                if let Some(first) = query.starts_with {
                    word[0] = first;
                }
                if let Some(inner) = query.contains {
                    if !word.contains(&inner) {
                        let at = if word.len() > 1 { self.rng.gen_range(1..word.len()) } else { 0 };
                        word[at] = inner;
                    }
                }
                query.case.apply(&word.into_iter().collect::<String>())
            })
            .filter(|word| word.chars().all(|c| query.glyphs.contains(&c)))
            .collect()
    }
}

/// Shape of generated running text.
#[derive(Debug, Clone)]
pub struct TextShape<'a> {
    pub glyphs: &'a BTreeSet<char>,
    pub case: Case,
    pub paragraphs: usize,
    pub words_per_paragraph: usize,
    /// Share of tokens replaced by numbers.
    pub numbers: f64,
    /// Share of words followed or wrapped by punctuation.
    pub punctuation: f64,
}

const BRACKETS: &[(char, char)] =
    &[('(', ')'), ('[', ']'), ('{', '}'), ('«', '»'), ('“', '”'), ('‘', '’'), ('¿', '?'), ('¡', '!')];

impl WordPicker<'_> {
    /// Paragraphs of sentences over the allowed glyphs.
    pub fn paragraphs(&mut self, shape: &TextShape<'_>) -> Vec<String> {
        let digits: Vec<char> = shape.glyphs.iter().copied().filter(char::is_ascii_digit).collect();
        let marks: Vec<char> = shape
            .glyphs
            .iter()
            .copied()
            .filter(|c| c.is_ascii_punctuation() || BRACKETS.iter().any(|(open, _)| open == c))
            .filter(|c| match BRACKETS.iter().find(|(open, _)| open == c) {
                Some((_, close)) => shape.glyphs.contains(close),
                None => *c == '?' || *c == '!' || !BRACKETS.iter().any(|(_, close)| close == c),
            })
            .collect();
        let full_stop = shape.glyphs.contains(&'.');
        let pool = self.words(
            &WordQuery::new(shape.glyphs, shape.case, shape.words_per_paragraph * 4).lengths(1, MAX_WORD_LENGTH),
        );
        if pool.is_empty() && digits.is_empty() {
            return Vec::new();
        }

        let mut paragraphs = Vec::with_capacity(shape.paragraphs);
        for _ in 0..shape.paragraphs {
            let mut tokens: Vec<String> = Vec::with_capacity(shape.words_per_paragraph);
            let mut sentence_left = self.rng.gen_range(6..=14);
            let mut capitalize = true;
            for _ in 0..shape.words_per_paragraph {
                let mut token = if !digits.is_empty() && (pool.is_empty() || self.rng.gen_bool(shape.numbers)) {
                    let len = self.rng.gen_range(1..=4);
                    (0..len).filter_map(|_| digits.choose(&mut self.rng)).collect::<String>()
                } else {
                    let Some(word) = pool.choose(&mut self.rng) else { continue };
                    if capitalize && shape.case == Case::Lower {
                        let cap = Case::Cap.apply(word);
                        if cap.chars().all(|c| shape.glyphs.contains(&c)) { cap } else { word.clone() }
                    } else {
                        word.clone()
                    }
                };
                capitalize = false;

                if !marks.is_empty() && self.rng.gen_bool(shape.punctuation) {
                    if let Some(&mark) = marks.choose(&mut self.rng) {
                        match BRACKETS.iter().find(|(open, _)| *open == mark) {
                            Some((open, close)) => token = format!("{open}{token}{close}"),
                            None => token.push(mark),
                        }
                    }
                }

                sentence_left -= 1;
                if sentence_left == 0 {
                    if full_stop && !token.ends_with(|c: char| c.is_ascii_punctuation()) {
                        token.push('.');
                    }
                    sentence_left = self.rng.gen_range(6..=14);
                    capitalize = true;
                }
                tokens.push(token);
            }
            if let Some(last) = tokens.last_mut() {
                if full_stop && !last.ends_with('.') {
                    last.push('.');
                }
            }
            paragraphs.push(tokens.join(" "));
        }
        paragraphs
    }
}
