//! `CharsetCategories`: named subsets of a font's coverage.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use log::debug;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};

use crate::{
    CharClass, CharsetOrdering, base_letter,
    templates::{
        AR_TEMPLATE, ARFA_DUAL_JOIN, ARFA_RIGHT_JOIN, FA_TEMPLATE, LOWER_TEMPLATE, UPPER_TEMPLATE,
    },
};

/// Named character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Uppercase,
    Lowercase,
    UppercaseBase,
    LowercaseBase,
    Accented,
    AccentedPlus,
    OtherLetters,
    Digits,
    OtherNumbers,
    Punctuation,
    Math,
    Currency,
    ModifierSymbols,
    OtherSymbols,
    DiacriticMarks,
    Latin,
    Arabic,
    ArabicBlock,
    ArabicTemplate,
    FarsiTemplate,
    DualJoining,
    RightJoining,
}

impl Category {
    pub const ALL: [Category; 22] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::UppercaseBase,
        Category::LowercaseBase,
        Category::Accented,
        Category::AccentedPlus,
        Category::OtherLetters,
        Category::Digits,
        Category::OtherNumbers,
        Category::Punctuation,
        Category::Math,
        Category::Currency,
        Category::ModifierSymbols,
        Category::OtherSymbols,
        Category::DiacriticMarks,
        Category::Latin,
        Category::Arabic,
        Category::ArabicBlock,
        Category::ArabicTemplate,
        Category::FarsiTemplate,
        Category::DualJoining,
        Category::RightJoining,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::UppercaseBase => "uppercase_base",
            Category::LowercaseBase => "lowercase_base",
            Category::Accented => "accented",
            Category::AccentedPlus => "accented_plus",
            Category::OtherLetters => "other_letters",
            Category::Digits => "digits",
            Category::OtherNumbers => "other_numbers",
            Category::Punctuation => "punctuation",
            Category::Math => "math",
            Category::Currency => "currency",
            Category::ModifierSymbols => "modifier_symbols",
            Category::OtherSymbols => "other_symbols",
            Category::DiacriticMarks => "diacritic_marks",
            Category::Latin => "latin",
            Category::Arabic => "arabic",
            Category::ArabicBlock => "arabic_block",
            Category::ArabicTemplate => "arabic_template",
            Category::FarsiTemplate => "farsi_template",
            Category::DualJoining => "dual_joining",
            Category::RightJoining => "right_joining",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ARABIC_BLOCK: std::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Categorised view of one font's coverage.
///
/// Every category is a subset of the coverage it was built from. An empty
/// coverage produces empty categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharsetCategories {
    categories: BTreeMap<Category, Vec<char>>,
    accented_by_base: BTreeMap<char, Vec<char>>,
    relevant: Vec<char>,
    coverage_len: usize,
}

impl CharsetCategories {
    /// Categorise a set of codepoints. Values that are not Unicode scalars are ignored.
    pub fn analyze(coverage: &BTreeSet<u32>) -> Self {
        let mut categories: BTreeMap<Category, Vec<char>> = BTreeMap::new();
        let mut accented_by_base: BTreeMap<char, Vec<char>> = BTreeMap::new();
        let mut relevant = Vec::new();

        for c in coverage.iter().filter_map(|&cp| char::from_u32(cp)) {
            let mut add = |cat: Category| categories.entry(cat).or_default().push(c);
            let class = CharClass::of(c);
            if class != CharClass::Excluded {
                relevant.push(c);
            }

            match c.general_category() {
                GeneralCategory::UppercaseLetter => add(Category::Uppercase),
                GeneralCategory::LowercaseLetter => add(Category::Lowercase),
                GeneralCategory::OtherLetter => add(Category::OtherLetters),
                GeneralCategory::DecimalNumber => add(Category::Digits),
                GeneralCategory::OtherNumber => add(Category::OtherNumbers),
                GeneralCategory::MathSymbol => add(Category::Math),
                GeneralCategory::CurrencySymbol => add(Category::Currency),
                GeneralCategory::ModifierSymbol => add(Category::ModifierSymbols),
                GeneralCategory::OtherSymbol => add(Category::OtherSymbols),
                GeneralCategory::NonspacingMark | GeneralCategory::EnclosingMark => {
                    add(Category::DiacriticMarks)
                }
                _ => {}
            }
            if class == CharClass::Punctuation {
                add(Category::Punctuation);
            }

            match class {
                CharClass::UppercaseBase if c.is_uppercase() => add(Category::UppercaseBase),
                CharClass::LowercaseBase => add(Category::LowercaseBase),
                CharClass::Accented => {
                    add(Category::Accented);
                    if let Some(base) = base_letter(c) {
                        accented_by_base.entry(base).or_default().push(c);
                    }
                }
                _ => {}
            }

            match c.script() {
                Script::Latin => add(Category::Latin),
                Script::Arabic => {
                    add(Category::Arabic);
                    if ARABIC_BLOCK.contains(&c) {
                        add(Category::ArabicBlock);
                    }
                }
                _ => {}
            }

            if AR_TEMPLATE.contains(c) {
                add(Category::ArabicTemplate);
            }
            if FA_TEMPLATE.contains(c) {
                add(Category::FarsiTemplate);
            }
            if ARFA_DUAL_JOIN.contains(c) {
                add(Category::DualJoining);
            }
            if ARFA_RIGHT_JOIN.contains(c) {
                add(Category::RightJoining);
            }
        }

        // Accented letters first, then cased letters outside the basic Latin alphabet.
        let mut accented_plus = categories.get(&Category::Accented).cloned().unwrap_or_default();
        let cased = [Category::Uppercase, Category::Lowercase]
            .iter()
            .flat_map(|cat| categories.get(cat).into_iter().flatten().copied())
            .filter(|&c| {
                CharClass::of(c) != CharClass::Accented
                    && !UPPER_TEMPLATE.contains(c)
                    && !LOWER_TEMPLATE.contains(c)
            })
            .collect::<Vec<_>>();
        accented_plus.extend(cased);
        if !accented_plus.is_empty() {
            categories.insert(Category::AccentedPlus, accented_plus);
        }

        debug!(
            "categorised {} codepoints into {} categories",
            coverage.len(),
            categories.len()
        );

        Self { categories, accented_by_base, relevant, coverage_len: coverage.len() }
    }

    /// Characters in `category`, in ascending codepoint order
    /// (`accented_plus` lists accented letters first).
    pub fn chars(&self, category: Category) -> &[char] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn string(&self, category: Category) -> String {
        self.chars(category).iter().collect()
    }

    pub fn contains(&self, category: Category, c: char) -> bool {
        self.chars(category).contains(&c)
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.chars(category).is_empty()
    }

    /// Codepoint set of `category`.
    pub fn codepoints(&self, category: Category) -> BTreeSet<u32> {
        self.chars(category).iter().map(|&c| c as u32).collect()
    }

    /// Non-empty categories with their characters.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[char])> {
        self.categories.iter().map(|(cat, chars)| (*cat, chars.as_slice()))
    }

    /// Accented letters grouped by the letter they decorate.
    pub fn accented_by_base(&self) -> &BTreeMap<char, Vec<char>> {
        &self.accented_by_base
    }

    /// The font has uppercase letters but no lowercase ones.
    pub fn uppercase_only(&self) -> bool {
        self.is_empty(Category::Lowercase) && !self.is_empty(Category::Uppercase)
    }

    /// The font has lowercase letters but no uppercase ones.
    pub fn lowercase_only(&self) -> bool {
        self.is_empty(Category::Uppercase) && !self.is_empty(Category::Lowercase)
    }

    pub fn has_arabic_support(&self) -> bool {
        !self.is_empty(Category::Arabic)
    }

    /// Proof-relevant characters in `ordering`.
    pub fn filtered_charset(&self, ordering: &CharsetOrdering) -> Vec<char> {
        ordering.order(self.relevant.iter().copied())
    }

    /// Proof-relevant characters split by `ordering`'s groups.
    pub fn filtered_groups<'a>(&self, ordering: &'a CharsetOrdering) -> Vec<(&'a str, Vec<char>)> {
        ordering.grouped(self.relevant.iter().copied())
    }

    /// Size of the coverage this was built from.
    pub fn coverage_len(&self) -> usize {
        self.coverage_len
    }
}
