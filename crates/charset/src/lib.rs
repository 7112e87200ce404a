//! # Charset
//!
//! Categorises a font's codepoint coverage using Unicode general category,
//! script and canonical decomposition data, and orders the proof-relevant
//! subset through a configurable [`CharsetOrdering`] policy table.
//!
//! ```
//! use std::collections::BTreeSet;
//! use charset::{Category, CharsetCategories, CharsetOrdering};
//!
//! let coverage: BTreeSet<u32> = "aAé1!".chars().map(|c| c as u32).collect();
//! let cats = CharsetCategories::analyze(&coverage);
//!
//! assert_eq!(cats.string(Category::Accented), "é");
//! let ordered: String = cats.filtered_charset(&CharsetOrdering::default()).into_iter().collect();
//! assert_eq!(ordered, "Aa1!é");
//! ```

mod categories;
mod class;
mod ordering;
pub mod templates;

pub use categories::{Category, CharsetCategories};
pub use class::{CharClass, base_letter, is_accented, is_combining_mark};
pub use ordering::{CharsetOrdering, OrderingGroup};
