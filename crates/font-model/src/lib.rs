//! # Font Model
//!
//! Read-only view of a font file for proof assembly: codepoint coverage,
//! variation axes, advertised OpenType features and family/style identity.
//!
//! Fonts are never modified. Parsing is delegated to `read-fonts` and `skrifa`.
//!
//! ## Example
//!
//! ```no_run
//! use font_model::{FontCache, FontHandle};
//!
//! let font = FontHandle::load("Sample-Regular.ttf").unwrap();
//! println!("{} {} covers {} codepoints", font.family(), font.style(), font.coverage().len());
//!
//! // Within a run, go through the cache so each path is parsed once.
//! let cache = FontCache::default();
//! let font = cache.get_or_load("Sample-Regular.ttf").unwrap();
//! assert!(font.axes().is_empty() || font.is_variable());
//! ```

mod cache;
mod error;
mod font;

pub use cache::FontCache;
pub use error::{LoadError, Result};
pub use font::{FontHandle, FontHandleBuilder, read_with_timeout};
pub use read_fonts::types::Tag;

use std::time::Duration;

/// Default bound on a single font-file read.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a tag from a string, space-padding or truncating to four bytes.
///
/// ```
/// use font_model::tag;
/// assert_eq!(tag("wght").to_string(), "wght");
/// assert_eq!(tag("cv1").to_string(), "cv1 ");
/// ```
pub fn tag(s: &str) -> Tag {
    let mut bytes = [b' '; 4];
    for (dst, src) in bytes.iter_mut().zip(s.as_bytes().iter()) {
        *dst = *src;
    }
    Tag::new(&bytes)
}

/// One variation axis as declared in the font's `fvar` table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDefinition {
    pub tag: Tag,
    pub min_value: f32,
    pub default_value: f32,
    pub max_value: f32,
}

impl AxisDefinition {
    pub fn new(tag: &str, min_value: f32, default_value: f32, max_value: f32) -> Self {
        Self { tag: self::tag(tag), min_value, default_value, max_value }
    }

    /// Whether `value` lies within `[min_value, max_value]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_pads_short_input() {
        assert_eq!(tag("ss1"), Tag::new(b"ss1 "));
    }

    #[test]
    fn tag_truncates_long_input() {
        assert_eq!(tag("weight"), Tag::new(b"weig"));
    }

    #[test]
    fn axis_contains_is_inclusive() {
        let axis = AxisDefinition::new("wght", 100.0, 400.0, 900.0);
        assert!(axis.contains(100.0));
        assert!(axis.contains(900.0));
        assert!(!axis.contains(1000.0));
        assert!(!axis.contains(99.5));
    }
}
