//! OpenType feature defaults.

use font_model::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTag(pub &'static str);

impl FeatureTag {
    pub fn tag(self) -> Tag {
        font_model::tag(self.0)
    }
}

impl AsRef<str> for FeatureTag {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Features switched on unless a proof says otherwise.
pub const DEFAULT_ON_FEATURES: &[FeatureTag] = &[
    FeatureTag("ccmp"), // Glyph composition/decomposition
    FeatureTag("kern"), // Kerning
    FeatureTag("calt"), // Contextual alternates
    FeatureTag("rlig"), // Required ligatures
    FeatureTag("liga"), // Standard ligatures
    FeatureTag("mark"), // Mark positioning
    FeatureTag("mkmk"), // Mark-to-mark positioning
    FeatureTag("clig"), // Contextual ligatures
    FeatureTag("dist"), // Distances
    FeatureTag("rclt"), // Required contextual alternates
    FeatureTag("rvrn"), // Required variation alternates
    FeatureTag("curs"), // Cursive positioning
    FeatureTag("locl"), // Localized forms
];

/// Features the shaper applies on its own; never offered as toggles.
pub const HIDDEN_FEATURES: &[FeatureTag] = &[
    FeatureTag("init"),
    FeatureTag("medi"),
    FeatureTag("med2"),
    FeatureTag("fina"),
    FeatureTag("fin2"),
    FeatureTag("fin3"),
    FeatureTag("isol"),
    FeatureTag("curs"),
    FeatureTag("aalt"),
    FeatureTag("rand"),
];

/// Positional forms exercised by Arabic-script proofs.
pub const POSITIONAL_FORMS: &[FeatureTag] =
    &[FeatureTag("init"), FeatureTag("medi"), FeatureTag("fina")];

pub fn is_default_on(tag: Tag) -> bool {
    DEFAULT_ON_FEATURES.iter().any(|f| f.tag() == tag)
}

pub fn is_hidden(tag: Tag) -> bool {
    HIDDEN_FEATURES.iter().any(|f| f.tag() == tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curs_is_default_on_but_hidden() {
        let curs = font_model::tag("curs");
        assert!(is_default_on(curs));
        assert!(is_hidden(curs));
    }

    #[test]
    fn stylistic_sets_are_off_and_visible() {
        let ss01 = font_model::tag("ss01");
        assert!(!is_default_on(ss01));
        assert!(!is_hidden(ss01));
    }
}
