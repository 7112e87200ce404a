//! Sibling-style matching for paired-style proofs.
//!
//! Pairing is a name and OS/2 heuristic. When nothing matches, a font is
//! paired with itself.

use std::sync::Arc;

use font_model::{FontHandle, Tag, tag};
use log::debug;
use serde::Serialize;

use crate::FontInstance;

const STYLE_WORDS: &[&str] = &["regular", "italic", "oblique", "bold"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    UprightItalic,
    RegularBold,
    /// No sibling found; the font is proofed against itself.
    Identity,
}

/// A base font and the sibling its paired runs are set in.
#[derive(Debug, Clone)]
pub struct StylePair {
    pub base: Arc<FontHandle>,
    pub paired: Arc<FontHandle>,
    pub kind: PairKind,
}

impl StylePair {
    pub fn base_style(&self) -> &str {
        self.base.style_name()
    }

    pub fn paired_style(&self) -> &str {
        self.paired.style_name()
    }
}

/// The instance paired runs are set in.
#[derive(Debug, Clone, Serialize)]
pub struct PairedInstance {
    pub instance: FontInstance,
    pub kind: PairKind,
}

/// Matches fonts of the working set by normalised family name.
#[derive(Debug, Clone, Default)]
pub struct StylePairer {
    fonts: Vec<Arc<FontHandle>>,
}

impl StylePairer {
    pub fn new(fonts: impl IntoIterator<Item = Arc<FontHandle>>) -> Self {
        Self { fonts: fonts.into_iter().collect() }
    }

    /// Find the sibling of `base`: upright/italic at the same weight first,
    /// then regular/bold, else `base` itself.
    pub fn pair(&self, base: &Arc<FontHandle>) -> StylePair {
        let family = normalize_family(base.family_name());
        let siblings: Vec<&Arc<FontHandle>> = self
            .fonts
            .iter()
            .filter(|f| f.path() != base.path())
            .filter(|f| normalize_family(f.family_name()) == family)
            .collect();

        let upright_italic = siblings.iter().find(|f| {
            f.weight_class() == base.weight_class() && f.is_italic() != base.is_italic()
        });
        if let Some(paired) = upright_italic {
            return StylePair {
                base: Arc::clone(base),
                paired: Arc::clone(paired),
                kind: PairKind::UprightItalic,
            };
        }

        if let Some(role) = weight_role(base) {
            let regular_bold = siblings
                .iter()
                .find(|f| f.is_italic() == base.is_italic() && weight_role(f) == Some(role.other()));
            if let Some(paired) = regular_bold {
                return StylePair {
                    base: Arc::clone(base),
                    paired: Arc::clone(paired),
                    kind: PairKind::RegularBold,
                };
            }
        }

        debug!("{}: no sibling style, pairing with itself", base.path().display());
        StylePair { base: Arc::clone(base), paired: Arc::clone(base), kind: PairKind::Identity }
    }

    /// Partner instance for a paired proof of `instance`.
    ///
    /// Variable fonts toggle `ital`, then `slnt`, then `wght` within their own
    /// axes; static fonts use [`StylePairer::pair`].
    pub fn partner(&self, instance: &FontInstance) -> PairedInstance {
        let font = instance.font();
        if !font.is_variable() {
            let pair = self.pair(font);
            return PairedInstance {
                instance: FontInstance::new(pair.paired, Vec::new()),
                kind: pair.kind,
            };
        }

        let toggles: [(Tag, PairKind, fn(f32, f32, f32) -> f32); 3] = [
            (tag("ital"), PairKind::UprightItalic, |v, min, max| if v >= 0.5 { min } else { max }),
            (tag("slnt"), PairKind::UprightItalic, |v, min, max| {
                if v == 0.0 { if min < 0.0 { min } else { max } } else { 0.0_f32.clamp(min, max) }
            }),
            (tag("wght"), PairKind::RegularBold, |v, min, max| {
                if v >= 600.0 { 400.0_f32.clamp(min, max) } else { 700.0_f32.clamp(min, max) }
            }),
        ];

        for (axis_tag, kind, toggle) in toggles {
            let (Some(axis), Some(value)) = (font.axis(axis_tag), instance.value(axis_tag)) else {
                continue;
            };
            let partner = toggle(value, axis.min_value, axis.max_value);
            if partner != value {
                return PairedInstance { instance: instance.with_value(axis_tag, partner), kind };
            }
        }

        PairedInstance { instance: instance.clone(), kind: PairKind::Identity }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeightRole {
    Regular,
    Bold,
}

impl WeightRole {
    fn other(self) -> Self {
        match self {
            WeightRole::Regular => WeightRole::Bold,
            WeightRole::Bold => WeightRole::Regular,
        }
    }
}

fn weight_role(font: &FontHandle) -> Option<WeightRole> {
    let style = font.style_name().to_lowercase();
    let upright: String = style
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|w| !w.is_empty() && *w != "italic" && *w != "oblique")
        .flat_map(|w| {
            w.strip_suffix("italic").or_else(|| w.strip_suffix("oblique")).unwrap_or(w).chars()
        })
        .collect();
    match upright.as_str() {
        "" | "regular" => Some(WeightRole::Regular),
        "bold" => Some(WeightRole::Bold),
        _ => None,
    }
}

/// Family name with style words (and run-together combinations of them) removed.
///
/// ```
/// use typeproof_core::normalize_family;
/// assert_eq!(normalize_family("Sample Bold Italic"), "Sample");
/// assert_eq!(normalize_family("Sample-BoldItalic"), "Sample");
/// ```
pub fn normalize_family(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty() && !is_style_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_style_token(token: &str) -> bool {
    let mut rest = token.to_lowercase();
    while !rest.is_empty() {
        match STYLE_WORDS.iter().find(|w| rest.starts_with(*w)) {
            Some(word) => rest = rest[word.len()..].to_string(),
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use font_model::AxisDefinition;

    use super::*;

    fn font(name: &str) -> Arc<FontHandle> {
        Arc::new(FontHandle::builder(name).build())
    }

    #[test]
    fn pairs_regular_with_italic() {
        let regular = font("Sample-Regular.ttf");
        let italic = font("Sample-Italic.ttf");
        let pairer = StylePairer::new([Arc::clone(&regular), Arc::clone(&italic)]);

        let pair = pairer.pair(&regular);
        assert_eq!(pair.kind, PairKind::UprightItalic);
        assert_eq!((pair.base_style(), pair.paired_style()), ("Regular", "Italic"));
    }

    #[test]
    fn lone_font_pairs_with_itself() {
        let regular = font("Sample-Regular.ttf");
        let pairer = StylePairer::new([Arc::clone(&regular)]);

        let pair = pairer.pair(&regular);
        assert_eq!(pair.kind, PairKind::Identity);
        assert_eq!((pair.base_style(), pair.paired_style()), ("Regular", "Regular"));
    }

    #[test]
    fn pairs_regular_with_bold_when_no_italic() {
        let regular = font("Sample-Regular.ttf");
        let bold = Arc::new(FontHandle::builder("Sample-Bold.ttf").weight_class(700).build());
        let pairer = StylePairer::new([Arc::clone(&regular), Arc::clone(&bold)]);

        let pair = pairer.pair(&bold);
        assert_eq!(pair.kind, PairKind::RegularBold);
        assert_eq!(pair.paired_style(), "Regular");
    }

    #[test]
    fn other_families_are_ignored() {
        let regular = font("Sample-Regular.ttf");
        let other = font("Other-Italic.ttf");
        let pairer = StylePairer::new([Arc::clone(&regular), other]);
        assert_eq!(pairer.pair(&regular).kind, PairKind::Identity);
    }

    #[test]
    fn upright_italic_needs_matching_weight() {
        let bold = Arc::new(FontHandle::builder("Sample-Bold.ttf").weight_class(700).build());
        let italic = font("Sample-Italic.ttf");
        let pairer = StylePairer::new([Arc::clone(&bold), italic]);
        assert_eq!(pairer.pair(&bold).kind, PairKind::Identity);
    }

    #[test]
    fn normalizes_style_suffixes() {
        assert_eq!(normalize_family("Sample Italic"), "Sample");
        assert_eq!(normalize_family("Sample Oblique"), "Sample");
        assert_eq!(normalize_family("Sample Sans BoldItalic"), "Sample Sans");
        assert_eq!(normalize_family("Boldface"), "Boldface");
    }

    #[test]
    fn variable_font_toggles_italic_axis() {
        let vf = Arc::new(
            FontHandle::builder("Sample-VF.ttf")
                .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
                .with_axis(AxisDefinition::new("ital", 0.0, 0.0, 1.0))
                .build(),
        );
        let instance = FontInstance::default_for(Arc::clone(&vf));
        let partner = StylePairer::default().partner(&instance);
        assert_eq!(partner.kind, PairKind::UprightItalic);
        assert_eq!(partner.instance.value(tag("ital")), Some(1.0));
        assert_eq!(partner.instance.value(tag("wght")), Some(400.0));
    }

    #[test]
    fn variable_font_falls_back_to_weight() {
        let vf = Arc::new(
            FontHandle::builder("Sample-VF.ttf")
                .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
                .build(),
        );
        let instance = FontInstance::default_for(vf);
        let partner = StylePairer::default().partner(&instance);
        assert_eq!(partner.kind, PairKind::RegularBold);
        assert_eq!(partner.instance.value(tag("wght")), Some(700.0));

        let bold = instance.with_value(tag("wght"), 700.0);
        assert_eq!(StylePairer::default().partner(&bold).instance.value(tag("wght")), Some(400.0));
    }
}
