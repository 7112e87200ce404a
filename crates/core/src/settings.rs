//! Persisted settings and their resolution into immutable proof configs.
//!
//! Values are looked up in layers: the occurrence's own key in
//! `proof_settings`, then the [`ProofDefinition`] default, then the global
//! default in [`crate::config`]. Resolution happens once; generators only see
//! the resulting [`ProofInstanceConfig`]s.

use std::{
    collections::BTreeSet,
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use charset::CharsetOrdering;
use chrono::{DateTime, Local};
use font_model::Tag;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    AxisValueSpec, AxisValueSpecs, ConfigError,
    config::{
        DEFAULT_WORDS_PER_PARAGRAPH, GLOBAL_PARAGRAPHS, GLOBAL_TRACKING, MARGIN_HORIZONTAL,
        MARGIN_VERTICAL, SETTINGS_VERSION,
    },
    features::{is_default_on, is_hidden},
    registry::{Alignment, Direction, ProofDefinition, ProofKind},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFormat {
    A3Landscape,
    #[default]
    A4Landscape,
    A4SmallLandscape,
    A5Landscape,
    LegalLandscape,
    LetterLandscape,
    LetterSmallLandscape,
}

impl PageFormat {
    pub const ALL: [PageFormat; 7] = [
        PageFormat::A3Landscape,
        PageFormat::A4Landscape,
        PageFormat::A4SmallLandscape,
        PageFormat::A5Landscape,
        PageFormat::LegalLandscape,
        PageFormat::LetterLandscape,
        PageFormat::LetterSmallLandscape,
    ];

    /// Page width and height in points.
    pub fn size(self) -> (f32, f32) {
        match self {
            PageFormat::A3Landscape => (1190.0, 842.0),
            PageFormat::A4Landscape | PageFormat::A4SmallLandscape => (842.0, 595.0),
            PageFormat::A5Landscape => (595.0, 420.0),
            PageFormat::LegalLandscape => (1008.0, 612.0),
            PageFormat::LetterLandscape | PageFormat::LetterSmallLandscape => (792.0, 612.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PageFormat::A3Landscape => "A3Landscape",
            PageFormat::A4Landscape => "A4Landscape",
            PageFormat::A4SmallLandscape => "A4SmallLandscape",
            PageFormat::A5Landscape => "A5Landscape",
            PageFormat::LegalLandscape => "LegalLandscape",
            PageFormat::LetterLandscape => "LetterLandscape",
            PageFormat::LetterSmallLandscape => "LetterSmallLandscape",
        }
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown page format: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub vertical: f32,
    pub horizontal: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self { vertical: MARGIN_VERTICAL, horizontal: MARGIN_HORIZONTAL }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub paths: Vec<PathBuf>,
    /// Font path -> axis tag -> number, comma-separated string, or array.
    pub axis_values: IndexMap<String, IndexMap<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOutput {
    pub use_custom_location: bool,
    pub custom_location: String,
}

/// Persisted settings. Unknown keys are ignored and absent keys defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Schema version. Older files store a number, newer ones a string such as `"1.0"`.
    #[serde(deserialize_with = "version_from_any")]
    pub version: String,
    #[serde(deserialize_with = "fonts_from_any")]
    pub fonts: FontSettings,
    /// Occurrence key -> enabled.
    pub proof_options: IndexMap<String, bool>,
    /// Flat per-occurrence settings such as `spacing_proof_cols` or `otf_spacing_proof_kern`.
    pub proof_settings: IndexMap<String, Value>,
    /// Occurrence names in page order; empty means registry order.
    pub proof_order: Vec<String>,
    pub pdf_output: PdfOutput,
    pub page_format: PageFormat,
}

fn version_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => SETTINGS_VERSION.to_string(),
        other => other.to_string(),
    })
}

/// A bare path list is accepted in place of the `{paths, axis_values}` object.
fn fonts_from_any<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FontSettings, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Fonts {
        Paths(Vec<PathBuf>),
        Full(FontSettings),
        Null(()),
    }
    Ok(match Fonts::deserialize(deserializer)? {
        Fonts::Paths(paths) => FontSettings { paths, ..FontSettings::default() },
        Fonts::Full(fonts) => fonts,
        Fonts::Null(()) => FontSettings::default(),
    })
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            fonts: FontSettings::default(),
            proof_options: IndexMap::new(),
            proof_settings: IndexMap::new(),
            proof_order: Vec::new(),
            pdf_output: PdfOutput::default(),
            page_format: PageFormat::default(),
        }
    }
}

/// Settings key for an occurrence name: lowercase, with spaces, `-` and `/` as `_`.
///
/// ```
/// use typeproof_core::unique_proof_key;
/// assert_eq!(unique_proof_key("Ar-Lat Mixed Paragraph Small"), "ar_lat_mixed_paragraph_small");
/// assert_eq!(unique_proof_key("Spacing Proof 2"), "spacing_proof_2");
/// ```
pub fn unique_proof_key(name: &str) -> String {
    name.to_lowercase().replace([' ', '/', '-'], "_")
}

/// One named, possibly duplicated, occurrence of a proof kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofOccurrence {
    pub name: String,
    pub key: String,
    pub kind: ProofKind,
}

impl ProofOccurrence {
    /// Resolve an occurrence name such as `"Spacing Proof"` or `"Spacing Proof 2"`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        let kind = ProofKind::from_label(trimmed)
            .or_else(|| ProofKind::from_id(trimmed))
            .or_else(|| {
                let (base, number) = trimmed.rsplit_once(' ')?;
                number.parse::<u32>().ok()?;
                ProofKind::from_label(base).or_else(|| ProofKind::from_id(base))
            })
            .ok_or_else(|| ConfigError::UnknownProof(name.to_string()))?;
        let name = if ProofKind::from_id(trimmed).is_some() { kind.label() } else { trimmed };
        Ok(Self { name: name.to_string(), key: unique_proof_key(name), kind })
    }
}

/// Resolved, immutable settings for one enabled proof occurrence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofInstanceConfig {
    pub name: String,
    pub key: String,
    pub kind: ProofKind,
    pub font_size: f32,
    pub columns: u32,
    pub paragraphs: u32,
    pub words_per_paragraph: u32,
    pub tracking: f32,
    pub alignment: Alignment,
    pub direction: Direction,
    /// Features switched on and supported by the reference font.
    pub features: Vec<String>,
    /// Visible features of the reference font switched off.
    pub disabled_features: Vec<String>,
    /// Enabled character-set groups, for proofs that have them.
    pub categories: Vec<String>,
}

impl ProofInstanceConfig {
    pub fn definition(&self) -> &'static ProofDefinition {
        self.kind.definition()
    }

    /// Character-set ordering restricted to the enabled groups.
    pub fn ordering(&self) -> CharsetOrdering {
        CharsetOrdering::default().retain(|key| self.categories.iter().any(|c| c == key))
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Enable an occurrence by name or key, appending it to an explicit
    /// `proof_order` that lacks it.
    pub fn enable(&mut self, name: &str) -> Result<(), ConfigError> {
        let occurrence = ProofOccurrence::parse(name)?;
        if !self.proof_order.is_empty()
            && !self.occurrences()?.iter().any(|o| o.key == occurrence.key)
        {
            self.proof_order.push(occurrence.name);
        }
        self.proof_options.insert(occurrence.key, true);
        Ok(())
    }

    /// All occurrences in page order, enabled or not.
    ///
    /// Fails on the first name that does not resolve to a registered proof.
    pub fn occurrences(&self) -> Result<Vec<ProofOccurrence>, ConfigError> {
        if self.proof_order.is_empty() {
            return Ok(ProofKind::all()
                .map(|kind| ProofOccurrence {
                    name: kind.label().to_string(),
                    key: kind.id().to_string(),
                    kind,
                })
                .collect());
        }
        self.proof_order.iter().map(|name| ProofOccurrence::parse(name)).collect()
    }

    /// Enabled occurrences in page order.
    pub fn enabled_occurrences(&self) -> Result<Vec<ProofOccurrence>, ConfigError> {
        Ok(self
            .occurrences()?
            .into_iter()
            .filter(|o| self.proof_options.get(&o.key).copied().unwrap_or(false))
            .collect())
    }

    /// Axis value specs for the font at `path`.
    pub fn axis_specs(&self, path: &Path) -> Result<AxisValueSpecs, ConfigError> {
        let by_path = self
            .fonts
            .axis_values
            .iter()
            .find(|(key, _)| Path::new(key.as_str()) == path)
            .map(|(_, axes)| axes);
        let Some(axes) = by_path else {
            return Ok(AxisValueSpecs::new());
        };

        axes.iter()
            .map(|(tag, value)| Ok((font_model::tag(tag), AxisValueSpec::from_json(tag, value)?)))
            .collect()
    }

    /// Resolve every enabled occurrence against the reference font's features.
    pub fn resolve(
        &self,
        reference_features: &BTreeSet<Tag>,
    ) -> Result<Vec<ProofInstanceConfig>, ConfigError> {
        self.enabled_occurrences()?
            .into_iter()
            .map(|occurrence| self.resolve_occurrence(occurrence, reference_features))
            .collect()
    }

    fn resolve_occurrence(
        &self,
        occurrence: ProofOccurrence,
        reference_features: &BTreeSet<Tag>,
    ) -> Result<ProofInstanceConfig, ConfigError> {
        let definition = occurrence.kind.definition();
        let key = occurrence.key.as_str();

        let font_size = self.number(key, "fontSize")?.unwrap_or(definition.font_size);
        let columns = if definition.is_charset() {
            definition.columns
        } else {
            self.count(key, "cols")?.filter(|&c| c > 0).unwrap_or(definition.columns)
        };
        let paragraphs = match definition.paragraphs {
            Some(default) => self.count(key, "para")?.unwrap_or(default),
            None => GLOBAL_PARAGRAPHS,
        };
        let words_per_paragraph = self.count(key, "words")?.unwrap_or(DEFAULT_WORDS_PER_PARAGRAPH);

        let default_tracking = definition.tracking(font_size).unwrap_or(GLOBAL_TRACKING);
        let (tracking, alignment) = if definition.supports_formatting() {
            (
                self.number(key, "tracking")?.unwrap_or(default_tracking),
                self.alignment(key)?.unwrap_or(definition.alignment()),
            )
        } else {
            (default_tracking, definition.alignment())
        };

        let categories = if definition.has_categories() {
            CharsetOrdering::default()
                .groups()
                .iter()
                .map(|g| g.key())
                .filter(|group| {
                    self.flag(&format!("{key}_cat_{group}")).unwrap_or(true)
                })
                .collect()
        } else {
            Vec::new()
        };

        let (features, disabled_features) = self.features(key, definition, reference_features);

        debug!("resolved {}: {font_size}pt, {columns} cols, {} features", occurrence.name, features.len());

        Ok(ProofInstanceConfig {
            name: occurrence.name,
            key: occurrence.key,
            kind: occurrence.kind,
            font_size,
            columns: columns.max(1),
            paragraphs: paragraphs.max(1),
            words_per_paragraph: words_per_paragraph.max(1),
            tracking,
            alignment,
            direction: definition.direction(),
            features,
            disabled_features,
            categories,
        })
    }

    /// Enabled and disabled feature tags, restricted to the reference font.
    fn features(
        &self,
        key: &str,
        definition: &ProofDefinition,
        reference_features: &BTreeSet<Tag>,
    ) -> (Vec<String>, Vec<String>) {
        let prefix = format!("otf_{key}_");
        for (setting, _) in self.proof_settings.iter().filter(|(k, _)| k.starts_with(&prefix)) {
            let tag = font_model::tag(&setting[prefix.len()..]);
            if !reference_features.contains(&tag) {
                debug!("{setting}: {tag} not in reference font, dropped");
            }
        }

        let mut enabled = Vec::new();
        let mut disabled = Vec::new();
        for &tag in reference_features.iter().filter(|t| !is_hidden(**t)) {
            let name = tag.to_string().trim_end().to_string();
            let default_on =
                is_default_on(tag) && !definition.default_off.iter().any(|f| f.tag() == tag);
            let locked = definition.locked_off.iter().any(|f| f.tag() == tag);
            let on = !locked && self.flag(&format!("{prefix}{name}")).unwrap_or(default_on);
            if on { enabled.push(name) } else { disabled.push(name) }
        }
        (enabled, disabled)
    }

    fn flag(&self, key: &str) -> Option<bool> {
        match self.proof_settings.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|v| v != 0.0),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn number(&self, key: &str, suffix: &str) -> Result<Option<f32>, ConfigError> {
        let full = format!("{key}_{suffix}");
        match self.proof_settings.get(&full) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64().map(|v| v as f32)),
            Some(Value::String(s)) => s
                .trim()
                .parse::<f32>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidSetting { key: full.clone(), value: s.clone() }),
            Some(other) => {
                Err(ConfigError::InvalidSetting { key: full.clone(), value: other.to_string() })
            }
        }
    }

    fn count(&self, key: &str, suffix: &str) -> Result<Option<u32>, ConfigError> {
        Ok(self.number(key, suffix)?.filter(|v| *v >= 0.0).map(|v| v.round() as u32))
    }

    fn alignment(&self, key: &str) -> Result<Option<Alignment>, ConfigError> {
        let full = format!("{key}_align");
        match self.proof_settings.get(&full) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Alignment::parse(s)
                .map(Some)
                .ok_or_else(|| ConfigError::InvalidSetting { key: full, value: s.clone() }),
            Some(other) => Err(ConfigError::InvalidSetting { key: full, value: other.to_string() }),
        }
    }

    /// Target PDF path: `{dir}/{YYYY-MM-DD_HHMM}_{family}-proof.pdf`.
    ///
    /// `dir` is the custom location when enabled and present, else the
    /// directory of `first_font`. `family` is the file stem up to the first `-`.
    pub fn output_file(&self, first_font: &Path, now: DateTime<Local>) -> PathBuf {
        let custom = Path::new(&self.pdf_output.custom_location);
        let dir = if self.pdf_output.use_custom_location
            && !self.pdf_output.custom_location.is_empty()
            && custom.is_dir()
        {
            custom.to_path_buf()
        } else {
            first_font.parent().map(Path::to_path_buf).unwrap_or_default()
        };
        let stem = first_font.file_stem().and_then(|s| s.to_str()).unwrap_or("proof");
        let family = stem.split('-').next().unwrap_or(stem);
        dir.join(format!("{}_{family}-proof.pdf", now.format("%Y-%m-%d_%H%M")))
    }
}
