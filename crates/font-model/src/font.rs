//! Font loading and the immutable `FontHandle`.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
    time::Duration,
};

use log::debug;
use read_fonts::{FontRef, TableProvider, tables::os2::SelectionFlags, types::Tag};
use skrifa::{MetadataProvider, string::StringId};

use crate::{AxisDefinition, DEFAULT_READ_TIMEOUT, LoadError, Result};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

/// An analysed font file. Immutable after load.
#[derive(Debug, Clone)]
pub struct FontHandle {
    path: PathBuf,
    family: String,
    style: String,
    axes: Vec<AxisDefinition>,
    coverage: BTreeSet<u32>,
    features: BTreeSet<Tag>,
    weight_class: u16,
    is_italic: bool,
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FontHandle {}

impl FontHandle {
    /// Load a font file with the default read timeout.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_timeout(path, DEFAULT_READ_TIMEOUT)
    }

    /// Load a font file, failing with [`LoadError::Timeout`] if the read
    /// does not complete within `timeout`.
    pub fn load_with_timeout(path: impl AsRef<Path>, timeout: Duration) -> Result<Self> {
        let path = path.as_ref();
        if !has_font_extension(path) {
            return Err(LoadError::UnsupportedFormat { path: path.to_path_buf() });
        }
        let data = read_with_timeout(path, timeout)?;
        Self::from_bytes(path, &data)
    }

    /// Analyse in-memory font data. `path` is used for identity and name fallbacks.
    pub fn from_bytes(path: impl Into<PathBuf>, data: &[u8]) -> Result<Self> {
        let path = path.into();
        let font = FontRef::new(data)
            .map_err(|e| LoadError::Parse { path: path.clone(), message: e.to_string() })?;

        let (stem_family, stem_style) = names_from_stem(&path);
        let family = best_name(&font, &[StringId::TYPOGRAPHIC_FAMILY_NAME, StringId::FAMILY_NAME])
            .unwrap_or(stem_family);
        let style =
            best_name(&font, &[StringId::TYPOGRAPHIC_SUBFAMILY_NAME, StringId::SUBFAMILY_NAME])
                .unwrap_or(stem_style);

        let axes = font
            .axes()
            .iter()
            .map(|axis| AxisDefinition {
                tag: axis.tag(),
                min_value: axis.min_value(),
                default_value: axis.default_value(),
                max_value: axis.max_value(),
            })
            .collect();

        let (weight_class, fs_italic) = match font.os2() {
            Ok(os2) => {
                (os2.us_weight_class(), os2.fs_selection().contains(SelectionFlags::ITALIC))
            }
            Err(_) => (400, false),
        };
        let is_italic = fs_italic || style_is_italic(&style);

        let handle = Self {
            coverage: outlined_coverage(&font),
            features: feature_tags(&font),
            path,
            family,
            style,
            axes,
            weight_class,
            is_italic,
        };
        debug!(
            "loaded {} ({} {}): {} codepoints, {} axes, {} features",
            handle.path.display(),
            handle.family,
            handle.style,
            handle.coverage.len(),
            handle.axes.len(),
            handle.features.len()
        );
        Ok(handle)
    }

    /// Start building a handle without a font file.
    pub fn builder(path: impl Into<PathBuf>) -> FontHandleBuilder {
        FontHandleBuilder::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub fn style_name(&self) -> &str {
        &self.style
    }

    pub fn family(&self) -> &str {
        self.family_name()
    }

    pub fn style(&self) -> &str {
        self.style_name()
    }

    /// Variation axes in `fvar` order; empty for static fonts.
    pub fn axes(&self) -> &[AxisDefinition] {
        &self.axes
    }

    pub fn axis(&self, tag: Tag) -> Option<&AxisDefinition> {
        self.axes.iter().find(|a| a.tag == tag)
    }

    pub fn coverage(&self) -> &BTreeSet<u32> {
        &self.coverage
    }

    pub fn covers(&self, c: char) -> bool {
        self.coverage.contains(&(c as u32))
    }

    pub fn features(&self) -> &BTreeSet<Tag> {
        &self.features
    }

    pub fn has_feature(&self, tag: Tag) -> bool {
        self.features.contains(&tag)
    }

    pub fn weight_class(&self) -> u16 {
        self.weight_class
    }

    pub fn is_italic(&self) -> bool {
        self.is_italic
    }

    pub fn is_variable(&self) -> bool {
        !self.axes.is_empty()
    }
}

/// Builder for synthetic handles, used by tools that describe fonts without
/// parsing a file.
#[derive(Debug, Clone)]
pub struct FontHandleBuilder {
    handle: FontHandle,
}

impl FontHandleBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (family, style) = names_from_stem(&path);
        let is_italic = style_is_italic(&style);
        Self {
            handle: FontHandle {
                path,
                family,
                style,
                axes: Vec::new(),
                coverage: BTreeSet::new(),
                features: BTreeSet::new(),
                weight_class: 400,
                is_italic,
            },
        }
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.handle.family = family.into();
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.handle.style = style.into();
        self.handle.is_italic = style_is_italic(&self.handle.style);
        self
    }

    pub fn with_axis(mut self, axis: AxisDefinition) -> Self {
        self.handle.axes.push(axis);
        self
    }

    pub fn with_chars(mut self, chars: &str) -> Self {
        self.handle.coverage.extend(chars.chars().map(|c| c as u32));
        self
    }

    pub fn with_codepoints(mut self, codepoints: impl IntoIterator<Item = u32>) -> Self {
        self.handle.coverage.extend(codepoints);
        self
    }

    pub fn with_features<'a>(mut self, tags: impl IntoIterator<Item = &'a str>) -> Self {
        self.handle.features.extend(tags.into_iter().map(crate::tag));
        self
    }

    pub fn weight_class(mut self, weight_class: u16) -> Self {
        self.handle.weight_class = weight_class;
        self
    }

    pub fn italic(mut self, is_italic: bool) -> Self {
        self.handle.is_italic = is_italic;
        self
    }

    pub fn build(self) -> FontHandle {
        self.handle
    }
}

/// Read a file on a helper thread, giving up after `timeout`.
pub fn read_with_timeout(path: &Path, timeout: Duration) -> Result<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    let owned = path.to_path_buf();
    thread::spawn(move || {
        // The receiver may already be gone after a timeout.
        let _ = tx.send(fs::read(&owned));
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(data)) => Ok(data),
        Ok(Err(e)) => Err(LoadError::Io { path: path.to_path_buf(), message: e.to_string() }),
        Err(_) => Err(LoadError::Timeout { path: path.to_path_buf(), timeout }),
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter().any(|ext| e.eq_ignore_ascii_case(ext)))
}

fn best_name(font: &FontRef, ids: &[StringId]) -> Option<String> {
    ids.iter().find_map(|id| {
        font.localized_strings(*id)
            .english_or_first()
            .map(|s| s.chars().collect::<String>())
            .filter(|s| !s.trim().is_empty())
    })
}

/// "Sample-BoldItalic.ttf" -> ("Sample", "BoldItalic").
fn names_from_stem(path: &Path) -> (String, String) {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    match stem.split_once('-') {
        Some((family, style)) if !style.is_empty() => (family.to_string(), style.to_string()),
        _ => (stem.to_string(), "Regular".to_string()),
    }
}

fn style_is_italic(style: &str) -> bool {
    let lower = style.to_ascii_lowercase();
    lower.contains("italic") || lower.contains("oblique")
}

/// Codepoints whose glyphs can actually be drawn.
///
/// For `glyf` fonts, codepoints mapped to empty glyphs are dropped unless they
/// are whitespace. CFF fonts keep the full cmap.
fn outlined_coverage(font: &FontRef) -> BTreeSet<u32> {
    let outlines = font.glyf().ok().zip(font.loca(None).ok());
    font.charmap()
        .mappings()
        .filter(|(cp, gid)| match &outlines {
            Some((glyf, loca)) => {
                char::from_u32(*cp).is_some_and(char::is_whitespace)
                    || loca.get_glyf(*gid, glyf).ok().flatten().is_some()
            }
            None => true,
        })
        .map(|(cp, _)| cp)
        .collect()
}

fn feature_tags(font: &FontRef) -> BTreeSet<Tag> {
    let mut tags = BTreeSet::new();
    if let Ok(list) = font.gsub().and_then(|gsub| gsub.feature_list()) {
        tags.extend(list.feature_records().iter().map(|r| r.feature_tag()));
    }
    if let Ok(list) = font.gpos().and_then(|gpos| gpos.feature_list()) {
        tags.extend(list.feature_records().iter().map(|r| r.feature_tag()));
    }
    tags
}
