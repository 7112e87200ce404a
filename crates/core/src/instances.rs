//! Variable-font instance resolution.
//!
//! An [`InstanceResolver`] turns a font's axes plus the user's per-axis value
//! lists into the ordered set of [`FontInstance`]s to proof. Instances are the
//! Cartesian product of the value lists in the order given, with axes in the
//! batch-wide first-seen order, so identical input always yields the same page
//! order.

use std::{fmt, sync::Arc};

use font_model::{FontHandle, Tag};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Serialize, Serializer, ser::SerializeStruct};
use serde_json::Value;

use crate::{AxisRangeError, ConfigError};

/// Ordered, user-supplied target values for one axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisValueSpec {
    values: Vec<f32>,
}

impl AxisValueSpec {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self { values: values.into() }
    }

    /// Parse a comma-separated list such as `"400, 700"`. Blank input is an
    /// empty spec.
    pub fn parse(tag: &str, input: &str) -> Result<Self, ConfigError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| parse_number(tag, s))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Accept a JSON number, a comma-separated string, or an array of either.
    pub fn from_json(tag: &str, value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Number(n) => json_number(tag, n).map(|v| Self::new(vec![v])),
            Value::String(s) => Self::parse(tag, s),
            Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Number(n) => values.push(json_number(tag, n)?),
                        Value::String(s) => values.extend(Self::parse(tag, s)?.values),
                        other => return Err(invalid(tag, &other.to_string())),
                    }
                }
                Ok(Self::new(values))
            }
            other => Err(invalid(tag, &other.to_string())),
        }
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_number(tag: &str, s: &str) -> Result<f32, ConfigError> {
    s.parse::<f32>().ok().filter(|v| v.is_finite()).ok_or_else(|| invalid(tag, s))
}

fn json_number(tag: &str, n: &serde_json::Number) -> Result<f32, ConfigError> {
    n.as_f64().map(|v| v as f32).filter(|v| v.is_finite()).ok_or_else(|| invalid(tag, &n.to_string()))
}

fn invalid(tag: &str, value: &str) -> ConfigError {
    ConfigError::InvalidAxisValue { tag: tag.to_string(), value: value.to_string() }
}

/// Per-axis value specs for one font, keyed by axis tag.
pub type AxisValueSpecs = IndexMap<Tag, AxisValueSpec>;

/// A font fixed at one value per axis. Static fonts have the single empty location.
#[derive(Debug, Clone)]
pub struct FontInstance {
    font: Arc<FontHandle>,
    location: Vec<(Tag, f32)>,
}

impl PartialEq for FontInstance {
    fn eq(&self, other: &Self) -> bool {
        self.font.path() == other.font.path() && self.location == other.location
    }
}

impl FontInstance {
    pub fn new(font: Arc<FontHandle>, location: Vec<(Tag, f32)>) -> Self {
        Self { font, location }
    }

    /// The only instance of a static font, or a variable font at its defaults.
    pub fn default_for(font: Arc<FontHandle>) -> Self {
        let location = font.axes().iter().map(|a| (a.tag, a.default_value)).collect();
        Self { font, location }
    }

    pub fn font(&self) -> &Arc<FontHandle> {
        &self.font
    }

    pub fn location(&self) -> &[(Tag, f32)] {
        &self.location
    }

    pub fn value(&self, tag: Tag) -> Option<f32> {
        self.location.iter().find(|(t, _)| *t == tag).map(|(_, v)| *v)
    }

    /// Copy of this instance with `tag` set to `value`.
    pub fn with_value(&self, tag: Tag, value: f32) -> Self {
        let location =
            self.location.iter().map(|&(t, v)| if t == tag { (t, value) } else { (t, v) }).collect();
        Self { font: Arc::clone(&self.font), location }
    }

    /// `"wght 400 wdth 100"`, or the style name for static fonts.
    pub fn label(&self) -> String {
        if self.location.is_empty() {
            return self.font.style_name().to_string();
        }
        self.location
            .iter()
            .map(|(tag, value)| format!("{} {}", tag, format_number(*value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for FontInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.font.family_name(), self.font.style_name(), self.label())
    }
}

impl Serialize for FontInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let location: IndexMap<String, f32> =
            self.location.iter().map(|(tag, value)| (tag.to_string(), *value)).collect();
        let mut state = serializer.serialize_struct("FontInstance", 5)?;
        state.serialize_field("path", self.font.path())?;
        state.serialize_field("family", self.font.family_name())?;
        state.serialize_field("style", self.font.style_name())?;
        state.serialize_field("location", &location)?;
        state.serialize_field("label", &self.label())?;
        state.end()
    }
}

/// Integers print without decimals; other values without trailing zeros.
pub fn format_number(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// First-seen axis order across `fonts`; the first font's axes come first.
pub fn axis_order<'a>(fonts: impl IntoIterator<Item = &'a FontHandle>) -> Vec<Tag> {
    let mut order = Vec::new();
    for font in fonts {
        for axis in font.axes() {
            if !order.contains(&axis.tag) {
                order.push(axis.tag);
            }
        }
    }
    order
}

/// Expands axis value specs into ordered instances.
#[derive(Debug, Clone, Default)]
pub struct InstanceResolver {
    axis_order: Vec<Tag>,
}

impl InstanceResolver {
    /// Resolver using the first-seen axis order of `fonts`.
    pub fn new<'a>(fonts: impl IntoIterator<Item = &'a FontHandle>) -> Self {
        Self { axis_order: axis_order(fonts) }
    }

    pub fn with_axis_order(axis_order: Vec<Tag>) -> Self {
        Self { axis_order }
    }

    pub fn axis_order(&self) -> &[Tag] {
        &self.axis_order
    }

    /// Axes of `font` in resolution order.
    fn ordered_axes(&self, font: &FontHandle) -> Vec<Tag> {
        let mut tags: Vec<Tag> =
            self.axis_order.iter().copied().filter(|tag| font.axis(*tag).is_some()).collect();
        for axis in font.axes() {
            if !tags.contains(&axis.tag) {
                tags.push(axis.tag);
            }
        }
        tags
    }

    /// Resolve the instances of `font`.
    ///
    /// Axes without a spec (or with an empty one) contribute their default
    /// value. Any value outside the axis range fails the whole font.
    pub fn resolve(
        &self,
        font: &Arc<FontHandle>,
        specs: &AxisValueSpecs,
    ) -> Result<Vec<FontInstance>, AxisRangeError> {
        if !font.is_variable() {
            return Ok(vec![FontInstance::new(Arc::clone(font), Vec::new())]);
        }

        for tag in specs.keys() {
            if font.axis(*tag).is_none() {
                debug!("{}: ignoring values for missing axis {tag}", font.path().display());
            }
        }

        let mut lists: Vec<(Tag, Vec<f32>)> = Vec::new();
        for tag in self.ordered_axes(font) {
            let Some(axis) = font.axis(tag) else { continue };
            let values = match specs.get(&tag) {
                Some(spec) if !spec.is_empty() => spec.values().to_vec(),
                _ => vec![axis.default_value],
            };
            if let Some(&bad) = values.iter().find(|v| !axis.contains(**v)) {
                let err = AxisRangeError {
                    path: font.path().to_path_buf(),
                    tag: tag.to_string(),
                    value: bad,
                    min: axis.min_value,
                    max: axis.max_value,
                };
                warn!("{err}");
                return Err(err);
            }
            lists.push((tag, values));
        }

        let mut locations: Vec<Vec<(Tag, f32)>> = vec![Vec::new()];
        for (tag, values) in &lists {
            locations = locations
                .iter()
                .flat_map(|prefix| {
                    values.iter().map(move |value| {
                        let mut location = prefix.clone();
                        location.push((*tag, *value));
                        location
                    })
                })
                .collect();
        }

        Ok(locations.into_iter().map(|location| FontInstance::new(Arc::clone(font), location)).collect())
    }
}

#[cfg(test)]
mod tests {
    use font_model::{AxisDefinition, tag};
    use serde_json::json;

    use super::*;

    fn variable_font() -> Arc<FontHandle> {
        Arc::new(
            FontHandle::builder("Sample-VF.ttf")
                .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
                .with_axis(AxisDefinition::new("wdth", 75.0, 100.0, 125.0))
                .build(),
        )
    }

    fn specs(entries: &[(&str, &[f32])]) -> AxisValueSpecs {
        entries.iter().map(|(t, v)| (tag(t), AxisValueSpec::new(v.to_vec()))).collect()
    }

    #[test]
    fn cartesian_product_in_input_order() {
        let font = variable_font();
        let resolver = InstanceResolver::new([font.as_ref()]);
        let instances =
            resolver.resolve(&font, &specs(&[("wght", &[400.0, 700.0]), ("wdth", &[100.0, 80.0])])).unwrap();

        let tuples: Vec<Vec<f32>> =
            instances.iter().map(|i| i.location().iter().map(|(_, v)| *v).collect()).collect();
        assert_eq!(
            tuples,
            vec![vec![400.0, 100.0], vec![400.0, 80.0], vec![700.0, 100.0], vec![700.0, 80.0]]
        );
    }

    #[test]
    fn missing_spec_uses_default() {
        let font = variable_font();
        let resolver = InstanceResolver::new([font.as_ref()]);
        let instances = resolver.resolve(&font, &specs(&[("wdth", &[75.0, 125.0])])).unwrap();
        assert_eq!(instances.len(), 2);
        assert!(instances.iter().all(|i| i.value(tag("wght")) == Some(400.0)));
    }

    #[test]
    fn out_of_range_value_names_axis_and_range() {
        let font = variable_font();
        let resolver = InstanceResolver::new([font.as_ref()]);
        let err = resolver.resolve(&font, &specs(&[("wght", &[400.0, 1000.0])])).unwrap_err();
        assert_eq!(err.tag, "wght");
        assert_eq!(err.value, 1000.0);
        assert_eq!((err.min, err.max), (100.0, 900.0));
        let message = err.to_string();
        assert!(message.contains("wght") && message.contains("1000") && message.contains("[100, 900]"));
    }

    #[test]
    fn static_font_has_one_trivial_instance() {
        let font = Arc::new(FontHandle::builder("Sample-Regular.ttf").build());
        let instances = InstanceResolver::default().resolve(&font, &AxisValueSpecs::new()).unwrap();
        assert_eq!(instances.len(), 1);
        assert!(instances[0].location().is_empty());
        assert_eq!(instances[0].label(), "Regular");
    }

    #[test]
    fn global_axis_order_comes_from_first_font() {
        let first = Arc::new(
            FontHandle::builder("A-VF.ttf")
                .with_axis(AxisDefinition::new("wdth", 75.0, 100.0, 125.0))
                .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
                .build(),
        );
        let second = variable_font();
        let resolver = InstanceResolver::new([first.as_ref(), second.as_ref()]);
        assert_eq!(resolver.axis_order(), &[tag("wdth"), tag("wght")]);

        let instances = resolver.resolve(&second, &AxisValueSpecs::new()).unwrap();
        assert_eq!(instances[0].label(), "wdth 100 wght 400");
    }

    #[test]
    fn parses_comma_lists_and_json() {
        assert_eq!(AxisValueSpec::parse("wght", "400, 700").unwrap().values(), &[400.0, 700.0]);
        assert!(AxisValueSpec::parse("wght", " ").unwrap().is_empty());
        assert_eq!(AxisValueSpec::from_json("wght", &json!(350)).unwrap().values(), &[350.0]);
        assert_eq!(
            AxisValueSpec::from_json("wght", &json!([100, "200,300"])).unwrap().values(),
            &[100.0, 200.0, 300.0]
        );
        assert!(matches!(
            AxisValueSpec::parse("wght", "bold"),
            Err(ConfigError::InvalidAxisValue { .. })
        ));
        assert!(AxisValueSpec::from_json("wght", &json!({"a": 1})).is_err());
    }

    #[test]
    fn instance_equality_is_path_and_location() {
        let font = variable_font();
        let a = FontInstance::default_for(Arc::clone(&font));
        let b = FontInstance::default_for(Arc::clone(&font));
        assert_eq!(a, b);
        assert_ne!(a, a.with_value(tag("wght"), 700.0));
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(400.0), "400");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(87.25), "87.25");
    }
}
