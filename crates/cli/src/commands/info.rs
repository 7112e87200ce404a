//! `typeproof info`: font identity, axes and features.

use std::fmt::Write;

use anyhow::{Context, Result};
use font_model::FontHandle;
use typeproof_core::{config::FONT_READ_TIMEOUT, format_number};

use crate::{io::expand_font_args, parallel::process_parallel_iter};

pub fn info(fonts: &[String]) -> Result<()> {
    let paths = expand_font_args(fonts)?;
    process_parallel_iter("info", paths, |path| {
        let font = FontHandle::load_with_timeout(&path, FONT_READ_TIMEOUT)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        describe_font(&font)
    })
    .ok_or_bail("info")
}

/// Multi-line summary of `font`.
pub fn describe_font(font: &FontHandle) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", font.path().display())?;
    writeln!(out, "  family:   {}", font.family_name())?;
    writeln!(out, "  style:    {}", font.style_name())?;
    writeln!(
        out,
        "  weight:   {}{}",
        font.weight_class(),
        if font.is_italic() { " italic" } else { "" }
    )?;
    if font.is_variable() {
        for axis in font.axes() {
            writeln!(
                out,
                "  axis:     {} {}..{}..{}",
                axis.tag,
                format_number(axis.min_value),
                format_number(axis.default_value),
                format_number(axis.max_value)
            )?;
        }
    }
    let features: Vec<String> = font.features().iter().map(ToString::to_string).collect();
    writeln!(out, "  features: {}", features.join(" "))?;
    writeln!(out, "  coverage: {} codepoints", font.coverage().len())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use font_model::AxisDefinition;

    use super::*;

    #[test]
    fn variable_font_lists_axes() {
        let font = FontHandle::builder("Sample-Italic.ttf")
            .family("Sample")
            .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
            .with_chars("abc")
            .with_features(["kern", "liga"])
            .build();
        let text = describe_font(&font).unwrap();
        assert!(text.contains("  family:   Sample\n"));
        assert!(text.contains("  weight:   400 italic\n"));
        assert!(text.contains("  axis:     wght 100..400..900\n"));
        assert!(text.contains("  features: kern liga\n"));
        assert!(text.contains("  coverage: 3 codepoints\n"));
    }

    #[test]
    fn real_font_loads() {
        let font =
            FontHandle::from_bytes("Vazirmatn-Variable.ttf", font_test_data::VAZIRMATN_VAR).unwrap();
        assert!(describe_font(&font).unwrap().contains("axis:     wght 100..400..900"));
    }
}
