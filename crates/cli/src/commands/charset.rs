//! `typeproof charset`: category sizes and the ordered filtered set.

use std::fmt::Write;

use anyhow::{Context, Result};
use charset::{CharsetCategories, CharsetOrdering};
use font_model::FontHandle;
use typeproof_core::config::FONT_READ_TIMEOUT;

use crate::{io::expand_font_args, parallel::process_parallel_iter};

pub fn charset(fonts: &[String]) -> Result<()> {
    let paths = expand_font_args(fonts)?;
    let ordering = CharsetOrdering::default();
    process_parallel_iter("charset", paths, |path| {
        let font = FontHandle::load_with_timeout(&path, FONT_READ_TIMEOUT)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        describe_charset(&font, &ordering)
    })
    .ok_or_bail("charset")
}

/// Non-empty category sizes, then the filtered set one group per line.
pub fn describe_charset(font: &FontHandle, ordering: &CharsetOrdering) -> Result<String> {
    let categories = CharsetCategories::analyze(font.coverage());
    let mut out = String::new();
    writeln!(out, "{} ({} codepoints)", font.path().display(), categories.coverage_len())?;
    for (category, chars) in categories.iter().filter(|(_, chars)| !chars.is_empty()) {
        writeln!(out, "  {:<18} {}", category.name(), chars.len())?;
    }
    for (label, chars) in categories.filtered_groups(ordering) {
        writeln!(out, "  {label}: {}", chars.into_iter().collect::<String>())?;
    }
    Ok(out)
}
