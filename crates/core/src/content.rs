//! Content payload handed to the renderer.
//!
//! Text is split into [`Run`]s. Primary and paired runs only contain
//! codepoints their font covers (plus `\n` line breaks); everything else goes
//! into fallback runs set in the blank fallback font.

use std::collections::BTreeSet;

use font_model::FontHandle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStyle {
    Primary,
    Paired,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub style: RunStyle,
    pub text: String,
}

/// Characters that had to be set in the fallback font.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FallbackReport {
    /// Distinct substituted characters, in codepoint order.
    pub substituted: Vec<char>,
    /// Substituted character occurrences.
    pub count: usize,
    /// Non-break characters requested in total.
    pub requested: usize,
    /// The fallback font's vertical metrics differ from the proofed font's,
    /// so lines holding fallback runs may be spaced differently.
    pub metrics_may_differ: bool,
}

impl FallbackReport {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Share of requested characters that were substituted.
    pub fn fraction(&self) -> f64 {
        if self.requested == 0 { 0.0 } else { self.count as f64 / self.requested as f64 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Content {
    pub runs: Vec<Run>,
    pub fallback: FallbackReport,
    /// The generator could not satisfy its request from the font's coverage.
    pub partial: bool,
}

impl Content {
    /// No primary or paired run holds visible text.
    pub fn is_empty(&self) -> bool {
        !self
            .runs
            .iter()
            .filter(|r| r.style != RunStyle::Fallback)
            .any(|r| r.text.chars().any(|c| !c.is_whitespace()))
    }

    /// All run text concatenated.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Text of runs with the given style.
    pub fn text_of(&self, style: RunStyle) -> String {
        self.runs.iter().filter(|r| r.style == style).map(|r| r.text.as_str()).collect()
    }
}

/// Builds [`Content`] by routing characters the target font lacks into
/// fallback runs.
#[derive(Debug)]
pub struct ContentBuilder<'a> {
    primary: &'a BTreeSet<u32>,
    paired: Option<&'a BTreeSet<u32>>,
    runs: Vec<Run>,
    substituted: BTreeSet<char>,
    count: usize,
    requested: usize,
    partial: bool,
}

impl<'a> ContentBuilder<'a> {
    pub fn new(primary: &'a FontHandle) -> Self {
        Self::with_coverage(primary.coverage())
    }

    pub fn with_coverage(primary: &'a BTreeSet<u32>) -> Self {
        Self {
            primary,
            paired: None,
            runs: Vec::new(),
            substituted: BTreeSet::new(),
            count: 0,
            requested: 0,
            partial: false,
        }
    }

    pub fn paired(mut self, paired: &'a FontHandle) -> Self {
        self.paired = Some(paired.coverage());
        self
    }

    pub fn push(&mut self, text: &str) -> &mut Self {
        self.push_styled(RunStyle::Primary, text)
    }

    /// Append text set in the paired font; without one, the primary font is used.
    pub fn push_paired(&mut self, text: &str) -> &mut Self {
        if self.paired.is_some() {
            self.push_styled(RunStyle::Paired, text)
        } else {
            self.push_styled(RunStyle::Primary, text)
        }
    }

    fn push_styled(&mut self, style: RunStyle, text: &str) -> &mut Self {
        let coverage = match style {
            RunStyle::Paired => self.paired.unwrap_or(self.primary),
            _ => self.primary,
        };
        for c in text.chars() {
            if c == '\n' {
                self.append(style, c);
                continue;
            }
            self.requested += 1;
            if coverage.contains(&(c as u32)) {
                self.append(style, c);
            } else {
                self.substituted.insert(c);
                self.count += 1;
                self.append(RunStyle::Fallback, c);
            }
        }
        self
    }

    fn append(&mut self, style: RunStyle, c: char) {
        match self.runs.last_mut() {
            Some(run) if run.style == style => run.text.push(c),
            _ => self.runs.push(Run { style, text: c.to_string() }),
        }
    }

    pub fn mark_partial(&mut self) -> &mut Self {
        self.partial = true;
        self
    }

    pub fn finish(self) -> Content {
        let count = self.count;
        Content {
            runs: self.runs,
            fallback: FallbackReport {
                substituted: self.substituted.into_iter().collect(),
                count,
                requested: self.requested,
                metrics_may_differ: count > 0,
            },
            partial: self.partial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(s: &str) -> BTreeSet<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    #[test]
    fn uncovered_characters_become_fallback_runs() {
        let cov = coverage("abc ");
        let mut builder = ContentBuilder::with_coverage(&cov);
        builder.push("ab\u{e9}c\ncab");
        let content = builder.finish();

        let styles: Vec<RunStyle> = content.runs.iter().map(|r| r.style).collect();
        assert_eq!(styles, vec![RunStyle::Primary, RunStyle::Fallback, RunStyle::Primary]);
        assert_eq!(content.text(), "ab\u{e9}c\ncab");
        assert_eq!(content.fallback.substituted, vec!['\u{e9}']);
        assert_eq!(content.fallback.count, 1);
        assert_eq!(content.fallback.requested, 7);
        assert!(content.fallback.metrics_may_differ);
    }

    #[test]
    fn fully_covered_text_has_no_fallback() {
        let cov = coverage("abc");
        let mut builder = ContentBuilder::with_coverage(&cov);
        builder.push("cab\nbac");
        let content = builder.finish();
        assert!(content.fallback.is_empty());
        assert_eq!(content.fallback.fraction(), 0.0);
        assert_eq!(content.runs.len(), 1);
    }

    #[test]
    fn fallback_only_content_is_empty() {
        let cov = coverage("a");
        let mut builder = ContentBuilder::with_coverage(&cov);
        builder.push("xyz\n");
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn paired_runs_use_paired_coverage() {
        let primary = FontHandle::builder("Sample-Regular.ttf").with_chars("ab").build();
        let italic = FontHandle::builder("Sample-Italic.ttf").with_chars("bc").build();
        let mut builder = ContentBuilder::new(&primary).paired(&italic);
        builder.push("ab").push_paired("bc");
        let content = builder.finish();
        assert_eq!(content.text_of(RunStyle::Primary), "ab");
        assert_eq!(content.text_of(RunStyle::Paired), "bc");
        assert!(content.fallback.is_empty());
    }
}
