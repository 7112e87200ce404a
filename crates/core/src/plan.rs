//! Proof plan assembly.
//!
//! [`ProofPlanAssembler::assemble`] validates the settings, loads and analyses
//! every font in parallel, resolves instances and proof configs, then fans out
//! one generation job per (font, instance, proof) and restores the original
//! order before emitting the [`ProofPlan`].

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use charset::CharsetCategories;
use chrono::{DateTime, Local};
use font_model::FontHandle;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    AxisRangeError, CancellationToken, Content, Error, FontInstance,
    InstanceResolver, PageFormat, PairedInstance, ProofInstanceConfig, Result, RunCache,
    Settings, StylePairer,
    config::FALLBACK_FONT,
    format_number,
    generate::{GenerateContext, generate},
    registry::ContentShape,
    settings::Margins,
};

/// Non-fatal problem attached to one proof unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentWarning {
    /// The font's coverage could not satisfy the request in full.
    PartialContent,
    /// Characters were set in the fallback font.
    Fallback { substituted: Vec<char>, count: usize, metrics_may_differ: bool },
}

/// Problem that removed a font or a unit from the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    Load { path: PathBuf, message: String },
    AxisRange(AxisRangeError),
    EmptyResult { path: PathBuf, instance: String, proof: String },
}

/// One section of the output document.
#[derive(Debug, Clone, Serialize)]
pub struct ProofUnit {
    pub title: String,
    pub font_index: usize,
    pub instance_index: usize,
    pub proof_index: usize,
    pub instance: FontInstance,
    pub proof: ProofInstanceConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paired: Option<PairedInstance>,
    pub content: Content,
    pub warnings: Vec<ContentWarning>,
}

impl ProofUnit {
    fn order_key(&self) -> (usize, usize, usize) {
        (self.font_index, self.instance_index, self.proof_index)
    }
}

/// Everything the renderer needs, in page order.
#[derive(Debug, Clone, Serialize)]
pub struct ProofPlan {
    pub page_format: PageFormat,
    pub page_size: (f32, f32),
    pub margins: Margins,
    pub output_file: PathBuf,
    pub fallback_font: String,
    pub units: Vec<ProofUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProofPlan {
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Loaded font with its derived data.
struct PreparedFont {
    index: usize,
    font: Arc<FontHandle>,
    categories: Arc<CharsetCategories>,
    instances: Vec<FontInstance>,
}

struct Job<'a> {
    font: &'a PreparedFont,
    instance_index: usize,
    proof_index: usize,
}

enum JobOutcome {
    Unit(Box<ProofUnit>),
    Empty(Diagnostic),
}

/// Builds a [`ProofPlan`] from [`Settings`].
pub struct ProofPlanAssembler {
    settings: Settings,
    cache: Arc<RunCache>,
    cancel: CancellationToken,
    now: DateTime<Local>,
}

impl ProofPlanAssembler {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            cache: Arc::new(RunCache::new()),
            cancel: CancellationToken::new(),
            now: Local::now(),
        }
    }

    /// Share a cache with other assemblers of the same run.
    pub fn with_cache(mut self, cache: Arc<RunCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Timestamp used for the output file name.
    pub fn with_timestamp(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<RunCache> {
        &self.cache
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() { Err(Error::Cancelled) } else { Ok(()) }
    }

    pub fn assemble(&self) -> Result<ProofPlan> {
        // Structural problems abort before any font is read.
        self.settings.occurrences()?;
        let paths = &self.settings.fonts.paths;
        for path in paths {
            self.settings.axis_specs(path)?;
        }
        let Some(first) = paths.first() else {
            return Err(Error::NoFonts);
        };
        self.check_cancelled()?;

        info!("loading {} font(s)", paths.len());
        let mut diagnostics = Vec::new();
        let loaded: Vec<(usize, Arc<FontHandle>)> = paths
            .par_iter()
            .map(|path| self.cache.font(path))
            .collect::<Vec<_>>()
            .into_iter()
            .enumerate()
            .filter_map(|(index, result)| match result {
                Ok(font) => Some((index, font)),
                Err(err) => {
                    warn!("{err}");
                    diagnostics.push(Diagnostic::Load {
                        path: err.path().clone(),
                        message: err.to_string(),
                    });
                    None
                }
            })
            .collect();

        self.build(loaded, diagnostics, first)
    }

    /// Assemble a plan for fonts that are already loaded, ignoring the
    /// configured paths.
    pub fn assemble_fonts(&self, fonts: &[Arc<FontHandle>]) -> Result<ProofPlan> {
        self.settings.occurrences()?;
        let Some(first) = fonts.first() else {
            return Err(Error::NoFonts);
        };
        let loaded = fonts.iter().cloned().enumerate().collect();
        self.build(loaded, Vec::new(), first.path())
    }

    fn build(
        &self,
        loaded: Vec<(usize, Arc<FontHandle>)>,
        mut diagnostics: Vec<Diagnostic>,
        first_path: &Path,
    ) -> Result<ProofPlan> {
        self.check_cancelled()?;

        let reference_features = loaded.first().map(|(_, f)| f.features().clone()).unwrap_or_default();
        let mut configs = self.settings.resolve(&reference_features)?;

        let categories: Vec<Arc<CharsetCategories>> =
            loaded.par_iter().map(|(_, font)| self.cache.categories(font)).collect();
        if !categories.iter().any(|c| c.has_arabic_support()) {
            let before = configs.len();
            configs.retain(|config| !config.definition().is_arabic());
            if configs.len() < before {
                info!("no font covers Arabic; skipping {} Arabic-script proof(s)", before - configs.len());
            }
        }

        let resolver = InstanceResolver::new(loaded.iter().map(|(_, f)| f.as_ref()));
        let mut prepared = Vec::with_capacity(loaded.len());
        for ((index, font), categories) in loaded.iter().zip(categories) {
            let specs = self.settings.axis_specs(font.path())?;
            match resolver.resolve(font, &specs) {
                Ok(instances) => prepared.push(PreparedFont {
                    index: *index,
                    font: Arc::clone(font),
                    categories,
                    instances,
                }),
                Err(err) => diagnostics.push(Diagnostic::AxisRange(err)),
            }
        }
        self.check_cancelled()?;

        let pairer = StylePairer::new(loaded.iter().map(|(_, f)| Arc::clone(f)));
        let proof_count = configs.len();
        let jobs: Vec<Job<'_>> = prepared
            .iter()
            .flat_map(|font| {
                (0..font.instances.len()).flat_map(move |instance_index| {
                    (0..proof_count).map(move |proof_index| Job { font, instance_index, proof_index })
                })
            })
            .collect();
        info!("generating {} proof unit(s)", jobs.len());

        let outcomes: Vec<Option<JobOutcome>> = jobs
            .par_iter()
            .map(|job| {
                if self.cancel.is_cancelled() {
                    return None;
                }
                Some(run_job(job, &configs[job.proof_index], &pairer))
            })
            .collect();
        self.check_cancelled()?;

        let mut units = Vec::with_capacity(outcomes.len());
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                JobOutcome::Unit(unit) => units.push(*unit),
                JobOutcome::Empty(diagnostic) => diagnostics.push(diagnostic),
            }
        }
        units.sort_by_key(ProofUnit::order_key);

        let output_file = self.settings.output_file(first_path, self.now);
        let page_format = self.settings.page_format;
        Ok(ProofPlan {
            page_format,
            page_size: page_format.size(),
            margins: Margins::default(),
            output_file,
            fallback_font: FALLBACK_FONT.to_string(),
            units,
            diagnostics,
        })
    }
}

fn run_job(job: &Job<'_>, config: &ProofInstanceConfig, pairer: &StylePairer) -> JobOutcome {
    let instance = &job.font.instances[job.instance_index];
    let paired = matches!(config.definition().shape, ContentShape::Paired)
        .then(|| pairer.partner(instance));

    let mut ctx = GenerateContext::new(instance, &job.font.categories, config);
    if let Some(partner) = &paired {
        ctx = ctx.with_paired(partner);
    }
    let content = generate(&ctx);

    if content.is_empty() {
        warn!("{}: {} produced no content", instance, config.name);
        return JobOutcome::Empty(Diagnostic::EmptyResult {
            path: job.font.font.path().to_path_buf(),
            instance: instance.label(),
            proof: config.name.clone(),
        });
    }

    let mut warnings = Vec::new();
    if content.partial {
        warn!("{}: {} is partial", instance, config.name);
        warnings.push(ContentWarning::PartialContent);
    }
    if !content.fallback.is_empty() {
        debug!("{}: {} fallback character(s) in {}", instance, content.fallback.count, config.name);
        warnings.push(ContentWarning::Fallback {
            substituted: content.fallback.substituted.clone(),
            count: content.fallback.count,
            metrics_may_differ: content.fallback.metrics_may_differ,
        });
    }

    JobOutcome::Unit(Box::new(ProofUnit {
        title: section_title(config, instance),
        font_index: job.font.index,
        instance_index: job.instance_index,
        proof_index: job.proof_index,
        instance: instance.clone(),
        proof: config.clone(),
        paired,
        content,
        warnings,
    }))
}

/// `"Spacing Proof - 10pt - wght 400"`.
pub fn section_title(config: &ProofInstanceConfig, instance: &FontInstance) -> String {
    format!("{} - {}pt - {}", config.name, format_number(config.font_size), instance.label())
}

/// Assemble a plan for `settings` with a fresh cache.
pub fn assemble(settings: Settings) -> Result<ProofPlan> {
    ProofPlanAssembler::new(settings).assemble()
}

