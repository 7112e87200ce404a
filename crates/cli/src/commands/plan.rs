//! `typeproof plan`: assemble the proof plan and emit it as JSON.

use anyhow::{Context, Result};
use log::{info, warn};
use typeproof_core::{ContentWarning, Diagnostic, ProofPlan, ProofPlanAssembler, Settings};

use crate::{
    cli::PlanArgs,
    io::{expand_font_args, read_settings, write_output},
};

pub fn plan(args: &PlanArgs) -> Result<()> {
    let settings = build_settings(args)?;
    let plan = ProofPlanAssembler::new(settings)
        .assemble()
        .context("Failed to assemble proof plan")?;
    report(&plan);

    let json = serde_json::to_string_pretty(&plan).context("Failed to serialise proof plan")?;
    match &args.output {
        Some(path) => {
            write_output(path, json)?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Settings file (or defaults) with the command-line overrides applied.
pub fn build_settings(args: &PlanArgs) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => Settings::default(),
    };
    settings.fonts.paths.extend(expand_font_args(&args.fonts)?);
    if let Some(page_format) = args.page_format {
        settings.page_format = page_format;
    }
    for name in &args.enable {
        settings.enable(name).with_context(|| format!("Cannot enable {name:?}"))?;
    }
    Ok(settings)
}

fn report(plan: &ProofPlan) {
    for diagnostic in &plan.diagnostics {
        match diagnostic {
            Diagnostic::Load { message, .. } => eprintln!("skipped font: {message}"),
            Diagnostic::AxisRange(err) => eprintln!("skipped font: {err}"),
            Diagnostic::EmptyResult { path, instance, proof } => {
                eprintln!("omitted {proof} for {} ({instance}): no content", path.display())
            }
        }
    }
    let fallback_units = plan
        .units
        .iter()
        .filter(|u| u.warnings.iter().any(|w| matches!(w, ContentWarning::Fallback { .. })))
        .count();
    if fallback_units > 0 {
        warn!("{fallback_units} unit(s) use the fallback font; their line spacing may differ");
    }
    info!(
        "{} unit(s), {} diagnostic(s), output file {}",
        plan.units.len(),
        plan.diagnostics.len(),
        plan.output_file.display()
    );
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use typeproof_core::PageFormat;

    use super::*;

    fn args(settings: Option<PathBuf>) -> PlanArgs {
        PlanArgs {
            settings,
            fonts: Vec::new(),
            output: None,
            page_format: None,
            enable: Vec::new(),
        }
    }

    #[test]
    fn flags_override_the_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"fonts": {"paths": ["A-Regular.ttf"]}, "page_format": "A3Landscape"}"#,
        )
        .unwrap();

        let mut args = args(Some(path));
        args.fonts = vec!["B-Regular.ttf".into()];
        args.page_format = Some(PageFormat::A5Landscape);
        args.enable = vec!["Spacing Proof".into()];

        let settings = build_settings(&args).unwrap();
        assert_eq!(
            settings.fonts.paths,
            vec![PathBuf::from("A-Regular.ttf"), PathBuf::from("B-Regular.ttf")]
        );
        assert_eq!(settings.page_format, PageFormat::A5Landscape);
        assert_eq!(settings.proof_options.get("spacing_proof"), Some(&true));
    }

    #[test]
    fn unknown_proof_flag_fails() {
        let mut args = args(None);
        args.enable = vec!["Glyph Soup".into()];
        assert!(build_settings(&args).is_err());
    }

    #[test]
    fn plan_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("Vazirmatn-Variable.ttf");
        fs::write(&font, font_test_data::VAZIRMATN_VAR).unwrap();
        let output = dir.path().join("out/plan.json");

        let mut args = args(None);
        args.fonts = vec![font.to_string_lossy().into_owned()];
        args.enable = vec!["Ar Character Set".into()];
        args.output = Some(output.clone());
        plan(&args).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(json["page_format"], "A4Landscape");
        assert!(json["units"].is_array());
        assert!(json["diagnostics"].is_array());
    }
}
