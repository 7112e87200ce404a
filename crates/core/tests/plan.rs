use std::{fs, path::Path, sync::Arc};

use chrono::{Local, TimeZone};
use font_model::{AxisDefinition, FontHandle, tag};
use serde_json::{Value, json};
use typeproof_core::{
    CancellationToken, ConfigError, Diagnostic, Error, PairKind, ProofPlanAssembler, RunStyle,
    Settings, corpus,
};

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 .,;:!?'\"()-éèàçüöñÉ";
const ARABIC: &str = " .،ابتثجحخدذرزسشصضطظعغفقكلمنهويءةى";

fn settings(value: Value) -> Settings {
    serde_json::from_value(value).unwrap()
}

fn font(path: &str, chars: &str) -> Arc<FontHandle> {
    Arc::new(FontHandle::builder(path).family("Sample").with_chars(chars).with_features(["kern", "liga"]).build())
}

fn variable_font(path: &str) -> Arc<FontHandle> {
    Arc::new(
        FontHandle::builder(path)
            .family("Sample VF")
            .style("Regular")
            .with_axis(AxisDefinition::new("wght", 100.0, 400.0, 900.0))
            .with_chars(LATIN)
            .with_features(["kern", "liga"])
            .build(),
    )
}

fn enable_all(names: &[&str]) -> Value {
    let options: serde_json::Map<String, Value> =
        names.iter().map(|n| (typeproof_core::unique_proof_key(n), Value::Bool(true))).collect();
    Value::Object(options)
}

#[test]
fn units_follow_font_instance_proof_order() {
    let s = settings(json!({
        "fonts": {"axis_values": {"Sample-VF.ttf": {"wght": "400, 700"}}},
        "proof_order": ["Spacing Proof", "Basic Paragraph Small"],
        "proof_options": {"spacing_proof": true, "basic_paragraph_small": true}
    }));
    let fonts = [variable_font("Sample-VF.ttf"), font("Sample-Regular.ttf", LATIN)];
    let plan = ProofPlanAssembler::new(s).assemble_fonts(&fonts).unwrap();

    let keys: Vec<_> =
        plan.units.iter().map(|u| (u.font_index, u.instance_index, u.proof_index)).collect();
    assert_eq!(keys, vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1), (1, 0, 0), (1, 0, 1)]);
    assert_eq!(plan.units[0].title, "Spacing Proof - 10pt - wght 400");
    assert_eq!(plan.units[2].instance.value(tag("wght")), Some(700.0));
    assert_eq!(plan.units[4].title, "Spacing Proof - 10pt - Regular");
    assert!(plan.diagnostics.is_empty(), "{:?}", plan.diagnostics);
}

#[test]
fn runs_stay_within_their_font_coverage() {
    let names = [
        "Filtered Character Set",
        "Spacing Proof",
        "Basic Paragraph Large",
        "Diacritic Words Large",
        "Basic Paragraph Small",
        "Paired Styles Paragraph Small",
        "Generative Text Small",
        "Diacritic Words Small",
        "Misc Paragraph Small",
    ];
    let s = settings(json!({"proof_options": enable_all(&names)}));
    let fonts = [
        font("Sample-Regular.ttf", LATIN),
        font("Sample-Italic.ttf", "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnop .,"),
    ];
    let plan = ProofPlanAssembler::new(s).assemble_fonts(&fonts).unwrap();
    assert!(!plan.units.is_empty());

    for unit in &plan.units {
        for run in &unit.content.runs {
            let target = match run.style {
                RunStyle::Primary => unit.instance.font(),
                RunStyle::Paired => unit.paired.as_ref().unwrap().instance.font(),
                RunStyle::Fallback => continue,
            };
            for c in run.text.chars().filter(|&c| c != '\n') {
                assert!(target.covers(c), "{}: {c:?} not in {}", unit.title, target.path().display());
            }
        }
    }
}

#[test]
fn generative_text_does_not_depend_on_neighbours() {
    let fonts = [font("Sample-Regular.ttf", LATIN)];
    let alone = settings(json!({
        "proof_order": ["Generative Text Small"],
        "proof_options": {"generative_text_small": true}
    }));
    let crowded = settings(json!({
        "proof_order": ["Spacing Proof", "Basic Paragraph Small", "Generative Text Small"],
        "proof_options": {"spacing_proof": true, "basic_paragraph_small": true, "generative_text_small": true}
    }));

    let first = ProofPlanAssembler::new(alone.clone()).assemble_fonts(&fonts).unwrap();
    let again = ProofPlanAssembler::new(alone).assemble_fonts(&fonts).unwrap();
    let other = ProofPlanAssembler::new(crowded).assemble_fonts(&fonts).unwrap();

    assert_eq!(first.units[0].content, again.units[0].content);
    assert_eq!(first.units[0].content, other.units[2].content);
}

#[test]
fn fallback_share_never_exceeds_missing_share() {
    let covered = "0123456789 abcdefghijklmnopqrstuvwxyz";
    let fonts = [font("Sample-Regular.ttf", covered)];
    let s = settings(json!({"proof_options": {"misc_paragraph_small": true}}));
    let plan = ProofPlanAssembler::new(s).assemble_fonts(&fonts).unwrap();
    let unit = &plan.units[0];

    let requested = format!("{}\n{}\n", corpus::BIG_RANDOM_NUMBERS, corpus::ADDITIONAL_SMALL_TEXT);
    let (total, missing) = requested
        .chars()
        .filter(|&c| c != '\n')
        .fold((0usize, 0usize), |(t, m), c| (t + 1, m + usize::from(!covered.contains(c))));
    let missing_share = missing as f64 / total as f64;

    assert!(!unit.content.fallback.is_empty());
    assert!(unit.content.fallback.fraction() <= missing_share + f64::EPSILON);
}

#[test]
fn arabic_proofs_need_a_font_with_arabic_coverage() {
    let value = json!({
        "proof_options": {"basic_paragraph_small": true, "ar_character_set": true, "ar_paragraph_small": true}
    });

    let latin_only = [font("Sample-Regular.ttf", LATIN)];
    let plan = ProofPlanAssembler::new(settings(value.clone())).assemble_fonts(&latin_only).unwrap();
    assert!(!plan.units.is_empty());
    assert!(plan.units.iter().all(|u| !u.proof.definition().is_arabic()));
    assert!(plan.diagnostics.is_empty(), "{:?}", plan.diagnostics);

    let mixed = [font("Sample-Regular.ttf", LATIN), font("Naskh-Regular.ttf", ARABIC)];
    let plan = ProofPlanAssembler::new(settings(value)).assemble_fonts(&mixed).unwrap();
    assert!(plan.units.iter().any(|u| u.font_index == 1 && u.proof.definition().is_arabic()));
    // The Latin font has nothing to show in the Arabic proofs.
    assert!(plan.units.iter().all(|u| !(u.font_index == 0 && u.proof.definition().is_arabic())));
    assert!(plan.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::EmptyResult { path, .. } if path == Path::new("Sample-Regular.ttf")
    )));
}

#[test]
fn out_of_range_axis_value_skips_the_font() {
    let dir = tempfile::tempdir().unwrap();
    let vf = dir.path().join("Vazirmatn-Variable.ttf");
    let simple = dir.path().join("Simple-Regular.ttf");
    fs::write(&vf, font_test_data::VAZIRMATN_VAR).unwrap();
    fs::write(&simple, font_test_data::SIMPLE_GLYF).unwrap();

    let s = settings(json!({
        "fonts": {
            "paths": [vf, simple],
            "axis_values": {vf.to_str().unwrap(): {"wght": 1000}}
        },
        "proof_options": {"filtered_character_set": true}
    }));
    let plan = ProofPlanAssembler::new(s).assemble().unwrap();

    let range_errors: Vec<_> = plan
        .diagnostics
        .iter()
        .filter_map(|d| match d {
            Diagnostic::AxisRange(err) => Some(err),
            _ => None,
        })
        .collect();
    assert_eq!(range_errors.len(), 1);
    let err = range_errors[0];
    assert_eq!((err.tag.as_str(), err.value, err.min, err.max), ("wght", 1000.0, 100.0, 900.0));
    assert!(err.to_string().contains("wght axis value 1000 is outside [100, 900]"));
    assert!(plan.units.iter().all(|u| u.font_index == 1));
}

#[test]
fn unreadable_font_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("Missing-Regular.ttf");
    let vf = dir.path().join("Vazirmatn-Variable.ttf");
    fs::write(&vf, font_test_data::VAZIRMATN_VAR).unwrap();

    let s = settings(json!({
        "fonts": {"paths": [missing, vf]},
        "proof_options": {"ar_character_set": true}
    }));
    let plan = ProofPlanAssembler::new(s).assemble().unwrap();

    let loads: Vec<_> =
        plan.diagnostics.iter().filter(|d| matches!(d, Diagnostic::Load { .. })).collect();
    assert_eq!(loads.len(), 1);
    assert!(matches!(loads[0], Diagnostic::Load { path, .. } if *path == missing));
    assert!(plan.units.iter().all(|u| u.font_index == 1));
}

#[test]
fn regular_pairs_with_italic_sibling() {
    let s = settings(json!({"proof_options": {"paired_styles_paragraph_small": true}}));

    let both = [font("Sample-Regular.ttf", LATIN), font("Sample-Italic.ttf", LATIN)];
    let plan = ProofPlanAssembler::new(s.clone()).assemble_fonts(&both).unwrap();
    let paired = plan.units[0].paired.as_ref().unwrap();
    assert_eq!(paired.kind, PairKind::UprightItalic);
    assert_eq!(paired.instance.font().style_name(), "Italic");

    let alone = [font("Sample-Regular.ttf", LATIN)];
    let plan = ProofPlanAssembler::new(s).assemble_fonts(&alone).unwrap();
    let paired = plan.units[0].paired.as_ref().unwrap();
    assert_eq!(paired.kind, PairKind::Identity);
    assert_eq!(paired.instance.font().style_name(), "Regular");
}

#[test]
fn features_are_limited_to_the_reference_font() {
    let s = settings(json!({
        "proof_options": {"basic_paragraph_small": true},
        "proof_settings": {
            "otf_basic_paragraph_small_kern": true,
            "otf_basic_paragraph_small_liga": true,
            "otf_basic_paragraph_small_swsh": true
        }
    }));
    let swash = Arc::new(
        FontHandle::builder("Sample-Italic.ttf")
            .family("Sample")
            .with_chars(LATIN)
            .with_features(["kern", "liga", "swsh"])
            .build(),
    );
    let fonts = [font("Sample-Regular.ttf", LATIN), swash];
    let plan = ProofPlanAssembler::new(s).assemble_fonts(&fonts).unwrap();

    assert_eq!(plan.units.len(), 2);
    for unit in &plan.units {
        assert_eq!(unit.proof.features, vec!["kern", "liga"]);
    }
}

#[test]
fn unknown_proof_aborts_before_loading() {
    let s = settings(json!({
        "fonts": {"paths": ["does/not/exist.ttf"]},
        "proof_order": ["Spacing Proof", "Glyph Soup"]
    }));
    let err = ProofPlanAssembler::new(s).assemble().unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::UnknownProof(name)) if name == "Glyph Soup"));
}

#[test]
fn empty_font_list_is_an_error() {
    let err = ProofPlanAssembler::new(Settings::default()).assemble().unwrap_err();
    assert!(matches!(err, Error::NoFonts));
}

#[test]
fn cancelled_run_emits_no_plan() {
    let token = CancellationToken::new();
    token.cancel();
    let s = settings(json!({"proof_options": {"spacing_proof": true}}));
    let fonts = [font("Sample-Regular.ttf", LATIN)];
    let result = ProofPlanAssembler::new(s).with_cancellation(token).assemble_fonts(&fonts);
    assert!(matches!(result, Err(Error::Cancelled)));
}

#[test]
fn plan_serialises_for_the_renderer() {
    let s = settings(json!({"proof_options": {"spacing_proof": true}, "page_format": "LetterLandscape"}));
    let fonts = [font("fonts/Sample-Regular.ttf", LATIN)];
    let now = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 0).unwrap();
    let plan = ProofPlanAssembler::new(s).with_timestamp(now).assemble_fonts(&fonts).unwrap();

    assert_eq!(plan.output_file, Path::new("fonts/2026-03-14_0926_Sample-proof.pdf"));
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["units"][0]["title"], "Spacing Proof - 10pt - Regular");
    assert_eq!(json["units"][0]["proof"]["direction"], "ltr");
    assert!(json["diagnostics"].as_array().unwrap().is_empty());
}
