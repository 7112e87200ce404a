use charset::{Category, CharsetCategories, CharsetOrdering};
use font_model::FontHandle;

fn vazirmatn() -> FontHandle {
    FontHandle::from_bytes("Vazirmatn-Variable.ttf", font_test_data::VAZIRMATN_VAR).unwrap()
}

#[test]
fn every_category_is_within_font_coverage() {
    let font = vazirmatn();
    let cats = CharsetCategories::analyze(font.coverage());

    for (category, chars) in cats.iter() {
        for c in chars {
            assert!(font.covers(*c), "{category} contains {c:?} which the font lacks");
        }
    }
    assert_eq!(cats.coverage_len(), font.coverage().len());
}

#[test]
fn filtered_charset_is_within_font_coverage() {
    let font = vazirmatn();
    let cats = CharsetCategories::analyze(font.coverage());
    let filtered = cats.filtered_charset(&CharsetOrdering::default());

    assert!(filtered.iter().all(|c| font.covers(*c)));
    assert!(filtered.iter().all(|c| !c.is_whitespace()));
}

#[test]
fn latin_only_font_has_no_arabic_support() {
    let font = FontHandle::builder("Sample-Regular.ttf").with_chars("ABCabc0123.,").build();
    let cats = CharsetCategories::analyze(font.coverage());
    assert!(cats.is_empty(Category::Arabic));
    assert!(!cats.has_arabic_support());
}

#[test]
fn arabic_font_has_arabic_support() {
    let font = FontHandle::builder("Sample-Arabic.ttf").with_chars("ابتثجح").build();
    let cats = CharsetCategories::analyze(font.coverage());
    assert!(cats.has_arabic_support());
    assert!(cats.chars(Category::Arabic).contains(&'ب'));

    let vazirmatn = vazirmatn();
    assert!(CharsetCategories::analyze(vazirmatn.coverage()).has_arabic_support());
}

#[test]
fn static_font_analyses_without_error() {
    let font = FontHandle::from_bytes("Simple-Regular.ttf", font_test_data::SIMPLE_GLYF).unwrap();
    let cats = CharsetCategories::analyze(font.coverage());
    assert!(cats.iter().all(|(_, chars)| chars.iter().all(|c| font.covers(*c))));
}
