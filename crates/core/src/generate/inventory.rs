//! Character-set and spacing proofs.

use charset::CharClass;

use super::GenerateContext;
use crate::Content;

pub(super) fn charset(ctx: &GenerateContext<'_>) -> Content {
    let chars: String =
        ctx.categories.filtered_charset(&ctx.config.ordering()).into_iter().collect();
    let mut builder = ctx.builder();
    builder.push(&chars);
    builder.finish()
}

pub(super) fn spacing(ctx: &GenerateContext<'_>) -> Content {
    let mut builder = ctx.builder();
    builder.push(&spacing_lines(ctx.categories.filtered_charset(&ctx.config.ordering())));
    builder.finish()
}

/// Control pair flanking `c`: `n`/`o` for lowercase, `0`/`1` for digits,
/// `H`/`O` for everything else.
fn controls(c: char) -> (char, char) {
    match CharClass::of(c) {
        CharClass::LowercaseBase => ('n', 'o'),
        CharClass::Accented if c.is_lowercase() => ('n', 'o'),
        CharClass::Digit => ('0', '1'),
        _ => ('H', 'O'),
    }
}

/// One `HHHxHOHxOxOOO` line per character.
pub(super) fn spacing_lines(chars: impl IntoIterator<Item = char>) -> String {
    let mut out = String::new();
    for c in chars.into_iter().filter(|c| !c.is_whitespace()) {
        let (a, b) = controls(c);
        out.extend([a, a, a, c, a, b, a, c, b, c, b, b, b, '\n']);
    }
    out
}
