//! `typeproof proofs`: the proof registry.

use typeproof_core::{ProofKind, format_number};

pub fn proofs() {
    println!("{:<34} {:<32} {:>5} {:>4}  script", "label", "id", "size", "cols");
    for kind in ProofKind::all() {
        let def = kind.definition();
        println!(
            "{:<34} {:<32} {:>5} {:>4}  {}",
            def.label,
            def.id,
            format_number(def.font_size),
            def.columns,
            if def.is_arabic() { "arabic" } else { "any" }
        );
    }
}
