//! CLI command implementations.

mod charset;
mod info;
mod plan;
mod proofs;

pub use charset::{charset, describe_charset};
pub use info::{describe_font, info};
pub use plan::{build_settings, plan};
pub use proofs::proofs;
