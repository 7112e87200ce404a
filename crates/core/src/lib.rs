//! Typeproof Core - proof plan assembly for static and variable fonts.

pub mod cache;
pub mod cancel;
pub mod config;
pub mod content;
pub mod corpus;
pub mod error;
pub mod features;
pub mod generate;
pub mod instances;
pub mod pairing;
pub mod plan;
pub mod registry;
pub mod settings;

pub use cache::RunCache;
pub use cancel::CancellationToken;
pub use content::{Content, ContentBuilder, FallbackReport, Run, RunStyle};
pub use error::{AxisRangeError, ConfigError, Error, Result};
pub use generate::{GenerateContext, derive_seed, generate};
pub use instances::{
    AxisValueSpec, AxisValueSpecs, FontInstance, InstanceResolver, axis_order, format_number,
};
pub use pairing::{PairKind, PairedInstance, StylePair, StylePairer, normalize_family};
pub use plan::{
    ContentWarning, Diagnostic, ProofPlan, ProofPlanAssembler, ProofUnit, assemble, section_title,
};
pub use registry::{Alignment, Direction, ProofDefinition, ProofKind, REGISTRY};
pub use settings::{
    Margins, PageFormat, ProofInstanceConfig, ProofOccurrence, Settings, unique_proof_key,
};
