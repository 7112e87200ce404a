use std::{path::PathBuf, result};

use font_model::LoadError;
use serde::Serialize;

/// An axis value outside the range the font declares.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{} axis value {value} is outside [{min}, {max}] in {}", tag, path.display())]
pub struct AxisRangeError {
    pub path: PathBuf,
    pub tag: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

/// Structurally invalid settings. Aborts assembly before any work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown proof: {0}")]
    UnknownProof(String),

    #[error("invalid axis value {value:?} for {tag}")]
    InvalidAxisValue { tag: String, value: String },

    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    #[error("failed to parse settings: {0}")]
    Parse(String),
}

/// Error types for proof assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    AxisRange(#[from] AxisRangeError),

    #[error("no fonts could be loaded")]
    NoFonts,

    #[error("assembly cancelled")]
    Cancelled,
}

pub type Result<T> = result::Result<T, Error>;
