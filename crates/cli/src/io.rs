//! Settings and plan file I/O.

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::glob;
use typeproof_core::Settings;

/// Read persisted settings from a JSON file.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let json = read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    Settings::from_json(&json)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

/// Write `contents` to `path`, creating the parent directory.
pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent_dir(path)?;
    write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Find fonts matching a glob pattern, sorted by path.
pub fn glob_fonts(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = glob(pattern)
        .with_context(|| format!("Failed to glob pattern: {pattern}"))?
        .filter_map(Result::ok)
        .collect();
    paths.sort();
    Ok(paths)
}

/// Expand font arguments: glob patterns are resolved, plain paths pass
/// through unchanged so load failures surface as diagnostics later.
pub fn expand_font_args(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for arg in args {
        if !arg.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(arg));
            continue;
        }
        let matched = glob_fonts(arg)?;
        if matched.is_empty() {
            bail!("No fonts match {arg}");
        }
        paths.extend(matched);
    }
    Ok(paths)
}
