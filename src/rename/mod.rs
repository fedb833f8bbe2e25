//! APK artifact renaming
//!
//! Adds a prefix to every `.apk` in a directory, or swaps an existing prefix
//! for a new one, so artifacts from different variants can share an upload.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{error, info};


/// Outcome of renaming the artifacts in one directory
#[derive(Debug, Default)]
pub struct RenameReport {
    pub found: usize,
    pub renamed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Trim whitespace and any trailing dashes from a prefix
pub fn clean_prefix(prefix: &str) -> &str {
    prefix.trim().trim_end_matches('-')
}

/// File name after replacing `existing_prefix` with `new_prefix`.
///
/// Prefixes are expected to be cleaned already. The existing prefix is
/// removed together with its dash if present, bare otherwise.
pub fn renamed_file_name(name: &str, new_prefix: &str, existing_prefix: &str) -> String {
    let mut rest = name;

    if !existing_prefix.is_empty() {
        let with_dash = format!("{}-", existing_prefix);
        if let Some(stripped) = rest.strip_prefix(with_dash.as_str()) {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(existing_prefix) {
            rest = stripped;
        }
    }

    if new_prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{}-{}", new_prefix, rest)
    }
}

/// Rename a single artifact in place and return its new path
pub fn rename_with_prefix(path: &Path, new_prefix: &str, existing_prefix: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;

    let new_path = path.with_file_name(renamed_file_name(name, new_prefix, existing_prefix));
    if new_path != path {
        std::fs::rename(path, &new_path).with_context(|| {
            format!("Failed to rename {} -> {}", path.display(), new_path.display())
        })?;
    }

    info!("Renamed: {} -> {}", path.display(), new_path.display());
    Ok(new_path)
}

/// Find the `.apk` files directly inside `dir`, sorted by path
pub fn find_apks(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("Invalid path: {}", dir.display()))?;
    let pattern = format!("{}/*.apk", glob::Pattern::escape(dir_str));

    // Hidden files are not artifacts
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };

    let mut apks = glob::glob_with(&pattern, options)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect::<Vec<_>>();
    apks.sort();

    Ok(apks)
}

/// Rename every `.apk` in `dir`, replacing `existing_prefix` with `new_prefix`
pub fn rename_artifacts(dir: &Path, new_prefix: &str, existing_prefix: &str) -> Result<RenameReport> {
    if !dir.exists() {
        anyhow::bail!("Path does not exist: {}", dir.display());
    }

    let new_prefix = clean_prefix(new_prefix);
    let existing_prefix = clean_prefix(existing_prefix);

    let apks = find_apks(dir)?;
    if apks.is_empty() {
        anyhow::bail!("No APK files found in {}", dir.display());
    }

    info!("Found {} APK file(s) to rename", apks.len());
    if !existing_prefix.is_empty() {
        info!(
            "Replacing existing prefix '{}' with '{}'",
            existing_prefix, new_prefix
        );
    } else if !new_prefix.is_empty() {
        info!("Adding prefix '{}'", new_prefix);
    } else {
        info!("No prefix changes");
    }

    let mut report = RenameReport {
        found: apks.len(),
        ..Default::default()
    };

    for apk in apks {
        match rename_with_prefix(&apk, new_prefix, existing_prefix) {
            Ok(new_path) => report.renamed.push(new_path),
            Err(e) => {
                error!("Error renaming {}: {:#}", apk.display(), e);
                report.failed.push(apk);
            }
        }
    }

    info!(
        "Rename complete: {}/{} files renamed successfully",
        report.renamed.len(),
        report.found
    );

    if report.renamed.is_empty() {
        anyhow::bail!("Failed to rename any APK files in {}", dir.display());
    }

    Ok(report)
}
