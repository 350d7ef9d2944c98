// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog loading and validation.
//!
//! The original toolchain evaluated the catalog file as language-native
//! literal syntax. Here the catalog is a plain data file — JSON or YAML,
//! selected by extension — deserialized through a fixed schema and then
//! structurally validated, so nothing in the input is ever executed and
//! malformed input fails loudly at the boundary instead of somewhere in
//! table construction.

use crate::types::Catalog;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Load and validate a catalog file.
///
/// Accepts `.json`, `.yaml` and `.yml`. Any I/O failure, parse failure,
/// unknown extension, or structural defect is a fatal error for the run.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let catalog: Catalog = match ext.as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("malformed JSON catalog: {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("malformed YAML catalog: {}", path.display()))?,
        other => bail!(
            "unsupported catalog format '{}' (expected .json, .yaml or .yml): {}",
            other,
            path.display()
        ),
    };

    validate(&catalog)?;
    Ok(catalog)
}

/// Structural validation beyond what the schema enforces.
///
/// Duplicate (id, lang) pairs are deliberately *not* rejected here; the
/// table builder preserves the original last-write-wins behavior for them.
pub fn validate(catalog: &Catalog) -> Result<()> {
    for (pos, msg) in catalog.messages.iter().enumerate() {
        if msg.id.is_empty() {
            bail!("catalog message at position {} has an empty id", pos);
        }
        for tr in &msg.translations {
            if tr.lang.is_empty() {
                bail!("message '{}' has a translation with an empty language code", msg.id);
            }
        }
    }
    Ok(())
}
