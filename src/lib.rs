// SPDX-License-Identifier: PMPL-1.0-or-later

//! msgforge — localized message catalog compiler.
//!
//! Turns a declarative catalog of per-language message strings into two
//! embeddable C artifacts: a byte blob of zero-terminated UTF-8 fragments
//! and a dense (message id, language) → offset lookup table.
//!
//! PIPELINE STAGES:
//! 1. **Catalog**: schema-checked JSON/YAML input, validated at the boundary.
//! 2. **Discover**: sorted, deduplicated language and id universes; sort
//!    position is the dense index used everywhere downstream.
//! 3. **Table**: blob and index construction, 16-byte padding, and a
//!    runtime lookup view with caller-owned language state.
//! 4. **Transform**: optional length-preserving post-pass over the blob
//!    (identity by default, blake3 keystream obfuscation opt-in).
//! 5. **Emit**: the declaration and definition renderings of one finished
//!    table, for the consuming header and source unit respectively.

pub mod catalog;
pub mod discover;
pub mod emit;
pub mod table;
pub mod transform;
pub mod types;
