// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language and id universe discovery.
//!
//! Both universes are sorted ascending and deduplicated; a value's position
//! in its universe is the dense numeric code used by the table builder and
//! the emitted artifacts. The `BTreeSet` ordering is the *sole* source of
//! index assignment — never the iteration order of the catalog — so two
//! runs over the same catalog content always assign the same codes, no
//! matter how the input file was ordered.

use crate::types::Catalog;
use std::collections::BTreeSet;

/// Sorted, deduplicated universe of language codes observed anywhere in
/// the catalog.
pub fn language_set(catalog: &Catalog) -> Vec<String> {
    let codes: BTreeSet<&str> = catalog
        .messages
        .iter()
        .flat_map(|m| m.translations.iter().map(|t| t.lang.as_str()))
        .collect();
    codes.into_iter().map(str::to_owned).collect()
}

/// Sorted, deduplicated universe of message ids.
pub fn id_set(catalog: &Catalog) -> Vec<String> {
    let ids: BTreeSet<&str> = catalog.messages.iter().map(|m| m.id.as_str()).collect();
    ids.into_iter().map(str::to_owned).collect()
}
