// SPDX-License-Identifier: PMPL-1.0-or-later

//! String table construction and runtime lookup.
//!
//! `build` is the single invariant-bearing computation of the whole tool:
//! it owns the dense index arithmetic (`msg_idx * |languages| + lang_idx`),
//! the offset bookkeeping into the blob, and the `-1` missing sentinel.
//! Both emit modes render the finished [`StringTable`] and never recompute
//! any of it.
//!
//! Duplicate (id, lang) pairs keep the original tool's observed behavior:
//! the later occurrence's offset overwrites the earlier one and the earlier
//! bytes stay in the blob as unreachable dead space.

use crate::discover;
use crate::types::Catalog;
use anyhow::{anyhow, Result};

/// Sentinel index value for "no translation stored for this slot".
pub const MISSING: i32 = -1;

/// The blob is zero-padded up to this alignment after construction.
const BLOB_ALIGN: usize = 16;

/// The finished intermediate representation handed to the emitters.
///
/// Indices into `languages` and `ids` are derived purely from sort order of
/// this run's catalog; they are not stable identifiers and must never be
/// persisted apart from the artifact compiled from the same universes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTable {
    /// Sorted language universe; position = dense language code.
    pub languages: Vec<String>,
    /// Sorted id universe; position = dense message code.
    pub ids: Vec<String>,
    /// Zero-terminated UTF-8 fragments, padded to a multiple of 16 bytes.
    pub blob: Vec<u8>,
    /// Flat `|ids| * |languages|` offset table; [`MISSING`] where absent.
    pub index: Vec<i32>,
    /// Blob length before padding; every stored offset points below this.
    pub unpadded_len: usize,
}

/// Caller-owned language selection for runtime lookups.
///
/// The original emitted artifact kept these as two process-wide mutable
/// cells; here the host owns the state explicitly and passes it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LangState {
    pub current: usize,
    pub fallback: usize,
}

impl LangState {
    pub fn new(current: usize, fallback: usize) -> Self {
        Self { current, fallback }
    }
}

/// Build the blob and index table from a catalog.
///
/// Deterministic: the same catalog content compiles to byte-identical blob
/// and index every run. Slot positions come from the sorted universes and
/// blob append order follows the catalog's own message order; no hash
/// iteration order is ever observable.
pub fn build(catalog: &Catalog) -> Result<StringTable> {
    let languages = discover::language_set(catalog);
    let ids = discover::id_set(catalog);

    let mut index = vec![MISSING; ids.len() * languages.len()];
    let mut blob: Vec<u8> = Vec::new();

    for msg in &catalog.messages {
        let msg_idx = ids
            .binary_search(&msg.id)
            .map_err(|_| anyhow!("id '{}' not found in discovered universe", msg.id))?;

        for tr in &msg.translations {
            let lang_idx = languages
                .binary_search(&tr.lang)
                .map_err(|_| anyhow!("language '{}' not found in discovered universe", tr.lang))?;

            let offset = i32::try_from(blob.len())
                .map_err(|_| anyhow!("blob exceeds the i32 offset range"))?;

            // Later (id, lang) occurrences overwrite earlier ones here;
            // the earlier bytes below are never reclaimed.
            index[msg_idx * languages.len() + lang_idx] = offset;

            blob.extend_from_slice(tr.text.as_bytes());
            blob.push(0);
        }
    }

    let unpadded_len = blob.len();
    // Pad to a 16-byte boundary; an empty catalog still emits one zero
    // block so the data array is never empty.
    if unpadded_len == 0 {
        blob.resize(BLOB_ALIGN, 0);
    } else {
        while blob.len() % BLOB_ALIGN != 0 {
            blob.push(0);
        }
    }

    Ok(StringTable { languages, ids, blob, index, unpadded_len })
}

impl StringTable {
    /// Raw slot value for a (message, language) index pair, if in range.
    pub fn slot(&self, msg_idx: usize, lang_idx: usize) -> Option<i32> {
        if lang_idx >= self.languages.len() {
            return None;
        }
        self.index.get(msg_idx * self.languages.len() + lang_idx).copied()
    }

    /// Runtime view of the emitted lookup function.
    ///
    /// Reads the current-language slot and falls back to the fallback
    /// language on [`MISSING`]. Where the emitted C returns an invalid
    /// reference on fallback exhaustion, this view returns `None` — the
    /// one deliberate behavioral difference from the artifact.
    pub fn lookup(&self, msg_idx: usize, state: &LangState) -> Option<&str> {
        let mut offset = self.slot(msg_idx, state.current)?;
        if offset == MISSING {
            offset = self.slot(msg_idx, state.fallback)?;
        }
        if offset < 0 {
            return None;
        }
        self.text_at(offset as usize)
    }

    /// Decode the zero-terminated UTF-8 run starting at `offset`.
    pub fn text_at(&self, offset: usize) -> Option<&str> {
        let rest = self.blob.get(offset..)?;
        let end = rest.iter().position(|&b| b == 0)?;
        std::str::from_utf8(&rest[..end]).ok()
    }

    /// Ids with no stored translation in the given language.
    ///
    /// Used by the opt-in missing-fallback audit; ids listed here would
    /// exhaust the emitted artifact's fallback when that language is the
    /// default.
    pub fn missing_in(&self, lang_idx: usize) -> Vec<&str> {
        self.ids
            .iter()
            .enumerate()
            .filter(|(msg_idx, _)| self.slot(*msg_idx, lang_idx) == Some(MISSING))
            .map(|(_, id)| id.as_str())
            .collect()
    }
}
