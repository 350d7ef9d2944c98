// SPDX-License-Identifier: PMPL-1.0-or-later

//! C artifact rendering over a finished string table.
//!
//! Two symmetric modes share one intermediate representation and never
//! recompute it: `declaration` renders the consuming header surface,
//! `definition` renders the storage and the lookup function. One artifact
//! per invocation; no output mixes both.
//!
//! The emitted symbol surface (`MSG_NB_LANG`, `MSG_NB_ID`, `MSG_DATA_LEN`,
//! `msg_codes_lang`, `msg_data`, `msg_index`, `msg_get_string`, `_MSG`)
//! is kept stable for drop-in compatibility with existing consumers.

pub mod declaration;
pub mod definition;

use crate::table::StringTable;
use clap::ValueEnum;

/// Which of the two artifacts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitMode {
    /// Header/interface form for the consuming translation unit.
    Declaration,
    /// Data-definition form holding the actual table storage.
    Definition,
}

impl EmitMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "declaration" | "decl" | "h" => Some(EmitMode::Declaration),
            "definition" | "def" | "c" => Some(EmitMode::Definition),
            _ => None,
        }
    }

    /// Conventional file extension for the artifact.
    pub fn extension(&self) -> &'static str {
        match self {
            EmitMode::Declaration => "h",
            EmitMode::Definition => "c",
        }
    }

    /// Render the artifact text for this mode.
    pub fn render(&self, table: &StringTable) -> String {
        match self {
            EmitMode::Declaration => declaration::render(table),
            EmitMode::Definition => definition::render(table),
        }
    }
}

/// Values per source line in emitted array literals.
const VALUES_PER_ROW: usize = 20;

/// Render a C array initializer body, wrapped at [`VALUES_PER_ROW`].
pub(crate) fn initializer_rows<T: std::fmt::Display>(values: &[T]) -> Vec<String> {
    values
        .chunks(VALUES_PER_ROW)
        .map(|chunk| chunk.iter().map(T::to_string).collect::<Vec<_>>().join(","))
        .collect()
}

/// Quote a language code as a C string literal.
pub(crate) fn c_quote(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
