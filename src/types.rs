// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for msgforge

use serde::{Deserialize, Serialize};

/// One localized rendering of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Language code, e.g. "en" or "fr". Any short string tag is accepted;
    /// codes are compared byte-wise when the language universe is sorted.
    pub lang: String,
    /// Translated text, stored byte-faithful as UTF-8.
    pub text: String,
}

/// One logical string identified by an id, with zero or more translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// The full ordered collection of messages to compile.
///
/// Read once per run and immutable afterwards; everything else in the
/// pipeline is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub messages: Vec<Message>,
}

impl Catalog {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
