// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pluggable blob post-processing.
//!
//! The original build carried a disabled cipher pass over the finished
//! blob. That surface is kept here as an explicit stage with the contract
//! `transform(bytes) -> bytes`, applied exactly once to the padded blob
//! before emission and never during table construction. All offsets are
//! computed before the transform runs, so implementations must be
//! length-preserving.

use anyhow::{bail, Context, Result};

/// Domain separator fed into the keyed hash before the keystream is drawn.
const KEYSTREAM_CONTEXT: &[u8] = b"msgforge.blob.keystream.v1";

/// A post-pass over the finished padded blob.
pub trait BlobTransform {
    /// Short name for log and summary output.
    fn name(&self) -> &'static str;

    /// Consume the blob and return the transformed bytes, same length.
    fn apply(&self, blob: Vec<u8>) -> Vec<u8>;
}

/// Default transform: hands the blob back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl BlobTransform for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn apply(&self, blob: Vec<u8>) -> Vec<u8> {
        blob
    }
}

/// XORs the blob with a blake3 keyed XOF keystream.
///
/// Length-preserving and self-inverse: applying the same key twice yields
/// the original bytes, which is what a host-side decoder does at startup.
/// This is obfuscation for embedded string tables, not a confidentiality
/// boundary.
#[derive(Debug, Clone)]
pub struct Keystream {
    key: [u8; 32],
}

impl Keystream {
    /// Build from a 64-digit hex key.
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let bytes = hex::decode(hex_key).context("obfuscation key is not valid hex")?;
        if bytes.len() != 32 {
            bail!("obfuscation key must be 32 bytes (64 hex digits), got {}", bytes.len());
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        Ok(Self { key })
    }
}

impl BlobTransform for Keystream {
    fn name(&self) -> &'static str {
        "blake3-keystream"
    }

    fn apply(&self, mut blob: Vec<u8>) -> Vec<u8> {
        let mut hasher = blake3::Hasher::new_keyed(&self.key);
        hasher.update(KEYSTREAM_CONTEXT);
        let mut stream = vec![0u8; blob.len()];
        hasher.finalize_xof().fill(&mut stream);
        for (byte, key_byte) in blob.iter_mut().zip(stream) {
            *byte ^= key_byte;
        }
        blob
    }
}
