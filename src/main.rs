// SPDX-License-Identifier: PMPL-1.0-or-later

//! msgforge: localized message catalog compiler
//!
//! One-shot batch transform: load a catalog, build the string table, run
//! the optional blob post-pass, render exactly one artifact. All errors
//! are fatal and local — no retries, no partial output. stdout carries
//! only the artifact; warnings and the verbose summary go to stderr.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use msgforge::catalog;
use msgforge::emit::EmitMode;
use msgforge::table::{self, StringTable};
use msgforge::transform::{BlobTransform, Identity, Keystream};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "msgforge")]
#[command(version = "1.0.0")]
#[command(about = "Compile localized message catalogs into embeddable C string tables")]
#[command(long_about = None)]
struct Cli {
    /// Artifact to emit
    #[arg(value_enum, value_name = "MODE")]
    mode: EmitMode,

    /// Catalog file (.json, .yaml or .yml)
    #[arg(value_name = "CATALOG")]
    catalog: PathBuf,

    /// Write the artifact to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// XOR the blob with a blake3 keystream derived from this 64-digit hex key
    #[arg(long, value_name = "HEX_KEY")]
    obfuscate: Option<String>,

    /// Warn on stderr about ids with no translation in the given language
    #[arg(long, value_name = "LANG")]
    warn_missing: Option<String>,

    /// Print a compilation summary on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = catalog::load_catalog(&cli.catalog)?;
    let mut table = table::build(&catalog)?;

    if let Some(lang) = &cli.warn_missing {
        warn_missing(&table, lang);
    }

    let transform: Box<dyn BlobTransform> = match &cli.obfuscate {
        Some(key) => Box::new(Keystream::from_hex(key)?),
        None => Box::new(Identity),
    };
    table.blob = transform.apply(std::mem::take(&mut table.blob));

    if cli.verbose {
        print_summary(&table, transform.name());
    }

    let artifact = cli.mode.render(&table);
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &artifact)?;
            eprintln!("Artifact saved to: {}", path.display());
        }
        None => print!("{artifact}"),
    }

    Ok(())
}

/// Opt-in audit for ids that would exhaust the emitted fallback. Reports
/// only; never changes the artifact.
fn warn_missing(table: &StringTable, lang: &str) {
    let Some(lang_idx) = table.languages.iter().position(|l| l == lang) else {
        eprintln!(
            "{} language '{}' does not appear in the catalog",
            "warning:".yellow().bold(),
            lang
        );
        return;
    };

    for id in table.missing_in(lang_idx) {
        eprintln!(
            "{} id '{}' has no '{}' translation; lookups falling back to it will fail",
            "warning:".yellow().bold(),
            id,
            lang
        );
    }
}

fn print_summary(table: &StringTable, transform: &str) {
    eprintln!("{}", "=== MSGFORGE SUMMARY ===".bold().cyan());
    eprintln!("  Languages: {}", table.languages.len());
    eprintln!("  Message ids: {}", table.ids.len());
    eprintln!("  Index slots: {}", table.index.len());
    eprintln!("  Blob bytes: {} ({} before padding)", table.blob.len(), table.unpadded_len);
    eprintln!("  Blob digest: {}", hex::encode(blake3::hash(&table.blob).as_bytes()));
    eprintln!("  Transform: {transform}");
}
