//! Obsidian custom dictionary maintenance.
//!
//! Package-name tokens end up underlined by Obsidian's spell checker;
//! merging them into the custom dictionary once keeps the vault readable.
//! Out of the graph core: plain set-union over trimmed lines, idempotent
//! under repeated application.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Dictionary lines carrying this marker are Obsidian bookkeeping, not
/// words, and must not survive a rewrite.
const FORBIDDEN_MARKER: &str = "checksum";

/// Platform location of Obsidian's `Custom Dictionary.txt`, if resolvable.
pub fn dictionary_location() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(
        dirs.config_dir()
            .join("obsidian")
            .join("Custom Dictionary.txt"),
    )
}

/// Extract dictionary words from package import paths: every non-empty
/// path segment.
pub fn package_words<'a>(packages: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    packages
        .into_iter()
        .flat_map(|pkg| pkg.split('/'))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

/// Merge new words into existing dictionary content.
///
/// Set union over trimmed lines, dropping empties and any line carrying
/// the forbidden marker. Output is sorted, so the merge is idempotent and
/// independent of input order.
pub fn merge(existing: &str, words: &[String]) -> String {
    let mut set: BTreeSet<&str> = existing.lines().map(str::trim).collect();
    set.extend(words.iter().map(|w| w.trim()));

    let mut out = String::new();
    for word in set {
        if word.is_empty() || word.contains(FORBIDDEN_MARKER) {
            continue;
        }
        out.push_str(word);
        out.push('\n');
    }
    out
}

/// Merge words into the dictionary file at `path`, creating it if absent.
pub fn update_dictionary(path: &Path, words: &[String]) -> Result<()> {
    let existing = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e)
                .with_context(|| format!("failed to read dictionary: {}", path.display()))
        }
    };

    let merged = merge(&existing, words);

    std::fs::write(path, merged)
        .with_context(|| format!("failed to write dictionary: {}", path.display()))?;

    tracing::debug!("Updated dictionary {}", path.display());
    Ok(())
}
