//! Package classification and tag derivation.

use std::collections::HashSet;

use crate::graph::naming::NamingScheme;

/// Default marker for unstable/private packages.
///
/// The marker list is policy, not a fixed rule: organizations with their
/// own restricted path segments can extend it via configuration.
pub const DEFAULT_INTERNAL_MARKERS: &[&str] = &["internal"];

/// Default tag hierarchy prepended to every note's classification tag.
pub const DEFAULT_TAG_PREFIX: &[&str] = &["go", "pkg", "std"];

/// Classifies transformed note identifiers as internal, core, or specific.
///
/// Pure over its inputs: the core set and marker list are fixed at
/// construction and shared read-only across all materialization tasks.
#[derive(Debug)]
pub struct Classifier {
    core: HashSet<String>,
    markers: Vec<String>,
    tag_prefix: Vec<String>,
}

impl Classifier {
    /// Build a classifier.
    ///
    /// Core-set entries are normalized through `naming` so callers may list
    /// either raw import paths (`crypto/tls`) or transformed identifiers
    /// (`crypto-tls`).
    pub fn new<I, S>(core_set: I, markers: Vec<String>, tag_prefix: Vec<String>, naming: &NamingScheme) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Classifier {
            core: core_set
                .into_iter()
                .map(|pkg| naming.transform(pkg.as_ref()))
                .collect(),
            markers,
            tag_prefix,
        }
    }

    /// Classifier with default markers and tag prefix.
    pub fn with_defaults<I, S>(core_set: I, naming: &NamingScheme) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            core_set,
            DEFAULT_INTERNAL_MARKERS.iter().map(|m| m.to_string()).collect(),
            DEFAULT_TAG_PREFIX.iter().map(|t| t.to_string()).collect(),
            naming,
        )
    }

    /// Whether a transformed identifier names an unstable/private package.
    pub fn is_internal(&self, ident: &str) -> bool {
        self.markers.iter().any(|marker| ident.contains(marker))
    }

    /// Whether a transformed identifier belongs to the core set.
    pub fn is_core(&self, ident: &str) -> bool {
        self.core.contains(ident)
    }

    /// Derive the classification tag for a transformed identifier.
    ///
    /// Precedence: internal > core > specific. Internal wins even when the
    /// identifier is also in the core set.
    pub fn tag(&self, ident: &str) -> String {
        let kind = if self.is_internal(ident) {
            "internal"
        } else if self.is_core(ident) {
            "core"
        } else {
            "specific"
        };

        let mut parts: Vec<&str> = self.tag_prefix.iter().map(String::as_str).collect();
        parts.push(kind);
        parts.join("/")
    }
}
