//! Note filename derivation.

/// How package import paths become note identifiers.
///
/// Obsidian note names cannot contain `/`, so the path separator is
/// rewritten to a delimiter. A vendor prefix (e.g. `vendor/golang.org/`)
/// is stripped first so vendored packages link to the same note as their
/// canonical import path.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    delimiter: String,
    strip_prefix: String,
    extension: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        NamingScheme {
            delimiter: "-".to_string(),
            strip_prefix: "vendor/golang.org/".to_string(),
            extension: ".md".to_string(),
        }
    }
}

impl NamingScheme {
    pub fn new(
        delimiter: impl Into<String>,
        strip_prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        NamingScheme {
            delimiter: delimiter.into(),
            strip_prefix: strip_prefix.into(),
            extension: extension.into(),
        }
    }

    /// Rewrite an import path into a note identifier (no extension).
    ///
    /// Total and deterministic over any input string.
    pub fn transform(&self, pkg: &str) -> String {
        let pkg = if !self.strip_prefix.is_empty() {
            pkg.replace(&self.strip_prefix, "")
        } else {
            pkg.to_string()
        };
        pkg.replace('/', &self.delimiter)
    }

    /// Derive the note filename for an import path.
    pub fn filename(&self, pkg: &str) -> String {
        let mut name = self.transform(pkg);
        name.push_str(&self.extension);
        name
    }
}
