//! Import mapping provider.
//!
//! Shells out to `go list` and parses its line-oriented output into a
//! package → imports mapping. The same parser accepts a saved listing from
//! a file, so runs can be replayed without a Go toolchain.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::graph::ImportMapping;
use crate::util::ProcessBuilder;

/// `go list` output format: one `path: [imports]` line per package.
const LIST_FORMAT: &str = "{{.ImportPath}}: {{.Imports}}";

/// Parses package import listings.
pub struct ImportsParser {
    line: Regex,
}

impl Default for ImportsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportsParser {
    pub fn new() -> Self {
        ImportsParser {
            line: Regex::new(r"([\w./]+): \[([^\]]*)\]").unwrap(),
        }
    }

    /// Obtain the import mapping for a scope (`std`, or a module path) by
    /// invoking `go list`.
    pub fn parse_imports(&self, scope: &str) -> Result<ImportMapping> {
        let cmd = self.command(scope);

        tracing::debug!(
            "Running `{} {}`",
            cmd.get_program().display(),
            cmd.get_args().join(" ")
        );

        let stdout = cmd
            .exec_with_output()
            .with_context(|| format!("failed to list imports for `{scope}`"))?;

        self.parse_reader(stdout.as_slice())
    }

    /// Parse a saved listing from a file.
    pub fn parse_file(&self, path: &Path) -> Result<ImportMapping> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open listing: {}", path.display()))?;
        self.parse_reader(std::io::BufReader::new(file))
    }

    /// Parse `path: [imports]` lines from any reader.
    ///
    /// Lines that don't match the format are skipped, not errors; `go list`
    /// interleaves warnings on some toolchains.
    pub fn parse_reader(&self, reader: impl BufRead) -> Result<ImportMapping> {
        let mut packages = ImportMapping::new();

        for line in reader.lines() {
            let line = line.context("failed to read listing line")?;
            if let Some((name, imports)) = self.parse_line(&line) {
                packages.insert(name, imports);
            }
        }

        Ok(packages)
    }

    fn parse_line(&self, line: &str) -> Option<(String, Vec<String>)> {
        let captures = self.line.captures(line.trim())?;

        let name = captures[1].to_string();
        let imports = captures[2]
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        Some((name, imports))
    }

    fn command(&self, scope: &str) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new("go")
            .args(["list", "-f", LIST_FORMAT])
            .arg(scope);

        // Module scopes need the recursive pattern; `std` does not.
        if scope != "std" {
            cmd = cmd.arg("./...");
        }

        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_extracts_name_and_imports() {
        let parser = ImportsParser::new();
        let (name, imports) = parser
            .parse_line("crypto/tls: [bytes crypto crypto/aes]")
            .unwrap();
        assert_eq!(name, "crypto/tls");
        assert_eq!(imports, ["bytes", "crypto", "crypto/aes"]);
    }

    #[test]
    fn test_parse_line_empty_import_list() {
        let parser = ImportsParser::new();
        let (name, imports) = parser.parse_line("unsafe: []").unwrap();
        assert_eq!(name, "unsafe");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_parse_line_skips_garbage() {
        let parser = ImportsParser::new();
        assert!(parser.parse_line("go: downloading something").is_none());
        assert!(parser.parse_line("").is_none());
    }

    #[test]
    fn test_parse_reader_builds_mapping() {
        let parser = ImportsParser::new();
        let listing = "\
fmt: [errors io os]
warning: something unrelated
io: [errors sync]
";
        let packages = parser.parse_reader(listing.as_bytes()).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages["fmt"], ["errors", "io", "os"]);
        assert_eq!(packages["io"], ["errors", "sync"]);
    }

    #[test]
    fn test_command_appends_recursive_pattern_for_modules() {
        let parser = ImportsParser::new();
        assert_eq!(
            parser.command("std").get_args(),
            ["list", "-f", LIST_FORMAT, "std"]
        );
        assert_eq!(
            parser.command("./mymod").get_args(),
            ["list", "-f", LIST_FORMAT, "./mymod", "./..."]
        );
    }
}
