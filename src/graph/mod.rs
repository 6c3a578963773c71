//! Graph creator - materializes an import mapping as vault notes.
//!
//! Two strictly sequential phases: a read-only conflict pre-pass over the
//! vault, then a parallel fan-out writing one note per package. Nothing is
//! written while conflicts are being checked, and nothing is written at all
//! if any conflict is found.

pub mod classify;
pub mod errors;
pub mod naming;
pub mod node;

use std::collections::BTreeMap;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::render::Render;
use crate::vault::Vault;

pub use classify::Classifier;
pub use errors::{GraphError, NodeFailure};
pub use naming::NamingScheme;
pub use node::Node;

/// Package import path mapped to its ordered raw import list.
pub type ImportMapping = BTreeMap<String, Vec<String>>;

/// Creates one note per package in a destination vault.
pub struct GraphCreator<'a> {
    vault: &'a Vault,
    renderer: &'a (dyn Render + Sync),
    naming: NamingScheme,
    classifier: Classifier,
}

impl<'a> GraphCreator<'a> {
    pub fn new(
        vault: &'a Vault,
        renderer: &'a (dyn Render + Sync),
        naming: NamingScheme,
        classifier: Classifier,
    ) -> Self {
        GraphCreator {
            vault,
            renderer,
            naming,
            classifier,
        }
    }

    /// Materialize the whole mapping.
    ///
    /// Aborts before any write if a derived filename already exists or the
    /// vault cannot be checked. Per-node write tasks run in parallel with
    /// no ordering guarantees; failures from all tasks are collected into
    /// one [`GraphError::Materialize`] rather than stopping at the first.
    /// Notes written before a failing task was discovered are not rolled
    /// back.
    pub fn create_graph(&self, packages: &ImportMapping) -> Result<(), GraphError> {
        let conflicts = self.filename_conflicts(packages.keys())?;
        if !conflicts.is_empty() {
            return Err(GraphError::Conflicts {
                filenames: conflicts,
                vault: self.vault.name(),
            });
        }

        tracing::info!("Writing {} notes to {}", packages.len(), self.vault.name());

        let mut failures: Vec<NodeFailure> = packages
            .par_iter()
            .filter_map(|(name, imports)| {
                self.create_node(name, imports)
                    .err()
                    .map(|error| NodeFailure {
                        name: self.naming.filename(name),
                        error,
                    })
            })
            .collect();

        if !failures.is_empty() {
            failures.sort_by(|a, b| a.name.cmp(&b.name));
            return Err(GraphError::Materialize { failures });
        }

        Ok(())
    }

    /// Build and write a single note.
    pub fn create_node(&self, name: &str, imports: &[String]) -> Result<()> {
        let node = Node::build(name, imports, &self.naming, &self.classifier);

        tracing::debug!("Writing note {}", node.name);

        let file = self
            .vault
            .create(&node.name)
            .with_context(|| format!("failed to create `{}`", node.name))?;
        let mut out = BufWriter::new(file);

        self.renderer.render(&node, &mut out)?;

        out.flush()
            .with_context(|| format!("failed to flush `{}`", node.name))?;

        Ok(())
    }

    /// Read-only pre-pass: which derived filenames already exist.
    ///
    /// "Not found" is the expected case; any other vault failure aborts
    /// immediately so a broken store is never mistaken for a clean one.
    fn filename_conflicts<'n>(
        &self,
        packages: impl Iterator<Item = &'n String>,
    ) -> Result<Vec<String>, GraphError> {
        let mut existing = Vec::new();

        for pkg in packages {
            let filename = self.naming.filename(pkg);
            match self.vault.exists(&filename) {
                Ok(true) => existing.push(filename),
                Ok(false) => {}
                Err(source) => {
                    return Err(GraphError::Store {
                        name: filename,
                        source,
                    })
                }
            }
        }

        Ok(existing)
    }
}
