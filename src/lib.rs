//! Vaultgraph - Go import graphs as an Obsidian vault
//!
//! This crate provides the core library functionality for vaultgraph:
//! obtaining a package import mapping from `go list`, classifying each
//! package, and materializing one cross-linked Markdown note per package
//! into a destination vault.

pub mod analyzer;
pub mod graph;
pub mod render;
pub mod spelling;
pub mod util;
pub mod vault;

pub use analyzer::ImportsParser;
pub use graph::{GraphCreator, GraphError, Node};
pub use render::{NoteTemplate, Render};
pub use vault::Vault;
