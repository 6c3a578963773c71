//! Note rendering.
//!
//! The graph creator only needs something that can turn a [`Node`] into
//! bytes; the Obsidian Markdown layout lives behind the [`Render`] trait so
//! tests can substitute failing or recording renderers.

use std::io::Write;

use anyhow::Result;

use crate::graph::Node;

/// Renders one node into a writable sink.
///
/// Errors propagate unchanged as that node's materialization failure.
pub trait Render {
    fn render(&self, node: &Node, out: &mut dyn Write) -> Result<()>;
}

/// The built-in Obsidian note layout: YAML frontmatter carrying the tags,
/// then a `[[wiki-link]]` list per import partition. Internal imports are
/// italicized so they stand apart on the graph view's hover preview.
#[derive(Debug, Default)]
pub struct NoteTemplate;

impl NoteTemplate {
    pub fn new() -> Self {
        NoteTemplate
    }
}

impl Render for NoteTemplate {
    fn render(&self, node: &Node, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "---")?;
        writeln!(out, "tags:")?;
        for tag in &node.tags {
            writeln!(out, "  - {tag}")?;
        }
        writeln!(out, "---")?;

        if !node.imports.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Imports")?;
            writeln!(out)?;
            for dep in &node.imports {
                writeln!(out, "- [[{dep}]]")?;
            }
        }

        if !node.from_internal.is_empty() {
            writeln!(out)?;
            writeln!(out, "## From internal")?;
            writeln!(out)?;
            for dep in &node.from_internal {
                writeln!(out, "- *[[{dep}]]*")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(node: &Node) -> String {
        let mut buf = Vec::new();
        NoteTemplate::new().render(node, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_renders_frontmatter_and_sections() {
        let node = Node {
            name: "a-b.md".to_string(),
            tags: vec!["go/pkg/std/specific".to_string()],
            imports: vec!["c-d".to_string()],
            from_internal: vec!["internal-e".to_string()],
        };

        let text = render(&node);

        assert!(text.starts_with("---\ntags:\n  - go/pkg/std/specific\n---\n"));
        assert!(text.contains("## Imports\n\n- [[c-d]]\n"));
        assert!(text.contains("## From internal\n\n- *[[internal-e]]*\n"));
    }

    #[test]
    fn test_empty_partitions_render_no_sections() {
        let node = Node {
            name: "leaf.md".to_string(),
            tags: vec!["go/pkg/std/core".to_string()],
            imports: vec![],
            from_internal: vec![],
        };

        let text = render(&node);

        assert!(!text.contains("## Imports"));
        assert!(!text.contains("## From internal"));
        assert!(text.contains("go/pkg/std/core"));
    }
}
