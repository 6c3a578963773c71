//! Node - the per-package record rendered into a note.

use crate::graph::classify::Classifier;
use crate::graph::naming::NamingScheme;

/// One package's note, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Note filename (transformed identifier plus extension), unique
    /// within a run's output set.
    pub name: String,

    /// Hierarchical classification labels. Exactly one is derived today;
    /// the model allows more.
    pub tags: Vec<String>,

    /// Transformed identifiers of stable dependencies.
    pub imports: Vec<String>,

    /// Transformed identifiers of dependencies classified as internal,
    /// kept apart so the rendered note can distinguish them.
    pub from_internal: Vec<String>,
}

impl Node {
    /// Build a node from a raw import path and its raw import list.
    ///
    /// Dependencies are classified on their transformed identifiers, the
    /// same space `name` lives in. `imports` and `from_internal` partition
    /// the import list; input order is preserved within each half.
    pub fn build(
        name: &str,
        raw_imports: &[String],
        naming: &NamingScheme,
        classifier: &Classifier,
    ) -> Self {
        let ident = naming.transform(name);

        let mut imports = Vec::with_capacity(raw_imports.len());
        let mut from_internal = Vec::new();

        for raw in raw_imports {
            let dep = naming.transform(raw);
            if classifier.is_internal(&dep) {
                from_internal.push(dep);
            } else {
                imports.push(dep);
            }
        }

        Node {
            name: naming.filename(name),
            tags: vec![classifier.tag(&ident)],
            imports,
            from_internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (NamingScheme, Classifier) {
        let naming = NamingScheme::default();
        let classifier = Classifier::with_defaults(["fmt"], &naming);
        (naming, classifier)
    }

    #[test]
    fn test_build_partitions_imports() {
        let (naming, classifier) = fixtures();
        let imports = vec![
            "c/d".to_string(),
            "internal/e".to_string(),
            "fmt".to_string(),
        ];

        let node = Node::build("a/b", &imports, &naming, &classifier);

        assert_eq!(node.name, "a-b.md");
        assert_eq!(node.imports, vec!["c-d", "fmt"]);
        assert_eq!(node.from_internal, vec!["internal-e"]);
        assert_eq!(node.tags, vec!["go/pkg/std/specific"]);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let (naming, classifier) = fixtures();
        let imports: Vec<String> = ["io", "internal/poll", "sync", "internal/race"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let node = Node::build("os", &imports, &naming, &classifier);

        assert_eq!(node.imports.len() + node.from_internal.len(), imports.len());
        for dep in &node.imports {
            assert!(!node.from_internal.contains(dep));
        }
    }

    #[test]
    fn test_internal_node_tagged_internal() {
        let (naming, classifier) = fixtures();
        let node = Node::build("internal/abi", &[], &naming, &classifier);
        assert_eq!(node.tags, vec!["go/pkg/std/internal"]);
    }

    #[test]
    fn test_core_node_tagged_core() {
        let (naming, classifier) = fixtures();
        let node = Node::build("fmt", &[], &naming, &classifier);
        assert_eq!(node.tags, vec!["go/pkg/std/core"]);
    }
}
