//! Graph documents: TOML/JSON adjacency tables
//!
//! A document lists nodes in order, each with its adjacency list. Edges are
//! inserted exactly as listed; no symmetric closure is applied.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bail_unsupported;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// On-disk graph document
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
}

/// A declared node and its adjacency list
#[derive(Debug, Clone, Deserialize)]
pub struct NodeEntry {
    pub name: String,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

/// A single `(neighbor, weight)` listing
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeEntry {
    pub to: String,
    pub weight: f64,
}

impl GraphDocument {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Build the graph. Each name may be declared once and nodes follow
    /// declaration order; neighbors that are never declared are appended
    /// after the declared nodes, without listings of their own.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::with_capacity(self.nodes.len());
        let mut declared: HashSet<&str> = HashSet::with_capacity(self.nodes.len());

        for entry in &self.nodes {
            if !declared.insert(entry.name.as_str()) {
                return Err(GraphError::already_exists("node", &entry.name));
            }
            graph.add_node(entry.name.as_str());
        }

        for entry in self.nodes {
            for edge in entry.edges {
                graph.add_edge(&entry.name, edge.to, edge.weight)?;
            }
        }

        Ok(graph)
    }
}

/// Load a graph file, choosing the parser by extension (`.toml` or `.json`)
pub fn load_graph(path: &Path) -> Result<Graph> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read graph", path.display(), e))?;

    let document = match extension.as_str() {
        "toml" => GraphDocument::from_toml_str(&content)?,
        "json" => GraphDocument::from_json_str(&content)?,
        other => bail_unsupported!("graph file extension", format!("'{}'", other), "toml, json"),
    };

    let graph = document.into_graph()?;
    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        listings = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Distance;
    use tempfile::tempdir;

    const SMALL_TOML: &str = r#"
[[nodes]]
name = "Madrid"
edges = [{ to = "Alcorcón", weight = 13 }]

[[nodes]]
name = "Alcorcón"
edges = [{ to = "Madrid", weight = 13 }, { to = "Móstoles", weight = 5.5 }]
"#;

    #[test]
    fn test_toml_document() {
        let graph = GraphDocument::from_toml_str(SMALL_TOML)
            .unwrap()
            .into_graph()
            .unwrap();

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["Madrid", "Alcorcón", "Móstoles"]);
        assert_eq!(graph.neighbors("Alcorcón")[1].weight, Distance::new(5.5));
        assert!(graph.neighbors("Móstoles").is_empty());
    }

    #[test]
    fn test_json_document() {
        let json = r#"{"nodes": [
            {"name": "A", "edges": [{"to": "B", "weight": 2}]},
            {"name": "B", "edges": [{"to": "A", "weight": 2}]}
        ]}"#;
        let graph = GraphDocument::from_json_str(json).unwrap().into_graph().unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_node_without_edges_key() {
        let graph = GraphDocument::from_toml_str("[[nodes]]\nname = \"Lonely\"\n")
            .unwrap()
            .into_graph()
            .unwrap();
        assert!(graph.contains("Lonely"));
    }

    #[test]
    fn test_empty_document() {
        let graph = GraphDocument::from_toml_str("").unwrap().into_graph().unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_duplicate_declaration_rejected() {
        let doc = "[[nodes]]\nname = \"A\"\n\n[[nodes]]\nname = \"A\"\n";
        let err = GraphDocument::from_toml_str(doc).unwrap().into_graph().unwrap_err();
        assert!(matches!(err, GraphError::AlreadyExists { .. }));
    }

    #[test]
    fn test_declaration_order_kept() {
        let doc = r#"
[[nodes]]
name = "Madrid"
edges = [{ to = "Alcorcón", weight = 13 }, { to = "Getafe", weight = 16 }]

[[nodes]]
name = "Getafe"
edges = [{ to = "Parla", weight = 6 }]

[[nodes]]
name = "Alcorcón"
"#;
        let graph = GraphDocument::from_toml_str(doc).unwrap().into_graph().unwrap();

        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["Madrid", "Getafe", "Alcorcón", "Parla"]);
    }

    #[test]
    fn test_neighbor_declared_later_is_not_duplicate() {
        let graph = GraphDocument::from_toml_str(SMALL_TOML)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(graph.neighbors("Madrid").len(), 1);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let doc = "[[nodes]]\nname = \"A\"\nedges = [{ to = \"B\", weight = -4 }]\n";
        let err = GraphDocument::from_toml_str(doc).unwrap().into_graph().unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }

    #[test]
    fn test_load_graph_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("towns.toml");
        fs::write(&path, SMALL_TOML).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_load_graph_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("towns.csv");
        fs::write(&path, "Madrid,Alcorcón,13\n").unwrap();

        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, GraphError::Unsupported { .. }));
    }

    #[test]
    fn test_load_graph_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[nodes]\nname = ").unwrap();

        assert!(matches!(load_graph(&path).unwrap_err(), GraphError::Toml(_)));
    }

    #[test]
    fn test_load_graph_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GraphError::FailedOperationWithTarget { .. }));
    }
}
