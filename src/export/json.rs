//! JSON export of a generated network.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::{BusinessRegistry, NodeId, NodeKind, PaymentGraph};

/// A node in the exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub kind: NodeKind,
}

/// A directed edge in the exported document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeId,
    pub target: NodeId,
}

/// Serializable form of a network: nodes, edges and the business set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub businesses: Vec<NodeId>,
}

impl GraphDocument {
    pub fn new(graph: &PaymentGraph, businesses: &BusinessRegistry) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|(id, kind)| NodeRecord { id: *id, kind })
                .collect(),
            edges: graph
                .edges()
                .map(|(source, target)| EdgeRecord {
                    source: *source,
                    target: *target,
                })
                .collect(),
            businesses: businesses.iter().copied().collect(),
        }
    }
}

/// Write a network to `path` as pretty-printed JSON
pub fn write_json(graph: &PaymentGraph, businesses: &BusinessRegistry, path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Failed to create JSON file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &GraphDocument::new(graph, businesses))
        .wrap_err_with(|| format!("Failed to write JSON file '{}'", path.display()))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_json_document_round_trip() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut graph = PaymentGraph::new();
        let person = NodeId::random(&mut rng);
        let shop = NodeId::random(&mut rng);
        graph.add_node(person, NodeKind::Individual).unwrap();
        graph.add_node(shop, NodeKind::Business).unwrap();
        graph.add_edge(person, shop).unwrap();
        let businesses: BusinessRegistry = [shop].into_iter().collect();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        write_json(&graph, &businesses, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"kind\": \"business\""));
        assert!(content.contains(&person.to_string()));

        let document: GraphDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document, GraphDocument::new(&graph, &businesses));
        assert_eq!(document.edges, vec![EdgeRecord { source: person, target: shop }]);
        assert_eq!(document.businesses, vec![shop]);
    }
}
