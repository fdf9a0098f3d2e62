//! GML export.
//!
//! Nodes are numbered in identifier order; the UUID is kept as the label and
//! the node kind as a string attribute.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::collections::HashMap;
use std::path::Path;

use crate::graph::{NodeId, PaymentGraph};

/// Render a graph as GML text
pub fn to_gml(graph: &PaymentGraph) -> String {
    let mut gml_content = String::new();
    gml_content.push_str("graph [\n");
    gml_content.push_str("  directed 1\n");

    let mut numbering: HashMap<&NodeId, usize> = HashMap::with_capacity(graph.node_count());
    for (index, (id, kind)) in graph.nodes().enumerate() {
        numbering.insert(id, index);
        gml_content.push_str("  node [\n");
        gml_content.push_str(&format!("    id {}\n", index));
        gml_content.push_str(&format!("    label \"{}\"\n", id));
        gml_content.push_str(&format!("    kind \"{}\"\n", kind.as_str()));
        gml_content.push_str("  ]\n");
    }

    for (from, to) in graph.edges() {
        gml_content.push_str("  edge [\n");
        gml_content.push_str(&format!("    source {}\n", numbering[from]));
        gml_content.push_str(&format!("    target {}\n", numbering[to]));
        gml_content.push_str("  ]\n");
    }

    gml_content.push_str("]\n");
    gml_content
}

/// Write a graph to `path` in GML format
pub fn write_gml(graph: &PaymentGraph, path: &Path) -> Result<()> {
    std::fs::write(path, to_gml(graph))
        .wrap_err_with(|| format!("Failed to write GML file '{}'", path.display()))
}
