//! Graph export.
//!
//! Writes a generated network and its summary to an output directory.

pub mod gml;
pub mod json;

pub use gml::{to_gml, write_gml};
pub use json::{write_json, GraphDocument};

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::analysis::GraphSummary;
use crate::graph::{BusinessRegistry, PaymentGraph};

/// Output format for the generated graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Gml,
    Json,
}

impl ExportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Gml => "graph.gml",
            Self::Json => "graph.json",
        }
    }
}

/// Write the graph in `format` plus `summary.json` into `output_dir`.
///
/// Returns the path of the graph file.
pub fn write_network(
    graph: &PaymentGraph,
    businesses: &BusinessRegistry,
    summary: &GraphSummary,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| format!("Failed to create output directory '{}'", output_dir.display()))?;

    let graph_path = output_dir.join(format.file_name());
    match format {
        ExportFormat::Gml => write_gml(graph, &graph_path)?,
        ExportFormat::Json => write_json(graph, businesses, &graph_path)?,
    }
    info!("Wrote graph to {:?}", graph_path);

    let summary_path = output_dir.join("summary.json");
    let summary_json = serde_json::to_string_pretty(summary)?;
    std::fs::write(&summary_path, summary_json)
        .wrap_err_with(|| format!("Failed to write summary '{}'", summary_path.display()))?;
    info!("Wrote summary to {:?}", summary_path);

    Ok(graph_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summarize;

    #[test]
    fn test_write_network_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("out");
        let graph = PaymentGraph::new();
        let summary = summarize(&graph);

        let path = write_network(&graph, &BusinessRegistry::new(), &summary, ExportFormat::Json, &output).unwrap();

        assert_eq!(path, output.join("graph.json"));
        assert!(path.exists());
        assert!(output.join("summary.json").exists());
    }
}
