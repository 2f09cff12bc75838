//! Flowchart DOT Exporter
//!
//! Renders a Flowchart as Graphviz DOT with standard flowchart shapes.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::domain::flowchart::{Flowchart, NodeShape};
use crate::ports::FlowchartExporter;

pub struct DotExporter;

impl DotExporter {
    /// Convert a Flowchart to a DOT string.
    pub fn to_dot(flow: &Flowchart) -> String {
        let mut lines = Vec::new();

        lines.push("digraph Flowchart {".to_string());
        lines.push("    rankdir=TB;".to_string()); // Top to bottom
        lines.push("    node [fontname=\"Helvetica\", fontsize=12];".to_string());
        lines.push("    edge [fontname=\"Helvetica\", fontsize=10];".to_string());
        lines.push(String::new());

        for node in &flow.nodes {
            lines.push(format!(
                "    \"{}\" [label=\"{}\", shape={}];",
                node.id,
                Self::escape_label(&node.label),
                Self::shape_attr(node.shape)
            ));
        }

        lines.push(String::new());

        for edge in &flow.edges {
            match &edge.label {
                Some(label) => lines.push(format!(
                    "    \"{}\" -> \"{}\" [label=\"{}\"];",
                    edge.from,
                    edge.to,
                    Self::escape_label(label)
                )),
                None => lines.push(format!("    \"{}\" -> \"{}\";", edge.from, edge.to)),
            }
        }

        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Render an exported DOT file to SVG with the system `dot` binary,
    /// returning the SVG path.
    pub fn render_svg(dot_path: &Path) -> anyhow::Result<PathBuf> {
        let svg_path = dot_path.with_extension("svg");
        let status = Command::new("dot")
            .arg("-Tsvg")
            .arg(dot_path)
            .arg("-o")
            .arg(&svg_path)
            .status()
            .context("failed to run `dot`; is Graphviz installed?")?;
        if !status.success() {
            anyhow::bail!("dot exited with {}", status);
        }
        Ok(svg_path)
    }

    fn shape_attr(shape: NodeShape) -> &'static str {
        match shape {
            NodeShape::Box => "box",
            NodeShape::Parallelogram => "parallelogram",
            NodeShape::Diamond => "diamond",
            NodeShape::Rectangle => "rectangle",
        }
    }

    fn escape_label(label: &str) -> String {
        label
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    }
}

impl FlowchartExporter for DotExporter {
    fn export(&self, flow: &Flowchart, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, Self::to_dot(flow))
    }
}
