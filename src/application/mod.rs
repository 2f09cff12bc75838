// Application layer: wires parser -> visitor -> exporter for one run.

use std::path::Path;

use anyhow::Context;

use crate::domain::flowchart::Flowchart;
use crate::domain::visitor::FlowchartVisitor;
use crate::ports::{FlowchartExporter, SourceParser};

pub struct VisualizeUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub exporter: &'a dyn FlowchartExporter,
}

impl<'a> VisualizeUsecase<'a> {
    /// Parse the source, walk the tree, export the finished flowchart.
    /// Any failure aborts the run; no partial flowchart is written.
    pub fn run(&self, source: &str, export_path: &Path) -> anyhow::Result<Flowchart> {
        let tree = self.parser.parse(source)?;

        let mut visitor = FlowchartVisitor::new();
        visitor.visit(&tree)?;
        let graph = visitor.into_graph();

        self.exporter
            .export(&graph, export_path)
            .with_context(|| format!("failed to write {}", export_path.display()))?;

        Ok(graph)
    }
}
