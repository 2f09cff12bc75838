use std::path::Path;

use crate::domain::error::Result;
use crate::domain::flowchart::Flowchart;
use crate::domain::syntax::Stmt;

pub mod dot_exporter;

/// Produces the domain syntax tree from source text.
pub trait SourceParser {
    fn parse(&self, source: &str) -> Result<Stmt>;
}

/// Writes a finished flowchart to disk in some output format.
pub trait FlowchartExporter {
    fn export(&self, flow: &Flowchart, path: &Path) -> std::io::Result<()>;
}
