// Domain layer: the syntax tree model, the flowchart graph, and the
// visitor that turns one into the other.

pub mod error;
pub mod flowchart;
pub mod idgen;
pub mod syntax;
pub mod visitor;
