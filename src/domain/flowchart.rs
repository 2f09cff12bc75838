//! Flowchart Data Structure
//!
//! Typed, labeled nodes and directed, optionally labeled edges,
//! accumulated by the visitor during one run.

/// Flowchart shape of a node, per standard flowcharting convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    /// Process step (generic box).
    #[default]
    Box,
    /// Input/output.
    Parallelogram,
    /// Decision.
    Diamond,
    /// Terminal.
    Rectangle,
}

/// A node in the flowchart.
#[derive(Debug, Clone)]
pub struct FlowNode {
    /// Unique identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Shape for visual styling
    pub shape: NodeShape,
}

/// An edge in the flowchart. All edges are directed forward.
#[derive(Debug, Clone)]
pub struct FlowEdge {
    /// Source node ID
    pub from: String,
    /// Target node ID
    pub to: String,
    /// Edge label (e.g., "yes", "no")
    pub label: Option<String>,
}

/// The flowchart being built. Created fresh per visualize run.
#[derive(Debug, Default)]
pub struct Flowchart {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl Flowchart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>, label: impl Into<String>, shape: NodeShape) {
        self.nodes.push(FlowNode {
            id: id.into(),
            label: label.into(),
            shape,
        });
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>, label: Option<String>) {
        self.edges.push(FlowEdge {
            from: from.into(),
            to: to.into(),
            label,
        });
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All edges leaving the given node.
    pub fn edges_from(&self, id: &str) -> Vec<&FlowEdge> {
        self.edges.iter().filter(|e| e.from == id).collect()
    }
}
