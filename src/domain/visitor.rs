//! Tree-to-Graph Visitor
//!
//! Recursive walk over the syntax tree that emits flowchart nodes and
//! control-flow edges. Every case returns the entry identifier of the
//! subgraph it just built, so the caller can attach an incoming edge to
//! it: blocks connect head-to-head, with internal chaining hidden.

use log::debug;

use crate::domain::error::{Result, VisualizeError};
use crate::domain::flowchart::{Flowchart, NodeShape};
use crate::domain::idgen::IdGen;
use crate::domain::syntax::Stmt;

/// Walks a syntax tree and accumulates a flowchart. The visitor is the
/// only writer of the graph and the id counter for the duration of a run.
#[derive(Debug, Default)]
pub struct FlowchartVisitor {
    graph: Flowchart,
    ids: IdGen,
}

impl FlowchartVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the run and hand over the built graph.
    pub fn into_graph(self) -> Flowchart {
        self.graph
    }

    /// Add the figures for `node` to the graph, returning the entry
    /// identifier of the subgraph just built. Every returned identifier
    /// names a node already registered in the graph.
    ///
    /// Module returns an empty sentinel: it is always top-level, so
    /// callers never chain off it.
    pub fn visit(&mut self, node: &Stmt) -> Result<String> {
        debug!("visiting: {:?}", node);

        match node {
            Stmt::Module { body } => {
                for child in body {
                    self.visit(child)?;
                }
                Ok(String::new())
            }
            Stmt::FunctionDef { name, params, body } => {
                let decl_id = self.ids.next("decl");
                self.graph.add_node(&decl_id, name, NodeShape::Box);

                // One "Input <name>" node per parameter, chained off the
                // declaration in order.
                let mut tail_id = decl_id.clone();
                for param in params {
                    let arg_id = self.ids.next("arg");
                    self.graph
                        .add_node(&arg_id, format!("Input {}", param), NodeShape::Parallelogram);
                    self.graph.add_edge(&tail_id, &arg_id, None);
                    tail_id = arg_id;
                }

                let body_id = self.visit_seq(body)?;
                self.graph.add_edge(&tail_id, &body_id, None);

                Ok(decl_id)
            }
            Stmt::If { test, body, orelse } => {
                let test_id = self.ids.next("cond");
                self.graph.add_node(&test_id, test.unparse(), NodeShape::Diamond);

                let body_id = self.visit_seq(body)?;
                let else_id = self.visit_seq(orelse)?;

                self.graph.add_edge(&test_id, &body_id, Some("yes".to_string()));
                self.graph.add_edge(&test_id, &else_id, Some("no".to_string()));
                Ok(test_id)
            }
            Stmt::Assign { targets, value } => {
                if targets.len() != 1 {
                    let text = targets
                        .iter()
                        .map(|t| t.unparse())
                        .chain(std::iter::once(value.unparse()))
                        .collect::<Vec<_>>()
                        .join(" = ");
                    return Err(VisualizeError::MalformedAssignment { text });
                }
                let assign_id = self.ids.next("assignment");
                let label = format!("set {} to {}", targets[0].unparse(), value.unparse());
                self.graph.add_node(&assign_id, label, NodeShape::Box);
                Ok(assign_id)
            }
            Stmt::Return { value } => {
                let return_id = self.ids.next("return");
                let label = match value {
                    Some(value) => format!("result is {}", value.unparse()),
                    None => "end of procedure".to_string(),
                };
                self.graph.add_node(&return_id, label, NodeShape::Rectangle);
                Ok(return_id)
            }
            Stmt::Expr { value } => {
                let expr_id = self.ids.next("expr");
                self.graph.add_node(&expr_id, value.unparse(), NodeShape::Box);
                Ok(expr_id)
            }
            Stmt::Other { kind, text } => Err(VisualizeError::UnsupportedConstruct {
                kind: kind.clone(),
                text: text.clone(),
            }),
        }
    }

    /// Statement sequences chain head to tail: each element's entry node
    /// gets a forward edge from the previous element's entry, and the
    /// sequence's own entry is its first element, so callers connect to
    /// the start of the block.
    ///
    /// An empty sequence (e.g. a missing else branch) still has to
    /// resolve to a real node for the surrounding edges to stay valid,
    /// so it mints an explicit pass-through node.
    pub fn visit_seq(&mut self, stmts: &[Stmt]) -> Result<String> {
        match stmts {
            [] => {
                let pass_id = self.ids.next("pass");
                self.graph.add_node(&pass_id, "continue", NodeShape::Box);
                Ok(pass_id)
            }
            [single] => self.visit(single),
            [head, tail @ ..] => {
                let head_id = self.visit(head)?;
                let tail_id = self.visit_seq(tail)?;
                self.graph.add_edge(&head_id, &tail_id, None);
                Ok(head_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::syntax::ExprSrc;

    fn assign(target: &str, value: &str) -> Stmt {
        Stmt::Assign {
            targets: vec![ExprSrc::new(target)],
            value: ExprSrc::new(value),
        }
    }

    #[test]
    fn sequence_chains_consecutive_elements() {
        let stmts = vec![assign("a", "1"), assign("b", "2"), assign("c", "3")];

        let mut visitor = FlowchartVisitor::new();
        let entry = visitor.visit_seq(&stmts).unwrap();
        let graph = visitor.into_graph();

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);
        // Entry is the first element, and the chain runs forward from it.
        assert_eq!(graph.nodes[0].id, entry);
        assert_eq!(graph.edges[0].from, entry);
        assert_eq!(graph.edges[1].from, graph.edges[0].to);
    }

    #[test]
    fn singleton_sequence_delegates_to_element() {
        let mut visitor = FlowchartVisitor::new();
        let entry = visitor.visit_seq(&[assign("x", "1")]).unwrap();
        let graph = visitor.into_graph();

        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.node(&entry).unwrap().label, "set x to 1");
    }

    #[test]
    fn empty_sequence_yields_pass_through_node() {
        let mut visitor = FlowchartVisitor::new();
        let entry = visitor.visit_seq(&[]).unwrap();
        let graph = visitor.into_graph();

        let node = graph.node(&entry).expect("pass-through node registered");
        assert_eq!(node.label, "continue");
        assert_eq!(node.shape, NodeShape::Box);
    }

    #[test]
    fn conditional_has_yes_and_no_edges_even_with_empty_else() {
        let node = Stmt::If {
            test: ExprSrc::new("a > 0"),
            body: vec![assign("x", "1")],
            orelse: vec![],
        };

        let mut visitor = FlowchartVisitor::new();
        let cond_id = visitor.visit(&node).unwrap();
        let graph = visitor.into_graph();

        let out = graph.edges_from(&cond_id);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].label.as_deref(), Some("yes"));
        assert_eq!(out[1].label.as_deref(), Some("no"));
        // The empty else branch resolved to a real node.
        assert!(graph.node(&out[1].to).is_some());
        assert_eq!(graph.node(&cond_id).unwrap().shape, NodeShape::Diamond);
    }

    #[test]
    fn function_without_params_connects_declaration_to_body() {
        let node = Stmt::FunctionDef {
            name: "f".to_string(),
            params: vec![],
            body: vec![Stmt::Return { value: None }],
        };

        let mut visitor = FlowchartVisitor::new();
        let decl_id = visitor.visit(&node).unwrap();
        let graph = visitor.into_graph();

        let out = graph.edges_from(&decl_id);
        assert_eq!(out.len(), 1);
        assert_eq!(graph.node(&out[0].to).unwrap().label, "end of procedure");
    }

    #[test]
    fn params_become_parallelograms_chained_in_order() {
        let node = Stmt::FunctionDef {
            name: "f".to_string(),
            params: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            body: vec![Stmt::Return { value: None }],
        };

        let mut visitor = FlowchartVisitor::new();
        let decl_id = visitor.visit(&node).unwrap();
        let graph = visitor.into_graph();

        let inputs: Vec<&str> = graph
            .nodes
            .iter()
            .filter(|n| n.shape == NodeShape::Parallelogram)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(inputs, ["Input a", "Input b", "Input c"]);

        // Forward path: decl -> a -> b -> c -> body entry.
        let mut at = decl_id;
        for expected in ["Input a", "Input b", "Input c", "end of procedure"] {
            let out = graph.edges_from(&at);
            assert_eq!(out.len(), 1);
            at = out[0].to.clone();
            assert_eq!(graph.node(&at).unwrap().label, expected);
        }
    }

    #[test]
    fn multi_target_assignment_adds_no_node() {
        let node = Stmt::Assign {
            targets: vec![ExprSrc::new("x"), ExprSrc::new("y")],
            value: ExprSrc::new("1"),
        };

        let mut visitor = FlowchartVisitor::new();
        let err = visitor.visit(&node).unwrap_err();
        assert!(matches!(err, VisualizeError::MalformedAssignment { ref text } if text == "x = y = 1"));
        assert!(visitor.into_graph().nodes.is_empty());
    }

    #[test]
    fn unsupported_construct_names_the_kind() {
        let node = Stmt::Other {
            kind: "while_statement".to_string(),
            text: "while x:".to_string(),
        };

        let mut visitor = FlowchartVisitor::new();
        let err = visitor.visit(&node).unwrap_err();
        match err {
            VisualizeError::UnsupportedConstruct { kind, text } => {
                assert_eq!(kind, "while_statement");
                assert_eq!(text, "while x:");
            }
            other => panic!("expected UnsupportedConstruct, got {:?}", other),
        }
        assert!(visitor.into_graph().nodes.is_empty());
    }

    #[test]
    fn module_returns_empty_sentinel() {
        let node = Stmt::Module {
            body: vec![assign("x", "1")],
        };

        let mut visitor = FlowchartVisitor::new();
        let id = visitor.visit(&node).unwrap();
        assert!(id.is_empty());
        assert_eq!(visitor.into_graph().nodes.len(), 1);
    }
}
