// Source parser built on tree-sitter-python.
//
// Maps the concrete tree onto the closed domain syntax enum. Only the
// minimal statement subset gets a structured variant; everything else is
// carried through as `Stmt::Other` so the visitor can report it with the
// node kind and source text attached.

use tree_sitter::{Node, Parser};

use crate::domain::error::{Result, VisualizeError};
use crate::domain::syntax::{ExprSrc, Stmt};
use crate::ports::SourceParser;

pub struct PythonParser;

impl SourceParser for PythonParser {
    fn parse(&self, source: &str) -> Result<Stmt> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| VisualizeError::Parse(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| VisualizeError::Parse("parser produced no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            let offset = first_error_offset(&root).unwrap_or(0);
            return Err(VisualizeError::Parse(format!(
                "syntax error near byte {} in source",
                offset
            )));
        }

        Ok(Stmt::Module {
            body: convert_block(&root, source),
        })
    }
}

fn text_of(node: &Node, source: &str) -> String {
    source[node.byte_range()].trim().to_string()
}

fn expr_of(node: &Node, source: &str) -> ExprSrc {
    ExprSrc::new(text_of(node, source))
}

fn first_error_offset(node: &Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_byte());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(offset) = first_error_offset(&child) {
            return Some(offset);
        }
    }
    None
}

/// Convert the named statements of a module or block, skipping comments.
fn convert_block(node: &Node, source: &str) -> Vec<Stmt> {
    let mut stmts = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        stmts.push(convert_stmt(&child, source));
    }
    stmts
}

fn convert_stmt(node: &Node, source: &str) -> Stmt {
    match node.kind() {
        "function_definition" => convert_function(node, source),
        "if_statement" => convert_if(node, source),
        "return_statement" => {
            let value = node.named_child(0).map(|c| expr_of(&c, source));
            Stmt::Return { value }
        }
        "expression_statement" => match node.named_child(0) {
            Some(inner) if inner.kind() == "assignment" => convert_assign(&inner, node, source),
            // `x += 1` lives inside an expression_statement but is not a
            // plain assignment; report it instead of mislabeling it.
            Some(inner) if inner.kind() == "augmented_assignment" => unsupported(node, source),
            // Bare expressions, name references and `...` placeholders
            // are all displayed as unparsed source text.
            _ => Stmt::Expr {
                value: expr_of(node, source),
            },
        },
        other => Stmt::Other {
            kind: other.to_string(),
            text: text_of(node, source),
        },
    }
}

fn convert_function(node: &Node, source: &str) -> Stmt {
    let name = node
        .child_by_field_name("name")
        .map(|n| text_of(&n, source))
        .unwrap_or_default();

    let mut params = Vec::new();
    if let Some(param_list) = node.child_by_field_name("parameters") {
        let mut cursor = param_list.walk();
        for param in param_list.named_children(&mut cursor) {
            match param.kind() {
                // Source order already gives positional-only, regular,
                // keyword-only; the `/` and `*` separators carry no name.
                "identifier" => params.push(text_of(&param, source)),
                "positional_separator" | "keyword_separator" | "comment" => {}
                "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                    match param_name(&param, source) {
                        Some(name) => params.push(name),
                        None => return unsupported(&param, source),
                    }
                }
                // *args / **kwargs and anything else in parameter position
                _ => return unsupported(&param, source),
            }
        }
    }

    let body = node
        .child_by_field_name("body")
        .map(|b| convert_block(&b, source))
        .unwrap_or_default();

    Stmt::FunctionDef { name, params, body }
}

/// Name of a typed or defaulted parameter.
fn param_name(param: &Node, source: &str) -> Option<String> {
    if let Some(name) = param.child_by_field_name("name") {
        return Some(text_of(&name, source));
    }
    let mut cursor = param.walk();
    let name = param
        .named_children(&mut cursor)
        .find(|c| c.kind() == "identifier")
        .map(|c| text_of(&c, source));
    name
}

fn convert_if(node: &Node, source: &str) -> Stmt {
    let test = node
        .child_by_field_name("condition")
        .map(|c| expr_of(&c, source))
        .unwrap_or_else(|| ExprSrc::new(""));

    let body = node
        .child_by_field_name("consequence")
        .map(|b| convert_block(&b, source))
        .unwrap_or_default();

    let mut cursor = node.walk();
    let alternatives: Vec<Node> = node
        .children_by_field_name("alternative", &mut cursor)
        .collect();
    let orelse = convert_alternatives(&alternatives, source);

    Stmt::If { test, body, orelse }
}

/// An elif chain becomes a nested If in the else branch; a trailing else
/// clause contributes its block directly.
fn convert_alternatives(alternatives: &[Node], source: &str) -> Vec<Stmt> {
    let Some((first, rest)) = alternatives.split_first() else {
        return Vec::new();
    };
    match first.kind() {
        "elif_clause" => {
            let test = first
                .child_by_field_name("condition")
                .map(|c| expr_of(&c, source))
                .unwrap_or_else(|| ExprSrc::new(""));
            let body = first
                .child_by_field_name("consequence")
                .map(|b| convert_block(&b, source))
                .unwrap_or_default();
            vec![Stmt::If {
                test,
                body,
                orelse: convert_alternatives(rest, source),
            }]
        }
        "else_clause" => first
            .child_by_field_name("body")
            .map(|b| convert_block(&b, source))
            .unwrap_or_default(),
        _ => vec![unsupported(first, source)],
    }
}

/// Chained targets (`x = y = 1` nests assignments on the right in the
/// grammar) are flattened so the visitor can reject them as malformed.
fn convert_assign(assign: &Node, stmt: &Node, source: &str) -> Stmt {
    let mut targets = Vec::new();
    let mut current = *assign;
    loop {
        if let Some(left) = current.child_by_field_name("left") {
            targets.push(expr_of(&left, source));
        }
        match current.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => current = right,
            Some(right) => {
                return Stmt::Assign {
                    targets,
                    value: expr_of(&right, source),
                }
            }
            // Annotation without a value (`x: int`) assigns nothing.
            None => return unsupported(stmt, source),
        }
    }
}

fn unsupported(node: &Node, source: &str) -> Stmt {
    Stmt::Other {
        kind: node.kind().to_string(),
        text: text_of(node, source),
    }
}
