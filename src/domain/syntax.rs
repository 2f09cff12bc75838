// Syntax tree data structures for flowsketch.
// A closed set of statement variants: the visitor matches exhaustively,
// so a missing case is a compile error instead of a runtime fallback.

/// Reconstructed source text of an expression. Used only for display
/// labels, never for semantic decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprSrc(String);

impl ExprSrc {
    pub fn new(text: impl Into<String>) -> Self {
        ExprSrc(text.into())
    }

    /// Readable source text of the expression.
    pub fn unparse(&self) -> &str {
        &self.0
    }
}

/// Supported statement kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Ordered top-level statements of a source fragment.
    Module { body: Vec<Stmt> },
    /// Function definition. Parameter names are concatenated in
    /// positional-only, regular, keyword-only order.
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
    /// Conditional with an else branch that may be empty. An elif chain
    /// arrives as a nested `If` inside `orelse`.
    If {
        test: ExprSrc,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
    },
    /// Assignment. Chained targets (`x = y = 1`) are kept so the visitor
    /// can reject them as malformed.
    Assign { targets: Vec<ExprSrc>, value: ExprSrc },
    /// Return with an optional value.
    Return { value: Option<ExprSrc> },
    /// Bare expression statement, including name references and `...`.
    Expr { value: ExprSrc },
    /// Any construct outside the supported subset (loops, classes,
    /// imports, ...). The visitor reports it with kind and source text.
    Other { kind: String, text: String },
}
