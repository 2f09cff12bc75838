// Error taxonomy for flowsketch visualization runs.

use thiserror::Error;

/// Failures while turning source text into a flowchart. All of these are
/// fatal for the whole run: a flowchart with missing control-flow edges
/// would be silently misleading, so no partial graph is salvaged.
#[derive(Debug, Error)]
pub enum VisualizeError {
    /// The visitor met a syntax-node kind outside its supported set.
    #[error("unsupported construct `{kind}`: {text}")]
    UnsupportedConstruct { kind: String, text: String },

    /// An assignment statement with other than exactly one target.
    #[error("assignment must have exactly one target: {text}")]
    MalformedAssignment { text: String },

    /// The parsing collaborator could not produce a tree.
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, VisualizeError>;
