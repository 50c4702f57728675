//! Errors raised while building a regex matcher.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The grammar was the empty string.
    #[error("empty regex grammar")]
    EmptyGrammar,

    /// The engine refused the grammar.
    #[error("regex engine rejected {grammar:?}: {message}")]
    Rejected { grammar: String, message: String },
}
