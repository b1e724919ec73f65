//! Error types for keyword query compilation

use thiserror::Error;

/// Errors raised while compiling a keyword query expression.
///
/// Every failure is reported at the point of detection; a malformed query is
/// rejected as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Query contains only logical operators")]
    OnlyLogicalOperators,

    #[error("Expected relational operator after element name \"{element}\"")]
    MissingRelationalOperator { element: String },

    #[error("Unknown relational operator \"{operator}\"")]
    UnknownRelationalOperator { operator: String },

    #[error("Expected literal value for \"{element} {operator}\" comparison")]
    MissingLiteral { element: String, operator: String },

    #[error("No closing quotation for string starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("Parentheses nested deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

/// Errors related to query expressions or the query envelope.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The keyword expression could not be compiled
    #[error(transparent)]
    Parse(#[from] ExpressionParseError),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for expression parsing
pub type ParseResult<T> = Result<T, ExpressionParseError>;
