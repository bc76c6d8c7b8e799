use thiserror::Error;

/// Errors produced by the analysis pipeline.
///
/// Every variant is a structural violation of a data-model invariant; the
/// pipeline fails immediately rather than degrading to placeholder values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A zero-length stream or empty frequency model reached a stage that
    /// requires at least one symbol.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Code construction was attempted over zero distinct symbols.
    #[error("empty alphabet: {0}")]
    EmptyAlphabet(String),

    /// Encoding encountered a symbol absent from the trained code table.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Decoding could not resolve a complete codeword from the remaining bits.
    #[error("malformed bit stream: {0}")]
    MalformedStream(String),

    /// Two streams were compared but one lacks a matching strategy result.
    #[error("missing strategy result: {0}")]
    MissingStrategy(String),

    /// A configuration value is outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
