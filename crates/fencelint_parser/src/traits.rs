//! Tokenizer trait definition.

use crate::{ParseError, Token};

/// Trait for turning source text into a flat token stream.
///
/// Tokens are emitted in document order (pre-order over the block tree),
/// and fence tokens carry their line range relative to the text passed in.
///
/// # Example
///
/// ```rust
/// use fencelint_parser::{ParseError, Token, Tokenizer};
///
/// struct NullTokenizer;
///
/// impl Tokenizer for NullTokenizer {
///     fn name(&self) -> &str {
///         "null"
///     }
///
///     fn tokenize(&self, _source: &str) -> Result<Vec<Token>, ParseError> {
///         Ok(Vec::new())
///     }
/// }
///
/// assert!(NullTokenizer.tokenize("# hi").unwrap().is_empty());
/// ```
pub trait Tokenizer {
    /// Returns the name of this tokenizer.
    fn name(&self) -> &str;

    /// Tokenizes the source text.
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, ParseError>;
}
