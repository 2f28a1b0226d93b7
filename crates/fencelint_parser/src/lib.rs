//! # fencelint_parser
//!
//! Tokenizer layer for fencelint.
//!
//! This crate provides:
//! - A `Tokenizer` trait for plugging in alternative markdown tokenizers
//! - A built-in `MarkdownTokenizer` using `markdown-rs`
//! - The flat `Token` stream consumed by the fence extractor
//!
//! ## Example
//!
//! ```rust
//! use fencelint_parser::{MarkdownTokenizer, TokenKind, Tokenizer};
//!
//! let tokenizer = MarkdownTokenizer::new();
//! let tokens = tokenizer.tokenize("# Title\n\n```md\n## Inner\n```\n").unwrap();
//!
//! let fence = tokens.iter().find(|t| t.kind == TokenKind::Fence).unwrap();
//! assert_eq!(fence.info, "md");
//! assert_eq!(fence.content, "## Inner\n");
//! ```

mod error;
mod markdown;
mod token;
mod traits;

pub use error::ParseError;
pub use markdown::MarkdownTokenizer;
pub use token::{LineRange, Token, TokenKind};
pub use traits::Tokenizer;
