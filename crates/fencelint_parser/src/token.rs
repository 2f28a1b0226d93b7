//! Token stream types.

use serde::Serialize;

/// Kind of a token in the flattened document stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Fenced code block (backticks or tildes).
    Fence,
    /// Indented code block.
    CodeBlock,
    /// ATX or setext heading.
    Heading,
    Paragraph,
    BlockQuote,
    List,
    ListItem,
    /// Raw HTML block.
    Html,
    Table,
    ThematicBreak,
}

/// A 0-based, half-open line range relative to the tokenized text.
///
/// `start` is the line the construct opens on, `end` is one past the line
/// it closes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 1-based line of the opening line.
    pub fn first_line(&self) -> usize {
        self.start + 1
    }
}

/// A single token of the flattened document stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,

    /// Fence info string (language tag followed by meta), untrimmed.
    pub info: String,

    /// Fence/code inner text.
    pub content: String,

    /// Source line range, when the tokenizer knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<LineRange>,
}

impl Token {
    /// Creates a token with empty payload.
    pub fn new(kind: TokenKind, map: Option<LineRange>) -> Self {
        Self {
            kind,
            info: String::new(),
            content: String::new(),
            map,
        }
    }

    /// Sets the info string.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    /// Sets the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns true for fenced code blocks.
    pub fn is_fence(&self) -> bool {
        self.kind == TokenKind::Fence
    }
}
