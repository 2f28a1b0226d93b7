//! Markdown tokenizer using markdown-rs (wooorm/markdown-rs).
//!
//! The mdast tree produced by the `markdown` crate is flattened into a
//! document-ordered token stream. Container nodes (block quotes, lists) are
//! emitted before their children, so fences nested inside containers still
//! show up in source order.

use markdown::mdast::{Code, Node};
use markdown::{ParseOptions, to_mdast};

use crate::{LineRange, ParseError, Token, TokenKind, Tokenizer};

/// Markdown tokenizer implementation.
///
/// Uses `markdown-rs` with GFM options, which covers:
/// - CommonMark
/// - GFM tables, strikethrough, autolinks, footnotes
pub struct MarkdownTokenizer;

impl MarkdownTokenizer {
    /// Creates a new Markdown tokenizer with default options.
    pub fn new() -> Self {
        Self
    }

    /// Gets default parse options (GFM).
    fn default_options() -> ParseOptions {
        ParseOptions::gfm()
    }

    fn collect(&self, node: &Node, source: &str, tokens: &mut Vec<Token>) {
        let map = Self::line_range(node);

        match node {
            Node::Code(code) => {
                let token = if Self::is_fenced(code, source) {
                    Token::new(TokenKind::Fence, map)
                        .with_info(Self::info_string(code))
                        .with_content(Self::fence_content(&code.value))
                } else {
                    Token::new(TokenKind::CodeBlock, map)
                        .with_content(Self::fence_content(&code.value))
                };
                tokens.push(token);
                return;
            }
            Node::Heading(_) => tokens.push(Token::new(TokenKind::Heading, map)),
            Node::Html(_) => tokens.push(Token::new(TokenKind::Html, map)),
            Node::Paragraph(_) => tokens.push(Token::new(TokenKind::Paragraph, map)),
            Node::Blockquote(_) => tokens.push(Token::new(TokenKind::BlockQuote, map)),
            Node::List(_) => tokens.push(Token::new(TokenKind::List, map)),
            Node::ListItem(_) => tokens.push(Token::new(TokenKind::ListItem, map)),
            Node::Table(_) => tokens.push(Token::new(TokenKind::Table, map)),
            Node::ThematicBreak(_) => tokens.push(Token::new(TokenKind::ThematicBreak, map)),
            _ => {}
        }

        if let Some(children) = node.children() {
            for child in children {
                self.collect(child, source, tokens);
            }
        }
    }

    /// Converts an mdast position into a 0-based half-open line range.
    fn line_range(node: &Node) -> Option<LineRange> {
        node.position()
            .map(|pos| LineRange::new(pos.start.line.saturating_sub(1), pos.end.line))
    }

    /// Indented code never has a language, and fenced code starts with a
    /// backtick or tilde run indented by at most three spaces.
    fn is_fenced(code: &Code, source: &str) -> bool {
        if code.lang.is_some() {
            return true;
        }

        let Some(rest) = code
            .position
            .as_ref()
            .and_then(|pos| source.get(pos.start.offset..))
        else {
            return false;
        };

        let trimmed = rest.trim_start_matches(' ');
        rest.len() - trimmed.len() < 4 && (trimmed.starts_with("```") || trimmed.starts_with("~~~"))
    }

    /// Rebuilds the full info string from mdast's split `lang` and `meta`.
    fn info_string(code: &Code) -> String {
        match (&code.lang, &code.meta) {
            (Some(lang), Some(meta)) => format!("{} {}", lang, meta),
            (Some(lang), None) => lang.clone(),
            (None, Some(meta)) => meta.clone(),
            (None, None) => String::new(),
        }
    }

    /// mdast drops the final line ending of code values; every content line
    /// of a fence ends with a newline.
    fn fence_content(value: &str) -> String {
        if value.is_empty() {
            String::new()
        } else {
            format!("{}\n", value)
        }
    }
}

impl Default for MarkdownTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for MarkdownTokenizer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, ParseError> {
        let options = Self::default_options();
        let mdast =
            to_mdast(source, &options).map_err(|e| ParseError::invalid_source(e.to_string()))?;

        let mut tokens = Vec::new();
        self.collect(&mdast, source, &mut tokens);
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn fences(source: &str) -> Vec<Token> {
        MarkdownTokenizer::new()
            .tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| t.kind == TokenKind::Fence)
            .collect()
    }

    #[test]
    fn test_tokenize_empty_document() {
        let tokens = MarkdownTokenizer::new().tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_fence_map_is_zero_based_opening_line() {
        let source = "# Title\n\nText\n\n```markdown\n## Sub\n```\n";
        let fence = &fences(source)[0];

        assert_eq!(fence.info, "markdown");
        assert_eq!(fence.content, "## Sub\n");
        assert_eq!(fence.map, Some(LineRange::new(4, 7)));
    }

    #[test]
    fn test_fence_info_keeps_meta() {
        let fence = &fences("```md title=\"x\"\nbody\n```\n")[0];
        assert_eq!(fence.info, "md title=\"x\"");
    }

    #[rstest]
    #[case::backticks("```md\n# A\n```\n")]
    #[case::tildes("~~~md\n# A\n~~~\n")]
    #[case::long_backticks("````md\n# A\n````\n")]
    fn test_fence_delimiters(#[case] source: &str) {
        let tokens = fences(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].content, "# A\n");
    }

    #[test]
    fn test_empty_fence_has_empty_content() {
        let fence = &fences("```md\n```\n")[0];
        assert_eq!(fence.content, "");
    }

    #[test]
    fn test_untagged_fence_is_still_a_fence() {
        let fence = &fences("```\nplain\n```\n")[0];
        assert_eq!(fence.info, "");
        assert_eq!(fence.content, "plain\n");
    }

    #[test]
    fn test_indented_code_is_not_a_fence() {
        let tokens = MarkdownTokenizer::new()
            .tokenize("Para\n\n    # not a heading\n    more code\n")
            .unwrap();

        assert!(tokens.iter().all(|t| t.kind != TokenKind::Fence));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::CodeBlock));
    }

    #[test]
    fn test_fence_inside_blockquote() {
        let source = "Intro\n\n> ```md\n> # Quoted\n> ```\n";
        let fence = &fences(source)[0];

        assert_eq!(fence.content, "# Quoted\n");
        assert_eq!(fence.map.map(|m| m.start), Some(2));
    }

    #[test]
    fn test_fence_inside_list_item() {
        let source = "- item\n\n  ```md\n  # Listed\n  ```\n";
        let fence = &fences(source)[0];

        assert_eq!(fence.content, "# Listed\n");
        assert_eq!(fence.map.map(|m| m.start), Some(2));
    }

    #[test]
    fn test_fences_in_document_order() {
        let source = "```md\none\n```\n\n> ```python\n> two\n> ```\n\n```md\nthree\n```\n";
        let infos: Vec<_> = fences(source).into_iter().map(|t| t.info).collect();
        assert_eq!(infos, vec!["md", "python", "md"]);
    }

    #[test]
    fn test_block_tokens_in_document_order() {
        let tokens = MarkdownTokenizer::new()
            .tokenize("# Title\n\nText\n\n> ```md\n> x\n> ```\n")
            .unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![
                TokenKind::Heading,
                TokenKind::Paragraph,
                TokenKind::BlockQuote,
                TokenKind::Fence,
            ]
        );
        assert_eq!(tokens[0].map.map(|m| m.first_line()), Some(1));
    }

    #[test]
    fn test_name() {
        assert_eq!(MarkdownTokenizer::new().name(), "markdown");
    }
}
