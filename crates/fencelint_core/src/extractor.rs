//! Recursive extraction of markdown-tagged fences.
//!
//! Every fence whose info string is `markdown` or `md` becomes an
//! [`ExtractedBlock`], and its content is scanned again for further fences.
//! Line numbers are resolved against the top-level document while
//! descending, so a block's `absolute_line` is final once emitted.

use std::fs;
use std::path::{Path, PathBuf};

use fencelint_parser::{MarkdownTokenizer, Token, Tokenizer};
use serde::Serialize;
use tracing::{debug, warn};

use crate::LinterError;

/// Info strings (trimmed, case-insensitive) that mark nested markdown.
pub const MARKDOWN_LANGUAGES: &[&str] = &["markdown", "md"];

/// A markdown fence found at any nesting depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedBlock {
    /// Raw text inside the fence.
    pub content: String,
    /// 1-based line of the opening fence in the top-level document.
    pub absolute_line: usize,
    /// 0 for fences in the top-level document, +1 per level.
    pub depth: usize,
    /// Human-readable chain of enclosing fences, e.g.
    /// `line 10 > block at line 13`.
    pub ancestry_path: String,
    /// Lowercased info string, always one of [`MARKDOWN_LANGUAGES`].
    pub language_tag: String,
    /// Trimmed info string as written, e.g. `Markdown`.
    pub info: String,
    /// File the block was extracted from.
    pub file_path: PathBuf,
}

/// Extracts markdown fences recursively.
pub struct FenceExtractor {
    tokenizer: Box<dyn Tokenizer>,
    max_depth: Option<usize>,
}

impl FenceExtractor {
    /// Creates an extractor backed by [`MarkdownTokenizer`] with no depth bound.
    pub fn new() -> Self {
        Self::with_tokenizer(Box::new(MarkdownTokenizer::new()))
    }

    /// Creates an extractor with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            max_depth: None,
        }
    }

    /// Stops descending below `depth`.
    ///
    /// Blocks at `depth` are still emitted, their content is not scanned.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Reads `path` and extracts every markdown fence in it.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<ExtractedBlock>, LinterError> {
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::file(format!("Failed to read {}: {}", path.display(), e))
        })?;
        self.extract(&content, path, 0, 0, "")
    }

    /// Extracts markdown fences from `content` in pre-order.
    ///
    /// `base_line` is the absolute line that line 0 of `content` sits below:
    /// a fence opening on 1-based line `n` of `content` gets
    /// `absolute_line = base_line + n`.
    pub fn extract(
        &self,
        content: &str,
        file_path: &Path,
        base_line: usize,
        depth: usize,
        parent_path: &str,
    ) -> Result<Vec<ExtractedBlock>, LinterError> {
        let mut blocks = Vec::new();
        self.extract_into(content, file_path, base_line, depth, parent_path, &mut blocks)?;
        Ok(blocks)
    }

    fn extract_into(
        &self,
        content: &str,
        file_path: &Path,
        base_line: usize,
        depth: usize,
        parent_path: &str,
        blocks: &mut Vec<ExtractedBlock>,
    ) -> Result<(), LinterError> {
        let tokens = self.tokenizer.tokenize(content)?;

        for token in tokens.iter().filter(|t| t.is_fence()) {
            let Some(language_tag) = Self::markdown_language(token) else {
                continue;
            };

            let block_line = match token.map {
                Some(map) => base_line + map.first_line(),
                None => {
                    debug!(
                        "Fence in {} has no line range, using line {}",
                        file_path.display(),
                        base_line
                    );
                    base_line
                }
            };

            let ancestry_path = if parent_path.is_empty() {
                format!("line {}", block_line)
            } else {
                format!("{} > block at line {}", parent_path, block_line)
            };

            debug!(
                "Found {} block at line {} (depth {})",
                language_tag, block_line, depth
            );

            blocks.push(ExtractedBlock {
                content: token.content.clone(),
                absolute_line: block_line,
                depth,
                ancestry_path: ancestry_path.clone(),
                language_tag,
                info: token.info.trim().to_string(),
                file_path: file_path.to_path_buf(),
            });

            if token.content.trim().is_empty() {
                continue;
            }

            if self.max_depth.is_some_and(|max| depth >= max) {
                warn!(
                    "Not scanning block at line {} in {}: depth limit {} reached",
                    block_line,
                    file_path.display(),
                    depth
                );
                continue;
            }

            self.extract_into(
                &token.content,
                file_path,
                block_line,
                depth + 1,
                &ancestry_path,
                blocks,
            )?;
        }

        Ok(())
    }

    fn markdown_language(token: &Token) -> Option<String> {
        let tag = token.info.trim().to_lowercase();
        MARKDOWN_LANGUAGES.contains(&tag.as_str()).then_some(tag)
    }
}

impl Default for FenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fencelint_parser::{ParseError, TokenKind};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    const FILE: &str = "doc.md";

    fn extract(content: &str) -> Vec<ExtractedBlock> {
        FenceExtractor::new()
            .extract(content, Path::new(FILE), 0, 0, "")
            .unwrap()
    }

    fn summary(blocks: &[ExtractedBlock]) -> Vec<(usize, usize, &str)> {
        blocks
            .iter()
            .map(|b| (b.absolute_line, b.depth, b.ancestry_path.as_str()))
            .collect()
    }

    /// Fence on line 10 whose content holds another fence on its line 3.
    const NESTED_AT_TEN: &str = "\
# Title

a

b

c

d
````markdown
# Inner

```md
## Deep
```
````
";

    #[test]
    fn test_nested_offset_is_summed() {
        let blocks = extract(NESTED_AT_TEN);

        assert_eq!(
            summary(&blocks),
            vec![
                (10, 0, "line 10"),
                (13, 1, "line 10 > block at line 13"),
            ]
        );
        assert_eq!(blocks[0].language_tag, "markdown");
        assert_eq!(blocks[1].language_tag, "md");
        assert_eq!(blocks[1].content, "## Deep\n");
        assert_eq!(blocks[1].file_path, PathBuf::from(FILE));
    }

    #[test]
    fn test_base_line_and_parent_path_are_applied() {
        let blocks = FenceExtractor::new()
            .extract("```md\n# x\n```\n", Path::new(FILE), 20, 2, "line 4")
            .unwrap();

        assert_eq!(summary(&blocks), vec![(21, 2, "line 4 > block at line 21")]);
    }

    #[test]
    fn test_pre_order_descendants_before_sibling() {
        let content = "\
````md
```md
# nested
```
````

```md
# sibling
```
";
        let blocks = extract(content);

        assert_eq!(
            summary(&blocks),
            vec![
                (1, 0, "line 1"),
                (2, 1, "line 1 > block at line 2"),
                (7, 0, "line 7"),
            ]
        );
    }

    #[rstest]
    #[case::markdown("```markdown\n# x\n```\n", "markdown", "markdown")]
    #[case::md("```md\n# x\n```\n", "md", "md")]
    #[case::uppercase("```Markdown\n# x\n```\n", "markdown", "Markdown")]
    #[case::tilde("~~~MD\n# x\n~~~\n", "md", "MD")]
    fn test_markdown_tags_are_matched(
        #[case] content: &str,
        #[case] tag: &str,
        #[case] info: &str,
    ) {
        let blocks = extract(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language_tag, tag);
        assert_eq!(blocks[0].info, info);
    }

    #[rstest]
    #[case::python("```python\nprint()\n```\n")]
    #[case::untagged("```\n# x\n```\n")]
    #[case::with_meta("```markdown title=\"x\"\n# x\n```\n")]
    #[case::indented("Para\n\n    ```md\n    # x\n    ```\n")]
    #[case::no_fences("# Just a heading\n\nText.\n")]
    fn test_other_content_yields_nothing(#[case] content: &str) {
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_offsets_sum_through_blockquote() {
        let content = "\
# Doc

`````md
Intro

> ````md
> Quoted intro
>
> ```md
> # Deep
> ```
> ````
`````
";
        let blocks = extract(content);

        assert_eq!(
            summary(&blocks),
            vec![
                (3, 0, "line 3"),
                (6, 1, "line 3 > block at line 6"),
                (9, 2, "line 3 > block at line 6 > block at line 9"),
            ]
        );
        assert_eq!(blocks[2].content, "# Deep\n");
    }

    #[test]
    fn test_offsets_sum_through_list_item() {
        let content = "\
`````md
- item

  ````md
  Para

  ```md
  # Deep
  ```
  ````
`````
";
        let blocks = extract(content);

        assert_eq!(
            summary(&blocks),
            vec![
                (1, 0, "line 1"),
                (4, 1, "line 1 > block at line 4"),
                (7, 2, "line 1 > block at line 4 > block at line 7"),
            ]
        );
    }

    #[test]
    fn test_no_recursion_into_non_markdown_fences() {
        let content = "````python\n```md\n# hidden\n```\n````\n";
        assert!(extract(content).is_empty());
    }

    #[test]
    fn test_empty_fence_is_emitted_without_recursion() {
        let blocks = extract("```md\n```\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_max_depth_emits_but_does_not_scan() {
        let content = "`````md\n````md\n```md\n# x\n```\n````\n`````\n";

        let unbounded = extract(content);
        assert_eq!(unbounded.iter().map(|b| b.depth).collect::<Vec<_>>(), vec![0, 1, 2]);

        let bounded = FenceExtractor::new()
            .with_max_depth(1)
            .extract(content, Path::new(FILE), 0, 0, "")
            .unwrap();
        assert_eq!(bounded.iter().map(|b| b.depth).collect::<Vec<_>>(), vec![0, 1]);
    }

    struct MaplessTokenizer;

    impl Tokenizer for MaplessTokenizer {
        fn name(&self) -> &str {
            "mapless"
        }

        fn tokenize(&self, _source: &str) -> Result<Vec<Token>, ParseError> {
            Ok(vec![
                Token::new(TokenKind::Paragraph, None),
                Token::new(TokenKind::Fence, None).with_info("md"),
            ])
        }
    }

    #[test]
    fn test_missing_map_falls_back_to_base_line() {
        let extractor = FenceExtractor::with_tokenizer(Box::new(MaplessTokenizer));
        let blocks = extractor
            .extract("ignored", Path::new(FILE), 7, 0, "")
            .unwrap();

        assert_eq!(summary(&blocks), vec![(7, 0, "line 7")]);
    }

    #[test]
    fn test_extract_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.md");
        fs::write(&path, NESTED_AT_TEN).unwrap();

        let blocks = FenceExtractor::new().extract_file(&path).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].file_path, path);
    }

    #[test]
    fn test_extract_file_missing() {
        let err = FenceExtractor::new()
            .extract_file(Path::new("/nonexistent/file.md"))
            .unwrap_err();
        assert!(matches!(err, LinterError::File(_)));
    }

    const SEGMENTS: &[&str] = &[
        "# Heading\n",
        "Some paragraph text.\n",
        "```md\n# a\n```\n",
        "```python\nx = 1\n```\n",
        "````markdown\n```md\n## b\n```\n````\n",
        "- item\n\n  ```md\n  text\n  ```\n",
        "> ```markdown\n> quoted\n> ```\n",
    ];

    fn document() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(SEGMENTS.to_vec()), 0..8)
            .prop_map(|parts| parts.join("\n"))
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(doc in document()) {
            prop_assert_eq!(extract(&doc), extract(&doc));
        }

        #[test]
        fn prop_extraction_is_pre_order(doc in document()) {
            let blocks = extract(&doc);
            for (i, block) in blocks.iter().enumerate() {
                if block.depth == 0 {
                    continue;
                }
                prop_assert!(i > 0);
                prop_assert!(block.depth <= blocks[i - 1].depth + 1);

                let parent = blocks[..i]
                    .iter()
                    .rev()
                    .find(|b| b.depth + 1 == block.depth);
                prop_assert!(parent.is_some());
                if let Some(parent) = parent {
                    prop_assert!(block.ancestry_path.starts_with(&parent.ancestry_path));
                    prop_assert!(block.absolute_line > parent.absolute_line);
                }
            }
        }
    }
}
