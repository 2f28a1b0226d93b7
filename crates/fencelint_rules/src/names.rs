//! markdownlint rule identifiers and aliases.

/// Every markdownlint rule: canonical id first, then its aliases.
pub const MARKDOWNLINT_RULES: &[&[&str]] = &[
    &["MD001", "heading-increment"],
    &["MD003", "heading-style"],
    &["MD004", "ul-style"],
    &["MD005", "list-indent"],
    &["MD007", "ul-indent"],
    &["MD009", "no-trailing-spaces"],
    &["MD010", "no-hard-tabs"],
    &["MD011", "no-reversed-links"],
    &["MD012", "no-multiple-blanks"],
    &["MD013", "line-length"],
    &["MD014", "commands-show-output"],
    &["MD018", "no-missing-space-atx"],
    &["MD019", "no-multiple-space-atx"],
    &["MD020", "no-missing-space-closed-atx"],
    &["MD021", "no-multiple-space-closed-atx"],
    &["MD022", "blanks-around-headings"],
    &["MD023", "heading-start-left"],
    &["MD024", "no-duplicate-heading"],
    &["MD025", "single-title", "single-h1"],
    &["MD026", "no-trailing-punctuation"],
    &["MD027", "no-multiple-space-blockquote"],
    &["MD028", "no-blanks-blockquote"],
    &["MD029", "ol-prefix"],
    &["MD030", "list-marker-space"],
    &["MD031", "blanks-around-fences"],
    &["MD032", "blanks-around-lists"],
    &["MD033", "no-inline-html"],
    &["MD034", "no-bare-urls"],
    &["MD035", "hr-style"],
    &["MD036", "no-emphasis-as-heading"],
    &["MD037", "no-space-in-emphasis"],
    &["MD038", "no-space-in-code"],
    &["MD039", "no-space-in-links"],
    &["MD040", "fenced-code-language"],
    &["MD041", "first-line-heading", "first-line-h1"],
    &["MD042", "no-empty-links"],
    &["MD043", "required-headings"],
    &["MD044", "proper-names"],
    &["MD045", "no-alt-text"],
    &["MD046", "code-block-style"],
    &["MD047", "single-trailing-newline"],
    &["MD048", "code-fence-style"],
    &["MD049", "emphasis-style"],
    &["MD050", "strong-style"],
    &["MD051", "link-fragments"],
    &["MD052", "reference-links-images"],
    &["MD053", "link-image-reference-definitions"],
    &["MD054", "link-image-style"],
    &["MD055", "table-pipe-style"],
    &["MD056", "table-column-count"],
    &["MD058", "blanks-around-tables"],
    &["MD059", "descriptive-link-text"],
];

/// Returns the id and aliases of the rule named `key` (id or alias, any case).
pub fn rule_names(key: &str) -> Option<&'static [&'static str]> {
    MARKDOWNLINT_RULES
        .iter()
        .copied()
        .find(|names| names.iter().any(|name| name.eq_ignore_ascii_case(key)))
}

/// Returns the canonical id for `key`, e.g. `ul-style` → `MD004`.
pub fn canonical_id(key: &str) -> Option<&'static str> {
    rule_names(key).map(|names| names[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("MD004", Some("MD004"))]
    #[case("md004", Some("MD004"))]
    #[case("UL-Style", Some("MD004"))]
    #[case("single-h1", Some("MD025"))]
    #[case("first-line-h1", Some("MD041"))]
    #[case("default", None)]
    #[case("MD999", None)]
    fn test_canonical_id(#[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(canonical_id(key), expected);
    }

    #[test]
    fn test_ids_are_unique_and_first() {
        let ids: HashSet<_> = MARKDOWNLINT_RULES.iter().map(|names| names[0]).collect();
        assert_eq!(ids.len(), MARKDOWNLINT_RULES.len());
        assert!(ids.iter().all(|id| id.starts_with("MD")));
    }
}
