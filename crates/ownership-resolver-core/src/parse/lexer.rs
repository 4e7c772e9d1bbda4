//! Lexer and token parsers for ownership files.
//!
//! This module contains nom-based parsers and token helpers shared by the
//! rule parser and the group resolver.

use nom::{IResult, Parser, bytes::complete::take_while1, character::complete::space0};

/// Characters that can appear in a subtree key (path-like characters).
fn is_subtree_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '\\' | '/')
}

/// Characters that separate owner tokens in a value list.
pub fn is_owner_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | ';' | ',')
}

/// Splits a value string into owner tokens, discarding empties.
pub fn split_tokens(value: &str) -> Vec<&str> {
    value
        .split(is_owner_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Returns true if the line is a comment (leading `#`).
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with('#')
}

/// Returns true if the line carries a group definition.
///
/// Group definitions are detected by the presence of both `=` and `@`
/// anywhere on the line, commented-out or not.
pub fn is_group_definition_line(line: &str) -> bool {
    line.contains('=') && line.contains('@')
}

/// Strips trailing path separators from a subtree key.
pub fn strip_trailing_separators(key: &str) -> &str {
    key.trim_end_matches(['/', '\\'])
}

/// Parses the subtree key off the front of a rule line.
///
/// The key is the longest leading run of path characters after optional
/// whitespace, trailing separators stripped. The remaining input is the
/// raw owner list, still unsplit.
pub fn parse_rule_line(input: &str) -> IResult<&str, &str> {
    (space0, take_while1(is_subtree_char))
        .map(|(_, key)| strip_trailing_separators(key))
        .parse(input)
}

/// Splits a group-definition line on its first `=`.
///
/// Both sides are trimmed of `#`, space, and tab. Returns `None` when the
/// line does not look like a definition or either side trims to nothing.
pub fn split_group_definition(line: &str) -> Option<(&str, &str)> {
    if !is_group_definition_line(line) {
        return None;
    }
    let (left, right) = line.split_once('=')?;
    fn trim(s: &str) -> &str {
        s.trim_matches(|c: char| matches!(c, '#' | ' ' | '\t'))
    }
    let alias = trim(left);
    let members = trim(right);
    if alias.is_empty() || members.is_empty() {
        return None;
    }
    Some((alias, members))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tokens_on_all_separators() {
        assert_eq!(
            split_tokens("a@x;b@x\tc@x,d@x e@x"),
            vec!["a@x", "b@x", "c@x", "d@x", "e@x"]
        );
    }

    #[test]
    fn split_tokens_discards_empties() {
        assert_eq!(split_tokens("  a@x ;; b@x  "), vec!["a@x", "b@x"]);
        assert!(split_tokens("").is_empty());
        assert!(split_tokens(" ;\t, ").is_empty());
    }

    #[test]
    fn comment_detection() {
        assert!(is_comment_line("# a comment"));
        assert!(!is_comment_line("src\\ a@x"));
        assert!(!is_comment_line("  # indented comments are content here"));
    }

    #[test]
    fn group_definition_detection() {
        assert!(is_group_definition_line("@fo = a@x b@x"));
        assert!(is_group_definition_line("# @fo = a@x"));
        assert!(!is_group_definition_line("@fo a@x"));
        assert!(!is_group_definition_line("key = value"));
    }

    #[test]
    fn parse_rule_line_basic() {
        let (rest, key) = parse_rule_line("frontofficedata\\ a@x @fo").unwrap();
        assert_eq!(key, "frontofficedata");
        assert_eq!(rest, " a@x @fo");
    }

    #[test]
    fn parse_rule_line_with_leading_whitespace() {
        let (_, key) = parse_rule_line("  src\\parse a@x").unwrap();
        assert_eq!(key, "src\\parse");
    }

    #[test]
    fn parse_rule_line_empty_fails() {
        assert!(parse_rule_line("").is_err());
        assert!(parse_rule_line("   ").is_err());
    }

    #[test]
    fn strip_trailing_separators_both_kinds() {
        assert_eq!(strip_trailing_separators("src\\"), "src");
        assert_eq!(strip_trailing_separators("src/"), "src");
        assert_eq!(strip_trailing_separators("src"), "src");
        assert_eq!(strip_trailing_separators("src\\\\"), "src");
    }

    #[test]
    fn split_group_definition_trims_comment_markers() {
        let (alias, members) = split_group_definition("# @fo = a@x b@x").unwrap();
        assert_eq!(alias, "@fo");
        assert_eq!(members, "a@x b@x");
    }

    #[test]
    fn split_group_definition_first_equals_wins() {
        let (alias, members) = split_group_definition("@a = b@x = c@x").unwrap();
        assert_eq!(alias, "@a");
        assert_eq!(members, "b@x = c@x");
    }

    #[test]
    fn split_group_definition_rejects_non_definitions() {
        assert!(split_group_definition("src\\ a@x").is_none());
        assert!(split_group_definition("key = value").is_none());
        assert!(split_group_definition("# = @").is_none());
    }
}
