//! Line and file-level parsers for ownership files.
//!
//! This module extracts the three tables the resolution pipeline works
//! from: the ordered subtree index, the subtree → raw-owner map, and the
//! group-definition table. All three are separate passes over the same
//! normalized lines; order in the file encodes rule precedence.

use super::lexer::{
    is_comment_line, parse_rule_line, split_group_definition, split_tokens,
    strip_trailing_separators,
};
use crate::model::{GroupDefinition, OwnershipRule};
use log::{debug, trace};
use std::collections::HashMap;

/// Extracts the ordered subtree index from normalized lines.
///
/// Comment lines are dropped; for every other line the first space/tab
/// delimited token becomes a subtree, trailing separators stripped.
/// Duplicates are allowed and order is file order.
pub fn subtree_index(lines: &[String]) -> Vec<String> {
    let index: Vec<String> = lines
        .iter()
        .filter(|line| !is_comment_line(line))
        .filter_map(|line| {
            line.split([' ', '\t'])
                .find(|token| !token.is_empty())
                .map(|token| strip_trailing_separators(token).to_string())
        })
        .filter(|subtree| !subtree.is_empty())
        .collect();
    debug!("extracted {} subtrees", index.len());
    index
}

/// Parses every non-comment line into an [`OwnershipRule`].
///
/// Lines without a leading path-like key (for example plain group
/// definitions) are skipped. Declaration order is preserved.
pub fn ownership_rules(lines: &[String]) -> Vec<OwnershipRule> {
    let mut rules = Vec::new();
    for line in lines {
        if is_comment_line(line) {
            continue;
        }
        match parse_rule_line(line) {
            Ok((remainder, subtree)) => {
                let owners: Vec<String> = split_tokens(remainder)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                trace!("rule: {} ({} owners)", subtree, owners.len());
                rules.push(OwnershipRule::new(subtree, owners));
            }
            Err(_) => {
                trace!("skipping non-rule line: {}", line);
            }
        }
    }
    rules
}

/// Collapses rules into a subtree → raw-owner-token map.
///
/// Map semantics: a subtree declared on multiple lines keeps the last
/// line's owners, consistent with last-match-wins precedence.
pub fn owner_map(rules: Vec<OwnershipRule>) -> HashMap<String, Vec<String>> {
    let mut map = HashMap::new();
    for rule in rules {
        map.insert(rule.subtree, rule.raw_owners);
    }
    map
}

/// Extracts group definitions from normalized lines, comments included.
///
/// A line defines a group when it contains both `=` and `@`; the last
/// definition of an alias wins.
pub fn group_definitions(lines: &[String]) -> Vec<GroupDefinition> {
    lines
        .iter()
        .filter_map(|line| split_group_definition(line))
        .map(|(alias, members)| GroupDefinition::new(alias, members))
        .collect()
}

/// Collapses group definitions into an alias → raw-value table.
pub fn group_table(definitions: Vec<GroupDefinition>) -> HashMap<String, String> {
    let mut table = HashMap::new();
    for definition in definitions {
        table.insert(definition.alias, definition.members);
    }
    debug!("group table has {} aliases", table.len());
    table
}
