//! Data model for ownership files.
//!
//! This module defines the entities produced by the resolution pipeline:
//! rules, group definitions, the final resolved mapping, and the
//! per-path review obligation handed back to callers.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// A single ownership rule extracted from one content line.
///
/// The subtree is case-folded and separator-normalized with no trailing
/// separator. Raw owners may be emails or `@group` alias references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipRule {
    /// The path prefix this rule governs.
    pub subtree: String,
    /// Owner tokens in declaration order, unexpanded.
    pub raw_owners: Vec<String>,
}

impl OwnershipRule {
    /// Creates a new rule with the given subtree and raw owner tokens.
    pub fn new(subtree: impl Into<String>, raw_owners: Vec<String>) -> Self {
        Self {
            subtree: subtree.into(),
            raw_owners,
        }
    }
}

impl Display for OwnershipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subtree)?;
        for owner in &self.raw_owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}

/// A group alias definition (`alias = member member ...`).
///
/// Members are kept as the raw value string; tokenization happens during
/// resolution so that nested aliases expand in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDefinition {
    /// The alias key, e.g. `@fo`.
    pub alias: String,
    /// The raw member list (emails and/or other aliases).
    pub members: String,
}

impl GroupDefinition {
    /// Creates a new group definition.
    pub fn new(alias: impl Into<String>, members: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            members: members.into(),
        }
    }
}

impl Display for GroupDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.alias, self.members)
    }
}

/// The final subtree → owner-list mapping after alias flattening.
///
/// After a converged resolution no entry contains a group alias. When the
/// resolver hits its pass bound (cyclic or very deep definitions), alias
/// tokens can survive; [`ResolvedOwnership::dangling_aliases`] surfaces
/// them as a data-quality signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOwnership {
    owners: HashMap<String, Vec<String>>,
}

impl ResolvedOwnership {
    /// Creates a resolved mapping from a subtree → owner-list map.
    pub fn new(owners: HashMap<String, Vec<String>>) -> Self {
        Self { owners }
    }

    /// Returns the owner list for a subtree, if one exists.
    pub fn get(&self, subtree: &str) -> Option<&[String]> {
        self.owners.get(subtree).map(Vec::as_slice)
    }

    /// Iterates over all (subtree, owners) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.owners.iter()
    }

    /// Returns the number of subtree entries.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns true if no subtree has owners.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Returns all owner tokens that still look like group references.
    ///
    /// Non-empty output means an alias was undefined or the resolver did
    /// not converge within its pass bound. Sorted and deduplicated.
    pub fn dangling_aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .owners
            .values()
            .flatten()
            .filter(|token| token.starts_with('@'))
            .map(String::as_str)
            .collect();
        aliases.sort_unstable();
        aliases.dedup();
        aliases
    }
}

/// An advisory produced when a changed path has a governing rule and the
/// acting user is not among the resolved owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewObligation {
    /// The changed path that triggered the advisory.
    pub path: String,
    /// The most specific subtree governing the path.
    pub subtree: String,
    /// The full resolved owner list for that subtree.
    pub owners: Vec<String>,
}

impl ReviewObligation {
    /// Creates a new review obligation.
    pub fn new(
        path: impl Into<String>,
        subtree: impl Into<String>,
        owners: Vec<String>,
    ) -> Self {
        Self {
            path: path.into(),
            subtree: subtree.into(),
            owners,
        }
    }
}

impl Display for ReviewObligation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is owned via '{}'; request review from: {}",
            self.path,
            self.subtree,
            self.owners.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_display() {
        let rule = OwnershipRule::new(
            "frontofficedata",
            vec!["a@simcorp.com".into(), "@fo".into()],
        );
        assert_eq!(rule.to_string(), "frontofficedata a@simcorp.com @fo");
    }

    #[test]
    fn group_definition_display() {
        let def = GroupDefinition::new("@fo", "@focph @fokiev");
        assert_eq!(def.to_string(), "@fo = @focph @fokiev");
    }

    #[test]
    fn resolved_ownership_lookup() {
        let mut map = HashMap::new();
        map.insert("docs".to_string(), vec!["a@x".to_string()]);
        let resolved = ResolvedOwnership::new(map);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get("docs"), Some(&["a@x".to_string()][..]));
        assert_eq!(resolved.get("src"), None);
    }

    #[test]
    fn dangling_aliases_are_sorted_and_deduped() {
        let mut map = HashMap::new();
        map.insert(
            "a".to_string(),
            vec!["@zz".to_string(), "x@y".to_string(), "@aa".to_string()],
        );
        map.insert("b".to_string(), vec!["@zz".to_string()]);
        let resolved = ResolvedOwnership::new(map);

        assert_eq!(resolved.dangling_aliases(), vec!["@aa", "@zz"]);
    }

    #[test]
    fn dangling_aliases_empty_when_converged() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), vec!["x@y".to_string()]);
        let resolved = ResolvedOwnership::new(map);
        assert!(resolved.dangling_aliases().is_empty());
    }

    #[test]
    fn obligation_display_names_subtree_and_owners() {
        let obligation = ReviewObligation::new(
            "src\\lib.rs",
            "src",
            vec!["a@simcorp.com".into(), "b@simcorp.com".into()],
        );
        let message = obligation.to_string();
        assert!(message.contains("src"));
        assert!(message.contains("a@simcorp.com, b@simcorp.com"));
    }

    #[test]
    fn obligation_serializes_to_json() {
        let obligation = ReviewObligation::new("p", "s", vec!["a@x".into()]);
        let json = serde_json::to_string(&obligation).unwrap();
        assert!(json.contains("\"subtree\":\"s\""));
        assert!(json.contains("a@x"));
    }
}
