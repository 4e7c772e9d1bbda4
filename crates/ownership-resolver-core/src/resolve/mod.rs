//! The ownership resolution pipeline.
//!
//! Wires the parse passes together: normalize the raw content, extract
//! the subtree index and rule/group tables, expand nested group aliases,
//! and flatten owner lists into the final mapping.
//!
//! # Example
//!
//! ```rust
//! use ownership_resolver_core::config::ResolverConfig;
//! use ownership_resolver_core::resolve::resolve_ownership;
//!
//! let content = "\
//! # @fo = a@simcorp.com b@simcorp.com
//! frontofficedata\\ @fo lead@simcorp.com
//! ";
//!
//! let resolution = resolve_ownership(content, &ResolverConfig::default());
//! let owners = resolution.ownership.get("frontofficedata").unwrap();
//! assert_eq!(owners, &["a@simcorp.com", "b@simcorp.com", "lead@simcorp.com"]);
//! ```

mod flatten;
mod groups;

pub use flatten::flatten_owners;
pub use groups::resolve_groups;

use crate::config::ResolverConfig;
use crate::model::ResolvedOwnership;
use crate::parse::{
    group_definitions, group_table, normalize_lines, owner_map, ownership_rules, subtree_index,
};
use log::debug;
use std::collections::HashMap;

/// Everything derived from one pass over an ownership file.
#[derive(Debug, Clone, Default)]
pub struct OwnershipResolution {
    /// Subtrees in file order; later entries take precedence when matching.
    pub subtrees: Vec<String>,
    /// The resolved group table (alias → expanded value).
    pub groups: HashMap<String, String>,
    /// The final subtree → owner-list mapping.
    pub ownership: ResolvedOwnership,
}

impl OwnershipResolution {
    /// Returns true if the file produced no usable rules.
    pub fn is_empty(&self) -> bool {
        self.subtrees.is_empty()
    }
}

/// Runs the full parse-and-resolve pipeline over raw file content.
///
/// Total over its input: malformed or empty content resolves to an empty
/// [`OwnershipResolution`] rather than an error.
pub fn resolve_ownership(content: &str, config: &ResolverConfig) -> OwnershipResolution {
    let lines = normalize_lines(content);
    debug!("resolving ownership over {} normalized lines", lines.len());

    let subtrees = subtree_index(&lines);
    let raw_owners = owner_map(ownership_rules(&lines));
    let groups = resolve_groups(&group_table(group_definitions(&lines)), config.max_passes);
    let ownership = flatten_owners(&raw_owners, &groups);

    debug!(
        "resolved {} subtrees, {} groups, {} owner lists",
        subtrees.len(),
        groups.len(),
        ownership.len()
    );
    OwnershipResolution {
        subtrees,
        groups,
        ownership,
    }
}
