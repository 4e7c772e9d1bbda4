//! End-to-end evaluation of changed paths against an ownership file.
//!
//! One call resolves the file, matches every changed path to its most
//! specific subtree, and emits a [`ReviewObligation`] for each path whose
//! resolved owner list does not include the acting user. Every degenerate
//! input (empty file, no rules, no groups, blank user) short-circuits to
//! an empty obligation set; nothing here fails.

use crate::config::ResolverConfig;
use crate::matching::SubtreeMatcher;
use crate::membership::{is_owner_of, user_alias};
use crate::model::ReviewObligation;
use crate::resolve::resolve_ownership;
use log::{debug, info};

/// Evaluates changed paths for a user against raw ownership-file content.
///
/// `user` is a `<domain>\<alias>` identifier. Returns one obligation per
/// path that has a governing subtree whose owners do not include the
/// user; paths with no governing rule produce nothing.
pub fn evaluate<P: AsRef<str>>(
    content: &str,
    user: &str,
    paths: &[P],
    config: &ResolverConfig,
) -> Vec<ReviewObligation> {
    if content.is_empty() {
        debug!("empty ownership file, nothing to evaluate");
        return Vec::new();
    }

    let alias = user_alias(user);
    if alias.is_empty() {
        debug!("empty user alias, nothing to evaluate");
        return Vec::new();
    }

    let resolution = resolve_ownership(content, config);
    if resolution.subtrees.is_empty() || resolution.groups.is_empty() {
        debug!(
            "degenerate ownership file ({} subtrees, {} groups), nothing to evaluate",
            resolution.subtrees.len(),
            resolution.groups.len()
        );
        return Vec::new();
    }

    let matcher = SubtreeMatcher::with_config(resolution.subtrees.clone(), config);
    let mut obligations = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let Some(subtree) = matcher.last_match(path) else {
            continue;
        };
        let owners = resolution.ownership.get(subtree).unwrap_or(&[]);
        if is_owner_of(owners, &alias) {
            continue;
        }
        debug!("'{}' needs review: user '{}' does not own '{}'", path, alias, subtree);
        obligations.push(ReviewObligation::new(path, subtree, owners.to_vec()));
    }

    info!(
        "evaluated {} paths for '{}': {} obligations",
        paths.len(),
        alias,
        obligations.len()
    );
    obligations
}
