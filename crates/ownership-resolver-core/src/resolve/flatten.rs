//! Owner-list flattening.
//!
//! Substitutes fully resolved group values into each subtree's raw owner
//! tokens, producing the final subtree → owner-list mapping.

use crate::model::ResolvedOwnership;
use crate::parse::split_tokens;
use std::collections::HashMap;

/// Replaces group tokens in every owner list with their resolved members.
///
/// A token that is a key of the resolved group table is spliced in place
/// by the table value, re-tokenized; everything else passes through
/// untouched. Aliases that failed to resolve within the pass bound stay
/// in the output and show up in
/// [`ResolvedOwnership::dangling_aliases`].
pub fn flatten_owners(
    raw_owners: &HashMap<String, Vec<String>>,
    groups: &HashMap<String, String>,
) -> ResolvedOwnership {
    let flattened = raw_owners
        .iter()
        .map(|(subtree, tokens)| {
            let owners: Vec<String> = tokens
                .iter()
                .flat_map(|token| match groups.get(token) {
                    Some(value) => split_tokens(value)
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>(),
                    None => vec![token.clone()],
                })
                .collect();
            (subtree.clone(), owners)
        })
        .collect();
    ResolvedOwnership::new(flattened)
}
