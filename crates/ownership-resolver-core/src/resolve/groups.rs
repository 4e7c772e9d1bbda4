//! Recursive group-alias expansion.
//!
//! Group values may reference other groups. Expansion runs as a pure
//! fixed-point iteration: each pass builds a fresh table in which every
//! token that names a group is replaced, token-exact, by that group's
//! previous-pass value. Iteration stops when a pass changes nothing or
//! when the pass bound is hit, so cyclic definitions come back partially
//! expanded instead of looping forever.

use crate::parse::split_tokens;
use log::{debug, trace};
use std::collections::HashMap;

/// Expands nested group references inside a group table.
///
/// Substitution is token-exact: an alias only replaces a whole token,
/// never a substring of a longer one (`@fo` does not fire inside
/// `@focph`). Values that still reference groups after `max_passes`
/// passes are returned as-is.
pub fn resolve_groups(
    definitions: &HashMap<String, String>,
    max_passes: usize,
) -> HashMap<String, String> {
    let mut current = definitions.clone();

    for pass in 0..max_passes {
        let mut changed = false;
        let next: HashMap<String, String> = current
            .iter()
            .map(|(alias, value)| {
                let expanded = expand_value(value, &current);
                if expanded != *value {
                    trace!("pass {}: {} -> {}", pass + 1, alias, expanded);
                    changed = true;
                }
                (alias.clone(), expanded)
            })
            .collect();
        current = next;

        if !changed {
            debug!("group resolution converged after {} passes", pass + 1);
            return current;
        }
    }

    debug!(
        "group resolution stopped at the {}-pass bound without converging",
        max_passes
    );
    current
}

/// Rewrites one value string with every group token substituted once.
fn expand_value(value: &str, table: &HashMap<String, String>) -> String {
    split_tokens(value)
        .into_iter()
        .map(|token| table.get(token).map(String::as_str).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flat_groups_resolve_unchanged() {
        let defs = table(&[("@fo", "a@x b@x")]);
        let resolved = resolve_groups(&defs, 10);
        assert_eq!(resolved["@fo"], "a@x b@x");
    }

    #[test]
    fn nested_groups_fully_expand() {
        let defs = table(&[
            ("@fo", "@focph @fokiev"),
            ("@focph", "mkal@x ogg@x"),
            ("@fokiev", "kiev@x"),
        ]);
        let resolved = resolve_groups(&defs, 10);
        assert_eq!(resolved["@fo"], "mkal@x ogg@x kiev@x");
    }

    #[test]
    fn deeply_nested_chain_resolves_within_bound() {
        let defs = table(&[
            ("@a", "@b"),
            ("@b", "@c"),
            ("@c", "@d"),
            ("@d", "leaf@x"),
        ]);
        let resolved = resolve_groups(&defs, 10);
        assert_eq!(resolved["@a"], "leaf@x");
    }

    #[test]
    fn substitution_is_token_exact() {
        // "@fo" must not be replaced inside the longer token "@focph".
        let defs = table(&[("@fo", "a@x"), ("@team", "@focph b@x")]);
        let resolved = resolve_groups(&defs, 10);
        assert_eq!(resolved["@team"], "@focph b@x");
    }

    #[test]
    fn cyclic_groups_stop_at_pass_bound() {
        let defs = table(&[("@a", "@b x@y"), ("@b", "@a")]);
        let resolved = resolve_groups(&defs, 10);

        // No panic, no infinite loop; the cycle survives partially expanded.
        assert!(resolved["@a"].contains("x@y"));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn self_referential_group_is_tolerated() {
        let defs = table(&[("@a", "@a x@y")]);
        let resolved = resolve_groups(&defs, 3);
        assert!(resolved["@a"].contains("x@y"));
    }

    #[test]
    fn separators_are_normalized_to_spaces() {
        let defs = table(&[("@fo", "a@x;b@x,c@x")]);
        let resolved = resolve_groups(&defs, 10);
        assert_eq!(resolved["@fo"], "a@x b@x c@x");
    }

    #[test]
    fn resolution_is_pure() {
        let defs = table(&[("@fo", "@inner"), ("@inner", "a@x")]);
        let first = resolve_groups(&defs, 10);
        let second = resolve_groups(&defs, 10);
        assert_eq!(first, second);
        // Input table is untouched.
        assert_eq!(defs["@fo"], "@inner");
    }

    #[test]
    fn empty_table_resolves_to_empty() {
        let resolved = resolve_groups(&HashMap::new(), 10);
        assert!(resolved.is_empty());
    }
}
