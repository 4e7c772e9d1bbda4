//! Subtree matching for changed paths.
//!
//! Ownership files declare broad rules first and narrower overrides
//! later, so the matcher scans subtrees in file order and keeps the last
//! one contained in the candidate path. Containment is plain substring
//! search by default; a path-segment-aware mode is available through
//! [`ResolverConfig::with_segment_matching`].

use crate::config::ResolverConfig;
use crate::parse::normalize_path;
use log::trace;

/// Finds the most specific subtree governing a path.
#[derive(Debug, Clone)]
pub struct SubtreeMatcher {
    subtrees: Vec<String>,
    segment_matching: bool,
}

impl SubtreeMatcher {
    /// Creates a matcher over subtrees in file order, substring mode.
    pub fn new(subtrees: Vec<String>) -> Self {
        Self {
            subtrees,
            segment_matching: false,
        }
    }

    /// Creates a matcher honoring the config's matching mode.
    pub fn with_config(subtrees: Vec<String>, config: &ResolverConfig) -> Self {
        Self {
            subtrees,
            segment_matching: config.segment_matching,
        }
    }

    /// Returns the number of subtrees the matcher scans.
    pub fn len(&self) -> usize {
        self.subtrees.len()
    }

    /// Returns true if there are no subtrees to match against.
    pub fn is_empty(&self) -> bool {
        self.subtrees.is_empty()
    }

    /// Returns the last subtree in file order that matches the path.
    ///
    /// The path is case-folded and separator-normalized before matching.
    /// `None` when nothing matches.
    pub fn last_match(&self, path: &str) -> Option<&str> {
        let path = normalize_path(path);
        let mut found = None;
        for subtree in &self.subtrees {
            if self.matches(&path, subtree) {
                found = Some(subtree.as_str());
            }
        }
        trace!("path '{}' matched subtree {:?}", path, found);
        found
    }

    fn matches(&self, path: &str, subtree: &str) -> bool {
        if self.segment_matching {
            contains_segment_aligned(path, subtree)
        } else {
            path.contains(subtree)
        }
    }
}

/// Substring containment restricted to path-segment boundaries.
///
/// The occurrence must start at the path start or right after a `\` and
/// end at the path end or right before a `\`.
fn contains_segment_aligned(path: &str, subtree: &str) -> bool {
    if subtree.is_empty() {
        return false;
    }
    path.match_indices(subtree).any(|(start, _)| {
        let end = start + subtree.len();
        let starts_on_boundary = start == 0 || path.as_bytes()[start - 1] == b'\\';
        let ends_on_boundary = end == path.len() || path.as_bytes()[end] == b'\\';
        starts_on_boundary && ends_on_boundary
    })
}
