//! Configuration options for the resolution pipeline.

/// Default ceiling on group-expansion passes.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Configuration options for ownership resolution and matching.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum number of group-expansion passes before giving up on
    /// convergence. Cyclic alias definitions come back partially expanded
    /// once this bound is hit.
    pub max_passes: usize,
    /// If true, subtree matching requires path-segment alignment.
    /// If false (default), plain substring containment is used.
    pub segment_matching: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            segment_matching: false,
        }
    }
}

impl ResolverConfig {
    /// Creates a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of group-expansion passes.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets whether subtree matching must be path-segment aligned.
    pub fn with_segment_matching(mut self, value: bool) -> Self {
        self.segment_matching = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_passes, DEFAULT_MAX_PASSES);
        assert!(!config.segment_matching);
    }

    #[test]
    fn config_builder() {
        let config = ResolverConfig::new()
            .with_max_passes(3)
            .with_segment_matching(true);
        assert_eq!(config.max_passes, 3);
        assert!(config.segment_matching);
    }
}
