//! Ownership Resolver Core
//!
//! A library for resolving CODEOWNERS-style ownership files: path-prefix
//! rules with owner emails and nested `@group` aliases, consumed by a
//! pending-change review workflow.
//!
//! # Features
//!
//! - **Parser**: Normalize and parse ownership files into rules, a
//!   subtree index, and a group-definition table
//! - **Group resolution**: Fixed-point expansion of nested aliases with a
//!   bounded pass count that tolerates cycles
//! - **Matching**: Last-match-wins subtree lookup for changed paths
//! - **Membership**: `alias@domain` ownership checks for acting users
//!
//! # Quick Start
//!
//! ```rust
//! use ownership_resolver_core::config::ResolverConfig;
//! use ownership_resolver_core::review::evaluate;
//!
//! let content = "\
//! # @fo = mkal@simcorp.com ogg@simcorp.com
//! frontofficedata\\ @fo
//! ";
//!
//! let paths = ["frontofficedata\\model.cs"];
//! let obligations = evaluate(content, "SCDOM\\ANDO", &paths, &ResolverConfig::default());
//!
//! for obligation in &obligations {
//!     println!("{}", obligation);
//! }
//! assert_eq!(obligations[0].subtree, "frontofficedata");
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Normalization and parsing of ownership files
//! - [`resolve`]: Group expansion and owner-list flattening
//! - [`matching`]: Subtree matching for changed paths
//! - [`membership`]: User-alias extraction and ownership checks
//! - [`review`]: End-to-end evaluation producing review obligations

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod config;
pub mod matching;
pub mod membership;
pub mod model;
pub mod parse;
pub mod resolve;
pub mod review;

// Re-export commonly used types at the crate root
pub use config::ResolverConfig;
pub use matching::SubtreeMatcher;
pub use membership::{OWNER_DOMAIN, is_code_owner, is_owner_of, user_alias};
pub use model::{GroupDefinition, OwnershipRule, ResolvedOwnership, ReviewObligation};
pub use resolve::{OwnershipResolution, resolve_ownership};
pub use review::evaluate;

/// An error from the ownership-file loading glue.
#[derive(Debug, Error)]
pub enum FileError {
    /// No ownership file exists at any known location.
    #[error("no ownership file found under '{0}'")]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read ownership file")]
    Io(#[from] std::io::Error),
}

/// Finds the ownership file in a repository.
///
/// Searches in the following locations (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
///
/// Returns `Some(path)` if found, `None` otherwise.
pub fn find_ownership_file(repo_path: &Path) -> Option<PathBuf> {
    let locations = [
        repo_path.join(".github/CODEOWNERS"),
        repo_path.join("CODEOWNERS"),
        repo_path.join("docs/CODEOWNERS"),
    ];
    locations.into_iter().find(|p| p.exists())
}

/// Reads the ownership file for a repository into a string.
///
/// Combines [`find_ownership_file`] with the one file read the pipeline
/// needs per evaluation.
pub fn load_ownership_file(repo_path: &Path) -> Result<String, FileError> {
    let path = find_ownership_file(repo_path)
        .ok_or_else(|| FileError::NotFound(repo_path.to_path_buf()))?;
    Ok(std::fs::read_to_string(path)?)
}
