//! Parsing for ownership files.
//!
//! Raw file content goes through normalization first; the parser then
//! derives the subtree index, the ownership rules, and the group
//! definitions in independent passes over the normalized lines.

pub mod lexer;
mod normalize;
mod parser;

// Re-export public entry points
pub use lexer::{is_comment_line, is_group_definition_line, split_tokens};
pub use normalize::{normalize_lines, normalize_path};
pub use parser::{group_definitions, group_table, owner_map, ownership_rules, subtree_index};
