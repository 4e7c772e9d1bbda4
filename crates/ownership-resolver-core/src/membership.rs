//! Owner-membership checks.
//!
//! Decides whether an acting user is among a subtree's resolved owners.
//! Users arrive as `<domain>\<alias>` identifiers; the check tests for
//! the full `alias@simcorp.com` string inside the joined owner list, so a
//! bare group name never counts as an owner.

/// The mail domain appended to user aliases for ownership checks.
pub const OWNER_DOMAIN: &str = "simcorp.com";

/// Extracts the case-folded alias from a `<domain>\<alias>` identifier.
///
/// Everything after the last `\` is the alias; an identifier without a
/// domain prefix is returned whole.
pub fn user_alias(identifier: &str) -> String {
    identifier
        .rsplit('\\')
        .next()
        .unwrap_or(identifier)
        .to_lowercase()
}

/// Returns true if `alias@simcorp.com` occurs in the joined owner list.
///
/// Plain substring search, kept for compatibility with the consumed file
/// format: partial local-part overlaps (alias `al` against owner
/// `pal@simcorp.com`) will false-positive.
pub fn is_code_owner(owners: &str, alias: &str) -> bool {
    if alias.is_empty() {
        return false;
    }
    owners.contains(&format!("{}@{}", alias, OWNER_DOMAIN))
}

/// Membership check over a resolved owner list.
pub fn is_owner_of(owners: &[String], alias: &str) -> bool {
    is_code_owner(&owners.join(" "), alias)
}
