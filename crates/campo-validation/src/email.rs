//! Email format validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates basic email shape: a local part, a single '@', and a domain
/// containing at least one dot, with no whitespace anywhere.
///
/// This is deliberately permissive; the availability check on the backend
/// is the authority on whether an address is actually usable.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
