//! Character class sections - uppercase, lowercase and digit rules.

use super::SectionResult;
use crate::policy::StrengthPolicy;

/// Requires at least one ASCII uppercase letter.
pub fn uppercase_section(password: &str, _policy: &StrengthPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter.".to_string());
    }
    None
}

/// Requires at least one ASCII lowercase letter.
pub fn lowercase_section(password: &str, _policy: &StrengthPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter.".to_string());
    }
    None
}

/// Requires at least one ASCII digit.
pub fn digit_section(password: &str, _policy: &StrengthPolicy) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one digit.".to_string());
    }
    None
}
