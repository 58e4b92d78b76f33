//! Symbol section - checks for a character from the policy's symbol set.

use super::SectionResult;
use crate::policy::StrengthPolicy;

/// Requires at least one character from the policy's symbol set.
pub fn symbol_section(password: &str, policy: &StrengthPolicy) -> SectionResult {
    if !password.chars().any(|c| policy.symbols.contains(c)) {
        return Some("Password must contain at least one special character.".to_string());
    }
    None
}
