//! Length section - checks password minimum length.

use super::SectionResult;
use crate::policy::StrengthPolicy;

/// Checks if the password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &str, policy: &StrengthPolicy) -> SectionResult {
    if password.chars().count() < policy.min_length {
        return Some(format!(
            "Password must be at least {} characters long.",
            policy.min_length
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section("Short1!", &StrengthPolicy::default());
        assert_eq!(
            result,
            Some("Password must be at least 8 characters long.".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678", &StrengthPolicy::default()), None);
    }

    #[test]
    fn test_length_section_counts_chars() {
        // 7 chars, 14 bytes
        let pwd = "ééééééé";
        assert!(pwd.len() >= 8);
        assert!(length_section(pwd, &StrengthPolicy::default()).is_some());
    }

    #[test]
    fn test_length_section_custom_minimum() {
        let policy = StrengthPolicy {
            min_length: 12,
            ..StrengthPolicy::default()
        };
        let result = length_section("LongEnough1!", &policy);
        assert_eq!(result, None);
        let result = length_section("Short1!abcd", &policy);
        assert!(result.unwrap().contains("12"));
    }
}
