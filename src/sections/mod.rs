//! Password rule sections
//!
//! Each section checks one rule of the strength policy.

mod length;
mod symbol;
mod variety;

pub use length::length_section;
pub use symbol::symbol_section;
pub use variety::{digit_section, lowercase_section, uppercase_section};

use crate::policy::StrengthPolicy;

/// Result type for section functions.
/// - `Some(reason)` - Rule failed with reason
/// - `None` - Rule passed
pub type SectionResult = Option<String>;

/// Signature shared by all sections.
pub type SectionFn = fn(&str, &StrengthPolicy) -> SectionResult;

/// Sections in evaluation order.
pub const SECTIONS: [(&str, SectionFn); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("symbol", symbol_section),
];
