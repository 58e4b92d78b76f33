//! Live password strength feedback
//!
//! This library checks a password field's value on every input event
//! and writes a pass/fail message into a helper text element.
//!
//! A password is strong when it has at least 8 characters and contains an
//! uppercase letter, a lowercase letter, a digit and a symbol.
//!
//! # Features
//!
//! - `async` (default): Enables the event loop and cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Overrides the minimum length (default: `8`)
//! - `PWD_SYMBOLS`: Overrides the accepted symbol characters
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{is_strong_password_with, Feedback, StrengthPolicy};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abc123!@".to_string().into());
//! let strong = is_strong_password_with(&password, &StrengthPolicy::default());
//!
//! assert!(strong);
//! assert_eq!(Feedback::from_strength(strong).class, "form-text text-success");
//! ```

// Internal modules
mod evaluator;
mod feedback;
mod policy;
mod sections;
mod watcher;

// Public API
pub use evaluator::{
    evaluate_password, is_strong_password, is_strong_password_with, StrengthReport,
};
pub use feedback::{
    render_feedback, Feedback, HelperElement, STRONG_CLASS, STRONG_MESSAGE, WEAK_CLASS,
    WEAK_MESSAGE,
};
pub use policy::{
    current_policy, init_policy, init_policy_with, PolicyError, StrengthPolicy, SymbolSet,
    DEFAULT_MIN_LENGTH, DEFAULT_SYMBOLS,
};
pub use watcher::{
    on_page_load, Page, PasswordField, StrengthWatcher, WatcherConfig, DEFAULT_FIELD_SELECTOR,
    DEFAULT_HELPER_ID,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;

#[cfg(feature = "async")]
pub use watcher::{run_watcher, InputEvent};
