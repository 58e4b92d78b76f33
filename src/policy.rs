//! Strength policy module
//!
//! Holds the rule parameters (minimum length and symbol set) and the
//! process-wide policy installed at page load.

use std::sync::RwLock;
use thiserror::Error;

/// Characters accepted as "symbol" by default.
///
/// Every character is taken literally, including the `-` between `)` and `_`.
pub const DEFAULT_SYMBOLS: &str = "`~!@#$%^&*()-_=+{},.<>/';:|\\[]";

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_LENGTH: usize = 8;

const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";
const SYMBOLS_VAR: &str = "PWD_SYMBOLS";

static ACTIVE_POLICY: RwLock<Option<StrengthPolicy>> = RwLock::new(None);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid minimum length: {0}")]
    InvalidMinLength(String),
    #[error("Minimum length must be greater than zero")]
    ZeroMinLength,
    #[error("Symbol set is empty")]
    EmptySymbolSet,
}

/// Set of characters that satisfy the symbol rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    chars: Vec<char>,
}

impl SymbolSet {
    /// Builds a symbol set from the characters of `symbols`.
    ///
    /// Duplicates are dropped; order is irrelevant.
    pub fn new(symbols: &str) -> Result<Self, PolicyError> {
        let set = Self::from_chars(symbols);
        if set.chars.is_empty() {
            return Err(PolicyError::EmptySymbolSet);
        }
        Ok(set)
    }

    fn from_chars(symbols: &str) -> Self {
        let mut chars: Vec<char> = symbols.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Iterates the symbols in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SYMBOLS)
    }
}

/// Rule parameters used by the strength predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub min_length: usize,
    pub symbols: SymbolSet,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            symbols: SymbolSet::default(),
        }
    }
}

impl StrengthPolicy {
    /// Builds the policy from the environment.
    ///
    /// Overrides:
    /// 1. `PWD_MIN_LENGTH` - positive integer
    /// 2. `PWD_SYMBOLS` - non-empty set of symbol characters
    ///
    /// Unset variables keep the defaults.
    pub fn from_env() -> Result<Self, PolicyError> {
        let mut policy = Self::default();

        if let Ok(raw) = std::env::var(MIN_LENGTH_VAR) {
            let min_length: usize = raw
                .trim()
                .parse()
                .map_err(|_| PolicyError::InvalidMinLength(raw.clone()))?;
            if min_length == 0 {
                return Err(PolicyError::ZeroMinLength);
            }
            policy.min_length = min_length;
        }

        if let Ok(raw) = std::env::var(SYMBOLS_VAR) {
            policy.symbols = SymbolSet::new(&raw)?;
        }

        Ok(policy)
    }
}

/// Installs the process-wide policy read from the environment.
///
/// Idempotent: once a policy is installed, later calls return it unchanged.
///
/// # Errors
///
/// Returns error if an environment override is invalid.
pub fn init_policy() -> Result<StrengthPolicy, PolicyError> {
    if let Some(policy) = installed_policy() {
        return Ok(policy);
    }
    let policy = StrengthPolicy::from_env()?;
    Ok(init_policy_with(policy))
}

/// Installs `policy` as the process-wide policy unless one is already set.
///
/// Returns the policy that is active after the call.
pub fn init_policy_with(policy: StrengthPolicy) -> StrengthPolicy {
    let mut guard = ACTIVE_POLICY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = guard.as_ref() {
        return existing.clone();
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Strength policy initialized: min_length={}, {} symbols",
        policy.min_length,
        policy.symbols.iter().count()
    );

    *guard = Some(policy.clone());
    policy
}

/// Returns the installed policy, or the default one when none was installed.
pub fn current_policy() -> StrengthPolicy {
    installed_policy().unwrap_or_default()
}

fn installed_policy() -> Option<StrengthPolicy> {
    let guard = ACTIVE_POLICY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Resets the installed policy for testing purposes.
#[cfg(test)]
pub fn reset_policy_for_testing() {
    let mut guard = ACTIVE_POLICY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}
