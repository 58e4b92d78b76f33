//! Password strength evaluator - runs the rule sections.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::{current_policy, StrengthPolicy};
use crate::sections::SECTIONS;

/// Outcome of a full evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrengthReport {
    /// Reasons of every failed rule, in evaluation order.
    pub reasons: Vec<String>,
    pub cancelled: bool,
}

impl StrengthReport {
    /// A password is strong when every rule passed and evaluation completed.
    pub fn is_strong(&self) -> bool {
        !self.cancelled && self.reasons.is_empty()
    }
}

/// Returns `true` iff the password satisfies the installed strength policy.
///
/// Without an installed policy: at least 8 characters, one uppercase and
/// one lowercase ASCII letter, one digit and one symbol.
pub fn is_strong_password(password: &SecretString) -> bool {
    is_strong_password_with(password, &current_policy())
}

/// Returns `true` iff the password satisfies `policy`.
pub fn is_strong_password_with(password: &SecretString, policy: &StrengthPolicy) -> bool {
    let pwd = password.expose_secret();
    SECTIONS
        .iter()
        .all(|(_, section_fn)| section_fn(pwd, policy).is_none())
}

/// Evaluates every rule and collects the failure reasons.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Rule parameters
/// * `token` - Optional cancellation token (async feature only)
pub fn evaluate_password(
    password: &SecretString,
    policy: &StrengthPolicy,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> StrengthReport {
    let mut report = StrengthReport::default();
    let pwd = password.expose_secret();

    for (section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    report.cancelled = true;
                    break;
                }
            }
        }

        if let Some(reason) = section_fn(pwd, policy) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Strength rule failed: {}", section_name);
            report.reasons.push(reason);
        }
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;
    }

    report
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    policy: &StrengthPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    let report = evaluate_password(password, policy, Some(token));

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
