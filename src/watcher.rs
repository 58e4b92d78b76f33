//! Input watcher - binds the strength check to a password field.
//!
//! The page owns the elements; the watcher only looks them up by selector
//! and id on every input event, so elements removed from the page are
//! skipped without error.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::evaluator::is_strong_password_with;
use crate::feedback::{render_feedback, Feedback, HelperElement};
use crate::policy::{init_policy, PolicyError, StrengthPolicy};

/// Default selector of the watched input.
pub const DEFAULT_FIELD_SELECTOR: &str = "input[type=\"password\"]";

/// Default id of the helper text element.
pub const DEFAULT_HELPER_ID: &str = "passwordHelp";

/// Password input whose current value can be read.
pub trait PasswordField {
    fn value(&self) -> SecretString;
}

/// Element lookup on the hosting page.
pub trait Page {
    type Field: PasswordField;
    type Helper: HelperElement;

    fn password_field(&self, selector: &str) -> Option<&Self::Field>;
    fn helper_element(&mut self, id: &str) -> Option<&mut Self::Helper>;
}

/// Where the watcher finds its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    pub field_selector: String,
    pub helper_id: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            field_selector: DEFAULT_FIELD_SELECTOR.to_string(),
            helper_id: DEFAULT_HELPER_ID.to_string(),
        }
    }
}

/// Input-change handler bound to one password field.
#[derive(Debug, Clone)]
pub struct StrengthWatcher {
    config: WatcherConfig,
    policy: StrengthPolicy,
}

impl StrengthWatcher {
    /// Binds a watcher to `page`.
    ///
    /// Returns `None` if the password field is not on the page.
    pub fn bind<P: Page>(page: &P, config: WatcherConfig, policy: StrengthPolicy) -> Option<Self> {
        if page.password_field(&config.field_selector).is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!("No password field for selector {}", config.field_selector);
            return None;
        }
        Some(Self { config, policy })
    }

    pub fn config(&self) -> &WatcherConfig {
        &self.config
    }

    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    /// Handles one input event: reads the field, checks it, renders feedback.
    ///
    /// # Returns
    /// - `Some(feedback)` written to the helper
    /// - `None` if the field or the helper is missing (nothing is written)
    pub fn on_input<P: Page>(&self, page: &mut P) -> Option<Feedback> {
        let value = page.password_field(&self.config.field_selector)?.value();
        self.on_value(&value, page)
    }

    /// Renders feedback for a value delivered with the input event.
    ///
    /// Nothing is written if the field has left the page.
    pub fn on_value<P: Page>(&self, value: &SecretString, page: &mut P) -> Option<Feedback> {
        page.password_field(&self.config.field_selector)?;
        let is_strong = is_strong_password_with(value, &self.policy);

        #[cfg(feature = "tracing")]
        tracing::trace!("password input changed, strong={}", is_strong);

        render_feedback(page.helper_element(&self.config.helper_id), is_strong)
    }
}

/// One-time page initialization.
///
/// Installs the process-wide policy and binds the watcher to the page.
///
/// # Errors
///
/// Returns error if the policy overrides in the environment are invalid.
pub fn on_page_load<P: Page>(
    page: &P,
    config: WatcherConfig,
) -> Result<Option<StrengthWatcher>, PolicyError> {
    let policy = init_policy()?;
    Ok(StrengthWatcher::bind(page, config, policy))
}

/// Input-change event delivered by the page.
#[cfg(feature = "async")]
#[derive(Debug)]
pub enum InputEvent {
    /// The field changed; carries the value at dispatch time.
    Changed(SecretString),
    /// The field changed; the handler reads the value from the page.
    Touched,
}

/// Runs the watcher over a stream of input events.
///
/// Events are handled one at a time in arrival order. Stops when the
/// channel closes or `token` is cancelled.
///
/// # Returns
/// Number of events handled.
#[cfg(feature = "async")]
pub async fn run_watcher<P: Page>(
    watcher: &StrengthWatcher,
    page: &mut P,
    mut rx: mpsc::Receiver<InputEvent>,
    token: CancellationToken,
) -> usize {
    let mut handled = 0;

    loop {
        let event = tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("watcher cancelled after {} events", handled);
                break;
            }
            event = rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        match event {
            InputEvent::Changed(value) => {
                watcher.on_value(&value, page);
            }
            InputEvent::Touched => {
                watcher.on_input(page);
            }
        }
        handled += 1;
    }

    handled
}



#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::test_support::FakePage;
    use super::*;
    use crate::feedback::{STRONG_CLASS, WEAK_CLASS};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test]
    async fn test_run_watcher_in_order() {
        let mut page = FakePage::with_elements("");
        let watcher =
            StrengthWatcher::bind(&page, WatcherConfig::default(), StrengthPolicy::default()).unwrap();
        let (tx, rx) = mpsc::channel(8);

        tx.send(InputEvent::Changed(secret("Abc123!"))).await.unwrap();
        tx.send(InputEvent::Changed(secret("Abc123!@"))).await.unwrap();
        drop(tx);

        let handled = run_watcher(&watcher, &mut page, rx, CancellationToken::new()).await;

        assert_eq!(handled, 2);
        let helper = page.helper.as_ref().unwrap();
        assert_eq!(helper.writes, 2);
        assert_eq!(helper.class, STRONG_CLASS);
    }

    #[tokio::test]
    async fn test_run_watcher_reads_page_on_touch() {
        let mut page = FakePage::with_elements("abcdefgh");
        let watcher =
            StrengthWatcher::bind(&page, WatcherConfig::default(), StrengthPolicy::default()).unwrap();
        let (tx, rx) = mpsc::channel(1);

        tx.send(InputEvent::Touched).await.unwrap();
        drop(tx);

        let handled = run_watcher(&watcher, &mut page, rx, CancellationToken::new()).await;

        assert_eq!(handled, 1);
        assert_eq!(page.helper.as_ref().unwrap().class, WEAK_CLASS);
    }

    #[tokio::test]
    async fn test_run_watcher_field_removed() {
        let mut page = FakePage::with_elements("");
        let watcher =
            StrengthWatcher::bind(&page, WatcherConfig::default(), StrengthPolicy::default()).unwrap();
        page.field = None;
        let (tx, rx) = mpsc::channel(1);

        tx.send(InputEvent::Changed(secret("Abc123!@"))).await.unwrap();
        drop(tx);

        let handled = run_watcher(&watcher, &mut page, rx, CancellationToken::new()).await;

        assert_eq!(handled, 1);
        let helper = page.helper.as_ref().unwrap();
        assert_eq!(helper.writes, 0);
        assert!(helper.class.is_empty());
    }

    #[tokio::test]
    async fn test_run_watcher_cancelled() {
        let mut page = FakePage::with_elements("");
        let watcher =
            StrengthWatcher::bind(&page, WatcherConfig::default(), StrengthPolicy::default()).unwrap();
        let (tx, rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        tx.send(InputEvent::Changed(secret("Abc123!@"))).await.unwrap();

        let handled = run_watcher(&watcher, &mut page, rx, token).await;

        assert_eq!(handled, 0);
        assert_eq!(page.helper.as_ref().unwrap().writes, 0);
    }
}
