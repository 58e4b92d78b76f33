//! Feedback renderer - writes the strength message into the helper element.

/// Message shown when the password is strong.
pub const STRONG_MESSAGE: &str = "Strong password ✅";

/// Guidance shown when the password is not strong yet.
pub const WEAK_MESSAGE: &str =
    "Password must be at least 8 characters and include uppercase, lowercase, digit and special character.";

/// Style class applied to the helper when the password is strong.
pub const STRONG_CLASS: &str = "form-text text-success";

/// Style class applied to the helper when the password is weak.
pub const WEAK_CLASS: &str = "form-text text-danger";

/// Text element displaying the strength message.
pub trait HelperElement {
    fn set_text(&mut self, text: &str);
    fn set_class(&mut self, class: &str);
}

/// Text and class written to the helper element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub text: &'static str,
    pub class: &'static str,
}

impl Feedback {
    pub const STRONG: Feedback = Feedback {
        text: STRONG_MESSAGE,
        class: STRONG_CLASS,
    };

    pub const WEAK: Feedback = Feedback {
        text: WEAK_MESSAGE,
        class: WEAK_CLASS,
    };

    pub fn from_strength(is_strong: bool) -> Self {
        if is_strong { Self::STRONG } else { Self::WEAK }
    }

    /// Writes text and class into `helper`.
    pub fn apply<H: HelperElement + ?Sized>(&self, helper: &mut H) {
        helper.set_text(self.text);
        helper.set_class(self.class);
    }
}

/// Renders the feedback for `is_strong` into the helper element.
///
/// # Returns
/// - `Some(feedback)` with what was written
/// - `None` if the helper element is absent (nothing is written)
pub fn render_feedback<H: HelperElement + ?Sized>(
    helper: Option<&mut H>,
    is_strong: bool,
) -> Option<Feedback> {
    let helper = helper?;
    let feedback = Feedback::from_strength(is_strong);
    feedback.apply(helper);
    Some(feedback)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::HelperElement;

    /// In-memory helper element recording every write.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct FakeHelper {
        pub text: String,
        pub class: String,
        pub writes: usize,
    }

    impl HelperElement for FakeHelper {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.writes += 1;
        }

        fn set_class(&mut self, class: &str) {
            self.class = class.to_string();
        }
    }
}
