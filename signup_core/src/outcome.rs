use crate::View;
use reqwest::StatusCode;
use serde_json::Value;

/// Shown when the server accepted the registration.
pub const SUCCESS_MESSAGE: &str = "Signup successful! You can now log in.";

/// Used in place of a missing `detail` when the server turned us down.
pub const FALLBACK_DETAIL: &str = "Signup failed. Please try again.";

/// Shown when we never got a usable response at all.
pub const UNREACHABLE_MESSAGE: &str = "An error occurred during signup. Please try again.";

/// How a single submission ended. Every variant is final: nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The server answered with a 2xx status. The body is kept around but we
    /// don't look inside it.
    Created(Value),

    /// The server answered with some other status.
    Rejected {
        /// What the server said.
        status: StatusCode,

        /// The human-readable `detail` from the body, if there was a usable one.
        detail: Option<String>,
    },

    /// The request failed before we had a response we could read, for example
    /// because the server was down or sent back something that wasn't JSON.
    Unreachable(String),
}

impl Outcome {
    /// Whether the registration went through.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The text to show the user for this outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Created(_) => SUCCESS_MESSAGE.to_owned(),
            Self::Rejected { detail, .. } => {
                format!("Error: {}", detail.as_deref().unwrap_or(FALLBACK_DETAIL))
            }
            Self::Unreachable(_) => UNREACHABLE_MESSAGE.to_owned(),
        }
    }

    /// Show this outcome in a view. On success we also move on to
    /// `landing_page` and clear the form, in that order.
    pub fn apply<V: View + ?Sized>(&self, view: &mut V, landing_page: &str) {
        view.alert(&self.message());

        if self.is_created() {
            view.navigate(landing_page);
            view.reset_form();
        }
    }
}
