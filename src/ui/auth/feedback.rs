//! Banner state of the auth page
//!
//! Provided above the route guard: a sign-in briefly swaps the page for the
//! loading screen, and the outcome must still be visible when the form comes
//! back.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AuthFeedback {
    /// Last error from a form submission
    pub error: RwSignal<Option<String>>,
    /// Confirmation, e.g. after registering or resetting a password
    pub notice: RwSignal<Option<String>>,
}

impl AuthFeedback {
    pub fn clear(&self) {
        self.error.set(None);
        self.notice.set(None);
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.notice.set(None);
        self.error.set(Some(message.into()));
    }

    pub fn succeed(&self, message: impl Into<String>) {
        self.error.set(None);
        self.notice.set(Some(message.into()));
    }
}

pub fn provide_auth_feedback() -> AuthFeedback {
    let feedback = AuthFeedback {
        error: RwSignal::new(None),
        notice: RwSignal::new(None),
    };
    provide_context(feedback);
    feedback
}

pub fn use_auth_feedback() -> AuthFeedback {
    expect_context::<AuthFeedback>()
}
