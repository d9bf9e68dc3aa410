//! Subscription Form Controller
//!
//! Holds the email field and a transient "thanks" flag. Nothing is sent or
//! stored: a submit only flips the flag, and the expiry timer resets both the
//! flag and the field together.

use crate::scheduler::{Millis, Scheduler, TaskId};

/// Timer event owned by the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmationExpired;

/// Why a submit did nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    EmptyEmail,
    /// The confirmation message is already showing
    AlreadyConfirmed,
    /// The page has been torn down
    Unmounted,
}

/// Result of a submit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    Ignored(IgnoreReason),
}

impl SubmitOutcome {
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

#[derive(Debug)]
pub struct SubscriptionForm {
    email: String,
    confirmed: bool,
    confirm_window: Millis,
    expiry: Option<TaskId>,
}

impl SubscriptionForm {
    #[must_use]
    pub const fn new(confirm_window: Millis) -> Self {
        Self {
            email: String::new(),
            confirmed: false,
            confirm_window,
            expiry: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Replace the email text. Returns false when the field is hidden.
    pub fn input(&mut self, text: impl Into<String>) -> bool {
        if self.confirmed {
            tracing::debug!("Ignoring input while confirmation is shown");
            return false;
        }
        self.email = text.into();
        true
    }

    pub fn submit<E: From<ConfirmationExpired>>(&mut self, scheduler: &mut Scheduler<E>) -> SubmitOutcome {
        if self.confirmed {
            return SubmitOutcome::Ignored(IgnoreReason::AlreadyConfirmed);
        }
        if self.email.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyEmail);
        }

        self.confirmed = true;
        self.expiry = Some(scheduler.after(self.confirm_window, ConfirmationExpired.into()));
        tracing::debug!(window_ms = self.confirm_window, "Subscription confirmed");
        SubmitOutcome::Confirmed
    }

    /// Clear the flag and the field together. Returns false for a stale timer.
    pub fn on_expired(&mut self) -> bool {
        if !self.confirmed {
            return false;
        }
        self.confirmed = false;
        self.email.clear();
        self.expiry = None;
        tracing::debug!("Confirmation window elapsed");
        true
    }

    /// Cancel a pending expiry, leaving the visible state as it is
    pub fn stop<E>(&mut self, scheduler: &mut Scheduler<E>) {
        if let Some(id) = self.expiry.take() {
            scheduler.cancel(id);
        }
    }
}
