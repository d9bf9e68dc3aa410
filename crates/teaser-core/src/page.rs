//! Presentation Root
//!
//! Owns the scheduler and both state machines. The UI talks to the page only
//! through its inbound calls and the [`PageUpdate`]s they return.

use crate::config::TeaserConfig;
use crate::error::Result;
use crate::scheduler::{Millis, Scheduler};
use crate::subscription::{ConfirmationExpired, IgnoreReason, SubmitOutcome, SubscriptionForm};
use crate::typewriter::{Typewriter, TypewriterTimer};

/// Every timer the page can have pending
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerEvent {
    Typewriter(TypewriterTimer),
    ConfirmationExpired,
}

impl From<TypewriterTimer> for TimerEvent {
    fn from(timer: TypewriterTimer) -> Self {
        Self::Typewriter(timer)
    }
}

impl From<ConfirmationExpired> for TimerEvent {
    fn from(_: ConfirmationExpired) -> Self {
        Self::ConfirmationExpired
    }
}

/// An observable value that changed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageUpdate {
    /// Currently displayed tagline text
    Tagline(String),
    Confirmation(bool),
    Email(String),
}

pub struct TeaserPage {
    scheduler: Scheduler<TimerEvent>,
    typewriter: Typewriter,
    form: SubscriptionForm,
    mounted: bool,
}

impl TeaserPage {
    /// Validate `config` and start the tagline rotation at `now`
    pub fn mount(config: &TeaserConfig, now: Millis) -> Result<Self> {
        config.validate()?;

        let mut scheduler = Scheduler::new(now);
        let mut typewriter = Typewriter::new(
            config.tagline_set()?,
            config.char_interval()?,
            config.hold_ms,
        );
        typewriter.start(&mut scheduler);

        tracing::info!(
            taglines = config.taglines.len(),
            cycle_ms = typewriter.cycle_length(),
            "Teaser page mounted"
        );

        Ok(Self {
            scheduler,
            typewriter,
            form: SubscriptionForm::new(config.confirm_ms),
            mounted: true,
        })
    }

    /// Every observable value, for initial render
    pub fn snapshot(&self) -> Vec<PageUpdate> {
        vec![
            PageUpdate::Tagline(self.displayed_text().to_owned()),
            PageUpdate::Confirmation(self.is_confirmed()),
            PageUpdate::Email(self.email().to_owned()),
        ]
    }

    /// Fire every timer due at or before `now`, in order
    pub fn advance_to(&mut self, now: Millis) -> Vec<PageUpdate> {
        let mut updates = Vec::new();
        if !self.mounted {
            return updates;
        }

        while let Some(fired) = self.scheduler.pop_due(now) {
            match fired.event {
                TimerEvent::Typewriter(timer) => {
                    if let Some(text) = self.typewriter.on_timer(timer, &mut self.scheduler) {
                        updates.push(PageUpdate::Tagline(text.to_owned()));
                    }
                }
                TimerEvent::ConfirmationExpired => {
                    if self.form.on_expired() {
                        updates.push(PageUpdate::Confirmation(false));
                        updates.push(PageUpdate::Email(String::new()));
                    }
                }
            }
        }
        self.scheduler.settle(now);
        updates
    }

    /// Email field changed
    pub fn input(&mut self, text: impl Into<String>) -> Vec<PageUpdate> {
        if self.mounted && self.form.input(text) {
            vec![PageUpdate::Email(self.form.email().to_owned())]
        } else {
            Vec::new()
        }
    }

    /// Form submitted at `now`
    ///
    /// Timers due before `now` fire first, so the confirmation window starts at
    /// the submit time rather than at the last tick.
    pub fn submit(&mut self, now: Millis) -> (SubmitOutcome, Vec<PageUpdate>) {
        if !self.mounted {
            return (SubmitOutcome::Ignored(IgnoreReason::Unmounted), Vec::new());
        }

        let mut updates = self.advance_to(now);
        let outcome = self.form.submit(&mut self.scheduler);
        if outcome.is_confirmed() {
            updates.push(PageUpdate::Confirmation(true));
        }
        (outcome, updates)
    }

    /// Cancel every pending timer. Later calls do nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let cancelled = self.scheduler.pending();
        self.typewriter.stop(&mut self.scheduler);
        self.form.stop(&mut self.scheduler);
        self.scheduler.clear();
        self.mounted = false;
        tracing::info!(cancelled, "Teaser page unmounted");
    }

    pub fn displayed_text(&self) -> &str {
        self.typewriter.displayed()
    }

    pub fn active_tagline(&self) -> usize {
        self.typewriter.active_index()
    }

    pub fn email(&self) -> &str {
        self.form.email()
    }

    pub const fn is_confirmed(&self) -> bool {
        self.form.is_confirmed()
    }

    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Live timers (for diagnostics)
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }
}

impl Drop for TeaserPage {
    fn drop(&mut self) {
        self.unmount();
    }
}
