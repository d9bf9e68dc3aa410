//! Typewriter Tagline Engine
//!
//! Reveals the active tagline one character at a time, holds the full phrase,
//! then moves on to the next phrase (wrapping) and starts over from nothing.
//! The cycle never ends on its own; only [`Typewriter::stop`] halts it.

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeaserError};
use crate::scheduler::{Millis, Scheduler, TaskId};

/// Ordered, non-empty list of phrases
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TaglineSet {
    phrases: Vec<String>,
}

impl TaglineSet {
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TeaserError::EmptyTaglines);
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Length of a phrase in characters (what one reveal step adds)
    fn char_len(&self, index: usize) -> usize {
        self.phrases[index].chars().count()
    }
}

impl TryFrom<Vec<String>> for TaglineSet {
    type Error = TeaserError;

    fn try_from(phrases: Vec<String>) -> Result<Self> {
        Self::new(phrases)
    }
}

impl From<TaglineSet> for Vec<String> {
    fn from(set: TaglineSet) -> Self {
        set.phrases
    }
}

/// Timer events owned by the typewriter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterTimer {
    /// Per-character reveal step
    Reveal,
    /// Hold after a full reveal has elapsed
    Hold,
}

/// Where the engine is within the active phrase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not started, or stopped
    Idle,
    Revealing,
    /// Full phrase shown, waiting to advance
    Holding,
}

pub struct Typewriter {
    taglines: TaglineSet,
    char_interval: NonZeroU64,
    hold: Millis,
    active: usize,
    revealed: usize,
    phase: Phase,
    timer: Option<TaskId>,
}

impl Typewriter {
    #[must_use]
    pub const fn new(taglines: TaglineSet, char_interval: NonZeroU64, hold: Millis) -> Self {
        Self {
            taglines,
            char_interval,
            hold,
            active: 0,
            revealed: 0,
            phase: Phase::Idle,
            timer: None,
        }
    }

    /// Enter the first phrase at the scheduler's current time
    pub fn start<E: From<TypewriterTimer>>(&mut self, scheduler: &mut Scheduler<E>) -> &str {
        self.stop(scheduler);
        self.active = 0;
        self.enter_phrase(scheduler);
        self.displayed()
    }

    /// Cancel the live timer and go idle, keeping the displayed text
    pub fn stop<E>(&mut self, scheduler: &mut Scheduler<E>) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        self.phase = Phase::Idle;
    }

    /// Apply a fired timer. Returns the new displayed text when it changed.
    ///
    /// A timer that does not match the current phase is stale and ignored.
    pub fn on_timer<E: From<TypewriterTimer>>(
        &mut self,
        timer: TypewriterTimer,
        scheduler: &mut Scheduler<E>,
    ) -> Option<&str> {
        match (timer, self.phase) {
            (TypewriterTimer::Reveal, Phase::Revealing) => {
                self.revealed += 1;
                if self.revealed >= self.taglines.char_len(self.active) {
                    self.begin_hold(scheduler);
                }
                Some(self.displayed())
            }
            (TypewriterTimer::Hold, Phase::Holding) => {
                self.active = (self.active + 1) % self.taglines.len();
                tracing::debug!(index = self.active, "Advancing tagline");
                self.enter_phrase(scheduler);
                Some(self.displayed())
            }
            (timer, phase) => {
                tracing::trace!(?timer, ?phase, "Ignoring stale typewriter timer");
                None
            }
        }
    }

    /// Active phrase cut to the revealed prefix
    pub fn displayed(&self) -> &str {
        let phrase = self.active_phrase();
        match phrase.char_indices().nth(self.revealed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn active_phrase(&self) -> &str {
        &self.taglines.phrases[self.active]
    }

    pub const fn active_index(&self) -> usize {
        self.active
    }

    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn taglines(&self) -> &TaglineSet {
        &self.taglines
    }

    /// Time for one full rotation through every phrase, saturating at `Millis::MAX`
    pub fn cycle_length(&self) -> Millis {
        (0..self.taglines.len())
            .map(|i| {
                (self.taglines.char_len(i) as Millis)
                    .saturating_mul(self.char_interval.get())
                    .saturating_add(self.hold)
            })
            .fold(0, Millis::saturating_add)
    }

    fn enter_phrase<E: From<TypewriterTimer>>(&mut self, scheduler: &mut Scheduler<E>) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        self.revealed = 0;

        if self.taglines.char_len(self.active) == 0 {
            self.begin_hold(scheduler);
        } else {
            self.phase = Phase::Revealing;
            self.timer = Some(scheduler.every(self.char_interval, TypewriterTimer::Reveal.into()));
        }
    }

    fn begin_hold<E: From<TypewriterTimer>>(&mut self, scheduler: &mut Scheduler<E>) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        self.phase = Phase::Holding;
        self.timer = Some(scheduler.after(self.hold, TypewriterTimer::Hold.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAR: u64 = 100;
    const HOLD: u64 = 2_000;

    fn typewriter(phrases: &[&str]) -> (Typewriter, Scheduler<TypewriterTimer>) {
        let set = TaglineSet::new(phrases.iter().copied()).unwrap();
        let mut scheduler = Scheduler::new(0);
        let mut engine = Typewriter::new(set, NonZeroU64::new(CHAR).unwrap(), HOLD);
        engine.start(&mut scheduler);
        (engine, scheduler)
    }

    /// Run every timer due up to `until`, returning each displayed change
    fn run(engine: &mut Typewriter, scheduler: &mut Scheduler<TypewriterTimer>, until: Millis) -> Vec<(Millis, String)> {
        let mut shown = Vec::new();
        while let Some(fired) = scheduler.pop_due(until) {
            if let Some(text) = engine.on_timer(fired.event, scheduler) {
                shown.push((fired.at, text.to_owned()));
            }
        }
        scheduler.settle(until);
        shown
    }

    #[test]
    fn test_empty_set_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(TaglineSet::new(empty), Err(TeaserError::EmptyTaglines)));
    }

    #[test]
    fn test_reveal_then_hold_then_advance() {
        let (mut engine, mut scheduler) = typewriter(&["Hi", "Yo"]);
        assert_eq!(engine.displayed(), "");
        assert_eq!(engine.phase(), Phase::Revealing);

        run(&mut engine, &mut scheduler, 100);
        assert_eq!(engine.displayed(), "H");

        run(&mut engine, &mut scheduler, 200);
        assert_eq!(engine.displayed(), "Hi");
        assert_eq!(engine.phase(), Phase::Holding);

        run(&mut engine, &mut scheduler, 2_199);
        assert_eq!(engine.displayed(), "Hi");
        assert_eq!(engine.active_index(), 0);

        let shown = run(&mut engine, &mut scheduler, 2_300);
        assert_eq!(
            shown,
            vec![(2_200, String::new()), (2_300, "Y".to_owned())]
        );
        assert_eq!(engine.active_index(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let phrases = [
            "Revolutionizing Intelligence",
            "Powering Tomorrow's Minds",
            "Where Innovation Meets Intelligence",
            "The Future of Cognitive Technology",
        ];
        let (mut engine, mut scheduler) = typewriter(&phrases);
        let cycle = engine.cycle_length();
        let expected: u64 = phrases.iter().map(|p| p.len() as u64 * CHAR + HOLD).sum();
        assert_eq!(cycle, expected);

        let mut index = engine.active_index();
        let mut revealed = engine.revealed();
        let mut t = 0;
        while t < cycle {
            t += 10;
            run(&mut engine, &mut scheduler, t);

            assert!(engine.active_phrase().starts_with(engine.displayed()));
            if engine.active_index() == index {
                assert!(engine.revealed() >= revealed, "prefix shrank at t={t}");
            } else {
                assert_eq!(engine.active_index(), (index + 1) % phrases.len());
                assert!(engine.revealed() <= 1);
            }
            index = engine.active_index();
            revealed = engine.revealed();
        }

        assert_eq!(engine.active_index(), 0);
        assert_eq!(engine.displayed(), "");
    }

    #[test]
    fn test_single_phrase_restarts() {
        let (mut engine, mut scheduler) = typewriter(&["Go"]);
        let shown = run(&mut engine, &mut scheduler, 2_300);
        assert_eq!(
            shown,
            vec![
                (100, "G".to_owned()),
                (200, "Go".to_owned()),
                (2_200, String::new()),
                (2_300, "G".to_owned()),
            ]
        );
        assert_eq!(engine.active_index(), 0);
    }

    #[test]
    fn test_empty_phrase_goes_straight_to_hold() {
        let (mut engine, mut scheduler) = typewriter(&["", "A"]);
        assert_eq!(engine.phase(), Phase::Holding);

        run(&mut engine, &mut scheduler, 2_000);
        assert_eq!(engine.active_index(), 1);
        assert_eq!(engine.phase(), Phase::Revealing);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let (mut engine, mut scheduler) = typewriter(&["né✓"]);
        run(&mut engine, &mut scheduler, 200);
        assert_eq!(engine.displayed(), "né");
        run(&mut engine, &mut scheduler, 300);
        assert_eq!(engine.displayed(), "né✓");
        assert_eq!(engine.phase(), Phase::Holding);
    }

    #[test]
    fn test_stop_cancels_timer() {
        let (mut engine, mut scheduler) = typewriter(&["Hi"]);
        run(&mut engine, &mut scheduler, 100);
        engine.stop(&mut scheduler);

        assert_eq!(scheduler.pending(), 0);
        assert!(run(&mut engine, &mut scheduler, 10_000).is_empty());
        assert_eq!(engine.displayed(), "H");
    }

    #[test]
    fn test_cycle_length_saturates() {
        let set = TaglineSet::new(["Hello"]).unwrap();
        let engine = Typewriter::new(set, NonZeroU64::new(u64::MAX / 2).unwrap(), HOLD);
        assert_eq!(engine.cycle_length(), Millis::MAX);

        let set = TaglineSet::new(["a", "b"]).unwrap();
        let engine = Typewriter::new(set, NonZeroU64::new(CHAR).unwrap(), u64::MAX - 1);
        assert_eq!(engine.cycle_length(), Millis::MAX);
    }

    #[test]
    fn test_tagline_set_serde() {
        let set: TaglineSet = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(serde_json::from_str::<TaglineSet>("[]").is_err());
    }
}
