//! # teaser-core
//!
//! Behavior behind the OrbiBrain "coming soon" page, kept free of any UI framework.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        TeaserPage                             │
//! │  ┌─────────────┐  ┌──────────────────┐  ┌─────────────────┐  │
//! │  │ Typewriter  │  │ SubscriptionForm │  │  Scheduler<E>   │  │
//! │  │  (taglines) │──│  (email capture) │──│ (virtual time)  │  │
//! │  └─────────────┘  └──────────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The page owns both state machines and the scheduler that feeds them timer
//! events. A UI layer calls [`TeaserPage::advance_to`] with the current time and
//! mirrors the returned [`PageUpdate`]s into whatever it renders with.

pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod particles;
pub mod scheduler;
pub mod subscription;
pub mod typewriter;

pub use config::TeaserConfig;
pub use content::{Feature, FeatureIcon};
pub use error::{Result, TeaserError};
pub use page::{PageUpdate, TeaserPage};
pub use particles::{Particle, ParticleField};
pub use scheduler::{Fired, Millis, Scheduler, TaskId};
pub use subscription::{ConfirmationExpired, IgnoreReason, SubmitOutcome, SubscriptionForm};
pub use typewriter::{Phase, TaglineSet, Typewriter, TypewriterTimer};
