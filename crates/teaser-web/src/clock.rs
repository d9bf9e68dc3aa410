//! Browser Time

use teaser_core::Millis;

/// Milliseconds since page load, from `performance.now()`
///
/// Monotonic, unlike `Date.now()`, so the scheduler never sees time go back.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> Millis {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0, |p| p.now().max(0.0) as Millis)
}

/// Seed for the decorative particle layout
#[allow(clippy::cast_sign_loss)]
pub fn particle_seed() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}
