//! Fastscroll Animation
//!
//! Time-driven building blocks for the auto-fading overlay.
//!
//! # Features
//!
//! - **Fade clock**: a pure opacity function of the time since the last
//!   interaction (hold fully opaque, then ramp down, then hidden)
//! - **Easing**: the curve applied to the fade ramp
//! - **Tick scheduling**: at most one pending deferred callback per owner,
//!   with generational ids so superseded callbacks are recognised and dropped

pub mod easing;
pub mod fade;
pub mod scheduler;

pub use easing::Easing;
pub use fade::{FadeClock, FadePhase, FadeTimer};
pub use scheduler::{TickId, TickScheduler};
