//! Core data structures shared by the game engine and its renderers.
//!
//! - [`measure`] - What the player estimates: [`Measure`](measure::Measure) slots
//!   grouped into [`Objective`](measure::Objective)s
//! - [`sample`] - Immutable round data ([`Sample`](sample::Sample)) and the
//!   dataset collection it is drawn from
//! - [`scale`] - Value/canvas coordinate mapping used for both drawing and hit-testing

pub use self::{measure::*, sample::*, scale::*};

pub mod measure;
pub mod sample;
pub mod scale;
