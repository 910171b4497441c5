//! Event-driven runtime for ratatui applications.
//!
//! There are no ticks or frame timers: the runtime draws once on start-up,
//! then blocks on the next terminal event, hands it to the [`App`] and draws
//! again. Applications whose state only changes in response to input need
//! nothing else.

pub use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
