//! Game rules and state management.
//!
//! This module drives the core data structures through a playthrough:
//!
//! - [`CURRICULUM`] - The fixed sequence of [`Section`]s and their objectives
//! - [`RoundState`] - One round: guess placement, dragging, hint and submission
//! - [`RoundResult`] - Per-guess points, combo bonus and star rating of a round
//! - [`GameSession`] - Multi-round session with score buckets and combo streak
//! - [`KeyValueStore`] - Injected persistence for the onboarding flag
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`]; it starts in onboarding unless the store says
//!    the player has already seen it
//! 2. Place one guess per pending slot with [`GameSession::pointer_down`],
//!    optionally dragging them with [`GameSession::pointer_move`]
//! 3. [`GameSession::submit`] scores the round; submitting again advances
//! 4. After the last round of the last section the session is over
//!
//! # Example
//!
//! ```
//! use eyeball_engine::{
//!     Dataset, DatasetCollection, GameSession, MemoryStore, PointerDown, PointerId,
//!     SubmitOutcome,
//! };
//!
//! let datasets = DatasetCollection::new([Dataset {
//!     label: "demo".into(),
//!     tip: String::new(),
//!     data: vec![1.0, 2.0, 3.0, 4.0, 5.0],
//! }]);
//! let mut store = MemoryStore::default();
//! let mut session = GameSession::new(datasets, &store);
//! session.complete_onboarding(&mut store).unwrap();
//!
//! let mouse = PointerId(0);
//! assert_eq!(session.pointer_down(100.0, mouse), Ok(PointerDown::Placed { index: 0 }));
//! assert_eq!(session.pointer_down(600.0, mouse), Ok(PointerDown::Placed { index: 1 }));
//! assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));
//! assert!(session.total_score() > 0);
//! ```

pub use self::{curriculum::*, onboarding::*, round::*, scoring::*, session::*};

mod curriculum;
mod onboarding;
mod round;
mod scoring;
mod session;
