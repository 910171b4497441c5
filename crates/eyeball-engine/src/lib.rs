pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessRejected {
    #[display("no round in progress")]
    NoRound,
    #[display("round already submitted")]
    Submitted,
    #[display("all guesses already placed")]
    AllPlaced,
    #[display("another pointer is dragging a guess")]
    Held,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SubmitRejected {
    #[display("no round in progress")]
    NoRound,
    #[display("only {placed} of {required} guesses placed")]
    Incomplete { placed: usize, required: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HintRejected {
    #[display("no round in progress")]
    NoRound,
    #[display("round already submitted")]
    Submitted,
    #[display("hint already shown this round")]
    AlreadyTaken,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("failed to persist {key:?}")]
pub struct StoreError {
    key: String,
    source: std::io::Error,
}

impl StoreError {
    #[must_use]
    pub fn new(key: &str, source: std::io::Error) -> Self {
        Self {
            key: key.to_owned(),
            source,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
