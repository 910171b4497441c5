use crate::{
    GuessRejected, HintRejected, SubmitRejected,
    core::{
        measure::Measure,
        sample::Sample,
        scale::{ChartScale, ChartViewport},
    },
};

use super::scoring::{ObjectiveScore, RoundResult};

/// A value placed by the player for one measure slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guess {
    pub measure: Measure,
    pub value: f64,
}

/// Ground-truth value of one measure slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actual {
    pub measure: Measure,
    pub value: f64,
}

/// Identifies a pointing device so that concurrent pointers cannot steal
/// each other's drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// A guess marker held by a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    pub guess_index: usize,
    pub pointer: PointerId,
}

/// What a successful pointer press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PointerDown {
    /// A new guess was appended at the pointer position.
    Placed { index: usize },
    /// An existing guess was grabbed.
    DragStarted { index: usize },
}

/// State of a single round.
///
/// Guesses are stored in slot order, so `guesses[i]` always estimates
/// `slots[i]`. Once the round is submitted nothing in it changes.
#[derive(Debug, Clone)]
pub struct RoundState {
    sample: Sample,
    section_index: usize,
    round_index: usize,
    slots: Vec<Measure>,
    guesses: Vec<Guess>,
    actuals: Vec<Actual>,
    hint_taken: bool,
    drag: Option<Drag>,
    result: Option<RoundResult>,
}

impl RoundState {
    /// Starts a round on `sample` asking for `slots` in order.
    ///
    /// # Panics
    ///
    /// Panics if `slots` is empty.
    #[must_use]
    pub fn new(sample: Sample, section_index: usize, round_index: usize, slots: Vec<Measure>) -> Self {
        assert!(!slots.is_empty(), "round must have at least one slot");
        let actuals = slots
            .iter()
            .map(|&measure| Actual {
                measure,
                value: measure.compute(&sample),
            })
            .collect();
        Self {
            sample,
            section_index,
            round_index,
            slots,
            guesses: vec![],
            actuals,
            hint_taken: false,
            drag: None,
            result: None,
        }
    }

    #[must_use]
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    #[must_use]
    pub fn scale(&self) -> ChartScale {
        self.sample.scale()
    }

    #[must_use]
    pub fn section_index(&self) -> usize {
        self.section_index
    }

    /// Zero-based round number within the section.
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub fn slots(&self) -> &[Measure] {
        &self.slots
    }

    #[must_use]
    pub fn required_guesses(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Ground-truth values in slot order.
    ///
    /// Renderers should only reveal these once the round is submitted.
    #[must_use]
    pub fn actuals(&self) -> &[Actual] {
        &self.actuals
    }

    #[must_use]
    pub fn hint_taken(&self) -> bool {
        self.hint_taken
    }

    #[must_use]
    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.result.is_some()
    }

    /// All required guesses are placed and the round can be submitted.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.is_submitted() && self.guesses.len() == self.slots.len()
    }

    /// Measure the next placed guess will be assigned to.
    #[must_use]
    pub fn next_pending_measure(&self) -> Option<Measure> {
        if self.is_submitted() {
            return None;
        }
        self.slots.get(self.guesses.len()).copied()
    }

    /// Index of the first guess whose marker is within hit tolerance of `x`.
    #[must_use]
    pub fn guess_at(&self, x: f64, viewport: &ChartViewport) -> Option<usize> {
        let scale = self.scale();
        let tolerance = viewport.hit_tolerance();
        self.guesses
            .iter()
            .position(|guess| (x - scale.to_canvas_x(guess.value, viewport)).abs() < tolerance)
    }

    /// Presses a pointer at canvas position `x`.
    ///
    /// Grabs the guess under the pointer if there is one, otherwise places a
    /// guess for the next pending slot. A grab is refused while another
    /// pointer is dragging; that pointer keeps its guess until it is released.
    pub fn pointer_down(
        &mut self,
        x: f64,
        pointer: PointerId,
        viewport: &ChartViewport,
    ) -> Result<PointerDown, GuessRejected> {
        if self.is_submitted() {
            return Err(GuessRejected::Submitted);
        }
        if let Some(index) = self.guess_at(x, viewport) {
            if self.drag.is_some_and(|drag| drag.pointer != pointer) {
                return Err(GuessRejected::Held);
            }
            log::trace!("pointer {pointer:?} grabbed guess {index}");
            self.drag = Some(Drag {
                guess_index: index,
                pointer,
            });
            return Ok(PointerDown::DragStarted { index });
        }
        let measure = self
            .next_pending_measure()
            .ok_or(GuessRejected::AllPlaced)?;
        let value = self.scale().from_canvas_x(x, viewport);
        self.guesses.push(Guess { measure, value });
        let index = self.guesses.len() - 1;
        log::trace!("placed {measure} guess at {value:.2}");
        Ok(PointerDown::Placed { index })
    }

    /// Moves the dragged guess to canvas position `x`.
    ///
    /// Returns whether a guess moved; only the pointer that started the drag
    /// can move it.
    pub fn pointer_move(&mut self, x: f64, pointer: PointerId, viewport: &ChartViewport) -> bool {
        if self.is_submitted() {
            return false;
        }
        let Some(drag) = self.drag.filter(|drag| drag.pointer == pointer) else {
            return false;
        };
        let value = self.scale().from_canvas_x(x, viewport);
        self.guesses[drag.guess_index].value = value;
        true
    }

    /// Releases (or cancels) a pointer, ending its drag.
    ///
    /// Returns whether a drag ended.
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        match self.drag {
            Some(drag) if drag.pointer == pointer => {
                log::trace!("pointer {pointer:?} released guess {}", drag.guess_index);
                self.drag = None;
                true
            }
            _ => false,
        }
    }

    pub fn take_hint(&mut self) -> Result<(), HintRejected> {
        if self.is_submitted() {
            return Err(HintRejected::Submitted);
        }
        if self.hint_taken {
            return Err(HintRejected::AlreadyTaken);
        }
        self.hint_taken = true;
        Ok(())
    }

    /// Scores the round and freezes it.
    ///
    /// `previous_combo` is the session streak before this round. Submitting
    /// an already submitted round returns the existing result unchanged.
    pub fn submit(&mut self, previous_combo: u32) -> Result<&RoundResult, SubmitRejected> {
        let result = match self.result.take() {
            Some(result) => result,
            None => {
                if self.guesses.len() < self.slots.len() {
                    return Err(SubmitRejected::Incomplete {
                        placed: self.guesses.len(),
                        required: self.slots.len(),
                    });
                }
                let scale = self.scale();
                let scores = self
                    .guesses
                    .iter()
                    .zip(&self.actuals)
                    .map(|(guess, actual)| {
                        ObjectiveScore::new(
                            guess.measure,
                            guess.value,
                            actual.value,
                            &scale,
                            self.hint_taken,
                        )
                    })
                    .collect();
                self.drag = None;
                RoundResult::new(scores, self.hint_taken, previous_combo)
            }
        };
        Ok(self.result.insert(result))
    }
}
