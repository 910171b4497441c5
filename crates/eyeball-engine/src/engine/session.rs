use serde::Serialize;

use crate::{
    GuessRejected, HintRejected, StoreError, SubmitRejected,
    core::{sample::DatasetCollection, scale::ChartViewport},
};

use super::{
    curriculum::{CURRICULUM, ROUNDS_PER_SECTION, SECTION_COUNT, Section, TOTAL_ROUNDS},
    onboarding::{self, KeyValueStore},
    round::{PointerDown, PointerId, RoundState},
    scoring::{MAX_POINTS, StarRating},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GamePhase {
    Onboarding,
    InRound,
    GameOver,
}

/// What an accepted submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubmitOutcome {
    /// The current round was scored.
    Scored,
    /// A scored round was dismissed and the next one started.
    Advanced,
    /// A scored round was dismissed and no rounds remain.
    GameOver,
}

/// Points earned in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub title: &'static str,
    pub score: u32,
}

/// Final summary of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub max_score: u32,
    pub stars: StarRating,
    pub sections: Vec<SectionScore>,
}

/// A playthrough of the curriculum.
#[derive(Debug, Clone)]
pub struct GameSession {
    datasets: DatasetCollection,
    viewport: ChartViewport,
    phase: GamePhase,
    section_index: usize,
    rounds_in_section: usize,
    rounds_started: usize,
    total_score: u32,
    section_scores: [u32; SECTION_COUNT],
    combo: u32,
    round: Option<RoundState>,
    summary: Option<GameOverSummary>,
}

impl GameSession {
    /// Creates a session, starting play right away if `store` records that
    /// onboarding has been completed.
    #[must_use]
    pub fn new(datasets: DatasetCollection, store: &dyn KeyValueStore) -> Self {
        let mut session = Self {
            datasets,
            viewport: ChartViewport::default(),
            phase: GamePhase::Onboarding,
            section_index: 0,
            rounds_in_section: 0,
            rounds_started: 0,
            total_score: 0,
            section_scores: [0; SECTION_COUNT],
            combo: 0,
            round: None,
            summary: None,
        };
        if onboarding::is_onboarded(store) {
            session.start_new_game();
        }
        session
    }

    /// Returns to the onboarding screen, abandoning the current game.
    pub fn show_onboarding(&mut self) {
        self.reset();
        self.phase = GamePhase::Onboarding;
    }

    /// Leaves onboarding, starts a new game and records the flag in `store`.
    ///
    /// Play starts even if the flag cannot be written. Does nothing outside
    /// the onboarding phase.
    pub fn complete_onboarding(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        if !self.phase.is_onboarding() {
            return Ok(());
        }
        self.start_new_game();
        onboarding::mark_onboarded(store)?;
        log::info!("onboarding completed");
        Ok(())
    }

    /// Resets score, section buckets, combo and counters, then starts the
    /// first round.
    pub fn start_new_game(&mut self) {
        log::info!("starting new game with {} datasets", self.datasets.len());
        self.reset();
        self.start_round();
    }

    pub fn restart(&mut self) {
        self.start_new_game();
    }

    fn reset(&mut self) {
        self.section_index = 0;
        self.rounds_in_section = 0;
        self.rounds_started = 0;
        self.total_score = 0;
        self.section_scores = [0; SECTION_COUNT];
        self.combo = 0;
        self.round = None;
        self.summary = None;
    }

    fn start_round(&mut self) {
        if self.rounds_in_section >= ROUNDS_PER_SECTION {
            self.section_index += 1;
            self.rounds_in_section = 0;
        }
        let Some(section) = CURRICULUM.get(self.section_index) else {
            self.finish();
            return;
        };
        let sample = self.datasets.for_round(self.rounds_started).clone();
        log::debug!(
            "{} round {}: {} ({} values)",
            section.title,
            self.rounds_in_section + 1,
            sample.label(),
            sample.len()
        );
        self.round = Some(RoundState::new(
            sample,
            self.section_index,
            self.rounds_in_section,
            section.slots().collect(),
        ));
        self.rounds_in_section += 1;
        self.rounds_started += 1;
        self.phase = GamePhase::InRound;
    }

    fn finish(&mut self) {
        #[expect(clippy::cast_possible_truncation)]
        const MAX_SCORE: u32 = TOTAL_ROUNDS as u32 * MAX_POINTS;
        let summary = GameOverSummary {
            final_score: self.total_score,
            max_score: MAX_SCORE,
            stars: StarRating::from_game(self.total_score, TOTAL_ROUNDS),
            sections: CURRICULUM
                .iter()
                .zip(self.section_scores)
                .map(|(section, score)| SectionScore {
                    title: section.title,
                    score,
                })
                .collect(),
        };
        log::info!(
            "game over: {} / {} points, {}",
            summary.final_score,
            summary.max_score,
            summary.stars
        );
        self.round = None;
        self.summary = Some(summary);
        self.phase = GamePhase::GameOver;
    }

    /// Scores the current round, or advances past an already scored one.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitRejected> {
        let Some(round) = self.round.as_mut() else {
            return Err(SubmitRejected::NoRound);
        };
        if round.is_submitted() {
            self.start_round();
            return Ok(if self.phase.is_game_over() {
                SubmitOutcome::GameOver
            } else {
                SubmitOutcome::Advanced
            });
        }
        let section_index = round.section_index();
        let result = round.submit(self.combo)?;
        let round_score = result.round_score();
        self.combo = result.combo();
        self.total_score += round_score;
        self.section_scores[section_index] += round_score;
        log::debug!(
            "round scored {round_score} (base {}, bonus {}), combo {}",
            result.base_score(),
            result.combo_bonus(),
            self.combo
        );
        Ok(SubmitOutcome::Scored)
    }

    pub fn take_hint(&mut self) -> Result<(), HintRejected> {
        let round = self.round.as_mut().ok_or(HintRejected::NoRound)?;
        round.take_hint()?;
        log::debug!("hint taken");
        Ok(())
    }

    pub fn pointer_down(&mut self, x: f64, pointer: PointerId) -> Result<PointerDown, GuessRejected> {
        let round = self.round.as_mut().ok_or(GuessRejected::NoRound)?;
        round.pointer_down(x, pointer, &self.viewport)
    }

    /// Returns whether a dragged guess moved.
    pub fn pointer_move(&mut self, x: f64, pointer: PointerId) -> bool {
        self.round
            .as_mut()
            .is_some_and(|round| round.pointer_move(x, pointer, &self.viewport))
    }

    /// Returns whether a drag ended.
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        self.round
            .as_mut()
            .is_some_and(|round| round.pointer_up(pointer))
    }

    /// Index of the guess under canvas position `x`, for hover feedback.
    #[must_use]
    pub fn guess_at(&self, x: f64) -> Option<usize> {
        self.round
            .as_ref()
            .and_then(|round| round.guess_at(x, &self.viewport))
    }

    #[must_use]
    pub fn viewport(&self) -> ChartViewport {
        self.viewport
    }

    /// Updates the chart placement after the drawing surface was resized.
    pub fn set_viewport(&mut self, viewport: ChartViewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn datasets(&self) -> &DatasetCollection {
        &self.datasets
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Section of the current round.
    #[must_use]
    pub fn section(&self) -> Option<&'static Section> {
        self.round
            .as_ref()
            .and_then(|round| CURRICULUM.get(round.section_index()))
    }

    /// Rounds started since the game began, across sections.
    #[must_use]
    pub fn rounds_started(&self) -> usize {
        self.rounds_started
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn section_scores(&self) -> &[u32; SECTION_COUNT] {
        &self.section_scores
    }

    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    #[must_use]
    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Dataset, MemoryStore, ONBOARDED_KEY};

    use super::*;

    const MOUSE: PointerId = PointerId(0);
    const KEYBOARD: PointerId = PointerId(1);

    fn collection(data: &[f64]) -> DatasetCollection {
        DatasetCollection::new([Dataset {
            label: "test".to_owned(),
            tip: String::new(),
            data: data.to_vec(),
        }])
    }

    fn onboarded_session(data: &[f64]) -> GameSession {
        let mut store = MemoryStore::default();
        onboarding::mark_onboarded(&mut store).unwrap();
        GameSession::new(collection(data), &store)
    }

    /// Places the next guess and drags it onto `value`.
    fn place(session: &mut GameSession, value: f64) {
        let viewport = session.viewport();
        let free_x = (0..=20)
            .map(|i| viewport.origin + viewport.width * f64::from(i) / 20.0)
            .find(|&x| session.guess_at(x).is_none())
            .unwrap();
        assert!(session.pointer_down(free_x, MOUSE).unwrap().is_placed());
        assert!(session.pointer_down(free_x, MOUSE).unwrap().is_drag_started());
        let scale = session.round().unwrap().scale();
        assert!(session.pointer_move(scale.to_canvas_x(value, &viewport), MOUSE));
        assert!(session.pointer_up(MOUSE));
    }

    fn place_actuals(session: &mut GameSession) {
        let actuals = session
            .round()
            .unwrap()
            .actuals()
            .iter()
            .map(|actual| actual.value)
            .collect::<Vec<_>>();
        for value in actuals {
            place(session, value);
        }
    }

    fn play_round(session: &mut GameSession, values: &[f64]) {
        for &value in values {
            place(session, value);
        }
        assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));
    }

    #[test]
    fn test_end_to_end_round() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(session.phase().is_in_round());
        assert_eq!(session.section().unwrap().title, "Section 1: Mean vs Median");

        play_round(&mut session, &[3.0, 3.0]);
        let result = session.round().unwrap().result().unwrap();
        assert_eq!(result.round_score(), 200);
        assert_eq!(result.stars(), StarRating::Three);
        assert_eq!(session.total_score(), 200);
        assert_eq!(session.section_scores()[0], 200);
        assert_eq!(session.combo(), 1);
    }

    #[test]
    fn test_combo_on_third_clean_round() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        play_round(&mut session, &[3.0, 3.0]);
        session.submit().unwrap();
        play_round(&mut session, &[3.0, 3.0]);
        session.submit().unwrap();
        play_round(&mut session, &[3.0, 3.0]);

        let result = session.round().unwrap().result().unwrap();
        assert_eq!(result.base_score(), 200);
        assert_eq!(result.combo_bonus(), 100);
        assert_eq!(session.combo(), 3);
        assert_eq!(session.total_score(), 700);

        session.submit().unwrap();
        // mean missed by half the range
        play_round(&mut session, &[1.0, 3.0]);
        let result = session.round().unwrap().result().unwrap();
        assert_eq!(result.round_score(), 150);
        assert_eq!(result.combo_bonus(), 0);
        assert_eq!(session.combo(), 0);
        assert_eq!(session.total_score(), 850);

        // The streak counts again from one after the reset.
        session.submit().unwrap();
        play_round(&mut session, &[3.0, 3.0]);
        let result = session.round().unwrap().result().unwrap();
        assert_eq!((result.round_score(), result.combo_bonus()), (200, 0));
        assert_eq!(session.combo(), 1);

        session.submit().unwrap();
        assert_eq!(session.section().unwrap().title, "Section 2: Percentiles");
        place_actuals(&mut session);
        assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));
        let result = session.round().unwrap().result().unwrap();
        assert_eq!((result.round_score(), result.combo_bonus()), (300, 0));
        assert_eq!(session.combo(), 2);

        session.submit().unwrap();
        place_actuals(&mut session);
        assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));
        let result = session.round().unwrap().result().unwrap();
        assert_eq!((result.base_score(), result.combo_bonus()), (300, 150));
        assert_eq!(session.combo(), 3);
        assert_eq!(session.total_score(), 1800);
    }

    #[test]
    fn test_hint_halves_round() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(session.take_hint(), Ok(()));
        assert_eq!(session.take_hint(), Err(HintRejected::AlreadyTaken));
        play_round(&mut session, &[3.0, 3.0]);
        assert_eq!(session.total_score(), 100);
        assert_eq!(session.combo(), 0);
    }

    #[test]
    fn test_hint_after_placing_halves_round() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        place(&mut session, 3.0);
        place(&mut session, 3.0);
        assert_eq!(session.take_hint(), Ok(()));
        assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));

        let result = session.round().unwrap().result().unwrap();
        assert!(result.scores().iter().all(|score| score.points == 50));
        assert_eq!(session.total_score(), 100);
    }

    #[test]
    fn test_incomplete_submit_is_rejected() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        place(&mut session, 3.0);
        assert_eq!(
            session.submit(),
            Err(SubmitRejected::Incomplete {
                placed: 1,
                required: 2
            })
        );
        assert!(!session.round().unwrap().is_submitted());
        assert_eq!(session.total_score(), 0);
    }

    #[test]
    fn test_placement_beyond_required_is_noop() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        place(&mut session, 2.0);
        place(&mut session, 4.0);
        assert_eq!(session.pointer_down(400.0, MOUSE), Err(GuessRejected::AllPlaced));
        assert_eq!(session.round().unwrap().guesses().len(), 2);
    }

    #[test]
    fn test_second_submit_advances() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        play_round(&mut session, &[3.0, 3.0]);
        assert_eq!(session.submit(), Ok(SubmitOutcome::Advanced));
        let round = session.round().unwrap();
        assert_eq!(round.round_index(), 1);
        assert!(round.guesses().is_empty());
        assert!(!round.is_submitted());
        assert!(!round.hint_taken());
        assert_eq!(session.rounds_started(), 2);
    }

    #[test]
    fn test_drag_ignores_other_pointer() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        session.pointer_down(225.0, MOUSE).unwrap();
        session.pointer_down(225.0, MOUSE).unwrap();
        assert!(!session.pointer_move(575.0, KEYBOARD));
        assert!(!session.pointer_up(KEYBOARD));
        assert_eq!(session.round().unwrap().guesses()[0].value, 2.0);
        assert!(session.pointer_move(575.0, MOUSE));
        assert_eq!(session.round().unwrap().guesses()[0].value, 4.0);
    }

    #[test]
    fn test_onboarding_flag() {
        let mut store = MemoryStore::default();
        let mut session = GameSession::new(collection(&[1.0, 2.0]), &store);
        assert!(session.phase().is_onboarding());
        assert!(session.round().is_none());
        assert_eq!(session.pointer_down(100.0, MOUSE), Err(GuessRejected::NoRound));
        assert_eq!(session.submit(), Err(SubmitRejected::NoRound));
        assert_eq!(session.take_hint(), Err(HintRejected::NoRound));

        session.complete_onboarding(&mut store).unwrap();
        assert!(session.phase().is_in_round());
        assert_eq!(store.get(ONBOARDED_KEY).as_deref(), Some("true"));

        let session = GameSession::new(collection(&[1.0, 2.0]), &store);
        assert!(session.phase().is_in_round());
    }

    #[test]
    fn test_show_onboarding_abandons_game() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        play_round(&mut session, &[3.0, 3.0]);
        session.show_onboarding();
        assert!(session.phase().is_onboarding());
        assert_eq!(session.total_score(), 0);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_full_playthrough() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for round in 0..TOTAL_ROUNDS {
            place_actuals(&mut session);
            assert_eq!(session.submit(), Ok(SubmitOutcome::Scored));
            let expected = if round + 1 == TOTAL_ROUNDS {
                SubmitOutcome::GameOver
            } else {
                SubmitOutcome::Advanced
            };
            assert_eq!(session.submit(), Ok(expected));
        }

        assert!(session.phase().is_game_over());
        assert_eq!(session.section_scores(), &[1300, 2250, 1500, 2250]);
        assert_eq!(session.total_score(), 7300);

        let summary = session.summary().unwrap();
        assert_eq!(summary.final_score, 7300);
        assert_eq!(summary.max_score, 2000);
        assert_eq!(summary.stars, StarRating::Three);
        assert_eq!(summary.sections[2].title, "Section 3: Spread");
        assert_eq!(summary.sections[2].score, 1500);

        assert_eq!(session.pointer_down(400.0, MOUSE), Err(GuessRejected::NoRound));
        assert!(!session.pointer_move(400.0, MOUSE));
        assert_eq!(session.submit(), Err(SubmitRejected::NoRound));
        assert_eq!(session.take_hint(), Err(HintRejected::NoRound));
    }

    #[test]
    fn test_spread_section_needs_two_guesses() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for _ in 0..10 {
            place_actuals(&mut session);
            session.submit().unwrap();
            session.submit().unwrap();
        }
        let round = session.round().unwrap();
        assert_eq!(session.section().unwrap().title, "Section 3: Spread");
        assert_eq!(round.required_guesses(), 2);
        assert_eq!(round.next_pending_measure(), Some(crate::Measure::StdDevLower));
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut session = onboarded_session(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        play_round(&mut session, &[3.0, 3.0]);
        session.restart();
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.combo(), 0);
        assert_eq!(session.rounds_started(), 1);
        assert_eq!(session.section_scores(), &[0; SECTION_COUNT]);
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = GameOverSummary {
            final_score: 1200,
            max_score: 2000,
            stars: StarRating::Two,
            sections: vec![SectionScore {
                title: "Section 1: Mean vs Median",
                score: 1200,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["stars"], "Two");
        assert_eq!(json["sections"][0]["score"], 1200);
    }
}
