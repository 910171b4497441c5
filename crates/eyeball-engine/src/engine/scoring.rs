use std::fmt;

use serde::Serialize;

use crate::core::{measure::Measure, scale::ChartScale};

/// Points for an exact guess.
pub const MAX_POINTS: u32 = 100;
/// Minimum points every guess of a round needs for the round to be clean.
pub const CLEAN_THRESHOLD: u32 = 75;
/// Streak length from which clean rounds earn a bonus.
pub const COMBO_THRESHOLD: u32 = 3;
/// Round score multiplier while the combo is active.
pub const COMBO_MULTIPLIER: f64 = 1.5;

/// Points for a single guess.
///
/// The error is measured as a fraction of the sample range, so missing by
/// the whole range (or more) scores zero. Taking the hint halves the result
/// before rounding.
///
/// # Example
///
/// ```
/// use eyeball_engine::{ChartScale, guess_points};
///
/// let scale = ChartScale::new(0.0, 100.0);
/// assert_eq!(guess_points(40.0, 50.0, &scale, false), 90);
/// assert_eq!(guess_points(40.0, 50.0, &scale, true), 45);
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn guess_points(guess: f64, actual: f64, scale: &ChartScale, hint_taken: bool) -> u32 {
    let max = f64::from(MAX_POINTS);
    let error_fraction = (guess - actual).abs() / scale.range;
    let mut raw = (max - error_fraction * max).max(0.0);
    if hint_taken {
        raw /= 2.0;
    }
    // `f64::round` rounds half away from zero.
    raw.round() as u32
}

/// Score of one guess against its ground-truth value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectiveScore {
    pub measure: Measure,
    pub guess: f64,
    pub actual: f64,
    pub points: u32,
}

impl ObjectiveScore {
    #[must_use]
    pub fn new(measure: Measure, guess: f64, actual: f64, scale: &ChartScale, hint_taken: bool) -> Self {
        Self {
            measure,
            guess,
            actual,
            points: guess_points(guess, actual, scale, hint_taken),
        }
    }

    #[must_use]
    pub fn error(&self) -> f64 {
        (self.guess - self.actual).abs()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.points >= CLEAN_THRESHOLD
    }
}

/// Feedback line shown after submission.
impl fmt::Display for ObjectiveScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Off by {:.1} (+{} pts).",
            self.measure,
            self.error(),
            self.points
        )
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, derive_more::Display,
)]
pub enum StarRating {
    #[display("★☆☆")]
    One,
    #[display("★★☆")]
    Two,
    #[display("★★★")]
    Three,
}

impl StarRating {
    /// Rating of a round from its average points per guess.
    #[must_use]
    pub fn from_round_average(average: f64) -> Self {
        if average >= 90.0 {
            Self::Three
        } else if average >= 60.0 {
            Self::Two
        } else {
            Self::One
        }
    }

    /// Rating of a finished game.
    ///
    /// The maximum is `total_rounds * 100` regardless of how many slots each
    /// round had, and combo bonuses can push the ratio past 1.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn from_game(total_score: u32, total_rounds: usize) -> Self {
        let max_possible = total_rounds as f64 * f64::from(MAX_POINTS);
        let ratio = f64::from(total_score) / max_possible;
        if ratio >= 0.75 {
            Self::Three
        } else if ratio >= 0.45 {
            Self::Two
        } else {
            Self::One
        }
    }

    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// Outcome of a submitted round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    scores: Vec<ObjectiveScore>,
    base_score: u32,
    combo_bonus: u32,
    combo: u32,
    hint_taken: bool,
    stars: StarRating,
}

impl RoundResult {
    /// Totals the per-guess scores and applies the combo rule.
    ///
    /// `previous_combo` is the streak before this round; the streak after it
    /// is available through [`RoundResult::combo`].
    ///
    /// # Panics
    ///
    /// Panics if `scores` is empty.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[expect(clippy::cast_precision_loss)]
    pub fn new(scores: Vec<ObjectiveScore>, hint_taken: bool, previous_combo: u32) -> Self {
        assert!(!scores.is_empty(), "round must have at least one score");
        let base_score = scores.iter().map(|score| score.points).sum::<u32>();
        let clean = scores.iter().all(ObjectiveScore::is_clean);
        let combo = if clean { previous_combo + 1 } else { 0 };
        let combo_bonus = if combo >= COMBO_THRESHOLD {
            (f64::from(base_score) * (COMBO_MULTIPLIER - 1.0)).round() as u32
        } else {
            0
        };
        let average = f64::from(base_score + combo_bonus) / scores.len() as f64;
        Self {
            stars: StarRating::from_round_average(average),
            scores,
            base_score,
            combo_bonus,
            combo,
            hint_taken,
        }
    }

    #[must_use]
    pub fn scores(&self) -> &[ObjectiveScore] {
        &self.scores
    }

    #[must_use]
    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    #[must_use]
    pub fn combo_bonus(&self) -> u32 {
        self.combo_bonus
    }

    /// Points added to the total: base score plus combo bonus.
    #[must_use]
    pub fn round_score(&self) -> u32 {
        self.base_score + self.combo_bonus
    }

    /// Streak length after this round.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.combo > 0
    }

    #[must_use]
    pub fn hint_taken(&self) -> bool {
        self.hint_taken
    }

    #[must_use]
    pub fn stars(&self) -> StarRating {
        self.stars
    }

    /// Whether the round is worth highlighting in the feedback area.
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.round_score() > MAX_POINTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(points: u32) -> ObjectiveScore {
        ObjectiveScore {
            measure: Measure::Mean,
            guess: 0.0,
            actual: 0.0,
            points,
        }
    }

    #[test]
    fn test_exact_guess_scores_max() {
        let scale = ChartScale::new(1.0, 5.0);
        assert_eq!(guess_points(3.0, 3.0, &scale, false), 100);
        assert_eq!(guess_points(3.0, 3.0, &scale, true), 50);
    }

    #[test]
    fn test_full_range_miss_scores_zero() {
        let scale = ChartScale::new(0.0, 100.0);
        assert_eq!(guess_points(0.0, 100.0, &scale, false), 0);
        assert_eq!(guess_points(-50.0, 100.0, &scale, false), 0);
    }

    #[test]
    fn test_degenerate_range() {
        let scale = ChartScale::new(7.0, 7.0);
        assert_eq!(guess_points(7.0, 7.0, &scale, false), 100);
        assert_eq!(guess_points(7.5, 7.0, &scale, false), 50);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let scale = ChartScale::new(0.0, 8.0);
        // 87.5
        assert_eq!(guess_points(1.0, 0.0, &scale, false), 88);
        // 75 / 2 = 37.5
        assert_eq!(guess_points(2.0, 0.0, &scale, true), 38);
    }

    #[test]
    fn test_feedback_text() {
        let scale = ChartScale::new(0.0, 100.0);
        let score = ObjectiveScore::new(Measure::Median, 42.0, 50.3, &scale, false);
        assert_eq!(score.to_string(), "Median: Off by 8.3 (+92 pts).");
    }

    #[test]
    fn test_combo_bonus_from_third_clean_round() {
        let first = RoundResult::new(vec![score(100), score(80)], false, 0);
        assert_eq!((first.combo(), first.combo_bonus()), (1, 0));

        let second = RoundResult::new(vec![score(100), score(80)], false, first.combo());
        assert_eq!((second.combo(), second.combo_bonus()), (2, 0));

        let third = RoundResult::new(vec![score(100), score(81)], false, second.combo());
        assert_eq!(third.combo(), 3);
        assert_eq!(third.combo_bonus(), 91);
        assert_eq!(third.round_score(), 272);

        let fourth = RoundResult::new(vec![score(100), score(80)], false, third.combo());
        assert_eq!(fourth.combo_bonus(), 90);
    }

    #[test]
    fn test_combo_resets_below_threshold() {
        let result = RoundResult::new(vec![score(100), score(74)], false, 5);
        assert_eq!(result.combo(), 0);
        assert_eq!(result.combo_bonus(), 0);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_round_stars() {
        assert_eq!(RoundResult::new(vec![score(90), score(90)], false, 0).stars(), StarRating::Three);
        assert_eq!(RoundResult::new(vec![score(60), score(60)], false, 0).stars(), StarRating::Two);
        assert_eq!(RoundResult::new(vec![score(59), score(60)], false, 0).stars(), StarRating::One);
        // bonus counts towards the rating
        assert_eq!(RoundResult::new(vec![score(80), score(80)], false, 2).stars(), StarRating::Three);
    }

    #[test]
    fn test_game_stars() {
        assert_eq!(StarRating::from_game(1500, 20), StarRating::Three);
        assert_eq!(StarRating::from_game(1499, 20), StarRating::Two);
        assert_eq!(StarRating::from_game(900, 20), StarRating::Two);
        assert_eq!(StarRating::from_game(899, 20), StarRating::One);
        assert_eq!(StarRating::Three.count(), 3);
    }

    #[test]
    fn test_good_round() {
        assert!(!RoundResult::new(vec![score(100)], false, 0).is_good());
        assert!(RoundResult::new(vec![score(100), score(1)], false, 0).is_good());
    }
}
