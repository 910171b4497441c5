use crate::core::measure::{Measure, Objective};

/// Number of rounds played in every section.
pub const ROUNDS_PER_SECTION: usize = 5;

/// A titled group of objectives played for [`ROUNDS_PER_SECTION`] rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub objectives: &'static [Objective],
}

impl Section {
    /// Measures to place in a round of this section, in placement order.
    pub fn slots(&self) -> impl Iterator<Item = Measure> + '_ {
        self.objectives.iter().flat_map(|objective| objective.slots())
    }

    /// Number of guesses a round of this section needs before submission.
    #[must_use]
    pub fn required_guesses(&self) -> usize {
        self.objectives.iter().map(|objective| objective.slot_count()).sum()
    }
}

pub const CURRICULUM: [Section; 4] = [
    Section {
        title: "Section 1: Mean vs Median",
        objectives: &[Objective::MEAN, Objective::MEDIAN],
    },
    Section {
        title: "Section 2: Percentiles",
        objectives: &[Objective::P90, Objective::P95, Objective::P99],
    },
    Section {
        title: "Section 3: Spread",
        objectives: &[Objective::STD_DEV],
    },
    Section {
        title: "Section 4: All-in-one",
        objectives: &[Objective::MEAN, Objective::MEDIAN, Objective::P95],
    },
];

pub const SECTION_COUNT: usize = CURRICULUM.len();

/// Rounds in a full playthrough.
///
/// Game star thresholds are relative to `TOTAL_ROUNDS * 100` points even
/// though the spread section only has two slots per round.
pub const TOTAL_ROUNDS: usize = SECTION_COUNT * ROUNDS_PER_SECTION;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_guesses() {
        let required = CURRICULUM.map(|section| section.required_guesses());
        assert_eq!(required, [2, 3, 2, 3]);
        assert_eq!(TOTAL_ROUNDS, 20);
    }

    #[test]
    fn test_spread_section_slots() {
        let slots = CURRICULUM[2].slots().collect::<Vec<_>>();
        assert_eq!(slots, [Measure::StdDevLower, Measure::StdDevUpper]);
    }

    #[test]
    fn test_slots_match_required_guesses() {
        for section in &CURRICULUM {
            assert_eq!(section.slots().count(), section.required_guesses(), "{}", section.title);
        }
    }
}
