use eyeball_engine::{COMBO_THRESHOLD, GameSession, ROUNDS_PER_SECTION, RoundResult, RoundState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::{measure_style, style};

/// Section progress, running score and the feedback of the current round.
pub struct HudDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> HudDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Rows needed for the largest round of the curriculum.
    pub fn height(&self) -> u16 {
        7 + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for HudDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut lines = vec![self.progress_line(), self.score_line()];
        if let Some(round) = self.session.round() {
            match round.result() {
                Some(result) => {
                    lines.extend(feedback_lines(round, result));
                }
                None => {
                    lines.push(Line::default());
                    lines.push(placement_line(round));
                    if round.hint_taken() {
                        lines.push(Line::styled(
                            "Hint: box plot shown, points are halved this round.",
                            style::HINT,
                        ));
                    }
                }
            }
        }
        Text::from(lines).render(area, buf);
    }
}

impl HudDisplay<'_> {
    fn progress_line(&self) -> Line<'static> {
        let mut spans = vec![];
        if let Some(section) = self.session.section() {
            spans.push(Span::styled(section.title, style::TITLE));
        }
        if let Some(round) = self.session.round() {
            spans.push(Span::styled(
                format!(
                    "   Round {}/{ROUNDS_PER_SECTION}   {}",
                    round.round_index() + 1,
                    round.sample().label()
                ),
                style::DIM,
            ));
        }
        Line::from(spans)
    }

    fn score_line(&self) -> Line<'static> {
        let combo = self.session.combo();
        let combo_style = if combo >= COMBO_THRESHOLD {
            style::GOOD
        } else {
            style::DEFAULT
        };
        let sections = self
            .session
            .section_scores()
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" / ");
        Line::from(vec![
            Span::styled(format!("SCORE: {}", self.session.total_score()), style::DEFAULT),
            Span::styled(format!("   COMBO: {combo}"), combo_style),
            Span::styled(format!("   SECTIONS: {sections}"), style::DIM),
        ])
    }
}

fn placement_line(round: &RoundState) -> Line<'static> {
    let placed = round.guesses().len();
    let mut spans = vec![Span::styled("Place: ", style::DEFAULT)];
    for (i, measure) in round.slots().iter().copied().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" → ", style::DIM));
        }
        let mark = if i < placed { "✓" } else { "" };
        spans.push(Span::styled(format!("{measure}{mark}"), measure_style(measure)));
    }
    spans.push(Span::styled(
        format!("  ({placed}/{})", round.required_guesses()),
        style::DIM,
    ));
    Line::from(spans)
}

fn feedback_lines(round: &RoundState, result: &RoundResult) -> Vec<Line<'static>> {
    let verdict = if result.is_good() {
        style::GOOD
    } else {
        style::WARN
    };
    let mut lines = result
        .scores()
        .iter()
        .map(|score| Line::styled(score.to_string(), measure_style(score.measure)))
        .collect::<Vec<_>>();

    let mut summary = vec![Span::styled(
        format!("Round: +{}", result.round_score()),
        verdict,
    )];
    if result.combo_bonus() > 0 {
        summary.push(Span::styled(
            format!(" (combo bonus +{})", result.combo_bonus()),
            style::GOOD,
        ));
    }
    if result.hint_taken() {
        summary.push(Span::styled(" (hint)", style::HINT));
    }
    summary.push(Span::styled(format!("  {}", result.stars()), verdict));
    lines.push(Line::from(summary));
    lines.push(Line::styled(
        format!("Tip: {}", round.sample().tip()),
        style::DIM,
    ));
    lines
}
