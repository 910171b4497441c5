use std::path::Path;

use eyeball_engine::GameOverSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::style;

pub struct SummaryDisplay<'a> {
    summary: &'a GameOverSummary,
    saved: Option<&'a Path>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> SummaryDisplay<'a> {
    pub fn new(summary: &'a GameOverSummary) -> Self {
        Self {
            summary,
            saved: None,
            block: None,
        }
    }

    /// Path the result record was written to, if any.
    pub fn saved(self, saved: Option<&'a Path>) -> Self {
        Self { saved, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn height(&self) -> u16 {
        let sections = u16::try_from(self.summary.sections.len()).unwrap_or(u16::MAX);
        sections.saturating_add(6) + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for SummaryDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let summary = self.summary;
        let mut lines = vec![
            Line::styled("GAME OVER", style::TITLE),
            Line::styled(summary.stars.to_string(), style::WARN),
            Line::from(vec![
                Span::styled("Final score: ", style::DEFAULT),
                Span::styled(
                    format!("{} / {}", summary.final_score, summary.max_score),
                    style::TITLE,
                ),
            ]),
            Line::default(),
        ];
        let title_width = summary
            .sections
            .iter()
            .map(|section| section.title.chars().count())
            .max()
            .unwrap_or(0);
        lines.extend(summary.sections.iter().map(|section| {
            Line::from(vec![
                Span::styled(format!("{:<title_width$}", section.title), style::DIM),
                Span::styled(format!("  {:>5}", section.score), style::DEFAULT),
            ])
        }));
        lines.push(Line::default());
        if let Some(path) = self.saved {
            lines.push(Line::styled(
                format!("Result saved to {}", path.display()),
                style::DIM,
            ));
        }
        Text::from(lines).centered().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use eyeball_engine::{SectionScore, StarRating};

    use super::*;

    #[test]
    fn test_lists_sections() {
        let summary = GameOverSummary {
            final_score: 1450,
            max_score: 2000,
            stars: StarRating::Two,
            sections: vec![
                SectionScore {
                    title: "Section 1: Mean vs Median",
                    score: 900,
                },
                SectionScore {
                    title: "Section 2: Percentiles",
                    score: 550,
                },
            ],
        };
        let display = SummaryDisplay::new(&summary).saved(Some(Path::new("data/results/r.json")));
        let area = Rect::new(0, 0, 60, display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        let text = (0..area.height)
            .map(|row| (0..area.width).map(|column| buf[(column, row)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("1450 / 2000"), "{text}");
        assert!(text.contains("Section 2: Percentiles"), "{text}");
        assert!(text.contains("data/results/r.json"), "{text}");
    }
}
