use eyeball_engine::{COMBO_THRESHOLD, CURRICULUM, MAX_POINTS, ROUNDS_PER_SECTION};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, style};

const BINDINGS: &[KeyBinding] = &[(&["Enter", "Space"], "Start"), (&["Q"], "Quit")];

fn intro() -> Text<'static> {
    let mut lines = vec![
        Line::styled("Eyeball Statistics", style::TITLE).centered(),
        Line::default(),
        Line::styled(
            "Each round shows a sample as a histogram with its points scattered underneath. \
             Estimate the requested measures by eye and place a marker for each one.",
            style::DEFAULT,
        ),
        Line::default(),
        Line::styled(
            "Click the chart to place the next marker, click a marker to drag it. \
             Without a mouse, aim with ←/→ (Shift for larger steps) and press Space to place, \
             grab or drop.",
            style::DEFAULT,
        ),
        Line::default(),
        Line::styled(
            format!(
                "A marker right on the true value scores {MAX_POINTS} points, falling to zero \
                 when it is off by the whole range of the data. {COMBO_THRESHOLD} clean rounds \
                 in a row start a combo worth 50% extra. H shows a box plot, at the cost of \
                 half the points of that round."
            ),
            style::DEFAULT,
        ),
        Line::default(),
        Line::styled(
            format!(
                "{} sections of {ROUNDS_PER_SECTION} rounds:",
                CURRICULUM.len()
            ),
            style::DEFAULT,
        ),
    ];
    lines.extend(
        CURRICULUM
            .iter()
            .map(|section| Line::styled(format!("  {}", section.title), style::DIM)),
    );
    Text::from(lines)
}

pub fn draw(frame: &mut Frame) {
    let [main_area, help_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
    let [main_area] = Layout::horizontal([Constraint::Max(72)])
        .flex(Flex::Center)
        .areas(main_area);

    let intro = Paragraph::new(intro())
        .wrap(Wrap { trim: true })
        .block(Block::bordered().padding(Padding::uniform(1)));
    frame.render_widget(intro, main_area);
    frame.render_widget(KeyBindingDisplay::new(BINDINGS), help_area);
}
