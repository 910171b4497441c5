use std::path::Path;

use eyeball_engine::GameOverSummary;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    widgets::Block,
};

use crate::view::widgets::{KeyBinding, KeyBindingDisplay, SummaryDisplay};

const BINDINGS: &[KeyBinding] = &[(&["R", "Enter"], "Play Again"), (&["Q"], "Quit")];

pub fn draw(frame: &mut Frame, summary: &GameOverSummary, saved: Option<&Path>) {
    let [main_area, help_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

    let display = SummaryDisplay::new(summary)
        .saved(saved)
        .block(Block::bordered());
    let [main_area] = Layout::vertical([Constraint::Length(display.height())])
        .flex(Flex::Center)
        .areas(main_area);
    let [main_area] = Layout::horizontal([Constraint::Max(64)])
        .flex(Flex::Center)
        .areas(main_area);

    frame.render_widget(display, main_area);
    frame.render_widget(KeyBindingDisplay::new(BINDINGS), help_area);
}
