use eyeball_engine::Measure;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Block as BlockWidget,
};

pub use self::{
    chart_display::*, hud_display::*, key_binding_display::*, summary_display::*,
};

mod chart_display;
mod hud_display;
mod key_binding_display;
mod summary_display;

mod color {
    use ratatui::style::Color;

    pub const GREEN: Color = Color::Rgb(76, 175, 80);
    pub const BLUE: Color = Color::Rgb(33, 150, 243);
    pub const AMBER: Color = Color::Rgb(255, 193, 7);
    pub const ORANGE: Color = Color::Rgb(255, 152, 0);
    pub const RED: Color = Color::Rgb(244, 67, 54);
    pub const PURPLE: Color = Color::Rgb(171, 71, 188);
    pub const CARROT: Color = Color::Rgb(230, 126, 34);
    pub const SLATE: Color = Color::Rgb(84, 110, 122);
    pub const SILVER: Color = Color::Rgb(224, 224, 224);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub fn measure_color(measure: Measure) -> Color {
    match measure {
        Measure::Mean => color::GREEN,
        Measure::Median => color::BLUE,
        Measure::P90 => color::AMBER,
        Measure::P95 => color::ORANGE,
        Measure::P99 => color::RED,
        Measure::StdDevLower | Measure::StdDevUpper => color::PURPLE,
    }
}

pub mod style {
    use ratatui::style::{Modifier, Style};

    use super::color;

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const DIM: Style = Style::new().fg(color::GRAY);
    pub const TITLE: Style = Style::new().fg(color::WHITE).add_modifier(Modifier::BOLD);

    pub const BAR: Style = Style::new().fg(color::SILVER);
    pub const POINT: Style = Style::new().fg(color::SLATE);
    pub const HINT: Style = Style::new().fg(color::CARROT);
    pub const AXIS: Style = Style::new().fg(color::GRAY);
    pub const CURSOR: Style = Style::new().fg(color::GRAY);

    pub const GOOD: Style = Style::new().fg(color::GREEN).add_modifier(Modifier::BOLD);
    pub const WARN: Style = Style::new().fg(color::AMBER).add_modifier(Modifier::BOLD);
    pub const NOTICE: Style = Style::new().fg(color::ORANGE);
}

pub fn measure_style(measure: Measure) -> Style {
    Style::new().fg(measure_color(measure))
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}
