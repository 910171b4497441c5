use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Keys and the action they trigger, e.g. `(&["←", "→"], "Move")`.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// One-line, centred help bar.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }
}

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const SEPARATOR_STYLE: Style = Style::new().fg(Color::DarkGray);
const ACTION_STYLE: Style = Style::new().fg(Color::Gray);

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let spans = self
            .bindings
            .iter()
            .enumerate()
            .flat_map(|(i, (keys, action))| {
                let separator = (i > 0).then(|| Span::styled("  ", SEPARATOR_STYLE));
                let keys = Span::styled(keys.join("/"), KEY_STYLE);
                let action = Span::styled(format!(" {action}"), ACTION_STYLE);
                separator.into_iter().chain([keys, action])
            })
            .collect::<Vec<_>>();
        Line::from(spans).centered().render(area, buf);
    }
}
