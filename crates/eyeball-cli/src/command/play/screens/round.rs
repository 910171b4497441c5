use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use eyeball_datasets::DatasetSeed;
use eyeball_engine::{GameSession, PointerDown, PointerId};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Block,
};

use crate::view::{
    canvas::ChartCanvas,
    widgets::{ChartDisplay, HudDisplay, KeyBinding, KeyBindingDisplay, style},
};

pub const MOUSE: PointerId = PointerId(0);
pub const KEYBOARD: PointerId = PointerId(1);

const FAST_STEP: u16 = 5;

const COLLECTING_BINDINGS: &[KeyBinding] = &[
    (&["Mouse"], "Place/Drag"),
    (&["←", "→"], "Aim"),
    (&["Space"], "Place/Grab/Drop"),
    (&["H"], "Hint"),
    (&["Enter"], "Submit"),
    (&["Q"], "Quit"),
];
const REVIEW_BINDINGS: &[KeyBinding] = &[(&["Enter"], "Next Round"), (&["Q"], "Quit")];

/// Areas of the round screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RoundLayout {
    chart: Rect,
    hud: Rect,
    notice: Rect,
    help: Rect,
}

impl RoundLayout {
    fn new(area: Rect, hud_height: u16) -> Self {
        let [chart, hud, notice, help] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(hud_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            chart,
            hud,
            notice,
            help,
        }
    }
}

fn chart_block() -> Block<'static> {
    Block::bordered().title(Line::from(" Distribution ").centered())
}

fn hud_block() -> Block<'static> {
    Block::bordered()
}

/// What the app should do after the round screen handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundCommand {
    /// Nothing visible changed.
    Ignore,
    Redraw,
    Submit,
    Quit,
}

/// Pointer state and per-round presentation of the round screen.
#[derive(Debug, Default)]
pub struct RoundScreen {
    layout: RoundLayout,
    canvas: ChartCanvas,
    cursor: Option<u16>,
    keyboard_held: bool,
    jitter_round: Option<usize>,
    jitter: Vec<f64>,
    notice: Option<String>,
}

impl RoundScreen {
    /// Recomputes the layout and hands the new chart geometry to `session`.
    pub fn resize(&mut self, area: Rect, session: &mut GameSession) {
        let hud_height = HudDisplay::new(session).block(hud_block()).height();
        self.layout = RoundLayout::new(area, hud_height);
        self.canvas = ChartCanvas::new(chart_block().inner(self.layout.chart));
        session.set_viewport(self.canvas.viewport());
        self.cursor = self.cursor.map(|column| self.canvas.clamp_column(column));
    }

    /// Regenerates the scatter jitter when a new round has started.
    pub fn sync(&mut self, session: &GameSession, seed: DatasetSeed) {
        let Some(round) = session.round() else {
            return;
        };
        let number = session.rounds_started();
        if self.jitter_round == Some(number) {
            return;
        }
        self.jitter = eyeball_datasets::scatter_jitter(seed, number, round.sample().len());
        self.jitter_round = Some(number);
        self.keyboard_held = false;
        self.cursor = None;
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn release_keyboard(&mut self) {
        self.keyboard_held = false;
    }

    pub fn handle_key(&mut self, session: &mut GameSession, event: KeyEvent) -> RoundCommand {
        let step = if event.modifiers.contains(KeyModifiers::SHIFT) {
            FAST_STEP
        } else {
            1
        };
        match event.code {
            KeyCode::Left => self.move_cursor(session, |column| column.saturating_sub(step)),
            KeyCode::Right => self.move_cursor(session, |column| column.saturating_add(step)),
            KeyCode::Char(' ') => self.toggle_keyboard_pointer(session),
            KeyCode::Char('h' | 'H') => match session.take_hint() {
                Ok(()) => {
                    self.notice = None;
                    RoundCommand::Redraw
                }
                Err(e) => {
                    self.notice = Some(format!("No hint: {e}"));
                    RoundCommand::Redraw
                }
            },
            KeyCode::Enter | KeyCode::Char('s' | 'S') => RoundCommand::Submit,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => RoundCommand::Quit,
            _ => RoundCommand::Ignore,
        }
    }

    fn move_cursor<F>(&mut self, session: &mut GameSession, step: F) -> RoundCommand
    where
        F: FnOnce(u16) -> u16,
    {
        let current = self.cursor.unwrap_or_else(|| self.canvas.center_column());
        let column = self.canvas.clamp_column(step(current));
        self.cursor = Some(column);
        if self.keyboard_held {
            _ = session.pointer_move(self.canvas.column_to_x(column), KEYBOARD);
        }
        RoundCommand::Redraw
    }

    fn toggle_keyboard_pointer(&mut self, session: &mut GameSession) -> RoundCommand {
        if self.keyboard_held {
            self.keyboard_held = false;
            _ = session.pointer_up(KEYBOARD);
            return RoundCommand::Redraw;
        }
        let column = *self
            .cursor
            .get_or_insert_with(|| self.canvas.center_column());
        match session.pointer_down(self.canvas.column_to_x(column), KEYBOARD) {
            Ok(PointerDown::DragStarted { .. }) => {
                self.keyboard_held = true;
                self.notice = None;
            }
            Ok(PointerDown::Placed { .. }) => self.notice = None,
            Err(e) => self.notice = Some(format!("Cannot place: {e}")),
        }
        RoundCommand::Redraw
    }

    /// Handles a mouse event; returns whether anything visible changed.
    pub fn handle_mouse(&mut self, session: &mut GameSession, event: MouseEvent) -> bool {
        let MouseEvent {
            kind, column, row, ..
        } = event;
        let x = self.canvas.column_to_x(column);
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.canvas.contains(column, row) {
                    return false;
                }
                self.cursor = Some(column);
                if self.keyboard_held {
                    self.keyboard_held = false;
                    _ = session.pointer_up(KEYBOARD);
                }
                match session.pointer_down(x, MOUSE) {
                    Ok(_) => self.notice = None,
                    Err(e) => self.notice = Some(format!("Cannot place: {e}")),
                }
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.cursor = Some(self.canvas.clamp_column(column));
                _ = session.pointer_move(x, MOUSE);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => session.pointer_up(MOUSE),
            MouseEventKind::Moved => {
                let cursor = self
                    .canvas
                    .contains(column, row)
                    .then_some(column);
                let changed = cursor != self.cursor;
                self.cursor = cursor;
                changed
            }
            _ => false,
        }
    }

    pub fn draw(&self, frame: &mut Frame, session: &GameSession) {
        let Some(round) = session.round() else {
            return;
        };
        let chart = ChartDisplay::new(round, &self.jitter)
            .cursor(self.cursor)
            .block(chart_block());
        let hud = HudDisplay::new(session).block(hud_block());
        let bindings = if round.is_submitted() {
            REVIEW_BINDINGS
        } else {
            COLLECTING_BINDINGS
        };

        frame.render_widget(chart, self.layout.chart);
        frame.render_widget(hud, self.layout.hud);
        if let Some(notice) = &self.notice {
            frame.render_widget(
                Line::styled(notice.as_str(), style::NOTICE).centered(),
                self.layout.notice,
            );
        }
        frame.render_widget(KeyBindingDisplay::new(bindings), self.layout.help);
    }
}
