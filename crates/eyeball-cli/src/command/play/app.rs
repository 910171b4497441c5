use std::path::{Path, PathBuf};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use eyeball_datasets::DatasetSeed;
use eyeball_engine::{GamePhase, GameSession, SubmitOutcome};
use ratatui::{Frame, layout::Rect};
use ratatui_runtime::{App, Runtime};

use crate::{
    command::play::screens::{
        game_over, onboarding,
        round::{RoundCommand, RoundScreen},
    },
    record::GameRecord,
    settings::SettingsFile,
};

#[derive(Debug)]
pub struct PlayApp {
    session: GameSession,
    store: SettingsFile,
    seed: DatasetSeed,
    round_screen: RoundScreen,
    results_dir: Option<PathBuf>,
    saved_result: Option<PathBuf>,
    is_exiting: bool,
}

impl PlayApp {
    /// Creates the app; game-over summaries are saved under `results_dir`
    /// when it is given.
    pub fn new(
        session: GameSession,
        store: SettingsFile,
        seed: DatasetSeed,
        results_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            session,
            store,
            seed,
            round_screen: RoundScreen::default(),
            results_dir,
            saved_result: None,
            is_exiting: false,
        }
    }

    pub fn saved_result(&self) -> Option<&Path> {
        self.saved_result.as_deref()
    }

    fn handle_key(&mut self, event: KeyEvent) -> bool {
        match self.session.phase() {
            GamePhase::Onboarding => match event.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Err(e) = self.session.complete_onboarding(&mut self.store) {
                        log::warn!(
                            "failed to record onboarding in {}: {e}",
                            self.store.path().display()
                        );
                    }
                    true
                }
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.is_exiting = true;
                    true
                }
                _ => false,
            },
            GamePhase::InRound => match self.round_screen.handle_key(&mut self.session, event) {
                RoundCommand::Ignore => false,
                RoundCommand::Redraw => true,
                RoundCommand::Submit => {
                    self.submit();
                    true
                }
                RoundCommand::Quit => {
                    self.is_exiting = true;
                    true
                }
            },
            GamePhase::GameOver => match event.code {
                KeyCode::Char('r' | 'R') | KeyCode::Enter => {
                    self.session.restart();
                    self.saved_result = None;
                    true
                }
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                    self.is_exiting = true;
                    true
                }
                _ => false,
            },
        }
    }

    fn submit(&mut self) {
        match self.session.submit() {
            Ok(SubmitOutcome::Scored) => {
                self.round_screen.release_keyboard();
                self.round_screen.clear_notice();
            }
            Ok(SubmitOutcome::Advanced) => {}
            Ok(SubmitOutcome::GameOver) => self.save_result(),
            Err(e) => self.round_screen.set_notice(format!("Cannot submit: {e}")),
        }
    }

    fn save_result(&mut self) {
        let (Some(dir), Some(summary)) = (&self.results_dir, self.session.summary()) else {
            return;
        };
        match GameRecord::new(self.seed, summary).save(dir) {
            Ok(path) => self.saved_result = Some(path),
            Err(e) => log::error!("failed to save result: {e:#}"),
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_mouse_capture(true);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        let changed = match event {
            Event::Resize(width, height) => {
                self.round_screen
                    .resize(Rect::new(0, 0, width, height), &mut self.session);
                true
            }
            Event::Key(event) if event.kind != KeyEventKind::Release => self.handle_key(event),
            Event::Mouse(event) if self.session.phase().is_in_round() => {
                self.round_screen.handle_mouse(&mut self.session, event)
            }
            _ => false,
        };
        self.round_screen.sync(&self.session, self.seed);
        if !changed {
            runtime.skip_render();
        }
    }

    fn draw(&self, frame: &mut Frame) {
        match self.session.phase() {
            GamePhase::Onboarding => onboarding::draw(frame),
            GamePhase::InRound => self.round_screen.draw(frame, &self.session),
            GamePhase::GameOver => {
                if let Some(summary) = self.session.summary() {
                    game_over::draw(frame, summary, self.saved_result());
                }
            }
        }
    }
}
