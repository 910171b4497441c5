use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
};

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Manages the event loop and executes applications that implement the `App` trait.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
    mouse_capture: bool,
}

/// Keeps mouse reporting enabled while alive.
struct MouseCapture;

impl MouseCapture {
    fn enable() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        _ = execute!(io::stdout(), DisableMouseCapture);
    }
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables mouse events for the next `run()`.
    pub fn set_mouse_capture(&mut self, enabled: bool) {
        self.mouse_capture = enabled;
    }

    /// Suppresses the redraw that would follow the event being handled.
    ///
    /// Use this for events that did not change anything visible.
    pub fn skip_render(&mut self) {
        self.events.clear_dirty();
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()` for initialization
    /// 2. Delivers a `Resize` with the terminal size
    /// 3. Runs the event loop until `app.should_exit()` returns true
    ///    - `Render`: calls `app.draw()`
    ///    - terminal events: call `app.handle_event()`
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            let _mouse = self.mouse_capture.then(MouseCapture::enable).transpose()?;
            let size = terminal.size()?;
            app.handle_event(&mut self, Event::Resize(size.width, size.height));

            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, event);
                    }
                }
            }
            Ok(())
        })
    }
}
