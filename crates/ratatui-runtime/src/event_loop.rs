use std::io;

use crossterm::event::{self, Event};

use crate::event::TuiEvent;

/// Where terminal events come from.
pub(super) trait EventSource {
    /// Blocks until the next event is available.
    fn read(&mut self) -> io::Result<Event>;
}

#[derive(Debug, Default)]
pub(super) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Event loop state management.
///
/// Alternates between input and rendering: a `Render` is returned whenever
/// the screen is dirty, otherwise the loop blocks on the source.
#[derive(Debug)]
pub(super) struct EventLoop<S = CrosstermEvents> {
    source: S,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(CrosstermEvents)
    }
}

impl<S> EventLoop<S>
where
    S: EventSource,
{
    /// Creates a new `EventLoop`. The first event is always `Render`.
    pub(super) fn new(source: S) -> Self {
        Self {
            source,
            dirty: true,
        }
    }

    /// Drops the redraw scheduled by the last event.
    pub(super) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Returns the next event.
    ///
    /// Every terminal event marks the screen dirty, so the call after it
    /// yields `Render` unless [`Self::clear_dirty`] was called in between.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = self.source.read()?;
        self.dirty = true;
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crossterm::event::{KeyCode, KeyEvent};

    use super::*;

    impl EventSource for VecDeque<Event> {
        fn read(&mut self) -> io::Result<Event> {
            self.pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::from(KeyCode::Char(c)))
    }

    #[test]
    fn test_renders_after_every_event() {
        let mut events = EventLoop::new(VecDeque::from([key('a'), key('b')]));
        assert!(events.next().unwrap().is_render());
        assert!(events.next().unwrap().is_crossterm());
        assert!(events.next().unwrap().is_render());
        assert!(events.next().unwrap().is_crossterm());
        assert!(events.next().unwrap().is_render());
        assert_eq!(
            events.next().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_clear_dirty_skips_render() {
        let mut events = EventLoop::new(VecDeque::from([key('a'), key('b')]));
        assert!(events.next().unwrap().is_render());
        assert!(events.next().unwrap().is_crossterm());
        events.clear_dirty();
        let TuiEvent::Crossterm(event) = events.next().unwrap() else {
            panic!("expected terminal event");
        };
        assert_eq!(event, key('b'));
    }
}
