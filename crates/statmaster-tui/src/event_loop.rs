use std::io;

use crossterm::event;

use crate::event::TuiEvent;

/// Blocking event source that yields a render after every state change.
///
/// There are no ticks: a drill only changes in response to input, so the
/// loop sleeps in `event::read` until the next terminal event.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates an event loop whose first event is a render.
    pub(super) fn new() -> Self {
        Self { dirty: true }
    }

    /// Schedules a render before the next terminal event is read.
    pub(super) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns a pending render, clearing the dirty flag.
    pub(super) fn take_render(&mut self) -> Option<TuiEvent> {
        std::mem::take(&mut self.dirty).then_some(TuiEvent::Render)
    }

    /// Returns the next event, blocking on terminal input when nothing needs
    /// to be drawn.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if let Some(render) = self.take_render() {
            return Ok(render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
