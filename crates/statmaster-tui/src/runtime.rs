use std::io;

use crate::{App, event::TuiEvent, event_loop::EventLoop};

/// Terminal application runtime.
///
/// Owns the terminal for the duration of [`Runtime::run`] and executes an
/// [`App`].
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    /// Creates a new Runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces a redraw even if no terminal event arrives.
    pub fn request_redraw(&mut self) {
        self.events.mark_dirty();
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()`
    /// 2. Loops until `app.should_exit()` returns true
    ///    - after a state change: calls `app.draw()`
    ///    - on a terminal event: calls `app.handle_event()`
    ///
    /// The terminal is restored on return, including on errors.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
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
