use std::fmt;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{App, Runtime};

/// One screen of the application.
///
/// # Lifecycle
///
/// ```text
/// Create
///   ↓
/// on_active() ←──────────┐
///   ↓                     │ child screen pops
/// (foreground) ───────────┘
///   ↓
/// on_close()  ← Pop/Replace/Exit only
///   ↓
/// Drop
/// ```
///
/// A screen keeps its state while a child screen is pushed on top of it.
///
/// ```rust
/// use crossterm::event::{Event, KeyCode, KeyEventKind};
/// use ratatui::{Frame, widgets::Paragraph};
/// use statmaster_tui::{Runtime, Screen, ScreenTransition};
///
/// #[derive(Debug, Default)]
/// struct Counter {
///     presses: u32,
/// }
///
/// impl Screen for Counter {
///     fn on_active(&mut self, _runtime: &mut Runtime) {}
///     fn on_close(&mut self, _runtime: &mut Runtime) {}
///
///     fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
///         let key = event.as_key_event().filter(|key| key.kind == KeyEventKind::Press);
///         match key.map(|key| key.code) {
///             Some(KeyCode::Char('q')) => ScreenTransition::Exit,
///             Some(_) => {
///                 self.presses += 1;
///                 ScreenTransition::Stay
///             }
///             None => ScreenTransition::Stay,
///         }
///     }
///
///     fn draw(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(self.presses.to_string()), frame.area());
///     }
/// }
/// ```
pub trait Screen: fmt::Debug {
    /// Called when this screen becomes the foreground screen.
    ///
    /// This is called on startup for the initial screen, when the screen is
    /// pushed, and when popping back to it from a child screen.
    fn on_active(&mut self, runtime: &mut Runtime);

    /// Called once when this screen is removed from the stack.
    ///
    /// Not called when another screen is pushed on top. Use this to persist
    /// state before the screen is dropped.
    fn on_close(&mut self, runtime: &mut Runtime);

    /// Handles a terminal event and returns the transition to apply.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) -> ScreenTransition;

    /// Renders the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Screen transition result from event handling.
#[derive(Debug)]
pub enum ScreenTransition {
    /// Stay in the current screen.
    Stay,

    /// Push a new screen on top of the current one.
    Push(Box<dyn Screen>),

    /// Close the current screen and return to the previous one.
    Pop,

    /// Close the current screen and show a new one in its place.
    Replace(Box<dyn Screen>),

    /// Close every screen and exit.
    Exit,
}

/// Stack of screens; only the top one receives events and is drawn.
#[derive(Debug)]
pub struct ScreenStack<'a> {
    screens: Vec<Box<dyn Screen + 'a>>,
    should_exit: bool,
}

impl<'a> ScreenStack<'a> {
    /// Creates a new screen stack with an initial screen.
    #[must_use]
    pub fn new(initial: Box<dyn Screen + 'a>) -> Self {
        Self {
            screens: vec![initial],
            should_exit: false,
        }
    }

    fn apply_transition(&mut self, runtime: &mut Runtime, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}

            ScreenTransition::Push(mut new_screen) => {
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Pop => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_close(runtime);
                }
                if let Some(prev_screen) = self.screens.last_mut() {
                    prev_screen.on_active(runtime);
                }
            }

            ScreenTransition::Replace(mut new_screen) => {
                if let Some(mut old_screen) = self.screens.pop() {
                    old_screen.on_close(runtime);
                }
                new_screen.on_active(runtime);
                self.screens.push(new_screen);
            }

            ScreenTransition::Exit => {
                while let Some(mut screen) = self.screens.pop() {
                    screen.on_close(runtime);
                }
                self.should_exit = true;
            }
        }
    }
}

impl App for ScreenStack<'_> {
    fn init(&mut self, runtime: &mut Runtime) {
        if let Some(screen) = self.screens.last_mut() {
            screen.on_active(runtime);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit || self.screens.is_empty()
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: Event) {
        if let Some(current) = self.screens.last_mut() {
            let transition = current.handle_event(runtime, &event);
            self.apply_transition(runtime, transition);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        if let Some(current) = self.screens.last() {
            current.draw(frame);
        }
    }
}
