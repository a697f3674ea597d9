//! Small screen-stack runtime for terminal drills on `ratatui`.
//!
//! Screens own their state, turn terminal events into transitions and draw
//! themselves. The [`Runtime`] redraws only after an event was handled.

pub use self::{
    app::App,
    runtime::Runtime,
    screen::{Screen, ScreenStack, ScreenTransition},
};

mod app;
mod event;
mod event_loop;
mod runtime;
mod screen;
