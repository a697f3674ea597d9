use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use statmaster_tui::{Runtime, Screen, ScreenTransition};

use super::{
    model::{self, Message, PracticeModel},
    view,
};
use crate::schema::history::RoundRecord;

/// The practice drill. Completed rounds are handed to `history` when the
/// screen closes.
#[derive(Debug)]
pub struct PracticeScreen<'a> {
    model: PracticeModel,
    history: &'a mut Vec<RoundRecord>,
}

impl<'a> PracticeScreen<'a> {
    pub fn new(model: PracticeModel, history: &'a mut Vec<RoundRecord>) -> Self {
        Self { model, history }
    }
}

impl Screen for PracticeScreen<'_> {
    fn on_active(&mut self, runtime: &mut Runtime) {
        runtime.request_redraw();
    }

    fn on_close(&mut self, _runtime: &mut Runtime) {
        self.history.extend(self.model.take_completed_rounds());
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        let Some(key) = event
            .as_key_event()
            .filter(|key| key.kind == KeyEventKind::Press)
        else {
            return ScreenTransition::Stay;
        };
        if key.code == KeyCode::Char('?') {
            return ScreenTransition::Push(Box::new(HelpScreen {
                language: self.model.language(),
            }));
        }
        if let Some(message) = message_for(key) {
            model::update(&mut self.model, message);
        }
        if self.model.should_exit() {
            ScreenTransition::Exit
        } else {
            ScreenTransition::Stay
        }
    }

    fn draw(&self, frame: &mut Frame) {
        view::draw_practice(&self.model, frame);
    }
}

/// Key bindings of the drill.
fn message_for(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('n') => Some(Message::NewRound),
        KeyCode::Char(c) => Some(Message::Input(c)),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Enter => Some(Message::Submit),
        _ => None,
    }
}

/// Key reference, closed by any key.
#[derive(Debug)]
struct HelpScreen {
    language: statmaster_engine::Language,
}

impl Screen for HelpScreen {
    fn on_active(&mut self, _runtime: &mut Runtime) {}

    fn on_close(&mut self, _runtime: &mut Runtime) {}

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) -> ScreenTransition {
        match event.as_key_event() {
            Some(key) if key.kind == KeyEventKind::Press => ScreenTransition::Pop,
            _ => ScreenTransition::Stay,
        }
    }

    fn draw(&self, frame: &mut Frame) {
        view::draw_help(self.language, frame);
    }
}

#[cfg(test)]
mod tests {
    use statmaster_engine::{DatasetSeed, Language};

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_key_bindings() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(message_for(key(KeyCode::Char('q'))), Some(Message::Quit));
        assert_eq!(message_for(key(KeyCode::Esc)), Some(Message::Quit));
        assert_eq!(message_for(key(KeyCode::Char('n'))), Some(Message::NewRound));
        assert_eq!(message_for(key(KeyCode::Char('7'))), Some(Message::Input('7')));
        assert_eq!(message_for(key(KeyCode::Enter)), Some(Message::Submit));
        assert_eq!(message_for(key(KeyCode::Left)), None);
        assert_eq!(
            message_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_quit_exits_and_hands_over_history() {
        let mut history = vec![];
        let mut runtime = Runtime::new();
        let model = PracticeModel::new(Language::En, DatasetSeed::from([2; 16])).unwrap();
        let mut screen = PracticeScreen::new(model, &mut history);

        // answer every question with zero, then quit
        let question_count = screen.model.round().questions().len();
        for _ in 0..question_count {
            assert!(matches!(
                screen.handle_event(&mut runtime, &press(KeyCode::Char('0'))),
                ScreenTransition::Stay
            ));
            let _ = screen.handle_event(&mut runtime, &press(KeyCode::Enter));
        }
        assert!(screen.model.round().is_complete());

        let transition = screen.handle_event(&mut runtime, &press(KeyCode::Char('q')));
        assert!(matches!(transition, ScreenTransition::Exit));
        screen.on_close(&mut runtime);
        drop(screen);

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].verdicts.len(), question_count);
    }

    #[test]
    fn test_question_mark_opens_help() {
        let mut history = vec![];
        let mut runtime = Runtime::new();
        let model = PracticeModel::new(Language::Fr, DatasetSeed::from([2; 16])).unwrap();
        let mut screen = PracticeScreen::new(model, &mut history);
        let transition = screen.handle_event(&mut runtime, &press(KeyCode::Char('?')));
        assert!(matches!(transition, ScreenTransition::Push(_)));
    }
}
