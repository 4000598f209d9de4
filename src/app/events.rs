//! Event handling logic for the App.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::app::{AppMode, EntryState};
use crate::tui::widgets::SliderInput;

/// Returns true for Ctrl+C.
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl App {
    /// Handles a key event.
    ///
    /// Ctrl+C quits from any mode. While the onboarding overlay is shown,
    /// every other key except the dismissal keys is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if is_interrupt(&key) {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Onboarding => self.handle_onboarding_key(key),
            AppMode::Main => {
                if self.entry.is_some() {
                    self.handle_entry_key(key);
                } else {
                    self.handle_main_key(key);
                }
            }
        }
    }

    /// Handles keys while the onboarding overlay is shown.
    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'q') => {
                self.dismiss_onboarding();
            }
            _ => {}
        }
    }

    /// Handles keys in the main view.
    fn handle_main_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.focus = self.focus.prev();
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.adjust(&SliderInput::Decrement);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.adjust(&SliderInput::Increment);
            }
            KeyCode::Home => {
                self.adjust(&SliderInput::ToMin);
            }
            KeyCode::End => {
                self.adjust(&SliderInput::ToMax);
            }
            KeyCode::Enter | KeyCode::Char('g') => {
                self.generate();
            }
            KeyCode::Char(c) if EntryState::accepts(c) => {
                self.entry = Some(EntryState::starting_with(c));
            }
            _ => {}
        }
    }

    /// Handles keys while a value is being typed.
    fn handle_entry_key(&mut self, key: KeyEvent) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if EntryState::accepts(c) => entry.buffer.push(c),
            KeyCode::Backspace => {
                entry.buffer.pop();
            }
            KeyCode::Esc => self.entry = None,
            KeyCode::Enter => {
                if let Some(entry) = self.entry.take() {
                    self.adjust(&SliderInput::Entry(entry.buffer));
                }
            }
            _ => {}
        }
    }
}
