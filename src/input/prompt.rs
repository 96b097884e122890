use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Actor;

/// Longest colour name we bother keeping
const MAX_INPUT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Editing,
    Submit(String),
    Cancel,
    /// Ctrl+C quits the game even while typing
    Quit,
}

/// Free-text colour entry for one actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPrompt {
    actor: Actor,
    buffer: String,
}

impl ColorPrompt {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            buffer: String::new(),
        }
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn input(&self) -> &str {
        &self.buffer
    }

    pub fn title(&self) -> String {
        format!(
            "Enter {} color (e.g., red, green, blue):",
            self.actor.label()
        )
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> PromptEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PromptEvent::Quit;
        }

        match key.code {
            KeyCode::Enter => PromptEvent::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Esc => PromptEvent::Cancel,
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptEvent::Editing
            }
            KeyCode::Char(ch) => {
                if self.buffer.chars().count() < MAX_INPUT {
                    self.buffer.push(ch);
                }
                PromptEvent::Editing
            }
            _ => PromptEvent::Editing,
        }
    }
}
