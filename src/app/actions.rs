use super::*;
use crate::model::Field;

impl BeautyApp {
    pub fn next_step(&mut self) {
        if let Some(w) = self.wizard.as_mut() {
            w.advance();
        }
        self.process_wizard_events();
    }

    pub fn previous_step(&mut self) {
        if let Some(w) = self.wizard.as_mut() {
            w.retreat();
        }
        self.process_wizard_events();
    }

    pub fn choose(&mut self, field: Field, value: &str) {
        self.apply(|w| w.set_single_value(field, value));
    }

    pub fn toggle(&mut self, field: Field, value: &str) {
        self.apply(|w| w.toggle_set_member(field, value).map(|_| ()));
    }

    pub fn edit_text(&mut self, field: Field, value: String) {
        self.apply(|w| w.set_single_value(field, value));
    }

    pub fn edit_link(&mut self, field: Field, index: usize, value: String) {
        self.apply(|w| w.set_link_at(field, index, value));
    }

    pub fn add_link(&mut self, field: Field) {
        self.apply(|w| w.append_link(field).map(|_| ()));
    }

    pub fn submit_quiz(&mut self) {
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        match w.submit(&mut self.sink) {
            Ok(confirmation) => self.message = confirmation.to_owned(),
            Err(e) => self.message = e.to_string(),
        }
        self.process_wizard_events();
    }

    fn apply(&mut self, op: impl FnOnce(&mut QuizWizard) -> Result<(), QuizError>) {
        let Some(w) = self.wizard.as_mut() else {
            return;
        };
        match op(w) {
            Ok(()) => self.message.clear(),
            Err(e) => self.message = e.to_string(),
        }
        self.process_wizard_events();
    }
}
