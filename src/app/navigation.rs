use super::*;

impl BeautyApp {
    /// Entra en la ruta del quiz con una sesión nueva
    pub fn open_quiz(&mut self) {
        log::info!("Opening quiz");
        self.wizard = Some(QuizWizard::with_definition(self.definition.clone()));
        self.state = AppState::Quiz;
        self.scroll_to_top = true;
        self.show_confirmation = false;
        self.message.clear();
    }

    /// Vuelve a la landing; las respuestas de la sesión se descartan
    pub fn open_landing(&mut self) {
        if self.wizard.take().is_some() {
            log::info!("Leaving quiz, session discarded");
        }
        self.state = AppState::Landing;
        self.show_confirmation = false;
        self.message.clear();
    }

    pub fn jump_to(&mut self, anchor: Anchor) {
        if self.state != AppState::Landing {
            self.open_landing();
        }
        self.pending_anchor = Some(anchor);
    }

    /// Devuelve `true` una sola vez si `anchor` estaba pendiente
    pub fn take_anchor(&mut self, anchor: Anchor) -> bool {
        if self.pending_anchor == Some(anchor) {
            self.pending_anchor = None;
            true
        } else {
            false
        }
    }
}
