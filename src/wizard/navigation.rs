use super::*;

impl QuizWizard {
    /// Siguiente paso. En el último no hace nada y devuelve `false`.
    pub fn advance(&mut self) -> bool {
        if self.current_step + 1 >= self.step_count() {
            log::debug!("advance ignored: already on the last step");
            return false;
        }
        self.current_step += 1;
        log::info!("Quiz step {}/{}", self.current_step + 1, self.step_count());
        self.emit(WizardEvent::ScrollToTop);
        true
    }

    /// Paso anterior. En el primero no hace nada y devuelve `false`.
    pub fn retreat(&mut self) -> bool {
        if self.current_step == 0 {
            log::debug!("retreat ignored: already on the first step");
            return false;
        }
        self.current_step -= 1;
        log::info!("Quiz step {}/{}", self.current_step + 1, self.step_count());
        self.emit(WizardEvent::ScrollToTop);
        true
    }
}
