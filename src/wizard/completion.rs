use super::*;
use crate::submission::SubmissionSink;

pub const CONFIRMATION_MESSAGE: &str =
    "Quiz submitted! Your personalized recommendations are being generated.";

impl QuizWizard {
    /// Entrega el snapshot completo a `sink`. Sólo en el último paso.
    ///
    /// Las respuestas no se borran: se puede editar y volver a enviar.
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<&'static str, QuizError> {
        if !self.is_last_step() {
            let err = QuizError::SubmitBeforeLastStep {
                step: self.current_step,
            };
            log::warn!("{err}");
            return Err(err);
        }

        sink.submit(&self.answers);
        self.submissions += 1;
        log::info!(
            "Quiz submission #{} ({} of {} fields answered)",
            self.submissions,
            self.answered_count(),
            Field::ALL.len()
        );
        self.emit(WizardEvent::Submitted);
        Ok(CONFIRMATION_MESSAGE)
    }

    pub fn answered_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|f| self.answers.is_answered(**f))
            .count()
    }
}
