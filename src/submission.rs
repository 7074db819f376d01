use crate::state::QuizState;

/// Receptor del snapshot al enviar el quiz. No hay respuesta ni reintentos.
pub trait SubmissionSink {
    fn submit(&mut self, snapshot: &QuizState);
}

impl<F: FnMut(&QuizState)> SubmissionSink for F {
    fn submit(&mut self, snapshot: &QuizState) {
        self(snapshot)
    }
}

/// Vuelca el snapshot como JSON en el log.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogSubmission;

impl SubmissionSink for LogSubmission {
    fn submit(&mut self, snapshot: &QuizState) {
        match serde_json::to_string(snapshot) {
            Ok(json) => log::info!("Quiz submitted: {json}"),
            Err(e) => log::error!("Quiz submitted, but the snapshot could not be serialized: {e}"),
        }
    }
}
