use crate::data::read_steps_embedded;
use crate::error::QuizError;
use crate::model::{Field, FieldKind, Question, QuizDefinition};
use crate::state::QuizState;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod view_models;

pub use completion::CONFIRMATION_MESSAGE;

/// Avisos para la capa de UI. No forman parte del estado del quiz.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardEvent {
    ScrollToTop,
    Submitted,
}

/// Controlador del quiz: paso actual + respuestas de una sesión.
#[derive(Debug, Clone)]
pub struct QuizWizard {
    definition: QuizDefinition,
    answers: QuizState,
    current_step: usize,
    submissions: usize,
    events: Vec<WizardEvent>,
}

impl QuizWizard {
    /// Sesión nueva con los pasos embebidos
    pub fn new() -> Result<Self, QuizError> {
        Ok(Self::with_definition(read_steps_embedded()?))
    }

    /// Sesión nueva sobre una definición que ya pasó `validate_definition`
    pub(crate) fn with_definition(definition: QuizDefinition) -> Self {
        Self {
            definition,
            answers: QuizState::default(),
            current_step: 0,
            submissions: 0,
            events: Vec::new(),
        }
    }

    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    pub fn answers(&self) -> &QuizState {
        &self.answers
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.definition.step_count()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step + 1 >= self.step_count()
    }

    /// Veces que se ha enviado esta sesión
    pub fn submissions(&self) -> usize {
        self.submissions
    }

    /// Vacía la cola de avisos pendientes
    pub fn drain_events(&mut self) -> Vec<WizardEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: WizardEvent) {
        self.events.push(event);
    }

    fn question(&self, field: Field) -> Option<&Question> {
        self.definition.question(field)
    }

    fn kind_mismatch(field: Field, operation: &'static str) -> QuizError {
        let err = QuizError::FieldKindMismatch {
            field,
            kind: field.kind(),
            operation,
        };
        log::warn!("{err}");
        err
    }

    fn ensure_kind(field: Field, allowed: &[FieldKind], operation: &'static str) -> Result<(), QuizError> {
        if allowed.contains(&field.kind()) {
            Ok(())
        } else {
            Err(Self::kind_mismatch(field, operation))
        }
    }
}
