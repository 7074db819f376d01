use crate::model::{Field, FieldKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("{field}: index {index} out of range (len {len})")]
    IndexOutOfRange { field: Field, index: usize, len: usize },

    #[error("{operation} does not apply to {field} ({kind:?})")]
    FieldKindMismatch {
        field: Field,
        kind: FieldKind,
        operation: &'static str,
    },

    #[error("{field}: \"{value}\" is not one of its options")]
    UnknownOption { field: Field, value: String },

    #[error("submit is only available on the last step (current step {step})")]
    SubmitBeforeLastStep { step: usize },

    #[error("Invalid quiz definition: {0}")]
    InvalidDefinition(String),

    #[error("Could not parse embedded content: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
