// src/view_models.rs

use crate::model::Field;

#[derive(Clone, Debug, PartialEq)]
pub struct StepView {
    pub idx: usize,    // índice 0-based del paso
    pub number: usize, // número "humano" (1..=6)
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<QuestionView>,
    pub answered: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub field: Field,
    pub label: String,
    pub hint: Option<String>,
    pub answered: bool,
    pub body: QuestionBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuestionBody {
    Choice {
        multi: bool,
        options: Vec<OptionView>,
    },
    Links {
        entries: Vec<LinkEntryView>,
        add_label: String,
    },
    Text {
        value: String,
        placeholder: String,
        multiline: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub hint: Option<String>,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinkEntryView {
    pub index: usize,
    pub value: String,
    pub placeholder: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationView {
    pub show_previous: bool,
    pub show_next: bool,
    pub show_submit: bool,
}

pub const PREVIOUS_LABEL: &str = "← Previous";
pub const NEXT_LABEL: &str = "Next →";
pub const SUBMIT_LABEL: &str = "Get My Recommendations ✨";

impl StepView {
    pub fn answered_label(&self) -> String {
        format!("{}/{} answered", self.answered, self.questions.len())
    }
}

impl OptionView {
    pub fn label(&self) -> String {
        match &self.hint {
            Some(h) => format!("{}\n{}", self.label, h),
            None => self.label.clone(),
        }
    }
}
