use super::*;
use crate::view_models::{
    LinkEntryView, NavigationView, OptionView, QuestionBody, QuestionView, StepView,
};

impl QuizWizard {
    pub fn current_step_view(&self) -> StepView {
        self.step_view(self.current_step)
            .unwrap_or_else(|| StepView {
                idx: self.current_step,
                number: self.current_step + 1,
                title: String::new(),
                subtitle: String::new(),
                questions: Vec::new(),
                answered: 0,
            })
    }

    /// Vista de un paso con los valores actuales de cada campo
    pub fn step_view(&self, idx: usize) -> Option<StepView> {
        let step = self.definition.steps.get(idx)?;
        let questions: Vec<QuestionView> = step
            .questions
            .iter()
            .map(|q| QuestionView {
                field: q.field,
                label: q.label.clone(),
                hint: q.hint.clone(),
                answered: self.answers.is_answered(q.field),
                body: self.question_body(q),
            })
            .collect();
        let answered = questions.iter().filter(|q| q.answered).count();
        Some(StepView {
            idx,
            number: idx + 1,
            title: step.title.clone(),
            subtitle: step.subtitle.clone(),
            questions,
            answered,
        })
    }

    pub fn navigation(&self) -> NavigationView {
        NavigationView {
            show_previous: !self.is_first_step(),
            show_next: !self.is_last_step(),
            show_submit: self.is_last_step(),
        }
    }

    fn question_body(&self, q: &Question) -> QuestionBody {
        let placeholder = q.placeholder.clone().unwrap_or_default();
        match q.field.kind() {
            FieldKind::SingleChoice | FieldKind::MultiChoice => QuestionBody::Choice {
                multi: q.field.kind() == FieldKind::MultiChoice,
                options: q
                    .options
                    .iter()
                    .map(|o| OptionView {
                        label: o.clone(),
                        hint: q.option_hints.get(o).cloned(),
                        selected: self.answers.is_selected(q.field, o),
                    })
                    .collect(),
            },
            FieldKind::LinkList => {
                let entries = self
                    .answers
                    .links(q.field)
                    .map(|links| {
                        links
                            .iter()
                            .enumerate()
                            .map(|(i, value)| LinkEntryView {
                                index: i,
                                value: value.clone(),
                                placeholder: placeholder.replace("{n}", &(i + 1).to_string()),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                QuestionBody::Links {
                    entries,
                    add_label: q.add_label.clone().unwrap_or_else(|| "+ Add another".into()),
                }
            }
            FieldKind::Url | FieldKind::FreeText => QuestionBody::Text {
                value: self.answers.text(q.field).cloned().unwrap_or_default(),
                placeholder,
                multiline: q.field.kind() == FieldKind::FreeText,
            },
        }
    }
}
