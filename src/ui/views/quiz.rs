use crate::app::BeautyApp;
use crate::ui::helpers::{big_button, option_grid, question_label};
use crate::ui::layout::{content_column, two_button_row};
use crate::view_models::{NEXT_LABEL, PREVIOUS_LABEL, QuestionBody, QuestionView, SUBMIT_LABEL};
use egui::{CentralPanel, Context, ProgressBar, RichText, ScrollArea, TextEdit, Ui};

pub fn ui_quiz(app: &mut BeautyApp, ctx: &Context) {
    // Sin sesión no hay nada que pintar: volvemos a la landing
    let Some(wizard) = app.wizard.as_ref() else {
        app.open_landing();
        return;
    };
    let view = wizard.current_step_view();
    let nav = wizard.navigation();
    let fraction = wizard.progress_fraction();
    let progress_label = wizard.progress_label();

    CentralPanel::default().show(ctx, |ui| {
        let mut scroll = ScrollArea::vertical()
            .id_salt("quiz_scroll")
            .auto_shrink([false; 2]);
        if std::mem::take(&mut app.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        scroll.show(ui, |ui| {
            let max_width = app.config.max_content_width;
            content_column(ui, max_width, egui::Margin::symmetric(24, 20), |ui| {
                let panel_width = ui.available_width();

                // Barra de progreso
                ui.add(ProgressBar::new(fraction).desired_width(panel_width));
                ui.label(RichText::new(&progress_label).weak());
                ui.add_space(12.0);

                ui.heading(RichText::new(&view.title).strong());
                ui.label(&view.subtitle);
                ui.label(RichText::new(view.answered_label()).small().weak());
                ui.add_space(16.0);

                for question in &view.questions {
                    question_block(app, ui, question, panel_width);
                    ui.add_space(18.0);
                }

                ui.separator();
                ui.add_space(8.0);

                let left = nav.show_previous.then_some(PREVIOUS_LABEL);
                let right = nav.show_next.then_some(NEXT_LABEL);
                let (prev, next) = two_button_row(ui, panel_width, left, right);
                if prev {
                    app.previous_step();
                }
                if next {
                    app.next_step();
                }
                if nav.show_submit {
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if big_button(ui, SUBMIT_LABEL, panel_width * 0.8, 44.0) {
                            app.submit_quiz();
                        }
                    });
                }

                if !app.message.is_empty() && !app.show_confirmation {
                    ui.add_space(8.0);
                    ui.colored_label(ui.visuals().warn_fg_color, &app.message);
                }
            });
        });
    });

    if app.show_confirmation {
        confirmation_window(app, ctx);
    }
}

fn question_block(app: &mut BeautyApp, ui: &mut Ui, question: &QuestionView, width: f32) {
    question_label(ui, &question.label, question.hint.as_deref(), question.answered);
    ui.add_space(6.0);

    let field = question.field;
    match &question.body {
        QuestionBody::Choice { multi, options } => {
            if let Some(value) = option_grid(ui, field.name(), options, width) {
                if *multi {
                    app.toggle(field, &value);
                } else {
                    app.choose(field, &value);
                }
            }
        }
        QuestionBody::Links { entries, add_label } => {
            for entry in entries {
                let mut buf = entry.value.clone();
                let edit = TextEdit::singleline(&mut buf)
                    .id_salt((field.name(), entry.index))
                    .hint_text(entry.placeholder.as_str())
                    .desired_width(width);
                if ui.add(edit).changed() {
                    app.edit_link(field, entry.index, buf);
                }
            }
            if ui.button(add_label.as_str()).clicked() {
                app.add_link(field);
            }
        }
        QuestionBody::Text {
            value,
            placeholder,
            multiline,
        } => {
            let mut buf = value.clone();
            let edit = if *multiline {
                TextEdit::multiline(&mut buf).desired_rows(3)
            } else {
                TextEdit::singleline(&mut buf)
            };
            let edit = edit
                .id_salt(field.name())
                .hint_text(placeholder.as_str())
                .desired_width(width);
            if ui.add(edit).changed() {
                app.edit_text(field, buf);
            }
        }
    }
}

/// Aviso modal tras enviar. Las respuestas se mantienen.
fn confirmation_window(app: &mut BeautyApp, ctx: &Context) {
    egui::Window::new("Quiz submitted")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&app.message);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    app.show_confirmation = false;
                    app.message.clear();
                }
                if ui.button("Back to home").clicked() {
                    app.open_landing();
                }
            });
        });
}
