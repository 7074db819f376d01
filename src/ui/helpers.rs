// src/ui/helpers.rs
use crate::view_models::OptionView;
use egui::{Button, RichText, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(RichText::new(label).strong()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Rejilla de opciones; las seleccionadas salen resaltadas.
/// Devuelve la etiqueta pulsada, si la hay.
pub fn option_grid(ui: &mut Ui, id: &str, options: &[OptionView], width: f32) -> Option<String> {
    let columns = if width > 560.0 { 3 } else { 2 };
    let btn_w = (width - 8.0 * (columns as f32 - 1.0)) / columns as f32;
    let mut clicked = None;

    egui::Grid::new(id)
        .num_columns(columns)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (i, option) in options.iter().enumerate() {
                let height = if option.hint.is_some() { 48.0 } else { 34.0 };
                let btn = Button::new(option.label())
                    .selected(option.selected)
                    .min_size(Vec2::new(btn_w, height));
                if ui.add(btn).clicked() {
                    clicked = Some(option.label.clone());
                }
                if (i + 1) % columns == 0 {
                    ui.end_row();
                }
            }
        });

    clicked
}

pub fn question_label(ui: &mut Ui, label: &str, hint: Option<&str>, answered: bool) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(label).strong());
        if answered {
            ui.label("✔");
        }
    });
    if let Some(hint) = hint {
        ui.label(RichText::new(hint).weak().italics());
    }
}
