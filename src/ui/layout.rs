use crate::app::BeautyApp;
use crate::model::AppState;
use egui::{Button, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut BeautyApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let brand = RichText::new(app.landing.brand.as_str()).heading().strong();
            if ui.add(Button::new(brand).frame(false)).clicked() {
                app.open_landing();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Sin sistema de cuentas: el botón se muestra pero no hace nada
                ui.add_enabled(false, Button::new(app.landing.sign_in.as_str()))
                    .on_disabled_hover_text("Accounts are not available yet");

                match app.state {
                    AppState::Landing => {
                        let links: Vec<_> = app.landing.nav.iter().rev().cloned().collect();
                        for link in links {
                            if ui.link(link.label.as_str()).clicked() {
                                app.jump_to(link.anchor);
                            }
                        }
                    }
                    AppState::Quiz => {
                        if ui.button("← Back to home").clicked() {
                            app.open_landing();
                        }
                    }
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Columna centrada de ancho máximo `max_width`
pub fn content_column(ui: &mut Ui, max_width: f32, margin: egui::Margin, inner: impl FnOnce(&mut Ui)) {
    let w = ui.available_width().min(max_width);
    ui.vertical_centered(|ui| {
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(margin)
            .show(ui, |ui| {
                ui.set_width(w);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
            });
    });
}

/// Dos botones del mismo tamaño en una fila. Un botón con etiqueta `None`
/// deja su hueco vacío. Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: Option<&str>,
    right_label: Option<&str>,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        match left_label {
            Some(label) => {
                clicked_left = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
            }
            None => {
                ui.add_space(btn_w + ui.spacing().item_spacing.x);
            }
        }
        if let Some(label) = right_label {
            clicked_right = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
        }
    });
    (clicked_left, clicked_right)
}
