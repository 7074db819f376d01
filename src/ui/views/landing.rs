use crate::app::BeautyApp;
use crate::model::{Anchor, Section};
use crate::ui::helpers::big_button;
use crate::ui::layout::content_column;
use egui::{Align, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Ui};

const ACCENT: Color32 = Color32::from_rgb(214, 92, 150);

pub fn ui_landing(app: &mut BeautyApp, ctx: &Context) {
    let landing = app.landing.clone();
    let max_width = app.config.max_content_width;

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .id_salt("landing_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                content_column(ui, max_width, egui::Margin::symmetric(24, 24), |ui| {
                    let width = ui.available_width();

                    // Hero
                    ui.vertical_centered(|ui| {
                        ui.add_space(24.0);
                        ui.label(RichText::new(&landing.hero.title).size(32.0).strong());
                        ui.label(
                            RichText::new(&landing.hero.highlight)
                                .size(32.0)
                                .strong()
                                .color(ACCENT),
                        );
                        ui.add_space(12.0);
                        ui.label(&landing.hero.subtitle);
                        ui.add_space(16.0);
                        if big_button(ui, &landing.hero.primary_cta, width * 0.6, 44.0) {
                            app.open_quiz();
                        }
                        ui.add_space(6.0);
                        if ui.button(landing.hero.secondary_cta.as_str()).clicked() {
                            app.jump_to(Anchor::HowItWorks);
                        }
                        ui.add_space(16.0);

                        ui.columns(landing.hero.indicators.len().max(1), |cols| {
                            for (col, ind) in cols.iter_mut().zip(&landing.hero.indicators) {
                                col.vertical_centered(|ui| {
                                    ui.label(RichText::new(&ind.number).size(24.0).strong());
                                    ui.label(RichText::new(&ind.label).weak());
                                });
                            }
                        });
                    });
                    ui.add_space(32.0);

                    for section in &landing.sections {
                        section_block(app, ui, section);
                        ui.add_space(32.0);
                    }

                    // Llamada final
                    ui.vertical_centered(|ui| {
                        section_header(app, ui, &landing.closing);
                        ui.add_space(8.0);
                        if big_button(ui, &landing.closing_cta, width * 0.6, 44.0) {
                            app.open_quiz();
                        }
                    });
                    ui.add_space(32.0);
                    ui.separator();

                    // Footer
                    let about = ui.label(RichText::new(&landing.brand).heading().strong());
                    if app.take_anchor(Anchor::About) {
                        about.scroll_to_me(Some(Align::TOP));
                    }
                    ui.label(RichText::new(&landing.footer.tagline).weak());
                    ui.add_space(8.0);
                    ui.columns(landing.footer.columns.len().max(1), |cols| {
                        for (col, column) in cols.iter_mut().zip(&landing.footer.columns) {
                            col.label(RichText::new(&column.title).strong());
                            for link in &column.links {
                                let target = landing
                                    .nav
                                    .iter()
                                    .find(|n| &n.label == link)
                                    .map(|n| n.anchor);
                                match target {
                                    Some(anchor) => {
                                        if col.link(link.as_str()).clicked() {
                                            app.jump_to(anchor);
                                        }
                                    }
                                    None => {
                                        col.label(RichText::new(link).weak());
                                    }
                                }
                            }
                        }
                    });
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&landing.footer.copyright).small().weak());
                    });
                });
            });
    });
}

fn section_header(app: &mut BeautyApp, ui: &mut Ui, section: &Section) {
    let heading = ui.label(RichText::new(&section.title).size(24.0).strong());
    if let Some(anchor) = section.anchor {
        if app.take_anchor(anchor) {
            heading.scroll_to_me(Some(Align::TOP));
        }
    }
    ui.label(RichText::new(&section.subtitle).weak());
}

fn section_block(app: &mut BeautyApp, ui: &mut Ui, section: &Section) {
    ui.vertical_centered(|ui| section_header(app, ui, section));
    ui.add_space(12.0);

    for card in &section.cards {
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if let Some(badge) = &card.badge {
                    ui.label(RichText::new(badge).size(22.0).strong().color(ACCENT));
                }
                ui.vertical(|ui| {
                    ui.label(RichText::new(&card.title).strong());
                    ui.label(&card.body);
                });
            });
        });
        ui.add_space(6.0);
    }
}
