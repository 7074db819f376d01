mod helpers;
pub mod layout;
pub mod views;

use crate::app::BeautyApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for BeautyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por ruta
        match self.state {
            AppState::Landing => views::landing::ui_landing(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
        }
    }
}
