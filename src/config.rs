/// Ajustes de ventana y maquetación
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub max_content_width: f32,
    /// Nivel de log por defecto si no hay `RUST_LOG`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Beauty Outsiders".to_owned(),
            window_size: [960.0, 780.0],
            min_window_size: [480.0, 560.0],
            max_content_width: 720.0,
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }

    /// Filtro para `pretty_env_logger` cuando no hay `RUST_LOG`
    pub fn log_filter(&self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_column_fits_inside_the_window() {
        let cfg = AppConfig::default();
        assert!(cfg.max_content_width <= cfg.window_size[0]);
        assert!(cfg.min_window_size[0] <= cfg.window_size[0]);
        assert!(cfg.min_window_size[1] <= cfg.window_size[1]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_options_carry_title_and_sizes() {
        let cfg = AppConfig::default();
        let opts = cfg.native_options();
        assert_eq!(opts.viewport.title.as_deref(), Some("Beauty Outsiders"));
        assert_eq!(opts.viewport.inner_size, Some(egui::vec2(960.0, 780.0)));
        assert_eq!(opts.viewport.min_inner_size, Some(egui::vec2(480.0, 560.0)));
    }

    #[test]
    fn log_filter_targets_this_crate() {
        assert_eq!(AppConfig::default().log_filter(), "beauty_quiz=info");
    }
}
