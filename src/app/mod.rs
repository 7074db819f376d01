use crate::config::AppConfig;
use crate::data::{read_landing_embedded, read_steps_embedded};
use crate::error::QuizError;
use crate::model::{Anchor, AppState, LandingContent, QuizDefinition};
use crate::submission::LogSubmission;
use crate::wizard::{QuizWizard, WizardEvent};

// Submódulos
pub mod actions;
pub mod navigation;

/// Estado de la aplicación: ruta actual + sesión del quiz (si la hay).
pub struct BeautyApp {
    pub config: AppConfig,
    pub landing: LandingContent,
    pub definition: QuizDefinition,
    pub state: AppState,
    /// Sólo existe mientras se está en la ruta del quiz
    pub wizard: Option<QuizWizard>,
    pub sink: LogSubmission,
    pub message: String,
    pub show_confirmation: bool,
    pub scroll_to_top: bool,
    pub pending_anchor: Option<Anchor>,
}

impl BeautyApp {
    pub fn new() -> Result<Self, QuizError> {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Result<Self, QuizError> {
        Ok(Self {
            config,
            landing: read_landing_embedded()?,
            definition: read_steps_embedded()?,
            state: AppState::Landing,
            wizard: None,
            sink: LogSubmission,
            message: String::new(),
            show_confirmation: false,
            scroll_to_top: false,
            pending_anchor: None,
        })
    }

    /// Traduce los avisos del wizard a banderas de UI
    pub fn process_wizard_events(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        for event in wizard.drain_events() {
            match event {
                WizardEvent::ScrollToTop => self.scroll_to_top = true,
                WizardEvent::Submitted => self.show_confirmation = true,
            }
        }
    }
}
