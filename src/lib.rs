pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod state;
pub mod submission;
pub mod ui;
pub mod view_models;
pub mod wizard;

pub use app::BeautyApp;
pub use error::QuizError;
pub use state::QuizState;
pub use wizard::QuizWizard;
