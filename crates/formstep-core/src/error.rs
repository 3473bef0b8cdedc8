//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Wizard error: {0}")]
    Wizard(#[from] formstep_wizard::WizardError),

    #[error("Document error: {0}")]
    Dom(#[from] formstep_dom::DomError),

    #[error("Widget error: {0}")]
    Widget(#[from] formstep_widgets::WidgetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
