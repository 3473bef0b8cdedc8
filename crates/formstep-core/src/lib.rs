//! Formstep Core
//!
//! Coordination layer: one [`FormPage`] owns the parsed document, the tab
//! navigator bound to it and the secondary page widgets.

mod config;
mod error;
mod page;
mod wizard;

pub use config::{Config, PageIds};
pub use error::CoreError;
pub use page::FormPage;
pub use wizard::{WizardHandle, WizardSnapshot};

// Re-export core components
pub use formstep_dom::{
    Document, DocumentTree, DomError, DomSurface, Element, NodeId, WizardMarkup, WizardSelectors,
    WizardStyles,
};
pub use formstep_widgets::{
    Access, AjaxRequest, BadgeUpdate, CharacterCounter, Endpoints, Key, Method, PublicationState,
    SearchOption, UnreadCount, UserMatch, WidgetError,
};
pub use formstep_wizard::{
    render, Cursor, Direction, Effect, FormContext, RenderPlan, ReviewLayout, Step, Surface,
    TabNavigator, Target, Transition, WizardError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
