//! Formstep Document Layer
//!
//! Server-rendered markup is parsed once into an owned element tree. Page
//! behaviours mutate that tree the way a page script mutates a live DOM:
//! display styles, class lists, text, disabled flags and element removal.

mod document;
mod element;
mod error;
mod markup;
mod surface;

pub use document::{Document, DocumentTree};
pub use element::{Element, NodeId};
pub use error::DomError;
pub use markup::{WizardMarkup, WizardSelectors};
pub use surface::{DomSurface, WizardStyles};

pub type Result<T> = std::result::Result<T, DomError>;
