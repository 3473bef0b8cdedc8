//! Formstep Tab Navigator
//!
//! Drives a multi-step form: a linear sequence of panels plus one synthetic
//! review position where the submit button is offered.
//!
//! ```text
//! Panel(0) ⇄ Panel(1) ⇄ … ⇄ Panel(N-1) ⇄ Review
//! ```
//!
//! The cursor never touches the page directly. [`render`] maps it to a
//! [`RenderPlan`], and the navigator hands out [`Effect`]s for a [`Surface`]
//! to execute.

mod context;
mod effect;
mod error;
mod navigator;
mod plan;
mod state;

pub use context::FormContext;
pub use effect::{Effect, Surface, Target};
pub use error::WizardError;
pub use navigator::TabNavigator;
pub use plan::{render, RenderPlan, ReviewLayout};
pub use state::{Cursor, Direction, Step, Transition};

pub type Result<T> = std::result::Result<T, WizardError>;
