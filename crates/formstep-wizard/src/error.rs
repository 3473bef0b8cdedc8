//! Wizard error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Cursor out of bounds: {position} {offset:+} leaves [0, {panel_count}]")]
    OutOfBounds {
        position: usize,
        offset: i32,
        panel_count: usize,
    },

    #[error("Invalid direction offset: {0}")]
    InvalidDirection(i32),

    #[error("Unknown form context: {0}")]
    UnknownContext(String),

    #[error("Unknown review layout: {0}")]
    UnknownLayout(String),
}
