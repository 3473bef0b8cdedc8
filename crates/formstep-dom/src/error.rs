//! Document error types

use thiserror::Error;

use crate::element::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Element not found: #{0}")]
    MissingElement(String),
}
