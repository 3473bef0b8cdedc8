//! Access levels and the publication states they allow
//!
//! The state `<select>` lists `DRAFT`, `PUBLISHED`, `ARCHIVED` in that order.
//! Picking an access level hides the states that make no sense for it.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Access {
    Public,
    StudentsOnly,
    CollaboratorsOnly,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationState {
    Draft,
    Published,
    Archived,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Public => "PUBLIC",
            Access::StudentsOnly => "STUDENTS_ONLY",
            Access::CollaboratorsOnly => "COLLABORATORS_ONLY",
            Access::Private => "PRIVATE",
        }
    }

    pub fn allows(&self, state: PublicationState) -> bool {
        match (self, state) {
            (Access::Public | Access::StudentsOnly, PublicationState::Draft) => false,
            (Access::Private, PublicationState::Published) => false,
            _ => true,
        }
    }

    /// Visibility of each option of the state select, in option order
    pub fn state_visibility(&self) -> [bool; 3] {
        PublicationState::ALL.map(|state| self.allows(state))
    }
}

impl PublicationState {
    pub const ALL: [PublicationState; 3] = [
        PublicationState::Draft,
        PublicationState::Published,
        PublicationState::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PublicationState::Draft => "DRAFT",
            PublicationState::Published => "PUBLISHED",
            PublicationState::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Access {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PUBLIC" => Ok(Access::Public),
            "STUDENTS_ONLY" => Ok(Access::StudentsOnly),
            "COLLABORATORS_ONLY" => Ok(Access::CollaboratorsOnly),
            "PRIVATE" => Ok(Access::Private),
            _ => Err(WidgetError::UnknownAccess(s.to_string())),
        }
    }
}

impl std::fmt::Display for PublicationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PublicationState {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DRAFT" => Ok(PublicationState::Draft),
            "PUBLISHED" => Ok(PublicationState::Published),
            "ARCHIVED" => Ok(PublicationState::Archived),
            _ => Err(WidgetError::UnknownState(s.to_string())),
        }
    }
}
