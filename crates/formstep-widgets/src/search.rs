//! User search suggestions
//!
//! The search endpoint answers with a JSON array of users; each one becomes a
//! `<option>` of the username datalist.

use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMatch {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOption {
    pub value: String,
    pub label: String,
}

impl UserMatch {
    pub fn parse_list(body: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(body)?)
    }

    /// `First Last (@username)`
    pub fn label(&self) -> String {
        format!("{} {} (@{})", self.first_name, self.last_name, self.username)
    }

    pub fn to_option(&self) -> SearchOption {
        SearchOption {
            value: self.username.clone(),
            label: self.label(),
        }
    }
}

impl SearchOption {
    pub fn from_response(body: &str) -> Result<Vec<Self>> {
        Ok(UserMatch::parse_list(body)?
            .iter()
            .map(UserMatch::to_option)
            .collect())
    }
}
