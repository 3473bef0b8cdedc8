//! Page configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use formstep_dom::{WizardSelectors, WizardStyles};
use formstep_widgets::{CharacterCounter, Endpoints};
use formstep_wizard::ReviewLayout;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the wizard finds its panels and buttons
    pub selectors: WizardSelectors,
    /// Display values written by the wizard
    pub styles: WizardStyles,
    /// Panels at the review position
    pub review_layout: ReviewLayout,
    /// Labels of the description counter
    pub counter: CharacterCounter,
    /// Element ids used by the page widgets
    pub ids: PageIds,
    /// Site root the Ajax endpoints are resolved against
    pub site_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: WizardSelectors::default(),
            styles: WizardStyles::default(),
            review_layout: ReviewLayout::default(),
            counter: CharacterCounter::default(),
            ids: PageIds::default(),
            site_url: "http://localhost:8000/".to_string(),
        }
    }
}

impl Config {
    /// Read a JSON config file; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.selectors.panel_class.trim().is_empty() {
            return Err(CoreError::Config("panel class cannot be empty".to_string()));
        }
        if self.styles.active_class.trim().is_empty() {
            return Err(CoreError::Config("active class cannot be empty".to_string()));
        }
        self.endpoints()?;
        Ok(())
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Ok(Endpoints::new(&self.site_url)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageIds {
    pub description: String,
    pub char_count: String,
    pub access: String,
    pub state: String,
    pub ability: String,
    pub existing_ability: String,
    pub notification_counter: String,
    pub notifications_dropdown: String,
    pub user_list: String,
}

impl Default for PageIds {
    fn default() -> Self {
        Self {
            description: "id_description".to_string(),
            char_count: "nb_char".to_string(),
            access: "id_access".to_string(),
            state: "id_state".to_string(),
            ability: "id_ability".to_string(),
            existing_ability: "id_existing_ability".to_string(),
            notification_counter: "notification_counter".to_string(),
            notifications_dropdown: "notifications_dropdown".to_string(),
            user_list: "user_list".to_string(),
        }
    }
}
