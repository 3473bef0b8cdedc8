//! Form contexts
//!
//! The same wizard drives three add forms. Each one names its own form,
//! submit button and progress bar in the rendered markup.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormContext {
    Course,
    Resource,
    Activity,
}

impl FormContext {
    pub const ALL: [FormContext; 3] = [
        FormContext::Course,
        FormContext::Resource,
        FormContext::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormContext::Course => "course",
            FormContext::Resource => "resource",
            FormContext::Activity => "activity",
        }
    }

    /// Id of the `<form>` element
    pub fn form_id(&self) -> String {
        format!("{}_add_form", self.as_str())
    }

    pub fn submit_button_id(&self) -> String {
        format!("add_{}_submit_button", self.as_str())
    }

    pub fn progress_bar_id(&self) -> String {
        format!("{}_form_progress_bar", self.as_str())
    }
}

impl std::fmt::Display for FormContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormContext {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "course" => Ok(FormContext::Course),
            "resource" => Ok(FormContext::Resource),
            "activity" => Ok(FormContext::Activity),
            _ => Err(WizardError::UnknownContext(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_ids() {
        assert_eq!(FormContext::Course.form_id(), "course_add_form");
        assert_eq!(
            FormContext::Resource.submit_button_id(),
            "add_resource_submit_button"
        );
        assert_eq!(
            FormContext::Activity.progress_bar_id(),
            "activity_form_progress_bar"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Activity".parse::<FormContext>().unwrap(),
            FormContext::Activity
        );
        assert!(matches!(
            "quiz".parse::<FormContext>(),
            Err(WizardError::UnknownContext(_))
        ));
    }
}
