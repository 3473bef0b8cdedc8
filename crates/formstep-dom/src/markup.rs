//! Wizard markup discovery
//!
//! Finds the elements the tab navigator drives in a server-rendered add form.

use serde::{Deserialize, Serialize};

use formstep_wizard::{FormContext, Target};

use crate::document::DocumentTree;
use crate::element::NodeId;

/// Names the wizard looks for in the markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardSelectors {
    /// `name` of the add form; the wizard only runs when exactly one exists
    pub form_name: String,
    pub panel_class: String,
    pub progress_class: String,
    pub previous_id: String,
    pub next_id: String,
}

impl Default for WizardSelectors {
    fn default() -> Self {
        Self {
            form_name: "object_add_form".to_string(),
            panel_class: "object_form_tab".to_string(),
            progress_class: "progress_tab".to_string(),
            previous_id: "previous_tab_btn".to_string(),
            next_id: "next_tab_btn".to_string(),
        }
    }
}

/// Node ids of everything the wizard touches
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardMarkup {
    pub context: FormContext,
    pub panels: Vec<NodeId>,
    pub progress: Vec<NodeId>,
    pub previous: Option<NodeId>,
    pub next: Option<NodeId>,
    pub submit: Option<NodeId>,
    pub progress_bar: Option<NodeId>,
}

impl WizardMarkup {
    /// Returns `None` when the page has no add form or the form context
    /// cannot be told from the markup.
    pub fn discover(tree: &DocumentTree, selectors: &WizardSelectors) -> Option<Self> {
        if tree.by_name(&selectors.form_name).len() != 1 {
            return None;
        }

        let Some(context) = detect_context(tree) else {
            tracing::warn!(form = %selectors.form_name, "Add form without a known context");
            return None;
        };

        let markup = Self {
            context,
            panels: tree.by_class(&selectors.panel_class),
            progress: tree.by_class(&selectors.progress_class),
            previous: tree.by_id(&selectors.previous_id),
            next: tree.by_id(&selectors.next_id),
            submit: tree.by_id(&context.submit_button_id()),
            progress_bar: tree.by_id(&context.progress_bar_id()),
        };

        if markup.progress.len() != markup.panels.len() {
            tracing::debug!(
                panels = markup.panels.len(),
                progress = markup.progress.len(),
                "Progress indicators do not match panels"
            );
        }

        tracing::debug!(
            context = %context,
            panels = markup.panels.len(),
            "Discovered wizard markup"
        );

        Some(markup)
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn node_for(&self, target: Target) -> Option<NodeId> {
        match target {
            Target::Panel(i) => self.panels.get(i).copied(),
            Target::Previous => self.previous,
            Target::Next => self.next,
            Target::Submit(context) if context == self.context => self.submit,
            Target::Submit(_) => None,
        }
    }

    pub fn progress_node(&self, index: usize) -> Option<NodeId> {
        self.progress.get(index).copied()
    }
}

/// The form id decides the context; a lone submit button is the fallback.
fn detect_context(tree: &DocumentTree) -> Option<FormContext> {
    FormContext::ALL
        .into_iter()
        .find(|context| tree.by_id(&context.form_id()).is_some())
        .or_else(|| {
            FormContext::ALL
                .into_iter()
                .find(|context| tree.by_id(&context.submit_button_id()).is_some())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(form: &str, panels: usize) -> String {
        let tabs: String = (0..panels)
            .map(|i| format!(r#"<div class="object_form_tab" id="tab{i}">{i}</div>"#))
            .collect();
        let progress: String = (0..panels)
            .map(|i| format!(r#"<li class="progress_tab" id="step{i}"></li>"#))
            .collect();
        format!(
            r#"<form name="object_add_form" {form}>
                 <ul id="resource_form_progress_bar">{progress}</ul>
                 {tabs}
                 <button id="previous_tab_btn"></button>
                 <button id="next_tab_btn"></button>
                 <button id="add_resource_submit_button"></button>
               </form>"#
        )
    }

    #[test]
    fn test_discover_resource_form() {
        let tree = DocumentTree::parse(&page(r#"id="resource_add_form""#, 3));
        let markup = WizardMarkup::discover(&tree, &WizardSelectors::default()).unwrap();

        assert_eq!(markup.context, FormContext::Resource);
        assert_eq!(markup.panel_count(), 3);
        assert_eq!(markup.progress.len(), 3);
        assert!(markup.previous.is_some());
        assert!(markup.next.is_some());
        assert!(markup.submit.is_some());
        assert!(markup.progress_bar.is_some());
        assert_eq!(markup.node_for(Target::Panel(1)), tree.by_id("tab1"));
        assert!(markup.node_for(Target::Panel(3)).is_none());
        let submit = markup.node_for(Target::Submit(FormContext::Course));
        assert!(submit.is_none());
    }

    #[test]
    fn test_context_falls_back_to_submit_button() {
        let tree = DocumentTree::parse(&page("", 2));
        let markup = WizardMarkup::discover(&tree, &WizardSelectors::default()).unwrap();
        assert_eq!(markup.context, FormContext::Resource);
    }

    #[test]
    fn test_no_add_form() {
        let tree = DocumentTree::parse(r#"<div class="object_form_tab"></div>"#);
        assert!(WizardMarkup::discover(&tree, &WizardSelectors::default()).is_none());
    }

    #[test]
    fn test_custom_selectors() {
        let tree = DocumentTree::parse(
            r#"<form name="wizard" id="course_add_form">
                 <section class="step"></section><section class="step"></section>
               </form>"#,
        );
        let selectors = WizardSelectors {
            form_name: "wizard".to_string(),
            panel_class: "step".to_string(),
            ..WizardSelectors::default()
        };
        let markup = WizardMarkup::discover(&tree, &selectors).unwrap();
        assert_eq!(markup.context, FormContext::Course);
        assert_eq!(markup.panel_count(), 2);
        assert!(markup.next.is_none());
        assert!(markup.submit.is_none());
    }
}
