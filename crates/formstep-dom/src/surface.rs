//! Effect execution on the document tree

use serde::{Deserialize, Serialize};

use formstep_wizard::{Surface, Target};

use crate::document::DocumentTree;
use crate::element::NodeId;
use crate::markup::WizardMarkup;

/// Display values and classes written by the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardStyles {
    pub panel: String,
    /// Previous and next buttons
    pub button: String,
    pub submit: String,
    pub progress_bar: String,
    pub hidden: String,
    /// Class marking a completed progress indicator
    pub active_class: String,
}

impl Default for WizardStyles {
    fn default() -> Self {
        Self {
            panel: "block".to_string(),
            button: "inline".to_string(),
            submit: "block".to_string(),
            progress_bar: "block".to_string(),
            hidden: "none".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl WizardStyles {
    fn shown(&self, target: Target) -> &str {
        match target {
            Target::Panel(_) => &self.panel,
            Target::Previous | Target::Next => &self.button,
            Target::Submit(_) => &self.submit,
        }
    }
}

/// Executes wizard effects against the discovered markup. Targets missing
/// from the page are skipped.
pub struct DomSurface<'a> {
    tree: &'a mut DocumentTree,
    markup: &'a WizardMarkup,
    styles: &'a WizardStyles,
}

impl<'a> DomSurface<'a> {
    pub fn new(
        tree: &'a mut DocumentTree,
        markup: &'a WizardMarkup,
        styles: &'a WizardStyles,
    ) -> Self {
        Self {
            tree,
            markup,
            styles,
        }
    }

    /// Page setup before the first render: reveal the progress bar of the
    /// form context and hide every panel.
    pub fn prepare(&mut self) {
        let (markup, styles) = (self.markup, self.styles);
        if let Some(bar) = markup.progress_bar {
            self.display(bar, &styles.progress_bar);
        }
        for &panel in &markup.panels {
            self.display(panel, &styles.hidden);
        }
    }

    fn display(&mut self, node: NodeId, value: &str) {
        match self.tree.element_mut(node) {
            Ok(el) => el.set_display(value),
            Err(e) => tracing::debug!(error = %e, "Skipping display update"),
        }
    }
}

impl Surface for DomSurface<'_> {
    fn set_visible(&mut self, target: Target, visible: bool) {
        let Some(node) = self.markup.node_for(target) else {
            return;
        };
        let value = if visible {
            self.styles.shown(target)
        } else {
            self.styles.hidden.as_str()
        };
        match self.tree.element_mut(node) {
            Ok(el) => el.set_display(value),
            Err(e) => tracing::debug!(?target, error = %e, "Skipping display update"),
        }
    }

    fn set_progress(&mut self, index: usize, active: bool) {
        let Some(node) = self.markup.progress_node(index) else {
            return;
        };
        match self.tree.element_mut(node) {
            Ok(el) => el.set_class(&self.styles.active_class, active),
            Err(e) => tracing::debug!(index, error = %e, "Skipping progress update"),
        }
    }
}
