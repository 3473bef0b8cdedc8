//! Effects and the surface that executes them

use serde::Serialize;

use crate::context::FormContext;

/// An element the wizard shows or hides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Target {
    Panel(usize),
    Previous,
    Next,
    Submit(FormContext),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Show or hide an element
    Display { target: Target, visible: bool },
    /// Add or remove the active class of a progress indicator
    Progress { index: usize, active: bool },
}

/// Anything able to execute wizard effects: a live DOM, an owned document
/// tree, a recorder in tests.
pub trait Surface {
    fn set_visible(&mut self, target: Target, visible: bool);

    fn set_progress(&mut self, index: usize, active: bool);

    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::Display { target, visible } => self.set_visible(target, visible),
                Effect::Progress { index, active } => self.set_progress(index, active),
            }
        }
    }
}
