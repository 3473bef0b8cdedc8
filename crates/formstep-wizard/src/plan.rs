//! Declarative render plans
//!
//! [`render`] is the single place that decides what the page looks like for a
//! given cursor. Navigation only ever diffs two plans.

use serde::{Deserialize, Serialize};

use crate::context::FormContext;
use crate::effect::{Effect, Target};
use crate::error::WizardError;
use crate::state::Cursor;

/// How panels look at the review position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewLayout {
    /// Every panel hidden, only the submit button remains
    #[default]
    Collapsed,
    /// Every panel shown at once so answers can be reviewed
    Expanded,
}

impl ReviewLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewLayout::Collapsed => "collapsed",
            ReviewLayout::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for ReviewLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReviewLayout {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collapsed" => Ok(ReviewLayout::Collapsed),
            "expanded" => Ok(ReviewLayout::Expanded),
            _ => Err(WizardError::UnknownLayout(s.to_string())),
        }
    }
}

/// Expected visibility and active classes for one cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub context: FormContext,
    /// Visibility per panel
    pub panels: Vec<bool>,
    /// Active class per progress indicator
    pub progress: Vec<bool>,
    pub previous: bool,
    pub next: bool,
    pub submit: bool,
}

/// Compute the plan for `cursor`.
///
/// With `N` panels and cursor `c`:
/// - `c < N`: only panel `c` is visible
/// - `c == N`: panels follow `layout`, submit is shown, next is hidden
/// - progress indicators before `c` are active
/// - previous is shown everywhere except on the first panel
pub fn render(cursor: &Cursor, context: FormContext, layout: ReviewLayout) -> RenderPlan {
    let count = cursor.panel_count();
    if count == 0 {
        return RenderPlan {
            context,
            panels: Vec::new(),
            progress: Vec::new(),
            previous: false,
            next: false,
            submit: false,
        };
    }

    let position = cursor.position();
    let review = cursor.is_review();

    let panels = (0..count)
        .map(|i| {
            if review {
                layout == ReviewLayout::Expanded
            } else {
                i == position
            }
        })
        .collect();

    RenderPlan {
        context,
        panels,
        progress: (0..count).map(|i| i < position).collect(),
        previous: position > 0,
        next: !review,
        submit: review,
    }
}

impl RenderPlan {
    pub fn visible_panels(&self) -> impl Iterator<Item = usize> + '_ {
        self.panels
            .iter()
            .enumerate()
            .filter(|(_, visible)| **visible)
            .map(|(i, _)| i)
    }

    /// Every assignment of the plan, panels first
    pub fn effects(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(self.panels.len() * 2 + 3);

        for (i, visible) in self.panels.iter().enumerate() {
            effects.push(Effect::Display {
                target: Target::Panel(i),
                visible: *visible,
            });
        }
        for (index, active) in self.progress.iter().enumerate() {
            effects.push(Effect::Progress {
                index,
                active: *active,
            });
        }
        effects.push(Effect::Display {
            target: Target::Previous,
            visible: self.previous,
        });
        effects.push(Effect::Display {
            target: Target::Next,
            visible: self.next,
        });
        effects.push(Effect::Display {
            target: Target::Submit(self.context),
            visible: self.submit,
        });

        effects
    }

    /// Only the assignments that differ from `previous`.
    ///
    /// Plans of different shape (panel count or context) fall back to the
    /// full list.
    pub fn changes_since(&self, previous: &RenderPlan) -> Vec<Effect> {
        if self.context != previous.context
            || self.panels.len() != previous.panels.len()
            || self.progress.len() != previous.progress.len()
        {
            return self.effects();
        }

        let before = previous.effects();
        self.effects()
            .into_iter()
            .zip(before)
            .filter(|(now, then)| now != then)
            .map(|(now, _)| now)
            .collect()
    }
}
