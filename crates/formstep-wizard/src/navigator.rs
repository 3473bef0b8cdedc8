//! Tab Navigator
//!
//! Owns the cursor of one multi-step form and remembers the last plan it
//! handed out, so each move only emits what changed.

use crate::context::FormContext;
use crate::effect::Effect;
use crate::plan::{render, RenderPlan, ReviewLayout};
use crate::state::{Cursor, Direction};
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabNavigator {
    cursor: Cursor,
    context: FormContext,
    layout: ReviewLayout,
    /// Last plan returned to the caller, `None` until initialized
    rendered: Option<RenderPlan>,
}

impl TabNavigator {
    pub fn new(panel_count: usize, context: FormContext) -> Self {
        Self {
            cursor: Cursor::new(panel_count),
            context,
            layout: ReviewLayout::default(),
            rendered: None,
        }
    }

    pub fn with_layout(mut self, layout: ReviewLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn context(&self) -> FormContext {
        self.context
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.panel_count() == 0
    }

    pub fn is_initialized(&self) -> bool {
        self.rendered.is_some()
    }

    /// Plan for the current cursor
    pub fn plan(&self) -> RenderPlan {
        render(&self.cursor, self.context, self.layout)
    }

    /// Reset to the first panel and return the full initial assignment.
    ///
    /// A form without panels yields no effects.
    pub fn initialize(&mut self) -> Vec<Effect> {
        self.cursor.reset();

        if self.is_empty() {
            tracing::debug!(context = %self.context, "Wizard has no panels, nothing to show");
            self.rendered = None;
            return Vec::new();
        }

        let plan = self.plan();
        let effects = plan.effects();
        self.rendered = Some(plan);

        tracing::debug!(
            context = %self.context,
            panels = self.cursor.panel_count(),
            "Wizard initialized"
        );

        effects
    }

    /// Move one step and return the effects needed to reach the new plan.
    ///
    /// Out-of-range moves fail and leave the navigator untouched. On an empty
    /// form every move is a silent no-op.
    pub fn advance(&mut self, direction: Direction) -> Result<Vec<Effect>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let transition = self.cursor.advance(direction)?;

        tracing::debug!(
            context = %self.context,
            direction = %direction,
            transition = %transition,
            "Wizard transition"
        );

        let plan = self.plan();
        let effects = match self.rendered.as_ref() {
            Some(previous) => plan.changes_since(previous),
            None => plan.effects(),
        };
        self.rendered = Some(plan);

        Ok(effects)
    }

    pub fn next(&mut self) -> Result<Vec<Effect>> {
        self.advance(Direction::Forward)
    }

    pub fn previous(&mut self) -> Result<Vec<Effect>> {
        self.advance(Direction::Backward)
    }
}
