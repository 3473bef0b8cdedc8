//! Wizard handle shared by the "next" and "previous" buttons

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

use formstep_dom::{Document, DomSurface, WizardMarkup, WizardStyles};
use formstep_wizard::{Cursor, Direction, FormContext, RenderPlan, Step, Surface, TabNavigator};

use crate::config::Config;

struct WizardState {
    navigator: TabNavigator,
    markup: WizardMarkup,
}

/// Cheap to clone; every clone drives the same navigator and document.
///
/// A click holds the wizard lock for the whole advance-and-apply sequence, so
/// clicks are processed one at a time.
pub struct WizardHandle {
    state: Arc<Mutex<WizardState>>,
    document: Document,
    styles: Arc<WizardStyles>,
}

/// What the wizard looks like right now
#[derive(Debug, Clone, Serialize)]
pub struct WizardSnapshot {
    pub context: FormContext,
    pub cursor: usize,
    pub panel_count: usize,
    pub step: Step,
    pub plan: RenderPlan,
    /// Panels whose element is not hidden in the document
    pub visible_panels: Vec<usize>,
}

impl WizardHandle {
    /// Bind a navigator to the add form of `document` and render the first
    /// panel. Returns `None` when the page has no wizard.
    pub fn attach(document: &Document, config: &Config) -> Option<Self> {
        let styles = Arc::new(config.styles.clone());

        let state = document.with_tree_mut(|tree| {
            let markup = WizardMarkup::discover(tree, &config.selectors)?;
            let mut navigator = TabNavigator::new(markup.panel_count(), markup.context)
                .with_layout(config.review_layout);

            let effects = navigator.initialize();
            let mut surface = DomSurface::new(tree, &markup, &styles);
            surface.prepare();
            surface.apply(&effects);

            Some(WizardState { navigator, markup })
        })?;

        tracing::info!(
            context = %state.navigator.context(),
            panels = state.markup.panel_count(),
            "Wizard attached"
        );

        Some(Self {
            state: Arc::new(Mutex::new(state)),
            document: document.clone(),
            styles,
        })
    }

    /// "Next" button handler. Returns whether the wizard moved.
    pub fn next(&self) -> bool {
        self.advance(Direction::Forward)
    }

    /// "Previous" button handler. Returns whether the wizard moved.
    pub fn previous(&self) -> bool {
        self.advance(Direction::Backward)
    }

    /// Move one step and update the document. Out-of-range clicks are
    /// logged and ignored.
    pub fn advance(&self, direction: Direction) -> bool {
        let mut state = self.state.lock();

        let effects = match state.navigator.advance(direction) {
            Ok(effects) => effects,
            Err(e) => {
                tracing::warn!(direction = %direction, error = %e, "Ignoring wizard click");
                return false;
            }
        };
        if effects.is_empty() {
            return false;
        }

        let state = &*state;
        self.document.with_tree_mut(|tree| {
            DomSurface::new(tree, &state.markup, &self.styles).apply(&effects);
        });

        true
    }

    pub fn cursor(&self) -> Cursor {
        *self.state.lock().navigator.cursor()
    }

    pub fn context(&self) -> FormContext {
        self.state.lock().navigator.context()
    }

    pub fn plan(&self) -> RenderPlan {
        self.state.lock().navigator.plan()
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let state = self.state.lock();
        let cursor = *state.navigator.cursor();

        let visible_panels = self.document.with_tree(|tree| {
            state
                .markup
                .panels
                .iter()
                .enumerate()
                .filter(|(_, node)| tree.get(**node).is_some_and(|el| !el.is_hidden()))
                .map(|(i, _)| i)
                .collect()
        });

        WizardSnapshot {
            context: state.navigator.context(),
            cursor: cursor.position(),
            panel_count: cursor.panel_count(),
            step: cursor.step(),
            plan: state.navigator.plan(),
            visible_panels,
        }
    }
}

impl Clone for WizardHandle {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            document: self.document.clone(),
            styles: Arc::clone(&self.styles),
        }
    }
}
