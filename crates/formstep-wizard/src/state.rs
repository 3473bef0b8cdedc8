//! Cursor State Machine
//!
//! ```text
//! Panel(0)
//!   ↓ next          ↑ previous
//! Panel(1) … Panel(N-1)
//!   ↓ next          ↑ previous
//! Review (cursor == N)
//! ```
//!
//! Only ±1 moves exist. A move that would leave `[0, N]` is rejected and the
//! cursor stays where it was.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn offset(&self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "next",
            Direction::Backward => "previous",
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = WizardError;

    fn try_from(offset: i32) -> Result<Self> {
        match offset {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(WizardError::InvalidDirection(other)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "forward" | "+1" | "1" => Ok(Direction::Forward),
            "previous" | "prev" | "backward" | "-1" => Ok(Direction::Backward),
            _ => Err(format!("Unknown direction: {}", s)),
        }
    }
}

/// What the cursor currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "index")]
pub enum Step {
    /// A real panel of the form
    Panel(usize),
    /// The synthetic position after the last panel
    Review,
}

/// A successful cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Panel to panel
    Interior { from: usize, to: usize },
    /// Last panel to the review position
    EnterReview { from: usize },
    /// Review position back to the last panel
    LeaveReview { to: usize },
}

impl Transition {
    pub fn destination(&self, panel_count: usize) -> usize {
        match *self {
            Transition::Interior { to, .. } | Transition::LeaveReview { to } => to,
            Transition::EnterReview { .. } => panel_count,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::Interior { from, to } => write!(f, "panel {} -> panel {}", from, to),
            Transition::EnterReview { from } => write!(f, "panel {} -> review", from),
            Transition::LeaveReview { to } => write!(f, "review -> panel {}", to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    position: usize,
    panel_count: usize,
}

impl Cursor {
    pub fn new(panel_count: usize) -> Self {
        Self {
            position: 0,
            panel_count,
        }
    }

    /// Build a cursor at an arbitrary position, mostly for rendering previews
    pub fn at(position: usize, panel_count: usize) -> Result<Self> {
        if position > panel_count {
            return Err(WizardError::OutOfBounds {
                position,
                offset: 0,
                panel_count,
            });
        }
        Ok(Self {
            position,
            panel_count,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn step(&self) -> Step {
        if self.position < self.panel_count {
            Step::Panel(self.position)
        } else {
            Step::Review
        }
    }

    pub fn is_review(&self) -> bool {
        self.step() == Step::Review
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// Check whether a move stays inside `[0, N]`
    pub fn can_move(&self, direction: Direction) -> bool {
        self.transition_for(direction).is_ok()
    }

    /// Compute the transition a move would perform, without moving
    pub fn transition_for(&self, direction: Direction) -> Result<Transition> {
        let out_of_bounds = || WizardError::OutOfBounds {
            position: self.position,
            offset: direction.offset(),
            panel_count: self.panel_count,
        };

        if self.panel_count == 0 {
            return Err(out_of_bounds());
        }

        match direction {
            Direction::Forward => {
                let to = self.position + 1;
                if to > self.panel_count {
                    Err(out_of_bounds())
                } else if to == self.panel_count {
                    Ok(Transition::EnterReview {
                        from: self.position,
                    })
                } else {
                    Ok(Transition::Interior {
                        from: self.position,
                        to,
                    })
                }
            }
            Direction::Backward => {
                let to = self.position.checked_sub(1).ok_or_else(out_of_bounds)?;
                if self.position == self.panel_count {
                    Ok(Transition::LeaveReview { to })
                } else {
                    Ok(Transition::Interior {
                        from: self.position,
                        to,
                    })
                }
            }
        }
    }

    /// Move by one step. On error the cursor is unchanged.
    pub fn advance(&mut self, direction: Direction) -> Result<Transition> {
        let transition = self.transition_for(direction)?;
        self.position = transition.destination(self.panel_count);
        Ok(transition)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_through_three_panels() {
        let mut cursor = Cursor::new(3);
        assert_eq!(cursor.step(), Step::Panel(0));

        assert_eq!(
            cursor.advance(Direction::Forward).unwrap(),
            Transition::Interior { from: 0, to: 1 }
        );
        assert_eq!(
            cursor.advance(Direction::Forward).unwrap(),
            Transition::Interior { from: 1, to: 2 }
        );
        assert_eq!(
            cursor.advance(Direction::Forward).unwrap(),
            Transition::EnterReview { from: 2 }
        );
        assert!(cursor.is_review());
        assert_eq!(cursor.position(), 3);

        assert_eq!(
            cursor.advance(Direction::Backward).unwrap(),
            Transition::LeaveReview { to: 2 }
        );
        assert_eq!(cursor.step(), Step::Panel(2));
    }

    #[test]
    fn test_out_of_bounds_leaves_cursor_untouched() {
        let mut cursor = Cursor::new(2);
        let err = cursor.advance(Direction::Backward).unwrap_err();
        assert_eq!(
            err,
            WizardError::OutOfBounds {
                position: 0,
                offset: -1,
                panel_count: 2
            }
        );
        assert_eq!(cursor.position(), 0);

        cursor.advance(Direction::Forward).unwrap();
        cursor.advance(Direction::Forward).unwrap();
        assert!(cursor.is_review());
        assert!(!cursor.can_move(Direction::Forward));
        assert!(cursor.advance(Direction::Forward).is_err());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_single_panel_goes_straight_to_review() {
        let mut cursor = Cursor::new(1);
        assert_eq!(
            cursor.advance(Direction::Forward).unwrap(),
            Transition::EnterReview { from: 0 }
        );
        assert_eq!(
            cursor.advance(Direction::Backward).unwrap(),
            Transition::LeaveReview { to: 0 }
        );
        assert!(cursor.is_first());
    }

    #[test]
    fn test_empty_form_never_moves() {
        let mut cursor = Cursor::new(0);
        assert!(!cursor.can_move(Direction::Forward));
        assert!(!cursor.can_move(Direction::Backward));
        assert!(cursor.advance(Direction::Forward).is_err());
    }

    #[test]
    fn test_direction_from_offset() {
        assert_eq!(Direction::try_from(1).unwrap(), Direction::Forward);
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::Backward);
        assert_eq!(
            Direction::try_from(2).unwrap_err(),
            WizardError::InvalidDirection(2)
        );
        assert_eq!("prev".parse::<Direction>().unwrap(), Direction::Backward);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn test_cursor_at_rejects_positions_past_review() {
        assert!(Cursor::at(3, 3).unwrap().is_review());
        assert!(Cursor::at(4, 3).is_err());
    }
}
