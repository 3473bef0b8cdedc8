//! Formstep Widgets
//!
//! Page behaviours around the add forms, kept free of any document so each
//! one is a plain function of its inputs:
//! - character counter of the description field
//! - publication states allowed for an access level
//! - objective ability toggle
//! - notification badge, CSRF token and Ajax request descriptors
//! - user search suggestions

mod access;
mod ajax;
mod counter;
mod error;
pub mod notification;
mod objective;
mod search;

pub use access::{Access, PublicationState};
pub use ajax::{csrf_token, AjaxRequest, Endpoints, Method, CSRF_COOKIE, CSRF_HEADER};
pub use counter::{character_label, CharacterCounter, Key};
pub use error::WidgetError;
pub use notification::{BadgeUpdate, UnreadCount, READ_CLASS};
pub use objective::create_ability_disabled;
pub use search::{SearchOption, UserMatch};

pub type Result<T> = std::result::Result<T, WidgetError>;
