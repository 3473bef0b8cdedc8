//! Notification badge

use serde::{Deserialize, Serialize};

use crate::Result;

/// Class added to a notification message once it has been read
pub const READ_CLASS: &str = "text-muted";

/// Server answer after a notification change: `{"unread": <n>}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// Show the number on the counter
    Show(u64),
    /// Nothing left unread, drop the counter element
    Remove,
}

impl UnreadCount {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn badge(&self) -> BadgeUpdate {
        if self.unread > 0 {
            BadgeUpdate::Show(self.unread)
        } else {
            BadgeUpdate::Remove
        }
    }
}

/// Element ids of one rendered notification
pub fn item_id(notification_id: u64) -> String {
    format!("notification_{}", notification_id)
}

pub fn divider_id(notification_id: u64) -> String {
    format!("notification_divider_{}", notification_id)
}

pub fn message_id(notification_id: u64) -> String {
    format!("notification_{}_message", notification_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;

    #[test]
    fn test_badge_from_response() {
        let count = UnreadCount::parse(r#"{"unread": 3}"#).unwrap();
        assert_eq!(count.badge(), BadgeUpdate::Show(3));

        let none = UnreadCount::parse(r#"{"unread": 0, "extra": true}"#).unwrap();
        assert_eq!(none.badge(), BadgeUpdate::Remove);
    }

    #[test]
    fn test_malformed_response() {
        assert!(matches!(
            UnreadCount::parse(r#"{"read": 1}"#),
            Err(WidgetError::Json(_))
        ));
        assert!(UnreadCount::parse("<html>").is_err());
    }

    #[test]
    fn test_element_ids() {
        assert_eq!(item_id(4), "notification_4");
        assert_eq!(divider_id(4), "notification_divider_4");
        assert_eq!(message_id(4), "notification_4_message");
    }
}
