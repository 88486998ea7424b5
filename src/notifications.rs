//! Notification State
//!
//! Local read/unread bookkeeping for the notification drawer.
//! The server is told separately; this only mirrors the result.

use crate::models::Notification;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Mark one notification read. Returns true if it was unread.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.is_read => {
                n.is_read = true;
                true
            }
            _ => false,
        }
    }

    /// Mark everything read. Returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| !n.is_read) {
            n.is_read = true;
            changed += 1;
        }
        changed
    }
}

/// Short relative label for a notification timestamp
pub fn relative_time(created_at: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let Ok(then) = chrono::DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };
    let minutes = (now - then.with_timezone(&chrono::Utc)).num_minutes();
    match minutes {
        m if m < 1 => "just now".to_string(),
        m if m < 60 => format!("{}m ago", m),
        m if m < 60 * 24 => format!("{}h ago", m / 60),
        m if m < 60 * 24 * 7 => format!("{}d ago", m / (60 * 24)),
        _ => then.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::TimeZone;

    fn make_notification(id: u32, is_read: bool) -> Notification {
        Notification {
            id,
            kind: NotificationKind::TaskAssigned,
            title: format!("Notification {}", id),
            message: String::new(),
            related_task: None,
            related_team: None,
            is_read,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_mark_read() {
        let mut state = NotificationState::new(vec![make_notification(1, false), make_notification(2, true)]);
        assert_eq!(state.unread_count(), 1);
        assert!(state.mark_read(1));
        assert!(!state.mark_read(1));
        assert!(!state.mark_read(2));
        assert!(!state.mark_read(42));
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn test_mark_all_read() {
        let mut state = NotificationState::new(vec![
            make_notification(1, false),
            make_notification(2, true),
            make_notification(3, false),
        ]);
        assert_eq!(state.mark_all_read(), 2);
        assert_eq!(state.mark_all_read(), 0);
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn test_relative_time() {
        let now = chrono::Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2024-05-10T11:59:40Z", now), "just now");
        assert_eq!(relative_time("2024-05-10T11:15:00Z", now), "45m ago");
        assert_eq!(relative_time("2024-05-10T07:00:00Z", now), "5h ago");
        assert_eq!(relative_time("2024-05-08T12:00:00Z", now), "2d ago");
        assert_eq!(relative_time("2024-01-02T12:00:00Z", now), "2024-01-02");
        assert_eq!(relative_time("yesterday", now), "yesterday");
    }
}
