// Centralized notification/toast system for TUI status feedback
// Queue with priorities and auto-dismiss instead of an ad-hoc status string

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Success,
            duration: Duration::from_secs(3),
            shown_at: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration: Duration::from_secs(4),
            shown_at: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration: Duration::from_secs(5),
            shown_at: None,
        }
    }

    /// Check if this notification has expired
    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }
}

/// Queue of notifications with priority handling
#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Pending notifications (front = next to show)
    queue: VecDeque<Notification>,
    /// Currently displayed notification
    current: Option<Notification>,
    /// Recently shown message hashes, for deduplication
    recent_messages: Vec<(u64, Instant)>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification. A higher-priority notification replaces the
    /// current one (the old one is dropped, not re-queued - it was already
    /// shown once).
    pub fn push(&mut self, notification: Notification) {
        let hash = Self::hash_message(&notification.message);
        let now = Instant::now();

        self.recent_messages.retain(|(_, expiry)| *expiry > now);

        // Skip a message that was shown within the last 2 seconds
        if self.recent_messages.iter().any(|(h, _)| *h == hash) {
            return;
        }
        self.recent_messages.push((hash, now + Duration::from_secs(2)));

        if let Some(ref current) = self.current {
            if notification.level > current.level {
                self.current = Some(notification);
                if let Some(ref mut n) = self.current {
                    n.mark_shown();
                }
                return;
            }
        }

        if self.current.is_none() {
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
        } else {
            let pos = self
                .queue
                .iter()
                .position(|n| n.level < notification.level)
                .unwrap_or(self.queue.len());
            self.queue.insert(pos, notification);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance();
    }

    /// Advance to the next notification if the current one expired
    pub fn tick(&mut self) {
        if let Some(ref current) = self.current {
            if current.is_expired() {
                self.current = None;
                self.advance();
            }
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown();
                self.current = Some(next);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    fn hash_message(message: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        message.hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("test");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_queue_basic() {
        let mut q = NotificationQueue::new();
        assert!(q.is_empty());

        q.push(Notification::info("first"));
        assert!(!q.is_empty());
        assert_eq!(q.current().unwrap().message, "first");

        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_priority_replaces_current() {
        let mut q = NotificationQueue::new();

        q.push(Notification::info("low priority"));
        assert_eq!(q.current().unwrap().message, "low priority");

        q.push(Notification::error("high priority"));
        assert_eq!(q.current().unwrap().message, "high priority");

        // The replaced notification was dropped, not re-queued
        q.dismiss();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_duplicate_suppressed() {
        let mut q = NotificationQueue::new();
        q.push(Notification::warning("toggle failed"));
        q.push(Notification::warning("toggle failed"));
        assert_eq!(q.current().unwrap().message, "toggle failed");
        q.dismiss();
        assert!(q.is_empty());
    }

    #[test]
    fn test_level_ordering() {
        assert!(NotificationLevel::Error > NotificationLevel::Warning);
        assert!(NotificationLevel::Warning > NotificationLevel::Success);
        assert!(NotificationLevel::Success > NotificationLevel::Info);
    }
}
