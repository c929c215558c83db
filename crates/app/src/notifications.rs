//! Bookkeeping for the visible notifications.

use std::collections::VecDeque;

use espdash_domain::notification::{Notification, NotificationId, Severity};

/// Ordered set of visible notifications with an optional cap.
///
/// Removal timers are scheduled by the controller; this type only decides
/// ids, order and eviction.
#[derive(Debug)]
pub struct NotificationCenter {
    next_id: u32,
    capacity: usize,
    active: VecDeque<Notification>,
}

impl NotificationCenter {
    /// Create a center holding at most `capacity` notifications (`0` means
    /// unbounded).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            next_id: 0,
            capacity,
            active: VecDeque::new(),
        }
    }

    /// Add a notification, returning it together with the ids evicted to
    /// make room (oldest first).
    pub fn push(
        &mut self,
        message: String,
        severity: Severity,
    ) -> (Notification, Vec<NotificationId>) {
        let id = NotificationId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let mut evicted = Vec::new();
        if self.capacity > 0 {
            while self.active.len() >= self.capacity {
                match self.active.pop_front() {
                    Some(old) => evicted.push(old.id),
                    None => break,
                }
            }
        }

        let notification = Notification {
            id,
            message,
            severity,
        };
        self.active.push_back(notification.clone());
        (notification, evicted)
    }

    /// Remove a notification, returning whether it was still visible.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }
}

#[cfg(test)]
impl NotificationCenter {
    fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    fn len(&self) -> usize {
        self.active.len()
    }

    fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
