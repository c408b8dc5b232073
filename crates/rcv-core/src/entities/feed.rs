use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A pending item in a user's content feed (`user_feed_queue_v2`).
///
/// Only relevant while `scheduled_for <= now` and `surfaced_at` is unset.
/// Ordering is descending `priority`, then ascending `queued_at`; both are
/// enforced by the query, not by this type.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeedQueueItem {
    pub id: String,
    pub user_id: Option<String>,
    pub content_id: String,
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i32,
    pub queued_at: DateTime<Utc>,
    pub scheduled_for: DateTime<Utc>,
    pub surfaced_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
}

impl FeedQueueItem {
    /// Whether the item is due and has not been surfaced yet.
    #[must_use]
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_for <= now && self.surfaced_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn item(scheduled_for: DateTime<Utc>, surfaced_at: Option<DateTime<Utc>>) -> FeedQueueItem {
        FeedQueueItem {
            id: "q1".into(),
            user_id: None,
            content_id: "c1".into(),
            content_type: None,
            priority: 1,
            queued_at: scheduled_for,
            scheduled_for,
            surfaced_at,
            reason: None,
        }
    }

    #[test]
    fn pending_requires_due_and_unsurfaced() {
        let now = Utc::now();
        assert!(item(now - Duration::minutes(1), None).is_pending(now));
        assert!(item(now, None).is_pending(now));
        assert!(!item(now + Duration::minutes(1), None).is_pending(now));
        assert!(!item(now - Duration::minutes(1), Some(now)).is_pending(now));
    }
}
