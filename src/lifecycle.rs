use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::Poll;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PollStatus {
    Active,
    Expired,
}

impl PollStatus {
    pub fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }

    /// Call-to-action label for listing and detail views.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Active => "Vote Now",
            Self::Expired => "View Results",
        }
    }

    pub fn badge(self) -> Option<&'static str> {
        match self {
            Self::Active => None,
            Self::Expired => Some("Expired"),
        }
    }
}

/// A poll expires at midnight UTC on its expiration date. Strict less-than
/// only: the boundary instant itself still counts as active.
pub fn status(poll: &Poll, now: OffsetDateTime) -> PollStatus {
    if poll.expires_at.midnight().assume_utc() < now {
        PollStatus::Expired
    } else {
        PollStatus::Active
    }
}

impl Poll {
    pub fn status(&self, now: OffsetDateTime) -> PollStatus {
        status(self, now)
    }

    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.status(now).is_expired()
    }
}
