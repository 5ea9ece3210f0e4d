use crate::{Error, LetterId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter as stored by the backend.
///
/// Immutable once written. `deliver_at >= created_at` is expected from the
/// composing side but is not guaranteed for records read back from a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Letter {
    pub letter_id: LetterId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub deliver_at: Timestamp,
}

impl Letter {
    pub fn is_sent_by(&self, user: &UserId) -> bool {
        &self.sender_id == user
    }

    pub fn is_addressed_to(&self, user: &UserId) -> bool {
        &self.recipient_id == user
    }

    /// Sender and recipient are the only parties allowed to see or delete a letter.
    pub fn involves(&self, user: &UserId) -> bool {
        self.is_sent_by(user) || self.is_addressed_to(user)
    }

    /// The party on the other side of the letter from `viewer`'s point of view.
    pub fn other_party(&self, viewer: &UserId) -> &UserId {
        if self.is_sent_by(viewer) {
            &self.recipient_id
        } else {
            &self.sender_id
        }
    }

    /// Whether `created_at <= deliver_at` holds for this record.
    pub fn has_consistent_schedule(&self) -> bool {
        self.deliver_at >= self.created_at
    }

    pub fn belongs_to(&self, viewer: &UserId, direction: Direction) -> bool {
        match direction {
            Direction::Received => self.is_addressed_to(viewer),
            Direction::Sent => self.is_sent_by(viewer),
        }
    }
}

/// Mailbox segment: letters addressed to the viewer, or written by them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Received,
    Sent,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Received => "received",
            Direction::Sent => "sent",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "received" | "inbox" => Ok(Direction::Received),
            "sent" | "outbox" => Ok(Direction::Sent),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> Letter {
        Letter {
            letter_id: LetterId::new("l-1"),
            sender_id: UserId::new("alice"),
            recipient_id: UserId::new("bob"),
            title: "Hello".to_string(),
            content: "See you soon".to_string(),
            created_at: Timestamp::from_millis(1_000),
            deliver_at: Timestamp::from_millis(2_000),
        }
    }

    #[test]
    fn test_other_party() {
        let l = letter();
        assert_eq!(l.other_party(&UserId::new("alice")).as_str(), "bob");
        assert_eq!(l.other_party(&UserId::new("bob")).as_str(), "alice");
        assert_eq!(l.other_party(&UserId::new("carol")).as_str(), "alice");
    }

    #[test]
    fn test_belongs_to_direction() {
        let l = letter();
        assert!(l.belongs_to(&UserId::new("bob"), Direction::Received));
        assert!(!l.belongs_to(&UserId::new("bob"), Direction::Sent));
        assert!(l.belongs_to(&UserId::new("alice"), Direction::Sent));
    }

    #[test]
    fn test_camel_case_round_trip_keys() {
        let json = serde_json::to_value(letter()).unwrap();
        assert_eq!(json["letterId"], "l-1");
        assert_eq!(json["deliverAt"], 2_000);
        assert!(json.get("deliver_at").is_none());
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("Sent".parse::<Direction>().unwrap(), Direction::Sent);
        assert_eq!("inbox".parse::<Direction>().unwrap(), Direction::Received);
        assert!("drafts".parse::<Direction>().is_err());
    }
}
