use serde::{Deserialize, Serialize};
use std::fmt;

/// A person taking part in the gift exchange. Identity is the pair of
/// name and email; two participants are the same person only if both match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Blacklist entries refer to people by name only.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// One giver/recipient tuple of a pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub recipient: Participant,
}

/// A complete assignment covering every participant exactly once as a giver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub assignments: Vec<Assignment>,
}

impl Pairing {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }
}

/// Unordered name pairs that must not be matched together in either
/// direction. Entries naming people not in the roster are inert.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: Vec<(String, String)>,
}

impl Blacklist {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn forbids(&self, a: &Participant, b: &Participant) -> bool {
        self.entries.iter().any(|(x, y)| {
            (a.matches_name(x) && b.matches_name(y)) || (a.matches_name(y) && b.matches_name(x))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One message handed to the mail transport. Serialized as-is into the
/// JSON request body of the mail API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}
