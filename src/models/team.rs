use serde::{Deserialize, Serialize};

use crate::models::{Assignee, Identity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl TeamMember {
    pub fn assignee(&self) -> Assignee {
        Assignee {
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Find a roster member by id, or by name ignoring case.
pub fn find_member<'a>(roster: &'a [TeamMember], reference: &str) -> Option<&'a TeamMember> {
    roster
        .iter()
        .find(|m| m.id == reference)
        .or_else(|| roster.iter().find(|m| m.name.eq_ignore_ascii_case(reference)))
}
