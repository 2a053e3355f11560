use crate::models::session::Session;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RATE: f64 = 200.0;

/// Per-account entry shortcuts: known academies, known groups and the
/// hourly rate proposed for new sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub account_id: String,
    pub academies: Vec<String>,
    pub groups: Vec<String>,
    pub default_rate: f64,
}

impl Preferences {
    pub fn new(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            academies: Vec::new(),
            groups: Vec::new(),
            default_rate: DEFAULT_RATE,
        }
    }

    pub fn add_academy(&mut self, name: &str) -> bool {
        push_unique(&mut self.academies, name)
    }

    pub fn add_group(&mut self, name: &str) -> bool {
        push_unique(&mut self.groups, name)
    }

    pub fn remove_academy(&mut self, name: &str) -> bool {
        remove_name(&mut self.academies, name)
    }

    pub fn remove_group(&mut self, name: &str) -> bool {
        remove_name(&mut self.groups, name)
    }

    /// Union the academies/groups found in `sessions` into the lists.
    /// Existing order is kept; new names are appended in first-seen order.
    /// Returns `(academies_added, groups_added)`.
    pub fn merge_from_sessions(&mut self, sessions: &[Session]) -> (usize, usize) {
        let mut academies = 0;
        let mut groups = 0;

        for s in sessions {
            if self.add_academy(&s.academy) {
                academies += 1;
            }
            if self.add_group(&s.group) {
                groups += 1;
            }
        }

        (academies, groups)
    }
}

fn push_unique(list: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || list.iter().any(|n| n == name) {
        return false;
    }
    list.push(name.to_string());
    true
}

fn remove_name(list: &mut Vec<String>, name: &str) -> bool {
    let name = name.trim();
    let before = list.len();
    list.retain(|n| n != name);
    list.len() != before
}
