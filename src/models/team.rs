// src/models/team.rs
// DOCUMENTATION: Lunch group data structure
// PURPOSE: Two seniors and two juniors drawn for today's lunch

use serde::{Deserialize, Serialize};

/// Today's lunch group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub seniors: Vec<String>,
    pub juniors: Vec<String>,
}

impl Team {
    /// Seniors first, then juniors
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.seniors
            .iter()
            .chain(self.juniors.iter())
            .map(String::as_str)
    }
}
