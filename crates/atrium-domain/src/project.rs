//! Project module - in-house and outsourced projects

use crate::ordering::artefact_listing_order;
use crate::{Artefact, Revision};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Highest confidentiality level an in-house project may carry
pub const MAX_CONFIDENTIALITY: u32 = 5;

/// Split a keyword string on single spaces
///
/// Inner empty tokens are kept, so `"a  b"` yields `["a", "", "b"]`.
/// Trailing empty tokens are dropped: `"a "` yields `["a"]` and a string of
/// only spaces yields nothing. The empty string yields one empty token.
pub fn keyword_tokens(keywords: &str) -> impl Iterator<Item = &str> {
    let trimmed = keywords.trim_end_matches(' ');
    let blank = trimmed.is_empty() && !keywords.is_empty();
    trimmed.split(' ').filter(move |_| !blank)
}

/// A project developed by an internal team
#[derive(Debug, Clone, PartialEq)]
pub struct InHouseProject {
    id: String,
    manager: String,
    keywords: String,
    level: u32,
    team: Vec<String>,
    artefacts: BTreeMap<String, Artefact>,
    ledger: Vec<Revision>,
}

impl InHouseProject {
    /// Create an in-house project with an empty team and ledger
    pub fn new(
        id: impl Into<String>,
        manager: impl Into<String>,
        keywords: impl Into<String>,
        level: u32,
    ) -> Self {
        Self {
            id: id.into(),
            manager: manager.into(),
            keywords: keywords.into(),
            level,
            team: Vec::new(),
            artefacts: BTreeMap::new(),
            ledger: Vec::new(),
        }
    }

    /// Project identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Username of the owning manager
    pub fn manager(&self) -> &str {
        &self.manager
    }

    /// Keyword string as given at creation
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Confidentiality level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Add a member to the team; the manager is never part of it
    pub fn add_member(&mut self, username: impl Into<String>) {
        self.team.push(username.into());
    }

    /// Whether the user sits on the team
    pub fn has_member(&self, username: &str) -> bool {
        self.team.iter().any(|member| member == username)
    }

    /// Team usernames in joining order
    pub fn team(&self) -> &[String] {
        &self.team
    }

    /// Number of team members
    pub fn num_members(&self) -> usize {
        self.team.len()
    }

    /// File an artefact under its name
    pub fn add_artefact(&mut self, artefact: Artefact) {
        self.artefacts.insert(artefact.name().to_string(), artefact);
    }

    /// Whether an artefact with this name exists
    pub fn has_artefact(&self, name: &str) -> bool {
        self.artefacts.contains_key(name)
    }

    /// Look up an artefact by name
    pub fn artefact(&self, name: &str) -> Option<&Artefact> {
        self.artefacts.get(name)
    }

    /// Mutable artefact lookup
    pub fn artefact_mut(&mut self, name: &str) -> Option<&mut Artefact> {
        self.artefacts.get_mut(name)
    }

    /// Number of artefacts
    pub fn num_artefacts(&self) -> usize {
        self.artefacts.len()
    }

    /// Artefacts, most recently revised first, then by name
    pub fn artefacts_sorted(&self) -> Vec<&Artefact> {
        let mut artefacts: Vec<&Artefact> = self.artefacts.values().collect();
        artefacts.sort_by(|a, b| artefact_listing_order(a, b));
        artefacts
    }

    /// Append to the project-wide ledger
    pub fn record_revision(&mut self, revision: Revision) {
        self.ledger.push(revision);
    }

    /// Every revision applied within the project, in submission order
    pub fn ledger(&self) -> &[Revision] {
        &self.ledger
    }

    /// Sum of the public revision counts of all artefacts
    pub fn num_revisions(&self) -> usize {
        self.artefacts.values().map(Artefact::revision_count).sum()
    }

    /// Most recent date in the ledger; `None` until an artefact is filed
    pub fn recent_revision_date(&self) -> Option<NaiveDate> {
        self.ledger.iter().map(|r| r.date).max()
    }
}

/// A project delegated to an external company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsourcedProject {
    id: String,
    manager: String,
    keywords: String,
    company: String,
}

impl OutsourcedProject {
    /// Create an outsourced project
    pub fn new(
        id: impl Into<String>,
        manager: impl Into<String>,
        keywords: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            manager: manager.into(),
            keywords: keywords.into(),
            company: company.into(),
        }
    }

    /// Project identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Username of the owning manager
    pub fn manager(&self) -> &str {
        &self.manager
    }

    /// Keyword string as given at creation
    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    /// Name of the company doing the work
    pub fn company(&self) -> &str {
        &self.company
    }
}

/// A registered project of either kind
#[derive(Debug, Clone, PartialEq)]
pub enum Project {
    /// See [`InHouseProject`]
    InHouse(InHouseProject),

    /// See [`OutsourcedProject`]
    Outsourced(OutsourcedProject),
}

impl Project {
    /// Project identifier
    pub fn id(&self) -> &str {
        match self {
            Project::InHouse(p) => p.id(),
            Project::Outsourced(p) => p.id(),
        }
    }

    /// Username of the owning manager
    pub fn manager(&self) -> &str {
        match self {
            Project::InHouse(p) => p.manager(),
            Project::Outsourced(p) => p.manager(),
        }
    }

    /// Keyword string as given at creation
    pub fn keywords(&self) -> &str {
        match self {
            Project::InHouse(p) => p.keywords(),
            Project::Outsourced(p) => p.keywords(),
        }
    }

    /// The in-house record, if this is one
    pub fn as_in_house(&self) -> Option<&InHouseProject> {
        match self {
            Project::InHouse(p) => Some(p),
            Project::Outsourced(_) => None,
        }
    }

    /// Mutable in-house record, if this is one
    pub fn as_in_house_mut(&mut self) -> Option<&mut InHouseProject> {
        match self {
            Project::InHouse(p) => Some(p),
            Project::Outsourced(_) => None,
        }
    }

    /// The outsourced record, if this is one
    pub fn as_outsourced(&self) -> Option<&OutsourcedProject> {
        match self {
            Project::Outsourced(p) => Some(p),
            Project::InHouse(_) => None,
        }
    }

    /// Whether the project is outsourced
    pub fn is_outsourced(&self) -> bool {
        matches!(self, Project::Outsourced(_))
    }
}

impl From<InHouseProject> for Project {
    fn from(project: InHouseProject) -> Self {
        Project::InHouse(project)
    }
}

impl From<OutsourcedProject> for Project {
    fn from(project: OutsourcedProject) -> Self {
        Project::Outsourced(project)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: tokens joined by single spaces give back the input
        /// without its trailing spaces
        #[test]
        fn test_tokens_rejoin_to_trimmed_input(keywords in "[a-z ]{0,24}") {
            let tokens: Vec<&str> = keyword_tokens(&keywords).collect();
            let trimmed = keywords.trim_end_matches(' ');
            prop_assert_eq!(tokens.join(" "), trimmed.to_string());
            if !keywords.is_empty() {
                prop_assert!(tokens.last().map_or(true, |t| !t.is_empty()));
            }
        }
    }
}
