//! Artefact module - versioned work products of an in-house project

use crate::ordering::revision_number_desc;
use crate::Revision;
use chrono::NaiveDate;

/// Caller-supplied fields of an artefact that has not been filed yet
///
/// The registry turns a draft into an [`Artefact`] once the owner, project
/// and clearance checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtefactDraft {
    /// Name, unique within the owning project
    pub name: String,

    /// Username of the employee filing the artefact
    pub owner: String,

    /// Confidentiality level, may not exceed the project's
    pub level: u32,

    /// Free-text description
    pub description: String,
}

impl ArtefactDraft {
    /// Create a new draft
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        level: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            level,
            description: description.into(),
        }
    }
}

/// An artefact filed in an in-house project
///
/// The history always holds at least the creation entry. That entry is
/// bookkeeping only: [`Artefact::revision_count`] is `len - 1` while
/// [`Artefact::next_revision_number`] is `len + 1`. Callers of
/// [`Artefact::push_revision`] report `number - 1` outward.
#[derive(Debug, Clone, PartialEq)]
pub struct Artefact {
    name: String,
    owner: String,
    level: u32,
    description: String,
    revisions: Vec<Revision>,
    last_date: NaiveDate,
}

impl Artefact {
    /// Build an artefact from a draft, seeding its creation entry
    pub fn new(draft: ArtefactDraft, project: &str, date: NaiveDate) -> Self {
        let mut artefact = Self {
            name: draft.name,
            owner: draft.owner,
            level: draft.level,
            description: draft.description,
            revisions: Vec::new(),
            last_date: date,
        };
        let seed = Revision::new(
            artefact.next_revision_number(),
            artefact.owner.clone(),
            date,
            artefact.description.clone(),
            artefact.name.clone(),
            project,
        );
        artefact.revisions.push(seed);
        artefact
    }

    /// Artefact name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Username of the employee that filed the artefact
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Confidentiality level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Description given at creation
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Date of the latest revision (creation date until revised)
    pub fn last_date(&self) -> NaiveDate {
        self.last_date
    }

    /// Public revision count, excluding the creation entry
    pub fn revision_count(&self) -> usize {
        self.revisions.len() - 1
    }

    /// Number the next stored revision receives
    pub fn next_revision_number(&self) -> u32 {
        self.revisions.len() as u32 + 1
    }

    /// Append a revision and move the last-revision date
    pub fn push_revision(&mut self, revision: Revision) {
        self.last_date = revision.date;
        self.revisions.push(revision);
    }

    /// Full history, most recent number first
    pub fn revisions_desc(&self) -> Vec<&Revision> {
        let mut revisions: Vec<&Revision> = self.revisions.iter().collect();
        revisions.sort_by(|a, b| revision_number_desc(a, b));
        revisions
    }
}
