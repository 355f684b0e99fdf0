//! Revision module - append-only history entries

use chrono::NaiveDate;

/// One recorded update to an artefact
///
/// Revisions are immutable once created. The same entry is kept in three
/// places: the artefact's own history, the project ledger and the author's
/// personal list. Sequence numbers are per artefact, not global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// Sequence number within the owning artefact
    pub number: u32,

    /// Username of the author
    pub author: String,

    /// Calendar date of the update
    pub date: NaiveDate,

    /// Free-text comment (the description, for the creation entry)
    pub comment: String,

    /// Name of the owning artefact
    pub artefact: String,

    /// Identifier of the owning project
    pub project: String,
}

impl Revision {
    /// Create a new revision
    pub fn new(
        number: u32,
        author: impl Into<String>,
        date: NaiveDate,
        comment: impl Into<String>,
        artefact: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            number,
            author: author.into(),
            date,
            comment: comment.into(),
            artefact: artefact.into(),
            project: project.into(),
        }
    }
}
