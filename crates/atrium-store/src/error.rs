//! Error taxonomy for registry operations

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors returned by [`MemoryRegistry`](crate::MemoryRegistry)
///
/// Every variant is a deterministic function of the current state. A failed
/// call leaves the registry untouched and usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Username already registered
    #[error("User {0} already exists.")]
    DuplicateUser(String),

    /// Project id already taken (across both kinds)
    #[error("{0} project already exists.")]
    DuplicateProject(String),

    /// No manager with that username (absent, or registered as a developer)
    #[error("Project manager {0} does not exist.")]
    UnknownManager(String),

    /// Referenced employee is not registered
    #[error("{0}: does not exist.")]
    UnknownEmployee(String),

    /// Acting user is not registered
    #[error("User {0} does not exist.")]
    UnknownUser(String),

    /// No project with that id, or an outsourced one where in-house is required
    #[error("{0} project does not exist.")]
    ProjectNotFound(String),

    /// No artefact with that name in the project
    #[error("{0} does not exist in the project.")]
    ArtefactNotFound(String),

    /// The named manager does not own the project
    #[error("{project} is managed by {manager}.")]
    ProjectNotManagedBy {
        /// Project id
        project: String,
        /// Actual owner of the project
        manager: String,
    },

    /// Member already on the team, or is the project's manager
    #[error("{0}: already a member.")]
    AlreadyMember(String),

    /// Artefact name already used in the project
    #[error("{0}: already in the project.")]
    ArtefactAlreadyExists(String),

    /// Member's clearance is below the project's level
    #[error("{0}: insufficient clearance level.")]
    InsufficientClearance(String),

    /// Manager's clearance is below the requested project level
    #[error("Project manager {manager} has clearance level {level}.")]
    InsufficientManagerClearance {
        /// Manager username
        manager: String,
        /// The manager's clearance level
        level: u32,
    },

    /// Artefact level is above the project's level
    #[error("{0}: exceeds project confidentiality level.")]
    ArtefactExceedsProjectLevel(String),

    /// Actor is not allowed to act on the project
    #[error("User {user} does not belong to the team of {project}.")]
    MemberNotInTeam {
        /// Acting user
        user: String,
        /// Project id
        project: String,
    },

    /// An in-house-only query targeted an outsourced project
    #[error("{0} is an outsourced project.")]
    OutsourcedProjectMismatch(String),

    /// Requested confidentiality level has no bucket
    #[error("Confidentiality level {0} is out of range.")]
    LevelOutOfRange(u32),

    /// Neither keyword index knows the keyword
    #[error("No projects with keyword {0}.")]
    NoMatchForKeyword(String),

    /// No in-house project within the confidentiality range
    #[error("No projects within levels {lower} and {upper}.")]
    NoProjectInRange {
        /// Lower bound (after swapping)
        lower: u32,
        /// Upper bound (after swapping)
        upper: u32,
    },

    /// Nobody has authored a revision yet
    #[error("There are no workaholics.")]
    NoActivity,

    /// No two employees share an in-house team
    #[error("Cannot determine employees with common projects.")]
    NoCommonProjects,
}
