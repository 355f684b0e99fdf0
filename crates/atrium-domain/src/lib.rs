//! Atrium Domain Layer
//!
//! Records and value types for the Atrium project registry: employees,
//! projects, artefacts and their revision history. The crate holds no
//! state of its own and performs no I/O; the store crate owns the records
//! and keeps them consistent.
//!
//! ## Key Concepts
//!
//! - **Employee**: a manager or a developer, with a clearance level
//! - **Project**: in-house (team, artefacts, confidentiality level) or outsourced
//! - **Artefact**: a named work product inside an in-house project
//! - **Revision**: an immutable, append-only update to an artefact
//! - **Clearance**: actors may only reach targets at or below their own level
//!
//! Role hierarchies are closed enums. Shared behaviour sits on the enum and
//! role-specific data in the variant, so every dispatch is an exhaustive match.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artefact;
pub mod employee;
pub mod job;
pub mod ordering;
pub mod project;
pub mod revision;
pub mod traits;

// Re-exports for convenience
pub use artefact::{Artefact, ArtefactDraft};
pub use employee::{Developer, Employee, EmployeeProfile, Manager};
pub use job::{Job, ProjectKind};
pub use project::{keyword_tokens, InHouseProject, OutsourcedProject, Project, MAX_CONFIDENTIALITY};
pub use revision::Revision;
pub use traits::Clearance;
