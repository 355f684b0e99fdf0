//! Atrium Storage Layer
//!
//! In-memory registry of employees, projects, artefacts and revisions,
//! together with the secondary indexes and the query engine built on top.
//!
//! # Architecture
//!
//! - `registry`: entity tables and the membership graph
//! - `ledger`: artefacts and their append-only revision history
//! - `index`: keyword and confidentiality indexes, filled at creation time
//! - `query`: keyword, confidentiality, workaholic and common-pair queries
//!
//! Every operation validates before it mutates, so an `Err` leaves the
//! registry exactly as it was.
//!
//! # Examples
//!
//! ```
//! use atrium_store::MemoryRegistry;
//!
//! let mut registry = MemoryRegistry::new();
//! registry.register_manager("alice", 3).unwrap();
//! registry.create_in_house_project("P1", "alice", "security audit", 2).unwrap();
//!
//! let matches = registry.list_by_keyword("audit").unwrap();
//! assert_eq!(matches.in_house.len(), 1);
//! ```

#![warn(missing_docs)]

mod error;
pub mod index;
mod ledger;
mod query;
mod registry;

pub use error::{RegistryError, Result};
pub use query::{CommonPair, KeywordMatches, WORKAHOLIC_LIMIT};
pub use registry::MemoryRegistry;
