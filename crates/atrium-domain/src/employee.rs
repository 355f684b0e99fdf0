//! Employee module - managers and developers

use crate::ordering::personal_revision_order;
use crate::{Job, Revision};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Fields every employee carries regardless of role
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeProfile {
    /// Unique, immutable username
    pub username: String,

    /// Clearance level
    pub level: u32,

    /// Project memberships: project id -> username of its manager
    memberships: BTreeMap<String, String>,

    /// Revisions authored, in submission order
    revisions: Vec<Revision>,
}

impl EmployeeProfile {
    fn new(username: String, level: u32) -> Self {
        Self {
            username,
            level,
            memberships: BTreeMap::new(),
            revisions: Vec::new(),
        }
    }
}

/// A manager: owns projects and has developers reporting to it
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    profile: EmployeeProfile,
    developers: BTreeSet<String>,
    managed_projects: BTreeSet<String>,
}

impl Manager {
    /// Create a manager with no developers and no projects
    pub fn new(username: impl Into<String>, level: u32) -> Self {
        Self {
            profile: EmployeeProfile::new(username.into(), level),
            developers: BTreeSet::new(),
            managed_projects: BTreeSet::new(),
        }
    }

    /// Shared employee fields
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.profile.username
    }

    /// Clearance level
    pub fn level(&self) -> u32 {
        self.profile.level
    }

    /// Attach a developer to this manager
    pub fn add_developer(&mut self, username: impl Into<String>) {
        self.developers.insert(username.into());
    }

    /// Record a project created under this manager
    pub fn add_managed_project(&mut self, project: impl Into<String>) {
        self.managed_projects.insert(project.into());
    }

    /// Whether the developer reports to this manager
    pub fn has_developer(&self, username: &str) -> bool {
        self.developers.contains(username)
    }

    /// Whether the project was created under this manager
    pub fn has_managed_project(&self, project: &str) -> bool {
        self.managed_projects.contains(project)
    }

    /// Number of developers reporting to this manager
    pub fn num_developers(&self) -> usize {
        self.developers.len()
    }

    /// Number of projects created under this manager
    pub fn num_managed_projects(&self) -> usize {
        self.managed_projects.len()
    }

    /// Developer usernames in ascending order
    pub fn developers(&self) -> impl Iterator<Item = &str> {
        self.developers.iter().map(String::as_str)
    }
}

/// A developer: reports to exactly one manager for life
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    profile: EmployeeProfile,
    manager: String,
}

impl Developer {
    /// Create a developer reporting to `manager`
    pub fn new(username: impl Into<String>, manager: impl Into<String>, level: u32) -> Self {
        Self {
            profile: EmployeeProfile::new(username.into(), level),
            manager: manager.into(),
        }
    }

    /// Shared employee fields
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.profile.username
    }

    /// Username of the manager this developer reports to
    pub fn manager(&self) -> &str {
        &self.manager
    }
}

/// A registered employee
///
/// Role-specific data lives in the variant; everything both roles share is
/// reachable through the methods on this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Employee {
    /// See [`Manager`]
    Manager(Manager),

    /// See [`Developer`]
    Developer(Developer),
}

impl Employee {
    /// Shared employee fields
    pub fn profile(&self) -> &EmployeeProfile {
        match self {
            Employee::Manager(m) => &m.profile,
            Employee::Developer(d) => &d.profile,
        }
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        match self {
            Employee::Manager(m) => &mut m.profile,
            Employee::Developer(d) => &mut d.profile,
        }
    }

    /// Username
    pub fn username(&self) -> &str {
        &self.profile().username
    }

    /// Clearance level
    pub fn level(&self) -> u32 {
        self.profile().level
    }

    /// Job position, derived from the variant
    pub fn job(&self) -> Job {
        match self {
            Employee::Manager(_) => Job::Manager,
            Employee::Developer(_) => Job::Developer,
        }
    }

    /// The manager record, if this employee is one
    pub fn as_manager(&self) -> Option<&Manager> {
        match self {
            Employee::Manager(m) => Some(m),
            Employee::Developer(_) => None,
        }
    }

    /// Mutable manager record, if this employee is one
    pub fn as_manager_mut(&mut self) -> Option<&mut Manager> {
        match self {
            Employee::Manager(m) => Some(m),
            Employee::Developer(_) => None,
        }
    }

    /// The developer record, if this employee is one
    pub fn as_developer(&self) -> Option<&Developer> {
        match self {
            Employee::Developer(d) => Some(d),
            Employee::Manager(_) => None,
        }
    }

    /// Record membership of a project owned by `manager`
    pub fn join_project(&mut self, project: impl Into<String>, manager: impl Into<String>) {
        self.profile_mut()
            .memberships
            .insert(project.into(), manager.into());
    }

    /// Whether the employee's membership set holds the project
    pub fn is_member_of(&self, project: &str) -> bool {
        self.profile().memberships.contains_key(project)
    }

    /// Ids of every project in the membership set, ascending
    pub fn memberships(&self) -> impl Iterator<Item = &str> {
        self.profile().memberships.keys().map(String::as_str)
    }

    /// Memberships in projects the employee does not itself manage
    pub fn num_projects(&self) -> usize {
        let username = self.username();
        self.profile()
            .memberships
            .values()
            .filter(|manager| manager.as_str() != username)
            .count()
    }

    /// Append a revision to the personal list
    pub fn record_revision(&mut self, revision: Revision) {
        self.profile_mut().revisions.push(revision);
    }

    /// Number of revisions authored (the creation entries included)
    pub fn num_revisions(&self) -> usize {
        self.profile().revisions.len()
    }

    /// Date of the most recent revision authored, if any
    pub fn last_revision_date(&self) -> Option<NaiveDate> {
        self.profile().revisions.iter().map(|r| r.date).max()
    }

    /// Personal revisions: newest date first, then higher number, then project id
    pub fn revisions_sorted(&self) -> Vec<&Revision> {
        let mut revisions: Vec<&Revision> = self.profile().revisions.iter().collect();
        revisions.sort_by(|a, b| personal_revision_order(a, b));
        revisions
    }
}

impl From<Manager> for Employee {
    fn from(manager: Manager) -> Self {
        Employee::Manager(manager)
    }
}

impl From<Developer> for Employee {
    fn from(developer: Developer) -> Self {
        Employee::Developer(developer)
    }
}
