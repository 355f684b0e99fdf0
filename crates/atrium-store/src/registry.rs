//! Entity store and membership graph

use crate::error::{RegistryError, Result};
use crate::index::{ConfidentialityBuckets, KeywordIndex};
use atrium_domain::{
    Clearance, Developer, Employee, InHouseProject, Manager, OutsourcedProject, Project,
    MAX_CONFIDENTIALITY,
};
use std::collections::{BTreeMap, HashMap};
use tracing::info;

/// In-memory registry of employees, projects, artefacts and revisions
///
/// The registry owns every record. Each operation validates completely
/// before it mutates anything, so a returned error means nothing changed.
/// Listings are materialised `Vec`s borrowed from the registry.
///
/// # Examples
///
/// ```
/// use atrium_store::MemoryRegistry;
///
/// let mut registry = MemoryRegistry::new();
/// registry.register_manager("alice", 3).unwrap();
/// registry.register_developer("bob", "alice", 2).unwrap();
/// registry.create_in_house_project("P1", "alice", "security audit", 2).unwrap();
/// registry.add_employee_to_project("alice", "P1", "bob").unwrap();
///
/// assert!(registry.in_house_project("P1").unwrap().has_member("bob"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    /// Employees keyed (and therefore iterated) by username
    pub(crate) employees: BTreeMap<String, Employee>,

    /// Projects in creation order
    pub(crate) projects: Vec<Project>,

    /// Project id -> position in `projects`
    pub(crate) project_slots: HashMap<String, usize>,

    pub(crate) in_house_keywords: KeywordIndex,
    pub(crate) outsourced_keywords: KeywordIndex,
    pub(crate) confidentiality: ConfidentialityBuckets,
}

impl MemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manager with no developers and no projects
    pub fn register_manager(&mut self, username: &str, level: u32) -> Result<()> {
        if self.has_user(username) {
            return Err(RegistryError::DuplicateUser(username.to_string()));
        }

        self.employees
            .insert(username.to_string(), Manager::new(username, level).into());
        info!("Registered manager '{}' with clearance level {}", username, level);
        Ok(())
    }

    /// Register a developer reporting to an existing manager
    pub fn register_developer(&mut self, username: &str, manager: &str, level: u32) -> Result<()> {
        if self.has_user(username) {
            return Err(RegistryError::DuplicateUser(username.to_string()));
        }
        let boss = self.manager_mut(manager)?;
        boss.add_developer(username);

        self.employees.insert(
            username.to_string(),
            Developer::new(username, manager, level).into(),
        );
        info!(
            "Registered developer '{}' under '{}' with clearance level {}",
            username, manager, level
        );
        Ok(())
    }

    /// Create an in-house project and index it by keyword and level
    pub fn create_in_house_project(
        &mut self,
        id: &str,
        manager: &str,
        keywords: &str,
        level: u32,
    ) -> Result<()> {
        let owner = self.manager(manager)?;
        if self.has_project(id) {
            return Err(RegistryError::DuplicateProject(id.to_string()));
        }
        if !owner.level().clears(&level) {
            return Err(RegistryError::InsufficientManagerClearance {
                manager: manager.to_string(),
                level: owner.level(),
            });
        }
        if level > MAX_CONFIDENTIALITY {
            return Err(RegistryError::LevelOutOfRange(level));
        }

        self.in_house_keywords.insert(id, keywords);
        let filed = self.confidentiality.insert(id, level);
        debug_assert!(filed, "level {} passed the range check", level);
        self.manager_mut(manager)?.add_managed_project(id);
        self.push_project(InHouseProject::new(id, manager, keywords, level).into());
        info!("Created in-house project '{}' for '{}' at level {}", id, manager, level);
        Ok(())
    }

    /// Create an outsourced project and index it by keyword
    pub fn create_outsourced_project(
        &mut self,
        id: &str,
        manager: &str,
        keywords: &str,
        company: &str,
    ) -> Result<()> {
        self.manager(manager)?;
        if self.has_project(id) {
            return Err(RegistryError::DuplicateProject(id.to_string()));
        }

        self.outsourced_keywords.insert(id, keywords);
        self.manager_mut(manager)?.add_managed_project(id);
        self.push_project(OutsourcedProject::new(id, manager, keywords, company).into());
        info!("Created outsourced project '{}' for '{}' with {}", id, manager, company);
        Ok(())
    }

    fn push_project(&mut self, project: Project) {
        self.project_slots
            .insert(project.id().to_string(), self.projects.len());
        self.projects.push(project);
    }

    /// Whether any employee has this username
    pub fn has_user(&self, username: &str) -> bool {
        self.employees.contains_key(username)
    }

    /// Whether a manager has this username
    pub fn has_manager(&self, username: &str) -> bool {
        self.manager(username).is_ok()
    }

    /// Whether a project of either kind has this id
    pub fn has_project(&self, id: &str) -> bool {
        self.project_slots.contains_key(id)
    }

    /// Whether an in-house project has this id
    pub fn has_in_house(&self, id: &str) -> bool {
        self.in_house_project(id).is_ok()
    }

    /// Whether the project exists and is outsourced
    pub fn is_outsourced(&self, id: &str) -> Result<bool> {
        Ok(self.project(id)?.is_outsourced())
    }

    /// Look up an employee
    pub fn employee(&self, username: &str) -> Result<&Employee> {
        self.employees
            .get(username)
            .ok_or_else(|| RegistryError::UnknownEmployee(username.to_string()))
    }

    /// Look up a manager; a developer's username reads as absent
    pub fn manager(&self, username: &str) -> Result<&Manager> {
        self.employees
            .get(username)
            .and_then(Employee::as_manager)
            .ok_or_else(|| RegistryError::UnknownManager(username.to_string()))
    }

    pub(crate) fn manager_mut(&mut self, username: &str) -> Result<&mut Manager> {
        self.employees
            .get_mut(username)
            .and_then(Employee::as_manager_mut)
            .ok_or_else(|| RegistryError::UnknownManager(username.to_string()))
    }

    /// Look up a project of either kind
    pub fn project(&self, id: &str) -> Result<&Project> {
        self.project_slots
            .get(id)
            .map(|&slot| &self.projects[slot])
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))
    }

    /// Look up an in-house project; an outsourced id reads as absent
    pub fn in_house_project(&self, id: &str) -> Result<&InHouseProject> {
        self.project(id)?
            .as_in_house()
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))
    }

    pub(crate) fn in_house_project_mut(&mut self, id: &str) -> Result<&mut InHouseProject> {
        let slot = *self
            .project_slots
            .get(id)
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))?;
        self.projects[slot]
            .as_in_house_mut()
            .ok_or_else(|| RegistryError::ProjectNotFound(id.to_string()))
    }

    /// In-house record for detail views; outsourced ids are a mismatch
    pub fn project_details(&self, id: &str) -> Result<&InHouseProject> {
        match self.project(id)? {
            Project::InHouse(project) => Ok(project),
            Project::Outsourced(_) => Err(RegistryError::OutsourcedProjectMismatch(id.to_string())),
        }
    }

    /// Every employee, ascending by username
    pub fn list_employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    /// Every project, in creation order
    pub fn list_projects(&self) -> Vec<&Project> {
        self.projects.iter().collect()
    }

    /// Put `member` on the team of `project`, owned by `manager`
    ///
    /// On success the project joins both the member's and the manager's
    /// membership sets.
    pub fn add_employee_to_project(&mut self, manager: &str, project: &str, member: &str) -> Result<()> {
        self.manager(manager)?;
        let target = self.in_house_project(project)?;
        if target.manager() != manager {
            return Err(RegistryError::ProjectNotManagedBy {
                project: project.to_string(),
                manager: target.manager().to_string(),
            });
        }
        if target.has_member(member) || member == manager {
            return Err(RegistryError::AlreadyMember(member.to_string()));
        }
        let candidate = self.employee(member)?;
        if !candidate.clears(target) {
            return Err(RegistryError::InsufficientClearance(member.to_string()));
        }

        self.in_house_project_mut(project)?.add_member(member);
        for username in [member, manager] {
            if let Some(employee) = self.employees.get_mut(username) {
                employee.join_project(project, manager);
            }
        }
        info!("Added '{}' to the team of '{}'", member, project);
        Ok(())
    }

    /// Team of an in-house project, in joining order
    pub fn list_team(&self, project: &str) -> Result<Vec<&Employee>> {
        self.project_details(project)?
            .team()
            .iter()
            .map(|username| self.employee(username))
            .collect()
    }

    /// Developers reporting to `manager`, ascending by username
    pub fn list_managed_developers(&self, manager: &str) -> Result<Vec<&Employee>> {
        let boss = self.manager(manager)?;
        Ok(self
            .employees
            .values()
            .filter(|e| {
                e.as_developer()
                    .is_some_and(|d| d.manager() == manager && boss.has_developer(d.username()))
            })
            .collect())
    }
}
