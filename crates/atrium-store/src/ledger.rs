//! Artefact ledger: artefacts and their revision history

use crate::error::{RegistryError, Result};
use crate::MemoryRegistry;
use atrium_domain::{Artefact, ArtefactDraft, Clearance, Revision};
use chrono::NaiveDate;
use tracing::info;

impl MemoryRegistry {
    /// File a new artefact in an in-house project
    ///
    /// The owner must sit on the team or manage the project. A creation
    /// revision numbered 1 goes to the project ledger and to the owner's
    /// personal list.
    pub fn add_artefact_to_project(
        &mut self,
        draft: ArtefactDraft,
        project: &str,
        date: NaiveDate,
    ) -> Result<()> {
        let owner = draft.owner.clone();
        if !self.has_user(&owner) {
            return Err(RegistryError::UnknownEmployee(owner));
        }
        let target = self.in_house_project(project)?;
        if !target.has_member(&owner) && target.manager() != owner {
            return Err(RegistryError::MemberNotInTeam {
                user: owner,
                project: project.to_string(),
            });
        }
        if target.has_artefact(&draft.name) {
            return Err(RegistryError::ArtefactAlreadyExists(draft.name));
        }
        if !target.clears(&draft.level) {
            return Err(RegistryError::ArtefactExceedsProjectLevel(draft.name));
        }

        let creation = Revision::new(
            1,
            owner.as_str(),
            date,
            draft.description.as_str(),
            draft.name.as_str(),
            project,
        );
        let name = draft.name.clone();
        let target = self.in_house_project_mut(project)?;
        target.add_artefact(Artefact::new(draft, project, date));
        target.record_revision(creation.clone());
        if let Some(employee) = self.employees.get_mut(&owner) {
            employee.record_revision(creation);
        }
        info!("Filed artefact '{}' in '{}' for '{}'", name, project, owner);
        Ok(())
    }

    /// Submit a revision of an existing artefact
    ///
    /// Only team members may revise. The revision is stored under
    /// `len(history) + 1` and the returned number is one less than that.
    pub fn add_revision(
        &mut self,
        username: &str,
        project: &str,
        artefact: &str,
        date: NaiveDate,
        comment: &str,
    ) -> Result<u32> {
        if !self.has_user(username) {
            return Err(RegistryError::UnknownUser(username.to_string()));
        }
        let target = self.in_house_project(project)?;
        if !target.has_artefact(artefact) {
            return Err(RegistryError::ArtefactNotFound(artefact.to_string()));
        }
        if !target.has_member(username) {
            return Err(RegistryError::MemberNotInTeam {
                user: username.to_string(),
                project: project.to_string(),
            });
        }

        let target = self.in_house_project_mut(project)?;
        let record = target
            .artefact_mut(artefact)
            .ok_or_else(|| RegistryError::ArtefactNotFound(artefact.to_string()))?;
        let number = record.next_revision_number();
        let revision = Revision::new(number, username, date, comment, artefact, project);
        record.push_revision(revision.clone());
        target.record_revision(revision.clone());
        if let Some(employee) = self.employees.get_mut(username) {
            employee.record_revision(revision);
        }
        info!("Stored revision {} of '{}' in '{}' by '{}'", number, artefact, project, username);
        Ok(number - 1)
    }

    /// Look up an artefact inside an in-house project
    pub fn artefact(&self, project: &str, name: &str) -> Result<&Artefact> {
        self.in_house_project(project)?
            .artefact(name)
            .ok_or_else(|| RegistryError::ArtefactNotFound(name.to_string()))
    }

    /// Artefacts of a project, most recently revised first
    pub fn list_artefacts(&self, project: &str) -> Result<Vec<&Artefact>> {
        Ok(self.project_details(project)?.artefacts_sorted())
    }

    /// History of one artefact, highest stored number first
    pub fn list_artefact_revisions(&self, project: &str, artefact: &str) -> Result<Vec<&Revision>> {
        Ok(self.artefact(project, artefact)?.revisions_desc())
    }

    /// Revisions authored by an employee, newest first
    pub fn list_employee_revisions(&self, username: &str) -> Result<Vec<&Revision>> {
        Ok(self.employee(username)?.revisions_sorted())
    }
}
