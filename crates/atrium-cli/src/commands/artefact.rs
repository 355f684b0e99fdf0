//! Artefact commands: filing, revising and the project detail view.

use crate::error::Result;
use crate::input::LineSource;
use crate::interpreter::Interpreter;
use atrium_domain::ArtefactDraft;
use atrium_store::RegistryError;
use std::io::Write;

/// Whether a filing failure concerns only the one artefact.
fn artefact_level(error: &RegistryError) -> bool {
    matches!(
        error,
        RegistryError::ArtefactAlreadyExists(_) | RegistryError::ArtefactExceedsProjectLevel(_)
    )
}

/// `artefacts <owner> <id…>` / `<date>` / `<n>` / n × `<name> <level> <description…>`
pub fn execute_artefacts<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let owner = session.scanner.token()?;
    let id = session.scanner.rest_of_line()?.trim().to_string();
    let date_text = session.scanner.rest_of_line()?.trim().to_string();
    let count = session.scanner.integer()?;
    session.scanner.rest_of_line()?;

    let mut drafts = Vec::new();
    for _ in 0..count {
        let name = session.scanner.token()?;
        let level = session.scanner.integer()?;
        let description = session.scanner.rest_of_line()?.trim().to_string();
        drafts.push(ArtefactDraft::new(name, owner.as_str(), level, description));
    }
    let date = session.formatter.parse_date(&date_text)?;

    let mut titled = false;
    for draft in drafts {
        let name = draft.name.clone();
        match session.registry.add_artefact_to_project(draft, &id, date) {
            Ok(()) => {
                if !titled {
                    session.title("Latest project artefacts:")?;
                    titled = true;
                }
                session.emit(format!("{}: added to the project.", name))?;
            }
            Err(e) if artefact_level(&e) => {
                if !titled {
                    session.title("Latest project artefacts:")?;
                    titled = true;
                }
                session.reject(&e)?;
            }
            Err(e) => return session.reject(&e),
        }
    }
    Ok(())
}

/// `project <id…>`
pub fn execute_project<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let id = session.scanner.rest_of_line()?.trim().to_string();
    let registry = &session.registry;
    let formatter = &session.formatter;

    let project = registry.project_details(&id)?;
    let manager = registry.employee(project.manager())?;
    let header = format!(
        "{} [{}] managed by {} [{}]:",
        project.id(),
        project.level(),
        manager.username(),
        manager.level()
    );

    let mut lines = Vec::new();
    for member in registry.list_team(&id)? {
        lines.push(format!("{} [{}]", member.username(), member.level()));
    }
    for artefact in registry.list_artefacts(&id)? {
        lines.push(format!("{} [{}]", artefact.name(), artefact.level()));
        for r in artefact.revisions_desc() {
            lines.push(format!(
                "revision {} {} {} {}",
                r.number,
                r.author,
                formatter.date(r.date),
                r.comment
            ));
        }
    }

    session.title(&header)?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}

/// `revision <user> <id…>` / `<artefact> <date> <comment…>`
pub fn execute_revision<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let username = session.scanner.token()?;
    let id = session.scanner.rest_of_line()?.trim().to_string();
    let artefact = session.scanner.token()?;
    let date_text = session.scanner.token()?;
    let comment = session.scanner.rest_of_line()?.trim().to_string();
    let date = session.formatter.parse_date(&date_text)?;

    let number = session
        .registry
        .add_revision(&username, &id, &artefact, date, &comment)?;
    session.emit(format!(
        "Revision {} of artefact {} was submitted.",
        number, artefact
    ))
}
