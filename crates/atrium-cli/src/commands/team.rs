//! Team commands: membership batches and a manager's developers.

use crate::error::Result;
use crate::input::LineSource;
use crate::interpreter::Interpreter;
use atrium_store::RegistryError;
use std::io::Write;

/// Whether a team-join failure concerns only the one member.
fn member_level(error: &RegistryError) -> bool {
    matches!(
        error,
        RegistryError::AlreadyMember(_)
            | RegistryError::UnknownEmployee(_)
            | RegistryError::InsufficientClearance(_)
    )
}

/// `team <manager> <id…>` / `<n> <member>…`
///
/// Member-level failures are reported inline and the batch goes on; a
/// failure about the manager or the project ends the batch.
pub fn execute_team<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let manager = session.scanner.token()?;
    let id = session.scanner.rest_of_line()?.trim().to_string();
    let count = session.scanner.integer()?;
    let mut members = Vec::new();
    for _ in 0..count {
        members.push(session.scanner.token()?);
    }

    let mut titled = false;
    for member in members {
        match session.registry.add_employee_to_project(&manager, &id, &member) {
            Ok(()) => {
                if !titled {
                    session.title("Latest team members:")?;
                    titled = true;
                }
                session.emit(format!("{}: added to the team.", member))?;
            }
            Err(e) if member_level(&e) => {
                if !titled {
                    session.title("Latest team members:")?;
                    titled = true;
                }
                session.reject(&e)?;
            }
            Err(e) => return session.reject(&e),
        }
    }
    Ok(())
}

/// `manages <manager…>`
pub fn execute_manages<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let manager = session.scanner.rest_of_line()?.trim().to_string();
    let formatter = &session.formatter;
    let mut lines = Vec::new();
    for developer in session.registry.list_managed_developers(&manager)? {
        lines.push(developer.username().to_string());
        for r in developer.revisions_sorted() {
            lines.push(format!(
                "{}, {}, revision {}, {}, {}",
                r.project,
                r.artefact,
                r.number,
                formatter.date(r.date),
                r.comment
            ));
        }
    }

    session.title(&format!("Manager {}:", manager))?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}
