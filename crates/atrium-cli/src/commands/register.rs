//! Registration commands: employees and projects.

use crate::error::{CliError, Result};
use crate::input::LineSource;
use crate::interpreter::Interpreter;
use atrium_domain::{Employee, Job, Project, ProjectKind};
use std::io::Write;

/// `register <job> <user> [<manager>] <level>`
pub fn execute_register<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let job_word = session.scanner.token()?;
    let username = session.scanner.token()?;
    let Some(job) = Job::parse(&job_word) else {
        session.scanner.skip_line();
        return Err(CliError::UnknownJobPosition);
    };

    let manager = match job {
        Job::Developer => Some(session.scanner.token()?),
        Job::Manager => None,
    };
    let level = session.scanner.integer()?;
    session.scanner.rest_of_line()?;

    match &manager {
        Some(manager) => session
            .registry
            .register_developer(&username, manager, level)?,
        None => session.registry.register_manager(&username, level)?,
    }
    session.emit(format!(
        "User {} was registered as {} with clearance level {}.",
        username, job, level
    ))
}

fn employee_line(employee: &Employee) -> String {
    match employee {
        Employee::Manager(manager) => format!(
            "manager {} [{}, {}, {}]",
            manager.username(),
            manager.num_developers(),
            manager.num_managed_projects(),
            employee.num_projects() + manager.num_managed_projects()
        ),
        Employee::Developer(developer) => format!(
            "developer {} is managed by {} [{}]",
            developer.username(),
            developer.manager(),
            employee.num_projects()
        ),
    }
}

/// `users`
pub fn execute_users<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let lines: Vec<String> = session
        .registry
        .list_employees()
        .into_iter()
        .map(employee_line)
        .collect();
    if lines.is_empty() {
        return session.report("No users registered.");
    }

    session.title("All registered users:")?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}

/// `create <manager> <type> <id…>` / `<n> <keywords…>` / `<level>` or `<company>`
pub fn execute_create<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let manager = session.scanner.token()?;
    let kind_word = session.scanner.token()?;
    let id = session.scanner.rest_of_line()?.trim().to_string();
    let count = session.scanner.integer()?;
    let mut keywords = Vec::new();
    for _ in 0..count {
        keywords.push(session.scanner.token()?);
    }
    let keywords = keywords.join(" ");
    session.scanner.rest_of_line()?;

    let Some(kind) = ProjectKind::parse(&kind_word) else {
        session.scanner.rest_of_line()?;
        return Err(CliError::UnknownProjectType);
    };
    match kind {
        ProjectKind::InHouse => {
            let level = session.scanner.integer()?;
            session.scanner.rest_of_line()?;
            session
                .registry
                .create_in_house_project(&id, &manager, &keywords, level)?;
        }
        ProjectKind::Outsourced => {
            let company = session.scanner.token()?;
            session
                .registry
                .create_outsourced_project(&id, &manager, &keywords, &company)?;
        }
    }
    session.emit(format!("{} project was created.", id))
}

fn project_line(project: &Project) -> String {
    match project {
        Project::InHouse(p) => format!(
            "in-house {} is managed by {} [{}, {}, {}, {}]",
            p.id(),
            p.manager(),
            p.level(),
            p.num_members(),
            p.num_artefacts(),
            p.num_revisions()
        ),
        Project::Outsourced(p) => format!(
            "outsourced {} is managed by {} and developed by {}",
            p.id(),
            p.manager(),
            p.company()
        ),
    }
}

/// `projects`
pub fn execute_projects<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let lines: Vec<String> = session
        .registry
        .list_projects()
        .into_iter()
        .map(project_line)
        .collect();
    if lines.is_empty() {
        return session.report("No projects added.");
    }

    session.title("All projects:")?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}
