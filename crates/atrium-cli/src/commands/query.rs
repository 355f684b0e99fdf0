//! Query commands over the registry indexes.

use crate::error::Result;
use crate::input::LineSource;
use crate::interpreter::Interpreter;
use atrium_domain::Employee;
use atrium_store::index::normalize_range;
use std::io::Write;

/// `keyword <keyword…>`
pub fn execute_keyword<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let keyword = session.scanner.rest_of_line()?.trim().to_string();
    let formatter = &session.formatter;
    let lines = {
        let matches = session.registry.list_by_keyword(&keyword)?;
        let mut lines = Vec::new();
        for p in &matches.in_house {
            lines.push(format!(
                "in-house {} is managed by {} [{}, {}, {}, {}, {}]",
                p.id(),
                p.manager(),
                p.level(),
                p.num_members(),
                p.num_artefacts(),
                p.num_revisions(),
                formatter.optional_date(p.recent_revision_date())
            ));
        }
        for p in &matches.outsourced {
            lines.push(format!(
                "outsourced {} is managed by {} and developed by {}",
                p.id(),
                p.manager(),
                p.company()
            ));
        }
        lines
    };

    session.title(&format!("All projects with keyword {}:", keyword))?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}

/// `confidentiality <lower> <upper>`
pub fn execute_confidentiality<S: LineSource, W: Write>(
    session: &mut Interpreter<S, W>,
) -> Result<()> {
    let lower = session.scanner.integer()?;
    let upper = session.scanner.integer()?;
    session.scanner.rest_of_line()?;
    let (lower, upper) = normalize_range(lower, upper);

    let lines: Vec<String> = session
        .registry
        .list_by_confidentiality(lower, upper)?
        .into_iter()
        .map(|p| {
            format!(
                "{} is managed by {} and has keywords {}.",
                p.id(),
                p.manager(),
                p.keywords().replace(' ', ", ")
            )
        })
        .collect();

    session.title(&format!(
        "All projects within levels {} and {}:",
        lower, upper
    ))?;
    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}

/// Memberships shown for an employee; managers add the projects they own.
fn project_count(employee: &Employee) -> usize {
    employee.num_projects()
        + employee
            .as_manager()
            .map_or(0, |manager| manager.num_managed_projects())
}

/// `workaholics`
pub fn execute_workaholics<S: LineSource, W: Write>(
    session: &mut Interpreter<S, W>,
) -> Result<()> {
    let formatter = &session.formatter;
    let lines: Vec<String> = session
        .registry
        .top_workaholics()?
        .into_iter()
        .map(|e| {
            format!(
                "{}: {} updates, {} projects, last update on {}",
                e.username(),
                e.num_revisions(),
                project_count(e),
                formatter.optional_date(e.last_revision_date())
            )
        })
        .collect();

    for line in lines {
        session.emit(line)?;
    }
    Ok(())
}

/// `common`
pub fn execute_common<S: LineSource, W: Write>(session: &mut Interpreter<S, W>) -> Result<()> {
    let pair = session.registry.max_common_pair()?;
    let line = format!(
        "{} {} have {} projects in common.",
        pair.first.username(),
        pair.second.username(),
        pair.shared
    );
    session.emit(line)
}
