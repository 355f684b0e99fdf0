//! Integration tests for the atrium command interpreter
//!
//! Each test feeds a scripted session through the interpreter and checks
//! the exact text written to the output sink.

use atrium_cli::{Formatter, Interpreter, ReaderSource};
use std::io::Cursor;

fn run(script: &str) -> String {
    let source = ReaderSource::new(Cursor::new(script.as_bytes().to_vec()));
    let mut interpreter = Interpreter::new(source, Vec::new(), Formatter::plain());
    interpreter.run().unwrap();
    let (_, out) = interpreter.into_parts();
    String::from_utf8(out).unwrap()
}

const SETUP: &str = "\
register manager alice 3
register developer bob alice 2
create alice inhouse P1
2 security audit
2
team alice P1
1 bob
";

#[test]
fn test_registration_session() {
    let output = run(&format!("{SETUP}exit\n"));
    assert_eq!(
        output,
        "\
User alice was registered as manager with clearance level 3.
User bob was registered as developer with clearance level 2.
P1 project was created.
Latest team members:
bob: added to the team.
Bye!
"
    );
}

#[test]
fn test_registry_errors_do_not_stop_the_session() {
    let script = "\
register manager alice 3
register manager alice 1
register developer carol nobody 1
create alice inhouse P2
1 cloud
4
users
exit
";
    let output = run(script);
    assert_eq!(
        output,
        "\
User alice was registered as manager with clearance level 3.
User alice already exists.
Project manager nobody does not exist.
Project manager alice has clearance level 3.
All registered users:
manager alice [0, 0, 0]
Bye!
"
    );
}

#[test]
fn test_unknown_words() {
    let script = "\
register intern zed 1
create alice agency P9
1 web
Acme
frobnicate
exit
";
    let output = run(script);
    assert_eq!(
        output,
        "\
Unknown job position.
Unknown project type.
Unknown command. Type help to see available commands.
Bye!
"
    );
}

#[test]
fn test_empty_listings() {
    let output = run("users\nprojects\nexit\n");
    assert_eq!(output, "No users registered.\nNo projects added.\nBye!\n");
}

#[test]
fn test_artefacts_and_revisions() {
    let script = format!(
        "{SETUP}\
artefacts bob P1
10-01-2023
2
report.txt 2 quarterly findings
secret.txt 5 too sensitive
revision bob P1
report.txt 01-02-2023 fixed typo
revision bob P1
report.txt 01-02-2023 reworded intro
project P1
exit
"
    );
    let output = run(&script);
    let expected_tail = "\
Latest project artefacts:
report.txt: added to the project.
secret.txt: exceeds project confidentiality level.
Revision 1 of artefact report.txt was submitted.
Revision 2 of artefact report.txt was submitted.
P1 [2] managed by alice [3]:
bob [2]
report.txt [2]
revision 3 bob 01-02-2023 reworded intro
revision 2 bob 01-02-2023 fixed typo
revision 1 bob 10-01-2023 quarterly findings
Bye!
";
    assert!(output.ends_with(expected_tail), "unexpected output:\n{output}");
}

#[test]
fn test_team_batch_stops_on_project_errors() {
    let script = format!(
        "{SETUP}\
register developer dave alice 0
team alice P1
3 bob ghost dave
team alice NOPE
2 dave bob
exit
"
    );
    let output = run(&script);
    assert!(output.ends_with(
        "\
User dave was registered as developer with clearance level 0.
Latest team members:
bob: already a member.
ghost: does not exist.
dave: insufficient clearance level.
NOPE project does not exist.
Bye!
"
    ));
}

#[test]
fn test_projects_listing() {
    let script = format!(
        "{SETUP}\
create alice outsourced Web Shop
1 web
Acme
projects
exit
"
    );
    let output = run(&script);
    assert!(output.ends_with(
        "\
Web Shop project was created.
All projects:
in-house P1 is managed by alice [2, 1, 0, 0]
outsourced Web Shop is managed by alice and developed by Acme
Bye!
"
    ));
}

#[test]
fn test_keyword_and_confidentiality() {
    let script = format!(
        "{SETUP}\
keyword security
keyword nothing
confidentiality 5 0
confidentiality 3 4
exit
"
    );
    let output = run(&script);
    assert!(output.ends_with(
        "\
All projects with keyword security:
in-house P1 is managed by alice [2, 1, 0, 0, n/a]
No projects with keyword nothing.
All projects within levels 0 and 5:
P1 is managed by alice and has keywords security, audit.
No projects within levels 3 and 4.
Bye!
"
    ));
}

#[test]
fn test_workaholics_common_and_manages() {
    let script = format!(
        "{SETUP}\
workaholics
common
register developer carol alice 2
team alice P1
1 carol
artefacts bob P1
10-01-2023
1
report.txt 1 findings
revision bob P1
report.txt 12-01-2023 polish
workaholics
common
manages alice
exit
"
    );
    let output = run(&script);
    assert!(output.contains("There are no workaholics.\n"));
    assert!(output.contains("Cannot determine employees with common projects.\n"));
    assert!(output.ends_with(
        "\
Revision 1 of artefact report.txt was submitted.
bob: 2 updates, 1 projects, last update on 12-01-2023
bob carol have 1 projects in common.
Manager alice:
bob
P1, report.txt, revision 2, 12-01-2023, polish
P1, report.txt, revision 1, 10-01-2023, findings
carol
Bye!
"
    ));
}

#[test]
fn test_bad_number_drops_the_line() {
    let output = run("confidentiality low 3\nusers\nexit\n");
    assert_eq!(
        output,
        "Invalid input: expected a number, found 'low'\nNo users registered.\nBye!\n"
    );
}

#[test]
fn test_help_lists_every_command() {
    let output = run("HELP\nexit\n");
    assert!(output.starts_with("Available commands:\nregister - adds a new user\n"));
    assert!(output.contains("exit - terminates the execution of the program\nBye!\n"));
    assert_eq!(output.lines().count(), 17);
}

#[test]
fn test_end_of_input_ends_session() {
    assert_eq!(run("register manager alice 3\n"), "User alice was registered as manager with clearance level 3.\n");
    assert_eq!(run("team alice"), "");
}

#[test]
fn test_outsourced_detail_view_is_rejected() {
    let script = "\
register manager alice 3
create alice outsourced O1
1 web
Acme
project O1
exit
";
    let output = run(script);
    assert!(output.ends_with("O1 is an outsourced project.\nBye!\n"));
}
