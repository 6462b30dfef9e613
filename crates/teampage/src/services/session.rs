//! Prompt Sequencer
//!
//! Drives the fixed dialogue that collects the manager and the team.

use tracing::{debug, info};

use crate::domain::{looks_like_email, Employee, MemberKind, Team, TeamPageError};
use crate::ports::Prompter;

// ============================================
// Prompt texts
// ============================================

pub const ASK_LEAD_NAME: &str = "What is your name?";
pub const ASK_LEAD_NAME_AGAIN: &str = "Your name cannot be blank. Please enter your name:";
pub const ASK_TEAM_NAME: &str = "What is your team name?";
pub const ASK_LEAD_ID: &str = "What is your employee ID?";
pub const ASK_LEAD_EMAIL: &str = "What is your email address?";
pub const ASK_OFFICE: &str = "What is your office number?";
pub const ASK_MEMBER_NAME: &str = "What is the employee's name?";
pub const ASK_MEMBER_ID: &str = "What is the employee's ID?";
pub const ASK_MEMBER_EMAIL: &str = "What is the employee's email address?";
pub const ASK_GITHUB: &str = "What is this engineer's GitHub user name?";
pub const ASK_SCHOOL: &str = "What is this intern's school name?";
pub const ASK_ADD_ANOTHER: &str = "Add another employee?";
pub const EMAIL_RETRY: &str = "Invalid format. Please re-enter email address:";

fn ask_member_kind(name: &str) -> String {
    format!("What type of employee is {}?", name)
}

/// Run the dialogue and return the collected team
///
/// Returns `Ok(None)` when the lead's name is still blank after one retry;
/// nothing else is asked in that case. Every other answer, the team name
/// included, is kept exactly as typed.
pub fn collect_team<P: Prompter + ?Sized>(
    prompter: &mut P,
) -> Result<Option<Team>, TeamPageError> {
    let Some(lead_name) = ask_lead_name(prompter)? else {
        info!("Lead name left blank; aborting session");
        return Ok(None);
    };

    let team_name = prompter.input(ASK_TEAM_NAME)?;
    let lead_id = prompter.input(ASK_LEAD_ID)?;
    let lead_email = ask_email(prompter, ASK_LEAD_EMAIL)?;
    let office = prompter.input(ASK_OFFICE)?;

    let mut team = Team::new(
        team_name,
        Employee::manager(lead_name, lead_id, lead_email, office),
    )?;
    debug!(team = %team.name(), manager = %team.manager().name, "Collected manager");

    loop {
        prompter.blank_line();

        if let Some(member) = ask_member(prompter)? {
            debug!(name = %member.name, role = %member.role, "Collected team member");
            team.add(member)?;
        }

        prompter.blank_line();

        if !prompter.confirm(ASK_ADD_ANOTHER)? {
            break;
        }
    }

    info!(team = %team.name(), members = team.len(), "Team collected");
    Ok(Some(team))
}

/// Ask for the lead's name, allowing one retry when blank
fn ask_lead_name<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<String>, TeamPageError> {
    let name = prompter.input(ASK_LEAD_NAME)?;
    if !name.trim().is_empty() {
        return Ok(Some(name));
    }

    let name = prompter.input(ASK_LEAD_NAME_AGAIN)?;
    if name.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(name))
}

/// Ask for an email address; one re-prompt on a bad format, then accept anything
fn ask_email<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
) -> Result<String, TeamPageError> {
    let email = prompter.input(message)?;
    if looks_like_email(&email) {
        return Ok(email);
    }

    debug!(email = %email, "Email format rejected; asking once more");
    prompter.input(EMAIL_RETRY)
}

/// Ask for one Engineer or Intern; a blank name skips the rest
fn ask_member<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Option<Employee>, TeamPageError> {
    let name = prompter.input(ASK_MEMBER_NAME)?;
    if name.trim().is_empty() {
        return Ok(None);
    }

    let id = prompter.input(ASK_MEMBER_ID)?;
    let email = ask_email(prompter, ASK_MEMBER_EMAIL)?;

    let labels: Vec<String> = MemberKind::ALL.iter().map(|k| k.to_string()).collect();
    let choices: Vec<&str> = labels.iter().map(String::as_str).collect();
    let picked = prompter.select(&ask_member_kind(&name), &choices)?;
    let kind = *MemberKind::ALL.get(picked).ok_or_else(|| {
        TeamPageError::Prompt(format!("Employee type choice {} out of range", picked))
    })?;

    let detail = match kind {
        MemberKind::Engineer => prompter.input(ASK_GITHUB)?,
        MemberKind::Intern => prompter.input(ASK_SCHOOL)?,
    };

    Ok(Some(Employee::member(kind, name, id, email, detail)))
}
