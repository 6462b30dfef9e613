//! Team - Named, ordered list of employees headed by one manager

use crate::domain::entities::Employee;
use crate::domain::errors::TeamPageError;

/// Team collected during one session
///
/// The first member is always the only Manager; Engineers and Interns follow
/// in the order they were entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    members: Vec<Employee>,
}

impl Team {
    /// Start a team with its manager
    pub fn new(name: impl Into<String>, manager: Employee) -> Result<Self, TeamPageError> {
        if !manager.is_manager() {
            return Err(TeamPageError::Validation(format!(
                "Team lead {} must be a Manager, got {}",
                manager.name, manager.role
            )));
        }

        Ok(Self {
            name: name.into(),
            members: vec![manager],
        })
    }

    /// Append an Engineer or Intern
    pub fn add(&mut self, employee: Employee) -> Result<(), TeamPageError> {
        if employee.is_manager() {
            return Err(TeamPageError::Validation(format!(
                "Team {} already has a manager; cannot add {}",
                self.name, employee.name
            )));
        }

        self.members.push(employee);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager(&self) -> &Employee {
        &self.members[0]
    }

    /// All members, manager first
    pub fn members(&self) -> &[Employee] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members; a team built with `new` always has its manager
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
