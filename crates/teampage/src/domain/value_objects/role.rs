//! Role - The employee variant and its role-specific detail

use serde::Serialize;

/// Role of an employee, carrying the one field that differs per variant
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Manager { office_number: String },
    Engineer { github: String },
    Intern { school: String },
}

impl Role {
    /// Human-readable role title
    pub fn title(&self) -> &'static str {
        match self {
            Role::Manager { .. } => "Manager",
            Role::Engineer { .. } => "Engineer",
            Role::Intern { .. } => "Intern",
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager { .. })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Kind of team member that can be added after the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Engineer,
    Intern,
}

impl MemberKind {
    /// Choices offered by the employee type selector, in display order
    pub const ALL: [MemberKind; 2] = [MemberKind::Engineer, MemberKind::Intern];
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberKind::Engineer => write!(f, "Engineer"),
            MemberKind::Intern => write!(f, "Intern"),
        }
    }
}
