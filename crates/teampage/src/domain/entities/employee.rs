//! Employee - One member of the team

use serde::Serialize;

use crate::domain::value_objects::{MemberKind, Role};

/// Employee record, created once from captured input
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub role: Role,
}

impl Employee {
    pub fn manager(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        office_number: impl Into<String>,
    ) -> Self {
        Self::with_role(
            name,
            id,
            email,
            Role::Manager {
                office_number: office_number.into(),
            },
        )
    }

    pub fn engineer(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        github: impl Into<String>,
    ) -> Self {
        Self::with_role(
            name,
            id,
            email,
            Role::Engineer {
                github: github.into(),
            },
        )
    }

    pub fn intern(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        school: impl Into<String>,
    ) -> Self {
        Self::with_role(
            name,
            id,
            email,
            Role::Intern {
                school: school.into(),
            },
        )
    }

    /// Build a non-manager member from the selected kind and its detail answer
    pub fn member(
        kind: MemberKind,
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        match kind {
            MemberKind::Engineer => Self::engineer(name, id, email, detail),
            MemberKind::Intern => Self::intern(name, id, email, detail),
        }
    }

    fn with_role(
        name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            email: email.into(),
            role,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}
