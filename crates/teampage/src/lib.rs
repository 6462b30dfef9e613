//! Team Page Library
//!
//! Collects a manager and their team through an interactive dialogue and
//! renders the result as a static HTML page.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure records and rules
//!   - `entities/`: Employee and Team
//!   - `value_objects/`: Role (the employee variant) and email format check
//!   - `errors/`: Library error type
//!
//! - **Ports** (`ports/`): The `Prompter` trait the terminal plugs into
//!
//! - **Services** (`services/`): Prompt sequencer, page renderer, output
//!   path resolution, and the generator that wires them together
//!
//! # Usage
//!
//! ```rust,ignore
//! use teampage::{generate_page, GeneratorConfig, GenerateOutcome};
//!
//! let outcome = generate_page(&mut prompter, &GeneratorConfig::new("output"))?;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{looks_like_email, Employee, MemberKind, Role, Team, TeamPageError};
pub use ports::{Answer, Prompter, ScriptedPrompter};
pub use services::{
    collect_team, generate_page, render, render_team, write_page, GenerateOutcome,
    GeneratorConfig, OutputResolver, PageRenderer, ResolveState, DEFAULT_FILE_NAME,
};
