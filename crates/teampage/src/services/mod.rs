//! Services
//!
//! - session: prompt sequencer collecting the team
//! - render: team to HTML
//! - output: output path resolution and writing
//! - generator: the whole run, start to finish

pub mod generator;
pub mod output;
pub mod render;
pub mod session;

pub use generator::*;
pub use output::{html_file_name, write_page, OutputResolver, ResolveState};
pub use render::{render, render_team, PageRenderer};
pub use session::collect_team;
