//! Page Renderer
//!
//! Maps the collected members and team name to a self-contained HTML
//! document through a registered Handlebars template. The same input always
//! produces the same bytes.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::domain::{Employee, Team, TeamPageError};

const PAGE_TEMPLATE: &str = "team_page";
const CARD_PARTIAL: &str = "card";

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{team_name}}</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; background: #f4f5f7; color: #222; }
    header { background: #d6336c; color: #fff; padding: 1.5rem; text-align: center; }
    main { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
    h2 { border-bottom: 1px solid #ccc; padding-bottom: 0.25rem; }
    .cards { display: flex; flex-wrap: wrap; gap: 1rem; }
    .card { background: #fff; border-radius: 6px; box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15); width: 260px; overflow: hidden; }
    .card h3 { margin: 0; padding: 0.75rem 1rem 0.25rem; }
    .card .role { margin: 0; padding: 0 1rem 0.75rem; color: #555; }
    .card ul { list-style: none; margin: 0; padding: 0.75rem 1rem; border-top: 1px solid #eee; }
    .card li { padding: 0.2rem 0; }
    .manager .card { border-top: 6px solid #d6336c; width: 100%; max-width: 420px; }
    .roster .card { border-top: 6px solid #1c7ed6; }
  </style>
</head>
<body>
  <header>
    <h1>{{team_name}}</h1>
  </header>
  <main>
{{#if managers}}
    <section class="manager">
      <h2>Manager</h2>
      <div class="cards">
{{#each managers}}
{{> card}}
{{/each}}
      </div>
    </section>
{{/if}}
    <section class="roster">
      <h2>Team</h2>
{{#if roster}}
      <div class="cards">
{{#each roster}}
{{> card}}
{{/each}}
      </div>
{{else}}
      <p class="empty">No team members yet.</p>
{{/if}}
    </section>
  </main>
</body>
</html>
"#;

const CARD: &str = r#"        <article class="card {{role}}">
          <h3>{{name}}</h3>
          <p class="role">{{title}}</p>
          <ul>
            <li>ID: {{id}}</li>
            <li>Email: <a href="mailto:{{email}}">{{email}}</a></li>
{{#if (eq role "manager")}}
            <li>Office number: {{office_number}}</li>
{{/if}}
{{#if (eq role "engineer")}}
            <li>GitHub: <a href="https://github.com/{{github}}" target="_blank" rel="noopener">{{github}}</a></li>
{{/if}}
{{#if (eq role "intern")}}
            <li>School: {{school}}</li>
{{/if}}
          </ul>
        </article>
"#;

/// Template context for one employee card
#[derive(Serialize)]
struct CardContext<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    title: &'static str,
}

impl<'a> CardContext<'a> {
    fn new(employee: &'a Employee) -> Self {
        Self {
            employee,
            title: employee.role.title(),
        }
    }
}

/// Template context for the whole page
#[derive(Serialize)]
struct PageContext<'a> {
    team_name: &'a str,
    managers: Vec<CardContext<'a>>,
    roster: Vec<CardContext<'a>>,
}

/// Renders team pages from the registered page template
pub struct PageRenderer {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
}

impl PageRenderer {
    /// Create a renderer with the page template and card partial registered
    pub fn new() -> Result<Self, TeamPageError> {
        let mut hbs = Handlebars::new();
        hbs.register_template_string(PAGE_TEMPLATE, PAGE)
            .map_err(|e| TeamPageError::Render(format!("Invalid page template: {}", e)))?;
        hbs.register_partial(CARD_PARTIAL, CARD)
            .map_err(|e| TeamPageError::Render(format!("Invalid card template: {}", e)))?;

        Ok(Self { hbs })
    }

    /// Render `members` (in order) under `team_name`
    ///
    /// Managers are highlighted in their own section ahead of the roster;
    /// all other members keep their relative order in the roster.
    pub fn render(&self, members: &[Employee], team_name: &str) -> Result<String, TeamPageError> {
        let (managers, roster): (Vec<&Employee>, Vec<&Employee>) =
            members.iter().partition(|m| m.is_manager());

        let context = PageContext {
            team_name,
            managers: managers.into_iter().map(CardContext::new).collect(),
            roster: roster.into_iter().map(CardContext::new).collect(),
        };
        debug!(
            team = %team_name,
            managers = context.managers.len(),
            roster = context.roster.len(),
            "Rendering team page"
        );

        self.hbs
            .render(PAGE_TEMPLATE, &context)
            .map_err(|e| TeamPageError::Render(format!("Failed to render team page: {}", e)))
    }
}

/// Render a full team
pub fn render_team(team: &Team) -> Result<String, TeamPageError> {
    render(team.members(), team.name())
}

/// Render `members` (in order) under `team_name`
pub fn render(members: &[Employee], team_name: &str) -> Result<String, TeamPageError> {
    PageRenderer::new()?.render(members, team_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Employee> {
        vec![
            Employee::manager("Ada", "1", "ada@x.com", "101"),
            Employee::engineer("Bob", "2", "bob@x.com", "bobgh"),
            Employee::intern("Cy", "3", "cy@x.com", "State U"),
        ]
    }

    #[test]
    fn test_manager_section_and_roster() {
        let html = render(&sample(), "Core").unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Core</h1>"));
        assert!(html.contains("<title>Core</title>"));

        let manager_at = html.find("<section class=\"manager\">").unwrap();
        let roster_at = html.find("<section class=\"roster\">").unwrap();
        let ada_at = html.find("<h3>Ada</h3>").unwrap();
        assert!(manager_at < ada_at && ada_at < roster_at);
        assert!(html.contains("Office number: 101"));
        assert!(html.contains("<p class=\"role\">Manager</p>"));
    }

    #[test]
    fn test_roster_keeps_entry_order() {
        let html = render(&sample(), "Core").unwrap();
        let bob_at = html.find("<h3>Bob</h3>").unwrap();
        let cy_at = html.find("<h3>Cy</h3>").unwrap();
        assert!(bob_at < cy_at);
    }

    #[test]
    fn test_role_specific_lines() {
        let html = render(&sample(), "Core").unwrap();
        assert!(html.contains(r#"href="https://github.com/bobgh""#));
        assert!(html.contains("School: State U"));
        assert!(html.contains(r#"<a href="mailto:cy@x.com">cy@x.com</a>"#));

        // Each card carries only its own role line
        assert_eq!(html.matches("Office number:").count(), 1);
        assert_eq!(html.matches("GitHub:").count(), 1);
        assert_eq!(html.matches("School:").count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let members = sample();
        assert_eq!(
            render(&members, "Core").unwrap(),
            render(&members, "Core").unwrap()
        );

        let renderer = PageRenderer::new().unwrap();
        assert_eq!(
            renderer.render(&members, "Core").unwrap(),
            render(&members, "Core").unwrap()
        );
    }

    #[test]
    fn test_escapes_user_text() {
        let members = vec![Employee::manager(
            "<script>alert(1)</script>",
            "1",
            "a\"b@x.com",
            "R&D",
        )];
        let html = render(&members, "Tom & Jerry").unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Office number: R&amp;D"));
        assert!(html.contains("<h1>Tom &amp; Jerry</h1>"));
        assert!(html.contains("a&quot;b@x.com"));
    }

    #[test]
    fn test_empty_roster_placeholder() {
        let members = vec![Employee::manager("Ada", "1", "ada@x.com", "101")];
        let html = render(&members, "Solo").unwrap();
        assert!(html.contains("No team members yet."));
        assert!(html.contains("<section class=\"manager\">"));
    }

    #[test]
    fn test_no_manager_omits_section() {
        let members = vec![Employee::engineer("Bob", "2", "bob@x.com", "bobgh")];
        let html = render(&members, "Core").unwrap();
        assert!(!html.contains("<section class=\"manager\">"));
        assert!(html.contains("<h3>Bob</h3>"));
    }

    #[test]
    fn test_empty_office_number_still_labelled() {
        let members = vec![Employee::manager("Ada", "1", "ada@x.com", "")];
        let html = render(&members, "Core").unwrap();
        assert!(html.contains("Office number: </li>"));
    }

    #[test]
    fn test_render_team_matches_render() {
        let members = sample();
        let mut team = Team::new("Core", members[0].clone()).unwrap();
        team.add(members[1].clone()).unwrap();
        team.add(members[2].clone()).unwrap();
        assert_eq!(
            render_team(&team).unwrap(),
            render(&members, "Core").unwrap()
        );
    }
}
