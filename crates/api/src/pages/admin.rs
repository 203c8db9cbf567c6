//! The admin listing of every stored politician and project.

use std::fmt::Write;

use manifesto_db::models::politician::Politician;
use manifesto_db::models::project::Project;

use super::{escape, layout};

/// Stored row counts shown in the section headers.
#[derive(Debug, Clone, Copy)]
pub struct Totals {
    pub politicians: i64,
    pub projects: i64,
}

pub fn render(politicians: &[Politician], projects: &[Project], totals: Totals) -> String {
    let mut body = String::from("<h1>Admin Dashboard</h1>\n");

    let _ = write!(
        body,
        "<h2>Politicians ({})</h2>\n<p><a href=\"/add_politician\">Add a politician</a></p>\n",
        totals.politicians
    );
    if politicians.is_empty() {
        body.push_str("<p class=\"empty\">No politicians yet.</p>\n");
    } else {
        body.push_str(
            "<table id=\"politicians\">\n<tr><th>ID</th><th>Name</th><th>Party</th><th>Age</th>\
             <th>Promises Made</th><th>Fulfilled</th><th>In Progress</th><th>Don't Care</th></tr>\n",
        );
        for p in politicians {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                p.id,
                escape(&p.name),
                escape(&p.party),
                p.age,
                p.promises_made,
                p.promises_fulfilled,
                p.promises_in_progress,
                p.promises_dont_care,
            );
        }
        body.push_str("</table>\n");
    }

    let _ = write!(
        body,
        "<h2>Projects ({})</h2>\n<p><a href=\"/add_project\">Add a project</a></p>\n",
        totals.projects
    );
    if projects.is_empty() {
        body.push_str("<p class=\"empty\">No projects yet.</p>\n");
    } else {
        body.push_str(
            "<table id=\"projects\">\n<tr><th>ID</th><th>Name</th><th>Status</th>\
             <th>Success Rate</th></tr>\n",
        );
        for p in projects {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                p.id,
                escape(&p.name),
                escape(&p.status),
                p.success_rate,
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<p><a href=\"/dashboard/\">Open the dashboard</a></p>");
    layout("Admin Dashboard", &body)
}
