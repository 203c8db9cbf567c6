//! Server-rendered HTML pages.
//!
//! Pages are assembled as strings; every value that came from the database
//! or the request goes through [`escape`] first.

pub mod admin;
pub mod dashboard;
pub mod forms;

pub use manifesto_core::html::escape;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; color: #222; }
nav a { margin-right: 1rem; }
table { border-collapse: collapse; margin-bottom: 2rem; }
th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }
th { background: #f3f3f3; }
form label { display: block; margin: 0.5rem 0; }
form input, form select { margin-left: 0.5rem; }
.chart { margin: 1rem 0 2rem; }
";

/// Wrap `body` in a complete HTML document with the shared navigation bar.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/admin\">Admin</a><a href=\"/add_politician\">Add Politician</a>\
         <a href=\"/add_project\">Add Project</a><a href=\"/dashboard/\">Dashboard</a></nav>\n\
         {body}\n</body>\n</html>\n",
        title = escape(title),
    )
}
