//! The interactive dashboard page.
//!
//! The page is fully rendered on the server for its initial state, and the
//! selection form works without scripting. With scripting enabled, the
//! inline script talks to the `/dashboard/_update/*` endpoints and swaps the
//! dropdown options and chart SVGs in place.

use std::fmt::Write;

use manifesto_core::dashboard::DropdownState;

use super::{escape, layout};

pub const PAGE_TITLE: &str = "Indian Politicians Dashboard";

const SCRIPT: &str = r#"
(function () {
  const select = document.getElementById('politician-dropdown');
  const search = document.getElementById('politician-search');

  async function getJson(url) {
    const response = await fetch(url, { headers: { 'Accept': 'application/json' } });
    if (!response.ok) {
      throw new Error('Request to ' + url + ' failed with ' + response.status);
    }
    return response.json();
  }

  async function refreshCharts() {
    const id = select.value;
    const [promises, projects] = await Promise.all([
      getJson('/dashboard/_update/promises?politician_id=' + encodeURIComponent(id)),
      getJson('/dashboard/_update/projects'),
    ]);
    document.getElementById('promises-graph').innerHTML = promises.svg;
    document.getElementById('projects-graph').innerHTML = projects.svg;
  }

  async function refreshOptions() {
    const params = new URLSearchParams({ search: search.value, selected: select.value });
    const state = await getJson('/dashboard/_update/options?' + params.toString());
    const previous = select.value;
    select.replaceChildren(...state.options.map((o) => new Option(o.label, String(o.value))));
    select.value = state.value === null ? '' : String(state.value);
    if (select.value !== previous) {
      await refreshCharts();
    }
  }

  search.addEventListener('input', () => { refreshOptions().catch(console.error); });
  select.addEventListener('change', () => { refreshCharts().catch(console.error); });
  const show = document.getElementById('show-button');
  if (show) { show.hidden = true; }
})();
"#;

/// Render the dashboard for an already-refreshed dropdown and pre-rendered
/// chart SVGs.
pub fn render(
    dropdown: &DropdownState,
    search: &str,
    promises_svg: &str,
    projects_svg: &str,
) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(PAGE_TITLE));

    body.push_str("<form id=\"dashboard-form\" method=\"get\" action=\"/dashboard/\">\n");
    let _ = writeln!(
        body,
        "<label>Search<input type=\"search\" id=\"politician-search\" name=\"search\" \
         value=\"{}\" autocomplete=\"off\"></label>",
        escape(search)
    );
    body.push_str(
        "<label>Politician<select id=\"politician-dropdown\" name=\"politician_id\">\n",
    );
    for option in &dropdown.options {
        let selected = if dropdown.value == Some(option.value) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            body,
            "<option value=\"{}\"{selected}>{}</option>",
            option.value,
            escape(&option.label)
        );
    }
    body.push_str("</select></label>\n");
    body.push_str("<button type=\"submit\" id=\"show-button\">Show</button>\n</form>\n");

    let _ = write!(
        body,
        "<div class=\"chart\">\n<h2>Promises</h2>\n<div id=\"promises-graph\">{promises_svg}</div>\n</div>\n\
         <div class=\"chart\">\n<h2>Projects Status (1 year after completion)</h2>\n\
         <div id=\"projects-graph\">{projects_svg}</div>\n</div>\n"
    );

    // Inert: there is no print handler.
    body.push_str("<button type=\"button\" id=\"print-button\">Print Dashboard</button>\n");
    body.push_str("<div id=\"print-content\" style=\"display: none\"></div>\n");

    let _ = write!(body, "<script>{SCRIPT}</script>");

    layout(PAGE_TITLE, &body)
}
