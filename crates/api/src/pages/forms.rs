//! Empty entry forms for new records.

use super::layout;

pub fn politician_form() -> String {
    let body = "<h1>Add Politician</h1>\n\
<form method=\"post\" action=\"/add_politician\">\n\
<label>Name<input type=\"text\" name=\"name\" required></label>\n\
<label>Party<input type=\"text\" name=\"party\" required></label>\n\
<label>Age<input type=\"number\" name=\"age\" required></label>\n\
<label>Promises Made<input type=\"number\" name=\"promises_made\" value=\"0\" required></label>\n\
<label>Promises Fulfilled<input type=\"number\" name=\"promises_fulfilled\" value=\"0\" required></label>\n\
<label>Promises In Progress<input type=\"number\" name=\"promises_in_progress\" value=\"0\" required></label>\n\
<label>Promises Don't Care<input type=\"number\" name=\"promises_dont_care\" value=\"0\" required></label>\n\
<button type=\"submit\">Add Politician</button>\n\
</form>";
    layout("Add Politician", body)
}

pub fn project_form() -> String {
    let body = "<h1>Add Project</h1>\n\
<form method=\"post\" action=\"/add_project\">\n\
<label>Name<input type=\"text\" name=\"name\" required></label>\n\
<label>Status<input type=\"text\" name=\"status\" placeholder=\"Completed\" required></label>\n\
<label>Success Rate (%)<input type=\"number\" name=\"success_rate\" step=\"any\" required></label>\n\
<button type=\"submit\">Add Project</button>\n\
</form>";
    layout("Add Project", body)
}
