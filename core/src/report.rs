//! Plain-text rendering of routing results for the terminal.

use crate::{
    config::Roster,
    router::TaskRequest,
    scorer::Selection,
    staff::StaffRecord,
};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Join lines with a trailing newline after each.
fn block(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn header(request: &TaskRequest) -> String {
    block([
        String::new(),
        rule(),
        format!("Task:     {}", request.description),
        format!("Priority: {}", request.priority),
        rule(),
        String::new(),
    ])
}

/// Assignment block. Missing staff fields fall back to the staff id.
pub fn render_assignment(request: &TaskRequest, selection: &Selection, staff: &StaffRecord) -> String {
    let id = selection.staff_id.as_str();
    let or_id = |field: &Option<String>| field.clone().unwrap_or_else(|| id.to_string());

    let body = block([
        "✅ Routing result:".to_string(),
        format!("   Assigned:  {} ({id})", staff.display_name(id)),
        format!("   Provider:  {}", or_id(&staff.provider)),
        format!("   Role:      {}", or_id(&staff.role)),
        format!("   Model:     {}", or_id(&staff.model)),
        format!("   Score:     {}", selection.score),
        format!("   Reason:    {}", selection.reason),
        format!("   Bio:       {}", or_id(&staff.bio)),
        String::new(),
        rule(),
    ]);

    header(request) + &body
}

/// `<glyph> <name> (<id>) - <status>` for one roster entry.
pub fn roster_line(id: &str, staff: &StaffRecord) -> String {
    format!(
        "{} {} ({id}) - {}",
        staff.status.glyph(),
        staff.display_name(id),
        staff.status
    )
}

/// No-match notice followed by every roster entry and its status.
pub fn render_no_match(request: &TaskRequest, roster: &Roster) -> String {
    let notice = block([
        "❌ No matching staff".to_string(),
        "   All staff may be paused, or none fit the task requirements".to_string(),
        String::new(),
        rule(),
        "Current staff:".to_string(),
    ]);
    let listing = block(roster.iter().map(|(id, staff)| format!("   {}", roster_line(id, staff))));

    header(request) + &notice + &listing
}
