use crate::domain::filter::group_by_main_team;
use crate::domain::row::Row;
use crate::views::{TASK_TABLE_HEADER, task_line};

/// Team board: one card per main team, teams in first-seen order, each with
/// its tasks as a table.
pub fn render<'a>(rows: impl IntoIterator<Item = &'a Row>) -> String {
    let mut output = String::new();
    for (team, tasks) in group_by_main_team(rows) {
        output.push_str(&format!("## {} ({})\n", team, tasks.len()));
        output.push_str(TASK_TABLE_HEADER);
        output.push('\n');
        for row in tasks {
            output.push_str(&task_line(row));
            output.push('\n');
        }
        output.push('\n');
    }
    output
}
