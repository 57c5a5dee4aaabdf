use chrono::NaiveDate;

use crate::config;
use crate::domain::filter::group_by_main_task;
use crate::domain::row::{DATE, DETAIL_TASK, Row};

/// Inclusive ordered sequence of calendar days between two bounds.
pub fn schedule_days(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt())
        .take_while(|d| *d <= end)
        .collect()
}

fn task_date(row: &Row) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(row.get(DATE), "%Y-%m-%d").ok()
}

/// Weekly schedule grid over the fixed calendar window: one line per main
/// task, one cell per day. A task lands in a cell iff its date parses and
/// equals that calendar day exactly; anything else is never placed.
pub fn render(rows: &[Row]) -> String {
    render_range(rows, config::schedule_start(), config::schedule_end())
}

pub fn render_range(rows: &[Row], start: NaiveDate, end: NaiveDate) -> String {
    let days = schedule_days(start, end);

    let mut output = String::from("업무");
    for day in &days {
        output.push_str(&format!(" | {}", day.format("%-m/%-d")));
    }
    output.push('\n');

    for (main_task, tasks) in group_by_main_task(rows) {
        output.push_str(&main_task);
        for day in &days {
            let items: Vec<String> = tasks
                .iter()
                .filter(|t| task_date(t) == Some(*day))
                .map(|t| format!("{}({})", t.get(DETAIL_TASK), t.status()))
                .collect();
            output.push_str(&format!(" | {}", items.join(", ")));
        }
        output.push('\n');
    }
    output
}
