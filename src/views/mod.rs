//! Text renderers over the row pipeline. Each view is a pure function of
//! already-filtered or grouped rows; none of them touch the store.

pub mod board;
pub mod overview;
pub mod schedule;
pub mod table;

use crate::domain::row::{
    ASSIGNEE, DATE, DETAIL_TASK, LINK, MAIN_TASK, MAIN_TEAM, MEMO, Row, TIME, WORK_TEAM,
};
use crate::domain::status::badge_color_for;

pub(crate) const TASK_TABLE_HEADER: &str =
    "메인팀 | 작업팀 | 담당자 | 메인업무 | 상세업무 | 상태 | 날짜/시간 | 메모 | 자료실";

/// Status badge as text: label plus its color category.
pub(crate) fn status_cell(row: &Row) -> String {
    let label = row.status();
    format!("{} [{}]", label, badge_color_for(label).class())
}

pub(crate) fn task_line(row: &Row) -> String {
    let datetime = format!("{} {}", row.get(DATE), row.get(TIME));
    let link = if row.get(LINK).is_empty() { "" } else { "링크" };
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {} | {}",
        row.get(MAIN_TEAM),
        row.get(WORK_TEAM),
        row.get(ASSIGNEE),
        row.get(MAIN_TASK),
        row.get(DETAIL_TASK),
        status_cell(row),
        datetime.trim(),
        row.get(MEMO),
        link,
    )
}
