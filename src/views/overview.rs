use crate::domain::row::{DETAIL_TASK, MAIN_TASK, MAIN_TEAM, MEMO, Row, WORK_TEAM};
use crate::domain::status::{is_done, is_on_hold, is_problem};
use crate::views::status_cell;

/// Summary view: overall completion plus the problem/on-hold listing. The
/// listing is shown only when at least one such row exists, problem rows
/// first.
pub fn render(rows: &[Row]) -> String {
    let total = rows.len();
    let completed = rows.iter().filter(|r| is_done(r.status())).count();
    let percentage = if total > 0 {
        format!("{:.2}", completed as f64 / total as f64 * 100.0)
    } else {
        "0".to_string()
    };

    let mut output = String::new();
    output.push_str("# 전체 진행률\n");
    output.push_str(&format!("{}% 완료 ({}/{})\n", percentage, completed, total));

    let problems: Vec<&Row> = rows.iter().filter(|r| is_problem(r.status())).collect();
    let on_hold: Vec<&Row> = rows.iter().filter(|r| is_on_hold(r.status())).collect();
    if problems.is_empty() && on_hold.is_empty() {
        return output;
    }

    output.push_str("\n# 문제 또는 보류 중인 공정\n");
    output.push_str("메인팀 | 작업팀 | 메인업무 | 상세업무 | 상태 | 메모\n");
    for row in problems.into_iter().chain(on_hold) {
        output.push_str(&format!(
            "{} | {} | {} | {} | {} | {}\n",
            row.get(MAIN_TEAM),
            row.get(WORK_TEAM),
            row.get(MAIN_TASK),
            row.get(DETAIL_TASK),
            status_cell(row),
            row.get(MEMO),
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse::parse_rows;

    #[test]
    fn test_completion_percentage() {
        let rows = parse_rows(
            "메인팀,상태\n\
             A,완료\n\
             A,완료\n\
             B,대기\n\
             B,진행중\n\
             B,완료\n\
             C,대기\n\
             C,대기\n",
        );
        let output = render(&rows);
        assert!(output.contains("42.86% 완료 (3/7)"));
    }

    #[test]
    fn test_empty_store_reports_zero() {
        let output = render(&[]);
        assert!(output.contains("0% 완료 (0/0)"));
        assert!(!output.contains("문제 또는 보류"));
    }

    #[test]
    fn test_problem_rows_come_before_on_hold() {
        let rows = parse_rows(
            "메인팀,상세업무,상태,메모\n\
             A,도장,보류,자재 대기\n\
             B,배관,문제,누수 확인 필요\n",
        );
        let output = render(&rows);
        let problem_pos = output.find("배관").unwrap();
        let hold_pos = output.find("도장").unwrap();
        assert!(problem_pos < hold_pos);
        assert!(output.contains("누수 확인 필요"));
    }

    #[test]
    fn test_listing_omitted_when_nothing_stuck() {
        let rows = parse_rows("메인팀,상태\nA,완료\nB,진행중\n");
        assert!(!render(&rows).contains("문제 또는 보류"));
    }
}
