use crate::domain::row::Row;
use crate::views::{TASK_TABLE_HEADER, task_line};

/// Flat task table over an already-filtered row sequence.
pub fn render(rows: &[&Row]) -> String {
    let mut output = String::new();
    output.push_str(TASK_TABLE_HEADER);
    output.push('\n');
    for row in rows {
        output.push_str(&task_line(row));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse::parse_rows;

    #[test]
    fn test_render_flat_table() {
        let rows = parse_rows(
            "메인팀,작업팀,담당자,메인업무,상세업무,상태,날짜,시간,메모,링크\n\
             A,X,김가,골조,기둥 타설,진행중,2025-08-13,09:00,,https://e.example/1\n\
             B,Y,이나,마감,도장,대기,2025-08-14,13:00,자재 확인,\n",
        );
        let refs: Vec<&_> = rows.iter().collect();
        let output = render(&refs);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("메인팀 | 작업팀"));
        assert!(lines[1].contains("진행중 [primary]"));
        assert!(lines[1].contains("2025-08-13 09:00"));
        assert!(lines[1].ends_with("링크"));
        assert!(lines[2].contains("대기 [secondary]"));
        assert!(lines[2].contains("자재 확인"));
    }

    #[test]
    fn test_unknown_status_gets_default_badge() {
        let rows = parse_rows("메인팀,상태\nA,검토대기\n");
        let refs: Vec<&_> = rows.iter().collect();
        assert!(render(&refs).contains("검토대기 [secondary]"));
    }

    #[test]
    fn test_empty_rows_render_header_only() {
        assert_eq!(render(&[]).lines().count(), 1);
    }
}
