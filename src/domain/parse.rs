use csv::{ReaderBuilder, Trim};

use crate::domain::row::Row;

/// Parse published-sheet CSV text into rows.
///
/// Semantics match the sheet export this feed was built against: the first
/// line declares column labels in order, every value is trimmed, a data line
/// shorter than the header pads the missing trailing fields with `""`, and
/// values beyond the header width are discarded. Quoting is disabled on
/// purpose - the input contract has no delimiter escaping, so a quoted field
/// containing a comma misaligns the columns of that row. Do not enable
/// quoting without changing the producer side too.
///
/// Data line N (1-based) gets `source_row = N + 1`; the header consumes
/// sheet line 1. Malformed input degrades to an empty or partial row list,
/// never a panic.
pub fn parse_rows(text: &str) -> Vec<Row> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read sheet header line");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(line = index + 2, error = %e, "skipping unreadable sheet line");
                continue;
            }
        };
        let source_row = record
            .position()
            .map(|p| p.line() as u32)
            .unwrap_or(index as u32 + 2);
        let mut row = Row::new(source_row);
        for (column, header) in headers.iter().enumerate() {
            row.set(header, record.get(column).unwrap_or(""));
        }
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::{MAIN_TEAM, STATUS, WORK_TEAM};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_assigns_source_rows() {
        let rows = parse_rows("메인팀,작업팀,상태\nA,X,대기\nB,Y,완료\n");
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].source_row, 2);
        assert_eq!(rows[0].get(MAIN_TEAM), "A");
        assert_eq!(rows[0].get(WORK_TEAM), "X");
        assert_eq!(rows[0].get(STATUS), "대기");

        assert_eq!(rows[1].source_row, 3);
        assert_eq!(rows[1].get(STATUS), "완료");
    }

    #[test]
    fn test_parse_trims_values_and_headers() {
        let rows = parse_rows(" 메인팀 , 상태 \n A , 대기 \n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(MAIN_TEAM), "A");
        assert_eq!(rows[0].get(STATUS), "대기");
    }

    #[test]
    fn test_short_row_pads_with_empty_string() {
        let rows = parse_rows("메인팀,작업팀,상태\nA\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(MAIN_TEAM), "A");
        assert_eq!(rows[0].get(WORK_TEAM), "");
        assert_eq!(rows[0].get(STATUS), "");
    }

    #[test]
    fn test_extra_values_are_discarded() {
        let rows = parse_rows("메인팀,상태\nA,대기,잉여,한칸더\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields.len(), 2);
        assert_eq!(rows[0].get(STATUS), "대기");
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("  \n  ").is_empty());
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        assert!(parse_rows("메인팀,작업팀,상태\n").is_empty());
    }

    #[test]
    fn test_quotes_are_literal_and_misalign() {
        // Known input-contract limitation: no delimiter escaping. A quoted
        // field containing the delimiter splits anyway.
        let rows = parse_rows("메인팀,작업팀,상태\nA,\"X, Y\",대기\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(WORK_TEAM), "\"X");
        assert_eq!(rows[0].get(STATUS), "Y\"");
    }

    #[test]
    fn test_interior_blank_line_is_skipped_without_shifting_addresses() {
        // Blank lines produce no row, but the rows after them keep their
        // physical sheet line as source position so updates still address
        // the right line.
        let rows = parse_rows("메인팀,상태\nA,대기\n\nB,완료\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].source_row, 2);
        assert_eq!(rows[1].source_row, 4);
        assert_eq!(rows[1].get(MAIN_TEAM), "B");
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_rows("메인팀,상태\r\nA,대기\r\nB,완료\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get(STATUS), "완료");
        assert_eq!(rows[1].source_row, 3);
    }
}
