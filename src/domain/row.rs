use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// Column labels as published by the sheet header row.
pub const MAIN_TEAM: &str = "메인팀";
pub const WORK_TEAM: &str = "작업팀";
pub const ASSIGNEE: &str = "담당자";
pub const MAIN_TASK: &str = "메인업무";
pub const DETAIL_TASK: &str = "상세업무";
pub const STATUS: &str = "상태";
pub const DATE: &str = "날짜";
pub const TIME: &str = "시간";
pub const MEMO: &str = "메모";
pub const LINK: &str = "링크";

/// One task row: column label -> trimmed value, in header order, plus the
/// 1-based sheet line it came from. The header occupies line 1, so data line
/// N carries `source_row = N + 1`; that position addresses remote updates and
/// is assigned once at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub fields: IndexMap<String, String>,
    pub source_row: u32,
}

impl Row {
    pub fn new(source_row: u32) -> Self {
        Self {
            fields: IndexMap::new(),
            source_row,
        }
    }

    /// Field value, or `""` when the column is absent. Missing fields are
    /// never an error anywhere in the pipeline.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn main_team(&self) -> &str {
        self.get(MAIN_TEAM)
    }

    pub fn work_team(&self) -> &str {
        self.get(WORK_TEAM)
    }

    pub fn main_task(&self) -> &str {
        self.get(MAIN_TASK)
    }

    pub fn status(&self) -> &str {
        self.get(STATUS)
    }
}

/// The full parsed sheet. Built fresh on every successful fetch and replaced
/// wholesale, never patched incrementally; the only mutation is the
/// optimistic local edit applied right after a status/memo change, which is
/// transient and lost on the next refresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn by_source_row(&self, source_row: u32) -> Option<&Row> {
        self.rows.iter().find(|r| r.source_row == source_row)
    }

    /// Optimistic local mutation mirroring a dispatched update. Returns false
    /// when no row carries the given source position.
    pub fn apply_edit(&mut self, source_row: u32, column: &str, value: &str) -> bool {
        match self.rows.iter_mut().find(|r| r.source_row == source_row) {
            Some(row) => {
                row.set(column, value);
                true
            }
            None => false,
        }
    }
}
