use indexmap::IndexMap;

use crate::domain::row::{MAIN_TASK, MAIN_TEAM, Row, WORK_TEAM};

/// Team filter selection. `None` (or an empty string, the "all" option in
/// the rendered dropdowns) is the identity on that dimension; the two
/// dimensions combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamFilter {
    pub main_team: Option<String>,
    pub work_team: Option<String>,
}

impl TeamFilter {
    pub fn new(main_team: Option<String>, work_team: Option<String>) -> Self {
        Self {
            main_team,
            work_team,
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        dimension_matches(&self.main_team, row.get(MAIN_TEAM))
            && dimension_matches(&self.work_team, row.get(WORK_TEAM))
    }
}

fn dimension_matches(selected: &Option<String>, value: &str) -> bool {
    match selected {
        Some(team) if !team.is_empty() => team == value,
        _ => true,
    }
}

/// Order-preserving conjunctive filter; never deduplicates.
pub fn filter_rows<'a>(rows: &'a [Row], filter: &TeamFilter) -> Vec<&'a Row> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

/// Partition rows by a column value, keys in first-seen order, row order
/// preserved within each group. Every row lands in exactly one group.
pub fn group_by_column<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
    column: &str,
) -> IndexMap<String, Vec<&'a Row>> {
    let mut groups: IndexMap<String, Vec<&'a Row>> = IndexMap::new();
    for row in rows {
        groups.entry(row.get(column).to_string()).or_default().push(row);
    }
    groups
}

pub fn group_by_main_team<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
) -> IndexMap<String, Vec<&'a Row>> {
    group_by_column(rows, MAIN_TEAM)
}

pub fn group_by_main_task<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
) -> IndexMap<String, Vec<&'a Row>> {
    group_by_column(rows, MAIN_TASK)
}

/// Distinct values of a column in first-seen order; feeds the filter option
/// lists for the two team dimensions independently.
pub fn distinct_values<'a>(rows: impl IntoIterator<Item = &'a Row>, column: &str) -> Vec<String> {
    let mut seen: IndexMap<String, ()> = IndexMap::new();
    for row in rows {
        seen.entry(row.get(column).to_string()).or_insert(());
    }
    seen.into_keys().collect()
}
