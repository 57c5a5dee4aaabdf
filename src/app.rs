use thiserror::Error;

use crate::domain::row::{MEMO, RowStore, STATUS};
use crate::domain::status::next_label;
use crate::services::UpdateDispatcher;

/// Renderer-triggered edits. A status badge activation cycles the status; a
/// memo activation carries the text collected from the user. Handlers are
/// passed the store and dispatcher explicitly; nothing here reaches into
/// ambient state.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    CycleStatus { source_row: u32 },
    SetMemo { source_row: u32, text: String },
}

/// The local effect of a handled edit, for immediate re-render.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub source_row: u32,
    pub column: &'static str,
    pub value: String,
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("no row at source position {0}")]
    UnknownRow(u32),
}

/// Apply an edit: resolve the row, compute the new value, mutate the store
/// optimistically, and launch the fire-and-forget update without waiting on
/// the network. Returns `None` for an empty memo (the prompt was dismissed);
/// the dispatch outcome is never part of the result.
pub async fn handle_edit(
    store: &mut RowStore,
    dispatcher: &UpdateDispatcher,
    event: EditEvent,
) -> Result<Option<EditOutcome>, EditError> {
    match event {
        EditEvent::CycleStatus { source_row } => {
            let row = store
                .by_source_row(source_row)
                .ok_or(EditError::UnknownRow(source_row))?;
            let next = next_label(row.get(STATUS));
            store.apply_edit(source_row, STATUS, next);
            let _send = dispatcher.dispatch_detached(source_row, STATUS, next);
            Ok(Some(EditOutcome {
                source_row,
                column: STATUS,
                value: next.to_string(),
            }))
        }
        EditEvent::SetMemo { source_row, text } => {
            if store.by_source_row(source_row).is_none() {
                return Err(EditError::UnknownRow(source_row));
            }
            if text.is_empty() {
                return Ok(None);
            }
            store.apply_edit(source_row, MEMO, &text);
            let _send = dispatcher.dispatch_detached(source_row, MEMO, &text);
            Ok(Some(EditOutcome {
                source_row,
                column: MEMO,
                value: text,
            }))
        }
    }
}
