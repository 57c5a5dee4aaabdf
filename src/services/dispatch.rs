use serde::{Deserialize, Serialize};

use crate::config;
use crate::domain::row::STATUS;

/// Mutation kinds the sheet endpoint recognizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UpdateAction {
    #[serde(rename = "updateStatus")]
    UpdateStatus,
    #[serde(rename = "addMemo")]
    AddMemo,
}

/// Body of an update notification. `rowIndex` is the 1-based sheet line of
/// the row being edited (header = line 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdatePayload {
    pub action: UpdateAction,
    #[serde(rename = "rowIndex")]
    pub row_index: u32,
    pub column: String,
    pub value: String,
}

impl UpdatePayload {
    /// A status-column edit is an `updateStatus`; any other recognized edit
    /// (the memo column) is an `addMemo`.
    pub fn new(source_row: u32, column: &str, value: &str) -> Self {
        let action = if column == STATUS {
            UpdateAction::UpdateStatus
        } else {
            UpdateAction::AddMemo
        };
        Self {
            action,
            row_index: source_row,
            column: column.to_string(),
            value: value.to_string(),
        }
    }
}

/// Fire-and-forget sender of sheet mutations.
///
/// The sink's transport mode forecloses reading the response, so success and
/// failure are indistinguishable here on purpose: the sheet stays the source
/// of truth and the local view only converges on the next full reload.
/// Transport-level errors go to the log, never to the user, and nothing is
/// retried. Updates go out in edit order; no ordering is guaranteed (or
/// needed) on the applying side.
#[derive(Clone)]
pub struct UpdateDispatcher {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateDispatcher {
    pub fn new() -> Self {
        Self::with_endpoint(config::UPDATE_ENDPOINT_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Launch a send in the background without blocking the caller. The
    /// returned handle may be dropped: a send abandoned at runtime shutdown
    /// is indistinguishable from a transport failure, and this protocol
    /// cannot observe either.
    pub fn dispatch_detached(
        &self,
        source_row: u32,
        column: &str,
        value: &str,
    ) -> tokio::task::JoinHandle<()> {
        let dispatcher = self.clone();
        let column = column.to_string();
        let value = value.to_string();
        tokio::spawn(async move {
            dispatcher.dispatch(source_row, &column, &value).await;
        })
    }

    /// Send one update notification. No return value: the caller cannot act
    /// on delivery either way.
    pub async fn dispatch(&self, source_row: u32, column: &str, value: &str) {
        let payload = UpdatePayload::new(source_row, column, value);
        match self.http.post(&self.endpoint).json(&payload).send().await {
            Ok(_) => {
                tracing::info!(
                    row = source_row,
                    column,
                    value,
                    "update request sent"
                );
            }
            Err(e) => {
                tracing::error!(row = source_row, column, error = %e, "failed to send sheet update");
            }
        }
    }
}
