mod dispatch;
mod sheet;

pub use dispatch::{UpdateAction, UpdateDispatcher, UpdatePayload};
pub use sheet::SheetClient;
