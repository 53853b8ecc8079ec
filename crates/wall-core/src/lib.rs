pub mod config;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod logging;
pub mod record;
pub mod shortcut;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use record::{NewRecord, Record, RecordKind, RecordPatch};
pub use shortcut::ShortcutFile;
pub use store::RecordStore;
