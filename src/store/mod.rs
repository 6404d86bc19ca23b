pub mod json_store;
pub mod sqlite_store;

use crate::{error::Result, models::document::Document};

pub use json_store::JsonFileStore;
pub use sqlite_store::SqliteStore;

/// Persistence of the question set being edited.
pub trait DataStore: Send + Sync {
    /// The stored document, or a fresh one when nothing was saved yet.
    fn load(&self) -> Result<Document>;

    fn save(&self, document: &Document) -> Result<()>;
}
