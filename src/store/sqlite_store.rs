use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::{path::Path, sync::Mutex};

use super::DataStore;
use crate::{error::Result, models::document::Document};

/// Every save is a new revision row; loading returns the newest one.
pub struct SqliteStore {
    connection: Mutex<Connection>,
    fallback: Document,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>, fallback: Document) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::with_connection(Connection::open(path)?, fallback)
    }

    pub fn in_memory(fallback: Document) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, fallback)
    }

    fn with_connection(connection: Connection, fallback: Document) -> Result<Self> {
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS revisions (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                saved_at TEXT NOT NULL,
                body     TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            connection: Mutex::new(connection),
            fallback,
        })
    }

    pub fn revision_count(&self) -> Result<usize> {
        let count: i64 = self.connection.lock().unwrap().query_row(
            "SELECT COUNT(*) FROM revisions",
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

impl DataStore for SqliteStore {
    fn load(&self) -> Result<Document> {
        let body: Option<String> = self
            .connection
            .lock()
            .unwrap()
            .query_row(
                "SELECT body FROM revisions ORDER BY id DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;

        match body {
            Some(body) => Ok(serde_json::from_str(&body)?),
            None => {
                info!("No saved revision, starting fresh");
                Ok(self.fallback.clone())
            }
        }
    }

    fn save(&self, document: &Document) -> Result<()> {
        let body = serde_json::to_string(document)?;
        let saved_at = chrono::offset::Utc::now().to_rfc3339();

        let connection = self.connection.lock().unwrap();
        connection.execute(
            "INSERT INTO revisions (saved_at, body) VALUES (?1, ?2)",
            params![saved_at, body],
        )?;
        info!(
            "Saved revision {} with {} questions",
            connection.last_insert_rowid(),
            document.question_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Question, Tier};

    #[test]
    fn empty_database_loads_fallback() {
        let store = SqliteStore::in_memory(Document::default()).unwrap();
        assert_eq!(store.load().unwrap(), Document::default());
        assert_eq!(store.revision_count().unwrap(), 0);
    }

    #[test]
    fn latest_revision_wins() {
        let store = SqliteStore::in_memory(Document::default()).unwrap();

        let mut document = Document::default();
        document.questions.easy.push(Question::new("first", "a", Tier::Easy));
        store.save(&document).unwrap();

        document.questions.easy[0].prompt = "second".to_string();
        store.save(&document).unwrap();

        assert_eq!(store.revision_count().unwrap(), 2);
        assert_eq!(store.load().unwrap().questions.easy[0].prompt, "second");
    }

    #[test]
    fn revisions_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.sqlite");

        let mut document = Document::default();
        document.questions.frenzy.push(Question::new("q", "a", Tier::Frenzy).with_points(1.0, 30.0));
        SqliteStore::open(&path, Document::default())
            .unwrap()
            .save(&document)
            .unwrap();

        let reopened = SqliteStore::open(&path, Document::default()).unwrap();
        assert_eq!(reopened.load().unwrap(), document);
    }
}
