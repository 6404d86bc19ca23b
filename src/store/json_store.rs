use log::info;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::DataStore;
use crate::{error::Result, models::document::Document};

/// Whole document as one pretty printed JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    fallback: Document,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>, fallback: Document) -> Self {
        Self {
            path: path.into(),
            fallback,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for JsonFileStore {
    fn load(&self) -> Result<Document> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("No document at {}, starting fresh", self.path.display());
                return Ok(self.fallback.clone());
            }
            Err(error) => return Err(error.into()),
        };

        let document: Document = serde_json::from_str(&data)?;
        info!(
            "Loaded {} questions from {}",
            document.question_count(),
            self.path.display()
        );
        Ok(document)
    }

    fn save(&self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(document)?)?;
        info!(
            "Saved {} questions to {}",
            document.question_count(),
            self.path.display()
        );
        Ok(())
    }
}
