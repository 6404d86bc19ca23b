use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{
    error::{DeckError, Result},
    mapper::Overrides,
    models::document::{Document, IntermissionSlide, WelcomeSlide},
    store::{DataStore, JsonFileStore, SqliteStore},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    Json { path: PathBuf },
    Sqlite { path: PathBuf },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Json {
            path: PathBuf::from("data/deck.json"),
        }
    }
}

/// Welcome and intermission content of a brand new document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
    pub welcome: WelcomeSlide,
    pub intermission: IntermissionSlide,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            welcome: WelcomeSlide {
                title: "Welcome!".to_string(),
                sub_title: "Ognisko Złomowisko - Family Feud".to_string(),
            },
            intermission: IntermissionSlide {
                title: "Ognisko Złomowisko - Family Feud".to_string(),
                picture_url: "./assets/intermission.png".to_string(),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub address: String,
    pub store: StoreConfig,
    pub export_dir: PathBuf,
    pub log_dir: PathBuf,
    pub defaults: Defaults,
    #[serde(flatten)]
    pub overrides: Overrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:9001".to_string(),
            store: StoreConfig::default(),
            export_dir: PathBuf::from("exports"),
            log_dir: PathBuf::from("log"),
            defaults: Defaults::default(),
            overrides: Overrides::default(),
        }
    }
}

impl Config {
    /// Reads the JSON config at `path`; no path means all defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Config::default()),
        };

        let data = fs::read_to_string(path)
            .map_err(|error| DeckError::Config(format!("{}: {}", path, error)))?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|error| DeckError::Config(format!("{}: {}", path, error)))?;

        if config.address.is_empty() {
            return Err(DeckError::Config("address must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn empty_document(&self) -> Document {
        Document::new(
            self.defaults.welcome.clone(),
            self.defaults.intermission.clone(),
        )
    }

    pub fn open_store(&self) -> Result<Box<dyn DataStore>> {
        let store: Box<dyn DataStore> = match &self.store {
            StoreConfig::Json { path } => Box::new(JsonFileStore::new(path, self.empty_document())),
            StoreConfig::Sqlite { path } => Box::new(SqliteStore::open(path, self.empty_document())?),
        };
        Ok(store)
    }
}
