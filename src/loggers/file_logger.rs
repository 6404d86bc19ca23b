use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

use crate::error::{DeckError, Result};

const PATTERN: &str = "{d(%H:%M:%S)(utc)} {l} - {m}\n";

/// Today's log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let current_date = chrono::offset::Utc::now().date_naive().to_string();
    log_dir.join(format!("{}.log", current_date))
}

pub fn init_file_logger(log_dir: &Path) -> Result<()> {
    let path = log_file_path(log_dir);

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(&path)?;
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(
            Root::builder()
                .appender("logfile")
                .appender("console")
                .build(LevelFilter::Info),
        )
        .map_err(|error| DeckError::Config(error.to_string()))?;

    log4rs::init_config(config).map_err(|error| DeckError::Config(error.to_string()))?;
    info!("File logger initialized at {}", path.display());

    Ok(())
}
