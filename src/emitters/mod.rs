pub mod presentation;
pub mod print;

use log::info;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{error::Result, models::slide::SlideLayout};

pub use presentation::PresentationEmitter;
pub use print::PrintEmitter;

/// Turns a slide sequence into a concrete artifact.
pub trait DeckEmitter {
    /// File extension of the artifact, without the dot.
    fn extension(&self) -> &'static str;

    fn emit(&self, slides: &[SlideLayout], out: &mut dyn Write) -> Result<()>;
}

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Writes `slides` to a new timestamped file in `dir` and returns its path.
pub fn export_deck(
    emitter: &dyn DeckEmitter,
    slides: &[SlideLayout],
    dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let stamp = chrono::offset::Utc::now().format("%Y%m%d-%H%M%S%3f");
    let path = dir.join(format!("deck-{}.{}", stamp, emitter.extension()));

    let mut out = BufWriter::new(File::create(&path)?);
    emitter.emit(slides, &mut out)?;
    out.flush()?;

    info!("Exported {} slides to {}", slides.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::generate_slide_sequence;
    use crate::models::document::Document;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_xml(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &apos;Jerry&apos;&lt;/b&gt;"
        );
    }

    #[test]
    fn export_writes_file_with_emitter_extension() {
        let dir = tempfile::tempdir().unwrap();
        let slides = generate_slide_sequence(&Document::default());

        let path = export_deck(&PresentationEmitter, &slides, &dir.path().join("out")).unwrap();

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }
}
