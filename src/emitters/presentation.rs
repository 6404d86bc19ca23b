use serde::Serialize;
use std::io::Write;

use super::DeckEmitter;
use crate::{
    error::Result,
    models::slide::{SlideLayout, CANVAS_HEIGHT, CANVAS_WIDTH},
};

#[derive(Serialize)]
struct Layout {
    name: &'static str,
    width: f64,
    height: f64,
}

#[derive(Serialize)]
struct PresentationFile<'a> {
    layout: Layout,
    slides: &'a [SlideLayout],
}

/// Presentation file for a client side slide renderer: the custom 10 x 6
/// layout plus every slide descriptor.
pub struct PresentationEmitter;

impl DeckEmitter for PresentationEmitter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn emit(&self, slides: &[SlideLayout], out: &mut dyn Write) -> Result<()> {
        let file = PresentationFile {
            layout: Layout {
                name: "CUSTOM",
                width: CANVAS_WIDTH,
                height: CANVAS_HEIGHT,
            },
            slides,
        };
        serde_json::to_writer_pretty(out, &file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::generate_slide_sequence;
    use crate::models::{
        document::Document,
        question::{Question, Tier},
    };

    #[test]
    fn file_carries_layout_and_slides() {
        let mut document = Document::default();
        document.questions.frenzy.push(
            Question::new("q", "a", Tier::Frenzy)
                .with_points(1.0, 30.0)
                .with_identifier("abc123 - 2"),
        );
        let slides = generate_slide_sequence(&document);

        let mut out = Vec::new();
        PresentationEmitter.emit(&slides, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["layout"]["name"], "CUSTOM");
        assert_eq!(value["layout"]["width"], 10.0);
        assert_eq!(value["layout"]["height"], 6.0);
        assert_eq!(value["slides"].as_array().unwrap().len(), 3);
        assert_eq!(value["slides"][0]["kind"], "welcome");
        assert_eq!(value["slides"][1]["kind"], "intermission");
        assert_eq!(value["slides"][2]["kind"], "questionCard");
        assert_eq!(value["slides"][2]["maxPoints"]["text"], "Czas: 30sek.");
        assert_eq!(value["slides"][2]["tier"]["color"], "C507C7");
    }
}
