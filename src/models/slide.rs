//! Renderer-agnostic slide descriptors.
//!
//! All positions and sizes are in canvas units on a 10 x 6 canvas. Colors
//! are six digit hex tokens without the leading `#`.

use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: f64 = 10.0;
pub const CANVAS_HEIGHT: f64 = 6.0;

pub const BACKGROUND_COLOR: &str = "000000";
pub const TEXT_COLOR: &str = "FFFFFF";
pub const TAG_COLOR: &str = "DADADA";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A band spanning the whole canvas width.
    pub fn full_width(y: f64, h: f64) -> Self {
        Self::new(0.0, y, CANVAS_WIDTH, h)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextBox {
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub align: Align,
    pub frame: Frame,
}

impl TextBox {
    pub fn new(text: impl Into<String>, font_size: u32, align: Align, frame: Frame) -> Self {
        Self {
            text: text.into(),
            color: TEXT_COLOR.to_string(),
            font_size,
            align,
            frame,
        }
    }

    pub fn colored(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }
}

/// Image scaled to fit inside `frame` keeping its aspect ratio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageBox {
    pub path: String,
    pub rounded: bool,
    pub frame: Frame,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlideLayout {
    #[serde(rename_all = "camelCase")]
    Welcome {
        background: String,
        title: TextBox,
        sub_title: TextBox,
    },
    #[serde(rename_all = "camelCase")]
    Intermission {
        background: String,
        picture: ImageBox,
        title: TextBox,
        tag: Option<TextBox>,
    },
    #[serde(rename_all = "camelCase")]
    QuestionCard {
        background: String,
        tag: TextBox,
        tier: TextBox,
        partial_points: TextBox,
        max_points: TextBox,
        prompt: TextBox,
        image: ImageBox,
    },
}

impl SlideLayout {
    pub fn background(&self) -> &str {
        match self {
            SlideLayout::Welcome { background, .. }
            | SlideLayout::Intermission { background, .. }
            | SlideLayout::QuestionCard { background, .. } => background,
        }
    }

    /// Text boxes in paint order.
    pub fn texts(&self) -> Vec<&TextBox> {
        match self {
            SlideLayout::Welcome {
                title, sub_title, ..
            } => vec![title, sub_title],
            SlideLayout::Intermission { title, tag, .. } => {
                let mut texts = vec![title];
                texts.extend(tag.iter());
                texts
            }
            SlideLayout::QuestionCard {
                tag,
                tier,
                partial_points,
                max_points,
                prompt,
                ..
            } => vec![tag, tier, partial_points, max_points, prompt],
        }
    }

    pub fn image(&self) -> Option<&ImageBox> {
        match self {
            SlideLayout::Welcome { .. } => None,
            SlideLayout::Intermission { picture, .. } => Some(picture),
            SlideLayout::QuestionCard { image, .. } => Some(image),
        }
    }
}
