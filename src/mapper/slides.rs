use crate::models::{
    document::{Document, IntermissionSlide, WelcomeSlide},
    question::Question,
    slide::{Align, Frame, ImageBox, SlideLayout, TextBox, BACKGROUND_COLOR, TAG_COLOR},
};

const BODY_FONT: u32 = 16;
const TAG_FONT: u32 = 8;

/// Small reference text along the bottom edge.
fn tag_text(tag: &str) -> TextBox {
    TextBox::new(tag, TAG_FONT, Align::Center, Frame::full_width(5.5, 0.5)).colored(TAG_COLOR)
}

pub fn welcome_slide(welcome: &WelcomeSlide) -> SlideLayout {
    SlideLayout::Welcome {
        background: BACKGROUND_COLOR.to_string(),
        title: TextBox::new(&welcome.title, 100, Align::Center, Frame::full_width(0.5, 3.0)),
        sub_title: TextBox::new(
            &welcome.sub_title,
            BODY_FONT,
            Align::Center,
            Frame::full_width(5.0, 1.0),
        ),
    }
}

pub fn intermission_slide(intermission: &IntermissionSlide, tag: Option<&str>) -> SlideLayout {
    SlideLayout::Intermission {
        background: BACKGROUND_COLOR.to_string(),
        picture: ImageBox {
            path: intermission.picture_url.clone(),
            rounded: true,
            frame: Frame::new(3.0, 1.0, 4.0, 4.0),
        },
        title: TextBox::new(
            &intermission.title,
            BODY_FONT,
            Align::Center,
            Frame::full_width(5.0, 1.0),
        ),
        tag: tag.filter(|tag| !tag.is_empty()).map(tag_text),
    }
}

pub fn partial_points_label(question: &Question) -> String {
    format!("Pkt. za 1 odp.: {}pkt.", question.partial_points)
}

/// Time limit for frenzy questions, points cap for the rest.
pub fn max_points_label(question: &Question) -> String {
    if question.tier.is_timed() {
        format!("Czas: {}sek.", question.max_points)
    } else {
        format!("MAX pkt.: {}pkt.", question.max_points)
    }
}

pub fn question_slide(question: &Question, default_picture: &str) -> SlideLayout {
    let image = match &question.image_url {
        Some(url) => ImageBox {
            path: url.clone(),
            rounded: false,
            frame: Frame::new(4.0, 1.5, 2.0, 2.0),
        },
        None => ImageBox {
            path: default_picture.to_string(),
            rounded: true,
            frame: Frame::new(4.0, 1.5, 2.0, 2.0),
        },
    };

    SlideLayout::QuestionCard {
        background: BACKGROUND_COLOR.to_string(),
        tag: tag_text(question.identifier.as_deref().unwrap_or_default()),
        tier: TextBox::new(
            question.tier.label(),
            BODY_FONT,
            Align::Center,
            Frame::new(3.0, 0.0, 4.0, 1.0),
        )
        .colored(question.tier.color()),
        partial_points: TextBox::new(
            partial_points_label(question),
            BODY_FONT,
            Align::Left,
            Frame::new(0.0, 0.5, 5.0, 1.0),
        ),
        max_points: TextBox::new(
            max_points_label(question),
            BODY_FONT,
            Align::Right,
            Frame::new(5.0, 0.5, 5.0, 1.0),
        ),
        prompt: TextBox::new(
            format!("Pytanie:\n{}", question.prompt),
            32,
            Align::Center,
            Frame::full_width(3.5, 2.0),
        ),
        image,
    }
}

/// Welcome slide, then an intermission and a question card per question in
/// deck order. Expects a canonical document; untagged questions get an
/// intermission without tag text and an empty reference line.
pub fn generate_slide_sequence(document: &Document) -> Vec<SlideLayout> {
    let mut slides = Vec::with_capacity(1 + 2 * document.question_count());
    slides.push(welcome_slide(&document.welcome));

    for question in document.questions.questions() {
        slides.push(intermission_slide(
            &document.intermission,
            question.identifier.as_deref(),
        ));
        slides.push(question_slide(question, &document.intermission.picture_url));
    }

    slides
}
