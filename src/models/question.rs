use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Frenzy,
}

impl Tier {
    /// Deck order. Every place that walks the buckets goes through this.
    pub const ORDER: [Tier; 5] = [
        Tier::Easy,
        Tier::Medium,
        Tier::Hard,
        Tier::VeryHard,
        Tier::Frenzy,
    ];

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Easy => "22C707",
            Tier::Medium => "C2C707",
            Tier::Hard => "C75907",
            Tier::VeryHard => "C70707",
            Tier::Frenzy => "C507C7",
        }
    }

    /// Text printed in the tier label of a question card.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Easy => "EASY",
            Tier::Medium => "MEDIUM",
            Tier::Hard => "HARD",
            Tier::VeryHard => "VERY_HARD",
            Tier::Frenzy => "FRENZY",
        }
    }

    /// Frenzy rounds are played against the clock, so `max_points` holds seconds.
    pub fn is_timed(&self) -> bool {
        *self == Tier::Frenzy
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "hash", default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "question")]
    pub prompt: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub tier: Tier,
    pub partial_points: f64,
    pub max_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "done", default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>, tier: Tier) -> Self {
        Self {
            identifier: None,
            prompt: prompt.into(),
            answer: answer.into(),
            tier,
            partial_points: 0.0,
            max_points: 0.0,
            image_url: None,
            completed: None,
        }
    }

    pub fn with_points(mut self, partial_points: f64, max_points: f64) -> Self {
        self.partial_points = partial_points;
        self.max_points = max_points;
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}
