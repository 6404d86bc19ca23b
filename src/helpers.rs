use crate::{
    error::{DeckError, Result},
    models::{
        communication::Command,
        document::Document,
        question::{Question, Tier},
    },
};
use tungstenite::Message;

pub fn parse_command(msg: &Message) -> std::result::Result<Command, serde_json::Error> {
    serde_json::from_str(&msg.to_string())
}

/// Rejects a list that would put a question into the wrong bucket.
pub fn check_tier(tier: Tier, questions: &[Question]) -> Result<()> {
    match questions.iter().find(|question| question.tier != tier) {
        Some(question) => Err(DeckError::TierMismatch {
            prompt: question.prompt.clone(),
            expected: tier,
            found: question.tier,
        }),
        None => Ok(()),
    }
}

pub fn find_question_mut<'a>(
    document: &'a mut Document,
    identifier: &str,
) -> Result<&'a mut Question> {
    for tier in Tier::ORDER {
        let bucket = document.questions.bucket_mut(tier);
        if let Some(index) = bucket
            .iter()
            .position(|question| question.identifier.as_deref() == Some(identifier))
        {
            return Ok(&mut document.questions.bucket_mut(tier)[index]);
        }
    }
    Err(DeckError::UnknownQuestion(identifier.to_string()))
}
