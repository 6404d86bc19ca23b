use rand::{rngs::ThreadRng, Rng};

use crate::models::question::Question;

/// Number of values a three character base-36 part can hold.
pub const PART_SPACE: u32 = 36 * 36 * 36;

/// Source of the random part of question tags.
pub trait TokenProvider {
    fn token(&mut self) -> String;
}

/// Tokens drawn from two independent values in `0..PART_SPACE`.
pub struct RandomTokens<R: Rng> {
    rng: R,
}

impl RandomTokens<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomTokens<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomTokens<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TokenProvider for RandomTokens<R> {
    fn token(&mut self) -> String {
        let first = self.rng.gen_range(0..PART_SPACE);
        let second = self.rng.gen_range(0..PART_SPACE);
        format!("{}{}", encode_part(first), encode_part(second))
    }
}

/// Lowercase base-36, left padded with zeros to three characters.
pub fn encode_part(value: u32) -> String {
    let mut value = value % PART_SPACE;
    let mut digits = ['0'; 3];
    for digit in digits.iter_mut().rev() {
        // value % 36 < 36 so from_digit always succeeds
        *digit = std::char::from_digit(value % 36, 36).unwrap_or('0');
        value /= 36;
    }
    digits.iter().collect()
}

/// Tag for the question at zero-based `index` of the flat deck list.
pub fn tag(token: &str, index: usize) -> String {
    format!("{} - {}", token, (index + 1) * 2)
}

/// Fills in identifiers for questions that have none. Existing identifiers
/// are kept as they are. Positions are taken from the order of `questions`,
/// which must already be the flat deck order. Tokens are not checked for
/// collisions.
pub fn assign_identifiers<P: TokenProvider + ?Sized>(
    questions: Vec<Question>,
    provider: &mut P,
) -> Vec<Question> {
    questions
        .into_iter()
        .enumerate()
        .map(|(index, mut question)| {
            if question.identifier.is_none() {
                question.identifier = Some(tag(&provider.token(), index));
            }
            question
        })
        .collect()
}
