use serde::{Deserialize, Serialize};

use super::question::{Question, Tier};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeSlide {
    pub title: String,
    pub sub_title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntermissionSlide {
    pub title: String,
    pub picture_url: String,
}

/// The five per-tier question lists of a deck.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TierBuckets {
    #[serde(default)]
    pub easy: Vec<Question>,
    #[serde(default)]
    pub medium: Vec<Question>,
    #[serde(default)]
    pub hard: Vec<Question>,
    #[serde(default)]
    pub very_hard: Vec<Question>,
    #[serde(default)]
    pub frenzy: Vec<Question>,
}

type Bucket = fn(&TierBuckets) -> &Vec<Question>;
type BucketMut = fn(&mut TierBuckets) -> &mut Vec<Question>;

macro_rules! bucket_entry {
    ($tier:expr, $field:ident) => {{
        fn get(buckets: &TierBuckets) -> &Vec<Question> {
            &buckets.$field
        }
        fn get_mut(buckets: &mut TierBuckets) -> &mut Vec<Question> {
            &mut buckets.$field
        }
        ($tier, get as Bucket, get_mut as BucketMut)
    }};
}

/// Tier to bucket table, in deck order.
static BUCKETS: [(Tier, Bucket, BucketMut); 5] = [
    bucket_entry!(Tier::Easy, easy),
    bucket_entry!(Tier::Medium, medium),
    bucket_entry!(Tier::Hard, hard),
    bucket_entry!(Tier::VeryHard, very_hard),
    bucket_entry!(Tier::Frenzy, frenzy),
];

fn entry(tier: Tier) -> &'static (Tier, Bucket, BucketMut) {
    // BUCKETS follows Tier::ORDER, so the discriminant is the index.
    &BUCKETS[tier as usize]
}

impl TierBuckets {
    pub fn bucket(&self, tier: Tier) -> &Vec<Question> {
        (entry(tier).1)(self)
    }

    pub fn bucket_mut(&mut self, tier: Tier) -> &mut Vec<Question> {
        (entry(tier).2)(self)
    }

    /// Buckets paired with their tier, in deck order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &Vec<Question>)> + '_ {
        BUCKETS.iter().map(move |(tier, bucket, _)| (*tier, bucket(self)))
    }

    /// All questions, easy first and frenzy last.
    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.iter().flat_map(|(_, bucket)| bucket.iter())
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub welcome: WelcomeSlide,
    pub intermission: IntermissionSlide,
    #[serde(flatten)]
    pub questions: TierBuckets,
}

impl Document {
    pub fn new(welcome: WelcomeSlide, intermission: IntermissionSlide) -> Self {
        Self {
            welcome,
            intermission,
            questions: TierBuckets::default(),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_table_matches_tier_order() {
        for (index, (tier, _, _)) in BUCKETS.iter().enumerate() {
            assert_eq!(Tier::ORDER[index], *tier);
        }
    }

    #[test]
    fn bucket_mut_selects_matching_list() {
        let mut buckets = TierBuckets::default();
        buckets
            .bucket_mut(Tier::VeryHard)
            .push(Question::new("q", "a", Tier::VeryHard));

        assert_eq!(buckets.very_hard.len(), 1);
        assert_eq!(buckets.bucket(Tier::VeryHard).len(), 1);
        assert!(buckets.bucket(Tier::Hard).is_empty());
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn questions_walk_tiers_in_deck_order() {
        let mut buckets = TierBuckets::default();
        buckets.frenzy.push(Question::new("f", "a", Tier::Frenzy));
        buckets.easy.push(Question::new("e", "a", Tier::Easy));
        buckets.hard.push(Question::new("h", "a", Tier::Hard));

        let prompts: Vec<&str> = buckets.questions().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["e", "h", "f"]);
    }

    #[test]
    fn document_is_flat_on_the_wire() {
        let json = r#"{
            "welcome": {"title": "Hello", "subTitle": "Family Feud"},
            "intermission": {"title": "Break", "pictureUrl": "break.png"},
            "easy": [],
            "medium": [],
            "hard": [],
            "veryHard": [{"question": "q", "answer": "a", "type": "VERY_HARD", "partialPoints": 1, "maxPoints": 2}],
            "frenzy": []
        }"#;
        let document: Document = serde_json::from_str(json).unwrap();
        assert_eq!(document.welcome.sub_title, "Family Feud");
        assert_eq!(document.intermission.picture_url, "break.png");
        assert_eq!(document.questions.very_hard.len(), 1);
        assert_eq!(document.question_count(), 1);

        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("veryHard").is_some());
        assert!(value.get("questions").is_none());
    }
}
