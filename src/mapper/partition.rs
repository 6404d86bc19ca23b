use crate::models::{document::TierBuckets, question::Question};

/// Concatenates the buckets in deck order.
pub fn flatten(buckets: &TierBuckets) -> Vec<Question> {
    buckets.questions().cloned().collect()
}

/// Splits a flat list into tier buckets, keeping relative order inside each
/// bucket. `flatten(&partition(list)) == list` whenever `list` is already in
/// deck order.
pub fn partition(questions: Vec<Question>) -> TierBuckets {
    let mut buckets = TierBuckets::default();
    for question in questions {
        buckets.bucket_mut(question.tier).push(question);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::identifier::{assign_identifiers, RandomTokens};
    use crate::models::question::Tier;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn tier() -> impl Strategy<Value = Tier> {
        prop::sample::select(Tier::ORDER.to_vec())
    }

    fn question() -> impl Strategy<Value = Question> {
        (tier(), "[a-z]{1,8}", 0.0f64..100.0, 0.0f64..100.0).prop_map(|(tier, prompt, partial, max)| {
            Question::new(prompt, "answer", tier).with_points(partial, max)
        })
    }

    #[test]
    fn partition_is_stable_within_tier() {
        let questions = vec![
            Question::new("h1", "a", Tier::Hard),
            Question::new("e1", "a", Tier::Easy),
            Question::new("h2", "a", Tier::Hard),
            Question::new("f1", "a", Tier::Frenzy),
            Question::new("e2", "a", Tier::Easy),
        ];
        let buckets = partition(questions);

        let prompts = |tier: Tier| -> Vec<String> {
            buckets
                .bucket(tier)
                .iter()
                .map(|q| q.prompt.clone())
                .collect()
        };
        assert_eq!(prompts(Tier::Easy), vec!["e1", "e2"]);
        assert_eq!(prompts(Tier::Hard), vec!["h1", "h2"]);
        assert_eq!(prompts(Tier::Frenzy), vec!["f1"]);
        assert!(prompts(Tier::Medium).is_empty());
        assert!(prompts(Tier::VeryHard).is_empty());
    }

    proptest! {
        #[test]
        fn flatten_undoes_partition(mut questions in prop::collection::vec(question(), 0..40)) {
            questions.sort_by_key(|q| q.tier);
            let buckets = partition(questions.clone());
            prop_assert_eq!(flatten(&buckets), questions);
        }

        #[test]
        fn tagged_deck_survives_partition(mut questions in prop::collection::vec(question(), 0..40), seed in any::<u64>()) {
            questions.sort_by_key(|q| q.tier);
            let tagged = assign_identifiers(questions.clone(), &mut RandomTokens::with_rng(StdRng::seed_from_u64(seed)));

            let flat = flatten(&partition(tagged.clone()));
            prop_assert_eq!(&flat, &tagged);
            for (index, (question, original)) in flat.iter().zip(&questions).enumerate() {
                let expected_suffix = format!(" - {}", (index + 1) * 2);
                prop_assert!(question.identifier.as_deref().unwrap().ends_with(&expected_suffix));
                prop_assert_eq!(&question.prompt, &original.prompt);
                prop_assert_eq!(question.tier, original.tier);
            }
        }

        #[test]
        fn buckets_hold_only_their_tier(questions in prop::collection::vec(question(), 0..40)) {
            let total = questions.len();
            let buckets = partition(questions);
            for (tier, bucket) in buckets.iter() {
                prop_assert!(bucket.iter().all(|q| q.tier == tier));
            }
            prop_assert_eq!(buckets.len(), total);
        }
    }
}
