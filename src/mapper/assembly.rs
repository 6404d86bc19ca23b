use serde::{Deserialize, Serialize};

use super::{
    identifier::{assign_identifiers, TokenProvider},
    partition::{flatten, partition},
};
use crate::models::document::{Document, IntermissionSlide, TierBuckets, WelcomeSlide};

/// Welcome and intermission content that replaces whatever the editor sent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    #[serde(default)]
    pub fixed_welcome: Option<WelcomeSlide>,
    #[serde(default)]
    pub fixed_intermission: Option<IntermissionSlide>,
}

pub fn assemble(
    buckets: TierBuckets,
    welcome: WelcomeSlide,
    intermission: IntermissionSlide,
) -> Document {
    Document {
        welcome,
        intermission,
        questions: buckets,
    }
}

/// Builds the canonical document: every question tagged, buckets rebuilt
/// from the flat deck order, singletons taken from `overrides` when set.
pub fn canonicalize<P: TokenProvider + ?Sized>(
    document: &Document,
    overrides: &Overrides,
    provider: &mut P,
) -> Document {
    let tagged = assign_identifiers(flatten(&document.questions), provider);
    let welcome = overrides
        .fixed_welcome
        .clone()
        .unwrap_or_else(|| document.welcome.clone());
    let intermission = overrides
        .fixed_intermission
        .clone()
        .unwrap_or_else(|| document.intermission.clone());

    assemble(partition(tagged), welcome, intermission)
}
