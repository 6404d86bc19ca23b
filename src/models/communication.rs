#![allow(non_camel_case_types, non_snake_case)]

use serde::{Deserialize, Serialize};

use super::{
    document::{Document, IntermissionSlide, WelcomeSlide},
    question::{Question, Tier},
};

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "response", content = "data")]
pub enum Response {
    documentResponse {
        document: Document,
    },
    savedResponse {
        document: Document,
    },
    exportResponse {
        path: String,
        slides: usize,
    },
    errorResponse {
        errorText: String,
    },
}

#[derive(Serialize, Deserialize, Debug)]
pub enum Command {
    getDocument {},
    setWelcome {
        welcome: WelcomeSlide,
    },
    setIntermission {
        intermission: IntermissionSlide,
    },
    replaceTier {
        tier: Tier,
        questions: Vec<Question>,
    },
    setCompleted {
        identifier: String,
        done: bool,
    },
    saveChanges {},
    generatePrint {},
    generatePresentation {},
}
