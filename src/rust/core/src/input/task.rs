// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// AI task categories with a measured default energy per inference
/// (Luccioni, Jernite & Strubell, 2024).
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiTask {
    TextGeneration = 0,
    TextClassification = 1,
    #[serde(rename = "extractive-qa")]
    ExtractiveQa = 2,
    #[serde(rename = "masked-lm")]
    MaskedLm = 3,
    TokenClassification = 4,
    ImageClassification = 5,
    ObjectDetection = 6,
    Summarization = 7,
    ImageCaptioning = 8,
    ImageGeneration = 9,
}

impl AiTask {
    pub const ALL: [AiTask; 10] = [
        AiTask::TextGeneration,
        AiTask::TextClassification,
        AiTask::ExtractiveQa,
        AiTask::MaskedLm,
        AiTask::TokenClassification,
        AiTask::ImageClassification,
        AiTask::ObjectDetection,
        AiTask::Summarization,
        AiTask::ImageCaptioning,
        AiTask::ImageGeneration,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        AiTask::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            AiTask::TextGeneration => "text-generation",
            AiTask::TextClassification => "text-classification",
            AiTask::ExtractiveQa => "extractive-qa",
            AiTask::MaskedLm => "masked-lm",
            AiTask::TokenClassification => "token-classification",
            AiTask::ImageClassification => "image-classification",
            AiTask::ObjectDetection => "object-detection",
            AiTask::Summarization => "summarization",
            AiTask::ImageCaptioning => "image-captioning",
            AiTask::ImageGeneration => "image-generation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AiTask::TextGeneration => "Text generation",
            AiTask::TextClassification => "Text classification",
            AiTask::ExtractiveQa => "Question answering (extractive)",
            AiTask::MaskedLm => "Masked language modeling",
            AiTask::TokenClassification => "Token classification",
            AiTask::ImageClassification => "Image classification",
            AiTask::ObjectDetection => "Object detection",
            AiTask::Summarization => "Summarization",
            AiTask::ImageCaptioning => "Image captioning",
            AiTask::ImageGeneration => "Image generation",
        }
    }

    /// Default energy per inference (kWh). Published figures are Wh per
    /// inference, hence the division.
    pub fn energy_kwh(self) -> f64 {
        let wh = match self {
            AiTask::TextGeneration => 0.047,
            AiTask::TextClassification => 0.002,
            AiTask::ExtractiveQa => 0.003,
            AiTask::MaskedLm => 0.003,
            AiTask::TokenClassification => 0.004,
            AiTask::ImageClassification => 0.007,
            AiTask::ObjectDetection => 0.038,
            AiTask::Summarization => 0.049,
            AiTask::ImageCaptioning => 0.063,
            AiTask::ImageGeneration => 2.907,
        };
        wh / 1000.0
    }
}
