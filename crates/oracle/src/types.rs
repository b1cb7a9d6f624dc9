//! Wire types for the prediction service.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub question: String,
    pub selected_indices: Vec<usize>,
}

impl PredictionRequest {
    pub fn new(question: impl Into<String>, selected_indices: &[usize]) -> Self {
        Self {
            question: question.into(),
            selected_indices: selected_indices.to_vec(),
        }
    }
}

/// One drawn card as described by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub name: String,
    /// Image reference; opaque to the client.
    pub img: String,
    /// Position label within the spread, e.g. "Past".
    pub position: String,
}

/// Successful answer from the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub cards: Vec<CardInfo>,
    pub prediction: String,
}
