//! A finished reading: the drawn cards and their parsed interpretation.

use arcana_reading::{ParsedPrediction, Section, parse};
use serde::Serialize;

use crate::types::{CardInfo, PredictionResponse};

/// What the display layer renders after a consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub question: String,
    pub cards: Vec<CardInfo>,
    pub prediction: ParsedPrediction,
    /// True when the service failed and the fallback message was substituted.
    pub fallback: bool,
}

impl Reading {
    /// Build a reading from a successful service answer.
    pub fn from_response(question: impl Into<String>, response: PredictionResponse) -> Self {
        Self {
            question: question.into(),
            prediction: parse(&response.prediction),
            cards: response.cards,
            fallback: false,
        }
    }

    /// Reading shown when the service could not be consulted. Carries no cards.
    pub fn fallback(question: impl Into<String>, message: &str) -> Self {
        Self {
            question: question.into(),
            cards: Vec::new(),
            prediction: parse(message),
            fallback: true,
        }
    }

    /// Each card paired with the section at the same position, if any.
    pub fn interpretations(&self) -> impl Iterator<Item = (&CardInfo, Option<&Section>)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card, self.prediction.section(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> CardInfo {
        CardInfo {
            name: name.to_string(),
            img: format!("{name}.jpg"),
            position: String::new(),
        }
    }

    #[test]
    fn test_interpretations_pair_by_position() {
        let response = PredictionResponse {
            cards: vec![card("A"), card("B"), card("C")],
            prediction: "Intro\n---\n### A\none\n### B\ntwo\n---\nEnd".to_string(),
        };
        let reading = Reading::from_response("q", response);
        let pairs: Vec<_> = reading
            .interpretations()
            .map(|(card, section)| (card.name.as_str(), section.map(|s| s.content.as_str())))
            .collect();

        assert_eq!(pairs, vec![("A", Some("one")), ("B", Some("two")), ("C", None)]);
    }

    #[test]
    fn test_fallback_has_no_cards() {
        let reading = Reading::fallback("q", "The mists are too thick.");
        assert!(reading.fallback);
        assert!(reading.cards.is_empty());
        assert_eq!(reading.prediction.intro, "The mists are too thick.");
        assert_eq!(reading.interpretations().count(), 0);
    }
}
