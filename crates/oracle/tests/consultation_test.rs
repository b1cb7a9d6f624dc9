#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

use std::time::Duration;

use arcana_oracle::{DEFAULT_FALLBACK_MESSAGE, OracleClient, OracleConfig};
use arcana_reading::split_bold_spans;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

const SAMPLE_PREDICTION: &str = "Seek within.\n---\n### Card A\nGood omen.\n### Card B\nCaution.\n### Card C\nJoy.\n---\n**Summary:** Trust yourself.";

fn client_for(server: &MockServer) -> std::result::Result<OracleClient, Box<dyn std::error::Error>> {
    let config = OracleConfig::with_url(Url::parse(&server.uri())?).timeout(Duration::from_secs(2));
    Ok(OracleClient::with_config(config)?)
}

#[tokio::test]
async fn test_three_card_reading_end_to_end() -> TestResult {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(body_json(serde_json::json!({
            "question": "What lies ahead?",
            "selected_indices": [4, 17, 60]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [
                {"name": "Card A", "img": "a.jpg", "position": "Past"},
                {"name": "Card B", "img": "b.jpg", "position": "Present"},
                {"name": "Card C", "img": "c.jpg", "position": "Future"}
            ],
            "prediction": SAMPLE_PREDICTION
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server)?;
    let reading = client.consult("What lies ahead?", &[4, 17, 60]).await;

    assert!(!reading.fallback);
    assert_eq!(reading.prediction.intro, "Seek within.");
    assert_eq!(reading.prediction.summary, "**Summary:** Trust yourself.");

    let pairs: Vec<(String, String, String)> = reading
        .interpretations()
        .map(|(card, section)| {
            (
                card.name.clone(),
                section.map(|s| s.title.clone()).unwrap_or_default(),
                section.map(|s| s.content.clone()).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Card A".to_string(), "Card A".to_string(), "Good omen.".to_string()),
            ("Card B".to_string(), "Card B".to_string(), "Caution.".to_string()),
            ("Card C".to_string(), "Card C".to_string(), "Joy.".to_string()),
        ]
    );

    let spans = split_bold_spans(&reading.prediction.summary);
    let bold: Vec<_> = spans.iter().filter(|span| span.bold).collect();
    assert_eq!(bold.len(), 1);
    assert_eq!(bold[0].text, "Summary:");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_falls_back() -> TestResult {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"cards": "nope"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server)?;
    let reading = client.consult("q", &[1, 2, 3]).await;

    assert!(reading.fallback);
    assert!(reading.cards.is_empty());
    assert_eq!(reading.prediction.intro, DEFAULT_FALLBACK_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_service_uses_configured_fallback() -> TestResult {
    // Nothing listens on the discard port
    let config = OracleConfig::with_url(Url::parse("http://127.0.0.1:9")?)
        .timeout(Duration::from_secs(2))
        .fallback_message("Come back tomorrow.");
    let client = OracleClient::with_config(config)?;

    let reading = client.consult("q", &[0, 1, 2]).await;
    assert!(reading.fallback);
    assert_eq!(reading.prediction.intro, "Come back tomorrow.");
    Ok(())
}
