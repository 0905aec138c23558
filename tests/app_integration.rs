use fxconv::core::controller::ScreenController;
use fxconv::core::currency::CurrencyCode;
use fxconv::core::screen::{ConverterState, Event};
use fxconv::providers::TransferGoProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server() -> MockServer {
        MockServer::start().await
    }

    pub async fn mount_rate(server: &MockServer, to: &str, body: &str, delay_ms: u64) {
        Mock::given(method("GET"))
            .and(path("/api/fx-rates"))
            .and(query_param("to", to))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .set_delay(std::time::Duration::from_millis(delay_ms)),
            )
            .mount(server)
            .await;
    }

    pub fn write_config(dir: &tempfile::TempDir, base_url: &str) -> std::path::PathBuf {
        let config_path = dir.path().join("config.yaml");
        let config_content = format!(
            r#"
            from_currency: "PLN"
            to_currency: "UAH"
            amount: "300.0"
            providers:
              transfergo:
                base_url: {base_url}
            "#
        );
        std::fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }
}

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_mock() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_rate(&mock_server, "UAH", r#"{"rate": 11.50899}"#, 0).await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Convert {
            amount: "300".to_string(),
            from: None,
            to: None,
            reverse: false,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Convert command failed with: {:?}",
        result.err()
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let query = requests[0].url.query().unwrap_or_default().to_string();
    info!(?query, "Rate request sent");
    assert!(query.contains("from=PLN"));
    assert!(query.contains("to=UAH"));
    assert!(query.contains("amount=300"));
}

#[test_log::test(tokio::test)]
async fn test_convert_survives_service_failure() {
    let mock_server = test_utils::create_mock_server().await;
    wiremock::Mock::given(wiremock::matchers::any())
        .respond_with(wiremock::ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());

    let result = fxconv::run_command(
        fxconv::AppCommand::Convert {
            amount: "25000".to_string(),
            from: Some(CurrencyCode::Eur),
            to: Some(CurrencyCode::Gbp),
            reverse: true,
        },
        Some(config_path.to_str().unwrap()),
    )
    .await;
    assert!(result.is_ok(), "Rate failures must not fail the command");
}

#[test_log::test(tokio::test)]
async fn test_rates_and_limits_commands() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_rate(&mock_server, "EUR", r#"{"rate": 0.2345}"#, 0).await;
    test_utils::mount_rate(&mock_server, "GBP", r#"{"rate": 0.2011}"#, 0).await;
    // No UAH mock: that quote fails and is shown as N/A.

    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = test_utils::write_config(&dir, &mock_server.uri());
    let config_path = config_path.to_str().unwrap();

    let result = fxconv::run_command(
        fxconv::AppCommand::Rates {
            from: None,
            amount: Some("100".to_string()),
        },
        Some(config_path),
    )
    .await;
    assert!(result.is_ok(), "Rates command failed with: {:?}", result.err());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);

    let result = fxconv::run_command(fxconv::AppCommand::Limits, Some(config_path)).await;
    assert!(result.is_ok());
}

#[test_log::test(tokio::test)]
async fn test_invalid_config_path_fails() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.yaml");

    let result = fxconv::run_command(fxconv::AppCommand::Limits, missing.to_str()).await;
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file")
    );
}

#[test_log::test(tokio::test)]
async fn test_controller_applies_only_latest_live_rate() {
    let mock_server = test_utils::create_mock_server().await;
    test_utils::mount_rate(&mock_server, "EUR", r#"{"rate": 0.2345}"#, 500).await;
    test_utils::mount_rate(&mock_server, "GBP", r#"{"rate": 0.2011}"#, 0).await;

    let provider = Arc::new(TransferGoProvider::new(&mock_server.uri()));
    let state = ConverterState::new(CurrencyCode::Pln, CurrencyCode::Uah, "100", 1.0);
    let mut controller = ScreenController::new(state, provider);

    controller.dispatch(Event::ToCurrencyChanged(CurrencyCode::Eur));
    controller.dispatch(Event::ToCurrencyChanged(CurrencyCode::Gbp));
    controller.settle().await;

    assert_eq!(controller.state().to_currency, CurrencyCode::Gbp);
    assert_eq!(controller.state().rate, 0.2011);
    assert_eq!(controller.state().to_amount, "20.11");
    assert_eq!(controller.state().rate_label(), "1 PLN = 0.2011 GBP");

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(controller.next_rate_update().await.is_none());
    assert_eq!(controller.state().rate, 0.2011);
}

#[test_log::test(tokio::test)]
async fn test_controller_falls_back_when_service_is_down() {
    let provider = Arc::new(TransferGoProvider::new("http://127.0.0.1:1"));
    let state = ConverterState::new(CurrencyCode::Eur, CurrencyCode::Uah, "5100", 40.0);
    let mut controller = ScreenController::new(state, provider);

    controller.refresh();
    controller.settle().await;

    let state = controller.state();
    assert_eq!(state.rate, 1.0);
    assert!(!state.rate_available);
    assert_eq!(state.to_amount, "5100.00");
    assert!(state.limit.exceeded);
    assert!(state.limit.message.contains("EUR"));
    assert!(state.limit.message.contains("5000"));
}
