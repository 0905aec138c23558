use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::currency::CurrencyCode;
use crate::core::rate::RateProvider;

/// Quotes rates from the TransferGo `fx-rates` endpoint.
pub struct TransferGoProvider {
    base_url: String,
}

impl TransferGoProvider {
    pub fn new(base_url: &str) -> Self {
        TransferGoProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn quote_url(&self, from: &CurrencyCode, to: &CurrencyCode, amount: f64) -> Result<Url> {
        let endpoint = format!("{}/api/fx-rates", self.base_url);
        let amount = amount.to_string();
        Url::parse_with_params(
            &endpoint,
            &[
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("amount", amount.as_str()),
            ],
        )
        .map_err(|e| anyhow!("Invalid rate endpoint {}: {}", endpoint, e))
    }
}

#[derive(Debug, Deserialize)]
struct FxRateResponse {
    rate: f64,
}

#[async_trait]
impl RateProvider for TransferGoProvider {
    #[instrument(
        name = "TransferGoRateFetch",
        skip(self),
        fields(from = %from, to = %to)
    )]
    async fn fetch_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
        amount: f64,
    ) -> Result<f64> {
        let pair = format!("{from}/{to}");
        let url = self.quote_url(from, to, amount)?;
        debug!("Requesting exchange rate from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .build()?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for currency pair: {}", e, pair))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency pair: {}",
                response.status(),
                pair
            ));
        }

        let text = response.text().await?;

        let data: FxRateResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", pair, e))?;

        if !data.rate.is_finite() || data.rate <= 0.0 {
            return Err(anyhow!(
                "Invalid rate {} for currency pair: {}",
                data.rate,
                pair
            ));
        }

        Ok(data.rate)
    }
}
