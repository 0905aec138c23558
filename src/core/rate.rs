//! Exchange rate abstractions

use crate::core::currency::CurrencyCode;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Rate substituted whenever a live rate cannot be obtained.
pub const FALLBACK_RATE: f64 = 1.0;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Returns how many units of `to` one unit of `from` buys when sending `amount`.
    async fn fetch_rate(&self, from: &CurrencyCode, to: &CurrencyCode, amount: f64)
    -> Result<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateOutcome {
    Available(f64),
    Unavailable,
}

impl RateOutcome {
    pub fn rate_or_fallback(&self) -> f64 {
        match self {
            RateOutcome::Available(rate) => *rate,
            RateOutcome::Unavailable => FALLBACK_RATE,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, RateOutcome::Available(_))
    }
}

/// Asks the provider for a rate, turning any failure into `Unavailable`.
pub async fn resolve_rate(
    provider: &dyn RateProvider,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
) -> RateOutcome {
    match provider.fetch_rate(from, to, amount).await {
        Ok(rate) => {
            debug!(%from, %to, rate, "Resolved exchange rate");
            RateOutcome::Available(rate)
        }
        Err(e) => {
            warn!(%from, %to, error = %e, "Rate unavailable, falling back to {FALLBACK_RATE}");
            RateOutcome::Unavailable
        }
    }
}

/// Like [`resolve_rate`], but collapses the outcome to a plain rate.
pub async fn fetch_rate(
    provider: &dyn RateProvider,
    from: &CurrencyCode,
    to: &CurrencyCode,
    amount: f64,
) -> f64 {
    resolve_rate(provider, from, to, amount)
        .await
        .rate_or_fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct FixedProvider(f64);

    #[async_trait]
    impl RateProvider for FixedProvider {
        async fn fetch_rate(&self, _: &CurrencyCode, _: &CurrencyCode, _: f64) -> Result<f64> {
            Ok(self.0)
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl RateProvider for FailingProvider {
        async fn fetch_rate(&self, _: &CurrencyCode, _: &CurrencyCode, _: f64) -> Result<f64> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_resolve_rate_success() {
        let outcome =
            resolve_rate(&FixedProvider(4.25), &CurrencyCode::Eur, &CurrencyCode::Pln, 10.0).await;
        assert_eq!(outcome, RateOutcome::Available(4.25));
        assert!(outcome.is_available());
        assert_eq!(outcome.rate_or_fallback(), 4.25);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_one() {
        let outcome =
            resolve_rate(&FailingProvider, &CurrencyCode::Eur, &CurrencyCode::Pln, 10.0).await;
        assert_eq!(outcome, RateOutcome::Unavailable);
        assert!(!outcome.is_available());

        let rate = fetch_rate(&FailingProvider, &CurrencyCode::Eur, &CurrencyCode::Pln, 10.0).await;
        assert_eq!(rate, 1.0);
    }
}
