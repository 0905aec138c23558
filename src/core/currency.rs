//! Supported currencies and their static transfer limits

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    Pln,
    Eur,
    Gbp,
    Uah,
    Unknown(String),
}

impl CurrencyCode {
    /// Currencies offered by the selector, in display order.
    pub const SUPPORTED: [CurrencyCode; 4] = [
        CurrencyCode::Pln,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Uah,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCode::Pln => "PLN",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Uah => "UAH",
            CurrencyCode::Unknown(code) => code,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, CurrencyCode::Unknown(_))
    }

    /// Maximum amount of this currency that can be sent in one transfer.
    ///
    /// Unknown codes are unlimited.
    pub fn limit(&self) -> f64 {
        match self {
            CurrencyCode::Pln => 20_000.0,
            CurrencyCode::Eur => 5_000.0,
            CurrencyCode::Gbp => 1_000.0,
            CurrencyCode::Uah => 50_000.0,
            CurrencyCode::Unknown(_) => f64::MAX,
        }
    }

    pub fn flag(&self) -> Option<&'static str> {
        match self {
            CurrencyCode::Pln => Some("🇵🇱"),
            CurrencyCode::Eur => Some("🇩🇪"),
            CurrencyCode::Gbp => Some("🇬🇧"),
            CurrencyCode::Uah => Some("🇺🇦"),
            CurrencyCode::Unknown(_) => None,
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Ok(match code.to_uppercase().as_str() {
            "PLN" => CurrencyCode::Pln,
            "EUR" => CurrencyCode::Eur,
            "GBP" => CurrencyCode::Gbp,
            "UAH" => CurrencyCode::Uah,
            _ => CurrencyCode::Unknown(code.to_string()),
        })
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(code) => code,
            Err(never) => match never {},
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        CurrencyCode::from(s.as_str())
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}
