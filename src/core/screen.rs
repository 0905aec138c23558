//! Converter screen state and the reducer that drives it.
//!
//! The state is a plain value. [`reduce`] takes the current state and an
//! [`Event`] and returns the next state, plus a [`FetchRequest`] when the
//! currency pair changed and a fresh rate is needed.

use crate::core::currency::CurrencyCode;
use crate::core::money::{
    LimitCheck, check_limit, convert, convert_back, format_amount, format_rate_label,
    parse_amount, parse_amount_or,
};
use crate::core::rate::RateOutcome;

#[derive(Debug, Clone, PartialEq)]
pub struct ConverterState {
    pub from_currency: CurrencyCode,
    pub to_currency: CurrencyCode,
    pub from_amount: String,
    pub to_amount: String,
    pub rate: f64,
    /// False once a fetch has failed and the fallback rate is in use.
    pub rate_available: bool,
    pub limit: LimitCheck,
    /// Generation of the most recently requested fetch.
    pub generation: u64,
}

impl ConverterState {
    pub fn new(from: CurrencyCode, to: CurrencyCode, amount: &str, rate: f64) -> Self {
        Self {
            from_currency: from,
            to_currency: to,
            from_amount: amount.to_string(),
            to_amount: String::new(),
            rate,
            rate_available: true,
            limit: LimitCheck::default(),
            generation: 0,
        }
    }

    pub fn rate_label(&self) -> String {
        format_rate_label(&self.from_currency, &self.to_currency, self.rate)
    }

    /// Builds the next fetch request for the current pair.
    fn request_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        FetchRequest {
            generation: self.generation,
            from: self.from_currency.clone(),
            to: self.to_currency.clone(),
            // Non-numeric text quotes a single unit.
            amount: parse_amount_or(&self.from_amount, 1.0),
        }
    }

    fn recompute_to_amount(&mut self) {
        let numeric_from = parse_amount(&self.from_amount);
        self.limit = check_limit(numeric_from, &self.from_currency);
        self.to_amount = format_amount(convert(numeric_from, self.rate));
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(CurrencyCode::Pln, CurrencyCode::Uah, "300.0", 11.50899)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FromAmountEdited(String),
    ToAmountEdited(String),
    FromCurrencyChanged(CurrencyCode),
    ToCurrencyChanged(CurrencyCode),
    Swap,
    RateResolved { generation: u64, outcome: RateOutcome },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ConverterState,
    pub fetch: Option<FetchRequest>,
}

pub fn reduce(state: ConverterState, event: Event) -> Transition {
    let mut next = state;
    let mut fetch = None;

    match event {
        Event::FromAmountEdited(text) => {
            next.from_amount = text;
            next.recompute_to_amount();
        }
        Event::ToAmountEdited(text) => {
            let numeric_to = parse_amount(&text);
            next.to_amount = text;
            let previous = parse_amount(&next.from_amount);
            next.from_amount = format_amount(convert_back(numeric_to, next.rate, previous));
            next.limit = check_limit(parse_amount(&next.from_amount), &next.from_currency);
        }
        Event::FromCurrencyChanged(code) => {
            next.from_currency = code;
            next.limit = LimitCheck::default();
            fetch = Some(next.request_fetch());
        }
        Event::ToCurrencyChanged(code) => {
            next.to_currency = code;
            fetch = Some(next.request_fetch());
        }
        Event::Swap => {
            std::mem::swap(&mut next.from_currency, &mut next.to_currency);
            std::mem::swap(&mut next.from_amount, &mut next.to_amount);
            fetch = Some(next.request_fetch());
        }
        Event::RateResolved {
            generation,
            outcome,
        } => {
            if generation == next.generation {
                next.rate = outcome.rate_or_fallback();
                next.rate_available = outcome.is_available();
                next.recompute_to_amount();
            }
        }
    }

    Transition { state: next, fetch }
}
