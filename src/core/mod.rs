//! Core business logic abstractions

pub mod config;
pub mod controller;
pub mod currency;
pub mod log;
pub mod money;
pub mod rate;
pub mod screen;

// Re-export main types for cleaner imports
pub use currency::CurrencyCode;
pub use rate::{RateOutcome, RateProvider};
pub use screen::{ConverterState, Event};
