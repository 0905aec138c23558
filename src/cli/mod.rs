pub mod convert;
pub mod limits;
pub mod rates;
pub mod session;
pub mod setup;
pub mod ui;
