pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::controller::ScreenController;
use crate::core::currency::CurrencyCode;
use crate::core::money::parse_amount;
use crate::core::rate::RateProvider;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<CurrencyCode>,
        to: Option<CurrencyCode>,
        reverse: bool,
    },
    Rates {
        from: Option<CurrencyCode>,
        amount: Option<String>,
    },
    Limits,
    Session,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let provider: Arc<dyn RateProvider> = Arc::new(providers::TransferGoProvider::new(
        config.transfergo_base_url(),
    ));

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            reverse,
        } => {
            let mut state = config.initial_state();
            if let Some(from) = from {
                state.from_currency = from;
            }
            if let Some(to) = to {
                state.to_currency = to;
            }
            state.from_amount.clear();
            let controller = ScreenController::new(state, provider);
            cli::convert::run(controller, &amount, reverse).await
        }
        AppCommand::Rates { from, amount } => {
            let from = from.unwrap_or(config.from_currency.clone());
            let amount = parse_amount(amount.as_deref().unwrap_or(&config.amount));
            cli::rates::run(provider.as_ref(), &from, amount).await
        }
        AppCommand::Limits => cli::limits::run(),
        AppCommand::Session => {
            let controller = ScreenController::new(config.initial_state(), provider);
            cli::session::run(controller).await
        }
    }
}
