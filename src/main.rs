use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxconv::core::currency::CurrencyCode;
use fxconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxconv::AppCommand {
    fn from(cmd: Commands) -> fxconv::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                reverse,
            } => fxconv::AppCommand::Convert {
                amount,
                from,
                to,
                reverse,
            },
            Commands::Rates { from, amount } => fxconv::AppCommand::Rates { from, amount },
            Commands::Limits => fxconv::AppCommand::Limits,
            Commands::Session => fxconv::AppCommand::Session,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount using the live rate
    Convert {
        /// Amount to send (or to receive, with --reverse)
        amount: String,
        /// Sending currency
        #[arg(short, long, value_parser = parse_currency)]
        from: Option<CurrencyCode>,
        /// Receiving currency
        #[arg(short, long, value_parser = parse_currency)]
        to: Option<CurrencyCode>,
        /// Treat the amount as what the receiver gets
        #[arg(short, long)]
        reverse: bool,
    },
    /// Display live rates to every supported currency
    Rates {
        /// Sending currency
        #[arg(short, long, value_parser = parse_currency)]
        from: Option<CurrencyCode>,
        /// Amount to quote for
        #[arg(short, long)]
        amount: Option<String>,
    },
    /// Display transfer limits per currency
    Limits,
    /// Start an interactive converter session
    Session,
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    Ok(CurrencyCode::from(s))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxconv::cli::setup::setup(),
        Some(cmd) => fxconv::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
