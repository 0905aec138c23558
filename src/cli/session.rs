//! Interactive converter session on stdin.
//!
//! Each input line is one edit on the screen. Rate fetches run in the
//! background and the cards are redrawn whenever a fresh rate lands.

use super::ui;
use crate::core::controller::ScreenController;
use crate::core::currency::CurrencyCode;
use crate::core::screen::{ConverterState, Event};
use anyhow::{Result, anyhow, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
Commands:
  send <amount>      set the amount being sent
  receive <amount>   set the amount the receiver gets
  from <currency>    change the sending currency
  to <currency>      change the receiving currency
  swap               swap currencies and amounts
  show               redraw the cards
  help               show this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit(Event),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Command::Show);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        bail!("Too many arguments for '{verb}'");
    }

    let needs_arg = |name: &str| arg.ok_or_else(|| anyhow!("'{verb}' expects {name}"));

    let command = match verb.to_lowercase().as_str() {
        "send" | "s" => Command::Edit(Event::FromAmountEdited(needs_arg("an amount")?.to_string())),
        "receive" | "r" => Command::Edit(Event::ToAmountEdited(needs_arg("an amount")?.to_string())),
        "from" => Command::Edit(Event::FromCurrencyChanged(CurrencyCode::from(
            needs_arg("a currency code")?,
        ))),
        "to" => Command::Edit(Event::ToCurrencyChanged(CurrencyCode::from(
            needs_arg("a currency code")?,
        ))),
        "swap" => Command::Edit(Event::Swap),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("Unknown command '{other}', type 'help' for a list"),
    };
    Ok(command)
}

/// Runs the session until `quit` or end of input and returns the final state.
pub async fn run_with_input<R>(mut controller: ScreenController, input: R) -> Result<ConverterState>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    println!("{}", ui::style_text("Currency Converter", ui::StyleType::Title));
    println!("{}", ui::style_text("Type 'help' for commands.", ui::StyleType::Subtle));
    controller.refresh();
    println!("{}", ui::render_cards(controller.state(), true));

    loop {
        let pending = controller.has_pending();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Show) => {
                        println!("{}", ui::render_cards(controller.state(), controller.is_fetching()));
                    }
                    Ok(Command::Edit(event)) => {
                        controller.dispatch(event);
                        println!("{}", ui::render_cards(controller.state(), controller.is_fetching()));
                    }
                    Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
                }
            }
            update = controller.next_rate_update(), if pending => {
                if let Some(update) = update {
                    if update.generation == controller.state().generation {
                        println!("{}", ui::render_cards(controller.state(), false));
                    }
                }
            }
        }
    }

    Ok(controller.state().clone())
}

pub async fn run(controller: ScreenController) -> Result<()> {
    run_with_input(controller, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}
