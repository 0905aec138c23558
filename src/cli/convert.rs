use super::ui;
use crate::core::controller::ScreenController;
use crate::core::screen::{ConverterState, Event};
use anyhow::Result;
use tracing::debug;

/// Fetches a live rate for the pair in `state` and converts `amount`.
///
/// With `reverse`, `amount` is what the receiver should get and the sending
/// amount is worked out from it.
pub async fn convert(
    mut controller: ScreenController,
    amount: &str,
    reverse: bool,
) -> Result<ConverterState> {
    if reverse {
        controller.refresh();
        controller.settle().await;
        controller.dispatch(Event::ToAmountEdited(amount.to_string()));
    } else {
        // Quote for the amount actually being sent.
        controller.dispatch(Event::FromAmountEdited(amount.to_string()));
        controller.refresh();
        controller.settle().await;
    }

    let state = controller.state().clone();
    debug!(?state, "Conversion finished");
    Ok(state)
}

pub async fn run(controller: ScreenController, amount: &str, reverse: bool) -> Result<()> {
    let state = convert(controller, amount, reverse).await?;
    println!("{}", ui::render_cards(&state, false));
    Ok(())
}
