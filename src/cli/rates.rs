use super::ui;
use crate::core::currency::CurrencyCode;
use crate::core::money::{check_limit, convert, format_amount};
use crate::core::rate::{RateOutcome, RateProvider, resolve_rate};
use anyhow::Result;
use comfy_table::Cell;
use futures::future::join_all;

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub to: CurrencyCode,
    pub outcome: RateOutcome,
}

/// Quotes `from` against every other supported currency concurrently.
pub async fn fetch_quotes(
    provider: &dyn RateProvider,
    from: &CurrencyCode,
    amount: f64,
    on_done: &dyn Fn(),
) -> Vec<QuoteRow> {
    let targets: Vec<CurrencyCode> = CurrencyCode::SUPPORTED
        .into_iter()
        .filter(|code| code != from)
        .collect();

    let quote_futures = targets.into_iter().map(|to| async move {
        let outcome = resolve_rate(provider, from, &to, amount).await;
        on_done();
        QuoteRow { to, outcome }
    });

    join_all(quote_futures).await
}

pub async fn run(provider: &dyn RateProvider, from: &CurrencyCode, amount: f64) -> Result<()> {
    let pending = CurrencyCode::SUPPORTED
        .iter()
        .filter(|code| *code != from)
        .count();
    let pb = ui::new_progress_bar(pending as u64);
    let rows = fetch_quotes(provider, from, amount, &|| pb.inc(1)).await;
    pb.finish_and_clear();

    println!(
        "\n{} {}",
        ui::style_text("Rates for", ui::StyleType::Title),
        ui::style_text(
            &format!("{} {}", format_amount(amount), ui::currency_label(from)),
            ui::StyleType::Title
        )
    );

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Rate"),
        ui::header_cell("Receiver gets"),
        ui::header_cell("Transfer limit"),
    ]);

    for row in &rows {
        let (rate_cell, amount_cell) = match row.outcome {
            RateOutcome::Available(rate) => (
                ui::amount_cell(format!("{rate:.4}")),
                ui::amount_cell(format_amount(convert(amount, rate))),
            ),
            RateOutcome::Unavailable => (ui::na_cell(), ui::na_cell()),
        };
        table.add_row(vec![
            Cell::new(ui::currency_label(&row.to)),
            rate_cell,
            amount_cell,
            ui::amount_cell(ui::limit_text(&row.to)),
        ]);
    }

    println!("{table}");

    let limit = check_limit(amount, from);
    if limit.exceeded {
        println!("{}", ui::style_text(&limit.message, ui::StyleType::Error));
    }
    Ok(())
}
