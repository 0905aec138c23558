use super::ui;
use crate::core::currency::CurrencyCode;
use comfy_table::{Cell, Table};

pub fn limits_table() -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Transfer limit"),
    ]);
    for code in CurrencyCode::SUPPORTED {
        table.add_row(vec![
            Cell::new(ui::currency_label(&code)),
            ui::amount_cell(ui::limit_text(&code)),
        ]);
    }
    table
}

pub fn run() -> anyhow::Result<()> {
    println!("{}", ui::style_text("Transfer limits", ui::StyleType::Title));
    println!("{}", limits_table());
    println!(
        "{}",
        ui::style_text("Other currencies are not limited.", ui::StyleType::Subtle)
    );
    Ok(())
}
