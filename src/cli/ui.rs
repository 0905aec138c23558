use crate::core::currency::CurrencyCode;
use crate::core::screen::ConverterState;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::{Alignment, pad_str, style};
use indicatif::{ProgressBar, ProgressStyle};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Amount,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Amount => style(text).green().bold(),
        StyleType::Error => style(text).red().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Currency code prefixed with its flag, if it has one.
pub fn currency_label(code: &CurrencyCode) -> String {
    match code.flag() {
        Some(flag) => format!("{flag} {code}"),
        None => code.to_string(),
    }
}

/// Formats a limit. Unknown currencies have no limit.
pub fn limit_text(code: &CurrencyCode) -> String {
    if code.is_supported() {
        format!("{:.2}", code.limit())
    } else {
        "unlimited".to_string()
    }
}

pub fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a cell for a value that could not be fetched.
pub fn na_cell() -> Cell {
    Cell::new("N/A")
        .fg(Color::Red)
        .set_alignment(CellAlignment::Right)
}

/// Creates a new `indicatif::ProgressBar` with standard styling.
pub fn new_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

/// One card line. Columns are padded on the raw text, before styling, so
/// escape codes and wide flag glyphs don't shift the amount column.
fn card_line(label: &str, code: &CurrencyCode, amount: &str, amount_style: StyleType) -> String {
    format!(
        "{} {} {}",
        style_text(&pad_str(label, 14, Alignment::Left, None), StyleType::Label),
        pad_str(&currency_label(code), 8, Alignment::Left, None),
        style_text(amount, amount_style),
    )
}

/// Renders the two amount cards, the rate line and any limit warning.
pub fn render_cards(state: &ConverterState, fetching: bool) -> String {
    let mut lines = Vec::new();
    let from_style = if state.limit.exceeded {
        StyleType::Error
    } else {
        StyleType::Amount
    };

    lines.push(card_line(
        "Sending from",
        &state.from_currency,
        &state.from_amount,
        from_style,
    ));

    let mut rate_line = format!("  ⇅ {}", state.rate_label());
    if !state.rate_available {
        rate_line.push_str(&style_text(
            "  (rate unavailable, using fallback)",
            StyleType::Error,
        ));
    }
    if fetching {
        rate_line.push_str(&style_text("  updating…", StyleType::Subtle));
    }
    lines.push(rate_line);

    lines.push(card_line(
        "Receiver gets",
        &state.to_currency,
        &state.to_amount,
        StyleType::Amount,
    ));

    if state.limit.exceeded {
        lines.push(style_text(&state.limit.message, StyleType::Error));
    }

    lines.join("\n")
}
