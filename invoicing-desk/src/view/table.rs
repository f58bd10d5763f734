use crate::models::LineItem;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Render the line-item table with 1-based row numbers, the selected row marked, and the total.
pub fn render_items(items: &[LineItem], selected: Option<usize>, total: Decimal) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:>3}  {:<28} {:>8} {:>5} {:>10} {:>11}",
        "#", "Description", "Power", "Qty", "Price", "Amount"
    );

    for (index, item) in items.iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:>3}  {:<28} {:>8} {:>5} {:>10.2} {:>11.2}",
            marker,
            index + 1,
            item.description,
            item.power,
            item.quantity,
            item.unit_price.round_dp(2),
            item.amount.round_dp(2)
        );
    }

    let _ = writeln!(out, "Total: {:.2}", total.round_dp(2));
    out
}
