//! Currency and percentage formatting.
//!
//! Whole euros, `,` thousands grouping, no decimals: `€18,200`.

/// Symbol prefixed to every amount.
pub const CURRENCY_SYMBOL: &str = "€";

/// Format a whole-euro amount, e.g. `91000` → `€91,000`.
///
/// Estimates are never negative, so amounts are unsigned.
pub fn format_currency(amount: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(amount))
}

/// Format a whole percentage, e.g. `700` → `700%`.
pub fn format_percent(percent: u32) -> String {
    format!("{}%", percent)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
