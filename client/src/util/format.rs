//! Display formatting for amounts, percentages, and dashboard figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// `12500` -> `"12,500"`. Fractions are kept to two places and dropped when zero.
pub fn group_thousands(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{fraction:02}") }
}

/// `("2500", "USDC")` -> `"2,500 USDC"`. Unparseable budgets are shown as-is.
pub fn money(budget: &str, currency: &str) -> String {
    match budget.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => format!("{} {currency}", group_thousands(amount)),
        _ => format!("{budget} {currency}"),
    }
}

/// Whole-number percentage label, e.g. `"80%"`.
pub fn percent(value: f64) -> String {
    format!("{}%", value.round())
}

/// Dashboard success-rate tile; a dash until a job has finished.
pub fn success_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "-".to_owned(), percent)
}

/// Vote counter against the threshold, e.g. `"8 / 5 votes"`.
pub fn vote_progress(total: u32, threshold: u32) -> String {
    format!("{total} / {threshold} votes")
}
