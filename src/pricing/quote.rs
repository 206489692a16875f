use tracing::debug;

use crate::models::Quote;
use crate::pricing::constants::CURRENCY_CODE;
use crate::pricing::rules::PricingRules;

/// Compute the full price breakdown for one event.
///
/// Overtime is billed only for hours beyond the free limit, at a flat hourly
/// rate that does not scale with pax.
pub fn compute_quote(
    rules: &PricingRules,
    per_pax_price: f64,
    pax: u32,
    duration_hours: f64,
) -> Quote {
    let menu_subtotal = per_pax_price * pax as f64;

    // Flat surcharge, only past the free hours

    let (overtime_hours, overtime_charge) = if duration_hours > rules.overtime_limit_hours {
        let hours = duration_hours - rules.overtime_limit_hours;
        (hours, hours * rules.overtime_rate_per_hour)
    } else {
        (0.0, 0.0)
    };

    let final_total = menu_subtotal + overtime_charge;
    let deposit_amount = final_total * rules.deposit_rate;

    debug!(
        per_pax_price,
        pax, duration_hours, overtime_charge, final_total, "computed quote"
    );

    Quote {
        duration_hours,
        menu_subtotal,
        overtime_hours,
        overtime_charge,
        final_total,
        deposit_amount,
    }
}

/// Parse the leading integer of a pax field the way a browser number input
/// would (`" 45 guests"` → 45). Returns `None` when no digits lead the text.
pub fn parse_pax(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    // Leading digits only; trailing text is ignored
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // A digit run too long for i64 saturates rather than reading as no number
    let n = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * n)
}

/// Pax for live recalculation: anything unusable counts as zero guests.
pub fn parse_pax_lenient(input: &str) -> u32 {
    parse_pax(input)
        .filter(|n| *n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// Round to `places` decimals with ties going away from zero.
///
/// `format!("{:.N}")` alone sends exact ties to the even digit, which would
/// print a deposit of 974.125 as 974.12.
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Render an amount as `"1234.50 AED"`.
pub fn format_currency(amount: f64) -> String {
    format!("{:.2} {}", round_half_up(amount, 2), CURRENCY_CODE)
}

/// Render hours with one decimal, e.g. `"3.5"`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", round_half_up(hours, 1))
}
