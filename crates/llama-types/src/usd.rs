use num_format::{Locale, ToFormattedString};

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Largest first.
const TIERS: [(f64, &str); 3] = [(BILLION, "B"), (MILLION, "M"), (THOUSAND, "K")];

/// Formats a dollar amount with a K/M/B suffix, e.g. `1_234_567.0` -> `"$1.23M"`.
///
/// Thresholds apply to the absolute value and are inclusive. The sign is kept
/// after the dollar sign (`"$-1.50K"`). Non-finite values print bare (`"$NaN"`).
pub fn format_usd(n: f64) -> String {
    if !n.is_finite() {
        return format!("${n}");
    }

    let magnitude = n.abs();
    let mut tier = TIERS
        .iter()
        .position(|(threshold, _)| magnitude >= *threshold)
        .unwrap_or(TIERS.len());
    // rounding to cents can carry into the next tier (999_999.999 -> $1.00M)
    if tier > 0 && cents(magnitude / divisor(tier)) >= 100_000 {
        tier -= 1;
    }

    let suffix = TIERS.get(tier).map_or("", |(_, suffix)| suffix);
    format!("${}{suffix}", two_decimals(n / divisor(tier)))
}

fn divisor(tier: usize) -> f64 {
    TIERS.get(tier).map_or(1.0, |(threshold, _)| *threshold)
}

fn cents(magnitude: f64) -> u64 {
    (magnitude * 100.0).round() as u64
}

/// Two decimals with comma separated thousands.
fn two_decimals(value: f64) -> String {
    let cents = cents(value.abs());
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{}.{:02}",
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}
