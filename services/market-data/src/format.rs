//! Display formatting for market figures (USD, en-US conventions)

/// Compact notation suffixes, smallest first.
const COMPACT_UNITS: [(f64, &str); 4] = [(1e3, "K"), (1e6, "M"), (1e9, "B"), (1e12, "T")];

/// Format `value` as US dollars.
///
/// Standard notation: `$68,000.00`. Compact notation: `$1.35T`, `$68K`,
/// `$0.62`, with at most two decimals and trailing zeros trimmed.
/// Non-finite input formats as zero.
pub fn format_currency(value: f64, compact: bool) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if !compact {
        return format!("{sign}${}", group_thousands(&format!("{abs:.2}")));
    }

    // Unit chosen on the rounded value so 999.999 lands in K.
    let rounded = round2(abs);
    match COMPACT_UNITS.iter().rposition(|(div, _)| rounded >= *div) {
        Some(mut idx) => {
            let mut scaled = round2(abs / COMPACT_UNITS[idx].0);
            if scaled >= 1000.0 && idx + 1 < COMPACT_UNITS.len() {
                idx += 1;
                scaled = round2(abs / COMPACT_UNITS[idx].0);
            }
            format!("{sign}${}{}", trim_decimals(scaled), COMPACT_UNITS[idx].1)
        }
        None => format!("{sign}${}", trim_decimals(rounded)),
    }
}

/// Format `value` as a percentage with two decimals.
///
/// Positive values get a leading `+`; zero and negative values carry no
/// extra sign. Non-finite input formats as zero.
pub fn format_percent(value: f64) -> String {
    // Normalizes -0.0 as well as NaN/inf.
    let value = if value.is_finite() && value != 0.0 { value } else { 0.0 };
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn trim_decimals(v: f64) -> String {
    let fixed = format!("{v:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Insert `,` separators into the integer part of a plain decimal string.
fn group_thousands(fixed: &str) -> String {
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_currency() {
        assert_eq!(format_currency(68_000.0, false), "$68,000.00");
        assert_eq!(format_currency(0.62, false), "$0.62");
        assert_eq!(format_currency(1_234_567.891, false), "$1,234,567.89");
        assert_eq!(format_currency(-1_234.5, false), "-$1,234.50");
        assert_eq!(format_currency(999.0, false), "$999.00");
    }

    #[test]
    fn test_compact_currency() {
        assert_eq!(format_currency(1.35e12, true), "$1.35T");
        assert_eq!(format_currency(68_000.0, true), "$68K");
        assert_eq!(format_currency(4.2e11, true), "$420B");
        assert_eq!(format_currency(3_500.0, true), "$3.5K");
        assert_eq!(format_currency(0.62, true), "$0.62");
        assert_eq!(format_currency(5.0, true), "$5");
        assert_eq!(format_currency(-2.5e6, true), "-$2.5M");
    }

    #[test]
    fn test_compact_rolls_over_to_next_unit() {
        assert_eq!(format_currency(999_999.0, true), "$1M");
        assert_eq!(format_currency(999.999, true), "$1K");
        assert_eq!(format_currency(-999.996, true), "-$1K");
        assert_eq!(format_currency(999.994, true), "$999.99");
    }

    #[test]
    fn test_non_finite_currency() {
        assert_eq!(format_currency(f64::NAN, false), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, true), "$0");
    }

    #[test]
    fn test_percent_signs() {
        assert_eq!(format_percent(1.234), "+1.23%");
        assert_eq!(format_percent(-7.444), "-7.44%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(-0.0), "0.00%");
        assert_eq!(format_percent(f64::NAN), "0.00%");
    }
}
