//! Display formatting for results and chart labels

/// Two decimal places with trailing zeros and a dangling point removed
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Decimal rate shown as a percentage, e.g. `0.0627 -> "6.27%"`
pub fn format_percent(rate: f64) -> String {
    format!("{}%", format_amount(rate * 100.0))
}

/// Short axis label: `950`, `1.5k`, `2.3M`, `1.1B`
pub fn format_compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else {
        format!("{}", value.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_strips_zeros() {
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(107_689.0625), "107689.06");
        assert_eq!(format_amount(0.004), "0");
        assert_eq!(format_amount(-0.001), "0");
        assert_eq!(format_amount(-42.10), "-42.1");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0627), "6.27%");
        assert_eq!(format_percent(0.2), "20%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(950.4), "950");
        assert_eq!(format_compact(1_500.0), "1.5k");
        assert_eq!(format_compact(-2_300_000.0), "-2.3M");
        assert_eq!(format_compact(1.1e9), "1.1B");
    }
}
