//! Display helpers for yen amounts, percentages and periods.
//!
//! These render figures the way Japanese forms show them (`238,484円`,
//! `約58%`, `6ヶ月`) and parse comma-formatted salary input back to yen.

/// Formats an integer with comma thousands separators.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::format::format_number;
///
/// assert_eq!(format_number(238484), "238,484");
/// assert_eq!(format_number(-1234), "-1,234");
/// assert_eq!(format_number(999), "999");
/// ```
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

/// Formats a yen amount, e.g. `238,484円`.
pub fn format_yen(amount: i64) -> String {
    format!("{}円", format_number(amount))
}

/// Formats an approximate percentage, e.g. `約58%`.
pub fn format_percent(percent: i64) -> String {
    format!("約{}%", percent)
}

/// Formats a period in months, e.g. `6ヶ月`.
pub fn format_period_months(months: u32) -> String {
    format!("{}ヶ月", months)
}

/// Formats a period in days, e.g. `177日間`.
pub fn format_period_days(days: i64) -> String {
    format!("{}日間", days)
}

/// Parses a comma-formatted number typed into a form.
///
/// Commas and whitespace are removed, then the leading integer is read
/// (an optional sign followed by digits). Trailing text such as `円` is
/// ignored. Input with no leading digits yields `0`; values outside the
/// `i64` range saturate.
///
/// # Examples
///
/// ```
/// use sickness_benefit_engine::format::parse_formatted_number;
///
/// assert_eq!(parse_formatted_number("300,000"), 300000);
/// assert_eq!(parse_formatted_number(" 1, 500 ,000円"), 1500000);
/// assert_eq!(parse_formatted_number("abc"), 0);
/// ```
pub fn parse_formatted_number(text: &str) -> i64 {
    let mut chars = text
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        let digit = i64::from(digit);
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(100000), "100,000");
        assert_eq!(format_number(16586856), "16,586,856");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-355170), "-355,170");
        assert_eq!(format_number(-12), "-12");
    }

    #[test]
    fn test_format_number_extremes() {
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(format_number(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(format_yen(138464), "138,464円");
        assert_eq!(format_percent(58), "約58%");
        assert_eq!(format_percent(-21), "約-21%");
        assert_eq!(format_period_months(18), "18ヶ月");
        assert_eq!(format_period_days(177), "177日間");
    }

    #[test]
    fn test_parse_formatted_number() {
        assert_eq!(parse_formatted_number("238,484"), 238484);
        assert_eq!(parse_formatted_number("-1,234"), -1234);
        assert_eq!(parse_formatted_number("+42"), 42);
        assert_eq!(parse_formatted_number("12.9"), 12);
        assert_eq!(parse_formatted_number(""), 0);
        assert_eq!(parse_formatted_number("円300"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_formatted_number("99999999999999999999"), i64::MAX);
        assert_eq!(parse_formatted_number("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_format_then_parse_recovers_value() {
        for value in [0, 58000, 300000, -355170, 16586856] {
            assert_eq!(parse_formatted_number(&format_number(value)), value);
        }
    }
}
