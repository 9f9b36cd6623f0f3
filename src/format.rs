//! Value formatting for the invoice template: money, hours, dates,
//! addresses, and HTML escaping.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{InvoiceError, Result};

/// Symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Input date layout.
const ISO_DATE: &str = "%Y-%m-%d";
/// Output date layout, e.g. "March 05, 2024".
const LONG_DATE: &str = "%B %d, %Y";

/// Format an amount as dollars: `1234.5` → `$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    format_money(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Format an amount with two decimals, comma thousands separators, and the
/// given symbol. Negative amounts put the sign before the symbol.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let cents = to_two_places(amount);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    let digits = cents.abs().to_string();
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{symbol}{}.{frac}",
        if negative { "-" } else { "" },
        group_thousands(whole)
    )
}

/// Format hours with two decimals and no separators: `7.5` → `7.50`.
pub fn format_hours(hours: Decimal) -> String {
    to_two_places(hours).to_string()
}

/// Parse an ISO `YYYY-MM-DD` date and render it long-hand:
/// `2024-03-05` → `March 05, 2024`.
pub fn format_date(date: &str) -> Result<String> {
    NaiveDate::parse_from_str(date, ISO_DATE)
        .map(|d| d.format(LONG_DATE).to_string())
        .map_err(|e| {
            InvoiceError::Format(format!("invalid date '{date}' (expected YYYY-MM-DD): {e}"))
        })
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a multi-line address and turn its line breaks into `<br>`.
pub fn format_address(address: &str) -> String {
    escape_html(&address.replace("\r\n", "\n")).replace('\n', "<br>")
}

fn to_two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn currency_pads_and_groups() {
        assert_eq!(format_currency(dec("1234.5")), "$1,234.50");
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(dec("999")), "$999.00");
        assert_eq!(format_currency(dec("1000")), "$1,000.00");
        assert_eq!(format_currency(dec("1234567.891")), "$1,234,567.89");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("0.005")), "$0.01");
        assert_eq!(format_currency(dec("2.675")), "$2.68");
        assert_eq!(format_currency(dec("-0.001")), "$0.00");
    }

    #[test]
    fn currency_negative_sign_precedes_symbol() {
        assert_eq!(format_currency(dec("-1500")), "-$1,500.00");
    }

    #[test]
    fn money_uses_configured_symbol() {
        assert_eq!(format_money(dec("12.3"), "€"), "€12.30");
        assert_eq!(format_money(dec("12.3"), "CHF "), "CHF 12.30");
    }

    #[test]
    fn hours_have_two_places() {
        assert_eq!(format_hours(dec("7.5")), "7.50");
        assert_eq!(format_hours(dec("1234")), "1234.00");
    }

    #[test]
    fn date_renders_long_form() {
        assert_eq!(format_date("2024-03-05").unwrap(), "March 05, 2024");
        assert_eq!(format_date("1999-12-31").unwrap(), "December 31, 1999");
    }

    #[test]
    fn invalid_date_is_a_format_error() {
        for bad in ["2024-13-40", "05/03/2024", "", "2024-02-30"] {
            match format_date(bad) {
                Err(InvoiceError::Format(msg)) => assert!(msg.contains(bad)),
                other => panic!("expected format error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn address_lines_become_breaks() {
        assert_eq!(
            format_address("1 Main St\nSpringfield, IL"),
            "1 Main St<br>Springfield, IL"
        );
        assert_eq!(format_address("a\r\nb"), "a<br>b");
    }

    #[test]
    fn address_is_escaped_before_breaking() {
        assert_eq!(format_address("R&D <Lab>\nUnit 2"), "R&amp;D &lt;Lab&gt;<br>Unit 2");
    }

    #[test]
    fn escape_covers_attribute_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }
}
