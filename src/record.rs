//! Invoice record – the in-memory form of one invoice data file.
//!
//! Field names follow the camelCase JSON the records are written in.
//! Monetary and hour values accept either JSON numbers or numeric strings
//! and are held as [`Decimal`] so sums never drift.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::InvoiceError;

/// One invoice, as loaded from disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub invoice_number: String,
    /// ISO `YYYY-MM-DD`; validated when rendered.
    pub invoice_date: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub business_name: String,
    pub business_address: String,
    pub client_address: String,
    pub line_items: Vec<LineItem>,
    pub footer_text: String,
}

/// One billable entry. `amount` is taken as given, never recomputed
/// from `hours * rate`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineItem {
    pub date: String,
    pub description: String,
    #[serde(deserialize_with = "decimal")]
    pub hours: Decimal,
    #[serde(deserialize_with = "decimal")]
    pub rate: Decimal,
    #[serde(deserialize_with = "decimal")]
    pub amount: Decimal,
}

impl InvoiceRecord {
    /// Logo reference, if one is set. Empty strings count as absent.
    pub fn logo(&self) -> Option<&str> {
        self.logo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Sum of every line item amount. Fails when the sum leaves the
    /// range [`Decimal`] can hold.
    pub fn subtotal(&self) -> crate::error::Result<Decimal> {
        self.line_items
            .iter()
            .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.amount))
            .ok_or_else(|| {
                InvoiceError::Parse(format!(
                    "line item amounts of invoice {} overflow the supported range",
                    self.invoice_number
                ))
            })
    }

    /// There is no tax or discount model, so this equals the subtotal.
    pub fn total_due(&self) -> crate::error::Result<Decimal> {
        self.subtotal()
    }
}

/// Parse a decimal written either plainly (`"1234.50"`) or in scientific
/// notation (`"1.2e3"`).
pub fn parse_decimal(text: &str) -> Result<Decimal, String> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| format!("'{text}' is not a decimal number"))
}

fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    struct DecimalVisitor;

    impl<'de> Visitor<'de> for DecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            // Display gives the shortest round-trip form, so 33.33 stays 33.33.
            parse_decimal(&v.to_string()).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            parse_decimal(v).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(DecimalVisitor)
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_amounts(amounts: &str) -> InvoiceRecord {
        let json = format!(
            r#"{{
                "invoiceNumber": "A-1",
                "invoiceDate": "2024-03-05",
                "businessName": "Acme",
                "businessAddress": "1 Road",
                "clientAddress": "2 Street",
                "footerText": "Thanks",
                "lineItems": [{amounts}]
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    fn item(amount: &str) -> String {
        format!(
            r#"{{"date": "2024-03-01", "description": "Work", "hours": 1, "rate": "{amount}", "amount": {amount}}}"#
        )
    }

    #[test]
    fn subtotal_uses_decimal_arithmetic() {
        let items = [item("33.33"), item("33.33"), item("33.33")].join(",");
        let record = record_with_amounts(&items);
        assert_eq!(record.subtotal().unwrap(), Decimal::new(9999, 2));
        assert_eq!(record.total_due().unwrap(), record.subtotal().unwrap());
    }

    #[test]
    fn subtotal_of_no_items_is_zero() {
        let record = record_with_amounts("");
        assert_eq!(record.subtotal().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn subtotal_overflow_is_an_error() {
        let big = r#"{"date": "d", "description": "x", "hours": 1, "rate": 1, "amount": "50000000000000000000000000000"}"#;
        let record = record_with_amounts(&[big, big].join(","));
        match record.subtotal() {
            Err(InvoiceError::Parse(msg)) => assert!(msg.contains("overflow"), "{msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(record.total_due().is_err());
    }

    #[test]
    fn amounts_accept_strings_and_numbers() {
        let json = r#"[
            {"date": "d", "description": "x", "hours": "7.5", "rate": 150, "amount": "1125.00"},
            {"date": "d", "description": "y", "hours": 2, "rate": "99.99", "amount": 199.98}
        ]"#;
        let items: Vec<LineItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].hours, Decimal::new(75, 1));
        assert_eq!(items[0].rate, Decimal::from(150));
        assert_eq!(items[1].amount, Decimal::new(19998, 2));
    }

    #[test]
    fn amount_is_not_recomputed() {
        let json = r#"{"date": "d", "description": "x", "hours": 2, "rate": 10, "amount": 5}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.amount, Decimal::from(5));
    }

    #[test]
    fn malformed_amount_is_rejected() {
        let json = r#"{"date": "d", "description": "x", "hours": 1, "rate": 1, "amount": "twelve"}"#;
        let err = serde_json::from_str::<LineItem>(json).unwrap_err();
        assert!(err.to_string().contains("'twelve' is not a decimal number"));
    }

    #[test]
    fn empty_logo_counts_as_absent() {
        let mut record = record_with_amounts("");
        assert_eq!(record.logo(), None);
        record.logo_url = Some("   ".into());
        assert_eq!(record.logo(), None);
        record.logo_url = Some("https://example.com/logo.png".into());
        assert_eq!(record.logo(), Some("https://example.com/logo.png"));
    }

    #[test]
    fn numeric_invoice_number_is_accepted() {
        let json = r#"{
            "invoiceNumber": 1042,
            "invoiceDate": "2024-03-05",
            "businessName": "Acme",
            "businessAddress": "",
            "clientAddress": "",
            "footerText": "",
            "lineItems": []
        }"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.invoice_number, "1042");
    }

    #[test]
    fn scientific_notation_parses() {
        assert_eq!(parse_decimal("1.5e3").unwrap(), Decimal::from(1500));
        assert_eq!(parse_decimal(" 12.30 ").unwrap(), Decimal::new(1230, 2));
    }
}
