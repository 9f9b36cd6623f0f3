//! Data loader – reads one invoice record from a JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{InvoiceError, Result};
use crate::record::InvoiceRecord;

/// Load and parse the record at `path`.
pub fn load_invoice(path: &Path) -> Result<InvoiceRecord> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InvoiceError::not_found(path),
        _ => InvoiceError::io(path, e),
    })?;

    let record = parse_invoice(&text)?;
    log::debug!(
        "Loaded invoice {} ({} line item(s)) from '{}'",
        record.invoice_number,
        record.line_items.len(),
        path.display()
    );
    Ok(record)
}

/// Parse a record from JSON text.
pub fn parse_invoice(json: &str) -> Result<InvoiceRecord> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::sample_invoice_json;

    #[test]
    fn loads_sample_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.json");
        fs::write(&path, sample_invoice_json()).unwrap();

        let record = load_invoice(&path).unwrap();
        assert_eq!(record.invoice_number, "2024-0042");
        assert_eq!(record.business_name, "Northwind Studio");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_invoice(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, InvoiceError::NotFound { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_invoice("{ \"invoiceNumber\": ").unwrap_err();
        assert!(matches!(err, InvoiceError::Parse(_)));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let err = parse_invoice(r#"{"invoiceNumber": "1"}"#).unwrap_err();
        match err {
            InvoiceError::Parse(msg) => assert!(msg.contains("missing field")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = sample_invoice_json().replacen('{', r#"{"currency": "USD","#, 1);
        assert!(parse_invoice(&json).is_ok());
    }
}
