//! Invoice renderer – takes an [`InvoiceRecord`] and produces the complete
//! HTML document.
//!
//! Rendering is pure: the same record and config always yield the same
//! bytes.

use rust_decimal::Decimal;

use crate::error::Result;
use crate::format::{
    escape_html, format_address, format_date, format_hours, format_money,
    DEFAULT_CURRENCY_SYMBOL,
};
use crate::record::{InvoiceRecord, LineItem};
use crate::templates::stylesheet;

/// Printed page size written into the stylesheet's `@page` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter, 8.5 × 11 in (default).
    #[default]
    Letter,
    /// ISO A4, 210 × 297 mm.
    A4,
}

impl PageSize {
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::Letter => "Letter",
            PageSize::A4 => "A4",
        }
    }
}

/// Knobs of the one fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix for every monetary amount (default: "$").
    pub currency_symbol: String,
    /// Page size for print/PDF (default: Letter).
    pub page_size: PageSize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            page_size: PageSize::Letter,
        }
    }
}

/// Render a record into a standalone HTML document.
///
/// Fails when the invoice date is not `YYYY-MM-DD` or the line item
/// amounts cannot be summed.
pub fn render_invoice(record: &InvoiceRecord, config: &RenderConfig) -> Result<String> {
    let invoice_date = format_date(&record.invoice_date)?;
    let money = |amount| escape_html(&format_money(amount, &config.currency_symbol));

    let business_name = escape_html(&record.business_name);
    let subtotal = money(record.subtotal()?);
    let total_due = money(record.total_due()?);

    let rows: Vec<String> = record
        .line_items
        .iter()
        .map(|item| line_item_row(item, &money))
        .collect();

    log::debug!(
        "Rendered invoice {} with {} line item(s)",
        record.invoice_number,
        rows.len()
    );

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Invoice {invoice_number} - {business_name}</title>
<style>{style}</style>
</head>
<body>
  <div class="wrap">
    <div class="header">
      <div class="bill-to">
        <h3>Bill To</h3>
        <div class="address">
          {client_address}
        </div>
      </div>

      <div class="branding">
        {branding}
        <div class="address">
          {business_address}
        </div>
      </div>

      <div class="invoice-details">
        <h2>INVOICE</h2>
        <p><strong>Invoice #:</strong> {invoice_number}</p>
        <p><strong>Date:</strong> {invoice_date}</p>
      </div>
    </div>

    <table class="services-table">
      <thead>
        <tr>
          <th style="width:18%">Date</th>
          <th style="width:57%">Service Description</th>
          <th style="width:8%">Hours</th>
          <th style="width:8%">Rate</th>
          <th style="width:9%" class="num">Amount</th>
        </tr>
      </thead>
      <tbody>{rows}
      </tbody>
    </table>

    <section class="totals">
      <div></div>
      <div class="box">
        <div class="row"><span>Subtotal</span><span>{subtotal}</span></div>
        <div class="row total"><span>Total Due</span><span>{total_due}</span></div>
      </div>
    </section>

    <footer class="footer">
      {footer}
    </footer>
  </div>
</body>
</html>
"##,
        invoice_number = escape_html(&record.invoice_number),
        style = stylesheet(config.page_size),
        client_address = format_address(&record.client_address),
        branding = branding(record),
        business_address = format_address(&record.business_address),
        rows = rows.concat(),
        footer = escape_html(&record.footer_text),
    ))
}

/// Logo image when a reference is present, otherwise the business name.
fn branding(record: &InvoiceRecord) -> String {
    let name = escape_html(&record.business_name);
    match record.logo() {
        Some(src) => format!(
            r#"<img src="{}" alt="{name} Logo" />"#,
            escape_html(src)
        ),
        None => format!(r#"<h2 class="brand-name">{name}</h2>"#),
    }
}

fn line_item_row(item: &LineItem, money: &impl Fn(Decimal) -> String) -> String {
    format!(
        r#"
        <tr>
          <td><div class="service-date">{date}</div></td>
          <td>{description}</td>
          <td class="num">{hours}</td>
          <td class="num">{rate}</td>
          <td class="num">{amount}</td>
        </tr>"#,
        date = escape_html(&item.date),
        description = escape_html(&item.description),
        hours = format_hours(item.hours),
        rate = money(item.rate),
        amount = money(item.amount),
    )
}
