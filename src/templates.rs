//! The fixed invoice layout: stylesheet and a sample record.
//!
//! The layout is a three-column header (bill-to, branding, invoice
//! details), a services table, a totals box and a footer, tuned to fit a
//! typical invoice on one printed page.

use crate::render::PageSize;

/// Stylesheet for the invoice page. Only the `@page` size varies.
pub fn stylesheet(page: PageSize) -> String {
    format!(
        r##"
  @page {{ size: {page_size}; margin: 0.50in; }}
  * {{ box-sizing: border-box; }}
  body {{
    font: 12.5px/1.35 system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif;
    color: #1f2330;
    background: #fff;
    -webkit-print-color-adjust: exact;
    print-color-adjust: exact;
    margin: 0;
  }}
  .wrap {{ max-width: 8.5in; margin: 0 auto; }}

  .header {{
    display: grid;
    grid-template-columns: 200px 1fr 200px;
    gap: 12px;
    align-items: center;
    border-bottom: 1px solid #e5e7eb;
    padding-bottom: 6px;
    margin-bottom: 8px;
  }}
  .header img {{ display: block; width: 150px; height: auto; margin: 0 auto; }}
  .bill-to {{ text-align: left; }}
  .bill-to h3 {{
    font-size: 12px; color: #6b7280; text-transform: uppercase;
    letter-spacing: .08em; margin: 0 0 8px;
  }}
  .address {{ font-size: 13px; line-height: 1.4; color: #292663; }}
  .branding {{ text-align: center; }}
  .branding .address {{ font-size: 12px; margin-top: 8px; }}
  .brand-name {{ font-size: 28px; margin: 0; color: #292663; }}
  .invoice-details {{ text-align: right; }}
  .invoice-details h2 {{ font-size: 26px; margin: 0; color: #EC008C; }}
  .invoice-details p {{ font-size: 13px; margin: 5px 0; }}

  .services-table {{
    width: 100%;
    margin: 20px 0 10px;
    border-collapse: separate;
    border-spacing: 0;
    overflow: hidden;
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(41,38,99,0.1);
    page-break-after: avoid;
    break-after: avoid;
  }}
  .services-table thead {{
    background: linear-gradient(135deg, #00AEEF, #EC008C);
    color: white;
  }}
  .services-table th {{
    padding: 8px 10px;
    text-align: left;
    font-weight: 600;
    font-size: 11.5px;
    text-transform: uppercase;
    letter-spacing: 0.5px;
  }}
  .services-table th:last-child {{ text-align: right; }}
  .services-table tbody tr {{ border-bottom: 1px solid rgba(41,38,99,0.1); }}
  .services-table tbody tr:nth-child(even) {{ background-color: rgba(0,174,239,0.03); }}
  .services-table td {{ padding: 7px 10px; font-size: 12.5px; color: #292663; }}
  .services-table td:last-child {{ text-align: right; font-weight: 500; }}
  .service-date {{ font-weight: 600; color: #00AEEF; }}
  .num {{ text-align: right; white-space: nowrap; }}
  table, thead, tbody, tr, td, th {{ page-break-inside: avoid; break-inside: avoid; }}

  .totals {{
    display: grid;
    grid-template-columns: 1fr 240px;
    gap: 12px;
    margin-top: 6px;
    align-items: start;
  }}
  .totals, .totals * {{ page-break-inside: avoid; break-inside: avoid; }}
  .totals .box {{
    background: linear-gradient(135deg, rgba(251,176,76,0.1) 0%, rgba(236,0,140,0.1) 100%);
    border-radius: 10px;
    padding: 10px 12px;
  }}
  .row {{
    display: flex; justify-content: space-between; align-items: center;
    font-size: 12.5px; padding: 3px 0;
  }}
  .row.total {{
    border-top: 2px solid #EC008C;
    margin-top: 8px; padding-top: 6px;
    font-weight: 700; font-size: 14px;
    color: #292663;
  }}

  .footer {{
    margin-top: 12px;
    padding-top: 8px;
    border-top: 1px solid #e5e7eb;
    text-align: center;
    font-size: 10.5px;
    color: #6b7280;
  }}
"##,
        page_size = page.css_name()
    )
}

/// A complete, valid invoice record in the on-disk JSON shape.
pub fn sample_invoice_json() -> &'static str {
    r##"{
  "invoiceNumber": "2024-0042",
  "invoiceDate": "2024-03-05",
  "logoUrl": null,
  "businessName": "Northwind Studio",
  "businessAddress": "12 Harbour Lane\nPortland, OR 97205",
  "clientAddress": "Client Inc\n456 Client Ave\nLos Angeles, CA 90001",
  "lineItems": [
    {
      "date": "2024-02-26",
      "description": "Discovery workshop",
      "hours": 3,
      "rate": 150,
      "amount": 450
    },
    {
      "date": "2024-02-28",
      "description": "Design system build-out",
      "hours": "12.5",
      "rate": "150.00",
      "amount": "1875.00"
    },
    {
      "date": "2024-03-01",
      "description": "Hosting (annual)",
      "hours": 1,
      "rate": 500,
      "amount": 500
    }
  ],
  "footerText": "Payment due within 30 days. Thank you for your business."
}
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_sets_page_size() {
        assert!(stylesheet(PageSize::Letter).contains("size: Letter;"));
        assert!(stylesheet(PageSize::A4).contains("size: A4;"));
    }

    #[test]
    fn sample_parses_as_a_record() {
        let record = crate::loader::parse_invoice(sample_invoice_json()).unwrap();
        assert_eq!(record.line_items.len(), 3);
        assert_eq!(record.logo(), None);
        assert_eq!(record.subtotal().unwrap(), rust_decimal::Decimal::from(2825));
    }
}
