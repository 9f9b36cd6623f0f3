//! # invoice-forge – JSON invoice records → HTML → PDF
//!
//! The pipeline stages are:
//!
//! 1. **Load** – JSON file → [`record::InvoiceRecord`] ([`loader`])
//! 2. **Render** – record → standalone HTML document ([`render`], using
//!    [`format`] for money/dates and [`templates`] for the fixed layout)
//! 3. **Convert** – HTML → PDF via an external engine ([`engine`]),
//!    skipped when none is installed
//!
//! [`pipeline`] wires the stages together for the two binaries.

pub mod cli;
pub mod engine;
pub mod error;
pub mod format;
pub mod loader;
pub mod logo;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod templates;

// Re-exports for convenience
pub use error::{InvoiceError, Result};
pub use pipeline::{convert_html, generate_invoice, GeneratedFiles, PipelineConfig};
pub use record::{InvoiceRecord, LineItem};
pub use render::{render_invoice, RenderConfig};
