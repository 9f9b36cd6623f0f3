//! invoice-pdf – convert a generated invoice HTML file to PDF.
//!
//! Usage:
//!   invoice-pdf <invoice.html> [output.pdf] [--engine <name|path>]
//!
//! If `output.pdf` is omitted the PDF is written next to the input with the
//! same stem (e.g. `acme.html` → `acme.pdf`).

use std::path::PathBuf;
use std::process;

use clap::Parser;

use invoice_forge::cli::{init_logging, parse_args, ENGINE_INSTALL_HINT};
use invoice_forge::engine::{self, EnginePreference};
use invoice_forge::error::InvoiceError;
use invoice_forge::pipeline::convert_html;

#[derive(Debug, Parser)]
#[command(name = "invoice-pdf", version, about = "Convert an invoice HTML file to PDF")]
struct Args {
    /// HTML file to convert
    input: PathBuf,

    /// Output path (default: same stem as input with .pdf)
    output: Option<PathBuf>,

    /// PDF engine: weasyprint, wkhtmltopdf, or a program path
    /// (default: first one found on PATH)
    #[arg(long, short = 'e', value_name = "ENGINE")]
    engine: Option<String>,
}

fn main() {
    init_logging();
    let args: Args = parse_args();

    if !args.input.exists() {
        eprintln!("Error: {}", InvoiceError::not_found(&args.input));
        process::exit(1);
    }

    let preference = args
        .engine
        .as_deref()
        .map(EnginePreference::parse)
        .unwrap_or_default();

    eprintln!("Generating PDF from '{}'...", args.input.display());
    let result = engine::detect(&preference)
        .and_then(|engine| convert_html(&args.input, args.output.as_deref(), &engine));

    match result {
        Ok(pdf) => eprintln!("Wrote '{}'", pdf.display()),
        Err(e @ InvoiceError::EngineUnavailable(_)) => {
            eprintln!("Error: {e}; {ENGINE_INSTALL_HINT}");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
