//! invoice-forge – turn a JSON invoice record into HTML, and into PDF when
//! an HTML → PDF engine is installed.
//!
//! Usage:
//!   invoice-forge <invoice.json> [--no-pdf] [--engine <name|path>]
//!                 [--currency <symbol>] [--page-size letter|a4] [--embed-logo]
//!
//! Outputs are written next to the input with the same stem
//! (e.g. `acme.json` → `acme.html`, `acme.pdf`).

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use invoice_forge::cli::{init_logging, parse_args, ENGINE_INSTALL_HINT};
use invoice_forge::engine::EnginePreference;
use invoice_forge::pipeline::{generate_invoice, PdfMode, PipelineConfig};
use invoice_forge::render::{PageSize, RenderConfig};
use invoice_forge::templates::sample_invoice_json;

#[derive(Debug, Parser)]
#[command(name = "invoice-forge", version, about = "Generate an HTML/PDF invoice from a JSON record")]
struct Args {
    /// Invoice data file (JSON)
    #[arg(required_unless_present = "print_sample")]
    input: Option<PathBuf>,

    /// Write the HTML only, skip PDF conversion
    #[arg(long)]
    no_pdf: bool,

    /// PDF engine: weasyprint, wkhtmltopdf, or a program path
    /// (default: first one found on PATH)
    #[arg(long, short = 'e', value_name = "ENGINE")]
    engine: Option<String>,

    /// Currency symbol placed before amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Printed page size
    #[arg(long, value_enum, default_value_t = PageArg::Letter)]
    page_size: PageArg,

    /// Inline a local logo file into the HTML as a data URI
    #[arg(long)]
    embed_logo: bool,

    /// Print a sample invoice record to stdout and exit
    #[arg(long, conflicts_with = "input")]
    print_sample: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
    Letter,
    A4,
}

impl From<PageArg> for PageSize {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Letter => PageSize::Letter,
            PageArg::A4 => PageSize::A4,
        }
    }
}

fn main() {
    init_logging();
    let args: Args = parse_args();

    if args.print_sample {
        print!("{}", sample_invoice_json());
        return;
    }

    let input = match args.input {
        Some(p) => p,
        None => {
            eprintln!("Error: no input file specified.");
            process::exit(1);
        }
    };

    let config = PipelineConfig {
        render: RenderConfig {
            currency_symbol: args.currency,
            page_size: args.page_size.into(),
        },
        pdf: if args.no_pdf {
            PdfMode::Disabled
        } else {
            PdfMode::Auto(
                args.engine
                    .as_deref()
                    .map(EnginePreference::parse)
                    .unwrap_or_default(),
            )
        },
        embed_logo: args.embed_logo,
    };

    eprintln!("Loading invoice data from '{}'...", input.display());
    match generate_invoice(&input, &config) {
        Ok(files) => {
            eprintln!("Wrote '{}'", files.html.display());
            if let Some(pdf) = &files.pdf {
                eprintln!("Wrote '{}'", pdf.display());
            }
            if let Some(note) = &files.pdf_note {
                eprintln!("Note: no PDF generated ({note}); {ENGINE_INSTALL_HINT}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
