//! Pipeline – ties together loading, rendering, and the optional PDF
//! conversion into single function calls.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::engine::{self, EnginePreference, RenderEngine};
use crate::error::{InvoiceError, Result};
use crate::loader::load_invoice;
use crate::logo::embed_logo;
use crate::render::{render_invoice, RenderConfig};

/// Whether and how to produce the PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfMode {
    /// Convert when an engine matching the preference is installed.
    Auto(EnginePreference),
    /// HTML only.
    Disabled,
}

impl Default for PdfMode {
    fn default() -> Self {
        PdfMode::Auto(EnginePreference::Any)
    }
}

/// Configuration for one invoice generation run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub render: RenderConfig,
    pub pdf: PdfMode,
    /// Inline a local logo file as a `data:` URI (default: false).
    pub embed_logo: bool,
}

/// What a run wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub html: PathBuf,
    pub pdf: Option<PathBuf>,
    /// Why the PDF was skipped, when an engine was wanted but missing.
    pub pdf_note: Option<String>,
}

/// `invoice.json` → `invoice.html`, in the same directory.
pub fn html_output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// `invoice.html` → `invoice.pdf`, in the same directory.
pub fn pdf_output_path(html: &Path) -> PathBuf {
    html.with_extension("pdf")
}

/// Full pipeline: JSON record → HTML file → PDF file when an engine is
/// installed.
///
/// A missing engine is not an error: the HTML is still written and the
/// reason is reported in [`GeneratedFiles::pdf_note`].
pub fn generate_invoice(input: &Path, config: &PipelineConfig) -> Result<GeneratedFiles> {
    let html = write_invoice_html(input, config)?;

    let preference = match &config.pdf {
        PdfMode::Disabled => return Ok(html_only(html, None)),
        PdfMode::Auto(preference) => preference,
    };

    match engine::detect(preference) {
        Ok(engine) => {
            let pdf = convert_html(&html, None, &engine)?;
            Ok(GeneratedFiles {
                html,
                pdf: Some(pdf),
                pdf_note: None,
            })
        }
        Err(e) if !e.is_fatal() => {
            log::warn!("Skipping PDF output: {e}");
            Ok(html_only(html, Some(e.to_string())))
        }
        Err(e) => Err(e),
    }
}

/// Same as [`generate_invoice`] with the engine supplied by the caller.
/// `None` behaves like an engine that is not installed.
pub fn generate_invoice_with(
    input: &Path,
    config: &PipelineConfig,
    engine: Option<&dyn RenderEngine>,
) -> Result<GeneratedFiles> {
    let html = write_invoice_html(input, config)?;

    match (&config.pdf, engine) {
        (PdfMode::Disabled, _) => Ok(html_only(html, None)),
        (PdfMode::Auto(_), None) => {
            let note = InvoiceError::EngineUnavailable("no engine supplied".into()).to_string();
            log::warn!("Skipping PDF output: {note}");
            Ok(html_only(html, Some(note)))
        }
        (PdfMode::Auto(_), Some(engine)) => {
            let pdf = convert_html(&html, None, engine)?;
            Ok(GeneratedFiles {
                html,
                pdf: Some(pdf),
                pdf_note: None,
            })
        }
    }
}

/// Load, render, and write the HTML next to the input. Returns its path.
///
/// An input that already has the `.html` extension is refused, since its
/// output path would be the input itself.
pub fn write_invoice_html(input: &Path, config: &PipelineConfig) -> Result<PathBuf> {
    let output = html_output_path(input);
    if output.as_path() == input {
        return Err(InvoiceError::io(
            input,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "rendered HTML would overwrite the input file",
            ),
        ));
    }

    let mut record = load_invoice(input)?;

    if config.embed_logo {
        if let Some(reference) = record.logo().map(str::to_owned) {
            let base_dir = input.parent().unwrap_or_else(|| Path::new(""));
            record.logo_url = Some(embed_logo(&reference, base_dir)?);
        }
    }

    let html = render_invoice(&record, &config.render)?;
    fs::write(&output, html).map_err(|e| InvoiceError::io(&output, e))?;
    log::debug!("Wrote '{}'", output.display());
    Ok(output)
}

/// Convert an HTML file to PDF with `engine`.
///
/// `output` defaults to the HTML path with a `.pdf` extension. Missing
/// parent directories of the output are created.
pub fn convert_html(
    html: &Path,
    output: Option<&Path>,
    engine: &dyn RenderEngine,
) -> Result<PathBuf> {
    if !html.exists() {
        return Err(InvoiceError::not_found(html));
    }

    let output = output.map_or_else(|| pdf_output_path(html), Path::to_path_buf);
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| InvoiceError::io(parent, e))?;
        }
    }

    log::debug!("Converting '{}' with {}", html.display(), engine.name());
    engine.render(html, &output)?;
    Ok(output)
}

fn html_only(html: PathBuf, pdf_note: Option<String>) -> GeneratedFiles {
    GeneratedFiles {
        html,
        pdf: None,
        pdf_note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_share_the_stem() {
        let input = Path::new("data/acme-0042.json");
        assert_eq!(html_output_path(input), PathBuf::from("data/acme-0042.html"));
        assert_eq!(
            pdf_output_path(&html_output_path(input)),
            PathBuf::from("data/acme-0042.pdf")
        );
    }

    #[test]
    fn default_config_wants_any_engine() {
        let config = PipelineConfig::default();
        assert_eq!(config.pdf, PdfMode::Auto(EnginePreference::Any));
        assert!(!config.embed_logo);
        assert_eq!(config.render.currency_symbol, "$");
    }
}
