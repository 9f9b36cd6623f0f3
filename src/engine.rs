//! External HTML → PDF engines.
//!
//! PDF layout is delegated entirely to a command-line converter found on
//! `PATH`. The [`RenderEngine`] trait is the seam: the pipeline only asks
//! for "turn this HTML file into that PDF file".

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use crate::error::{InvoiceError, Result};

/// Converts an HTML file on disk into a PDF file on disk.
pub trait RenderEngine {
    /// Short name used in log and error messages.
    fn name(&self) -> &str;

    /// Write the PDF rendering of `html` to `pdf`.
    fn render(&self, html: &Path, pdf: &Path) -> Result<()>;
}

/// Converters this crate knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    WeasyPrint,
    Wkhtmltopdf,
}

impl EngineKind {
    /// Detection order when no engine is requested explicitly.
    pub const ALL: [EngineKind; 2] = [EngineKind::WeasyPrint, EngineKind::Wkhtmltopdf];

    /// Executable name looked up on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            EngineKind::WeasyPrint => "weasyprint",
            EngineKind::Wkhtmltopdf => "wkhtmltopdf",
        }
    }

    fn leading_args(self) -> &'static [&'static str] {
        match self {
            EngineKind::WeasyPrint => &[],
            EngineKind::Wkhtmltopdf => &["--quiet"],
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weasyprint" => Ok(EngineKind::WeasyPrint),
            "wkhtmltopdf" => Ok(EngineKind::Wkhtmltopdf),
            other => Err(format!("unknown PDF engine '{other}'")),
        }
    }
}

/// Which engine to look for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EnginePreference {
    /// First known engine found on `PATH`.
    #[default]
    Any,
    /// A specific known engine.
    Kind(EngineKind),
    /// Any program invoked as `<program> <input.html> <output.pdf>`.
    Program(PathBuf),
}

impl EnginePreference {
    /// A known engine name selects that engine; anything else is taken as
    /// a program name or path.
    pub fn parse(value: &str) -> Self {
        match value.parse::<EngineKind>() {
            Ok(kind) => EnginePreference::Kind(kind),
            Err(_) => EnginePreference::Program(PathBuf::from(value)),
        }
    }
}

/// Runs an external converter as a child process.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    name: String,
    program: PathBuf,
    leading_args: Vec<String>,
}

impl CommandEngine {
    /// A known engine at a resolved program path.
    pub fn new(kind: EngineKind, program: PathBuf) -> Self {
        Self {
            name: kind.program().to_string(),
            program,
            leading_args: kind.leading_args().iter().map(|a| a.to_string()).collect(),
        }
    }

    /// An arbitrary converter taking `<input> <output>`.
    pub fn custom(program: PathBuf) -> Self {
        let name = program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        Self {
            name,
            program,
            leading_args: Vec::new(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn failure(&self, reason: String) -> InvoiceError {
        InvoiceError::EngineFailure {
            engine: self.name.clone(),
            reason,
        }
    }
}

impl RenderEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, html: &Path, pdf: &Path) -> Result<()> {
        log::debug!(
            "Running {} on '{}' → '{}'",
            self.program.display(),
            html.display(),
            pdf.display()
        );

        // A leftover PDF from an earlier run must not pass for fresh output.
        if pdf.exists() {
            fs::remove_file(pdf).map_err(|e| InvoiceError::io(pdf, e))?;
        }

        let output = Command::new(&self.program)
            .args(&self.leading_args)
            .arg(html)
            .arg(pdf)
            .output()
            .map_err(|e| self.failure(format!("could not start '{}': {e}", self.program.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(self.failure(if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {stderr}", output.status)
            }));
        }

        if !pdf.exists() {
            return Err(self.failure(format!("no output written to '{}'", pdf.display())));
        }
        Ok(())
    }
}

/// Locate an engine for `preference`.
///
/// Returns [`InvoiceError::EngineUnavailable`] when nothing suitable is
/// installed.
pub fn detect(preference: &EnginePreference) -> Result<CommandEngine> {
    let engine = match preference {
        EnginePreference::Any => EngineKind::ALL
            .iter()
            .find_map(|&kind| {
                which::which(kind.program())
                    .ok()
                    .map(|path| CommandEngine::new(kind, path))
            })
            .ok_or_else(|| {
                let names: Vec<&str> = EngineKind::ALL.iter().map(|k| k.program()).collect();
                InvoiceError::EngineUnavailable(format!(
                    "none of {} found on PATH",
                    names.join(", ")
                ))
            })?,
        EnginePreference::Kind(kind) => which::which(kind.program())
            .map(|path| CommandEngine::new(*kind, path))
            .map_err(|_| {
                InvoiceError::EngineUnavailable(format!("'{}' not found on PATH", kind.program()))
            })?,
        EnginePreference::Program(program) => which::which(program)
            .map(CommandEngine::custom)
            .map_err(|_| {
                InvoiceError::EngineUnavailable(format!(
                    "'{}' is not an executable program",
                    program.display()
                ))
            })?,
    };

    log::debug!(
        "Using PDF engine {} at '{}'",
        engine.name(),
        engine.program().display()
    );
    Ok(engine)
}
