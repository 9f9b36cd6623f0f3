//! Shared start-up for the command-line binaries.

use clap::Parser;

/// Initialise `env_logger`, showing warnings unless `RUST_LOG` says
/// otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parse the process arguments, exiting with status 1 on a usage error
/// and 0 after printing `--help` or `--version`.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            // Nothing sensible to do if printing the usage fails.
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

/// Hint appended when no PDF engine is installed.
pub const ENGINE_INSTALL_HINT: &str =
    "install weasyprint (pip install weasyprint) or wkhtmltopdf, or pass --engine <program>";
