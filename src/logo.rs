//! Inlining local logo files as base64 `data:` URIs, so the generated HTML
//! carries its own branding when moved or converted elsewhere.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64_STD, Engine as _};

use crate::error::{InvoiceError, Result};

/// Turn a logo reference into something self-contained.
///
/// URLs (`https://…`, `file://…`) and existing `data:` URIs are returned
/// unchanged. Anything else is a file path, resolved against `base_dir`.
pub fn embed_logo(reference: &str, base_dir: &Path) -> Result<String> {
    if is_url(reference) {
        return Ok(reference.to_string());
    }

    let path = base_dir.join(reference);
    let mime = mime_type(&path).ok_or_else(|| {
        InvoiceError::Format(format!(
            "cannot embed logo '{}': unsupported image type",
            path.display()
        ))
    })?;
    let bytes = fs::read(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InvoiceError::not_found(&path),
        _ => InvoiceError::io(&path, e),
    })?;

    log::debug!("Embedded logo '{}' ({} bytes)", path.display(), bytes.len());
    Ok(format!("data:{mime};base64,{}", BASE64_STD.encode(bytes)))
}

fn is_url(reference: &str) -> bool {
    reference.starts_with("data:") || reference.contains("://")
}

fn mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
