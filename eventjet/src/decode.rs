//! Encoding detection and decoding of raw guest-list exports.
//!
//! Eventjet exports are opened and re-saved with spreadsheet tools a lot, so
//! they arrive as UTF-8 as well as Windows-1252 / ISO-8859-1.

use tracing::debug;

use crate::error::{GuestListError, GuestListResult};

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as UTF-8; everything else is handed to chardet.
/// The returned label is always one [`decode_content`] understands.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let (charset, confidence, _) = chardet::detect(bytes);
    debug!(%charset, confidence, "encoding detected");

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        // Already known not to be UTF-8.
        "ascii" | "utf-8" | "utf8" => "windows-1252".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        // Anything we cannot decode is most likely what Excel wrote on a
        // German Windows machine.
        other if encoding_rs::Encoding::for_label(other.as_bytes()).is_some() => other.to_string(),
        _ => "windows-1252".to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// A leading byte order mark is removed. Input that is invalid in the
/// given encoding is an error rather than being replaced silently.
pub fn decode_content(bytes: &[u8], encoding: &str) -> GuestListResult<String> {
    let label = encoding.trim().to_lowercase();
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
        .ok_or_else(|| GuestListError::Encoding(format!("Unknown encoding '{}'", label)))?;

    let (content, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(GuestListError::Encoding(format!(
            "Input is not valid {}",
            used.name()
        )));
    }

    Ok(content.into_owned())
}
