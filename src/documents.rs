// src/documents.rs
//! Upload validation and text decoding. Binary format readers live behind
//! the ingestion boundary; the core only receives plain text, so decoding
//! here is the UTF-8 / Latin-1 fallback chain with the extension gate in
//! front of it.

use anyhow::Result;

pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "docx", "pdf"];

/// Get file extension in lowercase.
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against the accepted upload types.
pub fn validate_file_extension(filename: &str) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            ALLOWED_EXTENSIONS
        );
    }

    Ok(())
}

/// Decode uploaded bytes as UTF-8, falling back to Latin-1. Latin-1 maps
/// every byte to a code point, so the fallback cannot fail; the error case
/// is reserved for content that decodes to nothing usable.
pub fn decode_text(raw: &[u8]) -> Result<String> {
    let text = match String::from_utf8(raw.to_vec()) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    };

    if text.trim().is_empty() {
        anyhow::bail!("Decoded file contains no text");
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("resume.pdf"), Some("pdf".to_string()));
        assert_eq!(get_file_extension("resume.DOCX"), Some("docx".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("resume.txt").is_ok());
        assert!(validate_file_extension("resume.pdf").is_ok());
        assert!(validate_file_extension("resume.exe").is_err());
        assert!(validate_file_extension("noext").is_err());
    }

    #[test]
    fn test_decode_utf8() {
        let text = decode_text("Résumé for José".as_bytes()).unwrap();
        assert_eq!(text, "Résumé for José");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "Résumé" in Latin-1: 0xE9 is é, invalid as UTF-8.
        let raw = [b'R', 0xE9, b's', b'u', b'm', 0xE9];
        let text = decode_text(&raw).unwrap();
        assert_eq!(text, "Résumé");
    }

    #[test]
    fn test_decode_rejects_empty_content() {
        assert!(decode_text(b"").is_err());
        assert!(decode_text(b"   \n  ").is_err());
    }
}
