//! Text extraction from uploaded syllabus files (PDF, DOCX, TXT).
//!
//! The parse pipeline only ever sees plain text; this module is the boundary
//! that turns an uploaded binary into that text or refuses it.

pub mod handlers;

use std::io::{Cursor, Read};

use thiserror::Error;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Pdf,
    Docx,
    Txt,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("DOCX extraction failed: {0}")]
    Docx(#[from] zip::result::ZipError),

    #[error("DOCX read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("no text could be extracted")]
    Empty,
}

/// Guesses the media kind from the declared MIME type and the filename
/// extension. Both are client-controlled hints; extraction itself is the
/// real check.
pub fn detect_media(mime: &str, name: &str) -> Option<MediaKind> {
    let mime = mime.to_lowercase();
    let name = name.to_lowercase();

    if mime.contains("pdf") || name.ends_with(".pdf") {
        Some(MediaKind::Pdf)
    } else if mime.contains("word") || mime.contains("officedocument") || name.ends_with(".docx") {
        Some(MediaKind::Docx)
    } else if mime.contains("text/") || name.ends_with(".txt") {
        Some(MediaKind::Txt)
    } else {
        None
    }
}

/// Extracts and cleans plain text from the uploaded bytes.
/// Returns `Empty` when the file decoded but held no visible text.
pub fn extract_text(kind: MediaKind, data: &[u8]) -> Result<String, ExtractError> {
    let raw = match kind {
        MediaKind::Pdf => pdf_extract::extract_text_from_mem(data)?,
        MediaKind::Docx => docx_to_text(data)?,
        MediaKind::Txt => String::from_utf8_lossy(data).into_owned(),
    };

    let text = clean_text(&raw);
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

/// Whitespace normalization: CR removal, trailing blanks stripped per line,
/// outer trim.
fn clean_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Reads `word/document.xml` out of the DOCX zip container and strips the
/// WordprocessingML markup. No docx crate involved; the body is flat XML and
/// paragraph boundaries are all the structure the parser needs.
fn docx_to_text(data: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut document = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    document.read_to_string(&mut xml)?;
    Ok(document_xml_to_text(&xml))
}

fn document_xml_to_text(xml: &str) -> String {
    // Paragraph ends become newlines before the markup is dropped.
    let xml = xml.replace("</w:p>", "\n");

    let mut out = String::with_capacity(xml.len());
    let mut in_tag = false;
    for c in xml.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    // &amp; last so it cannot re-introduce entities.
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
