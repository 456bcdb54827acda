//! DOCX text extraction.
//!
//! A .docx file is a ZIP container; the body lives in `word/document.xml` as
//! WordprocessingML. Text is carried in `<w:t>` runs grouped into `<w:p>`
//! paragraphs. Extraction walks the XML in document order, concatenating runs
//! and emitting a newline per paragraph so downstream text keeps its shape.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts the paragraph text of a DOCX document, in document order.
/// Blocking; callers dispatch through `extract::extract_text`.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Malformed(format!("not a DOCX container: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Malformed(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::Malformed(format!("unreadable {DOCUMENT_PART}: {e}")))?;

    walk_document(&document_xml)
}

/// Walks WordprocessingML and collects visible text.
///
/// `<w:t>` content is appended verbatim; `<w:tab/>` becomes a tab,
/// `<w:br/>` a line break, and each closed `<w:p>` a newline.
fn walk_document(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text_run = false,
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::Malformed(format!("bad text run: {e}")))?;
                out.push_str(&run);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => out.push('\t'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => out.push('\n'),
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Malformed(format!("XML parse error: {e}"))),
        }
    }

    Ok(out)
}
