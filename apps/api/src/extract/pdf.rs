//! PDF text extraction via the `pdf-extract` crate.

use super::ExtractError;

/// Extracts the concatenated page text of a PDF, in page order.
/// Blocking; callers dispatch through `extract::extract_text`.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Malformed(format!("PDF parse error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assembles a minimal single-page PDF with `text` drawn in Helvetica.
    /// Offsets in the xref table are computed from the actual byte positions,
    /// so the file is fully well-formed.
    fn minimal_pdf(text: &str) -> Vec<u8> {
        let objects = [
            "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n".to_string(),
            "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n".to_string(),
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>\nendobj\n"
                .to_string(),
            {
                let stream = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
                format!(
                    "4 0 obj\n<< /Length {} >>\nstream\n{stream}\nendstream\nendobj\n",
                    stream.len()
                )
            },
            "5 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n"
                .to_string(),
        ];

        let mut body = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for obj in &objects {
            offsets.push(body.len());
            body.push_str(obj);
        }

        let xref_pos = body.len();
        body.push_str("xref\n0 6\n0000000000 65535 f \n");
        for off in &offsets {
            body.push_str(&format!("{off:010} 00000 n \n"));
        }
        body.push_str(&format!(
            "trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF"
        ));
        body.into_bytes()
    }

    #[test]
    fn extracts_text_from_minimal_pdf() {
        let pdf = minimal_pdf("Hello World");
        let text = extract(&pdf).expect("extraction should succeed");
        assert!(text.contains("Hello World"), "got: {text:?}");
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let result = extract(b"plain text masquerading as a pdf");
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }
}
