use anyhow::Result;
use pdf_extract::extract_text_from_mem;

/// Extracts plain text from the uploaded PDF bytes.
///
/// Page iteration and per-page fallbacks are owned by `pdf-extract`; pages
/// with no text layer contribute nothing. The result is trimmed of leading
/// and trailing whitespace. An empty string is a valid outcome (scanned
/// image with no text layer), not an error.
pub fn extract_resume_text(data: &[u8]) -> Result<String> {
    let text = extract_text_from_mem(data)?;
    Ok(text.trim().to_string())
}

/// Builds a well-formed one-page PDF with no text layer, with xref offsets
/// computed from the assembled bytes.
#[cfg(test)]
pub(crate) fn textless_pdf_bytes() -> Vec<u8> {
    let objects = [
        "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n",
        "2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n",
        "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << >> >>\nendobj\n",
    ];

    let mut pdf = Vec::new();
    pdf.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::new();
    for object in objects {
        offsets.push(pdf.len());
        pdf.extend_from_slice(object.as_bytes());
    }

    let xref_start = pdf.len();
    pdf.extend_from_slice(b"xref\n0 4\n0000000000 65535 f \n");
    for offset in offsets {
        pdf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    pdf.extend_from_slice(
        format!("trailer\n<< /Size 4 /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n").as_bytes(),
    );
    pdf
}
