use std::io::Cursor;

use docx_rust::document::BodyContent;
use docx_rust::DocxFile;

/// Join the text of the document body's top-level paragraphs with `\n`.
///
/// Tables, headers and footers are not included.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let file = DocxFile::from_reader(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let docx = file.parse().map_err(|e| e.to_string())?;

    let paragraphs: Vec<String> = docx
        .document
        .body
        .content
        .iter()
        .filter_map(|content| match content {
            BodyContent::Paragraph(paragraph) => Some(paragraph.text()),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_docx;
    use super::*;

    #[test]
    fn joins_paragraphs_with_newlines() {
        let bytes = sample_docx(&["Hello", "World"]);
        assert_eq!(extract(&bytes).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn empty_document_gives_empty_text() {
        let bytes = sample_docx(&[]);
        assert_eq!(extract(&bytes).unwrap(), "");
    }

    #[test]
    fn rejects_non_zip_bytes() {
        assert!(extract(b"\xD0\xCF\x11\xE0 legacy word binary").is_err());
    }
}
