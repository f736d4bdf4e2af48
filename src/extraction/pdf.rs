use lopdf::Document;
use tracing::warn;

/// Concatenate the text of every page in page order.
///
/// A page that fails to yield text contributes nothing; only a document
/// that cannot be loaded at all is an error.
pub fn extract(bytes: &[u8]) -> Result<String, String> {
    let doc = Document::load_mem(bytes).map_err(|e| e.to_string())?;

    let mut text = String::new();
    for (page_num, _page_id) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(content) => text.push_str(&content),
            Err(e) => warn!(page = page_num, error = %e, "Skipping unextractable PDF page"),
        }
    }

    Ok(text)
}
