use encoding_rs::WINDOWS_1252;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a document from disk, tolerating unknown encodings. A missing
/// or unreadable file yields `None`, which callers treat as "no
/// contacts found" rather than an error.
pub fn load_document(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    Some(decode_document(&bytes))
}

/// Decodes raw bytes by trying UTF-8 first (BOM tolerated), then the
/// Windows-1252 superset of Latin-1, and finally lossy UTF-8 so that
/// decoding never fails outright.
pub fn decode_document(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{decode_document, load_document};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn decode_document_reads_utf8() {
        let text = decode_document("FN:João".as_bytes());
        assert_eq!(text, "FN:João");
    }

    #[test]
    fn decode_document_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"FN:Ana");
        assert_eq!(decode_document(&bytes), "FN:Ana");
    }

    #[test]
    fn decode_document_falls_back_to_latin1() {
        // "João" in ISO-8859-1: 0xE3 is not valid UTF-8.
        let bytes = b"FN:Jo\xE3o";
        assert_eq!(decode_document(bytes), "FN:João");
    }

    #[test]
    fn load_document_missing_file_is_none() {
        assert!(load_document(Path::new("/nonexistent/contacts.vcf")).is_none());
    }

    #[test]
    fn load_document_reads_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("contacts.vcf");
        fs::write(&path, "BEGIN:VCARD\nEND:VCARD\n").expect("write");
        let text = load_document(&path).expect("load");
        assert!(text.contains("BEGIN:VCARD"));
    }
}
