pub mod read;
pub mod text;
pub mod vcf;

pub use read::load_document;
pub use text::extract_freeform;
pub use vcf::{extract_cards, CARD_BEGIN, CARD_END};

use cardsift_core::RawContact;

/// Extracts raw contacts from a document, picking the input mode by
/// content: documents carrying card blocks are parsed block by block,
/// anything else is treated as freeform pasted text.
///
/// Empty or unrecognized input yields an empty list; extraction never
/// fails.
pub fn extract_contacts(document: &str) -> Vec<RawContact> {
    if document.contains(CARD_BEGIN) {
        extract_cards(document)
    } else {
        extract_freeform(document)
    }
}
