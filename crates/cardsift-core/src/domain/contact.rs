use serde::{Deserialize, Serialize};

/// One contact as parsed from a document, before any normalization.
/// Either field may be missing; a contact without a phone is dropped
/// during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContact {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// The single representative chosen for a phone number after
/// intra-batch deduplication. `normalized_phone` is the digit-only
/// form and serves as both the dedup key and the ledger key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedContact {
    pub original_name: String,
    pub original_phone: String,
    pub normalized_phone: String,
}
