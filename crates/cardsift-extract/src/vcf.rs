use cardsift_core::RawContact;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

pub const CARD_BEGIN: &str = "BEGIN:VCARD";
pub const CARD_END: &str = "END:VCARD";

/// Optional property group prefix (`item1.TEL:...`), as produced by
/// Apple/iOS exports.
const GROUP: &str = r"(?:[^.:;\s]*\.)?";

/// Name field patterns, tried in order; the first match wins.
/// FN carries the full display name, N falls back to the structured
/// name's first component, NICKNAME is the last resort.
static NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"(?m)^{GROUP}FN:(.+)$"),
        format!(r"(?m)^{GROUP}N:([^;\n]+)"),
        format!(r"(?m)^{GROUP}NICKNAME:(.+)$"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid name pattern"))
    .collect()
});

/// Phone field patterns, tried in order; the first match wins.
/// The vendor `waid` identifier parameter outranks a bare telephone
/// number; a business-name line with a long digit run is the last
/// fallback.
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"waid=([^:;\s]+)"),
        format!(r"(?m)^{GROUP}TEL[^:\n]*:\s*(\+?\d[\d \-()]*)"),
        format!(r"(?m)^{GROUP}X-WA-BIZ-NAME[^:\n]*:.*?(\+?\d{{10,15}})"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid phone pattern"))
    .collect()
});

/// Splits a card-format document into blocks and extracts one raw
/// contact per block. A block only counts when it carries the end
/// marker, and only contributes a contact when a phone or identifier
/// was found; the name may be missing.
pub fn extract_cards(document: &str) -> Vec<RawContact> {
    let document = normalize_line_endings(document);
    let mut contacts = Vec::new();

    for block in document.split(CARD_BEGIN) {
        if !block.contains(CARD_END) {
            continue;
        }

        let name = first_capture(&NAME_PATTERNS, block);
        let phone = first_capture(&PHONE_PATTERNS, block);
        if phone.is_some() {
            contacts.push(RawContact { name, phone });
        }
    }

    contacts
}

fn first_capture(patterns: &[Regex], block: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|group| group.as_str().trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if !input.contains('\r') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}
