/// Reduces a phone value to its digit-only canonical form.
///
/// Returns `None` when no digits remain; such values cannot be
/// deduplicated or recorded in the ledger.
pub fn normalize_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::normalize_phone;

    #[test]
    fn normalize_phone_strips_formatting() {
        let value = normalize_phone("+55 (11) 99999-9999").unwrap();
        assert_eq!(value, "5511999999999");
    }

    #[test]
    fn normalize_phone_is_idempotent() {
        let once = normalize_phone("+55 11 98888-7777").unwrap();
        let twice = normalize_phone(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_phone_rejects_digitless_values() {
        assert!(normalize_phone("").is_none());
        assert!(normalize_phone("  ").is_none());
        assert!(normalize_phone("+-()").is_none());
    }
}
