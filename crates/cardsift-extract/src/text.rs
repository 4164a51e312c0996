use cardsift_core::RawContact;
use regex::Regex;
use std::sync::LazyLock;

/// Success message emitted after a contact is added, e.g.
/// `✅ *Ana* +5511999999999 foi adicionado com sucesso ✅`.
static SUCCESS_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"✅\s*(.*?)\s*(\+\d+)\s*foi adicionado com sucesso\s*✅")
        .expect("valid success template")
});

/// Labeled name/number form, e.g. `Name: Ana` followed by
/// `Number (1): +55 (11) 99999-9999`.
static NAME_NUMBER_TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name:\s*(.*?)\s*Number \(1\):\s*(.*)").expect("valid name/number template"));

/// Extracts contacts from freeform pasted text by applying both known
/// message templates against the whole input. Matches of the first
/// template come before matches of the second; within each template,
/// source order is preserved.
pub fn extract_freeform(text: &str) -> Vec<RawContact> {
    let mut contacts = Vec::new();

    for caps in SUCCESS_TEMPLATE.captures_iter(text) {
        let name = caps[1].replace('*', "").trim().to_string();
        contacts.push(RawContact {
            name: non_empty(name),
            phone: Some(caps[2].to_string()),
        });
    }

    for caps in NAME_NUMBER_TEMPLATE.captures_iter(text) {
        let name = caps[1].trim().to_string();
        let digits: String = caps[2].chars().filter(char::is_ascii_digit).collect();
        contacts.push(RawContact {
            name: non_empty(name),
            phone: Some(format!("+{digits}")),
        });
    }

    contacts
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::extract_freeform;

    #[test]
    fn freeform_success_template() {
        let text = "✅ *Ana* +5511999999999 foi adicionado com sucesso ✅";
        let parsed = extract_freeform(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name.as_deref(), Some("Ana"));
        assert_eq!(parsed[0].phone.as_deref(), Some("+5511999999999"));
    }

    #[test]
    fn freeform_name_number_template_strips_formatting() {
        let text = "Name: Carlos Souza\nNumber (1): +55 (11) 98888-7777";
        let parsed = extract_freeform(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name.as_deref(), Some("Carlos Souza"));
        assert_eq!(parsed[0].phone.as_deref(), Some("+5511988887777"));
    }

    #[test]
    fn freeform_concatenates_both_templates_in_source_order() {
        let text = concat!(
            "✅ *Bia* +5511911112222 foi adicionado com sucesso ✅\n",
            "✅ *Ana* +5511933334444 foi adicionado com sucesso ✅\n",
            "Name: Carlos\nNumber (1): 11 95555-6666\n",
        );
        let parsed = extract_freeform(text);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name.as_deref(), Some("Bia"));
        assert_eq!(parsed[1].name.as_deref(), Some("Ana"));
        assert_eq!(parsed[2].phone.as_deref(), Some("+11955556666"));
    }

    #[test]
    fn freeform_no_match_yields_empty_list() {
        assert!(extract_freeform("random chatter with no templates").is_empty());
    }
}
