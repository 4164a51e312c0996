use crate::domain::{normalize_phone, RawContact, ResolvedContact};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The result of deduplicating one extraction batch against a ledger
/// snapshot. Each normalized phone appears in exactly one of the two
/// lists; both preserve the order phones were first encountered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Batch {
    pub unique: Vec<ResolvedContact>,
    pub duplicate: Vec<ResolvedContact>,
}

/// Groups raw contacts by normalized phone, resolves intra-batch
/// collisions, and splits the result by ledger membership.
///
/// Contacts without a phone, or whose phone has no digits, are
/// discarded. The `snapshot` is the ledger as of load time; callers
/// that mutate the ledger afterwards must reload before partitioning
/// again.
pub fn partition(raw_contacts: &[RawContact], snapshot: &HashSet<String>) -> Batch {
    let mut order: Vec<String> = Vec::new();
    let mut resolved: HashMap<String, ResolvedContact> = HashMap::new();

    for raw in raw_contacts {
        let Some(phone) = raw.phone.as_deref() else {
            continue;
        };
        let Some(normalized) = normalize_phone(phone) else {
            continue;
        };

        let candidate = ResolvedContact {
            original_name: raw.name.clone().unwrap_or_default(),
            original_phone: phone.to_string(),
            normalized_phone: normalized.clone(),
        };

        match resolved.get_mut(&normalized) {
            Some(current) => {
                if replaces(current, &candidate) {
                    *current = candidate;
                }
            }
            None => {
                order.push(normalized.clone());
                resolved.insert(normalized, candidate);
            }
        }
    }

    let mut batch = Batch::default();
    for key in &order {
        let Some(contact) = resolved.remove(key) else {
            continue;
        };
        if snapshot.contains(key) {
            batch.duplicate.push(contact);
        } else {
            batch.unique.push(contact);
        }
    }
    batch
}

/// Collision policy: the candidate with the strictly longer original
/// name replaces the current representative; equal lengths keep the
/// earlier one. Isolated here so the policy can be swapped without
/// touching extraction or ledger code.
fn replaces(current: &ResolvedContact, candidate: &ResolvedContact) -> bool {
    candidate.original_name.chars().count() > current.original_name.chars().count()
}

#[cfg(test)]
mod tests {
    use super::partition;
    use crate::domain::RawContact;
    use std::collections::HashSet;

    fn raw(name: Option<&str>, phone: Option<&str>) -> RawContact {
        RawContact {
            name: name.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn partition_longest_name_wins() {
        let contacts = vec![
            raw(Some("Jo"), Some("+55 11 99999-9999")),
            raw(Some("Joana"), Some("5511999999999")),
        ];
        let batch = partition(&contacts, &HashSet::new());
        assert_eq!(batch.unique.len(), 1);
        assert_eq!(batch.unique[0].original_name, "Joana");
        assert_eq!(batch.unique[0].normalized_phone, "5511999999999");
    }

    #[test]
    fn partition_equal_length_keeps_first_seen() {
        let contacts = vec![
            raw(Some("Ana"), Some("123")),
            raw(Some("Bia"), Some("123")),
        ];
        let batch = partition(&contacts, &HashSet::new());
        assert_eq!(batch.unique[0].original_name, "Ana");
    }

    #[test]
    fn partition_splits_by_ledger_snapshot() {
        let contacts = vec![
            raw(Some("Ana"), Some("111")),
            raw(Some("Bia"), Some("222")),
        ];
        let mut snapshot = HashSet::new();
        snapshot.insert("222".to_string());

        let batch = partition(&contacts, &snapshot);
        assert_eq!(batch.unique.len(), 1);
        assert_eq!(batch.unique[0].normalized_phone, "111");
        assert_eq!(batch.duplicate.len(), 1);
        assert_eq!(batch.duplicate[0].normalized_phone, "222");
    }

    #[test]
    fn partition_outputs_are_disjoint_and_complete() {
        let contacts = vec![
            raw(Some("A"), Some("111")),
            raw(Some("B"), Some("222")),
            raw(Some("C"), Some("111")),
            raw(Some("D"), Some("333")),
        ];
        let mut snapshot = HashSet::new();
        snapshot.insert("333".to_string());

        let batch = partition(&contacts, &snapshot);
        let unique: HashSet<&str> = batch
            .unique
            .iter()
            .map(|contact| contact.normalized_phone.as_str())
            .collect();
        let duplicate: HashSet<&str> = batch
            .duplicate
            .iter()
            .map(|contact| contact.normalized_phone.as_str())
            .collect();

        assert!(unique.is_disjoint(&duplicate));
        assert_eq!(unique.len() + duplicate.len(), 3);
    }

    #[test]
    fn partition_discards_digitless_phones() {
        let contacts = vec![
            raw(Some("Sem numero"), Some("+-()")),
            raw(Some("Sem telefone"), None),
        ];
        let batch = partition(&contacts, &HashSet::new());
        assert!(batch.unique.is_empty());
        assert!(batch.duplicate.is_empty());
    }

    #[test]
    fn partition_keeps_contacts_without_names() {
        let contacts = vec![raw(None, Some("5511988887777"))];
        let batch = partition(&contacts, &HashSet::new());
        assert_eq!(batch.unique.len(), 1);
        assert_eq!(batch.unique[0].original_name, "");
    }

    #[test]
    fn partition_preserves_first_seen_order() {
        let contacts = vec![
            raw(Some("C"), Some("333")),
            raw(Some("A"), Some("111")),
            raw(Some("B"), Some("222")),
            raw(Some("Aa"), Some("111")),
        ];
        let batch = partition(&contacts, &HashSet::new());
        let phones: Vec<&str> = batch
            .unique
            .iter()
            .map(|contact| contact.normalized_phone.as_str())
            .collect();
        assert_eq!(phones, vec!["333", "111", "222"]);
    }
}
