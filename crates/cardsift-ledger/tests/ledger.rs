use cardsift_ledger::{paths, Ledger};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn load_missing_file_is_empty() {
    let temp = TempDir::new().expect("tempdir");
    let ledger = Ledger::open(paths::ledger_path_in(temp.path()));
    assert!(ledger.load().is_empty());
    assert!(!ledger.contains("5511999999999"));
}

#[test]
fn append_then_load_round_trips() {
    let temp = TempDir::new().expect("tempdir");
    let ledger = Ledger::open(paths::ledger_path_in(temp.path()));

    ledger
        .append(&set(&["5511999999999", "5511888888888"]))
        .expect("append");

    let snapshot = ledger.load();
    assert_eq!(snapshot.len(), 2);
    assert!(ledger.contains("5511999999999"));
    assert!(ledger.contains("5511888888888"));
}

#[test]
fn append_empty_set_is_a_noop() {
    let temp = TempDir::new().expect("tempdir");
    let path = paths::ledger_path_in(temp.path());
    let ledger = Ledger::open(&path);

    ledger.append(&HashSet::new()).expect("append");
    assert!(!path.exists());
}

#[test]
fn append_does_not_rewrite_existing_content() {
    let temp = TempDir::new().expect("tempdir");
    let path = paths::ledger_path_in(temp.path());
    fs::write(&path, "111\n").expect("seed");

    let ledger = Ledger::open(&path);
    ledger.append(&set(&["222"])).expect("append");

    let contents = fs::read_to_string(&path).expect("read");
    assert!(contents.starts_with("111\n"));
    assert!(contents.contains("222\n"));
}

#[test]
fn contains_tolerates_duplicate_lines() {
    let temp = TempDir::new().expect("tempdir");
    let path = paths::ledger_path_in(temp.path());
    fs::write(&path, "111\n111\n 111 \n").expect("seed");

    let ledger = Ledger::open(&path);
    assert!(ledger.contains("111"));
    assert_eq!(ledger.load().len(), 1);
}

#[test]
fn remove_keeps_unlisted_lines() {
    let temp = TempDir::new().expect("tempdir");
    let path = paths::ledger_path_in(temp.path());
    fs::write(&path, "111\n222\n333\n").expect("seed");

    let ledger = Ledger::open(&path);
    ledger.remove(&set(&["222"])).expect("remove");

    let snapshot = ledger.load();
    assert!(snapshot.contains("111"));
    assert!(!snapshot.contains("222"));
    assert!(snapshot.contains("333"));
}

#[test]
fn remove_missing_file_is_a_noop() {
    let temp = TempDir::new().expect("tempdir");
    let ledger = Ledger::open(paths::ledger_path_in(temp.path()));
    ledger.remove(&set(&["111"])).expect("remove");
}

#[test]
fn concurrent_append_and_remove_keeps_lines_parseable() {
    let temp = TempDir::new().expect("tempdir");
    let path = paths::ledger_path_in(temp.path());
    let ledger = Ledger::open(&path);

    // Numbers a racing thread removes while the writers append.
    let seeded: HashSet<String> = (0..50).map(|i| format!("8000{i:04}")).collect();
    ledger.append(&seeded).expect("seed");

    let mut handles = Vec::new();
    for thread_id in 0..4u32 {
        let ledger = ledger.clone();
        handles.push(std::thread::spawn(move || {
            for i in 0..50u32 {
                let number = format!("9{thread_id}00{i:04}");
                ledger.append(&HashSet::from([number])).expect("append");
            }
        }));
    }
    {
        let ledger = ledger.clone();
        let seeded = seeded.clone();
        handles.push(std::thread::spawn(move || {
            for number in seeded {
                ledger.remove(&HashSet::from([number])).expect("remove");
            }
        }));
    }
    for handle in handles {
        handle.join().expect("join");
    }

    // No torn or interleaved lines: every line is a bare digit string.
    let contents = fs::read_to_string(&path).expect("read");
    for line in contents.lines() {
        assert!(
            !line.is_empty() && line.chars().all(|ch| ch.is_ascii_digit()),
            "torn line: {line:?}"
        );
    }

    let snapshot = ledger.load();
    for thread_id in 0..4u32 {
        for i in 0..50u32 {
            assert!(snapshot.contains(&format!("9{thread_id}00{i:04}")));
        }
    }
    for number in &seeded {
        assert!(!snapshot.contains(number));
    }
}

#[test]
fn removed_numbers_can_be_reappended() {
    let temp = TempDir::new().expect("tempdir");
    let ledger = Ledger::open(paths::ledger_path_in(temp.path()));

    ledger.append(&set(&["5511999999999"])).expect("append");
    ledger.remove(&set(&["5511999999999"])).expect("remove");
    assert!(!ledger.contains("5511999999999"));

    ledger.append(&set(&["5511999999999"])).expect("append");
    assert!(ledger.contains("5511999999999"));
}
