//! Like ledger persistence integration tests

use tekoa_gateway::likes::{ledger_file, LikeLedger};

#[test]
fn toggle_pair_is_a_net_noop_from_any_seed() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();

    let first = ledger.toggle("101", 5).unwrap();
    assert!(first.liked);
    assert_eq!(first.count, 6);

    let second = ledger.toggle("101", 5).unwrap();
    assert!(!second.liked);
    assert_eq!(second.count, 5);
}

#[test]
fn ids_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let mut ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();

    ledger.toggle("1", 0).unwrap();
    ledger.toggle("2", 9).unwrap();

    assert_eq!(ledger.get("1", 0).count, 1);
    assert_eq!(ledger.get("2", 9).count, 10);
    assert_eq!(ledger.get("3", 7).count, 7); // untouched id still reads its seed
    assert_eq!(ledger.tracked(), 2);
}

#[test]
fn flag_and_count_persist_together_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());

    {
        let mut ledger = LikeLedger::load(&path).unwrap();
        ledger.toggle("55", 3).unwrap();
    }

    // A new instance (another "view" of the same store) re-reads on mount.
    let ledger = LikeLedger::load(&path).unwrap();
    let entry = ledger.get("55", 3);
    assert!(entry.liked);
    assert_eq!(entry.count, 4);
}

#[test]
fn state_file_holds_two_keyed_mappings() {
    let dir = tempfile::tempdir().unwrap();
    let path = ledger_file(dir.path());

    let mut ledger = LikeLedger::load(&path).unwrap();
    ledger.toggle("8", 2).unwrap();
    drop(ledger);

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["liked"]["8"], true);
    assert_eq!(value["counts"]["8"], 3);
}

#[test]
fn missing_state_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = LikeLedger::load(ledger_file(dir.path())).unwrap();
    assert_eq!(ledger.tracked(), 0);
}
