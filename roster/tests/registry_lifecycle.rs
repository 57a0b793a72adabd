//! Registry behavior against real store and audit files.

use std::fs;

use roster::registry::{Registry, transfer};
use roster::test_support::{registry_in, registry_pair, worker};

/// After each hire/fire, the list is exactly the hired-and-not-fired ids,
/// in hire order.
#[test]
fn hire_and_fire_keep_insertion_order() {
    let (_temp, mut registries) = registry_pair();
    let registry = &mut registries[0];

    for (id, name) in [("E1", "Ann"), ("E2", "Bo"), ("E3", "Cy")] {
        registry.hire(worker(id, name, "Clerk", 1000.0)).expect("hire");
    }
    registry.fire("E2").expect("fire").expect("found");

    let ids: Vec<&str> = registry.workers().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["E1", "E3"]);
}

/// Reopening a registry from its store file reproduces the same records.
#[test]
fn reopen_round_trips_all_fields() {
    let temp = tempfile::tempdir().expect("tempdir");
    {
        let mut registry = registry_in(temp.path(), "workers");
        registry.hire(worker("E1", "Ann", "Clerk", 1000.0)).expect("hire");
        registry.hire(worker("E2", "Bo", "Manager", 1250.5)).expect("hire");
    }

    let reopened = registry_in(temp.path(), "workers");
    assert_eq!(
        reopened.workers(),
        &[
            worker("E1", "Ann", "Clerk", 1000.0),
            worker("E2", "Bo", "Manager", 1250.5),
        ]
    );
}

/// Firing a nonexistent id leaves the list, store file, and log file
/// byte-identical to before the call.
#[test]
fn fire_miss_leaves_files_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut registry = registry_in(temp.path(), "workers");
    registry.hire(worker("E1", "Ann", "Clerk", 1000.0)).expect("hire");

    let store_path = temp.path().join("workers_data.txt");
    let log_path = temp.path().join("workers_log.txt");
    let store_before = fs::read_to_string(&store_path).expect("read store");
    let log_before = fs::read_to_string(&log_path).expect("read log");

    assert!(registry.fire("E9").expect("fire").is_none());

    assert_eq!(fs::read_to_string(&store_path).expect("read store"), store_before);
    assert_eq!(fs::read_to_string(&log_path).expect("read log"), log_before);
    assert_eq!(registry.workers().len(), 1);
}

/// The concrete scenario from the behavioral contract: two hires, a salary
/// change that touches only its target, then a fire.
#[test]
fn hire_change_salary_fire_scenario() {
    let (_temp, mut registries) = registry_pair();
    let registry = &mut registries[0];

    registry.hire(worker("E1", "Ann", "Clerk", 1000.0)).expect("hire");
    registry.hire(worker("E2", "Bo", "Clerk", 1200.0)).expect("hire");
    let ids: Vec<&str> = registry.workers().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["E1", "E2"]);

    assert!(registry.change_salary("E1", 1500.0).expect("change"));
    assert_eq!(registry.workers()[0].salary, 1500.0);
    assert_eq!(registry.workers()[1].salary, 1200.0);

    registry.fire("E2").expect("fire").expect("found");
    let ids: Vec<&str> = registry.workers().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["E1"]);
}

/// Transfer removes the worker from A's list and file, and both appear on B.
#[test]
fn transfer_updates_both_persisted_stores() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut registries = [
        registry_in(temp.path(), "workers"),
        registry_in(temp.path(), "branch"),
    ];
    registries[0]
        .hire(worker("E1", "Ann", "Clerk", 1000.0))
        .expect("hire");

    assert!(transfer(&mut registries, 0, 1, "E1").expect("transfer"));

    assert!(registries[0].workers().is_empty());
    assert_eq!(registries[1].workers()[0].id, "E1");

    let source = fs::read_to_string(temp.path().join("workers_data.txt")).expect("read");
    assert!(source.is_empty());
    let dest = fs::read_to_string(temp.path().join("branch_data.txt")).expect("read");
    assert_eq!(dest, "E1;Ann;Clerk;1000\n");
}

/// A store file written by one registry loads into a fresh pair; malformed
/// lines in a hand-edited file never poison the rest.
#[test]
fn reopen_skips_hand_edited_garbage() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("workers_data.txt"),
        "E1;Ann;Clerk;1000\ngarbage line\nE2;Bo;Clerk;oops\nE3;Cy;Clerk;900\n",
    )
    .expect("write");

    let registry: Registry = registry_in(temp.path(), "workers");
    let ids: Vec<&str> = registry.workers().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["E1", "E3"]);
}
