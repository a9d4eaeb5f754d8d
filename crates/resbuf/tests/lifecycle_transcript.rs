//! Integration test: lifecycle transcripts of the demonstration scenarios.
//!
//! Each scenario's full event sequence, including the destructor of the
//! by-value assignment temporary and the end-of-scope destructors, is
//! checked against the expected transcript.

use resbuf::ledger;
use resbuf::scenario::Scenario;
use resbuf::{LifecycleEvent, Resource, ScenarioConfig};
use resbuf_test_utils::{assert_balanced, constructed_count, counting_render, destroyed_count};

#[test]
fn copy_constructor_transcript() {
    let capture = ledger::capture();
    let report = Scenario::CopyConstruction
        .run(&ScenarioConfig::default())
        .unwrap();
    let snap = capture.snapshot();

    assert_eq!(
        snap.messages(),
        vec![
            "Resource constructor",
            "Resource copy constructor",
            "Resource data",
            "Resource data",
            "Resource destructor",
            "Resource destructor",
        ]
    );
    assert_eq!(report.printed, vec![counting_render(10), counting_render(10)]);
    assert_eq!(snap.allocations, 2);
    assert_balanced(&snap);
}

#[test]
fn copy_assignment_transcript() {
    let capture = ledger::capture();
    let report = Scenario::CopyAssignment
        .run(&ScenarioConfig::default())
        .unwrap();
    let snap = capture.snapshot();

    assert_eq!(
        snap.events,
        vec![
            LifecycleEvent::Constructed { len: 10 },
            LifecycleEvent::DefaultConstructed,
            LifecycleEvent::CopyConstructed { len: 10 },
            LifecycleEvent::Assigned { len: 10 },
            // The temporary now holds the target's old, empty state.
            LifecycleEvent::Destroyed { len: 0 },
            LifecycleEvent::Printed { len: 10 },
            LifecycleEvent::Destroyed { len: 10 },
            LifecycleEvent::Destroyed { len: 10 },
        ]
    );
    assert_eq!(report.printed, vec![counting_render(10)]);
    assert_balanced(&snap);
}

#[test]
fn move_assignment_transcript() {
    let capture = ledger::capture();
    let report = Scenario::MoveAssignment
        .run(&ScenarioConfig::default())
        .unwrap();
    let snap = capture.snapshot();

    assert_eq!(
        snap.events,
        vec![
            LifecycleEvent::Constructed { len: 10 },
            LifecycleEvent::DefaultConstructed,
            LifecycleEvent::MoveConstructed { len: 10 },
            LifecycleEvent::Assigned { len: 10 },
            LifecycleEvent::Destroyed { len: 0 },
            LifecycleEvent::Printed { len: 0 },
            LifecycleEvent::Printed { len: 10 },
            // Reverse declaration order: target first, emptied source last.
            LifecycleEvent::Destroyed { len: 10 },
            LifecycleEvent::Destroyed { len: 0 },
        ]
    );
    assert_eq!(report.printed, vec![String::new(), counting_render(10)]);
    // Only the original buffer was ever allocated.
    assert_eq!(snap.allocations, 1);
    assert_balanced(&snap);
}

#[test]
fn every_construction_is_destroyed_once() {
    for scenario in Scenario::ALL {
        let capture = ledger::capture();
        scenario.run(&ScenarioConfig::new(25)).unwrap();
        let snap = capture.snapshot();
        assert_eq!(
            constructed_count(&snap),
            destroyed_count(&snap),
            "{scenario}: {:?}",
            snap.messages()
        );
    }
}

#[test]
fn transfer_emits_no_allocation() {
    let mut source = Resource::with_size(8).unwrap();
    let capture = ledger::capture();
    let moved = source.transfer();
    let snap = capture.snapshot();

    assert_eq!(snap.events, vec![LifecycleEvent::MoveConstructed { len: 8 }]);
    assert_eq!(snap.allocations, 0);
    assert_eq!(moved.len(), 8);
}

#[test]
fn failed_construction_emits_nothing() {
    let capture = ledger::capture();
    assert!(Resource::with_size(usize::MAX).is_err());
    let snap = capture.snapshot();
    assert!(snap.events.is_empty());
    assert_eq!(snap.allocations, 0);
}
