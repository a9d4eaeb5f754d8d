//! Test fixtures and proptest strategies for resbuf development.
//!
//! Fixtures panic on allocation failure; they are only used with small
//! lengths in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use resbuf::ledger::LedgerSnapshot;
use resbuf::{LifecycleEvent, Resource};

/// A resource holding `0, 1, .., len - 1`.
pub fn counting_resource(len: usize) -> Resource {
    resbuf::scenario::populated(len).expect("fixture allocation")
}

/// A resource holding a copy of `values`.
pub fn filled_resource(values: &[i32]) -> Resource {
    Resource::from_slice(values).expect("fixture allocation")
}

/// The space-separated render of `0..len`.
pub fn counting_render(len: usize) -> String {
    (0..len)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assert that every allocation recorded in `snap` was released exactly once.
pub fn assert_balanced(snap: &LedgerSnapshot) {
    assert_eq!(
        snap.allocations, snap.releases,
        "allocations and releases differ: {snap:?}"
    );
    assert_eq!(snap.live_bytes(), 0, "bytes still live: {snap:?}");
}

/// Number of `Destroyed` events in `snap`.
pub fn destroyed_count(snap: &LedgerSnapshot) -> usize {
    snap.count(|e| matches!(e, LifecycleEvent::Destroyed { .. }))
}

/// Number of constructions of any kind in `snap`.
pub fn constructed_count(snap: &LedgerSnapshot) -> usize {
    snap.count(|e| {
        matches!(
            e,
            LifecycleEvent::DefaultConstructed
                | LifecycleEvent::Constructed { .. }
                | LifecycleEvent::CopyConstructed { .. }
                | LifecycleEvent::MoveConstructed { .. }
        )
    })
}

/// Contents for a resource: up to `max_len` arbitrary `i32`s.
pub fn resource_values(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(any::<i32>(), 0..=max_len)
}

/// One step of a copy/move/assign chain over a pool of resources.
#[derive(Clone, Copy, Debug)]
pub enum ChainOp {
    /// Push a duplicate of slot `from`.
    Duplicate { from: usize },
    /// Push a transfer out of slot `from`.
    Transfer { from: usize },
    /// Copy-assign slot `from` into slot `to`.
    AssignCopy { from: usize, to: usize },
    /// Move-assign slot `from` into slot `to`.
    AssignMove { from: usize, to: usize },
    /// Drop slot `at`.
    Release { at: usize },
}

/// Arbitrary chain operations; slot indices are reduced modulo the pool size
/// by the caller.
pub fn chain_ops(max_ops: usize) -> impl Strategy<Value = Vec<ChainOp>> {
    let op = prop_oneof![
        any::<usize>().prop_map(|from| ChainOp::Duplicate { from }),
        any::<usize>().prop_map(|from| ChainOp::Transfer { from }),
        (any::<usize>(), any::<usize>()).prop_map(|(from, to)| ChainOp::AssignCopy { from, to }),
        (any::<usize>(), any::<usize>()).prop_map(|(from, to)| ChainOp::AssignMove { from, to }),
        any::<usize>().prop_map(|at| ChainOp::Release { at }),
    ];
    proptest::collection::vec(op, 0..=max_ops)
}

/// Apply `ops` to `pool`, keeping at least one resource alive.
///
/// Returns the shadow model: the expected contents of every slot.
pub fn apply_chain(pool: &mut Vec<Resource>, ops: &[ChainOp]) -> Vec<Vec<i32>> {
    let mut model: Vec<Vec<i32>> = pool.iter().map(|r| r.as_slice().to_vec()).collect();
    for &op in ops {
        if pool.is_empty() {
            break;
        }
        let n = pool.len();
        match op {
            ChainOp::Duplicate { from } => {
                let from = from % n;
                let copy = pool[from].duplicate().expect("fixture allocation");
                pool.push(copy);
                model.push(model[from].clone());
            }
            ChainOp::Transfer { from } => {
                let from = from % n;
                let moved = pool[from].transfer();
                pool.push(moved);
                let moved = std::mem::take(&mut model[from]);
                model.push(moved);
            }
            ChainOp::AssignCopy { from, to } => {
                let (from, to) = (from % n, to % n);
                let value = pool[from].duplicate().expect("fixture allocation");
                pool[to].assign(value);
                model[to] = model[from].clone();
            }
            ChainOp::AssignMove { from, to } => {
                let (from, to) = (from % n, to % n);
                let value = pool[from].transfer();
                pool[to].assign(value);
                let moved = std::mem::take(&mut model[from]);
                model[to] = moved;
            }
            ChainOp::Release { at } => {
                if n > 1 {
                    let at = at % n;
                    pool.remove(at);
                    model.remove(at);
                }
            }
        }
    }
    model
}
