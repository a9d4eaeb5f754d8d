//! Exclusively owned integer buffers with an observable lifecycle.
//!
//! [`Resource`] owns a single contiguous `[i32]` allocation whose length is
//! fixed at construction. Every lifecycle transition (construction,
//! duplication, transfer, assignment, destruction) emits a `tracing` event
//! and, while a [`ledger::capture`] is active, is recorded in a
//! thread-local ledger so tests can assert on it.
//!
//! # State machine
//!
//! ```text
//!   new() ──────────────► Empty ◄──── transfer() (source side)
//!                           │  ▲
//!   with_size(n > 0) ──► Owning │
//!                           │  │
//!        assign(value) swaps states with the by-value temporary;
//!        the temporary's drop releases the previous contents.
//! ```
//!
//! # Assignment
//!
//! There is a single assignment primitive, [`Resource::assign`], which takes
//! the replacement by value. Callers choose the copy or move path by how
//! they build that value ([`Resource::duplicate`] or
//! [`Resource::transfer`]); [`Resource::assign_by_copy`] and
//! [`Resource::assign_by_move`] are named shorthands for the two paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod ledger;
pub mod resource;
pub mod scenario;
pub mod telemetry;

// Public re-exports for the primary API surface.
pub use config::{ResourceConfig, ScenarioConfig};
pub use error::ResourceError;
pub use ledger::{LedgerSnapshot, LifecycleEvent};
pub use resource::{Resource, ResourceState};
