//! Thread-local lifecycle ledger.
//!
//! While a [`Capture`] guard is alive, every [`Resource`](crate::Resource)
//! lifecycle event and every buffer allocation or release on the current
//! thread is recorded. Outside a capture, recording is a no-op.
//!
//! The ledger is thread-local so that tests running in parallel do not
//! observe each other's resources.
//!
//! # Example
//!
//! ```
//! use resbuf::{ledger, Resource};
//!
//! let capture = ledger::capture();
//! {
//!     let _r = Resource::with_size(4).unwrap();
//! }
//! let snap = capture.snapshot();
//! assert_eq!(snap.allocations, 1);
//! assert_eq!(snap.live_allocations(), 0);
//! ```

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

/// One observable lifecycle transition of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// An empty resource was created.
    DefaultConstructed,
    /// A sized resource was created.
    Constructed {
        /// Element count of the new buffer.
        len: usize,
    },
    /// A resource was built as a deep copy of another.
    CopyConstructed {
        /// Element count of the copy.
        len: usize,
    },
    /// A resource took ownership of another's buffer.
    MoveConstructed {
        /// Element count transferred.
        len: usize,
    },
    /// A resource's contents were replaced through copy-and-swap.
    Assigned {
        /// Element count after assignment.
        len: usize,
    },
    /// A resource reached the end of its life.
    Destroyed {
        /// Element count released (0 for an empty resource).
        len: usize,
    },
    /// A resource's contents were printed.
    Printed {
        /// Element count printed.
        len: usize,
    },
}

impl LifecycleEvent {
    /// Transcript line for this event.
    pub fn message(&self) -> &'static str {
        match self {
            Self::DefaultConstructed => "Resource default constructor",
            Self::Constructed { .. } => "Resource constructor",
            Self::CopyConstructed { .. } => "Resource copy constructor",
            Self::MoveConstructed { .. } => "Resource move constructor",
            Self::Assigned { .. } => "Resource assignment operator",
            Self::Destroyed { .. } => "Resource destructor",
            Self::Printed { .. } => "Resource data",
        }
    }

    /// Element count carried by this event (0 for a default construction).
    pub fn element_count(&self) -> usize {
        match *self {
            Self::DefaultConstructed => 0,
            Self::Constructed { len }
            | Self::CopyConstructed { len }
            | Self::MoveConstructed { len }
            | Self::Assigned { len }
            | Self::Destroyed { len }
            | Self::Printed { len } => len,
        }
    }
}

/// Everything recorded since a capture started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Lifecycle events in the order they occurred.
    pub events: Vec<LifecycleEvent>,
    /// Number of buffer allocations.
    pub allocations: u64,
    /// Number of buffer releases.
    pub releases: u64,
    /// Total bytes allocated.
    pub allocated_bytes: u64,
    /// Total bytes released.
    pub released_bytes: u64,
}

impl LedgerSnapshot {
    /// Allocations made during the capture that have not been released.
    ///
    /// Releases of buffers allocated before the capture began are not
    /// counted against this figure.
    pub fn live_allocations(&self) -> u64 {
        self.allocations.saturating_sub(self.releases)
    }

    /// Bytes allocated during the capture that have not been released.
    pub fn live_bytes(&self) -> u64 {
        self.allocated_bytes.saturating_sub(self.released_bytes)
    }

    /// Transcript lines for the recorded events.
    pub fn messages(&self) -> Vec<&'static str> {
        self.events.iter().map(LifecycleEvent::message).collect()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&LifecycleEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

/// Recording state of one capture level.
#[derive(Clone, Debug, Default)]
struct LedgerState {
    snap: LedgerSnapshot,
    /// Allocations still to be refused on this capture level.
    injected_failures: u32,
}

thread_local! {
    static LEDGER: RefCell<Option<LedgerState>> = const { RefCell::new(None) };
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Guard for an active capture on the current thread.
///
/// Dropping the guard ends the capture and restores whatever capture (if
/// any) was active when it began. Nested captures must be dropped in
/// reverse order of creation; debug builds panic otherwise.
#[must_use = "recording stops as soon as the capture is dropped"]
pub struct Capture {
    previous: Option<LedgerState>,
    /// Nesting level of this capture, starting at 1.
    depth: usize,
    // Tied to the thread that owns the thread-local ledger.
    _not_send: PhantomData<*const ()>,
}

/// Start recording on the current thread.
pub fn capture() -> Capture {
    let previous = LEDGER.with(|ledger| ledger.replace(Some(LedgerState::default())));
    let depth = DEPTH.with(|d| {
        d.set(d.get() + 1);
        d.get()
    });
    Capture {
        previous,
        depth,
        _not_send: PhantomData,
    }
}

impl Capture {
    /// Copy of everything recorded so far.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LEDGER.with(|ledger| {
            ledger
                .borrow()
                .as_ref()
                .map(|state| state.snap.clone())
                .unwrap_or_default()
        })
    }

    /// Discard everything recorded so far, keeping the capture active.
    ///
    /// Pending injected failures are kept.
    pub fn clear(&self) {
        with_active(|state| state.snap = LedgerSnapshot::default());
    }

    /// Make the next non-empty buffer allocation on this thread fail with
    /// [`ResourceError::AllocationFailure`](crate::ResourceError::AllocationFailure).
    ///
    /// Calls accumulate: two calls fail the next two allocations. Pending
    /// failures are discarded when the capture ends.
    pub fn fail_next_allocation(&self) {
        with_active(|state| state.injected_failures += 1);
    }
}

impl Drop for Capture {
    fn drop(&mut self) {
        let depth = DEPTH.with(Cell::get);
        debug_assert_eq!(
            depth, self.depth,
            "ledger captures must be dropped in reverse order of creation"
        );
        DEPTH.with(|d| d.set(depth.saturating_sub(1)));
        let previous = self.previous.take();
        LEDGER.with(|ledger| {
            *ledger.borrow_mut() = previous;
        });
    }
}

fn with_active(f: impl FnOnce(&mut LedgerState)) {
    // `try_with`: resources may be dropped during thread-local teardown.
    let _ = LEDGER.try_with(|ledger| {
        if let Some(state) = ledger.borrow_mut().as_mut() {
            f(state);
        }
    });
}

pub(crate) fn record_event(event: LifecycleEvent) {
    with_active(|state| state.snap.events.push(event));
}

pub(crate) fn record_allocation(bytes: usize) {
    with_active(|state| {
        state.snap.allocations += 1;
        state.snap.allocated_bytes += bytes as u64;
    });
}

pub(crate) fn record_release(bytes: usize) {
    with_active(|state| {
        state.snap.releases += 1;
        state.snap.released_bytes += bytes as u64;
    });
}

/// Consume one injected failure, if any is pending.
pub(crate) fn take_injected_failure() -> bool {
    let mut fail = false;
    with_active(|state| {
        if state.injected_failures > 0 {
            state.injected_failures -= 1;
            fail = true;
        }
    });
    fail
}
