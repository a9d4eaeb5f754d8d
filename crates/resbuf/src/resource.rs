//! The [`Resource`] type: a fixed-length, exclusively owned `i32` buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::config::ResourceConfig;
use crate::error::ResourceError;
use crate::ledger::{self, LifecycleEvent};

/// Observable ownership state of a [`Resource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceState {
    /// No allocation; length 0.
    Empty,
    /// Owns exactly one allocation of `len() > 0` elements.
    Owning,
}

/// Exclusive owner of a contiguous buffer of `i32` whose length is fixed
/// at construction.
///
/// The buffer is released exactly once, when the owning value is dropped.
/// Duplication ([`duplicate`](Resource::duplicate), [`Clone`]) allocates a
/// fresh buffer; transfer ([`transfer`](Resource::transfer)) relocates the
/// buffer in O(1) and leaves the source [`ResourceState::Empty`].
///
/// Indexing is checked: out-of-range access panics through [`Index`] and
/// returns [`ResourceError::IndexOutOfRange`] through
/// [`element_at`](Resource::element_at).
#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    /// Owned slots. An empty boxed slice holds no allocation.
    data: Box<[i32]>,
}

impl Resource {
    /// Create an empty resource. Never allocates.
    pub fn new() -> Self {
        emit(LifecycleEvent::DefaultConstructed);
        Self::detached()
    }

    /// Create a resource owning `len` slots.
    ///
    /// Slot contents are unspecified (currently zeroed). `len == 0` yields
    /// an empty resource without allocating.
    pub fn with_size(len: usize) -> Result<Self, ResourceError> {
        let data = allocate(len)?;
        emit(LifecycleEvent::Constructed { len });
        Ok(Self { data })
    }

    /// Like [`with_size`](Resource::with_size), but first checks `len`
    /// against the configured element ceiling.
    pub fn with_config(len: usize, config: &ResourceConfig) -> Result<Self, ResourceError> {
        config.validate(len)?;
        Self::with_size(len)
    }

    /// Create a resource owning a copy of `values`.
    pub fn from_slice(values: &[i32]) -> Result<Self, ResourceError> {
        let mut data = allocate(values.len())?;
        data.copy_from_slice(values);
        emit(LifecycleEvent::Constructed { len: values.len() });
        Ok(Self { data })
    }

    /// Deep copy: a new allocation of `self.len()` slots with identical
    /// contents. `self` is not modified. O(len).
    pub fn duplicate(&self) -> Result<Self, ResourceError> {
        let mut data = allocate(self.data.len())?;
        data.copy_from_slice(&self.data);
        emit(LifecycleEvent::CopyConstructed { len: data.len() });
        Ok(Self { data })
    }

    /// Take ownership of this resource's buffer without copying elements.
    ///
    /// `self` is left [`ResourceState::Empty`]. O(1), never allocates.
    pub fn transfer(&mut self) -> Self {
        let mut moved = Self::detached();
        moved.swap_state(self);
        emit(LifecycleEvent::MoveConstructed {
            len: moved.data.len(),
        });
        moved
    }

    /// Copy-and-swap assignment.
    ///
    /// `value` has already been built by the caller, either as a duplicate
    /// or as a transfer, so this cannot fail. Its state is exchanged with
    /// `self`, and the previous contents of `self` are released when
    /// `value` is dropped at the end of the call.
    pub fn assign(&mut self, mut value: Resource) {
        emit(LifecycleEvent::Assigned {
            len: value.data.len(),
        });
        self.swap_state(&mut value);
    }

    /// Assign a deep copy of `source`.
    ///
    /// The copy is built before `self` is touched, so on allocation failure
    /// `self` is left unmodified.
    pub fn assign_by_copy(&mut self, source: &Resource) -> Result<(), ResourceError> {
        let value = source.duplicate()?;
        self.assign(value);
        Ok(())
    }

    /// Assign `source`'s buffer by transfer, leaving `source` empty.
    pub fn assign_by_move(&mut self, source: &mut Resource) {
        let value = source.transfer();
        self.assign(value);
    }

    /// Number of owned slots.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when no buffer is owned.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current ownership state.
    pub fn state(&self) -> ResourceState {
        if self.data.is_empty() {
            ResourceState::Empty
        } else {
            ResourceState::Owning
        }
    }

    /// Size of the owned buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<i32>()
    }

    /// Checked shared access to one slot.
    pub fn element_at(&self, index: usize) -> Result<&i32, ResourceError> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(ResourceError::IndexOutOfRange { index, len })
    }

    /// Checked mutable access to one slot.
    pub fn element_at_mut(&mut self, index: usize) -> Result<&mut i32, ResourceError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(ResourceError::IndexOutOfRange { index, len })
    }

    /// Shared access to one slot, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&i32> {
        self.data.get(index)
    }

    /// Mutable access to one slot, `None` when out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut i32> {
        self.data.get_mut(index)
    }

    /// All slots as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// All slots as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.data.iter()
    }

    /// Iterate mutably over the slots in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.data.iter_mut()
    }

    /// Elements in order, separated by single spaces.
    ///
    /// An empty resource renders as the empty string.
    pub fn render(&self) -> String {
        self.data
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Emit the rendered contents as a lifecycle event.
    pub fn print(&self) {
        tracing::info!(target: "resbuf::lifecycle", len = self.data.len(), "{self}");
        ledger::record_event(LifecycleEvent::Printed {
            len: self.data.len(),
        });
    }

    /// An empty value that emits no lifecycle event. Used as the
    /// destination of a transfer.
    fn detached() -> Self {
        Self {
            data: Box::default(),
        }
    }

    fn swap_state(&mut self, other: &mut Resource) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}

impl Default for Resource {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Resource {
    /// Infallible deep copy.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated. Use
    /// [`Resource::duplicate`] to handle that case.
    fn clone(&self) -> Self {
        match self.duplicate() {
            Ok(copy) => copy,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Drop for Resource {
    fn drop(&mut self) {
        let len = self.data.len();
        if len != 0 {
            ledger::record_release(self.memory_bytes());
        }
        emit(LifecycleEvent::Destroyed { len });
    }
}

impl Index<usize> for Resource {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        let len = self.data.len();
        match self.data.get(index) {
            Some(slot) => slot,
            None => panic!("index out of range: the len is {len} but the index is {index}"),
        }
    }
}

impl IndexMut<usize> for Resource {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => slot,
            None => panic!("index out of range: the len is {len} but the index is {index}"),
        }
    }
}

impl AsRef<[i32]> for Resource {
    fn as_ref(&self) -> &[i32] {
        &self.data
    }
}

impl<'a> IntoIterator for &'a Resource {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Resource {
    type Item = &'a mut i32;
    type IntoIter = std::slice::IterMut<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resource data: {}", self.render())
    }
}

/// Allocate `len` zeroed slots, reporting failure instead of aborting.
fn allocate(len: usize) -> Result<Box<[i32]>, ResourceError> {
    if len == 0 {
        return Ok(Box::default());
    }
    if ledger::take_injected_failure() {
        return Err(ResourceError::AllocationFailure { requested: len });
    }
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ResourceError::AllocationFailure { requested: len })?;
    buf.resize(len, 0);
    ledger::record_allocation(len * std::mem::size_of::<i32>());
    Ok(buf.into_boxed_slice())
}

fn emit(event: LifecycleEvent) {
    tracing::info!(target: "resbuf::lifecycle", len = event.element_count(), "{}", event.message());
    ledger::record_event(event);
}
