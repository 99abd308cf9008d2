//! Append-only bidirectional index cache
//!
//! Assigns every distinct value a permanent [`DenseIndex`], starting at 0 and
//! increasing by one per new value in commit order. Entries are never removed
//! or renumbered, so indices can be stored in external graphs and bitmaps for
//! the lifetime of the process. The cache owns a strong reference to every
//! value it has indexed; memory grows with the number of distinct values.

use crate::config::MAX_INDEX_CAPACITY;
use crate::error::{Error, Result};
use crate::path::RelPath;
use crate::types::DenseIndex;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::hash::Hash;
use tracing::trace;

/// Index cache keyed by canonical paths
pub type PathIndex = BidirectionalIndexCache<RelPath>;

/// Thread-safe value <-> dense index mapping
///
/// The forward map's vacant-entry insert is the only point where a new index
/// is decided. While that entry is held the value is appended to the reverse
/// vector, and the slot it lands in becomes its index: no gaps, no index
/// handed out twice. The reverse vector is append-only and never moves its
/// elements, so reading a committed slot takes no lock.
pub struct BidirectionalIndexCache<T> {
    forward: DashMap<T, DenseIndex>,
    reverse: boxcar::Vec<T>,
}

impl<T> BidirectionalIndexCache<T>
where
    T: Eq + Hash + Clone,
{
    /// Create an empty index cache
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty index cache with room for `capacity` values
    ///
    /// At most [`MAX_INDEX_CAPACITY`] slots are preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_INDEX_CAPACITY);
        Self {
            forward: DashMap::with_capacity(capacity),
            reverse: boxcar::Vec::with_capacity(capacity),
        }
    }

    /// Get the index of `value`, assigning the next one on first sight
    ///
    /// Concurrent first calls for the same value all observe the single
    /// index committed by whichever call reaches the forward entry first.
    pub fn get_index(&self, value: &T) -> Result<DenseIndex> {
        // Fast path: already committed
        if let Some(index) = self.lookup(value) {
            return Ok(index);
        }

        match self.forward.entry(value.clone()) {
            Entry::Occupied(entry) => Ok(*entry.get()),
            Entry::Vacant(entry) => {
                // Slots past u32::MAX are written but never handed out
                let slot = self.reverse.push(value.clone());
                let index = u32::try_from(slot)
                    .map(DenseIndex)
                    .map_err(|_| Error::IndexSpaceExhausted { len: slot })?;

                entry.insert(index);
                trace!(index = index.get(), "committed index");
                Ok(index)
            }
        }
    }

    /// Get the index of `value` without assigning one
    #[inline]
    pub fn lookup(&self, value: &T) -> Option<DenseIndex> {
        self.forward.get(value).map(|entry| *entry.value())
    }

    /// Resolve a committed index back to its value
    pub fn get_by_index(&self, index: DenseIndex) -> Result<T> {
        self.reverse
            .get(index.as_usize())
            .cloned()
            .ok_or_else(|| Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Get current number of committed indices
    ///
    /// Commits from different callers may finish out of order, so while
    /// assignments are in flight a slot below `len` can still be pending.
    #[inline]
    pub fn len(&self) -> usize {
        self.reverse.count()
    }

    /// Check if no index has been committed
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indexed values, position `i` holding the value with index `i`
    ///
    /// Stops at the first slot whose commit is still in flight.
    pub fn snapshot(&self) -> Vec<T> {
        self.reverse
            .iter()
            .enumerate()
            .take_while(|(position, (slot, _))| position == slot)
            .map(|(_, (_, value))| value.clone())
            .collect()
    }
}

impl<T> Default for BidirectionalIndexCache<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
