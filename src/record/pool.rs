//! Reusable scratch payloads for the stateless logging path.
//!
//! # Design Decisions
//! - Lock-free queue, so concurrent callers never wait on each other
//! - Pooled instances keep their map capacity between records
//! - `get` makes no cleanliness promise; `ScratchGuard` clears before returning

use std::ops::{Deref, DerefMut};

use crossbeam_queue::SegQueue;

use crate::record::fields::Fields;

/// Capacity of freshly allocated scratch payloads: the reserved keys plus a
/// little room.
const SCRATCH_CAPACITY: usize = 8;

/// Concurrent free list of [`Fields`].
#[derive(Debug, Default)]
pub struct ScratchPool {
    free: SegQueue<Fields>,
}

impl ScratchPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take an instance, allocating when the pool is empty.
    ///
    /// The returned payload may still hold keys from an earlier record if a
    /// caller returned it without clearing.
    pub fn get(&self) -> Fields {
        self.free
            .pop()
            .unwrap_or_else(|| Fields::with_capacity(SCRATCH_CAPACITY))
    }

    /// Return an instance. Callers clear it first.
    pub fn put(&self, fields: Fields) {
        self.free.push(fields);
    }

    /// Take an instance that is cleared and returned when the guard drops.
    pub fn checkout(&self) -> ScratchGuard<'_> {
        ScratchGuard {
            pool: self,
            fields: self.get(),
        }
    }

    /// Number of idle instances.
    pub fn idle(&self) -> usize {
        self.free.len()
    }
}

/// A RAII guard over a pooled payload.
#[derive(Debug)]
pub struct ScratchGuard<'a> {
    pool: &'a ScratchPool,
    fields: Fields,
}

impl Deref for ScratchGuard<'_> {
    type Target = Fields;

    fn deref(&self) -> &Fields {
        &self.fields
    }
}

impl DerefMut for ScratchGuard<'_> {
    fn deref_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        let mut fields = std::mem::take(&mut self.fields);
        fields.clear();
        self.pool.put(fields);
    }
}
