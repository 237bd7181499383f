//! Buffer ledger for one negotiation call.
//!
//! Every heap buffer a translation path needs is acquired through a
//! [`Lifecycle`] and comes back as a [`Tracked`] handle. Dropping the handle
//! releases the buffer and records the release, so the ledger balances on
//! every exit path: success, host refusal, or an allocation failure halfway
//! through a path.
//!
//! # Invariants
//!
//! 1. **Released exactly once**: a release is recorded only from
//!    `Tracked::drop`, which runs once per handle.
//! 2. **No use after release**: handles borrow the ledger, and [`scope`]
//!    only hands the ledger to a closure whose result cannot borrow it, so
//!    every handle is gone before the report is taken.
//! 3. **No hidden growth**: tracked buffers are reserved at their final
//!    size and refuse to reallocate; a push past capacity is an error.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Reservation refused | Allocator out of memory | [`AllocError::Reserve`], nothing recorded |
//! | Limit reached | Fault-injection limit hit | [`AllocError::LimitReached`], nothing recorded |
//! | Capacity exceeded | Size computed too small | [`AllocError::CapacityExceeded`], buffer untouched |

use std::cell::Cell;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;
use tracing::warn;

/// Why a tracked buffer could not be provided or extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The allocator refused the reservation.
    #[error("could not reserve {bytes} bytes")]
    Reserve { bytes: usize },
    /// The configured acquisition limit was reached.
    #[error("allocation limit of {limit} buffers reached")]
    LimitReached { limit: usize },
    /// A write would have grown the buffer past its reservation.
    #[error("buffer full at capacity {capacity}")]
    CapacityExceeded { capacity: usize },
}

/// Acquisition and release counts for one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifecycleReport {
    /// Buffers handed out.
    pub acquired: usize,
    /// Buffers returned.
    pub released: usize,
    /// Bytes reserved across all acquisitions.
    pub bytes_reserved: usize,
}

impl LifecycleReport {
    /// Whether every acquired buffer was released.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.acquired == self.released
    }

    /// Buffers still outstanding.
    #[must_use]
    pub const fn live(&self) -> usize {
        self.acquired.saturating_sub(self.released)
    }
}

/// Counting ledger handing out [`Tracked`] buffers.
///
/// Single-threaded by construction (`Cell` counters make it `!Sync`).
#[derive(Debug, Default)]
pub struct Lifecycle {
    acquired: Cell<usize>,
    released: Cell<usize>,
    bytes: Cell<usize>,
    limit: Option<usize>,
}

impl Lifecycle {
    /// A ledger without an acquisition limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger that refuses acquisitions past `limit` (if set).
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Reserve a vector with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// [`AllocError::LimitReached`] or [`AllocError::Reserve`].
    pub fn vec<T>(&self, capacity: usize) -> Result<Tracked<'_, Vec<T>>, AllocError> {
        let bytes = capacity.saturating_mul(size_of::<T>());
        self.check_limit()?;
        let mut value = Vec::new();
        value
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::Reserve { bytes })?;
        Ok(self.track(value, bytes))
    }

    /// Reserve a string with room for exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// [`AllocError::LimitReached`] or [`AllocError::Reserve`].
    pub fn string(&self, capacity: usize) -> Result<Tracked<'_, String>, AllocError> {
        self.check_limit()?;
        let mut value = String::new();
        value
            .try_reserve_exact(capacity)
            .map_err(|_| AllocError::Reserve { bytes: capacity })?;
        Ok(self.track(value, capacity))
    }

    /// Counts so far.
    #[must_use]
    pub fn report(&self) -> LifecycleReport {
        LifecycleReport {
            acquired: self.acquired.get(),
            released: self.released.get(),
            bytes_reserved: self.bytes.get(),
        }
    }

    fn check_limit(&self) -> Result<(), AllocError> {
        match self.limit {
            Some(limit) if self.acquired.get() >= limit => Err(AllocError::LimitReached { limit }),
            _ => Ok(()),
        }
    }

    fn track<T>(&self, value: T, bytes: usize) -> Tracked<'_, T> {
        self.acquired.set(self.acquired.get() + 1);
        self.bytes.set(self.bytes.get().saturating_add(bytes));
        Tracked {
            value,
            ledger: self,
        }
    }

    fn release(&self) {
        self.released.set(self.released.get() + 1);
    }
}

/// A buffer whose release is recorded in its [`Lifecycle`].
///
/// Read access goes through `Deref`; writes go through the capacity-checked
/// methods so the buffer never reallocates behind the ledger's back.
pub struct Tracked<'l, T> {
    value: T,
    ledger: &'l Lifecycle,
}

impl<T> Deref for Tracked<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T> Drop for Tracked<'_, T> {
    fn drop(&mut self) {
        self.ledger.release();
    }
}

impl<T> Tracked<'_, Vec<T>> {
    /// Append within the reservation.
    ///
    /// # Errors
    ///
    /// [`AllocError::CapacityExceeded`] when the vector is full.
    pub fn push(&mut self, item: T) -> Result<(), AllocError> {
        if self.value.len() == self.value.capacity() {
            return Err(AllocError::CapacityExceeded {
                capacity: self.value.capacity(),
            });
        }
        self.value.push(item);
        Ok(())
    }

    /// Start of the buffer, for handing it to C. Stays valid until the
    /// handle drops, since the buffer never reallocates.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.value.as_mut_ptr()
    }
}

impl Tracked<'_, String> {
    /// Append within the reservation.
    ///
    /// # Errors
    ///
    /// [`AllocError::CapacityExceeded`] when `s` does not fit.
    pub fn push_str(&mut self, s: &str) -> Result<(), AllocError> {
        if self.value.len() + s.len() > self.value.capacity() {
            return Err(AllocError::CapacityExceeded {
                capacity: self.value.capacity(),
            });
        }
        self.value.push_str(s);
        Ok(())
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Run `f` with a fresh ledger and report its final counts.
///
/// The closure's result cannot borrow the ledger, so every [`Tracked`]
/// handle is dropped before the counts are read.
pub fn scope<R>(limit: Option<usize>, f: impl FnOnce(&Lifecycle) -> R) -> (R, LifecycleReport) {
    let lifecycle = Lifecycle::with_limit(limit);
    let result = f(&lifecycle);
    let report = lifecycle.report();
    if !report.is_balanced() {
        warn!(
            acquired = report.acquired,
            released = report.released,
            "lifecycle scope ended with live buffers"
        );
    }
    (result, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_address_survives_pushes() {
        let lc = Lifecycle::new();
        let mut v = lc.vec::<u64>(3).unwrap();
        let start = v.as_mut_ptr();
        for i in 0..3 {
            v.push(i).unwrap();
        }
        assert!(v.push(3).is_err());
        assert_eq!(v.as_mut_ptr(), start);
        assert_eq!(v.as_ptr(), start.cast_const());
    }

    #[test]
    fn drop_records_release() {
        let lc = Lifecycle::new();
        {
            let mut v = lc.vec::<u32>(2).unwrap();
            v.push(1).unwrap();
            let s = lc.string(4).unwrap();
            assert_eq!(s.as_str(), "");
            assert_eq!(lc.report().live(), 2);
        }
        let report = lc.report();
        assert_eq!(report.acquired, 2);
        assert_eq!(report.released, 2);
        assert!(report.is_balanced());
        assert_eq!(report.bytes_reserved, 2 * 4 + 4);
    }

    #[test]
    fn vec_refuses_to_grow() {
        let lc = Lifecycle::new();
        let mut v = lc.vec::<u8>(1).unwrap();
        v.push(1).unwrap();
        let cap = v.capacity();
        for _ in 1..cap {
            v.push(0).unwrap();
        }
        assert!(matches!(v.push(2), Err(AllocError::CapacityExceeded { .. })));
        assert_eq!(v.len(), cap);
    }

    #[test]
    fn string_refuses_to_grow() {
        let lc = Lifecycle::new();
        let mut s = lc.string(3).unwrap();
        s.push_str("ab").unwrap();
        let cap = s.capacity();
        let err = s.push_str(&"x".repeat(cap)).unwrap_err();
        assert!(matches!(err, AllocError::CapacityExceeded { .. }));
        assert_eq!(s.as_str(), "ab");
    }

    #[test]
    fn limit_fails_without_recording() {
        let lc = Lifecycle::with_limit(Some(1));
        let first = lc.vec::<u8>(1).unwrap();
        assert_eq!(
            lc.string(1).unwrap_err(),
            AllocError::LimitReached { limit: 1 }
        );
        drop(first);
        // The limit counts acquisitions, not live buffers.
        assert!(lc.vec::<u8>(1).is_err());
        assert_eq!(lc.report(), LifecycleReport {
            acquired: 1,
            released: 1,
            bytes_reserved: 1,
        });
    }

    #[test]
    fn zero_limit_refuses_everything() {
        let (result, report) = scope(Some(0), |lc| lc.vec::<u8>(0).map(|_| ()));
        assert_eq!(result, Err(AllocError::LimitReached { limit: 0 }));
        assert_eq!(report, LifecycleReport::default());
    }

    #[test]
    fn oversized_reservation_is_an_error() {
        let lc = Lifecycle::new();
        assert!(matches!(
            lc.vec::<u64>(usize::MAX),
            Err(AllocError::Reserve { .. })
        ));
        assert_eq!(lc.report().acquired, 0);
    }

    #[test]
    fn scope_reports_balanced_counts() {
        let (len, report) = scope(None, |lc| {
            let mut outer = lc.vec::<usize>(3).unwrap();
            for i in 0..3 {
                let s = lc.string(8).unwrap();
                outer.push(s.capacity() + i).unwrap();
            }
            outer.len()
        });
        assert_eq!(len, 3);
        assert_eq!(report.acquired, 4);
        assert!(report.is_balanced());
    }
}
