//! Per-airport-instance occupancy state.
//!
//! The static layout and state graph are shared by every airport of one
//! type; [`Occupancy`] is the one piece of mutable state each live airport
//! owns. The vehicle simulation acquires a transition's guard mask after a
//! successful resolve and releases the bits it held when the aircraft
//! vacates a position. The resolver itself only ever reads.
//!
//! Mutual exclusion falls out of the acquire contract: [`Occupancy::acquire`]
//! is the only way bits become held and it refuses any overlap, so two
//! aircraft can never hold intersecting masks on the same instance.

use crate::blocks::BlockMask;

/// Error type for occupancy mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OccupancyError {
    /// The requested mask overlaps resources already held.
    ///
    /// This means the caller skipped the resolve step or acted on a stale
    /// resolution; within one tick a resolve followed by an acquire cannot
    /// conflict.
    #[error("resource conflict: requested {requested:?} overlaps held {held:?}")]
    Conflict {
        /// The mask the caller tried to acquire.
        requested: BlockMask,
        /// The occupancy state at the time of the call.
        held: BlockMask,
    },
}

/// Mutable reservation state of one live airport instance.
///
/// Created per instance at construction, mutated every simulation tick,
/// destroyed with the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    held: BlockMask,
}

impl Occupancy {
    /// A fresh instance with nothing reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore occupancy from a saved mask (savegame boundary).
    ///
    /// The `NOTHING` sentinel is stripped; it can never be legitimately held.
    pub fn from_mask(mask: BlockMask) -> Self {
        Self {
            held: mask.without(BlockMask::NOTHING),
        }
    }

    /// The currently held mask.
    pub fn mask(&self) -> BlockMask {
        self.held
    }

    /// True if none of the bits in `mask` are currently held.
    pub fn test_free(&self, mask: BlockMask) -> bool {
        !self.held.intersects(mask.without(BlockMask::NOTHING))
    }

    /// Reserve every bit in `mask`, failing without side effects on overlap.
    ///
    /// The `NOTHING` sentinel is stripped before the test, so acquiring a
    /// `NOTHING`-guarded transition always succeeds and records nothing.
    pub fn acquire(&mut self, mask: BlockMask) -> Result<(), OccupancyError> {
        let wanted = mask.without(BlockMask::NOTHING);
        if self.held.intersects(wanted) {
            return Err(OccupancyError::Conflict {
                requested: wanted,
                held: self.held,
            });
        }
        self.held |= wanted;
        Ok(())
    }

    /// Clear every bit in `mask`.
    ///
    /// Releasing bits that were never held is tolerated (the release is the
    /// caller's bookkeeping, not ours) but logged at debug level since it
    /// usually indicates a double release upstream.
    pub fn release(&mut self, mask: BlockMask) {
        let wanted = mask.without(BlockMask::NOTHING);
        if !self.held.contains(wanted) {
            tracing::debug!(
                requested = ?wanted,
                held = ?self.held,
                "release of bits not currently held"
            );
        }
        self.held = self.held.without(wanted);
    }

    /// Close the airport to new traffic by holding `AIRPORT_CLOSED`.
    ///
    /// Transitions whose guard includes the closed bit stay blocked until
    /// [`Occupancy::reopen`].
    pub fn close(&mut self) {
        self.held |= BlockMask::AIRPORT_CLOSED;
    }

    /// Reopen the airport.
    pub fn reopen(&mut self) {
        self.held = self.held.without(BlockMask::AIRPORT_CLOSED);
    }

    /// True while `AIRPORT_CLOSED` is held.
    pub fn is_closed(&self) -> bool {
        self.held.contains(BlockMask::AIRPORT_CLOSED)
    }
}
