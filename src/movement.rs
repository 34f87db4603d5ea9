//! Movement targets: the per-position instruction an aircraft follows.
//!
//! Every position in an airport's state graph carries one [`MovementTarget`]:
//! where to steer (in 1/16-tile units relative to the airport's north-west
//! corner), how to fly or taxi there ([`MovementFlags`]), and which compass
//! direction to face on arrival.

use bitflags::bitflags;

use crate::geometry::Direction;

bitflags! {
    /// How an aircraft approaches a movement target.
    ///
    /// `TAKEOFF`/`LAND` and `HELI_RAISE`/`HELI_LOWER` are mutually exclusive
    /// pairs; layout validation rejects targets that set both halves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MovementFlags: u16 {
        /// Do not clamp to taxi speed (airborne or rolling segments).
        const NO_SPEED_CLAMP = 1 << 0;
        /// Accelerating takeoff roll.
        const TAKEOFF = 1 << 1;
        /// Turn gradually rather than pivoting in place.
        const SLOW_TURN = 1 << 2;
        /// Descending landing segment.
        const LAND = 1 << 3;
        /// Stop exactly on the target coordinate.
        const EXACT_POSITION = 1 << 4;
        /// Braking / taxiing segment.
        const BRAKE = 1 << 5;
        /// Helicopter vertical ascent at the target.
        const HELI_RAISE = 1 << 6;
        /// Helicopter vertical descent at the target.
        const HELI_LOWER = 1 << 7;
        /// Holding-pattern slot; circle until a landing clearance arrives.
        const HOLD = 1 << 8;
    }
}

impl MovementFlags {
    /// Check the mutually-exclusive pairs.
    ///
    /// Returns `false` if both `TAKEOFF` and `LAND` are set, or both
    /// `HELI_RAISE` and `HELI_LOWER`.
    pub fn is_consistent(&self) -> bool {
        let takeoff_land = Self::TAKEOFF.union(Self::LAND);
        let raise_lower = Self::HELI_RAISE.union(Self::HELI_LOWER);
        !self.contains(takeoff_land) && !self.contains(raise_lower)
    }
}

/// A single movement instruction, one per airport position.
///
/// Coordinates are in 1/16-tile units relative to the unrotated footprint's
/// north-west corner. Airborne targets (holding slots, approach fixes) may
/// lie outside the footprint, including at negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementTarget {
    /// East-west coordinate, 1/16-tile units.
    pub x: i16,
    /// North-south coordinate, 1/16-tile units.
    pub y: i16,
    /// Approach behaviour flags.
    pub flags: MovementFlags,
    /// Compass direction to face after arriving.
    pub direction: Direction,
}

impl MovementTarget {
    /// Create a target with the given coordinates, flags and arrival direction.
    pub const fn new(x: i16, y: i16, flags: MovementFlags, direction: Direction) -> Self {
        Self {
            x,
            y,
            flags,
            direction,
        }
    }
}
