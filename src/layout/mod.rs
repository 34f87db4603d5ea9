//! Airport layout definitions.
//!
//! An [`AirportLayout`] is the immutable per-type bundle of everything that
//! is *not* the transition graph: the movement table, terminal / cargo /
//! helipad group sizes, entry points and capability flags. It is built once
//! from an authored [`LayoutSpec`] and shared read-only by every airport
//! instance of that type.
//!
//! All data-integrity checks happen here, at construction: a malformed spec
//! yields a [`LayoutError`] and the type is simply not built, a load-time
//! failure rather than a runtime one.

mod types;

use std::fmt;

pub use types::{AirportFlags, Approach, LayoutSpec, PadUsage, PositionId, MAX_ELEMENTS};

use smallvec::SmallVec;

use crate::blocks::{MAX_CARGO_TERMINALS, MAX_HELIPADS, MAX_TERMINALS};
use crate::geometry::{rotate_target, Rotation};
use crate::movement::MovementTarget;

/// Which group-size table a count mismatch refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Terminal,
    CargoTerminal,
    Helipad,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Terminal => write!(f, "terminal"),
            GroupKind::CargoTerminal => write!(f, "cargo terminal"),
            GroupKind::Helipad => write!(f, "helipad"),
        }
    }
}

/// Error type for layout construction.
///
/// All variants are data-authoring defects detected before any aircraft
/// moves; the affected airport type is excluded rather than the process
/// aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The movement table has no positions.
    #[error("movement table is empty")]
    EmptyMovementTable,

    /// The movement table exceeds the per-type position budget.
    #[error("movement table has {count} positions, maximum is {MAX_ELEMENTS}")]
    TooManyElements { count: usize },

    /// The footprint has a zero extent.
    #[error("footprint must be at least 1x1 tiles, got {width}x{height}")]
    ZeroFootprint { width: u8, height: u8 },

    /// A movement target sets both halves of a mutually exclusive flag pair.
    #[error("position {position} sets conflicting movement flags")]
    ConflictingTargetFlags { position: PositionId },

    /// A stated count exceeds the per-kind maximum.
    #[error("{kind} count {count} exceeds maximum {max}")]
    CountExceedsMaximum {
        kind: GroupKind,
        count: u8,
        max: u8,
    },

    /// A group-size table does not sum to the stated count.
    #[error("{kind} groups sum to {sum}, but the stated count is {stated}")]
    GroupSumMismatch { kind: GroupKind, stated: u8, sum: u8 },

    /// A group-size table contains an empty group.
    #[error("{kind} group table contains an empty group")]
    EmptyGroup { kind: GroupKind },

    /// The spec declares neither fixed-wing nor helicopter capability.
    #[error("airport type serves neither fixed-wing aircraft nor helicopters")]
    NoCapability,

    /// `FIXED_WING` is set but no entry-point table was supplied.
    #[error("fixed-wing capability requires all four entry points")]
    MissingFixedWingEntries,

    /// An entry point references a position outside the movement table.
    #[error("{approach:?} entry point {position} is out of range (num_elements = {num_elements})")]
    EntryPointOutOfRange {
        approach: Approach,
        position: PositionId,
        num_elements: u16,
    },

    /// `HELICOPTERS` is set but no helicopter entry point was supplied.
    #[error("helicopter capability requires a helicopter entry point")]
    MissingHeliEntry,

    /// The helicopter entry references a position outside the movement table.
    #[error("helicopter entry point {position} is out of range (num_elements = {num_elements})")]
    HeliEntryOutOfRange {
        position: PositionId,
        num_elements: u16,
    },

    /// Helipads are declared without helicopter capability.
    #[error("helipads declared but helicopter capability is missing")]
    HelipadsWithoutHelicopters,

    /// The spec gives the aliased pad bits both meanings, or a meaning its
    /// declared usage mode forbids.
    #[error("pad usage {usage:?} conflicts with declared counts (helipads = {helipads}, cargo terminals = {cargo})")]
    PadAliasConflict {
        usage: PadUsage,
        helipads: u8,
        cargo: u8,
    },
}

/// Immutable, validated per-airport-type layout.
///
/// Shared read-only across all instances of the type; per-instance mutable
/// state lives in [`Occupancy`](crate::occupancy::Occupancy).
#[derive(Debug, Clone, PartialEq)]
pub struct AirportLayout {
    name: String,
    width: u8,
    height: u8,
    flags: AirportFlags,
    pad_usage: PadUsage,
    delta_z: i8,
    movement_table: Vec<MovementTarget>,
    num_terminals: u8,
    terminal_groups: SmallVec<[u8; 4]>,
    num_cargo_terminals: u8,
    cargo_groups: SmallVec<[u8; 2]>,
    num_helipads: u8,
    helipad_groups: SmallVec<[u8; 2]>,
    entry_points: Option<[PositionId; 4]>,
    heli_entry: Option<PositionId>,
}

impl AirportLayout {
    /// Validate an authored spec into the immutable runtime layout.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] describing the first data-integrity defect
    /// found; see the variant docs for the full validation list.
    pub fn build(spec: LayoutSpec) -> Result<Self, LayoutError> {
        if spec.movement_table.is_empty() {
            return Err(LayoutError::EmptyMovementTable);
        }
        if spec.movement_table.len() > MAX_ELEMENTS {
            return Err(LayoutError::TooManyElements {
                count: spec.movement_table.len(),
            });
        }
        if spec.width == 0 || spec.height == 0 {
            return Err(LayoutError::ZeroFootprint {
                width: spec.width,
                height: spec.height,
            });
        }
        for (position, target) in spec.movement_table.iter().enumerate() {
            if !target.flags.is_consistent() {
                return Err(LayoutError::ConflictingTargetFlags {
                    position: position as PositionId,
                });
            }
        }

        Self::check_groups(
            GroupKind::Terminal,
            spec.num_terminals,
            &spec.terminal_groups,
            MAX_TERMINALS,
        )?;
        Self::check_groups(
            GroupKind::CargoTerminal,
            spec.num_cargo_terminals,
            &spec.cargo_groups,
            MAX_CARGO_TERMINALS,
        )?;
        Self::check_groups(
            GroupKind::Helipad,
            spec.num_helipads,
            &spec.helipad_groups,
            MAX_HELIPADS,
        )?;

        // The aliased pad bits get exactly one meaning per type.
        let alias_ok = match spec.pad_usage {
            PadUsage::Neither => spec.num_helipads == 0 && spec.num_cargo_terminals == 0,
            PadUsage::Helipads => spec.num_cargo_terminals == 0,
            PadUsage::CargoTerminals => spec.num_helipads == 0,
        };
        if !alias_ok {
            return Err(LayoutError::PadAliasConflict {
                usage: spec.pad_usage,
                helipads: spec.num_helipads,
                cargo: spec.num_cargo_terminals,
            });
        }

        if spec.flags.is_empty() {
            return Err(LayoutError::NoCapability);
        }

        let num_elements = spec.movement_table.len() as u16;

        // Presence is tied to the capability flags; range validity is not.
        // A supplied table is checked even when its flag is absent, so a
        // bogus position can never leak out through the accessors.
        if spec.flags.contains(AirportFlags::FIXED_WING) && spec.entry_points.is_none() {
            return Err(LayoutError::MissingFixedWingEntries);
        }
        if let Some(entries) = spec.entry_points {
            for approach in Approach::ALL {
                let position = entries[approach.index()];
                if position >= num_elements {
                    return Err(LayoutError::EntryPointOutOfRange {
                        approach,
                        position,
                        num_elements,
                    });
                }
            }
        }

        if spec.flags.contains(AirportFlags::HELICOPTERS) && spec.heli_entry.is_none() {
            return Err(LayoutError::MissingHeliEntry);
        }
        if let Some(position) = spec.heli_entry {
            if position >= num_elements {
                return Err(LayoutError::HeliEntryOutOfRange {
                    position,
                    num_elements,
                });
            }
        }
        if !spec.flags.contains(AirportFlags::HELICOPTERS) && spec.num_helipads > 0 {
            return Err(LayoutError::HelipadsWithoutHelicopters);
        }

        Ok(Self {
            name: spec.name,
            width: spec.width,
            height: spec.height,
            flags: spec.flags,
            pad_usage: spec.pad_usage,
            delta_z: spec.delta_z,
            movement_table: spec.movement_table,
            num_terminals: spec.num_terminals,
            terminal_groups: spec.terminal_groups,
            num_cargo_terminals: spec.num_cargo_terminals,
            cargo_groups: spec.cargo_groups,
            num_helipads: spec.num_helipads,
            helipad_groups: spec.helipad_groups,
            entry_points: spec.entry_points,
            heli_entry: spec.heli_entry,
        })
    }

    fn check_groups(
        kind: GroupKind,
        stated: u8,
        groups: &[u8],
        max: u8,
    ) -> Result<(), LayoutError> {
        if stated > max {
            return Err(LayoutError::CountExceedsMaximum {
                kind,
                count: stated,
                max,
            });
        }
        if groups.iter().any(|&size| size == 0) {
            return Err(LayoutError::EmptyGroup { kind });
        }
        let sum: u32 = groups.iter().map(|&size| size as u32).sum();
        if sum != stated as u32 {
            return Err(LayoutError::GroupSumMismatch {
                kind,
                stated,
                sum: sum.min(u8::MAX as u32) as u8,
            });
        }
        Ok(())
    }

    /// Number of positions; every [`PositionId`] in the type's graph is
    /// below this.
    pub fn num_elements(&self) -> u16 {
        self.movement_table.len() as u16
    }

    /// Movement target for a position, or `None` if out of range.
    pub fn target(&self, position: PositionId) -> Option<&MovementTarget> {
        self.movement_table.get(position as usize)
    }

    /// The whole movement table in position order.
    pub fn movement_table(&self) -> &[MovementTarget] {
        &self.movement_table
    }

    /// Fixed-wing entry position for an approach direction, if the type
    /// serves fixed-wing aircraft.
    pub fn entry_point(&self, approach: Approach) -> Option<PositionId> {
        self.entry_points.map(|entries| entries[approach.index()])
    }

    /// Helicopter entry position, if the type serves helicopters.
    pub fn heli_entry(&self) -> Option<PositionId> {
        self.heli_entry
    }

    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capability flags.
    pub fn flags(&self) -> AirportFlags {
        self.flags
    }

    /// Declared meaning of the aliased pad bits.
    pub fn pad_usage(&self) -> PadUsage {
        self.pad_usage
    }

    /// Helipad surface height offset.
    pub fn delta_z(&self) -> i8 {
        self.delta_z
    }

    /// Footprint extents in tiles, `(width, height)`.
    pub fn footprint(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    /// Total passenger terminals.
    pub fn num_terminals(&self) -> u8 {
        self.num_terminals
    }

    /// Terminal group sizes.
    pub fn terminal_groups(&self) -> &[u8] {
        &self.terminal_groups
    }

    /// Total cargo terminals.
    pub fn num_cargo_terminals(&self) -> u8 {
        self.num_cargo_terminals
    }

    /// Cargo terminal group sizes.
    pub fn cargo_groups(&self) -> &[u8] {
        &self.cargo_groups
    }

    /// Total helipads.
    pub fn num_helipads(&self) -> u8 {
        self.num_helipads
    }

    /// Helipad group sizes.
    pub fn helipad_groups(&self) -> &[u8] {
        &self.helipad_groups
    }

    /// This layout rotated into a placed orientation.
    ///
    /// The movement table is rotated target by target and the footprint
    /// extents swap for quarter turns; positions, groups and entry points
    /// are indices and carry over unchanged. One canonical table therefore
    /// serves all four placements.
    pub fn rotated(&self, rotation: Rotation) -> AirportLayout {
        let mut rotated = self.clone();
        rotated.movement_table = self
            .movement_table
            .iter()
            .map(|target| rotate_target(target, rotation, self.width, self.height))
            .collect();
        if rotation.swaps_extents() {
            rotated.width = self.height;
            rotated.height = self.width;
        }
        rotated
    }
}
