//! Value types for airport layout definitions.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::movement::MovementTarget;

/// Index of a position (element) within one airport's movement table.
pub type PositionId = u16;

/// Maximum positions per airport type.
pub const MAX_ELEMENTS: usize = 1280;

/// Compass direction an aircraft approaches the airport from.
///
/// Selects which entry point (holding slot) a newly arriving fixed-wing
/// aircraft is injected at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    North,
    East,
    South,
    West,
}

impl Approach {
    /// All approaches in entry-point table order.
    pub const ALL: [Approach; 4] = [
        Approach::North,
        Approach::East,
        Approach::South,
        Approach::West,
    ];

    /// Index into the entry-point table.
    pub fn index(self) -> usize {
        match self {
            Approach::North => 0,
            Approach::East => 1,
            Approach::South => 2,
            Approach::West => 3,
        }
    }
}

bitflags! {
    /// Capabilities of an airport type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AirportFlags: u8 {
        /// Serves fixed-wing aircraft; requires all four entry points.
        const FIXED_WING = 1 << 0;
        /// Serves helicopters; requires a helicopter entry point.
        const HELICOPTERS = 1 << 1;
        /// Runway too short for heavy aircraft.
        const SHORT_STRIP = 1 << 2;
    }
}

/// Which meaning an airport type assigns to the aliased pad bits.
///
/// Helipad and cargo-terminal blocks share bits 45–56 of mask word 1; one
/// type commits to a single interpretation at authoring time and layout
/// validation holds it to that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PadUsage {
    /// Neither helipads nor cargo terminals.
    #[default]
    Neither,
    /// The aliased bits mean helipads.
    Helipads,
    /// The aliased bits mean cargo terminals.
    CargoTerminals,
}

/// Raw, authored form of an airport type definition.
///
/// This is the buildup shape supplied by stock tables or an external data
/// pack; [`AirportLayout::build`](super::AirportLayout::build) validates it
/// into the immutable runtime form.
#[derive(Debug, Clone)]
pub struct LayoutSpec {
    /// Human-readable type name, used in logs and errors.
    pub name: String,
    /// Footprint width in tiles (unrotated).
    pub width: u8,
    /// Footprint height in tiles (unrotated).
    pub height: u8,
    /// Capability flags.
    pub flags: AirportFlags,
    /// Interpretation of the aliased pad bits.
    pub pad_usage: PadUsage,
    /// Height offset of helipad surfaces above ground level.
    pub delta_z: i8,
    /// One movement target per position; its length is `num_elements`.
    pub movement_table: Vec<MovementTarget>,
    /// Total passenger terminals.
    pub num_terminals: u8,
    /// Terminal group sizes; must sum to `num_terminals`.
    pub terminal_groups: SmallVec<[u8; 4]>,
    /// Total cargo terminals (aliased bits; see [`PadUsage`]).
    pub num_cargo_terminals: u8,
    /// Cargo terminal group sizes; must sum to `num_cargo_terminals`.
    pub cargo_groups: SmallVec<[u8; 2]>,
    /// Total helipads (aliased bits; see [`PadUsage`]).
    pub num_helipads: u8,
    /// Helipad group sizes; must sum to `num_helipads`.
    pub helipad_groups: SmallVec<[u8; 2]>,
    /// Fixed-wing entry positions, one per [`Approach`], in `Approach::ALL`
    /// order. Required when `FIXED_WING` is set.
    pub entry_points: Option<[PositionId; 4]>,
    /// Helicopter entry position. Required when `HELICOPTERS` is set.
    pub heli_entry: Option<PositionId>,
}
