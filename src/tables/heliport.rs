//! Heliport: a single elevated pad on a 1x1 tile.
//!
//! Helicopter-only. The pad is reserved when the approach begins, so the
//! hover point directly above it is never contested; a second arrival
//! circulates between the two air slots until the pad frees up.

use smallvec::smallvec;

use crate::blocks::BlockMask;
use crate::geometry::Direction;
use crate::layout::{AirportFlags, LayoutSpec, PadUsage};
use crate::movement::{MovementFlags, MovementTarget};
use crate::registry::{AirportSpec, AirportType};
use crate::state_graph::{Heading, TransitionRule};

const PAD: u16 = 0;
const PAD_HOVER: u16 = 1;
const AIR_EAST: u16 = 2;
const AIR_WEST: u16 = 3;

fn movement_table() -> Vec<MovementTarget> {
    vec![
        // 0: pad surface
        MovementTarget::new(
            8,
            8,
            MovementFlags::EXACT_POSITION | MovementFlags::HELI_LOWER,
            Direction::North,
        ),
        // 1: hover above the pad
        MovementTarget::new(
            8,
            8,
            MovementFlags::HELI_RAISE | MovementFlags::SLOW_TURN,
            Direction::North,
        ),
        // 2-3: air slots flanking the pad
        MovementTarget::new(
            40,
            -24,
            MovementFlags::NO_SPEED_CLAMP | MovementFlags::HOLD | MovementFlags::SLOW_TURN,
            Direction::West,
        ),
        MovementTarget::new(
            -24,
            40,
            MovementFlags::NO_SPEED_CLAMP | MovementFlags::HOLD | MovementFlags::SLOW_TURN,
            Direction::East,
        ),
    ]
}

fn rules() -> Vec<TransitionRule> {
    vec![
        // Circulate between the air slots while waiting.
        TransitionRule::new(AIR_EAST, Heading::FLYING, AIR_WEST, BlockMask::NOTHING),
        TransitionRule::new(AIR_WEST, Heading::FLYING, AIR_EAST, BlockMask::NOTHING),
        TransitionRule::new(AIR_EAST, Heading::HOLDING_PATTERN, AIR_WEST, BlockMask::NOTHING),
        TransitionRule::new(AIR_WEST, Heading::HOLDING_PATTERN, AIR_EAST, BlockMask::NOTHING),
        // Approach reserves the pad before the hover is entered.
        TransitionRule::new(AIR_EAST, Heading::HELI_LANDING, PAD_HOVER, BlockMask::helipad(1)),
        TransitionRule::new(AIR_WEST, Heading::HELI_LANDING, PAD_HOVER, BlockMask::helipad(1)),
        TransitionRule::new(PAD_HOVER, Heading::END_HELI_LANDING, PAD, BlockMask::NOTHING),
        // Departure.
        TransitionRule::new(PAD, Heading::HELI_TAKEOFF, PAD_HOVER, BlockMask::NOTHING),
        TransitionRule::new(PAD_HOVER, Heading::HELI_TAKEOFF, AIR_EAST, BlockMask::NOTHING),
    ]
}

/// Authored definition of the heliport.
pub fn heliport_spec() -> AirportSpec {
    AirportSpec {
        ty: AirportType::HELIPORT,
        layout: LayoutSpec {
            name: "heliport".to_string(),
            width: 1,
            height: 1,
            flags: AirportFlags::HELICOPTERS,
            pad_usage: PadUsage::Helipads,
            delta_z: 60,
            movement_table: movement_table(),
            num_terminals: 0,
            terminal_groups: smallvec![],
            num_cargo_terminals: 0,
            cargo_groups: smallvec![],
            num_helipads: 1,
            helipad_groups: smallvec![1],
            entry_points: None,
            heli_entry: Some(AIR_EAST),
        },
        rules: rules(),
    }
}
