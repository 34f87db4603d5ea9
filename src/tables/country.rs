//! Country airport: a 4x3 grass field.
//!
//! One hangar, two terminals, a single runway used in both directions and a
//! two-node taxiway. The four circuit slots double as the fixed-wing entry
//! points.
//!
//! ```text
//!  positions (ground, 1/16-tile units, 64x48 footprint)
//!
//!      1 (TERM01)   2 (TERM02)
//!  0 ─── 3 ─────────── 4          0 hangar, 3/4 taxi nodes
//!  5 ═══════════════ 6            runway, line-up at 5
//! ```

use smallvec::smallvec;

use crate::blocks::BlockMask;
use crate::geometry::Direction;
use crate::layout::{AirportFlags, LayoutSpec, PadUsage};
use crate::movement::{MovementFlags, MovementTarget};
use crate::registry::{AirportSpec, AirportType};
use crate::state_graph::{Heading, TransitionRule};

const HANGAR: u16 = 0;
const TERM1: u16 = 1;
const TERM2: u16 = 2;
const TAXI_APRON: u16 = 3;
const TAXI_RUNWAY: u16 = 4;
const RUNWAY_LINE_UP: u16 = 5;
const RUNWAY_ROLL: u16 = 6;
const CLIMB_OUT: u16 = 7;
const CIRCUIT_N: u16 = 8;
const CIRCUIT_E: u16 = 9;
const CIRCUIT_S: u16 = 10;
const CIRCUIT_W: u16 = 11;
const FINAL_APPROACH: u16 = 12;
const ROLLOUT: u16 = 13;

fn parked(x: i16, y: i16, direction: Direction) -> MovementTarget {
    MovementTarget::new(x, y, MovementFlags::EXACT_POSITION, direction)
}

fn taxi(x: i16, y: i16, direction: Direction) -> MovementTarget {
    MovementTarget::new(x, y, MovementFlags::BRAKE, direction)
}

fn airborne(x: i16, y: i16, flags: MovementFlags, direction: Direction) -> MovementTarget {
    MovementTarget::new(x, y, MovementFlags::NO_SPEED_CLAMP | flags, direction)
}

fn movement_table() -> Vec<MovementTarget> {
    vec![
        // 0: hangar
        parked(2, 22, Direction::East),
        // 1-2: terminals
        parked(26, 6, Direction::North),
        parked(42, 6, Direction::North),
        // 3-4: taxi nodes
        taxi(18, 22, Direction::East),
        taxi(36, 22, Direction::East),
        // 5: runway line-up
        MovementTarget::new(
            8,
            38,
            MovementFlags::EXACT_POSITION | MovementFlags::BRAKE,
            Direction::East,
        ),
        // 6: takeoff roll end
        airborne(58, 38, MovementFlags::TAKEOFF, Direction::East),
        // 7: climb out, past the fence
        airborne(96, 32, MovementFlags::TAKEOFF, Direction::East),
        // 8-11: circuit / holding slots (clockwise)
        airborne(112, -24, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::West),
        airborne(112, 72, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::North),
        airborne(-48, 72, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::East),
        airborne(-48, -24, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::South),
        // 12: final approach fix, west of the threshold
        airborne(-40, 38, MovementFlags::LAND, Direction::East),
        // 13: touchdown and rollout
        MovementTarget::new(
            40,
            38,
            MovementFlags::LAND | MovementFlags::BRAKE,
            Direction::East,
        ),
    ]
}

fn rules() -> Vec<TransitionRule> {
    const APRON: BlockMask = BlockMask::taxiway(1);
    const LINK: BlockMask = BlockMask::taxiway(2);
    const RUNWAY: BlockMask = BlockMask::runway(1);

    vec![
        // Out of the hangar, everything funnels through the apron node.
        TransitionRule::new(HANGAR, Heading::terminal(1), TAXI_APRON, APRON),
        TransitionRule::new(HANGAR, Heading::terminal(2), TAXI_APRON, APRON),
        TransitionRule::new(HANGAR, Heading::TAKEOFF, TAXI_APRON, APRON),
        // Apron node fans out.
        TransitionRule::new(TAXI_APRON, Heading::terminal(1), TERM1, BlockMask::terminal(1)),
        TransitionRule::new(TAXI_APRON, Heading::terminal(2), TERM2, BlockMask::terminal(2)),
        TransitionRule::new(TAXI_APRON, Heading::HANGAR, HANGAR, BlockMask::hangar(1)),
        TransitionRule::new(TAXI_APRON, Heading::TAKEOFF, TAXI_RUNWAY, LINK),
        // Terminals push back onto the apron.
        TransitionRule::new(TERM1, Heading::TAKEOFF, TAXI_APRON, APRON),
        TransitionRule::new(TERM1, Heading::HANGAR, TAXI_APRON, APRON),
        TransitionRule::new(TERM2, Heading::TAKEOFF, TAXI_APRON, APRON),
        TransitionRule::new(TERM2, Heading::HANGAR, TAXI_APRON, APRON),
        // Runway-side taxi node: line up only when the runway is free.
        TransitionRule::new(TAXI_RUNWAY, Heading::TAKEOFF, RUNWAY_LINE_UP, RUNWAY),
        TransitionRule::new(TAXI_RUNWAY, Heading::HANGAR, TAXI_APRON, APRON),
        TransitionRule::new(TAXI_RUNWAY, Heading::terminal(1), TAXI_APRON, APRON),
        TransitionRule::new(TAXI_RUNWAY, Heading::terminal(2), TAXI_APRON, APRON),
        // Departure: the caller already holds the runway from lining up.
        TransitionRule::new(RUNWAY_LINE_UP, Heading::START_TAKEOFF, RUNWAY_ROLL, BlockMask::NOTHING),
        TransitionRule::new(RUNWAY_ROLL, Heading::END_TAKEOFF, CLIMB_OUT, BlockMask::NOTHING),
        TransitionRule::new(CLIMB_OUT, Heading::FLYING, CIRCUIT_N, BlockMask::NOTHING),
        // Circuit, clockwise; holding aircraft fly the same square.
        TransitionRule::new(CIRCUIT_N, Heading::FLYING, CIRCUIT_E, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_E, Heading::FLYING, CIRCUIT_S, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_S, Heading::FLYING, CIRCUIT_W, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_W, Heading::FLYING, CIRCUIT_N, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_N, Heading::HOLDING_PATTERN, CIRCUIT_E, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_E, Heading::HOLDING_PATTERN, CIRCUIT_S, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_S, Heading::HOLDING_PATTERN, CIRCUIT_W, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_W, Heading::HOLDING_PATTERN, CIRCUIT_N, BlockMask::NOTHING),
        // Landing: commit to the approach only with the runway reserved.
        TransitionRule::new(CIRCUIT_W, Heading::LANDING, FINAL_APPROACH, RUNWAY),
        TransitionRule::new(FINAL_APPROACH, Heading::END_LANDING, ROLLOUT, BlockMask::NOTHING),
        TransitionRule::new(FINAL_APPROACH, Heading::GO_AROUND, CIRCUIT_N, BlockMask::NOTHING),
        // Vacate onto the runway-side taxi node.
        TransitionRule::new(ROLLOUT, Heading::terminal(1), TAXI_RUNWAY, LINK),
        TransitionRule::new(ROLLOUT, Heading::terminal(2), TAXI_RUNWAY, LINK),
        TransitionRule::new(ROLLOUT, Heading::HANGAR, TAXI_RUNWAY, LINK),
    ]
}

/// Authored definition of the country airport.
pub fn country_spec() -> AirportSpec {
    AirportSpec {
        ty: AirportType::COUNTRY,
        layout: LayoutSpec {
            name: "country".to_string(),
            width: 4,
            height: 3,
            flags: AirportFlags::FIXED_WING,
            pad_usage: PadUsage::Neither,
            delta_z: 0,
            movement_table: movement_table(),
            num_terminals: 2,
            terminal_groups: smallvec![2],
            num_cargo_terminals: 0,
            cargo_groups: smallvec![],
            num_helipads: 0,
            helipad_groups: smallvec![],
            entry_points: Some([CIRCUIT_N, CIRCUIT_E, CIRCUIT_S, CIRCUIT_W]),
            heli_entry: None,
        },
        rules: rules(),
    }
}
