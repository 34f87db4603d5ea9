//! Commuter airport: a 5x4 short-strip field with helipads.
//!
//! Two hangars, three terminals in two groups, two helipads and one runway.
//! The hangar apron is where the two-hangar alternative chain lives: an
//! aircraft heading for "a hangar" takes hangar 1 if free, else hangar 2,
//! else waits on the apron. Helicopters arrive through their own entry
//! point and pick a free pad while hovering.

use smallvec::smallvec;

use crate::blocks::BlockMask;
use crate::geometry::Direction;
use crate::layout::{AirportFlags, LayoutSpec, PadUsage};
use crate::movement::{MovementFlags, MovementTarget};
use crate::registry::{AirportSpec, AirportType};
use crate::state_graph::{Heading, TransitionRule};

const HANGAR_1: u16 = 0;
const HANGAR_2: u16 = 1;
const TERM_1: u16 = 2;
const TERM_2: u16 = 3;
const TERM_3: u16 = 4;
const PAD_1: u16 = 5;
const PAD_2: u16 = 6;
const TAXI_HANGARS: u16 = 7;
const TAXI_TERMINALS: u16 = 8;
const TAXI_RUNWAY: u16 = 9;
const RUNWAY_LINE_UP: u16 = 10;
const RUNWAY_ROLL: u16 = 11;
const CLIMB_OUT: u16 = 12;
const CIRCUIT_N: u16 = 13;
const CIRCUIT_E: u16 = 14;
const CIRCUIT_S: u16 = 15;
const CIRCUIT_W: u16 = 16;
const FINAL_APPROACH: u16 = 17;
const ROLLOUT: u16 = 18;
const PAD_HOVER: u16 = 19;
const HELI_APPROACH: u16 = 20;

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
        // 0-1: hangars
        parked(4, 12, Direction::East),
        parked(4, 28, Direction::East),
        // 2-4: terminals along the north edge
        parked(28, 4, Direction::North),
        parked(44, 4, Direction::North),
        parked(60, 4, Direction::North),
        // 5-6: helipads; the pad surface is where the descent ends
        MovementTarget::new(
            68,
            24,
            MovementFlags::EXACT_POSITION | MovementFlags::HELI_LOWER,
            Direction::North,
        ),
        MovementTarget::new(
            68,
            40,
            MovementFlags::EXACT_POSITION | MovementFlags::HELI_LOWER,
            Direction::North,
        ),
        // 7-9: taxi nodes (hangar apron, terminal apron, runway holding point)
        taxi(16, 20, Direction::East),
        taxi(40, 20, Direction::East),
        taxi(64, 52, Direction::West),
        // 10: runway line-up
        MovementTarget::new(
            8,
            56,
            MovementFlags::EXACT_POSITION | MovementFlags::BRAKE,
            Direction::East,
        ),
        // 11: takeoff roll end
        airborne(72, 56, MovementFlags::TAKEOFF, Direction::East),
        // 12: climb out
        airborne(120, 48, MovementFlags::TAKEOFF, Direction::East),
        // 13-16: circuit slots (clockwise)
        airborne(128, -32, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::West),
        airborne(128, 96, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::North),
        airborne(-64, 96, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::East),
        airborne(-64, -32, MovementFlags::HOLD | MovementFlags::SLOW_TURN, Direction::South),
        // 17: final approach fix
        airborne(-56, 56, MovementFlags::LAND, Direction::East),
        // 18: touchdown and rollout
        MovementTarget::new(
            48,
            56,
            MovementFlags::LAND | MovementFlags::BRAKE,
            Direction::East,
        ),
        // 19: hover between the pads; ascent point for departures
        MovementTarget::new(
            68,
            32,
            MovementFlags::HELI_RAISE | MovementFlags::SLOW_TURN,
            Direction::North,
        ),
        // 20: helicopter approach fix
        airborne(100, 32, MovementFlags::SLOW_TURN, Direction::West),
    ]
}

fn rules() -> Vec<TransitionRule> {
    const APRON_H: BlockMask = BlockMask::taxiway(1);
    const APRON_T: BlockMask = BlockMask::taxiway(2);
    const HOLDING_POINT: BlockMask = BlockMask::taxiway(3);
    const RUNWAY: BlockMask = BlockMask::runway(1);

    let mut rules = vec![
        // Hangar pushbacks.
        TransitionRule::new(HANGAR_1, Heading::TAKEOFF, TAXI_HANGARS, APRON_H),
        TransitionRule::new(HANGAR_2, Heading::TAKEOFF, TAXI_HANGARS, APRON_H),
    ];
    for n in 1..=3 {
        rules.push(TransitionRule::new(
            HANGAR_1,
            Heading::terminal(n),
            TAXI_HANGARS,
            APRON_H,
        ));
        rules.push(TransitionRule::new(
            HANGAR_2,
            Heading::terminal(n),
            TAXI_HANGARS,
            APRON_H,
        ));
    }
    rules.extend([
        // Hangar apron: first free hangar wins, in authored order.
        TransitionRule::new(TAXI_HANGARS, Heading::HANGAR, HANGAR_1, BlockMask::hangar(1)),
        TransitionRule::new(TAXI_HANGARS, Heading::HANGAR, HANGAR_2, BlockMask::hangar(2)),
        TransitionRule::new(TAXI_HANGARS, Heading::terminal(1), TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_HANGARS, Heading::terminal(2), TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_HANGARS, Heading::terminal(3), TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_HANGARS, Heading::TAKEOFF, TAXI_TERMINALS, APRON_T),
        // Terminal apron.
        TransitionRule::new(TAXI_TERMINALS, Heading::terminal(1), TERM_1, BlockMask::terminal(1)),
        TransitionRule::new(TAXI_TERMINALS, Heading::terminal(2), TERM_2, BlockMask::terminal(2)),
        TransitionRule::new(TAXI_TERMINALS, Heading::terminal(3), TERM_3, BlockMask::terminal(3)),
        TransitionRule::new(TAXI_TERMINALS, Heading::HANGAR, TAXI_HANGARS, APRON_H),
        TransitionRule::new(TAXI_TERMINALS, Heading::TAKEOFF, TAXI_RUNWAY, HOLDING_POINT),
        // Terminal pushbacks.
        TransitionRule::new(TERM_1, Heading::TAKEOFF, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TERM_1, Heading::HANGAR, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TERM_2, Heading::TAKEOFF, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TERM_2, Heading::HANGAR, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TERM_3, Heading::TAKEOFF, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TERM_3, Heading::HANGAR, TAXI_TERMINALS, APRON_T),
        // Runway holding point; arrivals taxi back through it.
        TransitionRule::new(TAXI_RUNWAY, Heading::TAKEOFF, RUNWAY_LINE_UP, RUNWAY),
        TransitionRule::new(TAXI_RUNWAY, Heading::HANGAR, TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_RUNWAY, Heading::terminal(1), TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_RUNWAY, Heading::terminal(2), TAXI_TERMINALS, APRON_T),
        TransitionRule::new(TAXI_RUNWAY, Heading::terminal(3), TAXI_TERMINALS, APRON_T),
        // Departure; the runway is held from the line-up onwards.
        TransitionRule::new(RUNWAY_LINE_UP, Heading::START_TAKEOFF, RUNWAY_ROLL, BlockMask::NOTHING),
        TransitionRule::new(RUNWAY_ROLL, Heading::END_TAKEOFF, CLIMB_OUT, BlockMask::NOTHING),
        TransitionRule::new(CLIMB_OUT, Heading::FLYING, CIRCUIT_N, BlockMask::NOTHING),
        // Circuit, clockwise.
        TransitionRule::new(CIRCUIT_N, Heading::FLYING, CIRCUIT_E, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_E, Heading::FLYING, CIRCUIT_S, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_S, Heading::FLYING, CIRCUIT_W, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_W, Heading::FLYING, CIRCUIT_N, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_N, Heading::HOLDING_PATTERN, CIRCUIT_E, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_E, Heading::HOLDING_PATTERN, CIRCUIT_S, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_S, Heading::HOLDING_PATTERN, CIRCUIT_W, BlockMask::NOTHING),
        TransitionRule::new(CIRCUIT_W, Heading::HOLDING_PATTERN, CIRCUIT_N, BlockMask::NOTHING),
        // Landing.
        TransitionRule::new(CIRCUIT_W, Heading::LANDING, FINAL_APPROACH, RUNWAY),
        TransitionRule::new(FINAL_APPROACH, Heading::END_LANDING, ROLLOUT, BlockMask::NOTHING),
        TransitionRule::new(FINAL_APPROACH, Heading::GO_AROUND, CIRCUIT_N, BlockMask::NOTHING),
        TransitionRule::new(ROLLOUT, Heading::HANGAR, TAXI_RUNWAY, HOLDING_POINT),
        TransitionRule::new(ROLLOUT, Heading::terminal(1), TAXI_RUNWAY, HOLDING_POINT),
        TransitionRule::new(ROLLOUT, Heading::terminal(2), TAXI_RUNWAY, HOLDING_POINT),
        TransitionRule::new(ROLLOUT, Heading::terminal(3), TAXI_RUNWAY, HOLDING_POINT),
        // Helicopters: approach, hover, then drop onto the first free pad.
        TransitionRule::new(HELI_APPROACH, Heading::HELI_LANDING, PAD_HOVER, BlockMask::NOTHING),
        TransitionRule::new(HELI_APPROACH, Heading::FLYING, CIRCUIT_N, BlockMask::NOTHING),
        TransitionRule::new(PAD_HOVER, Heading::END_HELI_LANDING, PAD_1, BlockMask::helipad(1)),
        TransitionRule::new(PAD_HOVER, Heading::END_HELI_LANDING, PAD_2, BlockMask::helipad(2)),
        // Helicopter departure: ascend over the pads, then clear off.
        TransitionRule::new(PAD_1, Heading::HELI_TAKEOFF, PAD_HOVER, BlockMask::NOTHING),
        TransitionRule::new(PAD_2, Heading::HELI_TAKEOFF, PAD_HOVER, BlockMask::NOTHING),
        TransitionRule::new(PAD_HOVER, Heading::HELI_TAKEOFF, HELI_APPROACH, BlockMask::NOTHING),
    ]);
    rules
}

/// Authored definition of the commuter airport.
pub fn commuter_spec() -> AirportSpec {
    AirportSpec {
        ty: AirportType::COMMUTER,
        layout: LayoutSpec {
            name: "commuter".to_string(),
            width: 5,
            height: 4,
            flags: AirportFlags::FIXED_WING | AirportFlags::HELICOPTERS | AirportFlags::SHORT_STRIP,
            pad_usage: PadUsage::Helipads,
            delta_z: 0,
            movement_table: movement_table(),
            num_terminals: 3,
            terminal_groups: smallvec![2, 1],
            num_cargo_terminals: 0,
            cargo_groups: smallvec![],
            num_helipads: 2,
            helipad_groups: smallvec![2],
            entry_points: Some([CIRCUIT_N, CIRCUIT_E, CIRCUIT_S, CIRCUIT_W]),
            heli_entry: Some(HELI_APPROACH),
        },
        rules: rules(),
    }
}
