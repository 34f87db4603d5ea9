//! Integration tests for the airport traffic core.
//!
//! These tests drive the public API the way the vehicle simulation does:
//! - resolve / acquire / release cycles for whole ground movements
//! - hangar and runway contention between multiple aircraft
//! - helicopter pad selection through the aliased pad bits
//! - registry rebuild snapshots
//! - rotated placements of one canonical layout

use groundnet::{
    AirportType, BlockMask, Heading, Occupancy, Registry, Resolution, Rotation,
};

/// Minimal stand-in for one aircraft's reservation bookkeeping: resolve,
/// acquire the new guard, release what was held before. Mirrors the caller
/// contract from the occupancy docs.
struct Aircraft {
    position: u16,
    held: BlockMask,
}

impl Aircraft {
    fn new(position: u16) -> Self {
        Self {
            position,
            held: BlockMask::EMPTY,
        }
    }

    /// Try to advance one step towards `heading`. Returns whether we moved.
    fn step(
        &mut self,
        airport: &groundnet::CompiledAirport,
        occupancy: &mut Occupancy,
        heading: Heading,
    ) -> bool {
        let clearance = airport
            .resolve(occupancy, self.position, heading)
            .expect("heading must be routable from here");
        let Some(clearance) = clearance else {
            return false;
        };
        occupancy
            .acquire(clearance.guard)
            .expect("a cleared guard is free by definition");
        occupancy.release(self.held);
        self.held = clearance.guard.without(BlockMask::NOTHING);
        self.position = clearance.next_position;
        true
    }
}

#[test]
fn test_hangar_contention_scenario() {
    // Sanity check on the bit layout: RUNW01 is word 1 bit 57.
    assert_eq!(BlockMask::runway(1).words().0, 1 << 57);

    let registry = Registry::stock();
    let airport = registry.get(AirportType::COMMUTER).unwrap();
    let mut occupancy = Occupancy::new();

    // The commuter hangar apron is position 7; its HANGAR chain is
    // [guard = HANG01, guard = HANG02] in that order.
    let apron = 7;

    // Aircraft X sits in hangar 1.
    occupancy.acquire(BlockMask::hangar(1)).unwrap();

    let clearance = airport
        .resolve(&occupancy, apron, Heading::HANGAR)
        .unwrap()
        .expect("hangar 2 is still free");
    assert_eq!(clearance.guard, BlockMask::hangar(2));

    // Both hangars taken: blocked, which is not an error.
    occupancy.acquire(BlockMask::hangar(2)).unwrap();
    assert!(airport
        .resolve(&occupancy, apron, Heading::HANGAR)
        .unwrap()
        .is_none());

    // X vacates hangar 1: list order decides again, so hangar 1 wins.
    occupancy.release(BlockMask::hangar(1));
    let clearance = airport
        .resolve(&occupancy, apron, Heading::HANGAR)
        .unwrap()
        .expect("hangar 1 free again");
    assert_eq!(clearance.guard, BlockMask::hangar(1));
}

#[test]
fn test_full_departure_keeps_masks_disjoint() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let mut occupancy = Occupancy::new();

    // Aircraft parked in the hangar, holding its block.
    let mut aircraft = Aircraft::new(0);
    aircraft.held = BlockMask::hangar(1);
    occupancy.acquire(aircraft.held).unwrap();

    // Hangar -> apron -> runway-side taxi node -> line-up.
    for _ in 0..3 {
        assert!(aircraft.step(airport, &mut occupancy, Heading::TAKEOFF));
    }
    // Lined up: the runway is now held.
    assert!(occupancy.mask().contains(BlockMask::runway(1)));

    // Roll, lift off, join the circuit.
    assert!(aircraft.step(airport, &mut occupancy, Heading::START_TAKEOFF));
    assert!(aircraft.step(airport, &mut occupancy, Heading::END_TAKEOFF));
    assert!(aircraft.step(airport, &mut occupancy, Heading::FLYING));

    // Airborne on a NOTHING guard: every ground resource is released.
    assert!(occupancy.mask().is_clear());
}

#[test]
fn test_two_aircraft_never_hold_overlapping_masks() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let mut occupancy = Occupancy::new();

    // Both aircraft start at terminals and want the runway.
    let mut first = Aircraft::new(1);
    first.held = BlockMask::terminal(1);
    occupancy.acquire(first.held).unwrap();
    let mut second = Aircraft::new(2);
    second.held = BlockMask::terminal(2);
    occupancy.acquire(second.held).unwrap();

    // Sequential arbitration within a tick: first moves onto the apron, so
    // the second stays put this tick.
    assert!(first.step(airport, &mut occupancy, Heading::TAKEOFF));
    assert!(!second.step(airport, &mut occupancy, Heading::TAKEOFF));
    assert!(!first.held.intersects(second.held));

    // Next tick: first vacates the apron, then the second gets it.
    assert!(first.step(airport, &mut occupancy, Heading::TAKEOFF));
    assert!(second.step(airport, &mut occupancy, Heading::TAKEOFF));
    assert!(!first.held.intersects(second.held));
}

#[test]
fn test_landing_waits_for_runway() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let mut occupancy = Occupancy::new();

    // A departing aircraft holds the runway.
    occupancy.acquire(BlockMask::runway(1)).unwrap();

    // An arrival at the western circuit slot (11) cannot start the
    // approach, but keeps circulating on the same position.
    assert!(airport
        .resolve(&occupancy, 11, Heading::LANDING)
        .unwrap()
        .is_none());
    assert!(airport
        .resolve(&occupancy, 11, Heading::HOLDING_PATTERN)
        .unwrap()
        .is_some());

    // Runway freed: the approach clears and reserves it.
    occupancy.release(BlockMask::runway(1));
    let clearance = airport
        .resolve(&occupancy, 11, Heading::LANDING)
        .unwrap()
        .expect("runway free");
    assert_eq!(clearance.guard, BlockMask::runway(1));
}

#[test]
fn test_closed_airport_blocks_guarded_transitions() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let mut occupancy = Occupancy::new();
    occupancy.close();

    // Ground movement guards don't include the closed bit, but a caller
    // gating arrivals can test it directly.
    assert!(!occupancy.test_free(BlockMask::AIRPORT_CLOSED));
    occupancy.reopen();
    assert!(occupancy.test_free(BlockMask::AIRPORT_CLOSED));

    // And normal traffic is unaffected either way.
    assert!(airport
        .resolve(&occupancy, 0, Heading::TAKEOFF)
        .unwrap()
        .is_some());
}

#[test]
fn test_helicopter_pad_selection_on_commuter() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COMMUTER).unwrap();
    let mut occupancy = Occupancy::new();

    let hover = airport.layout().heli_entry().expect("commuter serves helicopters");
    // Approach to the hover point needs nothing.
    let clearance = airport
        .resolve(&occupancy, hover, Heading::HELI_LANDING)
        .unwrap()
        .expect("hover is free airspace");
    let hover_position = clearance.next_position;

    // Pad 1 occupied: the descent picks pad 2.
    occupancy.acquire(BlockMask::helipad(1)).unwrap();
    let clearance = airport
        .resolve(&occupancy, hover_position, Heading::END_HELI_LANDING)
        .unwrap()
        .expect("pad 2 free");
    assert_eq!(clearance.guard, BlockMask::helipad(2));

    // Cargo constructors name the same bits; the commuter declares helipad
    // usage, so its guards read as helipads.
    assert_eq!(BlockMask::helipad(2), BlockMask::cargo(2));
}

#[test]
fn test_unroutable_heading_is_a_data_error() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::HELIPORT).unwrap();
    let occupancy = Occupancy::new();

    // Fixed-wing takeoff from a heliport pad: no such chain.
    let result = airport.resolve(&occupancy, 0, Heading::TAKEOFF);
    assert!(result.is_err());
}

#[test]
fn test_rotated_placement_resolves_identically() {
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let occupancy = Occupancy::new();

    // Rotation changes coordinates, not the graph: the same query clears to
    // the same position, with the turn direction rotated along.
    let rotated = airport.layout().rotated(Rotation::Deg90);
    let clearance = airport
        .resolve(&occupancy, 0, Heading::TAKEOFF)
        .unwrap()
        .unwrap();
    let canonical_target = airport.layout().target(clearance.next_position).unwrap();
    let rotated_target = rotated.target(clearance.next_position).unwrap();
    assert_eq!(
        rotated_target.direction,
        canonical_target.direction.rotated(Rotation::Deg90)
    );
    assert_eq!(rotated_target.flags, canonical_target.flags);
}

#[test]
fn test_rebuild_is_an_independent_snapshot() {
    let registry = Registry::stock();
    let before: Vec<_> = registry.available_types().collect();

    let rebuilt = registry.rebuild(groundnet::tables::stock_specs());
    let after: Vec<_> = rebuilt.available_types().collect();
    assert_eq!(before, after);

    // A rebuild from broken data disables the broken type only.
    let mut specs = groundnet::tables::stock_specs();
    specs.retain(|spec| spec.ty != AirportType::COMMUTER);
    let partial = rebuilt.rebuild(specs);
    assert!(partial.get(AirportType::COUNTRY).is_ok());
    assert!(partial.get(AirportType::COMMUTER).is_err());
}

#[test]
fn test_resolution_outcomes_are_values_not_panics() {
    // Graph-level API: Blocked and Cleared are plain values; only a missing
    // chain is an error.
    let registry = Registry::stock();
    let airport = registry.get(AirportType::COUNTRY).unwrap();
    let graph = airport.graph();
    let mut occupancy = Occupancy::new();

    occupancy
        .acquire(BlockMask::terminal(1) | BlockMask::terminal(2))
        .unwrap();
    // Both terminals busy: taxiing in from the apron (3) is blocked.
    assert_eq!(
        graph.resolve(&occupancy, 3, Heading::terminal(1)).unwrap(),
        Resolution::Blocked
    );
    assert_eq!(
        graph.resolve(&occupancy, 3, Heading::terminal(2)).unwrap(),
        Resolution::Blocked
    );
    // The hangar is still reachable.
    assert!(matches!(
        graph.resolve(&occupancy, 3, Heading::HANGAR).unwrap(),
        Resolution::Cleared(_)
    ));
}
