//! groundnet - ground and air traffic control inside a single airport.
//!
//! Every airport type is a fixed finite-state graph over which many
//! independent aircraft move, one tick at a time. A two-word resource
//! bitmask keeps two aircraft from ever occupying the same physical element
//! (hangar, terminal, helipad, runway, taxiway segment): each transition in
//! the graph carries a guard mask and is legal only while every guarded
//! resource is free. A single canonical movement table per type serves all
//! four placement orientations through a pure rotation transform.
//!
//! The crate is the static core only: layouts and state graphs are built
//! once and shared read-only; the per-instance [`Occupancy`] is the sole
//! mutable state, and the embedding vehicle simulation drives it through
//! `test_free` / `acquire` / `release` around each resolved move.
//!
//! # Example
//!
//! ```
//! use groundnet::{AirportType, Heading, Occupancy, Registry};
//!
//! let registry = Registry::stock();
//! let airport = registry.get(AirportType::COUNTRY).expect("stock type");
//! let mut occupancy = Occupancy::new();
//!
//! // An aircraft in the hangar (position 0) wants terminal 1.
//! let clearance = airport
//!     .resolve(&occupancy, 0, Heading::terminal(1))
//!     .expect("route exists")
//!     .expect("empty airport is never blocked");
//!
//! // The caller acquires the guard, then moves the aircraft.
//! occupancy.acquire(clearance.guard).expect("just resolved as free");
//! ```

pub mod blocks;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod movement;
pub mod occupancy;
pub mod registry;
pub mod state_graph;
pub mod tables;

pub use blocks::BlockMask;
pub use geometry::{rotate_target, Direction, Rotation};
pub use layout::{
    AirportFlags, AirportLayout, Approach, LayoutError, LayoutSpec, PadUsage, PositionId,
};
pub use movement::{MovementFlags, MovementTarget};
pub use occupancy::{Occupancy, OccupancyError};
pub use registry::{
    AirportSpec, AirportType, BuildError, Clearance, CompiledAirport, Registry, RegistryError,
};
pub use state_graph::{
    GraphError, Heading, Resolution, ResolveError, StateGraph, Transition, TransitionRule,
};

/// Version of the groundnet library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
