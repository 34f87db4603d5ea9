//! The airport type registry: compiled layouts and state graphs by type id.
//!
//! A [`Registry`] owns one [`CompiledAirport`] per available type. It is an
//! explicitly owned value passed to (or injected into) the simulation
//! context, not a process-wide singleton: rebuilding after a data reload
//! produces a *new* snapshot, so references into the old one stay valid
//! until the old snapshot is dropped and can never silently dangle.
//!
//! A type whose authored data fails validation is excluded from the build
//! (and warn-logged) rather than failing the whole registry; looking it up
//! reports [`RegistryError::Unavailable`].

use std::fmt;

use crate::geometry::Direction;
use crate::layout::{AirportLayout, LayoutError, LayoutSpec, PositionId};
use crate::occupancy::Occupancy;
use crate::state_graph::{
    GraphError, Heading, Resolution, ResolveError, StateGraph, TransitionRule,
};

/// Number of airport type ids, including the two reserved ones.
pub const NUM_AIRPORT_TYPES: u8 = 10;

/// Small integer id selecting an airport type.
///
/// Valid dynamic range is `0..NUM_AIRPORT_TYPES`; the top two values are
/// reserved for the placeholder ([`AirportType::DUMMY`]) and invalid
/// ([`AirportType::INVALID`]) types, which never resolve to a compiled
/// airport.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirportType(u8);

impl AirportType {
    /// Small grass field: one hangar, two terminals, one runway.
    pub const COUNTRY: AirportType = AirportType(0);
    /// Short-strip commuter field with helipads.
    pub const COMMUTER: AirportType = AirportType(1);
    /// Helicopter-only elevated pad.
    pub const HELIPORT: AirportType = AirportType(2);
    /// Reserved placeholder type; never available.
    pub const DUMMY: AirportType = AirportType(NUM_AIRPORT_TYPES - 2);
    /// Reserved invalid sentinel; never available.
    pub const INVALID: AirportType = AirportType(NUM_AIRPORT_TYPES - 1);

    /// Validate a raw id from external data.
    ///
    /// Reserved ids are accepted here (they are real ids), but looking
    /// them up always fails with [`RegistryError::InvalidType`].
    pub fn from_raw(raw: u8) -> Option<AirportType> {
        (raw < NUM_AIRPORT_TYPES).then_some(AirportType(raw))
    }

    /// The raw id.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// True for the two reserved sentinel ids.
    pub const fn is_reserved(self) -> bool {
        self.0 >= NUM_AIRPORT_TYPES - 2
    }
}

impl fmt::Debug for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AirportType::DUMMY => write!(f, "AirportType::DUMMY"),
            AirportType::INVALID => write!(f, "AirportType::INVALID"),
            AirportType(raw) => write!(f, "AirportType({})", raw),
        }
    }
}

/// Error type for registry lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The id is reserved or outside the dynamic range.
    #[error("airport type {0:?} is not a valid lookup target")]
    InvalidType(AirportType),

    /// The id is valid but the type is disabled or failed to build.
    #[error("airport type {0:?} is not available")]
    Unavailable(AirportType),
}

/// Error type for compiling one airport type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The layout tables failed validation.
    #[error("layout: {0}")]
    Layout(#[from] LayoutError),

    /// The transition rules failed compilation.
    #[error("state graph: {0}")]
    Graph(#[from] GraphError),
}

/// Authored definition of one airport type: layout tables plus transitions.
#[derive(Debug, Clone)]
pub struct AirportSpec {
    /// Type id this spec defines.
    pub ty: AirportType,
    /// Layout buildup tables.
    pub layout: LayoutSpec,
    /// Transition triples in priority order.
    pub rules: Vec<TransitionRule>,
}

/// A transition cleared for one aircraft, with the arrival turn direction.
///
/// This is the full per-tick answer for one aircraft: where to go, which
/// resources to acquire first, and which way to face on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clearance {
    /// Position to move to.
    pub next_position: PositionId,
    /// Guard resources the caller must acquire before moving.
    pub guard: crate::blocks::BlockMask,
    /// Compass direction to assume after arrival, from the destination's
    /// movement target.
    pub direction: Direction,
}

/// One airport type's compiled layout and state graph, bundled.
#[derive(Debug, Clone)]
pub struct CompiledAirport {
    layout: AirportLayout,
    graph: StateGraph,
}

impl CompiledAirport {
    /// Validate and compile one authored spec.
    pub fn build(layout: LayoutSpec, rules: &[TransitionRule]) -> Result<Self, BuildError> {
        let layout = AirportLayout::build(layout)?;
        let graph = StateGraph::compile(rules, layout.num_elements())?;
        Ok(Self { layout, graph })
    }

    /// The validated layout.
    pub fn layout(&self) -> &AirportLayout {
        &self.layout
    }

    /// The compiled state graph.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Resolve a movement query and enrich it with the arrival direction.
    ///
    /// Returns `Ok(None)` when every alternative is blocked: the aircraft
    /// holds its position this tick and retries. Pure, like
    /// [`StateGraph::resolve`].
    ///
    /// # Errors
    ///
    /// [`ResolveError::NoRoute`] when the heading is unreachable from the
    /// position for this type (a data-consistency defect).
    pub fn resolve(
        &self,
        occupancy: &Occupancy,
        position: PositionId,
        heading: Heading,
    ) -> Result<Option<Clearance>, ResolveError> {
        match self.graph.resolve(occupancy, position, heading)? {
            Resolution::Cleared(transition) => {
                // Compilation bounded next_position by the table length.
                let target = self
                    .layout
                    .target(transition.next_position)
                    .expect("compiled graph positions are in range");
                Ok(Some(Clearance {
                    next_position: transition.next_position,
                    guard: transition.guard,
                    direction: target.direction,
                }))
            }
            Resolution::Blocked => Ok(None),
        }
    }
}

/// Immutable snapshot of every compiled airport type.
pub struct Registry {
    airports: Vec<Option<CompiledAirport>>,
}

impl Registry {
    /// Compile a registry from authored specs.
    ///
    /// Specs for reserved ids are skipped with a warning. A spec that fails
    /// validation leaves its slot unavailable; the rest of the registry
    /// still builds (a bad data pack disables one type, not the game).
    pub fn build(specs: Vec<AirportSpec>) -> Registry {
        let mut airports: Vec<Option<CompiledAirport>> = Vec::new();
        airports.resize_with(NUM_AIRPORT_TYPES as usize, || None);

        for spec in specs {
            if spec.ty.is_reserved() {
                tracing::warn!(ty = ?spec.ty, "spec supplied for reserved airport type, skipping");
                continue;
            }
            let name = spec.layout.name.clone();
            match CompiledAirport::build(spec.layout, &spec.rules) {
                Ok(compiled) => {
                    let slot = &mut airports[spec.ty.raw() as usize];
                    if slot.is_some() {
                        tracing::warn!(
                            ty = ?spec.ty,
                            name = %name,
                            "duplicate spec for airport type, replacing the earlier build"
                        );
                    }
                    tracing::info!(
                        ty = ?spec.ty,
                        name = %name,
                        positions = compiled.graph().num_elements(),
                        edges = compiled.graph().num_edges(),
                        "compiled airport type"
                    );
                    *slot = Some(compiled);
                }
                Err(error) => {
                    tracing::warn!(
                        ty = ?spec.ty,
                        name = %name,
                        %error,
                        "airport type failed to build, marking unavailable"
                    );
                }
            }
        }

        Registry { airports }
    }

    /// Build the stock registry bundled with the crate.
    pub fn stock() -> Registry {
        Self::build(crate::tables::stock_specs())
    }

    /// Discard this snapshot and compile a fresh one.
    ///
    /// Consumes `self` to make the contract explicit: references into the
    /// old snapshot cannot outlive it, so callers re-fetch after a reload.
    pub fn rebuild(self, specs: Vec<AirportSpec>) -> Registry {
        Self::build(specs)
    }

    /// Look up a compiled airport type.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidType`] for reserved ids and
    /// [`RegistryError::Unavailable`] for valid ids with no compiled data.
    pub fn get(&self, ty: AirportType) -> Result<&CompiledAirport, RegistryError> {
        if ty.is_reserved() {
            return Err(RegistryError::InvalidType(ty));
        }
        self.airports[ty.raw() as usize]
            .as_ref()
            .ok_or(RegistryError::Unavailable(ty))
    }

    /// All currently available type ids, ascending.
    pub fn available_types(&self) -> impl Iterator<Item = AirportType> + '_ {
        self.airports
            .iter()
            .enumerate()
            .filter_map(|(raw, slot)| slot.as_ref().map(|_| AirportType(raw as u8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockMask;

    #[test]
    fn test_type_id_range() {
        assert_eq!(AirportType::from_raw(0), Some(AirportType::COUNTRY));
        assert_eq!(AirportType::from_raw(NUM_AIRPORT_TYPES), None);
        assert!(AirportType::DUMMY.is_reserved());
        assert!(AirportType::INVALID.is_reserved());
        assert!(!AirportType::HELIPORT.is_reserved());
    }

    #[test]
    fn test_stock_registry_builds_all_stock_types() {
        let registry = Registry::stock();
        let available: Vec<_> = registry.available_types().collect();
        assert_eq!(
            available,
            vec![
                AirportType::COUNTRY,
                AirportType::COMMUTER,
                AirportType::HELIPORT,
            ]
        );
    }

    #[test]
    fn test_reserved_ids_are_invalid_lookups() {
        let registry = Registry::stock();
        assert_eq!(
            registry.get(AirportType::INVALID).unwrap_err(),
            RegistryError::InvalidType(AirportType::INVALID)
        );
        assert_eq!(
            registry.get(AirportType::DUMMY).unwrap_err(),
            RegistryError::InvalidType(AirportType::DUMMY)
        );
    }

    #[test]
    fn test_unbuilt_slot_is_unavailable() {
        let registry = Registry::stock();
        let empty_slot = AirportType::from_raw(7).unwrap();
        assert_eq!(
            registry.get(empty_slot).unwrap_err(),
            RegistryError::Unavailable(empty_slot)
        );
    }

    #[test]
    fn test_malformed_spec_disables_only_its_type() {
        let mut specs = crate::tables::stock_specs();
        // Break the heliport: drop its helicopter entry point.
        for spec in &mut specs {
            if spec.ty == AirportType::HELIPORT {
                spec.layout.heli_entry = None;
            }
        }
        let registry = Registry::build(specs);
        assert!(registry.get(AirportType::COUNTRY).is_ok());
        assert_eq!(
            registry.get(AirportType::HELIPORT).unwrap_err(),
            RegistryError::Unavailable(AirportType::HELIPORT)
        );
    }

    #[test]
    fn test_duplicate_type_id_last_spec_wins() {
        let mut specs = crate::tables::stock_specs();
        let mut replacement = crate::tables::country_spec();
        replacement.layout.name = "country mk2".to_string();
        specs.push(replacement);

        let registry = Registry::build(specs);
        let airport = registry.get(AirportType::COUNTRY).unwrap();
        assert_eq!(airport.layout().name(), "country mk2");
    }

    #[test]
    fn test_rebuild_returns_fresh_snapshot() {
        let registry = Registry::stock();
        let rebuilt = registry.rebuild(crate::tables::stock_specs());
        assert!(rebuilt.get(AirportType::COUNTRY).is_ok());
    }

    #[test]
    fn test_clearance_includes_arrival_direction() {
        let registry = Registry::stock();
        let airport = registry.get(AirportType::COUNTRY).unwrap();
        let occupancy = Occupancy::new();

        // Hangar position 0 heads for terminal 1 via the apron taxi node.
        let clearance = airport
            .resolve(&occupancy, 0, Heading::terminal(1))
            .unwrap()
            .expect("empty airport cannot be blocked");
        let target = airport.layout().target(clearance.next_position).unwrap();
        assert_eq!(clearance.direction, target.direction);
        assert!(!clearance.guard.intersects(BlockMask::RESERVED));
    }
}
