//! The finite-state transition graph (FTA) governing aircraft movement.
//!
//! Authored transition triples compile into an arena of [`Edge`] records.
//! For each `(position, heading)` pair the edges form an alternative chain,
//! an ordered list of candidate transitions linked by arena indices, and
//! the resolver walks it first-fit against the airport's current occupancy.
//! Authoring order *is* the priority order: the direct taxi route is listed
//! before the bypass, so it wins whenever its resources are free.
//!
//! Resolution is pure. The resolver never touches occupancy; acquiring the
//! returned guard mask (and releasing the bits the aircraft held before) is
//! the vehicle simulation's job, which keeps the hot per-tick path at a few
//! bitmask tests and makes the whole thing trivially testable.

mod heading;

use std::collections::HashMap;

pub use heading::Heading;

use crate::blocks::BlockMask;
use crate::layout::PositionId;
use crate::occupancy::Occupancy;

/// Index of an edge in the graph's arena.
pub type EdgeId = u32;

/// One authored transition triple, the buildup form of an [`Edge`].
///
/// Rules sharing a `(position, heading)` pair chain into one alternative
/// list in the order supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// Position the aircraft currently occupies.
    pub position: PositionId,
    /// Heading this rule serves.
    pub heading: Heading,
    /// Position the aircraft moves to.
    pub next: PositionId,
    /// Resources that must all be free for the move to be legal.
    pub guard: BlockMask,
}

impl TransitionRule {
    /// Shorthand constructor used by the stock tables.
    pub const fn new(
        position: PositionId,
        heading: Heading,
        next: PositionId,
        guard: BlockMask,
    ) -> Self {
        Self {
            position,
            heading,
            next,
            guard,
        }
    }
}

/// Compiled transition record.
///
/// Lives in the graph's arena; `next_alt` links to the next candidate for
/// the same `(position, heading)` pair, preserving authoring order.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    next_position: PositionId,
    guard: BlockMask,
    next_alt: Option<EdgeId>,
}

/// Error type for graph compilation. All variants are data-authoring defects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// No transition rules were supplied at all.
    #[error("transition rule set is empty")]
    EmptyRules,

    /// A rule's source position is outside the movement table.
    #[error("rule {rule} starts at position {position}, which is out of range (num_elements = {num_elements})")]
    PositionOutOfRange {
        rule: usize,
        position: PositionId,
        num_elements: u16,
    },

    /// A rule's destination position is outside the movement table.
    #[error("rule {rule} targets position {position}, which is out of range (num_elements = {num_elements})")]
    NextOutOfRange {
        rule: usize,
        position: PositionId,
        num_elements: u16,
    },

    /// A rule's guard sets reserved mask bits.
    #[error("rule {rule} guard sets reserved mask bits")]
    ReservedGuardBits { rule: usize },
}

/// Error type for resolution.
///
/// Note that a *blocked* transition is not an error; it is the
/// [`Resolution::Blocked`] outcome. This error means the graph has no chain
/// at all for the pair, i.e. the heading is unreachable from that position
/// for this airport type: a data-consistency defect the caller should
/// surface, not retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No alternative chain is registered for `(position, heading)`.
    #[error("no route from position {position} for heading {heading}")]
    NoRoute {
        position: PositionId,
        heading: Heading,
    },
}

/// A legal transition chosen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Position to move to.
    pub next_position: PositionId,
    /// Guard resources the caller must acquire before moving.
    pub guard: BlockMask,
}

/// Outcome of resolving one `(position, heading)` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The first alternative whose guard is entirely free.
    Cleared(Transition),
    /// Every alternative's guard overlaps current occupancy; the aircraft
    /// stays put this tick and retries later. Normal traffic contention,
    /// not a fault.
    Blocked,
}

impl Resolution {
    /// The cleared transition, or `None` when blocked.
    pub fn cleared(self) -> Option<Transition> {
        match self {
            Resolution::Cleared(transition) => Some(transition),
            Resolution::Blocked => None,
        }
    }
}

/// Compiled state graph for one airport type.
///
/// Immutable after [`StateGraph::compile`]; shared read-only by every
/// instance of the type.
#[derive(Debug, Clone, PartialEq)]
pub struct StateGraph {
    edges: Vec<Edge>,
    heads: HashMap<(PositionId, Heading), EdgeId>,
    num_elements: u16,
}

impl StateGraph {
    /// Compile authored rules into the arena form.
    ///
    /// Alternative chains keep the authored order. `num_elements` is the
    /// owning layout's movement-table length and bounds every referenced
    /// position.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphError`] for an empty rule set, an out-of-range
    /// position reference, or a guard touching reserved mask bits.
    pub fn compile(rules: &[TransitionRule], num_elements: u16) -> Result<Self, GraphError> {
        if rules.is_empty() {
            return Err(GraphError::EmptyRules);
        }

        let mut edges = Vec::with_capacity(rules.len());
        let mut heads = HashMap::new();
        // Chain tails, so appending an alternative is O(1).
        let mut tails: HashMap<(PositionId, Heading), EdgeId> = HashMap::new();

        for (index, rule) in rules.iter().enumerate() {
            if rule.position >= num_elements {
                return Err(GraphError::PositionOutOfRange {
                    rule: index,
                    position: rule.position,
                    num_elements,
                });
            }
            if rule.next >= num_elements {
                return Err(GraphError::NextOutOfRange {
                    rule: index,
                    position: rule.next,
                    num_elements,
                });
            }
            if rule.guard.intersects(BlockMask::RESERVED) {
                return Err(GraphError::ReservedGuardBits { rule: index });
            }

            let edge_id = edges.len() as EdgeId;
            edges.push(Edge {
                next_position: rule.next,
                guard: rule.guard,
                next_alt: None,
            });

            let key = (rule.position, rule.heading);
            match tails.insert(key, edge_id) {
                Some(tail) => edges[tail as usize].next_alt = Some(edge_id),
                None => {
                    heads.insert(key, edge_id);
                }
            }
        }

        Ok(Self {
            edges,
            heads,
            num_elements,
        })
    }

    /// Number of positions this graph was compiled against.
    pub fn num_elements(&self) -> u16 {
        self.num_elements
    }

    /// Number of compiled edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Walk the alternative chain for `(position, heading)` and return the
    /// first transition whose guard does not intersect `occupancy`.
    ///
    /// Pure: never mutates occupancy, applies no heuristic beyond authored
    /// order, and two calls with identical arguments give identical results.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NoRoute`] if no chain exists for the pair at all,
    /// distinct from [`Resolution::Blocked`], which is ordinary contention.
    pub fn resolve(
        &self,
        occupancy: &Occupancy,
        position: PositionId,
        heading: Heading,
    ) -> Result<Resolution, ResolveError> {
        let head = self
            .heads
            .get(&(position, heading))
            .copied()
            .ok_or(ResolveError::NoRoute { position, heading })?;

        let mut cursor = Some(head);
        while let Some(edge_id) = cursor {
            let edge = &self.edges[edge_id as usize];
            if occupancy.test_free(edge.guard) {
                return Ok(Resolution::Cleared(Transition {
                    next_position: edge.next_position,
                    guard: edge.guard,
                }));
            }
            cursor = edge.next_alt;
        }

        tracing::trace!(position, heading = %heading, "all alternatives blocked");
        Ok(Resolution::Blocked)
    }

    /// The alternative chain for a pair, in priority order.
    ///
    /// Diagnostic accessor; the simulation itself only ever resolves.
    pub fn alternatives(
        &self,
        position: PositionId,
        heading: Heading,
    ) -> impl Iterator<Item = Transition> + '_ {
        let head = self.heads.get(&(position, heading)).copied();
        std::iter::successors(head, move |&edge_id| {
            self.edges[edge_id as usize].next_alt
        })
        .map(move |edge_id| {
            let edge = &self.edges[edge_id as usize];
            Transition {
                next_position: edge.next_position,
                guard: edge.guard,
            }
        })
    }

    /// All `(position, heading)` pairs that have at least one edge.
    pub fn served_pairs(&self) -> impl Iterator<Item = (PositionId, Heading)> + '_ {
        self.heads.keys().copied()
    }
}
