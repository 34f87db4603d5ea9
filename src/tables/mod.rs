//! Bundled stock airport definitions.
//!
//! Three authored types exercising the whole machinery: a grass field, a
//! short-strip commuter airport with helipads, and a helicopter-only
//! elevated pad. Each is pure data, a [`LayoutSpec`](crate::layout::LayoutSpec)
//! plus its transition rules, and goes through the same public build path
//! as an external data pack would.
//!
//! Authoring conventions used throughout:
//! - parked spots (`EXACT_POSITION`) own their block for as long as the
//!   aircraft sits there;
//! - taxi nodes are guarded by taxiway segment blocks;
//! - the runway block is acquired when lining up (takeoff) or when
//!   committing to final approach (landing), and released by the caller
//!   once the aircraft is airborne or has vacated onto a taxiway;
//! - circuit slots are free airspace (`NOTHING` guards), so holding never
//!   contends for anything.

mod commuter;
mod country;
mod heliport;

pub use commuter::commuter_spec;
pub use country::country_spec;
pub use heliport::heliport_spec;

use crate::registry::AirportSpec;

/// All stock airport specs, one per stock [`AirportType`](crate::registry::AirportType).
pub fn stock_specs() -> Vec<AirportSpec> {
    vec![country_spec(), commuter_spec(), heliport_spec()]
}
