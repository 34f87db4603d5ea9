//! Headings: the symbolic movement goals shared by every airport type.
//!
//! A heading names *what class of place* an aircraft wants next ("a hangar",
//! "terminal 5", "take off"), not a concrete position; each airport type's
//! graph maps `(position, heading)` pairs to its own positions. All types
//! share one fixed set of 72 values.

use std::fmt;

/// Symbolic movement goal. 72 fixed values shared across all airport types.
///
/// Raw value layout:
///
/// | raw    | meaning                    |
/// |--------|----------------------------|
/// | 0      | to a hangar                |
/// | 1–36   | to terminal 1–36           |
/// | 37–48  | to cargo terminal 1–12     |
/// | 49–60  | to helipad 1–12            |
/// | 61–71  | flight phases (see consts) |
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading(u8);

impl Heading {
    /// Number of distinct heading values.
    pub const COUNT: u8 = 72;

    /// Head for any free hangar.
    pub const HANGAR: Heading = Heading(0);
    /// Taxi to the runway and depart.
    pub const TAKEOFF: Heading = Heading(61);
    /// Lined up; begin the takeoff roll.
    pub const START_TAKEOFF: Heading = Heading(62);
    /// Rotate and climb out.
    pub const END_TAKEOFF: Heading = Heading(63);
    /// Helicopter vertical departure.
    pub const HELI_TAKEOFF: Heading = Heading(64);
    /// Circulate in the air near the airport.
    pub const FLYING: Heading = Heading(65);
    /// Begin the landing approach.
    pub const LANDING: Heading = Heading(66);
    /// Roll out and vacate the runway.
    pub const END_LANDING: Heading = Heading(67);
    /// Helicopter approach to a pad.
    pub const HELI_LANDING: Heading = Heading(68);
    /// Helicopter descent onto the pad surface.
    pub const END_HELI_LANDING: Heading = Heading(69);
    /// Enter the holding pattern.
    pub const HOLDING_PATTERN: Heading = Heading(70);
    /// Abort an approach and rejoin the circuit.
    pub const GO_AROUND: Heading = Heading(71);

    /// Heading for passenger terminal `n` (1-based, up to 36).
    pub const fn terminal(n: u8) -> Heading {
        assert!(n >= 1 && n <= 36, "terminal heading out of range");
        Heading(n)
    }

    /// Heading for cargo terminal `n` (1-based, up to 12).
    pub const fn cargo(n: u8) -> Heading {
        assert!(n >= 1 && n <= 12, "cargo heading out of range");
        Heading(36 + n)
    }

    /// Heading for helipad `n` (1-based, up to 12).
    pub const fn helipad(n: u8) -> Heading {
        assert!(n >= 1 && n <= 12, "helipad heading out of range");
        Heading(48 + n)
    }

    /// Validate a raw value from external data.
    pub fn from_raw(raw: u8) -> Option<Heading> {
        (raw < Self::COUNT).then_some(Heading(raw))
    }

    /// The raw value.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Terminal index (1-based) if this heads for a passenger terminal.
    pub const fn terminal_index(self) -> Option<u8> {
        if self.0 >= 1 && self.0 <= 36 {
            Some(self.0)
        } else {
            None
        }
    }

    /// Cargo terminal index (1-based) if this heads for a cargo terminal.
    pub const fn cargo_index(self) -> Option<u8> {
        if self.0 >= 37 && self.0 <= 48 {
            Some(self.0 - 36)
        } else {
            None
        }
    }

    /// Helipad index (1-based) if this heads for a helipad.
    pub const fn helipad_index(self) -> Option<u8> {
        if self.0 >= 49 && self.0 <= 60 {
            Some(self.0 - 48)
        } else {
            None
        }
    }
}

impl fmt::Debug for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading({})", self)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.terminal_index() {
            return write!(f, "TERM{:02}", n);
        }
        if let Some(n) = self.cargo_index() {
            return write!(f, "CARGO{:02}", n);
        }
        if let Some(n) = self.helipad_index() {
            return write!(f, "HELIPAD{:02}", n);
        }
        let name = match *self {
            Heading::HANGAR => "HANGAR",
            Heading::TAKEOFF => "TAKEOFF",
            Heading::START_TAKEOFF => "START_TAKEOFF",
            Heading::END_TAKEOFF => "END_TAKEOFF",
            Heading::HELI_TAKEOFF => "HELI_TAKEOFF",
            Heading::FLYING => "FLYING",
            Heading::LANDING => "LANDING",
            Heading::END_LANDING => "END_LANDING",
            Heading::HELI_LANDING => "HELI_LANDING",
            Heading::END_HELI_LANDING => "END_HELI_LANDING",
            Heading::HOLDING_PATTERN => "HOLDING_PATTERN",
            Heading::GO_AROUND => "GO_AROUND",
            _ => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_layout() {
        assert_eq!(Heading::HANGAR.raw(), 0);
        assert_eq!(Heading::terminal(1).raw(), 1);
        assert_eq!(Heading::terminal(36).raw(), 36);
        assert_eq!(Heading::cargo(1).raw(), 37);
        assert_eq!(Heading::cargo(12).raw(), 48);
        assert_eq!(Heading::helipad(1).raw(), 49);
        assert_eq!(Heading::helipad(12).raw(), 60);
        assert_eq!(Heading::GO_AROUND.raw(), Heading::COUNT - 1);
    }

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Heading::from_raw(0), Some(Heading::HANGAR));
        assert_eq!(Heading::from_raw(71), Some(Heading::GO_AROUND));
        assert_eq!(Heading::from_raw(72), None);
        assert_eq!(Heading::from_raw(255), None);
    }

    #[test]
    fn test_index_classification() {
        assert_eq!(Heading::terminal(5).terminal_index(), Some(5));
        assert_eq!(Heading::terminal(5).cargo_index(), None);
        assert_eq!(Heading::cargo(3).cargo_index(), Some(3));
        assert_eq!(Heading::helipad(12).helipad_index(), Some(12));
        assert_eq!(Heading::HANGAR.terminal_index(), None);
        assert_eq!(Heading::FLYING.helipad_index(), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Heading::HANGAR.to_string(), "HANGAR");
        assert_eq!(Heading::terminal(7).to_string(), "TERM07");
        assert_eq!(Heading::cargo(2).to_string(), "CARGO02");
        assert_eq!(Heading::helipad(11).to_string(), "HELIPAD11");
        assert_eq!(Heading::HOLDING_PATTERN.to_string(), "HOLDING_PATTERN");
    }

    #[test]
    #[should_panic(expected = "terminal heading out of range")]
    fn test_terminal_zero_panics() {
        let _ = Heading::terminal(0);
    }
}
