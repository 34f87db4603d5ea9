//! Resource block masks: the two-word bitmask behind all airport reservations.
//!
//! Every physical or logical element an aircraft can occupy exclusively
//! (hangars, terminals, helipads, runways, taxiway segments) owns one bit in
//! a [`BlockMask`] of two 64-bit words. A transition is legal exactly when
//! its guard mask does not intersect the airport's current occupancy, so the
//! whole reservation problem reduces to AND/compare on two words.
//!
//! # Bit layout
//!
//! Word 1:
//!
//! | bits  | meaning                                   |
//! |-------|-------------------------------------------|
//! | 0     | `NOTHING` sentinel (guards nothing)       |
//! | 1–8   | hangars 1–8                               |
//! | 9–44  | terminals 1–36                            |
//! | 45–56 | helipads 1–12, aliased with cargo 1–12    |
//! | 57–62 | runways 1–6                               |
//! | 63    | `AIRPORT_CLOSED`                          |
//!
//! Word 2:
//!
//! | bits  | meaning                                   |
//! |-------|-------------------------------------------|
//! | 0–1   | runways 7–8                               |
//! | 2–61  | taxiway segments 1–60                     |
//! | 62–63 | reserved, must stay clear in authored data|
//!
//! # Helipad / cargo aliasing
//!
//! Bits 45–56 of word 1 carry *two* names: an airport type uses them either
//! as helipads or as cargo terminals, never both. The per-type `PadUsage`
//! mode in the layout module fixes which meaning applies, and layout
//! validation rejects any type declaring both usages.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Maximum hangars per airport type.
pub const MAX_HANGARS: u8 = 8;
/// Maximum passenger terminals per airport type.
pub const MAX_TERMINALS: u8 = 36;
/// Maximum helipads per airport type (aliased with cargo terminals).
pub const MAX_HELIPADS: u8 = 12;
/// Maximum cargo terminals per airport type (aliased with helipads).
pub const MAX_CARGO_TERMINALS: u8 = 12;
/// Maximum runways per airport type.
pub const MAX_RUNWAYS: u8 = 8;
/// Maximum taxiway segments per airport type.
pub const MAX_TAXIWAYS: u8 = 60;

/// A set of exclusively-reservable airport resources.
///
/// Two 64-bit words; see the module docs for the bit layout. The zero value
/// (`BlockMask::EMPTY`) reserves nothing and is distinct from
/// [`BlockMask::NOTHING`], the sentinel bit carried by transitions that need
/// no resource at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockMask {
    word1: u64,
    word2: u64,
}

impl BlockMask {
    /// No bits set.
    pub const EMPTY: BlockMask = BlockMask { word1: 0, word2: 0 };

    /// Sentinel for transitions that reserve nothing (word 1, bit 0).
    ///
    /// Occupancy never holds this bit, so a `NOTHING` guard always passes.
    pub const NOTHING: BlockMask = BlockMask { word1: 1, word2: 0 };

    /// The whole airport is closed to traffic (word 1, bit 63).
    pub const AIRPORT_CLOSED: BlockMask = BlockMask {
        word1: 1 << 63,
        word2: 0,
    };

    /// The twelve aliased helipad/cargo bits (word 1, bits 45–56).
    pub const PAD_ALIAS: BlockMask = BlockMask {
        word1: 0xFFF << 45,
        word2: 0,
    };

    /// Word-2 bits that no authored guard may set (bits 62–63).
    pub const RESERVED: BlockMask = BlockMask {
        word1: 0,
        word2: 0b11 << 62,
    };

    /// Hangar `n` (1-based, up to [`MAX_HANGARS`]).
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum; stock tables are
    /// authored against these constructors so a bad index is a defect, not
    /// an input error.
    pub const fn hangar(n: u8) -> BlockMask {
        assert!(n >= 1 && n <= MAX_HANGARS, "hangar index out of range");
        BlockMask {
            word1: 1 << n,
            word2: 0,
        }
    }

    /// Terminal `n` (1-based, up to [`MAX_TERMINALS`]).
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum.
    pub const fn terminal(n: u8) -> BlockMask {
        assert!(n >= 1 && n <= MAX_TERMINALS, "terminal index out of range");
        BlockMask {
            word1: 1 << (8 + n),
            word2: 0,
        }
    }

    /// Helipad `n` (1-based, up to [`MAX_HELIPADS`]).
    ///
    /// Shares its bit with [`BlockMask::cargo`] of the same index; which
    /// meaning applies is fixed per airport type by its `PadUsage` mode.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum.
    pub const fn helipad(n: u8) -> BlockMask {
        assert!(n >= 1 && n <= MAX_HELIPADS, "helipad index out of range");
        BlockMask {
            word1: 1 << (44 + n),
            word2: 0,
        }
    }

    /// Cargo terminal `n` (1-based, up to [`MAX_CARGO_TERMINALS`]).
    ///
    /// Shares its bit with [`BlockMask::helipad`] of the same index.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum.
    pub const fn cargo(n: u8) -> BlockMask {
        assert!(
            n >= 1 && n <= MAX_CARGO_TERMINALS,
            "cargo terminal index out of range"
        );
        BlockMask {
            word1: 1 << (44 + n),
            word2: 0,
        }
    }

    /// Runway `n` (1-based, up to [`MAX_RUNWAYS`]).
    ///
    /// Runways 1–6 live in word 1 (runway 1 = bit 57); 7 and 8 spill into
    /// word 2.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum.
    pub const fn runway(n: u8) -> BlockMask {
        assert!(n >= 1 && n <= MAX_RUNWAYS, "runway index out of range");
        if n <= 6 {
            BlockMask {
                word1: 1 << (56 + n),
                word2: 0,
            }
        } else {
            BlockMask {
                word1: 0,
                word2: 1 << (n - 7),
            }
        }
    }

    /// Taxiway segment `n` (1-based, up to [`MAX_TAXIWAYS`]).
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or exceeds the maximum.
    pub const fn taxiway(n: u8) -> BlockMask {
        assert!(n >= 1 && n <= MAX_TAXIWAYS, "taxiway index out of range");
        BlockMask {
            word1: 0,
            word2: 1 << (1 + n),
        }
    }

    /// Both words as `(word1, word2)`.
    pub const fn words(self) -> (u64, u64) {
        (self.word1, self.word2)
    }

    /// Rebuild a mask from raw words (savegame / data-pack boundary).
    pub const fn from_words(word1: u64, word2: u64) -> BlockMask {
        BlockMask { word1, word2 }
    }

    /// True if no bit is set.
    pub const fn is_clear(self) -> bool {
        self.word1 == 0 && self.word2 == 0
    }

    /// True if any bit is shared with `other`.
    pub const fn intersects(self, other: BlockMask) -> bool {
        ((self.word1 & other.word1) | (self.word2 & other.word2)) != 0
    }

    /// True if every bit of `other` is also set in `self`.
    pub const fn contains(self, other: BlockMask) -> bool {
        self.word1 & other.word1 == other.word1 && self.word2 & other.word2 == other.word2
    }

    /// Number of set bits across both words.
    pub const fn count(self) -> u32 {
        self.word1.count_ones() + self.word2.count_ones()
    }

    /// `self` with every bit of `other` removed.
    pub const fn without(self, other: BlockMask) -> BlockMask {
        BlockMask {
            word1: self.word1 & !other.word1,
            word2: self.word2 & !other.word2,
        }
    }
}

impl BitOr for BlockMask {
    type Output = BlockMask;

    fn bitor(self, rhs: BlockMask) -> BlockMask {
        BlockMask {
            word1: self.word1 | rhs.word1,
            word2: self.word2 | rhs.word2,
        }
    }
}

impl BitOrAssign for BlockMask {
    fn bitor_assign(&mut self, rhs: BlockMask) {
        self.word1 |= rhs.word1;
        self.word2 |= rhs.word2;
    }
}

impl BitAnd for BlockMask {
    type Output = BlockMask;

    fn bitand(self, rhs: BlockMask) -> BlockMask {
        BlockMask {
            word1: self.word1 & rhs.word1,
            word2: self.word2 & rhs.word2,
        }
    }
}

impl Not for BlockMask {
    type Output = BlockMask;

    fn not(self) -> BlockMask {
        BlockMask {
            word1: !self.word1,
            word2: !self.word2,
        }
    }
}

impl fmt::Debug for BlockMask {
    /// Lists set bits by name, e.g. `BlockMask(HANG01|TERM02|RUNW01)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockMask(")?;
        let mut first = true;
        let mut emit = |f: &mut fmt::Formatter<'_>, name: fmt::Arguments<'_>| -> fmt::Result {
            if !first {
                write!(f, "|")?;
            }
            first = false;
            f.write_fmt(name)
        };
        if self.intersects(Self::NOTHING) {
            emit(f, format_args!("NOTHING"))?;
        }
        for n in 1..=MAX_HANGARS {
            if self.contains(Self::hangar(n)) {
                emit(f, format_args!("HANG{:02}", n))?;
            }
        }
        for n in 1..=MAX_TERMINALS {
            if self.contains(Self::terminal(n)) {
                emit(f, format_args!("TERM{:02}", n))?;
            }
        }
        for n in 1..=MAX_HELIPADS {
            if self.contains(Self::helipad(n)) {
                emit(f, format_args!("PAD{:02}", n))?;
            }
        }
        for n in 1..=MAX_RUNWAYS {
            if self.contains(Self::runway(n)) {
                emit(f, format_args!("RUNW{:02}", n))?;
            }
        }
        for n in 1..=MAX_TAXIWAYS {
            if self.contains(Self::taxiway(n)) {
                emit(f, format_args!("TAXI{:02}", n))?;
            }
        }
        if self.intersects(Self::AIRPORT_CLOSED) {
            emit(f, format_args!("CLOSED"))?;
        }
        if self.intersects(Self::RESERVED) {
            emit(f, format_args!("RESERVED"))?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_one_is_bit_57() {
        let (word1, word2) = BlockMask::runway(1).words();
        assert_eq!(word1, 1 << 57);
        assert_eq!(word2, 0);
    }

    #[test]
    fn test_hangar_bits() {
        assert_eq!(BlockMask::hangar(1).words(), (1 << 1, 0));
        assert_eq!(BlockMask::hangar(2).words(), (1 << 2, 0));
        assert_eq!(BlockMask::hangar(8).words(), (1 << 8, 0));
    }

    #[test]
    fn test_runway_seven_and_eight_spill_into_word2() {
        assert_eq!(BlockMask::runway(6).words(), (1 << 62, 0));
        assert_eq!(BlockMask::runway(7).words(), (0, 1 << 0));
        assert_eq!(BlockMask::runway(8).words(), (0, 1 << 1));
    }

    #[test]
    fn test_helipad_aliases_cargo() {
        for n in 1..=MAX_HELIPADS {
            assert_eq!(BlockMask::helipad(n), BlockMask::cargo(n));
            assert!(BlockMask::PAD_ALIAS.contains(BlockMask::helipad(n)));
        }
    }

    #[test]
    fn test_all_bits_distinct() {
        // Apart from the documented helipad/cargo alias, every named bit is
        // unique and inside the layout.
        let mut seen = BlockMask::EMPTY;
        let mut push = |mask: BlockMask| {
            assert!(!seen.intersects(mask), "bit collision at {:?}", mask);
            assert_eq!(mask.count(), 1);
            seen |= mask;
        };
        push(BlockMask::NOTHING);
        for n in 1..=MAX_HANGARS {
            push(BlockMask::hangar(n));
        }
        for n in 1..=MAX_TERMINALS {
            push(BlockMask::terminal(n));
        }
        for n in 1..=MAX_HELIPADS {
            push(BlockMask::helipad(n));
        }
        for n in 1..=MAX_RUNWAYS {
            push(BlockMask::runway(n));
        }
        for n in 1..=MAX_TAXIWAYS {
            push(BlockMask::taxiway(n));
        }
        push(BlockMask::AIRPORT_CLOSED);
        assert!(!seen.intersects(BlockMask::RESERVED));
    }

    #[test]
    fn test_set_operations() {
        let held = BlockMask::hangar(1) | BlockMask::runway(1);
        assert!(held.intersects(BlockMask::hangar(1)));
        assert!(!held.intersects(BlockMask::hangar(2)));
        assert!(held.contains(BlockMask::runway(1)));
        assert!(!held.contains(held | BlockMask::terminal(3)));
        assert_eq!(held.without(BlockMask::hangar(1)), BlockMask::runway(1));
        assert!(held.without(held).is_clear());
    }

    #[test]
    fn test_debug_names_bits() {
        let mask = BlockMask::hangar(1) | BlockMask::runway(1) | BlockMask::taxiway(12);
        let text = format!("{:?}", mask);
        assert!(text.contains("HANG01"), "got {}", text);
        assert!(text.contains("RUNW01"), "got {}", text);
        assert!(text.contains("TAXI12"), "got {}", text);
    }

    #[test]
    #[should_panic(expected = "hangar index out of range")]
    fn test_hangar_zero_panics() {
        let _ = BlockMask::hangar(0);
    }

    #[test]
    #[should_panic(expected = "taxiway index out of range")]
    fn test_taxiway_out_of_range_panics() {
        let _ = BlockMask::taxiway(61);
    }
}
