//! Rotation transforms for airport movement tables.
//!
//! Airports are authored once in a canonical 0° orientation; placing one
//! rotated reuses the same table through [`rotate_target`]. The transform is
//! pure and bijective: rotating by `r` and then by `r.inverse()` (with the
//! footprint extents swapped for quarter turns) restores the original.

use crate::movement::MovementTarget;

/// Movement-table units per tile edge.
pub const TILE_SIZE: i16 = 16;

/// Eight-way compass direction an aircraft can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in clockwise order starting from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Clockwise octant index, north = 0.
    pub fn octant(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::NorthEast => 1,
            Direction::East => 2,
            Direction::SouthEast => 3,
            Direction::South => 4,
            Direction::SouthWest => 5,
            Direction::West => 6,
            Direction::NorthWest => 7,
        }
    }

    /// Direction reached by turning `steps` octants clockwise.
    pub fn rotated_octants(self, steps: u8) -> Direction {
        Self::ALL[((self.octant() + steps) % 8) as usize]
    }

    /// Direction after applying a footprint rotation.
    pub fn rotated(self, rotation: Rotation) -> Direction {
        self.rotated_octants(rotation.octant_steps())
    }
}

/// Clockwise quarter-turn rotation of an airport footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Canonical orientation; identity transform.
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The rotation that undoes this one.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Deg0 => Rotation::Deg0,
            Rotation::Deg90 => Rotation::Deg270,
            Rotation::Deg180 => Rotation::Deg180,
            Rotation::Deg270 => Rotation::Deg90,
        }
    }

    /// Clockwise octant steps applied to facing directions (2 per 90°).
    pub fn octant_steps(self) -> u8 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 2,
            Rotation::Deg180 => 4,
            Rotation::Deg270 => 6,
        }
    }

    /// Whether this rotation swaps the footprint's width and height.
    pub fn swaps_extents(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Rotate a canonical movement target into a placed orientation.
///
/// `width` and `height` are the *unrotated* footprint extents in tiles. The
/// coordinate transform is affine, so airborne targets outside the footprint
/// rotate consistently with on-ground ones.
///
/// With `w = 16 * width` and `h = 16 * height`:
///
/// | rotation | x'            | y'            |
/// |----------|---------------|---------------|
/// | 0°       | `x`           | `y`           |
/// | 90°      | `h - 1 - y`   | `x`           |
/// | 180°     | `w - 1 - x`   | `h - 1 - y`   |
/// | 270°     | `y`           | `w - 1 - x`   |
pub fn rotate_target(
    target: &MovementTarget,
    rotation: Rotation,
    width: u8,
    height: u8,
) -> MovementTarget {
    let w = width as i16 * TILE_SIZE;
    let h = height as i16 * TILE_SIZE;
    let (x, y) = match rotation {
        Rotation::Deg0 => (target.x, target.y),
        Rotation::Deg90 => (h - 1 - target.y, target.x),
        Rotation::Deg180 => (w - 1 - target.x, h - 1 - target.y),
        Rotation::Deg270 => (target.y, w - 1 - target.x),
    };
    MovementTarget {
        x,
        y,
        flags: target.flags,
        direction: target.direction.rotated(rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MovementFlags;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    fn sample_target(x: i16, y: i16, direction: Direction) -> MovementTarget {
        MovementTarget::new(x, y, MovementFlags::BRAKE, direction)
    }

    #[test]
    fn test_deg0_is_identity() {
        let target = sample_target(10, 25, Direction::SouthEast);
        assert_eq!(rotate_target(&target, Rotation::Deg0, 4, 3), target);
    }

    #[test]
    fn test_deg90_maps_corners() {
        // 4x3 footprint: 64x48 units. North-west corner goes to north-east.
        let nw = sample_target(0, 0, Direction::North);
        let rotated = rotate_target(&nw, Rotation::Deg90, 4, 3);
        assert_eq!((rotated.x, rotated.y), (47, 0));
        assert_eq!(rotated.direction, Direction::East);
    }

    #[test]
    fn test_deg180_maps_corners() {
        let nw = sample_target(0, 0, Direction::North);
        let rotated = rotate_target(&nw, Rotation::Deg180, 4, 3);
        assert_eq!((rotated.x, rotated.y), (63, 47));
        assert_eq!(rotated.direction, Direction::South);
    }

    #[test]
    fn test_roundtrip_all_rotations() {
        // Rotating and then applying the inverse (with extents swapped for
        // quarter turns) must restore the original exactly, flags included.
        let targets = [
            sample_target(0, 0, Direction::North),
            sample_target(63, 47, Direction::SouthWest),
            sample_target(12, 40, Direction::NorthWest),
            // Airborne target outside the footprint.
            sample_target(-32, 80, Direction::East),
        ];
        for target in &targets {
            for rotation in ROTATIONS {
                let (w, h) = if rotation.swaps_extents() {
                    (3, 4)
                } else {
                    (4, 3)
                };
                let there = rotate_target(target, rotation, 4, 3);
                let back = rotate_target(&there, rotation.inverse(), w, h);
                assert_eq!(back, *target, "round trip failed for {:?}", rotation);
            }
        }
    }

    #[test]
    fn test_direction_rotation_cycle() {
        for direction in Direction::ALL {
            assert_eq!(direction.rotated(Rotation::Deg0), direction);
            let quarter = direction.rotated(Rotation::Deg90);
            assert_eq!(quarter.rotated(Rotation::Deg270), direction);
            assert_eq!(
                direction.rotated(Rotation::Deg180),
                quarter.rotated(Rotation::Deg90)
            );
        }
    }

    #[test]
    fn test_flags_survive_rotation() {
        let target = MovementTarget::new(
            5,
            5,
            MovementFlags::NO_SPEED_CLAMP | MovementFlags::HOLD,
            Direction::West,
        );
        let rotated = rotate_target(&target, Rotation::Deg270, 2, 2);
        assert_eq!(rotated.flags, target.flags);
    }
}
