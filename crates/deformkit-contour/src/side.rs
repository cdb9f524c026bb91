//! Side and direction algebra.
//!
//! Sides are small bitmasks. Bit `0b1000` marks an axis-bound side, the two
//! low bits pick the side on that axis, and the high bit [`OPPOSITE_BIT`]
//! selects the mirrored side:
//!
//! ```text
//!              primary             opposite (| 0b100000)
//! top          0b001000            bottom        0b101000
//! left         0b001001            right         0b101001
//! left-top     0b001010            right-bottom  0b101010
//! right-top    0b001011            left-bottom   0b101011
//! ```
//!
//! Toggling the high bit always yields the geometric opposite, so opposite
//! checks reduce to one XOR. Edges have low bits `0b0x`, corners `0b1x`.
//! The edges of a corner and the corners of an edge are listed for the two
//! primary corners / edges only; the mirrored ones are derived by toggling
//! the high bit.

use smallvec::SmallVec;
use std::fmt;

/// Bit that separates a side from its opposite.
pub const OPPOSITE_BIT: u8 = 0b10_0000;

const AXIS_BIT: u8 = 0b00_1000;
const CORNER_BIT: u8 = 0b00_0010;

/// A side, corner or the whole contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    Top = 0b00_1000,
    Left = 0b00_1001,
    LeftTop = 0b00_1010,
    RightTop = 0b00_1011,
    Bottom = 0b10_1000,
    Right = 0b10_1001,
    RightBottom = 0b10_1010,
    LeftBottom = 0b10_1011,
    /// Every point of the contour. Carries no axis bit and is its own opposite.
    All = 0b00_0111,
}

impl Side {
    /// The eight addressable sides, edges first.
    pub const SIDES: [Side; 8] = [
        Side::Top,
        Side::Left,
        Side::Bottom,
        Side::Right,
        Side::LeftTop,
        Side::RightTop,
        Side::RightBottom,
        Side::LeftBottom,
    ];

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn from_bits(bits: u8) -> Option<Side> {
        match bits {
            0b00_1000 => Some(Side::Top),
            0b00_1001 => Some(Side::Left),
            0b00_1010 => Some(Side::LeftTop),
            0b00_1011 => Some(Side::RightTop),
            0b10_1000 => Some(Side::Bottom),
            0b10_1001 => Some(Side::Right),
            0b10_1010 => Some(Side::RightBottom),
            0b10_1011 => Some(Side::LeftBottom),
            0b00_0111 => Some(Side::All),
            _ => None,
        }
    }

    /// Geometric opposite: toggles [`OPPOSITE_BIT`]. `All` maps to itself.
    pub fn opposite(self) -> Side {
        if self == Side::All {
            return Side::All;
        }
        // Every axis-bound pattern has a mirrored variant.
        Side::from_bits(self.bits() ^ OPPOSITE_BIT).unwrap_or(self)
    }

    /// True when `self` and `other` face each other.
    pub fn is_opposite(self, other: Side) -> bool {
        self.bits() ^ other.bits() == OPPOSITE_BIT
    }

    /// True when `self` and `other` are equal or face each other.
    pub fn is_opposite_or_same(self, other: Side) -> bool {
        (self.bits() ^ other.bits()) & !OPPOSITE_BIT == 0
    }

    /// Top, left, left-top and right-top.
    pub fn is_primary(self) -> bool {
        self.is_axis_bound() && self.bits() & OPPOSITE_BIT == 0
    }

    fn is_axis_bound(self) -> bool {
        self.bits() & AXIS_BIT != 0
    }

    pub fn is_edge(self) -> bool {
        self.is_axis_bound() && self.bits() & CORNER_BIT == 0
    }

    pub fn is_corner(self) -> bool {
        self.is_axis_bound() && self.bits() & CORNER_BIT != 0
    }

    /// Left and right edges, whose movement changes the width.
    pub fn is_horizontal_edge(self) -> bool {
        self.is_edge() && self.is_opposite_or_same(Side::Left)
    }

    /// Top and bottom edges, whose movement changes the height.
    pub fn is_vertical_edge(self) -> bool {
        self.is_edge() && self.is_opposite_or_same(Side::Top)
    }

    /// The corners bounding an edge, or the corner itself.
    pub fn corners(self) -> SmallVec<[Side; 4]> {
        match self {
            Side::All => SmallVec::from_slice(&[
                Side::LeftTop,
                Side::RightTop,
                Side::RightBottom,
                Side::LeftBottom,
            ]),
            Side::Top => SmallVec::from_slice(&[Side::LeftTop, Side::RightTop]),
            Side::Left => SmallVec::from_slice(&[Side::LeftTop, Side::LeftBottom]),
            edge if edge.is_edge() => edge
                .opposite()
                .corners()
                .into_iter()
                .map(Side::opposite)
                .collect(),
            corner => SmallVec::from_slice(&[corner]),
        }
    }

    /// For a corner, its `(horizontal, vertical)` edges: the left/right edge
    /// first and the top/bottom edge second.
    pub fn edges(self) -> Option<(Side, Side)> {
        match self {
            Side::LeftTop => Some((Side::Left, Side::Top)),
            Side::RightTop => Some((Side::Right, Side::Top)),
            corner if corner.is_corner() => corner
                .opposite()
                .edges()
                .map(|(h, v)| (h.opposite(), v.opposite())),
            _ => None,
        }
    }

    /// Sides that share a corner with `self` without being the same side or
    /// its opposite. For corners this means sharing an edge.
    pub fn is_adjacent(self, other: Side) -> bool {
        if self == Side::All || other == Side::All || self.is_opposite_or_same(other) {
            return false;
        }
        match (self.is_edge(), other.is_edge()) {
            (true, true) => true,
            (true, false) => self.corners().contains(&other),
            (false, true) => other.corners().contains(&self),
            (false, false) => {
                let (h1, v1) = self.edges().unwrap_or((self, self));
                let (h2, v2) = other.edges().unwrap_or((other, other));
                h1 == h2 || v1 == v2
            }
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Left => "left",
            Side::LeftTop => "left-top",
            Side::RightTop => "right-top",
            Side::Bottom => "bottom",
            Side::Right => "right",
            Side::RightBottom => "right-bottom",
            Side::LeftBottom => "left-bottom",
            Side::All => "all",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_patterns() {
        assert_eq!(Side::Top.bits(), 0b1000);
        assert_eq!(Side::Left.bits(), 0b1001);
        assert_eq!(Side::LeftTop.bits(), 0b1010);
        assert_eq!(Side::RightTop.bits(), 0b1011);
        for side in Side::SIDES {
            assert_eq!(Side::from_bits(side.bits()), Some(side));
        }
        assert_eq!(Side::from_bits(0), None);
    }

    #[test]
    fn test_opposite_table() {
        let table = [
            (Side::Top, Side::Bottom),
            (Side::Left, Side::Right),
            (Side::LeftTop, Side::RightBottom),
            (Side::RightTop, Side::LeftBottom),
        ];
        for (a, b) in table {
            assert_eq!(a.opposite(), b);
            assert_eq!(b.opposite(), a);
            assert!(a.is_opposite(b));
            assert!(b.is_opposite(a));
            assert!(a.is_opposite_or_same(b));
            assert!(a.is_primary());
            assert!(!b.is_primary());
        }
        assert_eq!(Side::All.opposite(), Side::All);
    }

    #[test]
    fn test_opposite_relation_is_exhaustive() {
        for a in Side::SIDES {
            let mut opposites = 0;
            for b in Side::SIDES {
                if a.is_opposite(b) {
                    opposites += 1;
                    assert_eq!(a.opposite(), b);
                }
                assert_eq!(a.is_opposite_or_same(b), a == b || a.is_opposite(b));
            }
            assert_eq!(opposites, 1, "{} must have exactly one opposite", a);
            assert!(!a.is_opposite(a));
        }
    }

    #[test]
    fn test_edge_and_corner_classification() {
        for side in [Side::Top, Side::Left, Side::Bottom, Side::Right] {
            assert!(side.is_edge());
            assert!(!side.is_corner());
        }
        for side in [
            Side::LeftTop,
            Side::RightTop,
            Side::RightBottom,
            Side::LeftBottom,
        ] {
            assert!(side.is_corner());
            assert!(!side.is_edge());
        }
        assert!(!Side::All.is_edge());
        assert!(!Side::All.is_corner());

        assert!(Side::Left.is_horizontal_edge());
        assert!(Side::Right.is_horizontal_edge());
        assert!(Side::Top.is_vertical_edge());
        assert!(Side::Bottom.is_vertical_edge());
        assert!(!Side::LeftTop.is_horizontal_edge());
    }

    #[test]
    fn test_corners_of_edges() {
        assert_eq!(
            Side::Top.corners().as_slice(),
            &[Side::LeftTop, Side::RightTop]
        );
        assert_eq!(
            Side::Left.corners().as_slice(),
            &[Side::LeftTop, Side::LeftBottom]
        );
        assert_eq!(
            Side::Bottom.corners().as_slice(),
            &[Side::RightBottom, Side::LeftBottom]
        );
        assert_eq!(
            Side::Right.corners().as_slice(),
            &[Side::RightBottom, Side::RightTop]
        );
        assert_eq!(Side::LeftTop.corners().as_slice(), &[Side::LeftTop]);
        assert_eq!(Side::All.corners().len(), 4);
    }

    #[test]
    fn test_edges_of_corners() {
        assert_eq!(Side::LeftTop.edges(), Some((Side::Left, Side::Top)));
        assert_eq!(Side::RightTop.edges(), Some((Side::Right, Side::Top)));
        assert_eq!(Side::RightBottom.edges(), Some((Side::Right, Side::Bottom)));
        assert_eq!(Side::LeftBottom.edges(), Some((Side::Left, Side::Bottom)));
        assert_eq!(Side::Top.edges(), None);
        assert_eq!(Side::All.edges(), None);
    }

    #[test]
    fn test_corner_edges_and_edge_corners_agree() {
        for edge in [Side::Top, Side::Left, Side::Bottom, Side::Right] {
            for corner in edge.corners() {
                let (h, v) = corner.edges().unwrap();
                assert!(h == edge || v == edge, "{} should bound {}", edge, corner);
            }
        }
    }

    #[test]
    fn test_adjacency_table() {
        // Perpendicular edges are adjacent, parallel ones are not.
        assert!(Side::Top.is_adjacent(Side::Left));
        assert!(Side::Top.is_adjacent(Side::Right));
        assert!(!Side::Top.is_adjacent(Side::Bottom));
        assert!(!Side::Top.is_adjacent(Side::Top));

        // An edge is adjacent to the two corners it connects.
        assert!(Side::Left.is_adjacent(Side::LeftTop));
        assert!(Side::Left.is_adjacent(Side::LeftBottom));
        assert!(!Side::Left.is_adjacent(Side::RightTop));
        assert!(!Side::Left.is_adjacent(Side::RightBottom));

        // Corners sharing an edge are adjacent, diagonal ones are not.
        assert!(Side::LeftTop.is_adjacent(Side::RightTop));
        assert!(Side::LeftTop.is_adjacent(Side::LeftBottom));
        assert!(!Side::LeftTop.is_adjacent(Side::RightBottom));

        for a in Side::SIDES {
            assert!(!a.is_adjacent(Side::All));
            for b in Side::SIDES {
                assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::LeftBottom.to_string(), "left-bottom");
        assert_eq!(Side::All.to_string(), "all");
    }
}
