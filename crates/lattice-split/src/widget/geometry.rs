//! Orientation, layout direction and size flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use lattice_split_render::{Point, Size};

/// The axis children are arranged along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Children are arranged left to right.
    #[default]
    Horizontal,
    /// Children are arranged top to bottom.
    Vertical,
}

impl Orientation {
    /// Get the cross (perpendicular) orientation.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Whether this is [`Orientation::Vertical`].
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }

    /// The component of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// The component of `point` along this axis.
    #[inline]
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }
}

/// Reading direction of a container's layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left. Horizontal layouts are mirrored.
    RightToLeft,
}

impl LayoutDirection {
    /// Whether the layout is mirrored.
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::RightToLeft
    }
}

/// How a child wants to be sized along one axis of its container.
///
/// A small bit set. `SHRINK_BEGIN` is the absence of every other flag, so
/// it has no bit of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeFlags(u8);

impl SizeFlags {
    /// Keep the minimum size, aligned to the start of the cell.
    pub const SHRINK_BEGIN: Self = Self(0);
    /// Fill the cell.
    pub const FILL: Self = Self(1);
    /// Take extra space along the container's axis.
    pub const EXPAND: Self = Self(2);
    /// Fill and expand.
    pub const EXPAND_FILL: Self = Self(1 | 2);
    /// Keep the minimum size, centred in the cell.
    pub const SHRINK_CENTER: Self = Self(4);
    /// Keep the minimum size, aligned to the end of the cell.
    pub const SHRINK_END: Self = Self(8);

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build flags from raw bits, dropping unknown ones.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Whether every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the expand bit is set.
    #[inline]
    pub const fn expands(self) -> bool {
        self.contains(Self::EXPAND)
    }
}

impl Default for SizeFlags {
    fn default() -> Self {
        Self::FILL
    }
}

impl BitOr for SizeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SizeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SizeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("SizeFlags(SHRINK_BEGIN)");
        }
        let names = [
            (Self::FILL, "FILL"),
            (Self::EXPAND, "EXPAND"),
            (Self::SHRINK_CENTER, "SHRINK_CENTER"),
            (Self::SHRINK_END, "SHRINK_END"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "SizeFlags({})", set.join(" | "))
    }
}
