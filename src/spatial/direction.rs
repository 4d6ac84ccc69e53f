//! Line orientations a word can be laid along

use serde::Serialize;
use std::fmt;

/// One of the six supported line orientations
///
/// Forward orientations run right, down and down-right; each has a
/// reverse running the opposite way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Right to left
    HorizontalReverse,
    /// Bottom to top
    VerticalReverse,
    /// Bottom-right to top-left
    DiagonalReverse,
}

impl Direction {
    /// All orientations, forward ones first
    pub const ALL: [Self; 6] = [
        Self::Horizontal,
        Self::Vertical,
        Self::Diagonal,
        Self::HorizontalReverse,
        Self::VerticalReverse,
        Self::DiagonalReverse,
    ];

    /// Unit step `(row delta, column delta)` between consecutive letters
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
            Self::HorizontalReverse => (0, -1),
            Self::VerticalReverse => (-1, 0),
            Self::DiagonalReverse => (-1, -1),
        }
    }

    /// Whether this is one of the `*-reverse` orientations
    pub const fn is_reverse(self) -> bool {
        matches!(
            self,
            Self::HorizontalReverse | Self::VerticalReverse | Self::DiagonalReverse
        )
    }

    /// The same line read the other way
    pub const fn reversed(self) -> Self {
        match self {
            Self::Horizontal => Self::HorizontalReverse,
            Self::Vertical => Self::VerticalReverse,
            Self::Diagonal => Self::DiagonalReverse,
            Self::HorizontalReverse => Self::Horizontal,
            Self::VerticalReverse => Self::Vertical,
            Self::DiagonalReverse => Self::Diagonal,
        }
    }

    /// Kebab-case label, as serialized
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Diagonal => "diagonal",
            Self::HorizontalReverse => "horizontal-reverse",
            Self::VerticalReverse => "vertical-reverse",
            Self::DiagonalReverse => "diagonal-reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent switches for the orientations a puzzle may use
///
/// `reverse` only adds the reverse of orientations that are themselves
/// enabled.
// Each orientation is toggled on its own, hence the bools
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionFlags {
    /// Allow left-to-right lines
    pub horizontal: bool,
    /// Allow top-to-bottom lines
    pub vertical: bool,
    /// Allow top-left to bottom-right lines
    pub diagonal: bool,
    /// Also allow enabled orientations read backwards
    pub reverse: bool,
}

impl DirectionFlags {
    /// Every orientation enabled
    pub const ALL: Self = Self {
        horizontal: true,
        vertical: true,
        diagonal: true,
        reverse: true,
    };

    /// Every orientation disabled
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
        diagonal: false,
        reverse: false,
    };
}

impl Default for DirectionFlags {
    fn default() -> Self {
        Self::ALL
    }
}

/// Ordered set of usable orientations
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DirectionSet {
    directions: Vec<Direction>,
}

impl DirectionSet {
    /// Build the set from flags: enabled forward orientations first, then
    /// the reverse of each enabled one when `reverse` is set
    pub fn from_flags(flags: DirectionFlags) -> Self {
        let forward = [
            (flags.horizontal, Direction::Horizontal),
            (flags.vertical, Direction::Vertical),
            (flags.diagonal, Direction::Diagonal),
        ];

        let mut directions: Vec<Direction> = forward
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|&(_, direction)| direction)
            .collect();

        if flags.reverse {
            let reversed: Vec<Direction> = directions.iter().map(|d| d.reversed()).collect();
            directions.extend(reversed);
        }

        Self { directions }
    }

    /// Orientations in build order
    pub fn as_slice(&self) -> &[Direction] {
        &self.directions
    }

    /// Orientation at `index`, if any
    pub fn get(&self, index: usize) -> Option<Direction> {
        self.directions.get(index).copied()
    }

    /// Whether `direction` is usable
    pub fn contains(&self, direction: Direction) -> bool {
        self.directions.contains(&direction)
    }

    /// Number of usable orientations
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Whether no orientation is usable, in which case nothing can be placed
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}
