//! Code for working with [`Location`]s on the Othello board.

use crate::{EDGE_LENGTH, NUM_SPACES};
use arrayvec::ArrayVec;
use derive_more::Into;
use std::fmt::{self, Display, Formatter};

/// A location on the Othello board.
///
/// Constructed only through bounds-checked paths, so a `Location` always
/// names a real cell; out-of-range coordinates are unrepresentable.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Into)]
pub struct Location {
    row: u8,
    col: u8,
}

/// An ordered list of locations, enumerated in the order they were found.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(ArrayVec<[Location; NUM_SPACES]>);

impl Location {
    /// Construct a Location from row and column coordinates.
    /// Returns None if either coordinate is outside `[0, 7]`.
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        if row as usize >= EDGE_LENGTH || col as usize >= EDGE_LENGTH {
            None
        } else {
            Some(Self { row, col })
        }
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (u8, u8) {
        (self.row, self.col)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Step one cell along a direction vector, staying on the board.
    /// Returns None if the step would leave the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(d_row)?;
        let col = (self.col as i8).checked_add(d_col)?;
        if row < 0 || col < 0 {
            None
        } else {
            Self::from_coords(row as u8, col as u8)
        }
    }
}

/// Convert this [`Location`] into coordinate notation ("(2, 3)").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected two board coordinates in [0, 7]")
    }
}

impl std::error::Error for ParseLocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// Build a [`Location`] from two whitespace-separated integers ("2 3").
/// Rejects wrong arity, non-integers, and out-of-range coordinates.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let row = parts
            .next()
            .ok_or(ParseLocationError)?
            .parse::<u8>()
            .map_err(|_| ParseLocationError)?;
        let col = parts
            .next()
            .ok_or(ParseLocationError)?
            .parse::<u8>()
            .map_err(|_| ParseLocationError)?;

        if parts.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row, col).ok_or(ParseLocationError)
    }
}

impl MoveList {
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    pub(crate) fn push(&mut self, loc: Location) {
        self.0.push(loc);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.iter().any(|&mv| mv == loc)
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<[Location; NUM_SPACES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
