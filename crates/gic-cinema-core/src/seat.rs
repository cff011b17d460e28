// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::fmt::Display;

/// A 0-based row identifier. Row 0 renders as `A`, row 25 as `Z`.
///
/// Row `A` is conceptually the row nearest the screen; whether it is drawn
/// at the top or the bottom is a rendering concern.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowLetter(u8);

impl RowLetter {
    /// Number of addressable rows (`A`..`Z`).
    pub const COUNT: u8 = 26;

    #[inline]
    pub const fn new(index: u8) -> Self {
        RowLetter(index)
    }

    /// Parses an uppercase or lowercase ASCII letter into a row.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(RowLetter(upper as u8 - b'A'))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl Display for RowLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<u8> for RowLetter {
    #[inline]
    fn from(value: u8) -> Self {
        RowLetter(value)
    }
}

/// A 0-based seat position within a row.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeatIndex(usize);

impl SeatIndex {
    #[inline]
    pub const fn new(index: usize) -> Self {
        SeatIndex(index)
    }

    #[inline]
    pub const fn zero() -> Self {
        SeatIndex(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Distance to another index, used by the center-proximity heuristic.
    #[inline]
    pub const fn distance_to(self, other: SeatIndex) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl Display for SeatIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeatIndex({})", self.0)
    }
}

impl From<usize> for SeatIndex {
    #[inline]
    fn from(value: usize) -> Self {
        SeatIndex(value)
    }
}

/// One seat on the screen grid, addressed by row and 0-based index.
///
/// The `Display` form uses the customer-facing 1-based notation, so
/// `SeatCoord::new(RowLetter::new(1), SeatIndex::new(4))` prints as `B05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatCoord {
    row: RowLetter,
    seat: SeatIndex,
}

impl SeatCoord {
    #[inline]
    pub const fn new(row: RowLetter, seat: SeatIndex) -> Self {
        SeatCoord { row, seat }
    }

    #[inline]
    pub const fn row(self) -> RowLetter {
        self.row
    }

    #[inline]
    pub const fn seat(self) -> SeatIndex {
        self.seat
    }
}

impl Display for SeatCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:02}", self.row, self.seat.value() + 1)
    }
}

/// Occupancy state of a single seat. Seats are never removed from the
/// grid; their state is flipped in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatState {
    #[default]
    Available,
    Occupied,
}

impl SeatState {
    #[inline]
    pub const fn is_available(self) -> bool {
        matches!(self, SeatState::Available)
    }
}

impl Display for SeatState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeatState::Available => write!(f, "Available"),
            SeatState::Occupied => write!(f, "Occupied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_letter_roundtrip() {
        let row = RowLetter::from_char('c').expect("valid row letter");
        assert_eq!(row, RowLetter::new(2));
        assert_eq!(row.to_char(), 'C');
        assert_eq!(row.index(), 2);
    }

    #[test]
    fn test_row_letter_rejects_non_letters() {
        assert_eq!(RowLetter::from_char('3'), None);
        assert_eq!(RowLetter::from_char(' '), None);
        assert_eq!(RowLetter::from_char('#'), None);
    }

    #[test]
    fn test_seat_coord_display_is_one_based() {
        let coord = SeatCoord::new(RowLetter::new(1), SeatIndex::new(4));
        assert_eq!(coord.to_string(), "B05");
        let coord = SeatCoord::new(RowLetter::new(0), SeatIndex::zero());
        assert_eq!(coord.to_string(), "A01");
    }

    #[test]
    fn test_seat_index_distance() {
        assert_eq!(SeatIndex::new(1).distance_to(SeatIndex::new(4)), 3);
        assert_eq!(SeatIndex::new(4).distance_to(SeatIndex::new(1)), 3);
        assert_eq!(SeatIndex::new(2).distance_to(SeatIndex::new(2)), 0);
    }

    #[test]
    fn test_seat_state_default_is_available() {
        assert!(SeatState::default().is_available());
        assert!(!SeatState::Occupied.is_available());
    }
}
