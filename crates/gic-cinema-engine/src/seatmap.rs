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

use gic_cinema_core::seat::{RowLetter, SeatCoord, SeatState};
use std::fmt::Display;

/// A coordinate that does not address a seat on this grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatOutOfBoundsError {
    coord: SeatCoord,
    rows: usize,
    seats_per_row: usize,
}

impl SeatOutOfBoundsError {
    #[inline]
    pub fn new(coord: SeatCoord, rows: usize, seats_per_row: usize) -> Self {
        Self {
            coord,
            rows,
            seats_per_row,
        }
    }

    #[inline]
    pub fn coord(&self) -> SeatCoord {
        self.coord
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }
}

impl Display for SeatOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seat {} outside grid of {} rows x {} seats",
            self.coord, self.rows, self.seats_per_row
        )
    }
}

impl std::error::Error for SeatOutOfBoundsError {}

/// The occupancy grid for one configured screen.
///
/// Dimensions are fixed at construction; all seats start `Available`.
/// The map is the single source of truth for occupancy. Booking state
/// held elsewhere only references coordinates whose authoritative state
/// lives here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    rows: usize,
    seats_per_row: usize,
    states: Vec<SeatState>,
}

impl SeatMap {
    /// Builds a fully available grid. Callers pass dimensions that were
    /// already validated by `ScreenConfig`.
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self {
            rows,
            seats_per_row,
            states: vec![SeatState::Available; rows * seats_per_row],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    #[inline]
    pub fn contains(&self, coord: SeatCoord) -> bool {
        coord.row().index() < self.rows && coord.seat().value() < self.seats_per_row
    }

    #[inline]
    fn offset(&self, coord: SeatCoord) -> Result<usize, SeatOutOfBoundsError> {
        if !self.contains(coord) {
            return Err(SeatOutOfBoundsError::new(
                coord,
                self.rows,
                self.seats_per_row,
            ));
        }
        Ok(coord.row().index() * self.seats_per_row + coord.seat().value())
    }

    pub fn state(&self, coord: SeatCoord) -> Result<SeatState, SeatOutOfBoundsError> {
        self.offset(coord).map(|i| self.states[i])
    }

    pub fn is_available(&self, coord: SeatCoord) -> Result<bool, SeatOutOfBoundsError> {
        self.state(coord).map(SeatState::is_available)
    }

    /// Marks the seat occupied regardless of its current state.
    pub fn set_occupied(&mut self, coord: SeatCoord) -> Result<(), SeatOutOfBoundsError> {
        let i = self.offset(coord)?;
        self.states[i] = SeatState::Occupied;
        Ok(())
    }

    /// Marks the seat available regardless of its current state.
    pub fn set_available(&mut self, coord: SeatCoord) -> Result<(), SeatOutOfBoundsError> {
        let i = self.offset(coord)?;
        self.states[i] = SeatState::Available;
        Ok(())
    }

    pub fn count_available(&self) -> usize {
        self.states.iter().filter(|s| s.is_available()).count()
    }

    /// Row letters of this grid in ascending order, row `A` first.
    pub fn row_letters(&self) -> impl Iterator<Item = RowLetter> + '_ {
        (0..self.rows as u8).map(RowLetter::new)
    }

    /// Seat states of one row in ascending seat order, or `None` when the
    /// row is not part of this grid.
    pub fn row_states(&self, row: RowLetter) -> Option<&[SeatState]> {
        if row.index() >= self.rows {
            return None;
        }
        let start = row.index() * self.seats_per_row;
        Some(&self.states[start..start + self.seats_per_row])
    }
}
