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

use crate::ledger::BookingLedger;
use crate::seatmap::SeatMap;
use gic_cinema_core::booking::BookingId;
use gic_cinema_core::config::ScreenConfig;
use gic_cinema_core::seat::{RowLetter, SeatCoord, SeatState};

/// A booking as seen through a snapshot: owned copies, detached from the
/// ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    id: BookingId,
    requested: usize,
    seats: Vec<SeatCoord>,
}

impl BookingView {
    #[inline]
    pub fn id(&self) -> BookingId {
        self.id
    }

    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[inline]
    pub fn seats(&self) -> &[SeatCoord] {
        &self.seats
    }
}

/// Read-only view of one session: title, grid occupancy and all bookings
/// in id order. Meant for rendering layers; it shares no state with the
/// live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CinemaSnapshot {
    title: String,
    map: SeatMap,
    bookings: Vec<BookingView>,
}

impl CinemaSnapshot {
    pub(crate) fn capture(config: &ScreenConfig, map: &SeatMap, ledger: &BookingLedger) -> Self {
        let bookings = ledger
            .iter()
            .map(|b| BookingView {
                id: b.id(),
                requested: b.requested(),
                seats: b.seats().to_vec(),
            })
            .collect();
        Self {
            title: config.title().to_string(),
            map: map.clone(),
            bookings,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.map.rows()
    }

    #[inline]
    pub fn seats_per_row(&self) -> usize {
        self.map.seats_per_row()
    }

    #[inline]
    pub fn seats_available(&self) -> usize {
        self.map.count_available()
    }

    /// Per-seat state, or `None` for coordinates off the grid.
    pub fn seat_state(&self, coord: SeatCoord) -> Option<SeatState> {
        self.map.state(coord).ok()
    }

    /// Row letters in ascending order, row `A` first.
    pub fn row_letters(&self) -> impl Iterator<Item = RowLetter> + '_ {
        self.map.row_letters()
    }

    #[inline]
    pub fn bookings(&self) -> &[BookingView] {
        &self.bookings
    }

    /// The booking with the given id, if it exists in this snapshot.
    pub fn booking(&self, id: BookingId) -> Option<&BookingView> {
        self.bookings.iter().find(|b| b.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Cinema;
    use gic_cinema_core::seat::SeatIndex;

    #[test]
    fn test_snapshot_is_detached_from_session() {
        let config = ScreenConfig::new("Dune", 2, 4).expect("valid config");
        let mut session = Cinema::new(config);
        let snapshot = session.snapshot();

        session.request_allocation(2).expect("allocate");

        // The earlier snapshot still shows the empty house.
        assert_eq!(snapshot.seats_available(), 8);
        assert!(snapshot.bookings().is_empty());
        assert_eq!(session.snapshot().seats_available(), 6);
    }

    #[test]
    fn test_snapshot_booking_lookup() {
        let config = ScreenConfig::new("Dune", 2, 4).expect("valid config");
        let mut session = Cinema::new(config);
        let (id, _) = session.request_allocation(1).expect("allocate");

        let snapshot = session.snapshot();
        assert!(snapshot.booking(id).is_some());
        assert!(snapshot.booking(BookingId::new(99)).is_none());
    }

    #[test]
    fn test_snapshot_off_grid_state_is_none() {
        let config = ScreenConfig::new("Dune", 1, 2).expect("valid config");
        let session = Cinema::new(config);
        let snapshot = session.snapshot();

        let off = SeatCoord::new(RowLetter::new(5), SeatIndex::zero());
        assert_eq!(snapshot.seat_state(off), None);
    }
}
