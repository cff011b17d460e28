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

use gic_cinema_core::booking::BookingId;
use gic_cinema_core::seat::SeatCoord;
use std::collections::BTreeMap;
use std::fmt::Display;

/// One confirmed reservation: the id it was issued under, the ticket
/// count originally requested and the seats currently held.
///
/// `requested` is captured at creation and never recomputed from the seat
/// list, which can shrink when an override runs off the end of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: BookingId,
    requested: usize,
    seats: Vec<SeatCoord>,
}

impl Booking {
    #[inline]
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Ticket count requested at first allocation, kept for the lifetime
    /// of the booking.
    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Seats in display order.
    #[inline]
    pub fn seats(&self) -> &[SeatCoord] {
        &self.seats
    }
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerError {
    /// The booking id is not known to this ledger.
    NotFound(BookingId),
    /// The 4-digit id space is exhausted; issuing another id would wrap.
    CapacityExceeded,
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::NotFound(id) => write!(f, "Booking {} not found", id),
            LedgerError::CapacityExceeded => {
                write!(
                    f,
                    "Booking id space exhausted ({} ids issued)",
                    BookingId::MAX_SERIAL
                )
            }
        }
    }
}

impl std::error::Error for LedgerError {}

/// The booking registry: id to booking, in issue order.
///
/// Grows by one entry per confirmed allocation and never shrinks; there
/// is no cancellation. Ids are strictly sequential (`GIC0001`,
/// `GIC0002`, ...) and an override of an existing booking never consumes
/// a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingLedger {
    bookings: BTreeMap<BookingId, Booking>,
    issued: u32,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one more id can be issued.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.issued < BookingId::MAX_SERIAL
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Issues the next sequential id and stores the booking under it.
    pub fn create(
        &mut self,
        requested: usize,
        seats: Vec<SeatCoord>,
    ) -> Result<BookingId, LedgerError> {
        if !self.has_capacity() {
            return Err(LedgerError::CapacityExceeded);
        }
        self.issued += 1;
        let id = BookingId::new(self.issued);
        self.bookings.insert(
            id,
            Booking {
                id,
                requested,
                seats,
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: BookingId) -> Result<&Booking, LedgerError> {
        self.bookings.get(&id).ok_or(LedgerError::NotFound(id))
    }

    /// Replaces the stored seat list in place; the id and the original
    /// requested count are untouched.
    pub fn update_seats(
        &mut self,
        id: BookingId,
        seats: Vec<SeatCoord>,
    ) -> Result<(), LedgerError> {
        let booking = self
            .bookings
            .get_mut(&id)
            .ok_or(LedgerError::NotFound(id))?;
        booking.seats = seats;
        Ok(())
    }

    /// Bookings in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Booking> + '_ {
        self.bookings.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gic_cinema_core::seat::{RowLetter, SeatIndex};

    fn coord(row: u8, seat: usize) -> SeatCoord {
        SeatCoord::new(RowLetter::new(row), SeatIndex::new(seat))
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut ledger = BookingLedger::new();
        let a = ledger.create(1, vec![coord(0, 0)]).expect("first id");
        let b = ledger.create(1, vec![coord(0, 1)]).expect("second id");
        assert_eq!(a.to_string(), "GIC0001");
        assert_eq!(b.to_string(), "GIC0002");
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_get_returns_stored_booking() {
        let mut ledger = BookingLedger::new();
        let seats = vec![coord(0, 2), coord(0, 1)];
        let id = ledger.create(2, seats.clone()).expect("create");

        let booking = ledger.get(id).expect("booking exists");
        assert_eq!(booking.id(), id);
        assert_eq!(booking.requested(), 2);
        assert_eq!(booking.seats(), seats.as_slice());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let ledger = BookingLedger::new();
        let missing = BookingId::new(7);
        assert_eq!(ledger.get(missing), Err(LedgerError::NotFound(missing)));
    }

    #[test]
    fn test_update_replaces_seats_but_keeps_requested() {
        let mut ledger = BookingLedger::new();
        let id = ledger
            .create(3, vec![coord(0, 0), coord(0, 1), coord(0, 2)])
            .expect("create");

        ledger
            .update_seats(id, vec![coord(1, 4)])
            .expect("update existing booking");

        let booking = ledger.get(id).expect("booking exists");
        assert_eq!(booking.seats(), &[coord(1, 4)]);
        assert_eq!(booking.requested(), 3);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut ledger = BookingLedger::new();
        let missing = BookingId::new(1);
        assert_eq!(
            ledger.update_seats(missing, vec![]),
            Err(LedgerError::NotFound(missing))
        );
    }

    #[test]
    fn test_capacity_is_not_silently_wrapped() {
        let mut ledger = BookingLedger {
            bookings: BTreeMap::new(),
            issued: BookingId::MAX_SERIAL - 1,
        };
        let id = ledger.create(1, vec![coord(0, 0)]).expect("last id");
        assert_eq!(id.to_string(), "GIC9999");
        assert!(!ledger.has_capacity());
        assert_eq!(
            ledger.create(1, vec![coord(0, 1)]),
            Err(LedgerError::CapacityExceeded)
        );
    }

    #[test]
    fn test_iter_yields_bookings_in_id_order() {
        let mut ledger = BookingLedger::new();
        ledger.create(1, vec![coord(0, 0)]).expect("create");
        ledger.create(1, vec![coord(0, 1)]).expect("create");
        ledger.create(1, vec![coord(0, 2)]).expect("create");

        let serials: Vec<u32> = ledger.iter().map(|b| b.id().serial()).collect();
        assert_eq!(serials, vec![1, 2, 3]);
    }
}
