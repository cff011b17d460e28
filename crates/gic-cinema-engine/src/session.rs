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

//! The booking session: one configured screen, its seat map and its
//! ledger, driven through typed operations.
//!
//! The seat map and the ledger are always mutated together within one
//! operation; callers never observe a state where only one of them has
//! been updated.

use crate::alloc::{plan_center_first, plan_run_from};
use crate::ledger::{Booking, BookingLedger, LedgerError};
use crate::seatmap::{SeatMap, SeatOutOfBoundsError};
use crate::snapshot::CinemaSnapshot;
use gic_cinema_core::booking::BookingId;
use gic_cinema_core::config::ScreenConfig;
use gic_cinema_core::seat::SeatCoord;
use std::fmt::Display;
use tracing::{info, instrument, warn};

/// More tickets requested than seats left on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsufficientSeatsError {
    requested: usize,
    available: usize,
}

impl InsufficientSeatsError {
    #[inline]
    pub fn new(requested: usize, available: usize) -> Self {
        Self {
            requested,
            available,
        }
    }

    #[inline]
    pub fn requested(&self) -> usize {
        self.requested
    }

    #[inline]
    pub fn available(&self) -> usize {
        self.available
    }
}

impl Display for InsufficientSeatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Requested {} tickets but only {} seats are available",
            self.requested, self.available
        )
    }
}

impl std::error::Error for InsufficientSeatsError {}

/// The chosen starting seat is already occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatTakenError {
    coord: SeatCoord,
}

impl SeatTakenError {
    #[inline]
    pub fn new(coord: SeatCoord) -> Self {
        Self { coord }
    }

    #[inline]
    pub fn coord(&self) -> SeatCoord {
        self.coord
    }
}

impl Display for SeatTakenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {} is already taken", self.coord)
    }
}

impl std::error::Error for SeatTakenError {}

/// Errors raised by [`Cinema::request_allocation`]. All are recoverable;
/// the front end re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationError {
    InsufficientSeats(InsufficientSeatsError),
    /// The 4-digit booking id space is exhausted.
    CapacityExceeded,
    /// A planned coordinate missed the grid. Defensive: the planners only
    /// emit in-bounds coordinates.
    OutOfRange(SeatOutOfBoundsError),
}

impl Display for AllocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationError::InsufficientSeats(e) => write!(f, "{e}"),
            AllocationError::CapacityExceeded => write!(f, "{}", LedgerError::CapacityExceeded),
            AllocationError::OutOfRange(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AllocationError {}

impl From<SeatOutOfBoundsError> for AllocationError {
    fn from(e: SeatOutOfBoundsError) -> Self {
        AllocationError::OutOfRange(e)
    }
}

/// Errors raised by [`Cinema::override_allocation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideError {
    /// The booking id is unknown.
    NotFound(BookingId),
    /// The chosen starting seat does not exist on this grid.
    InvalidSeat(SeatOutOfBoundsError),
    /// The chosen starting seat is occupied. A booking's own seats count
    /// as occupied until the override actually vacates them.
    SeatTaken(SeatTakenError),
    /// A vacated or claimed coordinate missed the grid. Defensive: ledger
    /// entries only ever hold in-bounds coordinates.
    OutOfRange(SeatOutOfBoundsError),
}

impl Display for OverrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverrideError::NotFound(id) => write!(f, "Booking {} not found", id),
            OverrideError::InvalidSeat(e) => write!(f, "Invalid seat: {e}"),
            OverrideError::SeatTaken(e) => write!(f, "{e}"),
            OverrideError::OutOfRange(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for OverrideError {}

/// Errors raised by [`Cinema::query_booking`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryError {
    NotFound(BookingId),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::NotFound(id) => write!(f, "Booking {} not found", id),
        }
    }
}

impl std::error::Error for QueryError {}

/// One interactive booking session for a single configured screen.
///
/// Owned by the caller and passed by reference into each operation; the
/// engine keeps no global state. Single-threaded by design: every
/// operation runs to completion before the next one starts.
#[derive(Debug, Clone)]
pub struct Cinema {
    config: ScreenConfig,
    map: SeatMap,
    ledger: BookingLedger,
}

impl Cinema {
    /// Opens a session for the given screen layout with every seat
    /// available.
    pub fn new(config: ScreenConfig) -> Self {
        let map = SeatMap::new(config.rows(), config.seats_per_row());
        Self {
            config,
            map,
            ledger: BookingLedger::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.config.title()
    }

    #[inline]
    pub fn seats_available(&self) -> usize {
        self.map.count_available()
    }

    #[inline]
    pub fn seat_map(&self) -> &SeatMap {
        &self.map
    }

    /// Reserves `count` seats using the center-first heuristic and
    /// records them under a fresh booking id.
    ///
    /// Returns the id together with the assigned coordinates in display
    /// order; `query_booking` on that id yields exactly the same list.
    /// Ledger capacity is checked before any seat is touched, so a
    /// failure leaves the map unchanged.
    #[instrument(level = "info", skip(self))]
    pub fn request_allocation(
        &mut self,
        count: usize,
    ) -> Result<(BookingId, Vec<SeatCoord>), AllocationError> {
        if !self.ledger.has_capacity() {
            return Err(AllocationError::CapacityExceeded);
        }
        let available = self.map.count_available();
        if count == 0 || count > available {
            return Err(AllocationError::InsufficientSeats(
                InsufficientSeatsError::new(count, available),
            ));
        }

        let planned = plan_center_first(&self.map, count);
        for &coord in &planned {
            self.map.set_occupied(coord)?;
        }
        let id = self
            .ledger
            .create(count, planned.clone())
            .map_err(|_| AllocationError::CapacityExceeded)?;

        info!(booking = %id, requested = count, assigned = planned.len(), "Allocation committed");
        Ok((id, planned))
    }

    /// Re-seats an existing booking starting from a customer-chosen
    /// coordinate.
    ///
    /// Validation happens before any mutation: an unknown id, an
    /// off-grid start or an occupied start leave both the map and the
    /// ledger untouched. On success the booking's previous seats are
    /// vacated first (they may be re-claimed by the new run), then a
    /// consecutive run is taken from the start seat to at most the end of
    /// that row. The run never wraps into another row, so the booking can
    /// end up with fewer seats than originally requested.
    #[instrument(level = "info", skip(self))]
    pub fn override_allocation(
        &mut self,
        id: BookingId,
        start: SeatCoord,
    ) -> Result<Vec<SeatCoord>, OverrideError> {
        let booking = match self.ledger.get(id) {
            Ok(b) => b,
            Err(_) => return Err(OverrideError::NotFound(id)),
        };
        let requested = booking.requested();
        let previous: Vec<SeatCoord> = booking.seats().to_vec();

        let start_available = self
            .map
            .is_available(start)
            .map_err(OverrideError::InvalidSeat)?;
        if !start_available {
            return Err(OverrideError::SeatTaken(SeatTakenError::new(start)));
        }

        // Vacate before planning: the new run may reuse seats the booking
        // is giving up.
        for &coord in &previous {
            self.map
                .set_available(coord)
                .map_err(OverrideError::OutOfRange)?;
        }

        let planned = plan_run_from(&self.map, start, requested);
        for &coord in &planned {
            self.map
                .set_occupied(coord)
                .map_err(OverrideError::OutOfRange)?;
        }
        self.ledger
            .update_seats(id, planned.clone())
            .map_err(|_| OverrideError::NotFound(id))?;

        if planned.len() < requested {
            warn!(
                booking = %id,
                requested,
                assigned = planned.len(),
                "Override ran off the row end; booking holds fewer seats than requested"
            );
        }
        info!(booking = %id, start = %start, assigned = planned.len(), "Override committed");
        Ok(planned)
    }

    /// Looks up a booking by id.
    pub fn query_booking(&self, id: BookingId) -> Result<&Booking, QueryError> {
        self.ledger.get(id).map_err(|_| QueryError::NotFound(id))
    }

    /// Read-only snapshot of the seat map and every booking, detached
    /// from the session for rendering.
    pub fn snapshot(&self) -> CinemaSnapshot {
        CinemaSnapshot::capture(&self.config, &self.map, &self.ledger)
    }
}
