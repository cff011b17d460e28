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

//! # GIC Cinema Engine (`gic-cinema-engine`)
//!
//! The in-memory seat reservation engine behind the GIC cinema terminal.
//! It owns three cooperating pieces of state:
//!
//! - **`SeatMap`**: the authoritative per-seat occupancy grid.
//! - **`BookingLedger`**: the append-only mapping from booking id to the
//!   seats reserved under it.
//! - **`Cinema`**: the session facade tying both together and exposing the
//!   operations a front end drives: allocate, override, query, snapshot.
//!
//! Seat selection itself lives in [`alloc`] as pure functions over a
//! `SeatMap`, so both heuristics can be tested without touching any
//! session state:
//!
//! - the *center-first plan* fills rows from row `A` outward from the
//!   middle of each row, and
//! - the *run-from-start plan* claims a consecutive run to the right of a
//!   customer-chosen seat within that row only.
//!
//! Every failure is a typed, recoverable error; the engine never parses
//! strings and never terminates the process.

pub mod alloc;
pub mod ledger;
pub mod seatmap;
pub mod session;
pub mod snapshot;

pub mod prelude {
    pub use crate::alloc::{plan_center_first, plan_run_from};
    pub use crate::ledger::{Booking, BookingLedger, LedgerError};
    pub use crate::seatmap::{SeatMap, SeatOutOfBoundsError};
    pub use crate::session::{
        AllocationError, Cinema, InsufficientSeatsError, OverrideError, QueryError,
        SeatTakenError,
    };
    pub use crate::snapshot::{BookingView, CinemaSnapshot};
}
