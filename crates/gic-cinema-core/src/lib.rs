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

//! # GIC Cinema Core (`gic-cinema-core`)
//!
//! Type-safe primitives shared by the seat reservation engine and its
//! front ends. The crate deliberately contains no policy: it defines
//! *what a seat coordinate is*, not how seats are picked.
//!
//! ## Key Types
//!
//! - **`RowLetter`**: A validated row identifier (`A`..`Z`, at most 26 rows).
//! - **`SeatIndex`**: A 0-based position within a row.
//! - **`SeatCoord`**: A `(row, index)` pair addressing one seat. Its
//!   `Display` form is the customer-facing notation (`B05` is the fifth
//!   seat of row `B`).
//! - **`SeatState`**: Per-seat occupancy, `Available` or `Occupied`.
//! - **`BookingId`**: A sequential booking handle rendered as `GIC0001`,
//!   `GIC0002`, and so on.
//! - **`ScreenConfig`**: A validated screen layout (title, rows, seats per
//!   row) with the grid bounds the rest of the system relies on.
//!
//! All coordinate-like types are `Copy` newtypes with `const` constructors
//! and accessors, so downstream code never passes bare integers around.

pub mod booking;
pub mod config;
pub mod seat;

pub mod prelude {
    pub use crate::booking::BookingId;
    pub use crate::config::{ScreenConfig, ScreenConfigError, MAX_ROWS, MAX_SEATS_PER_ROW};
    pub use crate::seat::{RowLetter, SeatCoord, SeatIndex, SeatState};
}
