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

//! Seat selection heuristics.
//!
//! Both planners are pure functions over a [`SeatMap`] snapshot: they
//! read occupancy, never mutate it, and return the coordinates in the
//! order they were picked. That order is the display order and must not
//! be re-sorted by callers.

use crate::seatmap::SeatMap;
use gic_cinema_core::seat::{SeatCoord, SeatIndex};

/// Default selection: fill rows from `A` upward, each row from its center
/// outward.
///
/// Within a row, available indices are stably sorted by distance to
/// `mid = seats_per_row / 2`; on equal distance the numerically smaller
/// index wins. Returns fewer than `requested` coordinates only when the
/// whole map runs out of available seats.
pub fn plan_center_first(map: &SeatMap, requested: usize) -> Vec<SeatCoord> {
    let mut planned = Vec::with_capacity(requested);
    let mut remaining = requested;
    let mid = SeatIndex::new(map.seats_per_row() / 2);

    for row in map.row_letters() {
        if remaining == 0 {
            break;
        }
        let Some(states) = map.row_states(row) else {
            break;
        };

        let mut open: Vec<SeatIndex> = states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_available())
            .map(|(i, _)| SeatIndex::new(i))
            .collect();
        // Stable sort: equidistant candidates keep ascending-index order.
        open.sort_by_key(|i| i.distance_to(mid));

        let take = remaining.min(open.len());
        planned.extend(open[..take].iter().map(|&seat| SeatCoord::new(row, seat)));
        remaining -= take;
    }

    planned
}

/// Override selection: a consecutive ascending scan from `start` to the
/// end of that row, claiming available seats until `requested` are found.
///
/// The scan never wraps into later rows, so the plan may come up short of
/// `requested` when the row ends first. Callers that must not shrink a
/// booking have to check the returned length.
pub fn plan_run_from(map: &SeatMap, start: SeatCoord, requested: usize) -> Vec<SeatCoord> {
    let mut planned = Vec::with_capacity(requested);
    let Some(states) = map.row_states(start.row()) else {
        return planned;
    };

    for index in start.seat().value()..states.len() {
        if planned.len() == requested {
            break;
        }
        if states[index].is_available() {
            planned.push(SeatCoord::new(start.row(), SeatIndex::new(index)));
        }
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use gic_cinema_core::seat::RowLetter;

    fn coord(row: u8, seat: usize) -> SeatCoord {
        SeatCoord::new(RowLetter::new(row), SeatIndex::new(seat))
    }

    #[test]
    fn test_center_first_orders_by_distance_then_index() {
        // 1 row x 5 seats, mid = 2. Distance-1 candidates 1 and 3 tie;
        // the smaller index is listed first.
        let map = SeatMap::new(1, 5);
        let planned = plan_center_first(&map, 3);
        assert_eq!(planned, vec![coord(0, 2), coord(0, 1), coord(0, 3)]);
    }

    #[test]
    fn test_center_first_even_row_width() {
        // 4 seats, mid = 2: distances are [2, 1, 0, 1], so 2, then 1
        // (tie with 3, smaller index first), then 3, then 0.
        let map = SeatMap::new(1, 4);
        let planned = plan_center_first(&map, 4);
        assert_eq!(
            planned,
            vec![coord(0, 2), coord(0, 1), coord(0, 3), coord(0, 0)]
        );
    }

    #[test]
    fn test_center_first_spills_into_next_row() {
        let mut map = SeatMap::new(2, 3);
        map.set_occupied(coord(0, 0)).expect("in bounds");
        map.set_occupied(coord(0, 2)).expect("in bounds");

        // Row A only has seat 1 left; the rest comes from row B.
        let planned = plan_center_first(&map, 3);
        assert_eq!(planned, vec![coord(0, 1), coord(1, 1), coord(1, 0)]);
    }

    #[test]
    fn test_center_first_skips_occupied_seats() {
        let mut map = SeatMap::new(1, 5);
        map.set_occupied(coord(0, 2)).expect("in bounds");

        let planned = plan_center_first(&map, 2);
        assert_eq!(planned, vec![coord(0, 1), coord(0, 3)]);
    }

    #[test]
    fn test_center_first_degrades_when_map_runs_out() {
        let map = SeatMap::new(1, 2);
        let planned = plan_center_first(&map, 5);
        assert_eq!(planned.len(), 2);
    }

    #[test]
    fn test_center_first_zero_request_is_empty() {
        let map = SeatMap::new(2, 2);
        assert!(plan_center_first(&map, 0).is_empty());
    }

    #[test]
    fn test_run_from_claims_consecutive_seats() {
        let map = SeatMap::new(2, 5);
        let planned = plan_run_from(&map, coord(1, 1), 3);
        assert_eq!(planned, vec![coord(1, 1), coord(1, 2), coord(1, 3)]);
    }

    #[test]
    fn test_run_from_skips_occupied_within_row() {
        let mut map = SeatMap::new(1, 5);
        map.set_occupied(coord(0, 2)).expect("in bounds");

        let planned = plan_run_from(&map, coord(0, 1), 3);
        assert_eq!(planned, vec![coord(0, 1), coord(0, 3), coord(0, 4)]);
    }

    #[test]
    fn test_run_from_does_not_wrap_to_next_row() {
        // Start at the last seat of a 5-seat row wanting 3: only 1 seat.
        let map = SeatMap::new(2, 5);
        let planned = plan_run_from(&map, coord(0, 4), 3);
        assert_eq!(planned, vec![coord(0, 4)]);
    }

    #[test]
    fn test_run_from_unknown_row_is_empty() {
        let map = SeatMap::new(1, 5);
        assert!(plan_run_from(&map, coord(3, 0), 2).is_empty());
    }
}
