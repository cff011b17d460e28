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

/// Upper bound on the number of rows one screen can have.
pub const MAX_ROWS: usize = 26;

/// Upper bound on the number of seats per row.
pub const MAX_SEATS_PER_ROW: usize = 50;

/// A validated screen layout: movie title plus grid dimensions.
///
/// Construction is the only validation point; once a `ScreenConfig`
/// exists, every consumer may rely on `1 <= rows <= 26` and
/// `1 <= seats_per_row <= 50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    title: String,
    rows: usize,
    seats_per_row: usize,
}

impl ScreenConfig {
    pub fn new(
        title: impl Into<String>,
        rows: usize,
        seats_per_row: usize,
    ) -> Result<Self, ScreenConfigError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ScreenConfigError::EmptyTitle);
        }
        if rows == 0 || rows > MAX_ROWS {
            return Err(ScreenConfigError::RowsOutOfRange(rows));
        }
        if seats_per_row == 0 || seats_per_row > MAX_SEATS_PER_ROW {
            return Err(ScreenConfigError::SeatsPerRowOutOfRange(seats_per_row));
        }
        Ok(Self {
            title,
            rows,
            seats_per_row,
        })
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
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
    pub fn total_seats(&self) -> usize {
        self.rows * self.seats_per_row
    }
}

/// Rejected screen layouts. Every variant is recoverable: the caller is
/// expected to re-prompt for a corrected configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenConfigError {
    EmptyTitle,
    RowsOutOfRange(usize),
    SeatsPerRowOutOfRange(usize),
}

impl Display for ScreenConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenConfigError::EmptyTitle => write!(f, "Movie title must not be empty"),
            ScreenConfigError::RowsOutOfRange(rows) => {
                write!(f, "Rows must be between 1 and {}, got {}", MAX_ROWS, rows)
            }
            ScreenConfigError::SeatsPerRowOutOfRange(seats) => {
                write!(
                    f,
                    "Seats per row must be between 1 and {}, got {}",
                    MAX_SEATS_PER_ROW, seats
                )
            }
        }
    }
}

impl std::error::Error for ScreenConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_accepts_valid_layout() {
        let config = ScreenConfig::new("Inception", 8, 10).expect("valid config");
        assert_eq!(config.title(), "Inception");
        assert_eq!(config.rows(), 8);
        assert_eq!(config.seats_per_row(), 10);
        assert_eq!(config.total_seats(), 80);
    }

    #[test]
    fn test_config_accepts_extreme_valid_dimensions() {
        assert!(ScreenConfig::new("X", 1, 1).is_ok());
        assert!(ScreenConfig::new("X", MAX_ROWS, MAX_SEATS_PER_ROW).is_ok());
    }

    #[test]
    fn test_config_rejects_empty_title() {
        assert_eq!(
            ScreenConfig::new("   ", 5, 5),
            Err(ScreenConfigError::EmptyTitle)
        );
    }

    #[test]
    fn test_config_rejects_bad_dimensions() {
        assert_eq!(
            ScreenConfig::new("X", 0, 5),
            Err(ScreenConfigError::RowsOutOfRange(0))
        );
        assert_eq!(
            ScreenConfig::new("X", 27, 5),
            Err(ScreenConfigError::RowsOutOfRange(27))
        );
        assert_eq!(
            ScreenConfig::new("X", 5, 0),
            Err(ScreenConfigError::SeatsPerRowOutOfRange(0))
        );
        assert_eq!(
            ScreenConfig::new("X", 5, 51),
            Err(ScreenConfigError::SeatsPerRowOutOfRange(51))
        );
    }
}
