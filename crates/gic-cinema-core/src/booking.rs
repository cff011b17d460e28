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

/// Sequential booking handle. Serial 1 renders as `GIC0001`.
///
/// Ids are issued monotonically by the ledger, are immutable once handed
/// out and are never reused, even when the booking is later re-seated.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingId(u32);

impl BookingId {
    /// Largest serial the 4-digit code space can carry.
    pub const MAX_SERIAL: u32 = 9999;

    #[inline]
    pub const fn new(serial: u32) -> Self {
        BookingId(serial)
    }

    #[inline]
    pub const fn serial(self) -> u32 {
        self.0
    }

    /// Parses the customer-facing code (`GIC0042`) back into an id.
    ///
    /// This is the inverse of `Display` and exists for front ends looking
    /// up a booking from user input; the engine itself never sees raw
    /// strings.
    pub fn from_code(code: &str) -> Option<Self> {
        let digits = code.strip_prefix("GIC")?;
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let serial: u32 = digits.parse().ok()?;
        Some(BookingId(serial))
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GIC{:04}", self.0)
    }
}

impl From<u32> for BookingId {
    #[inline]
    fn from(value: u32) -> Self {
        BookingId(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_id_display_is_zero_padded() {
        assert_eq!(BookingId::new(1).to_string(), "GIC0001");
        assert_eq!(BookingId::new(42).to_string(), "GIC0042");
        assert_eq!(BookingId::new(9999).to_string(), "GIC9999");
    }

    #[test]
    fn test_booking_id_code_roundtrip() {
        let id = BookingId::new(7);
        assert_eq!(BookingId::from_code(&id.to_string()), Some(id));
    }

    #[test]
    fn test_booking_id_from_code_rejects_malformed_input() {
        assert_eq!(BookingId::from_code(""), None);
        assert_eq!(BookingId::from_code("GIC1"), None);
        assert_eq!(BookingId::from_code("GIC00001"), None);
        assert_eq!(BookingId::from_code("GIZ0001"), None);
        assert_eq!(BookingId::from_code("GIC00a1"), None);
    }
}
