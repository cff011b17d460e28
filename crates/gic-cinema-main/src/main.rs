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

//! Interactive seat reservation terminal for GIC Cinemas.
//!
//! All free-text parsing, prompting and rendering lives here; the engine
//! only ever receives validated, strongly-typed arguments.

use gic_cinema_core::booking::BookingId;
use gic_cinema_core::config::ScreenConfig;
use gic_cinema_core::seat::{RowLetter, SeatCoord, SeatIndex, SeatState};
use gic_cinema_engine::session::{AllocationError, Cinema, OverrideError};
use gic_cinema_engine::snapshot::CinemaSnapshot;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "theatre_config.json";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Raw shape of `theatre_config.json` before validation.
#[derive(Debug, Deserialize)]
struct TheatreConfigFile {
    title: String,
    rows: i64,
    #[serde(rename = "seatsPerRow")]
    seats_per_row: i64,
}

fn load_config(path: &str) -> Option<ScreenConfig> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            println!("Config file '{path}' not found. Using interactive setup.");
            return None;
        }
    };
    let parsed: TheatreConfigFile = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(_) => {
            println!("Invalid JSON in config file '{path}'. Using interactive setup.");
            return None;
        }
    };
    if parsed.rows <= 0 || parsed.seats_per_row <= 0 {
        println!("Config file '{path}' has non-positive dimensions. Using interactive setup.");
        return None;
    }
    match ScreenConfig::new(
        parsed.title,
        parsed.rows as usize,
        parsed.seats_per_row as usize,
    ) {
        Ok(config) => {
            println!(
                "Loaded configuration: {}, {}, {}",
                config.title(),
                config.rows(),
                config.seats_per_row()
            );
            Some(config)
        }
        Err(e) => {
            println!("Error: {e}. Using interactive setup.");
            None
        }
    }
}

/// Reads one line from stdin, `None` on end of input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn prompt_config() -> ScreenConfig {
    loop {
        let Some(input) = read_line(
            "Please establish the Movie title, Maximum no. of rows (<= 26), \
             Maximum no. of Seats per row (<= 50) in the format: [Title] [Row] [SeatsPerRow]\n> ",
        ) else {
            println!("Thank you for using GIC Cinemas system. Bye!");
            std::process::exit(0);
        };

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() < 3 {
            println!("Error: Please input String, +ve integer, +ve integer.");
            continue;
        }
        let (Ok(rows), Ok(seats_per_row)) = (
            parts[parts.len() - 2].parse::<usize>(),
            parts[parts.len() - 1].parse::<usize>(),
        ) else {
            println!("Error: Please input String, +ve integer, +ve integer.");
            continue;
        };
        let title = parts[..parts.len() - 2].join(" ");

        match ScreenConfig::new(title, rows, seats_per_row) {
            Ok(config) => return config,
            Err(e) => println!("Error: {e}"),
        }
    }
}

/// Parses a seat position like `B05` (1-based seat number) into a
/// coordinate. Grid bounds are the engine's concern.
fn parse_seat_position(input: &str) -> Option<SeatCoord> {
    let mut chars = input.trim().chars();
    let row = RowLetter::from_char(chars.next()?)?;
    let number: usize = chars.as_str().parse().ok()?;
    if number == 0 {
        return None;
    }
    Some(SeatCoord::new(row, SeatIndex::new(number - 1)))
}

/// Draws the seating chart, screen side up, row `A` at the bottom.
///
/// `.` available, `o` the highlighted booking's seats, `#` seats held by
/// other bookings.
fn render_seating(snapshot: &CinemaSnapshot, highlight: Option<BookingId>) {
    let total_width = snapshot.seats_per_row() * 3;

    let highlighted: HashSet<SeatCoord> = highlight
        .and_then(|id| snapshot.booking(id))
        .map(|b| b.seats().iter().copied().collect())
        .unwrap_or_default();

    println!();
    println!("{:^total_width$}", "S C R E E N");
    println!("{}", "-".repeat(total_width));

    let rows: Vec<RowLetter> = snapshot.row_letters().collect();
    for &row in rows.iter().rev() {
        print!("{row} ");
        for seat in 0..snapshot.seats_per_row() {
            let coord = SeatCoord::new(row, SeatIndex::new(seat));
            if highlighted.contains(&coord) {
                print!("o  ");
            } else if snapshot.seat_state(coord) == Some(SeatState::Occupied) {
                print!("#  ");
            } else {
                print!(".  ");
            }
        }
        println!();
    }

    print!("  ");
    for seat_num in 1..=snapshot.seats_per_row() {
        print!("{seat_num:2} ");
    }
    println!();
    println!("{}", "-".repeat(total_width));
    println!("Legend: '.' = Available, 'o' = Your Booked Seat, '#' = Occupied\n");
}

/// Confirmation loop after a successful allocation: blank accepts, a seat
/// position re-seats the booking from there.
fn confirm_or_reseat(cinema: &mut Cinema, id: BookingId) {
    loop {
        let Some(choice) =
            read_line("Enter blank to accept seat selection, or enter new seating position\n> ")
        else {
            return;
        };
        if choice.is_empty() {
            println!("\nBooking id: {id} confirmed.");
            return;
        }

        let Some(start) = parse_seat_position(&choice) else {
            println!("Invalid seat. Please try again.");
            continue;
        };
        match cinema.override_allocation(id, start) {
            Ok(_) => render_seating(&cinema.snapshot(), Some(id)),
            Err(OverrideError::InvalidSeat(_)) => {
                println!("Invalid seat. Please try again.");
            }
            Err(OverrideError::SeatTaken(_)) => {
                println!("This seat is already taken. Please select another seat.");
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn book_tickets(cinema: &mut Cinema) {
    loop {
        let Some(input) =
            read_line("Enter number of tickets to book, or enter blank to go back to main menu:\n> ")
        else {
            return;
        };
        if input.is_empty() {
            return;
        }
        let Ok(count) = input.parse::<usize>() else {
            println!("Invalid input. Please enter a valid number.");
            continue;
        };

        match cinema.request_allocation(count) {
            Ok((id, seats)) => {
                println!(
                    "\nSuccessfully reserved {} {} tickets.",
                    seats.len(),
                    cinema.title()
                );
                println!("Booking id: {id}");
                render_seating(&cinema.snapshot(), Some(id));
                confirm_or_reseat(cinema, id);
                return;
            }
            Err(AllocationError::InsufficientSeats(e)) => {
                println!("Sorry, there are only {} seats available.\n", e.available());
            }
            Err(e) => println!("Error: {e}"),
        }
    }
}

fn check_bookings(cinema: &Cinema) {
    loop {
        let Some(input) =
            read_line("Enter booking id, or enter blank to go back to main menu:\n> ")
        else {
            return;
        };
        if input.is_empty() {
            return;
        }

        let booking = BookingId::from_code(&input).and_then(|id| cinema.query_booking(id).ok());
        match booking {
            Some(booking) => {
                println!("\nBooking id: {}", booking.id());
                render_seating(&cinema.snapshot(), Some(booking.id()));
            }
            None => println!("Invalid booking id. Please try again."),
        }
    }
}

fn run_menu(cinema: &mut Cinema) {
    loop {
        println!("\nWelcome to GIC Cinemas");
        println!(
            "[1] Book tickets for {} ({} seats available)",
            cinema.title(),
            cinema.seats_available()
        );
        println!("[2] Check bookings");
        println!("[3] Exit");

        let Some(choice) = read_line("Please enter your selection:\n> ") else {
            break;
        };
        match choice.as_str() {
            "1" => {
                render_seating(&cinema.snapshot(), None);
                book_tickets(cinema);
            }
            "2" => check_bookings(cinema),
            "3" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    println!("Thank you for using GIC Cinemas system. Bye!");
}

fn main() {
    enable_tracing();

    let config = load_config(CONFIG_PATH).unwrap_or_else(prompt_config);
    let mut cinema = Cinema::new(config);
    run_menu(&mut cinema);
}
