//! Aligned, bordered table rendering for flight results.
//!
//! Every line is built twice: a plain template used purely for width
//! accounting and a styled twin carrying ANSI escapes. Alignment is
//! computed from the plain text only, so escape sequences never count
//! toward the printable width.

use std::fmt::Write;

use crate::airlines::AirlineDirectory;
use crate::flights::{FlightRecord, Leg};

/// Display format for leg departure and arrival timestamps.
pub const TIME_FORMAT: &str = "%a %d/%m/%Y %H:%M";

/// Placeholder shown for airline ids missing from the directory.
const UNKNOWN_AIRLINE: &str = "unknown";

/// Presentation style for a rendered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Dash borders around each block, bar markers on every line.
    Bordered,
    /// Degenerate layout: no borders, blank line between blocks.
    Plain,
}

/// ANSI style sequences, either real escapes or empty strings when
/// color output is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub bold_green: &'static str,
    pub bold_yellow: &'static str,
    pub bold_red: &'static str,
}

impl Palette {
    /// Palette with actual ANSI escape sequences.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            bold_green: "\x1b[1;32m",
            bold_yellow: "\x1b[1;33m",
            bold_red: "\x1b[1;31m",
        }
    }

    /// Palette with no styling (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            bold_green: "",
            bold_yellow: "",
            bold_red: "",
        }
    }
}

/// A line of output tracked in two forms: the uncolored template that
/// determines printable width and the styled text actually emitted.
#[derive(Debug)]
struct Line {
    plain: String,
    styled: String,
}

impl Line {
    fn new() -> Self {
        Self {
            plain: String::new(),
            styled: String::new(),
        }
    }

    /// Append unstyled text to both forms.
    fn text(&mut self, s: &str) -> &mut Self {
        self.plain.push_str(s);
        self.styled.push_str(s);
        self
    }

    /// Append bold text.
    fn bold(&mut self, s: &str, p: &Palette) -> &mut Self {
        self.plain.push_str(s);
        let _ = write!(self.styled, "{}{}{}", p.bold, s, p.reset);
        self
    }

    /// Append a bold-green separator such as `->` or `|`.
    fn accent(&mut self, s: &str, p: &Palette) -> &mut Self {
        self.plain.push_str(s);
        let _ = write!(self.styled, "{}{}{}", p.bold_green, s, p.reset);
        self
    }

    /// Printable width: visible characters of the uncolored template.
    fn width(&self) -> usize {
        self.plain.chars().count()
    }
}

fn summary_line(flight: &FlightRecord, p: &Palette) -> Line {
    let mut line = Line::new();
    line.text(" ")
        .bold(&flight.origin_city, p)
        .text(" ")
        .accent("->", p)
        .text(" ")
        .bold(&flight.destination_city, p)
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(&format!("{}$", flight.price), p)
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(&format!("{} seats left", flight.seats), p)
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(&format!("Flight duration ({})", flight.duration), p)
        .text(" ");
    if let Some(return_duration) = &flight.return_duration {
        line.accent("|", p)
            .text(" ")
            .bold(&format!("Return duration ({})", return_duration), p)
            .text(" ");
    }
    line
}

fn route_line(leg: &Leg, airlines: &AirlineDirectory, p: &Palette) -> Line {
    let airline = airlines.name(&leg.airline_id).unwrap_or(UNKNOWN_AIRLINE);
    let mut line = Line::new();
    line.text("    ")
        .bold(&leg.origin_city, p)
        .text(" ")
        .accent("->", p)
        .text(" ")
        .bold(&leg.destination_city, p)
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(airline, p)
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(
            &format!("Departure {}", leg.departure.format(TIME_FORMAT)),
            p,
        )
        .text(" ")
        .accent("|", p)
        .text(" ")
        .bold(&format!("Arrival {}", leg.arrival.format(TIME_FORMAT)), p)
        .text(" ");
    line
}

/// Render a list of flight records as one table block per flight.
pub fn render_flights(
    flights: &[FlightRecord],
    airlines: &AirlineDirectory,
    palette: &Palette,
    style: TableStyle,
) -> String {
    let mut buffer = String::new();
    for flight in flights {
        render_flight(flight, airlines, palette, style, &mut buffer);
    }
    buffer
}

fn render_flight(
    flight: &FlightRecord,
    airlines: &AirlineDirectory,
    p: &Palette,
    style: TableStyle,
    buffer: &mut String,
) {
    let summary = summary_line(flight, p);
    let routes: Vec<Line> = flight
        .legs
        .iter()
        .map(|leg| route_line(leg, airlines, p))
        .collect();

    // Two-pass width computation: the block width is the maximum
    // printable width across the summary and every route line.
    let max_len = routes
        .iter()
        .map(Line::width)
        .chain(std::iter::once(summary.width()))
        .max()
        .unwrap_or(0);

    match style {
        TableStyle::Bordered => {
            push_border(max_len, p, buffer);
            push_content(&summary, max_len, p, buffer);
            push_border(max_len, p, buffer);
            for route in &routes {
                push_content(route, max_len, p, buffer);
            }
            push_border(max_len, p, buffer);
        }
        TableStyle::Plain => {
            buffer.push_str(&summary.styled);
            buffer.push('\n');
            for route in &routes {
                buffer.push_str(&route.styled);
                buffer.push('\n');
            }
            buffer.push('\n');
        }
    }
}

fn push_border(max_len: usize, p: &Palette, buffer: &mut String) {
    let _ = writeln!(
        buffer,
        "{}{}{}",
        p.bold_yellow,
        "-".repeat(max_len + 2),
        p.reset
    );
}

fn push_content(line: &Line, max_len: usize, p: &Palette, buffer: &mut String) {
    let padding = max_len.saturating_sub(line.width());
    let _ = writeln!(
        buffer,
        "{}|{}{}{}{}|{}",
        p.bold_yellow,
        p.reset,
        line.styled,
        " ".repeat(padding),
        p.bold_yellow,
        p.reset
    );
}
