//! Interactive prompt sequence used when origin or destination is
//! missing from the command line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use farefinder_lib::{parse_bool, parse_date};

use crate::terminal::palette;
use crate::SearchInput;

/// Gather a complete search input from sequential stdin prompts.
///
/// Origin and destination re-prompt until non-empty; every other field
/// is skippable. An unparsable date is reported and treated as absent;
/// an unparsable direct-flag answer is a hard validation failure.
pub fn gather() -> Result<SearchInput> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let origin = read_required(&mut lines, " Enter the origin city: ")?;
    let destination = read_required(&mut lines, " Enter the destination city: ")?;
    let date_from = read_date(
        &mut lines,
        " Start departure date range (dd/mm/yyyy) (skippable): ",
    )?;
    let date_to = read_date(
        &mut lines,
        " End departure date range (dd/mm/yyyy) (skippable): ",
    )?;
    let return_from = read_date(
        &mut lines,
        " Start return date range (dd/mm/yyyy) (skippable): ",
    )?;
    let return_to = read_date(
        &mut lines,
        " End return date range (dd/mm/yyyy) (skippable): ",
    )?;
    let max_price = read_number(&mut lines, " Maximum price (USD) (skippable): ")?;
    let direct = match read_optional(&mut lines, " Is direct flights only (y/n) (skippable): ")? {
        Some(answer) => parse_bool(&answer).context("invalid direct-flights answer")?,
        None => false,
    };
    let limit = read_number(&mut lines, " Max number of results (skippable): ")?.unwrap_or(10);

    Ok(SearchInput {
        origin,
        destination,
        date_from,
        date_to,
        return_from,
        return_to,
        direct,
        max_price,
        limit,
    })
}

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn read_line(lines: &mut Lines<'_>, label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let line = lines
        .next()
        .transpose()
        .context("failed to read from stdin")?
        .context("unexpected end of input")?;
    Ok(line.trim().to_string())
}

fn read_required(lines: &mut Lines<'_>, label: &str) -> Result<String> {
    loop {
        let value = read_line(lines, label)?;
        if !value.is_empty() {
            return Ok(value);
        }
    }
}

fn read_optional(lines: &mut Lines<'_>, label: &str) -> Result<Option<String>> {
    let value = read_line(lines, label)?;
    Ok((!value.is_empty()).then_some(value))
}

fn read_date(lines: &mut Lines<'_>, label: &str) -> Result<Option<NaiveDate>> {
    match read_optional(lines, label)? {
        Some(raw) => match parse_date(&raw) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                let p = palette();
                println!("{} Invalid date... {}", p.bold_red, p.reset);
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

fn read_number(lines: &mut Lines<'_>, label: &str) -> Result<Option<u32>> {
    Ok(read_optional(lines, label)?.and_then(|raw| raw.parse().ok()))
}
