//! Command-line flight search against the fare-aggregator API.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use farefinder_lib::{
    parse_date, render_flights, resolve_departure_range, resolve_return_range, Error as LibError,
    FlightApi, SearchFilter, TableStyle,
};

mod prompt;
mod spinner;
mod terminal;

use spinner::Spinner;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search flights from the terminal")]
struct Cli {
    /// The city of departure.
    #[arg(long, short = 'o')]
    origin: Option<String>,

    /// The destination city.
    #[arg(long, short = 'd')]
    destination: Option<String>,

    /// Start of departure date range (dd/mm/yyyy). Default: today.
    #[arg(long = "date_from", short = 'f', value_parser = parse_cli_date)]
    date_from: Option<NaiveDate>,

    /// End of departure date range (dd/mm/yyyy). Default: tomorrow.
    #[arg(long = "date_to", short = 't', value_parser = parse_cli_date)]
    date_to: Option<NaiveDate>,

    /// Start of return date range (dd/mm/yyyy).
    #[arg(long = "return_from", value_parser = parse_cli_date)]
    return_from: Option<NaiveDate>,

    /// End of return date range (dd/mm/yyyy).
    #[arg(long = "return_to", value_parser = parse_cli_date)]
    return_to: Option<NaiveDate>,

    /// Search for direct flights only.
    #[arg(long)]
    direct: bool,

    /// Maximum price of ticket.
    #[arg(long = "max_price", short = 'm')]
    max_price: Option<u32>,

    /// Max number of search results.
    #[arg(long, short = 'l', default_value_t = 10)]
    limit: u32,

    /// Render results without borders.
    #[arg(long)]
    plain: bool,
}

/// Raw search input, either from flags or from the interactive prompts.
#[derive(Debug)]
struct SearchInput {
    origin: String,
    destination: String,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    return_from: Option<NaiveDate>,
    return_to: Option<NaiveDate>,
    direct: bool,
    max_price: Option<u32>,
    limit: u32,
}

impl SearchInput {
    /// Take the input from flags when both cities are present, otherwise
    /// fall back to the interactive prompt sequence.
    fn from_cli(cli: &Cli) -> Result<Self> {
        match (&cli.origin, &cli.destination) {
            (Some(origin), Some(destination)) => Ok(Self {
                origin: origin.clone(),
                destination: destination.clone(),
                date_from: cli.date_from,
                date_to: cli.date_to,
                return_from: cli.return_from,
                return_to: cli.return_to,
                direct: cli.direct,
                max_price: cli.max_price,
                limit: cli.limit,
            }),
            _ => prompt::gather(),
        }
    }

    fn filter(&self) -> SearchFilter {
        let departure =
            resolve_departure_range(self.date_from, self.date_to, Local::now().date_naive());
        SearchFilter {
            date_from: departure.from,
            date_to: departure.to,
            return_range: resolve_return_range(self.return_from, self.return_to),
            direct: self.direct,
            max_price: self.max_price,
            limit: self.limit,
        }
    }
}

fn parse_cli_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(raw).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let input = SearchInput::from_cli(&cli)?;
    let style = if cli.plain {
        TableStyle::Plain
    } else {
        TableStyle::Bordered
    };

    run(input, style).await
}

async fn run(input: SearchInput, style: TableStyle) -> Result<()> {
    let api = FlightApi::from_env().context("failed to build the API client")?;
    let p = terminal::palette();

    let origin_code = match resolve_city(&api, &input.origin).await {
        Ok(code) => code,
        Err(LibError::CityNotFound { city }) => return city_not_found(&city),
        Err(err) => return Err(err).context("origin city lookup failed"),
    };
    let destination_code = match resolve_city(&api, &input.destination).await {
        Ok(code) => code,
        Err(LibError::CityNotFound { city }) => return city_not_found(&city),
        Err(err) => return Err(err).context("destination city lookup failed"),
    };

    let spinner = Spinner::start("Fetching airline codes...");
    let airlines = api.airline_directory().await;
    spinner.finish().await;
    let airlines = airlines.context("failed to fetch the airline directory")?;

    let spinner = Spinner::start(format!(
        "Searching for affordable flight from {} to {}...",
        origin_code, destination_code
    ));
    let flights = api
        .search_flights(&origin_code, &destination_code, &input.filter())
        .await;
    spinner.finish().await;
    let flights = flights.context("flight search failed")?;

    if flights.is_empty() {
        println!("{} No flights found {}", p.bold, p.reset);
        return Ok(());
    }

    print!("{}", render_flights(&flights, &airlines, &p, style));
    Ok(())
}

async fn resolve_city(api: &FlightApi, city: &str) -> farefinder_lib::Result<String> {
    let spinner = Spinner::start(format!("Resolving city code for {city}..."));
    let result = api.resolve_city_code(city).await;
    spinner.finish().await;
    result
}

fn city_not_found(city: &str) -> Result<()> {
    let p = terminal::palette();
    println!("{} City code for {} not found {}", p.bold_red, city, p.reset);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
