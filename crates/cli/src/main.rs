mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use flightdeck_types::flight::FlightSearchParams;
use flightdeck_utils::output::OutputFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "flightdeck",
    about = "Flightdeck — flight lookups through the Flightdeck gateway.\nThe gateway holds the Aviation-Edge key; this CLI never sees it.",
    version,
    propagate_version = true
)]
struct Cli {
    #[arg(long, short = 'o', global = true, default_value = "table")]
    output: CliOutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat { Table, Json, JsonPretty }

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> OutputFormat {
        match f {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the gateway is up.
    Health,

    /// Search flights with any combination of filters.
    Search {
        /// Flight IATA designator (e.g. AA100).
        #[arg(long = "flight")]
        flight_iata: Option<String>,
        /// Departure airport IATA code.
        #[arg(long = "dep")]
        dep_iata: Option<String>,
        /// Arrival airport IATA code.
        #[arg(long = "arr")]
        arr_iata: Option<String>,
        /// Airline IATA code.
        #[arg(long = "airline")]
        airline_iata: Option<String>,
        /// Flight status (e.g. scheduled, active, landed).
        #[arg(long = "status")]
        flight_status: Option<String>,
        /// Extra upstream filter as name=value. Repeatable.
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Look up a flight by IATA number.
    Flight { flight_iata: String },

    /// Flights between two airports.
    Route { dep: String, arr: String },

    /// Flights operated by an airline.
    Airline { airline_iata: String },

    /// Airport / city database lookup.
    Airports {
        /// Upstream filter as name=value (e.g. codeIataCity=NYC). Repeatable.
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Show or edit CLI configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration.
    Show,
    /// Set the gateway base URL (including `/api`).
    SetUrl { url: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    flightdeck_core::init_workspace()?;

    let cli = Cli::parse();
    let fmt: OutputFormat = cli.output.into();

    match cli.command {
        Commands::Health => commands::health::run(fmt).await,
        Commands::Search { flight_iata, dep_iata, arr_iata, airline_iata, flight_status, params } => {
            let filters = FlightSearchParams { flight_iata, dep_iata, arr_iata, airline_iata, flight_status };
            let extra = commands::helpers::parse_params(&params)?;
            commands::flights::search(filters, extra, fmt).await
        }
        Commands::Flight { flight_iata } => commands::flights::by_number(&flight_iata, fmt).await,
        Commands::Route { dep, arr } => commands::flights::by_route(&dep, &arr, fmt).await,
        Commands::Airline { airline_iata } => commands::flights::by_airline(&airline_iata, fmt).await,
        Commands::Airports { params } => commands::airports::run(&params, fmt).await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::configure::show(fmt),
            ConfigAction::SetUrl { url } => commands::configure::set_url(&url),
        },
    }
}
