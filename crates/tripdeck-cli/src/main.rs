use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;
use tripdeck_assistant::{build_system_prompt, region_info, ChatLocation, ChatPreferences};
use tripdeck_core::{CategoryFilter, Coordinate};
use tripdeck_places::{GooglePlacesClient, NearbyQuery, NearbyResolver, DEFAULT_RADIUS_M};

#[derive(Debug, Parser)]
#[command(name = "tripdeck")]
#[command(about = "Tripdeck travel planner command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve nearby places and print the response JSON.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        #[arg(long, default_value_t = DEFAULT_RADIUS_M)]
        radius: u32,
        /// restaurant, attraction, hotel, activity or all
        #[arg(long = "type", default_value = "all")]
        place_type: String,
        /// Skip the live provider even when a key is configured.
        #[arg(long)]
        mock: bool,
        /// Seed for the mock generator, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print currency, symbol and locale for a country.
    Region { country: String },
    /// Print the assistant system prompt for a location and preferences.
    Prompt {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        style: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        duration: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Nearby {
            lat,
            lng,
            radius,
            place_type,
            mock,
            seed,
        }) => {
            let query = NearbyQuery {
                origin: Coordinate::new(lat, lng),
                radius_m: radius,
                filter: CategoryFilter::from_query(Some(&place_type)),
            };
            run_nearby(query, mock, seed).await?;
        }
        Some(Commands::Region { country }) => {
            println!("{}", serde_json::to_string_pretty(&region_info(&country))?);
        }
        Some(Commands::Prompt {
            city,
            country,
            style,
            budget,
            duration,
        }) => {
            let location = ChatLocation {
                has_location: city.is_some() && country.is_some(),
                city,
                country,
                latitude: None,
                longitude: None,
            };
            let preferences = ChatPreferences {
                style,
                budget_label: budget,
                duration,
            };
            println!("{}", build_system_prompt(Some(&location), Some(&preferences)));
        }
        None => println!("tripdeck: run with --help to list commands"),
    }

    Ok(())
}

async fn run_nearby(query: NearbyQuery, mock: bool, seed: Option<u64>) -> anyhow::Result<()> {
    let provider = if mock {
        None
    } else {
        let config = tripdeck_core::load_app_config()?;
        config
            .google_places_api_key
            .as_deref()
            .map(|key| {
                GooglePlacesClient::with_base_url(
                    key,
                    config.places_timeout_secs,
                    &config.user_agent,
                    &config.places_base_url,
                )
            })
            .transpose()?
    };

    let resolver = NearbyResolver::new(provider);
    let mut rng = seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    );
    let response = resolver
        .resolve(query, &mut rng, chrono::Utc::now().timestamp_millis())
        .await;

    tracing::info!(source = ?response.source, total = response.total, "nearby resolved");
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
