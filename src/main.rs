use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use tracing::{info, Level};

use rt_trainer_rust::config::{AircraftDetails, GenerationConfig};
use rt_trainer_rust::data::ReferenceData;
use rt_trainer_rust::engine::Seed;
use rt_trainer_rust::scenario::{GenerationParameters, Scenario};
use rt_trainer_rust::utils::phonetics;

#[derive(Parser)]
#[command(name = "rt-trainer")]
#[command(about = "Deterministic radio-telephony training scenario generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scenario from a seed
    Generate {
        /// Seed string; the same seed always reproduces the same scenario
        seed: String,

        #[arg(short, long, default_value = "2")]
        waypoints: usize,

        #[arg(short, long)]
        emergency: bool,

        #[arg(short, long, default_value = "data")]
        data: String,

        /// Write the scenario as JSON to this path
        #[arg(short, long)]
        output: Option<String>,

        /// Print the point-by-point kneeboard
        #[arg(short, long)]
        kneeboard: bool,

        #[arg(long, default_value = "G-OFLY")]
        callsign: String,
    },

    /// List the aerodrome catalogs
    Airports {
        #[arg(short, long, default_value = "data")]
        data: String,
    },

    /// Print the deterministic weather sample for an aerodrome and seed
    Weather {
        seed: String,

        icao: String,

        #[arg(short, long, default_value = "data")]
        data: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            seed,
            waypoints,
            emergency,
            data,
            output,
            kneeboard,
            callsign,
        } => {
            let reference_data = ReferenceData::load(&data)?;
            let params = GenerationParameters {
                seed: Seed::new(&seed),
                airborne_waypoints: waypoints,
                has_emergency: emergency,
            };

            let scenario = Scenario::generate(&params, &reference_data, &GenerationConfig::default())
                .with_context(|| format!("Failed to generate scenario for seed '{}'", seed))?;

            println!("{}", scenario.statistics());

            if kneeboard {
                let aircraft = AircraftDetails {
                    callsign: callsign.clone(),
                    ..AircraftDetails::default()
                };
                print_kneeboard(&scenario, &aircraft);
            }

            if let Some(path) = output {
                let json = serde_json::to_string_pretty(&scenario)?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write scenario to {}", path))?;
                info!("Scenario written to {}", path);
            }
        }

        Commands::Airports { data } => {
            let reference_data = ReferenceData::load(&data)?;
            for (label, controlled) in [("Controlled", true), ("Uncontrolled", false)] {
                println!("{} aerodromes:", label);
                for aerodrome in reference_data.aerodromes(controlled) {
                    println!(
                        "  {}  {}  ({:.4}, {:.4})",
                        aerodrome.icao, aerodrome.name, aerodrome.location.lat, aerodrome.location.long
                    );
                }
            }
        }

        Commands::Weather { seed, icao, data } => {
            let reference_data = ReferenceData::load(&data)?;
            let aerodrome = reference_data
                .aerodromes(true)
                .iter()
                .chain(reference_data.aerodromes(false).iter())
                .find(|a| a.icao == icao)
                .with_context(|| format!("Unknown aerodrome: {}", icao))?;

            let sample =
                rt_trainer_rust::engine::sample_weather(&Seed::new(&seed), &aerodrome.metor_data);
            println!("{} weather for seed '{}':", aerodrome.name, seed);
            println!("  Wind: {:.0} degrees at {:.0} kt", sample.wind_direction, sample.wind_speed);
            println!(
                "  QNH: {:.0} ({})",
                sample.pressure,
                phonetics::number_to_phonetic_string(sample.pressure.round(), 0)
            );
            println!(
                "  Temperature: {:.1} C, dewpoint {:.1} C",
                sample.temperature, sample.dewpoint
            );
        }
    }

    Ok(())
}

fn format_time(minutes_since_midnight: i64) -> String {
    let minutes = minutes_since_midnight.rem_euclid(24 * 60);
    match NaiveTime::from_hms_opt(minutes as u32 / 60, minutes as u32 % 60, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        None => format!("{}m", minutes_since_midnight),
    }
}

fn print_kneeboard(scenario: &Scenario, aircraft: &AircraftDetails) {
    println!(
        "Kneeboard for {} ({})",
        aircraft.callsign,
        phonetics::replace_with_phonetic_alphabet(&aircraft.callsign)
    );
    println!(
        "Abbreviated callsign: {}",
        phonetics::abbreviated_callsign(&aircraft.callsign)
    );
    println!();
    println!("{:>4}  {:<5}  {:<34}  {:<24}  {}", "#", "Time", "Stage", "Target", "Freq");
    for point in scenario.points() {
        println!(
            "{:>4}  {:<5}  {:<34}  {:<24}  {}",
            point.index,
            format_time(point.time_at_point),
            point.stage.to_string(),
            point.update_data.current_target,
            point.update_data.current_target_frequency
        );
    }
}
