use clap::{Parser, Subcommand};
use solat_core::{CalendarDate, GeoLocation, PrayerTimes, compute};

/// Default UTC offset: the catalog region runs on GMT+8.
const DEFAULT_ZONE_HOURS: i32 = 8;

#[derive(Parser)]
#[command(name = "solat", about = "Prayer timetable CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for raw coordinates
    Times {
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UTC offset in whole hours
        #[arg(long, default_value_t = DEFAULT_ZONE_HOURS)]
        zone: i32,
    },
    /// Prayer times for a catalog city
    Zone {
        /// City name, exact catalog spelling
        #[arg(long)]
        city: String,
        /// State name, exact catalog spelling
        #[arg(long)]
        state: String,
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// UTC offset in whole hours
        #[arg(long, default_value_t = DEFAULT_ZONE_HOURS)]
        zone: i32,
    },
    /// List states in the catalog
    States,
    /// List catalog cities for a state
    Cities {
        /// State name, exact catalog spelling
        #[arg(long)]
        state: String,
    },
}

/// Parse "YYYY-MM-DD" into (year, month, day).
fn parse_date(s: &str) -> Option<(i32, u32, u32)> {
    let mut parts = s.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    Some((year, month, day))
}

fn require_date(s: &str, zone: i32) -> CalendarDate {
    let Some((year, month, day)) = parse_date(s) else {
        eprintln!("Invalid date format: {s} (expected YYYY-MM-DD)");
        std::process::exit(1);
    };
    CalendarDate::new(year, month, day, zone)
}

fn require_times(location: &GeoLocation, date: &CalendarDate) -> PrayerTimes {
    match compute(location, date) {
        Ok(times) => times,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn print_times(location: &GeoLocation, place: Option<(&str, &str)>, times: &PrayerTimes) {
    println!(
        "Coordinate: {:.4} {:.4}",
        location.latitude_deg, location.longitude_deg
    );
    if let Some((city, state)) = place {
        println!("Location: {city}, {state}");
    }
    println!();
    for (marker, time) in times.iter() {
        println!("{:<8}: {time}", marker.label());
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Times {
            lat,
            lon,
            date,
            zone,
        } => {
            let location = GeoLocation::new(lat, lon);
            let date = require_date(&date, zone);
            let times = require_times(&location, &date);
            print_times(&location, None, &times);
        }

        Commands::Zone {
            city,
            state,
            date,
            zone,
        } => {
            let Some(z) = solat_zones::find(&city, &state) else {
                eprintln!("Unknown city/state: {city}, {state}");
                eprintln!("Use `solat states` and `solat cities --state <STATE>` to browse");
                std::process::exit(1);
            };
            let location = GeoLocation::new(z.latitude_deg, z.longitude_deg);
            let date = require_date(&date, zone);
            let times = require_times(&location, &date);
            print_times(&location, Some((z.city, z.state)), &times);
        }

        Commands::States => {
            for state in solat_zones::states() {
                println!("{state}");
            }
        }

        Commands::Cities { state } => {
            let cities = solat_zones::cities_in_state(&state);
            if cities.is_empty() {
                eprintln!("Unknown state: {state}");
                std::process::exit(1);
            }
            for city in cities {
                println!("{city}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2024-06-21"), Some((2024, 6, 21)));
        assert_eq!(parse_date("2025-1-9"), Some((2025, 1, 9)));
    }

    #[test]
    fn parse_date_invalid() {
        assert_eq!(parse_date("2024/06/21"), None);
        assert_eq!(parse_date("2024-06"), None);
        assert_eq!(parse_date("june 21"), None);
    }
}
