use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use arc_angle::{Angle, AngleFormat, AngleFormatter, decompose, parse};
use arc_math::{degrees_to_radians, normalize_degrees, radians_to_degrees};
use arc_solar::{Observer, day_of_year, sun_times};

#[derive(Parser)]
#[command(name = "arc", about = "Sexagesimal angle toolkit")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format decimal degrees
    Format {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
        /// Output format: dd, dmm, dmmm, dmmss or dmmsss
        #[arg(long = "as", default_value = "dd")]
        format: AngleFormat,
        /// Decimal places of the last field
        #[arg(long, default_value = "2", allow_hyphen_values = true)]
        precision: i32,
        /// Minimum output width (right-padded)
        #[arg(long, default_value = "0")]
        width: usize,
        /// Use °, ' and " markers instead of spaces
        #[arg(long)]
        symbols: bool,
    },
    /// Parse an angle such as "12 20 44.16" or "0 -20"
    Parse {
        /// Angle text; several arguments are joined with spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Split decimal degrees into degrees, minutes and seconds
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Convert between degrees and radians
    Convert {
        /// Input value
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Unit of the input value
        #[arg(long, value_enum, default_value = "deg")]
        from: Unit,
        /// Wrap the result in degrees into [0, 360)
        #[arg(long)]
        normalize: bool,
    },
    /// Sunrise, solar noon and sunset (UTC)
    Sun {
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    Deg,
    Rad,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("Invalid date format: {s} (expected YYYY-MM-DD)"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

/// UTC minutes as `HH:MM`, wrapped into one day.
fn clock(minutes: f64) -> String {
    let total = minutes.rem_euclid(1440.0).round() as u32 % 1440;
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Format {
            deg,
            format,
            precision,
            width,
            symbols,
        } => {
            if symbols {
                let text = Angle::new(deg, format).to_string();
                println!("{text:<width$}");
            } else {
                let f = AngleFormatter::new(deg)
                    .format(format)
                    .precision(precision)
                    .width(width);
                println!("{f}");
            }
        }

        Commands::Parse { text } => {
            let input = text.join(" ");
            let angle = parse(&input).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            info!(input = %input, format = %angle.format(), "parsed");
            println!(
                "{} {:.9} deg ({})",
                angle.format(),
                angle.degrees(),
                angle
            );
        }

        Commands::Dms { deg } => {
            let d = decompose(deg);
            println!("{} deg {} min {:.4} sec", d.degrees, d.minutes, d.seconds);
            if d.negative_at_zero {
                println!("(negative, sign carried below degrees)");
            }
        }

        Commands::Convert {
            value,
            from,
            normalize,
        } => {
            let deg = match from {
                Unit::Deg => value,
                Unit::Rad => radians_to_degrees(value),
            };
            let deg = if normalize { normalize_degrees(deg) } else { deg };
            println!("{deg:.9} deg");
            println!("{:.12} rad", degrees_to_radians(deg));
        }

        Commands::Sun { lat, lon, date } => {
            let (year, month, day) = parse_date(&date).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let doy = day_of_year(year, month, day).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            match sun_times(Observer::new(lat, lon), year, doy) {
                Ok(t) => {
                    println!("Sunrise:    {} UTC", clock(t.sunrise_min));
                    println!("Solar noon: {} UTC", clock(t.solar_noon_min));
                    println!("Sunset:     {} UTC", clock(t.sunset_min));
                    println!("Day length: {:.1} min", t.day_length_min());
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
