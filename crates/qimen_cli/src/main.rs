use clap::{Parser, Subcommand};
use qimen_almanac::{Almanac, four_pillars};
use qimen_base::{ALL_SOLAR_TERMS, OUTER_TRAVERSAL, Palace, StemBranch};
use qimen_chart::{
    AnchorMethod, Board, Chart, cast_chart_with, parse_local_timestamp,
};
use qimen_ephem::AnalyticSun;

#[derive(Parser)]
#[command(name = "qimen", about = "Qimen Dunjia chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast the full nine-palace chart for a timestamp
    Chart {
        /// Civil timestamp (YYYY-MM-DD HH:MM:SS)
        timestamp: String,
        /// Anchor method: intercalation (default) or split-patch
        #[arg(long, default_value = "intercalation")]
        method: String,
        /// Emit the chart as JSON instead of the board layout
        #[arg(long)]
        json: bool,
    },
    /// Show the four sexagenary pillars for a timestamp
    Pillars {
        /// Civil timestamp (YYYY-MM-DD HH:MM:SS)
        timestamp: String,
    },
    /// Show the solar-term instants of a civil year
    Terms {
        /// Civil year
        year: i32,
    },
}

fn parse_timestamp(s: &str) -> chrono::NaiveDateTime {
    parse_local_timestamp(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_method(s: &str) -> AnchorMethod {
    match s {
        "intercalation" => AnchorMethod::Intercalation,
        "split-patch" => AnchorMethod::SplitPatch,
        _ => {
            eprintln!("Invalid method: {s}");
            eprintln!("Valid: intercalation (default), split-patch");
            std::process::exit(1);
        }
    }
}

fn pillar_text(pair: StemBranch) -> String {
    format!("{} ({})", pair.name(), pair.chinese())
}

fn print_board(chart: &Chart) {
    let config = &chart.configuration;
    println!(
        "{} | year {} month {} day {} hour {}",
        chart.at,
        pillar_text(chart.pillars.year),
        pillar_text(chart.pillars.month),
        pillar_text(chart.pillars.day),
        pillar_text(chart.pillars.hour),
    );
    println!(
        "{} configuration {} | {} / {} | decad {} | duty gate {} in palace {}",
        config.polarity.name(),
        config.number,
        config.term.name(),
        config.period.name(),
        chart.board.xun.name(),
        chart.board.duty_gate.name(),
        chart.board.duty_palace.number(),
    );
    for palace in OUTER_TRAVERSAL.iter().copied().chain([Palace::Center]) {
        print_cell(&chart.board, palace);
    }
    let ann = &chart.annotations;
    for e in &ann.entombments {
        println!(
            "entombment: {} in palace {} ({} tomb)",
            e.stem.name(),
            e.palace.number(),
            e.branch.name()
        );
    }
    for c in &ann.clashes {
        println!("clash: {} in palace {}", c.stem.name(), c.palace.number());
    }
    for s in &ann.suppressions {
        println!(
            "gate suppression: {} gate in palace {} ({})",
            s.gate.name(),
            s.palace.number(),
            s.note()
        );
    }
    println!(
        "horse star: {} in palace {}",
        ann.horse.branch.name(),
        ann.horse.palace.number()
    );
}

fn print_cell(board: &Board, palace: Palace) {
    let cell = board.cell(palace);
    let sky = match cell.sky_rider {
        Some(rider) => format!("{}+{}", cell.sky.name(), rider.name()),
        None => cell.sky.name().to_owned(),
    };
    let earth = match cell.earth_rider {
        Some(rider) => format!("{}+{}", cell.earth.name(), rider.name()),
        None => cell.earth.name().to_owned(),
    };
    let gate = cell.gate.map_or("-", |g| g.name());
    let deity = cell.deity.map_or("-", |d| d.name());
    println!(
        "palace {} {:<6} {:<9} | deity {:<8} star {:<9} sky {:<9} gate {:<7} earth {}",
        palace.number(),
        palace.name(),
        palace.direction(),
        deity,
        cell.star.name(),
        sky,
        gate,
        earth,
    );
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Commands::Chart {
            timestamp,
            method,
            json,
        } => {
            let at = parse_timestamp(&timestamp);
            let method = parse_method(&method);
            let chart = cast_chart_with(&AnalyticSun, at, method).unwrap_or_else(|e| {
                eprintln!("Failed to cast chart: {e}");
                std::process::exit(1);
            });
            if json {
                let out = serde_json::to_string_pretty(&chart).unwrap_or_else(|e| {
                    eprintln!("Failed to encode chart: {e}");
                    std::process::exit(1);
                });
                println!("{out}");
            } else {
                print_board(&chart);
            }
        }
        Commands::Pillars { timestamp } => {
            let at = parse_timestamp(&timestamp);
            let sun = AnalyticSun;
            let almanac = Almanac::new(&sun);
            let pillars = four_pillars(&almanac, at).unwrap_or_else(|e| {
                eprintln!("Failed to compute pillars: {e}");
                std::process::exit(1);
            });
            println!("year  {}", pillar_text(pillars.year));
            println!("month {}", pillar_text(pillars.month));
            println!("day   {}", pillar_text(pillars.day));
            println!("hour  {} (decad {})", pillar_text(pillars.hour), pillars.hour_xun().name());
        }
        Commands::Terms { year } => {
            let sun = AnalyticSun;
            let almanac = Almanac::new(&sun);
            for term in ALL_SOLAR_TERMS {
                let instant = almanac.term_instant(year, term).unwrap_or_else(|e| {
                    eprintln!("Failed to resolve {}: {e}", term.name());
                    std::process::exit(1);
                });
                println!("{:<22} {} {}", term.name(), term.chinese(), instant);
            }
        }
    }
}
