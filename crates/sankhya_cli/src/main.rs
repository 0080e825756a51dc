mod render;

use clap::{Args, Parser, Subcommand};
use sankhya_base::Ceiling;
use sankhya_rs::{DEFAULT_HORIZON, Reading, ReadingConfig, reading};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::{
    ALL_SECTIONS, ColorChoice, Section, date_header, render_reading, render_reduction,
    render_sections, section_json,
};

#[derive(Parser)]
#[command(name = "sankhya", about = "Birth-date numerology readings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Color output: auto, always or never
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Args)]
struct DateArgs {
    /// Birth date as YYYYMMDD
    date: String,
    /// Accept separators such as 1990-01-01
    #[arg(long)]
    lenient: bool,
}

#[derive(Args)]
struct YearArgs {
    /// First outlook year (default: current year)
    #[arg(long)]
    year: Option<i32>,
    /// Number of outlook years
    #[arg(long, default_value_t = DEFAULT_HORIZON)]
    horizon: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Full reading: every indicator
    Reading {
        #[command(flatten)]
        date: DateArgs,
        #[command(flatten)]
        year: YearArgs,
    },
    /// Life-path number with its reduction trace
    Life {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Annual cycle number and year tarot
    Cycle {
        #[command(flatten)]
        date: DateArgs,
        #[command(flatten)]
        year: YearArgs,
    },
    /// Natal tarot, spreads and coincidences
    Tarot {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Ziwei main star, sub star and destiny palace
    Ziwei {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Innate, life and talent connection numbers
    Connection {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Zodiac sign and modality number
    Zodiac {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Nine-cell grid with strengths, weaknesses and lines
    Grid {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Reduce a number by repeated digit sums
    Reduce {
        n: u32,
        /// Ceiling: 9 (default) or 22
        #[arg(long, default_value = "9")]
        ceiling: u32,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let render = cli.color.resolve();
    if render.color {
        // colored re-checks the terminal and CLICOLOR itself; `always` must win.
        colored::control::set_override(true);
    }

    let (date, year, sections): (DateArgs, Option<YearArgs>, &[Section]) = match cli.command {
        Commands::Reading { date, year } => (date, Some(year), &ALL_SECTIONS),
        Commands::Life { date } => (date, None, &[Section::Life]),
        Commands::Cycle { date, year } => (date, Some(year), &[Section::Outlook]),
        Commands::Tarot { date } => (date, None, &[Section::Tarot]),
        Commands::Ziwei { date } => (date, None, &[Section::Ziwei]),
        Commands::Connection { date } => (date, None, &[Section::Connection]),
        Commands::Zodiac { date } => (date, None, &[Section::Zodiac]),
        Commands::Grid { date } => (date, None, &[Section::Grid]),
        Commands::Reduce { n, ceiling } => {
            let ceiling = require_ceiling(ceiling);
            if cli.json {
                println!("{}", reduce_json(n, ceiling));
            } else {
                println!("{}", render_reduction(n, ceiling));
            }
            return;
        }
    };

    let config = reading_config(&date, year.as_ref());
    let r = load_reading(&date.date, &config);

    if cli.json {
        print_json(&r, sections);
    } else if sections == ALL_SECTIONS {
        print!("{}", render_reading(&r, &render));
    } else {
        println!("{}", date_header(&r.birth_date));
        print!("{}", render_sections(&r, sections, &render));
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn reading_config(date: &DateArgs, year: Option<&YearArgs>) -> ReadingConfig {
    let base = ReadingConfig::default().with_lenient(date.lenient);
    match year {
        Some(y) => ReadingConfig {
            year: y.year.unwrap_or(base.year),
            horizon: y.horizon,
            ..base
        },
        None => base,
    }
}

fn load_reading(raw: &str, config: &ReadingConfig) -> Reading {
    debug!(input = raw, ?config, "computing reading");
    reading(raw, config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn require_ceiling(ceiling: u32) -> Ceiling {
    match ceiling {
        9 => Ceiling::Digit,
        22 => Ceiling::Arcana,
        _ => {
            eprintln!("Invalid ceiling: {ceiling} (use 9 or 22)");
            std::process::exit(1);
        }
    }
}

fn reduce_json(n: u32, ceiling: Ceiling) -> serde_json::Value {
    let steps = sankhya_base::reduce_steps(n, ceiling);
    serde_json::json!({ "input": n, "ceiling": ceiling.value(), "steps": steps })
}

/// A single section serializes alone; anything else is the whole reading.
fn json_value(r: &Reading, sections: &[Section]) -> serde_json::Result<serde_json::Value> {
    match sections {
        [section] => section_json(r, *section),
        _ => serde_json::to_value(r),
    }
}

fn print_json(r: &Reading, sections: &[Section]) {
    let text = json_value(r, sections)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|e| {
            eprintln!("Failed to serialize reading: {e}");
            std::process::exit(1);
        });
    println!("{text}");
}
