//! Creature Drop Viewer CLI
//!
//! Command-line tool for loading, filtering, and viewing creature drop tables.

mod error;
mod logging;
mod prefs;
mod render;

use clap::{Args, Parser, Subcommand};
use error::Result;
use mob_core::{Catalog, DataSource, DirectorySource, FileSource, FilterQuery, LevelBounds};
use prefs::{Preferences, Theme, DEFAULT_PREFS_FILE};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mob-cli")]
#[command(about = "Creature Drop Table Viewer", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug diagnostics (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Preference file
    #[arg(long, global = true, default_value = DEFAULT_PREFS_FILE)]
    prefs: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Where the drop table is read from
#[derive(Args)]
struct DataArgs {
    /// Read this file directly
    #[arg(short, long, conflicts_with = "root")]
    file: Option<PathBuf>,

    /// Data roots searched for the resource (default: current directory)
    #[arg(short, long)]
    root: Vec<PathBuf>,

    /// Resource file name looked up under the roots
    #[arg(long, default_value = "data.csv")]
    resource: String,
}

impl DataArgs {
    fn source(&self) -> Box<dyn DataSource> {
        match &self.file {
            Some(path) => Box::new(FileSource::new(path)),
            None if self.root.is_empty() => Box::new(DirectorySource::new(&[PathBuf::from(".")])),
            None => Box::new(DirectorySource::new(&self.root)),
        }
    }

    fn load(&self) -> Result<Catalog> {
        Ok(Catalog::load(&*self.source(), &self.resource)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Filter creatures by level range and search text
    Show {
        #[command(flatten)]
        data: DataArgs,

        /// Minimum level (absent or invalid means 1)
        #[arg(long)]
        min: Option<String>,

        /// Maximum level (absent or invalid means 999)
        #[arg(long)]
        max: Option<String>,

        /// Search text matched against names and drops
        #[arg(short, long, default_value = "")]
        query: String,

        /// Swap min and max when they are inverted
        #[arg(long)]
        swap: bool,

        /// Print matching cards as JSON
        #[arg(long)]
        json: bool,

        /// Maximum number of cards to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Parse a drop table and summarize it
    Parse {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Show or set the colour theme
    Theme {
        /// New theme; omit to print the current one
        #[arg(value_enum)]
        theme: Option<Theme>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        log::debug!("command failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show {
            data,
            min,
            max,
            query,
            swap,
            json,
            limit,
        } => {
            let bounds = LevelBounds::from_inputs(min.as_deref(), max.as_deref());
            cmd_show(&data, &cli.prefs, bounds, &query, swap, json, limit)
        }
        Commands::Parse { data } => cmd_parse(&data),
        Commands::Theme { theme } => cmd_theme(&cli.prefs, theme),
    }
}

/// Output of `show`: the body plus status lines printed around it
struct ShowReport {
    status: Vec<String>,
    body: String,
    summary: Vec<String>,
}

impl ShowReport {
    /// In JSON mode stdout carries only the body; status goes to stderr
    fn print(&self, json: bool) {
        if json {
            for line in self.status.iter().chain(&self.summary) {
                eprintln!("{}", line);
            }
            println!("{}", self.body);
        } else {
            for line in &self.status {
                println!("{}", line);
            }
            println!();
            println!("{}", self.body);
            println!();
            for line in &self.summary {
                println!("{}", line);
            }
        }
    }
}

fn show_report(
    catalog: &Catalog,
    bounds: LevelBounds,
    query: &str,
    swap: bool,
    json: bool,
    limit: Option<usize>,
    theme: Theme,
) -> Result<ShowReport> {
    let mut status = vec![format!("Loaded {} creature records.", catalog.len())];

    let bounds = if swap {
        let (ordered, swapped) = bounds.ordered();
        if swapped {
            status.push(format!("Swapped level range to {} ~ {}.", ordered.min, ordered.max));
        }
        ordered
    } else {
        bounds
    };

    let filter = FilterQuery::new(bounds, query);
    let cards = catalog.cards(&filter);
    let shown = &cards[..limit.unwrap_or(cards.len()).min(cards.len())];

    let body = if json {
        serde_json::to_string_pretty(shown)?
    } else {
        render::render_cards(shown, query, theme)
    };

    let mut summary = vec![format!("Found {} records.", cards.len())];
    if shown.len() < cards.len() {
        summary.push(format!("... ({} more records)", cards.len() - shown.len()));
    }

    Ok(ShowReport {
        status,
        body,
        summary,
    })
}

fn cmd_show(
    data: &DataArgs,
    prefs_path: &Path,
    bounds: LevelBounds,
    query: &str,
    swap: bool,
    json: bool,
    limit: Option<usize>,
) -> Result<()> {
    let catalog = data.load()?;
    let theme = if json {
        Theme::default()
    } else {
        Preferences::load(prefs_path)?.theme
    };

    show_report(&catalog, bounds, query, swap, json, limit, theme)?.print(json);
    Ok(())
}

fn cmd_parse(data: &DataArgs) -> Result<()> {
    let catalog = data.load()?;

    println!("Loaded {} creature records.", catalog.len());
    println!("Data lines: {}", catalog.raw_count());
    println!("Creatures: {}", catalog.len());
    println!(
        "Drops: {}",
        catalog.records().iter().map(|r| r.drops.len()).sum::<usize>()
    );
    println!();

    let numeric = catalog
        .records()
        .iter()
        .filter(|r| r.level_number().is_some())
        .count();
    if numeric < catalog.len() {
        println!(
            "{} creature(s) have no numeric level and are hidden by level filters",
            catalog.len() - numeric
        );
        println!();
    }

    for record in catalog.records().iter().take(10) {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            record.name,
            record.level,
            record.health,
            record.base_experience,
            record.drops.join(" | ")
        );
    }

    if catalog.len() > 10 {
        println!("... ({} more creatures)", catalog.len() - 10);
    }

    Ok(())
}

fn cmd_theme(prefs_path: &Path, theme: Option<Theme>) -> Result<()> {
    let mut prefs = Preferences::load(prefs_path)?;

    match theme {
        Some(theme) => {
            prefs.set_theme(theme);
            prefs.save(prefs_path)?;
            println!("Theme set to {}", theme);
        }
        None => println!("{}", prefs.theme),
    }

    Ok(())
}
