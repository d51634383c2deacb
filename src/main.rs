//! # pawm CLI
//!
//! Command-line interface for browsing pet marketplace listings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{builder::PossibleValuesParser, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use pawmarket::{
    commands::{self, BrowseArgs, CategoriesArgs},
    constants::{DEFAULT_LOG_FILTER, FILTER_ALL, LOG_ENV_VAR},
    DateRange, FilterState, PriceRange, SortBy,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.config/pawmarket/config   Global configuration (listings, page size, sort, color)
  .pawmarket                   Project configuration (listings, page size)

Listing Sources:
  A JSON or YAML file holding an array of listings (or an object with a
  products, listings, or data array), or a directory of such files.

Getting Started:
  pawm setup                          Create the global config
  pawm browse --listings pets.json    Show the first page of listings
  pawm categories                     Show listing counts per category

Logging:
  PAWM_LOG=debug pawm browse          Log engine decisions to stderr

Learn more:
  pawm <COMMAND> --help               Show detailed help for a command";

const DATE_RANGES: [&str; 5] = [FILTER_ALL, "today", "week", "month", "3months"];

#[derive(Parser)]
#[command(name = "pawm")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Browse pet marketplace listings with filters, sorting, and pagination")]
#[command(
    long_about = "pawm browses pet marketplace listings stored as JSON or YAML. \
Listings can be narrowed by free-text search, category, price range, minimum rating, \
location, and listing date, sorted in several orders, and paged through.

Fields are read leniently: prices and ratings may be numbers or numeric strings, and \
dates may be ISO 8601 strings or epoch milliseconds."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a page of filtered and sorted listings
    #[command(
        long_about = "Show a page of filtered and sorted listings.\n\n\
All filters combine: a listing is shown only if it passes every one. \
Search matches name, description, and breed (case-insensitive substring). \
Category is an exact match. Location is a case-insensitive substring match.\n\n\
Changing any filter starts at page 1 unless --page is given.",
        after_help = "Examples:\n  \
pawm browse                                   First page, newest first\n  \
pawm browse -s retriever                      Search name, description, breed\n  \
pawm browse -c Pets --max-price 500           Pets under 500\n  \
pawm browse --rating 4 --sort rating          Rated 4+, best first\n  \
pawm browse --date-range week                 Listed in the last 7 days\n  \
pawm browse -p 3                              Third page\n  \
pawm browse --json --all                      Full result as JSON"
    )]
    Browse {
        /// Listings file or directory
        #[arg(long, help = "Listings file or directory (overrides config)")]
        listings: Option<PathBuf>,

        /// Free-text search
        #[arg(short, long, help = "Case-insensitive search in name, description, breed")]
        search: Option<String>,

        /// Category filter
        #[arg(short, long, help = "Exact category match")]
        category: Option<String>,

        /// Minimum price
        #[arg(long, help = "Minimum price (inclusive)")]
        min_price: Option<String>,

        /// Maximum price
        #[arg(long, help = "Maximum price (inclusive)")]
        max_price: Option<String>,

        /// Minimum rating
        #[arg(long, help = "Minimum rating, e.g. 4 or 4.5")]
        rating: Option<String>,

        /// Location filter
        #[arg(long, help = "Case-insensitive substring match on location")]
        location: Option<String>,

        /// Listing date range
        #[arg(
            long,
            value_parser = PossibleValuesParser::new(DATE_RANGES),
            help = "Listed within: All, today, week, month, or 3months"
        )]
        date_range: Option<String>,

        /// Sort order
        #[arg(
            long,
            value_parser = PossibleValuesParser::new(SortBy::VARIANTS),
            help = "Sort order (default from config: newest)"
        )]
        sort: Option<String>,

        /// Page number
        #[arg(short, long, default_value_t = 1, help = "Page number (1-based)")]
        page: usize,

        /// JSON output
        #[arg(long, help = "Print the view as JSON")]
        json: bool,

        /// Include all filtered listings in JSON output
        #[arg(long, requires = "json", help = "Include every filtered listing in JSON output")]
        all: bool,
    },

    /// List categories with listing counts
    #[command(
        long_about = "List the categories present in the listings, with the number of \
listings in each. Most populated categories come first.",
        after_help = "Examples:\n  \
pawm categories\n  \
pawm categories --listings ./data"
    )]
    Categories {
        /// Listings file or directory
        #[arg(long, help = "Listings file or directory (overrides config)")]
        listings: Option<PathBuf>,
    },

    /// Create the global configuration file
    #[command(
        long_about = "Create ~/.config/pawmarket/config with all options and their defaults.\n\n\
An existing file is left untouched."
    )]
    Setup,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
pawm completions bash > ~/.local/share/bash-completion/completions/pawm\n  \
pawm completions zsh > ~/.zfunc/_pawm")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse {
            listings,
            search,
            category,
            min_price,
            max_price,
            rating,
            location,
            date_range,
            sort,
            page,
            json,
            all,
        } => {
            let filters = FilterState {
                search_term: search.unwrap_or_default(),
                category: category.unwrap_or_else(|| FILTER_ALL.to_string()),
                price_range: PriceRange::new(
                    min_price.unwrap_or_default(),
                    max_price.unwrap_or_default(),
                ),
                rating: rating.unwrap_or_else(|| FILTER_ALL.to_string()),
                location: location.unwrap_or_default(),
                date_range: date_range.map(DateRange::from).unwrap_or_default(),
                sort_by: SortBy::default(),
            };

            commands::browse(&BrowseArgs {
                listings,
                filters,
                sort: sort.map(SortBy::from),
                page,
                json,
                all,
            })
        }

        Commands::Categories { listings } => commands::categories(&CategoriesArgs { listings }),

        Commands::Setup => commands::setup(),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
