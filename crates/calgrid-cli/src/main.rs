//! `calgrid` CLI -- calendar grids and event management in the terminal.
//!
//! ## Usage
//!
//! ```sh
//! # Render the current month (today bracketed, event days starred)
//! calgrid month
//!
//! # Render a specific month, weeks starting on Monday
//! calgrid month --date 2024-02-01 --monday
//!
//! # Render the week containing a date
//! calgrid week --date 2025-11-26
//!
//! # Create, edit, list, and delete events in the JSON file store
//! calgrid add --title Standup --date 2025-11-30 --start 09:00 --end 09:15
//! calgrid edit evt-0 --title Standup --date 2025-11-30 --start 09:30 --end 09:45
//! calgrid list --date 2025-11-30
//! calgrid rm evt-0
//! ```

mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use calgrid_core::{render_month, render_week, CalendarDate, EventDraft, EventId, GridConfig};
use calgrid_store::{EventStore, JsonFileStore};
use chrono::{Local, Weekday};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "calgrid",
    version,
    about = "Calendar grids and event management in the terminal"
)]
struct Cli {
    /// Event file (JSON array). Created on first write.
    #[arg(long, global = true, default_value = "events.json")]
    file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month grid containing a date (today if omitted)
    Month {
        /// Reference date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// Start weeks on Monday instead of Sunday
        #[arg(long)]
        monday: bool,
    },
    /// Render the 7-day week containing a date (today if omitted)
    Week {
        /// Reference date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// Start weeks on Monday instead of Sunday
        #[arg(long)]
        monday: bool,
    },
    /// Create an event
    Add {
        #[arg(long)]
        title: String,
        /// Event date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Start time, HH:MM
        #[arg(long)]
        start: String,
        /// End time, HH:MM (must be after start)
        #[arg(long)]
        end: String,
        #[arg(long)]
        description: Option<String>,
        /// Display color, #RRGGBB
        #[arg(long, default_value = "#3B82F6")]
        color: String,
    },
    /// Replace an event's fields (the id is kept)
    Edit {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, default_value = "#3B82F6")]
        color: String,
    },
    /// Delete an event by id
    Rm { id: String },
    /// List events, optionally for a single date
    List {
        /// Only events on this date, YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    debug!(file = %cli.file.display(), "using event file");
    let mut store = JsonFileStore::open(&cli.file)
        .with_context(|| format!("opening event file {}", cli.file.display()))?;

    match cli.command {
        Commands::Month { date, monday } => {
            let reference = reference_date(date.as_deref())?;
            let events = store.list_events()?;
            let view = render_month(reference, today(), &events, &grid_config(monday));
            print!("{}", render::month_to_string(&view));
        }
        Commands::Week { date, monday } => {
            let reference = reference_date(date.as_deref())?;
            let events = store.list_events()?;
            let view = render_week(reference, today(), &events, &grid_config(monday));
            print!("{}", render::week_to_string(&view));
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            description,
            color,
        } => {
            let draft = build_draft(title, date, start, end, description, color);
            let event = store.create_event(&draft)?;
            println!("created {}  {}  {}", event.id, event.date, event.title);
        }
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            description,
            color,
        } => {
            let draft = build_draft(title, date, start, end, description, color);
            let event = store.update_event(&EventId::new(id), &draft)?;
            println!("updated {}  {}  {}", event.id, event.date, event.title);
        }
        Commands::Rm { id } => {
            let id = EventId::new(id);
            store.delete_event(&id)?;
            println!("deleted {id}");
        }
        Commands::List { date } => {
            let events = store.list_events()?;
            let filter = date.as_deref().map(parse_date).transpose()?;
            let index = calgrid_core::EventIndex::build(&events);
            let dates: Vec<CalendarDate> = match filter {
                Some(date) => vec![date],
                None => index.dates().collect(),
            };
            for date in dates {
                for event in index.bucket(date) {
                    println!(
                        "{}  {}  {}-{}  {}",
                        event.id, event.date, event.start_time, event.end_time, event.title
                    );
                }
            }
        }
    }

    Ok(())
}

fn parse_date(token: &str) -> Result<CalendarDate> {
    token
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid date {token:?}, expected YYYY-MM-DD"))
}

fn reference_date(token: Option<&str>) -> Result<CalendarDate> {
    match token {
        Some(token) => parse_date(token),
        None => Ok(today()),
    }
}

fn today() -> CalendarDate {
    CalendarDate::from_naive(Local::now().date_naive())
}

fn grid_config(monday: bool) -> GridConfig {
    GridConfig {
        first_day_of_week: if monday { Weekday::Mon } else { Weekday::Sun },
    }
}

fn build_draft(
    title: String,
    date: String,
    start: String,
    end: String,
    description: Option<String>,
    color: String,
) -> EventDraft {
    EventDraft {
        title,
        date,
        start_time: start,
        end_time: end,
        description,
        color,
    }
}
