pub mod creator;
pub mod events;
pub mod init;
pub mod keys;
pub mod migrate;
pub mod reading;

use crate::{Config, Database};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spectator")]
#[command(version)]
#[command(about = "Keep track of what you read, the events you go to, and who made them", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "spectator.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter spectator.toml
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    Migrate,
    /// Print the sort key for a name or title
    SortKey {
        text: String,
        /// "person" or "thing"
        #[arg(long = "as", default_value = "thing")]
        sort_as: String,
    },
    /// Print the slug an id maps to
    Slug { id: i64 },
    /// Print the id a slug was made from
    DecodeSlug { slug: String },
    /// Print a title-derived slug
    Slugify { text: String },
    Creator {
        #[command(subcommand)]
        command: CreatorCommand,
    },
    Series {
        #[command(subcommand)]
        command: SeriesCommand,
    },
    Publication {
        #[command(subcommand)]
        command: PublicationCommand,
    },
    Venue {
        #[command(subcommand)]
        command: VenueCommand,
    },
    Work {
        #[command(subcommand)]
        command: WorkCommand,
    },
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },
    Reading {
        #[command(subcommand)]
        command: ReadingCommand,
    },
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, default_value = "50")]
    pub limit: usize,
    #[arg(long, default_value = "0")]
    pub offset: usize,
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum CreatorCommand {
    Add {
        name: String,
        /// "individual" or "group"
        #[arg(long, default_value = "individual")]
        kind: String,
    },
    List {
        #[arg(long)]
        kind: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    Rename {
        slug: String,
        name: String,
    },
    Remove {
        slug: String,
    },
    /// Creators ranked by number of publications
    Chart {
        #[arg(long, default_value = "20")]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SeriesCommand {
    Add {
        title: String,
        #[arg(long)]
        url: Option<String>,
    },
    List {
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Subcommand)]
pub enum PublicationCommand {
    Add {
        title: String,
        /// "book" or "periodical"
        #[arg(long, default_value = "book")]
        kind: String,
        /// Slug of the series it belongs to
        #[arg(long)]
        series: Option<String>,
        /// Slug of a creator to credit as author; repeatable
        #[arg(long = "author")]
        authors: Vec<String>,
    },
    List {
        #[arg(long)]
        kind: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    /// Credit a creator on a publication
    Credit {
        publication: String,
        creator: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long)]
        order: Option<i32>,
    },
}

#[derive(Subcommand)]
pub enum VenueCommand {
    Add {
        name: String,
        #[arg(long)]
        city: Option<String>,
    },
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    Rename {
        slug: String,
        name: String,
    },
    Remove {
        slug: String,
    },
}

#[derive(Subcommand)]
pub enum WorkCommand {
    Add {
        title: String,
        /// movie, play, classicalwork, dancepiece or exhibition
        #[arg(long, default_value = "movie")]
        kind: String,
        #[arg(long)]
        year: Option<i32>,
    },
    List {
        #[arg(long)]
        kind: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    Rename {
        slug: String,
        title: String,
    },
    Remove {
        slug: String,
    },
    /// Credit a creator on a work
    Credit {
        work: String,
        creator: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long)]
        order: Option<i32>,
    },
}

#[derive(Subcommand)]
pub enum EventCommand {
    Add {
        title: String,
        /// gig, theatre, cinema, concert, comedy, dance or museum
        #[arg(long, default_value = "gig")]
        kind: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Slug of the venue
        #[arg(long)]
        venue: Option<String>,
    },
    List {
        #[arg(long)]
        kind: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    Show {
        slug: String,
        #[arg(long)]
        json: bool,
    },
    Rename {
        slug: String,
        title: String,
    },
    Remove {
        slug: String,
    },
    /// Credit a creator on an event
    Credit {
        event: String,
        creator: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long)]
        order: Option<i32>,
    },
    /// Record a work as seen at an event
    AddWork {
        event: String,
        work: String,
    },
}

#[derive(Subcommand)]
pub enum ReadingCommand {
    Add {
        /// Slug of the publication
        publication: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: Option<NaiveDate>,
        /// day, month or year
        #[arg(long, default_value = "day")]
        start_granularity: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long, default_value = "day")]
        end_granularity: String,
        #[arg(long)]
        finished: bool,
    },
    /// All readings, or those of one publication
    List {
        publication: Option<String>,
        /// Only readings with no end date
        #[arg(long)]
        in_progress: bool,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Set the end date of a reading
    End {
        id: i64,
        /// YYYY-MM-DD
        date: NaiveDate,
        #[arg(long, default_value = "day")]
        granularity: String,
        /// Gave up rather than finished
        #[arg(long)]
        abandoned: bool,
    },
    Remove {
        id: i64,
    },
}


/// Load the config and open an up-to-date database.
pub(crate) fn open(config_path: &std::path::Path) -> Result<(Config, Database)> {
    let config = Config::load_or_default(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;
    db.migrate()?;
    Ok((config, db))
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn parse_kind<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid {} '{}'", what, value))
}
