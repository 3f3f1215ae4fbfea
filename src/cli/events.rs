use super::{open, parse_kind, print_json, EventCommand, VenueCommand, WorkCommand};
use crate::models::{
    CreateEvent, CreateVenue, CreateWork, Credit, Event, EventKind, Venue, Work, WorkKind,
};
use crate::services::catalogue::Keys;
use crate::services::{creators, events, venues, works};
use crate::Database;
use anyhow::{anyhow, Result};
use std::path::Path;

pub fn run_venue(config_path: &Path, command: VenueCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        VenueCommand::Add { name, city } => {
            let id = venues::create_venue(&db, Keys::from(&config), &CreateVenue { name, city })?;
            if let Some(venue) = venues::get_venue_by_id(&db, id)? {
                println!("{}", venue.slug);
            }
        }
        VenueCommand::List { list } => {
            let items = venues::list_venues(&db, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            println!("{:<8} {:<40} {:<20}", "SLUG", "NAME", "CITY");
            println!("{}", "-".repeat(70));
            for venue in items {
                println!(
                    "{:<8} {:<40} {:<20}",
                    venue.slug,
                    venue.name,
                    venue.city.unwrap_or_default()
                );
            }
        }
        VenueCommand::Rename { slug, name } => {
            let venue = find_venue(&db, &slug)?;
            venues::rename_venue(&db, &config.sorting, venue.id, &name)?;
        }
        VenueCommand::Remove { slug } => {
            let venue = find_venue(&db, &slug)?;
            venues::delete_venue(&db, venue.id)?;
        }
    }

    Ok(())
}

pub fn run_work(config_path: &Path, command: WorkCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        WorkCommand::Add { title, kind, year } => {
            let kind: WorkKind = parse_kind(&kind, "work kind")?;
            works::create_work(&db, Keys::from(&config), &CreateWork { title, kind, year })?;
        }
        WorkCommand::List { kind, list } => {
            let kind = kind
                .map(|k| parse_kind::<WorkKind>(&k, "work kind"))
                .transpose()?;
            let items = works::list_works(&db, kind, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            println!("{:<8} {:<50} {:<14} {:<6}", "SLUG", "TITLE", "KIND", "YEAR");
            println!("{}", "-".repeat(80));
            for work in items {
                println!(
                    "{:<8} {:<50} {:<14} {:<6}",
                    work.slug,
                    work.title,
                    work.kind.to_string(),
                    work.year.map(|y| y.to_string()).unwrap_or_default()
                );
            }
        }
        WorkCommand::Show { slug, json } => {
            let work = find_work(&db, &slug)?;
            let credits = works::list_work_credits(&db, work.id)?;
            let seen_at = events::list_work_events(&db, work.id)?;

            if json {
                return print_json(&serde_json::json!({
                    "work": work,
                    "credits": credits,
                    "events": seen_at,
                }));
            }
            match work.year {
                Some(year) => println!("{} ({}, {})", work.title, work.kind, year),
                None => println!("{} ({})", work.title, work.kind),
            }
            print_credits(&credits);
            for event in seen_at {
                println!("Seen: {} {}", event.date, event.title);
            }
        }
        WorkCommand::Rename { slug, title } => {
            let work = find_work(&db, &slug)?;
            works::rename_work(&db, &config.sorting, work.id, &title)?;
        }
        WorkCommand::Remove { slug } => {
            let work = find_work(&db, &slug)?;
            works::delete_work(&db, work.id)?;
        }
        WorkCommand::Credit {
            work,
            creator,
            role,
            order,
        } => {
            let work = find_work(&db, &work)?;
            let creator = creators::get_creator_by_slug(&db, &creator)?
                .ok_or_else(|| anyhow!("No creator with slug '{}'", creator))?;

            works::add_work_role(&db, work.id, creator.id, &role, order)?;
            tracing::info!("Credited '{}' on '{}'", creator.name, work.title);
        }
    }

    Ok(())
}

pub fn run_event(config_path: &Path, command: EventCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        EventCommand::Add {
            title,
            kind,
            date,
            venue,
        } => {
            let kind: EventKind = parse_kind(&kind, "event kind")?;
            let venue_id = match venue {
                Some(slug) => Some(
                    venues::get_venue_by_slug(&db, &slug)?
                        .ok_or_else(|| anyhow::anyhow!("No venue with slug '{}'", slug))?
                        .id,
                ),
                None => None,
            };

            events::create_event(
                &db,
                Keys::from(&config),
                &CreateEvent {
                    title,
                    kind,
                    date,
                    venue_id,
                },
            )?;
        }
        EventCommand::List { kind, list } => {
            let kind = kind
                .map(|k| parse_kind::<EventKind>(&k, "event kind"))
                .transpose()?;
            let items = events::list_events(&db, kind, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            println!("{:<8} {:<12} {:<40} {:<10}", "SLUG", "DATE", "TITLE", "KIND");
            println!("{}", "-".repeat(74));
            for event in items {
                println!(
                    "{:<8} {:<12} {:<40} {:<10}",
                    event.slug,
                    event.date.to_string(),
                    event.title,
                    event.kind.to_string()
                );
            }
        }
        EventCommand::Show { slug, json } => {
            let detail = events::get_event_by_slug(&db, &slug)?
                .ok_or_else(|| anyhow!("No event with slug '{}'", slug))?;

            if json {
                return print_json(&detail);
            }
            println!("{} ({}, {})", detail.event.title, detail.event.kind, detail.event.date);
            if let Some(venue) = &detail.venue {
                println!("Venue: {}", venue.name);
            }
            print_credits(&detail.credits);
            for work in &detail.works {
                println!("Work: {}", work.title);
            }
        }
        EventCommand::Rename { slug, title } => {
            let event = find_event(&db, &slug)?;
            events::rename_event(&db, &config.sorting, event.id, &title)?;
        }
        EventCommand::Remove { slug } => {
            let event = find_event(&db, &slug)?;
            events::delete_event(&db, event.id)?;
        }
        EventCommand::Credit {
            event,
            creator,
            role,
            order,
        } => {
            let event = find_event(&db, &event)?;
            let creator = creators::get_creator_by_slug(&db, &creator)?
                .ok_or_else(|| anyhow!("No creator with slug '{}'", creator))?;

            events::add_event_role(&db, event.id, creator.id, &role, order)?;
            tracing::info!("Credited '{}' on '{}'", creator.name, event.title);
        }
        EventCommand::AddWork { event, work } => {
            let event = find_event(&db, &event)?;
            let work = find_work(&db, &work)?;
            events::add_work_to_event(&db, event.id, work.id)?;
        }
    }

    Ok(())
}

fn print_credits(credits: &[Credit]) {
    for credit in credits {
        if credit.role_name.is_empty() {
            println!("  {}", credit.creator.name);
        } else {
            println!("  {} ({})", credit.creator.name, credit.role_name);
        }
    }
}

fn find_venue(db: &Database, slug: &str) -> Result<Venue> {
    venues::get_venue_by_slug(db, slug)?.ok_or_else(|| anyhow!("No venue with slug '{}'", slug))
}

fn find_work(db: &Database, slug: &str) -> Result<Work> {
    works::get_work_by_slug(db, slug)?.ok_or_else(|| anyhow!("No work with slug '{}'", slug))
}

fn find_event(db: &Database, slug: &str) -> Result<Event> {
    events::get_event_by_slug(db, slug)?
        .map(|found| found.event)
        .ok_or_else(|| anyhow!("No event with slug '{}'", slug))
}
