use super::{open, parse_kind, print_json, PublicationCommand, ReadingCommand, SeriesCommand};
use crate::models::{
    CreatePublication, CreatePublicationSeries, CreateReading, DateGranularity, PublicationKind,
    Reading,
};
use crate::services::catalogue::Keys;
use crate::services::{creators, publications, readings};
use anyhow::Result;
use std::path::Path;

pub fn run_series(config_path: &Path, command: SeriesCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        SeriesCommand::Add { title, url } => {
            let id = publications::create_series(
                &db,
                Keys::from(&config),
                &CreatePublicationSeries { title, url },
            )?;
            if let Some(series) = publications::get_series_by_id(&db, id)? {
                println!("{}", series.slug);
            }
        }
        SeriesCommand::List { list } => {
            let series = publications::list_series(&db, list.limit, list.offset)?;

            if list.json {
                return print_json(&series);
            }
            println!("{:<8} {:<50}", "SLUG", "TITLE");
            println!("{}", "-".repeat(60));
            for s in series {
                println!("{:<8} {:<50}", s.slug, s.title);
            }
        }
    }

    Ok(())
}

pub fn run_publication(config_path: &Path, command: PublicationCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        PublicationCommand::Add {
            title,
            kind,
            series,
            authors,
        } => {
            let kind: PublicationKind = parse_kind(&kind, "publication kind")?;
            let series_id = match series {
                Some(slug) => Some(
                    publications::get_series_by_slug(&db, &slug)?
                        .ok_or_else(|| anyhow::anyhow!("No series with slug '{}'", slug))?
                        .id,
                ),
                None => None,
            };

            let mut author_ids = Vec::new();
            for slug in &authors {
                let creator = creators::get_creator_by_slug(&db, slug)?
                    .ok_or_else(|| anyhow::anyhow!("No creator with slug '{}'", slug))?;
                author_ids.push(creator.id);
            }

            let id = publications::create_publication(
                &db,
                Keys::from(&config),
                &CreatePublication {
                    title,
                    kind,
                    series_id,
                },
            )?;
            for creator_id in author_ids {
                publications::add_role(&db, id, creator_id, "Author", None)?;
            }

            if let Some(publication) = publications::get_publication_by_id(&db, id)? {
                println!("{}", publication.slug);
            }
        }
        PublicationCommand::List { kind, list } => {
            let kind = kind
                .map(|k| parse_kind::<PublicationKind>(&k, "publication kind"))
                .transpose()?;
            let items = publications::list_publications(&db, kind, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            println!("{:<8} {:<50} {:<10}", "SLUG", "TITLE", "KIND");
            println!("{}", "-".repeat(70));
            for publication in items {
                println!(
                    "{:<8} {:<50} {:<10}",
                    publication.slug,
                    publication.title,
                    publication.kind.to_string()
                );
            }
        }
        PublicationCommand::Show { slug, json } => {
            let publication = publications::get_publication_by_slug(&db, &slug)?
                .ok_or_else(|| anyhow::anyhow!("No publication with slug '{}'", slug))?;

            if json {
                return print_json(&publication);
            }
            println!("{} ({})", publication.publication.title, publication.publication.kind);
            if let Some(series) = &publication.series {
                println!("Series: {}", series.title);
            }
            for credit in &publication.credits {
                if credit.role_name.is_empty() {
                    println!("  {}", credit.creator.name);
                } else {
                    println!("  {} ({})", credit.creator.name, credit.role_name);
                }
            }
            for reading in readings::list_publication_readings(&db, publication.publication.id)? {
                println!("Read: {}", reading.period());
            }
        }
        PublicationCommand::Credit {
            publication,
            creator,
            role,
            order,
        } => {
            let publication = publications::get_publication_by_slug(&db, &publication)?
                .ok_or_else(|| anyhow::anyhow!("No publication with slug '{}'", publication))?;
            let creator = creators::get_creator_by_slug(&db, &creator)?
                .ok_or_else(|| anyhow::anyhow!("No creator with slug '{}'", creator))?;

            publications::add_role(&db, publication.publication.id, creator.id, &role, order)?;
            tracing::info!(
                "Credited '{}' on '{}'",
                creator.name,
                publication.publication.title
            );
        }
    }

    Ok(())
}

pub fn run_reading(config_path: &Path, command: ReadingCommand) -> Result<()> {
    let (_config, db) = open(config_path)?;

    match command {
        ReadingCommand::Add {
            publication,
            start,
            start_granularity,
            end,
            end_granularity,
            finished,
        } => {
            let publication = publications::get_publication_by_slug(&db, &publication)?
                .ok_or_else(|| anyhow::anyhow!("No publication with slug '{}'", publication))?;
            let start_granularity: DateGranularity =
                parse_kind(&start_granularity, "date granularity")?;
            let end_granularity: DateGranularity =
                parse_kind(&end_granularity, "date granularity")?;

            let id = readings::create_reading(
                &db,
                &CreateReading {
                    publication_id: publication.publication.id,
                    start_date: start,
                    start_granularity,
                    end_date: end,
                    end_granularity,
                    is_finished: finished,
                },
            )?;
            println!("{}", id);
        }
        ReadingCommand::List {
            publication: Some(slug),
            list,
            ..
        } => {
            let publication = publications::get_publication_by_slug(&db, &slug)?
                .ok_or_else(|| anyhow::anyhow!("No publication with slug '{}'", slug))?;
            let items = readings::list_publication_readings(&db, publication.publication.id)?;

            if list.json {
                return print_json(&items);
            }
            let rows: Vec<_> = items
                .iter()
                .map(|reading| (reading, publication.publication.title.clone()))
                .collect();
            print_readings(&rows);
        }
        ReadingCommand::List {
            publication: None,
            in_progress: true,
            list,
        } => {
            let items = readings::list_in_progress(&db)?;

            if list.json {
                return print_json(&items);
            }
            let mut rows = Vec::new();
            for reading in &items {
                let title = publications::get_publication_by_id(&db, reading.publication_id)?
                    .map(|p| p.title)
                    .unwrap_or_default();
                rows.push((reading, title));
            }
            print_readings(&rows);
        }
        ReadingCommand::List {
            publication: None,
            in_progress: false,
            list,
        } => {
            let items = readings::list_readings(&db, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            let rows: Vec<_> = items
                .iter()
                .map(|item| (&item.reading, item.publication.title.clone()))
                .collect();
            print_readings(&rows);
        }
        ReadingCommand::End {
            id,
            date,
            granularity,
            abandoned,
        } => {
            let granularity: DateGranularity = parse_kind(&granularity, "date granularity")?;
            readings::end_reading(&db, id, date, granularity, !abandoned)?;
        }
        ReadingCommand::Remove { id } => {
            if !readings::delete_reading(&db, id)? {
                anyhow::bail!("No reading with id {}", id);
            }
        }
    }

    Ok(())
}

fn print_readings(rows: &[(&Reading, String)]) {
    println!("{:<6} {:<40} {:<30}", "ID", "TITLE", "WHEN");
    println!("{}", "-".repeat(78));
    for (reading, title) in rows {
        println!("{:<6} {:<40} {:<30}", reading.id, title, reading.period());
    }
}
