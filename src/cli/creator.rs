use super::{open, parse_kind, print_json, CreatorCommand};
use crate::models::{CreateCreator, CreatorKind, UpdateCreator};
use crate::services::catalogue::Keys;
use crate::services::{creators, publications};
use crate::Database;
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, command: CreatorCommand) -> Result<()> {
    let (config, db) = open(config_path)?;

    match command {
        CreatorCommand::Add { name, kind } => {
            let kind: CreatorKind = parse_kind(&kind, "creator kind")?;
            let id = creators::create_creator(&db, Keys::from(&config), &CreateCreator { name, kind })?;
            if let Some(creator) = creators::get_creator_by_id(&db, id)? {
                println!("{}", creator.slug);
            }
        }
        CreatorCommand::List { kind, list } => {
            let kind = kind
                .map(|k| parse_kind::<CreatorKind>(&k, "creator kind"))
                .transpose()?;
            let items = creators::list_creators(&db, kind, list.limit, list.offset)?;

            if list.json {
                return print_json(&items);
            }
            println!("{:<8} {:<40} {:<10}", "SLUG", "NAME", "KIND");
            println!("{}", "-".repeat(60));
            for creator in items {
                println!("{:<8} {:<40} {:<10}", creator.slug, creator.name, creator.kind.to_string());
            }
        }
        CreatorCommand::Show { slug, json } => {
            let creator = find(&db, &slug)?;
            let credited = publications::list_creator_publications(&db, creator.id)?;

            if json {
                return print_json(&serde_json::json!({
                    "creator": creator,
                    "publications": credited,
                }));
            }
            println!("{} ({})", creator.name, creator.kind);
            println!("Sorts as: {}", creator.name_sort);
            for publication in credited {
                println!("  {:<8} {}", publication.slug, publication.title);
            }
        }
        CreatorCommand::Rename { slug, name } => {
            let creator = find(&db, &slug)?;
            creators::update_creator(
                &db,
                &config.sorting,
                creator.id,
                UpdateCreator {
                    name: Some(name),
                    ..Default::default()
                },
            )?;
        }
        CreatorCommand::Remove { slug } => {
            let creator = find(&db, &slug)?;
            creators::delete_creator(&db, creator.id)?;
        }
        CreatorCommand::Chart { limit, json } => {
            let chart = creators::creator_chart(&db, limit)?;

            if json {
                return print_json(&chart);
            }
            for entry in chart {
                println!(
                    "{:>3}. {:<40} {}",
                    entry.position, entry.item.creator.name, entry.item.count
                );
            }
        }
    }

    Ok(())
}

fn find(db: &Database, slug: &str) -> Result<crate::models::Creator> {
    creators::get_creator_by_slug(db, slug)?
        .ok_or_else(|| anyhow::anyhow!("No creator with slug '{}'", slug))
}
