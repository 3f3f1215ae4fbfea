use super::parse_kind;
use crate::models::SortAs;
use crate::services::{naturalize, slug, text_slug};
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub fn print_sort_key(config_path: &Path, text: &str, sort_as: &str) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let sort_as: SortAs = parse_kind(sort_as, "sort mode")?;
    println!("{}", naturalize::naturalize(text, sort_as, &config.sorting));
    Ok(())
}

pub fn print_slug(config_path: &Path, id: i64) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    println!("{}", slug::generate_slug(id, &config.slugs)?);
    Ok(())
}

pub fn print_decoded_slug(config_path: &Path, value: &str) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    match slug::decode_slug(value, &config.slugs)? {
        Some(id) => println!("{}", id),
        None => anyhow::bail!("'{}' was not generated with the configured alphabet and salt", value),
    }
    Ok(())
}

pub fn print_text_slug(text: &str) -> Result<()> {
    let slug = text_slug::slugify(text);
    if !text_slug::validate_slug(&slug) {
        anyhow::bail!("Cannot make a slug from '{}'", text);
    }
    println!("{}", slug);
    Ok(())
}
