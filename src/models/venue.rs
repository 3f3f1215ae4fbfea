use super::{SortAs, Sortable};
use serde::{Deserialize, Serialize};

/// Where an event happens.
#[derive(Debug, Clone, Serialize)]
pub struct Venue {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub name_sort: String,
    pub city: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    pub city: Option<String>,
}

impl Sortable for CreateVenue {
    fn sort_source(&self) -> &str {
        &self.name
    }

    fn sort_as(&self) -> SortAs {
        SortAs::Thing
    }
}
