use super::{Creator, SortAs, Sortable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PublicationKind {
    #[default]
    Book,
    Periodical,
}

impl FromStr for PublicationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" => Ok(Self::Book),
            "periodical" => Ok(Self::Periodical),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => write!(f, "book"),
            Self::Periodical => write!(f, "periodical"),
        }
    }
}

/// A named run of publications, e.g. a magazine or a book series.
#[derive(Debug, Clone, Serialize)]
pub struct PublicationSeries {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub title_sort: String,
    pub url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublicationSeries {
    pub title: String,
    pub url: Option<String>,
}

impl Sortable for CreatePublicationSeries {
    fn sort_source(&self) -> &str {
        &self.title
    }

    fn sort_as(&self) -> SortAs {
        SortAs::Thing
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Publication {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub title_sort: String,
    pub kind: PublicationKind,
    pub series_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublication {
    pub title: String,
    #[serde(default)]
    pub kind: PublicationKind,
    pub series_id: Option<i64>,
}

impl Sortable for CreatePublication {
    fn sort_source(&self) -> &str {
        &self.title
    }

    fn sort_as(&self) -> SortAs {
        SortAs::Thing
    }
}

/// Links a creator to a publication, e.g. as "Author" or "Illustrator".
#[derive(Debug, Clone, Serialize)]
pub struct PublicationRole {
    pub id: i64,
    pub creator_id: i64,
    pub publication_id: i64,
    pub role_name: String,
    pub role_order: i32,
}

/// A creator as credited on one publication.
#[derive(Debug, Clone, Serialize)]
pub struct Credit {
    pub creator: Creator,
    pub role_name: String,
    pub role_order: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicationWithCredits {
    #[serde(flatten)]
    pub publication: Publication,
    pub series: Option<PublicationSeries>,
    pub credits: Vec<Credit>,
}
