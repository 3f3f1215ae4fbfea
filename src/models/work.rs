use super::{SortAs, Sortable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkKind {
    ClassicalWork,
    DancePiece,
    Exhibition,
    #[default]
    Movie,
    Play,
}

impl FromStr for WorkKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classicalwork" => Ok(Self::ClassicalWork),
            "dancepiece" => Ok(Self::DancePiece),
            "exhibition" => Ok(Self::Exhibition),
            "movie" => Ok(Self::Movie),
            "play" => Ok(Self::Play),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for WorkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassicalWork => write!(f, "classicalwork"),
            Self::DancePiece => write!(f, "dancepiece"),
            Self::Exhibition => write!(f, "exhibition"),
            Self::Movie => write!(f, "movie"),
            Self::Play => write!(f, "play"),
        }
    }
}

/// A movie, play, etc. itself, not an occasion on which it was seen.
#[derive(Debug, Clone, Serialize)]
pub struct Work {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub title_sort: String,
    pub kind: WorkKind,
    pub year: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWork {
    pub title: String,
    #[serde(default)]
    pub kind: WorkKind,
    pub year: Option<i32>,
}

impl Sortable for CreateWork {
    fn sort_source(&self) -> &str {
        &self.title
    }

    fn sort_as(&self) -> SortAs {
        SortAs::Thing
    }
}

/// Links a creator to a work, e.g. as "Director" or "Playwright".
#[derive(Debug, Clone, Serialize)]
pub struct WorkRole {
    pub id: i64,
    pub creator_id: i64,
    pub work_id: i64,
    pub role_name: String,
    pub role_order: i32,
}
