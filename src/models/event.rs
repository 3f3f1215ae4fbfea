use super::{Credit, SortAs, Sortable, Venue, Work};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Cinema,
    Comedy,
    Concert,
    Dance,
    Museum,
    #[default]
    Gig,
    Theatre,
}

impl FromStr for EventKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cinema" => Ok(Self::Cinema),
            "comedy" => Ok(Self::Comedy),
            "concert" => Ok(Self::Concert),
            "dance" => Ok(Self::Dance),
            "museum" => Ok(Self::Museum),
            "gig" => Ok(Self::Gig),
            "theatre" => Ok(Self::Theatre),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cinema => write!(f, "cinema"),
            Self::Comedy => write!(f, "comedy"),
            Self::Concert => write!(f, "concert"),
            Self::Dance => write!(f, "dance"),
            Self::Museum => write!(f, "museum"),
            Self::Gig => write!(f, "gig"),
            Self::Theatre => write!(f, "theatre"),
        }
    }
}

/// Something that happened at a particular venue on a particular date.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub title_sort: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub venue_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(default)]
    pub kind: EventKind,
    pub date: NaiveDate,
    pub venue_id: Option<i64>,
}

impl Sortable for CreateEvent {
    fn sort_source(&self) -> &str {
        &self.title
    }

    fn sort_as(&self) -> SortAs {
        SortAs::Thing
    }
}

/// Links a creator to an event, e.g. as "Headliner" or "Support".
#[derive(Debug, Clone, Serialize)]
pub struct EventRole {
    pub id: i64,
    pub creator_id: i64,
    pub event_id: i64,
    pub role_name: String,
    pub role_order: i32,
}

/// An event with everything it links to.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub venue: Option<Venue>,
    pub credits: Vec<Credit>,
    pub works: Vec<Work>,
}
