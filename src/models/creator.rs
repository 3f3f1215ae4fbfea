use super::{SortAs, Sortable};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreatorKind {
    #[default]
    Individual,
    Group,
}

impl CreatorKind {
    /// Individuals are filed by surname, groups like any other title.
    pub fn sort_as(self) -> SortAs {
        match self {
            Self::Individual => SortAs::Person,
            Self::Group => SortAs::Thing,
        }
    }
}

impl FromStr for CreatorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "group" => Ok(Self::Group),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CreatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Individual => write!(f, "individual"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// A person or a group responsible for all or part of a book, play, gig, etc.
#[derive(Debug, Clone, Serialize)]
pub struct Creator {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub name_sort: String,
    pub kind: CreatorKind,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCreator {
    pub name: String,
    #[serde(default)]
    pub kind: CreatorKind,
}

impl Sortable for CreateCreator {
    fn sort_source(&self) -> &str {
        &self.name
    }

    fn sort_as(&self) -> SortAs {
        self.kind.sort_as()
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateCreator {
    pub name: Option<String>,
    pub kind: Option<CreatorKind>,
}

/// A creator's position in a chart of who appears most often.
#[derive(Debug, Clone, Serialize)]
pub struct CreatorWithCount {
    #[serde(flatten)]
    pub creator: Creator,
    pub count: i64,
}
