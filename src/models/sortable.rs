use crate::services::naturalize::{naturalize, SortConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a display string is turned into a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortAs {
    /// Surname first: "wallace, david foster".
    Person,
    /// Leading article last: "long blondes, the".
    #[default]
    Thing,
}

impl FromStr for SortAs {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" => Ok(Self::Person),
            "thing" => Ok(Self::Thing),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SortAs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Thing => write!(f, "thing"),
        }
    }
}

/// A record with a human-facing name that is stored alongside a sort key.
pub trait Sortable {
    /// The string the sort key is derived from.
    fn sort_source(&self) -> &str;

    fn sort_as(&self) -> SortAs;

    fn sort_key(&self, config: &SortConfig) -> String {
        naturalize(self.sort_source(), self.sort_as(), config)
    }
}
