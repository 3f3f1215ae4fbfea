use super::Publication;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How precisely a reading date is known. Stored using Flickr's date
/// granularity codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateGranularity {
    #[default]
    Day,
    Month,
    Year,
}

impl DateGranularity {
    pub fn code(self) -> i32 {
        match self {
            Self::Day => 3,
            Self::Month => 4,
            Self::Year => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            3 => Some(Self::Day),
            4 => Some(Self::Month),
            6 => Some(Self::Year),
            _ => None,
        }
    }

    /// "3 Sep 2017", "Sep 2017" or "2017".
    pub fn format(self, date: NaiveDate) -> String {
        let pattern = match self {
            Self::Day => "%-d %b %Y",
            Self::Month => "%b %Y",
            Self::Year => "%Y",
        };
        date.format(pattern).to_string()
    }
}

impl FromStr for DateGranularity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for DateGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// A period when a publication was read.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub id: i64,
    pub publication_id: i64,
    pub start_date: Option<NaiveDate>,
    pub start_granularity: DateGranularity,
    pub end_date: Option<NaiveDate>,
    pub end_granularity: DateGranularity,
    pub is_finished: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Reading {
    /// Started but with no end date yet.
    pub fn is_in_progress(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_none()
    }

    /// The dates at their own precision, e.g. "1 Feb 2017 to Mar 2017".
    pub fn period(&self) -> String {
        let start = self.start_date.map(|d| self.start_granularity.format(d));
        let end = self.end_date.map(|d| self.end_granularity.format(d));
        match (start, end) {
            (Some(start), Some(end)) => format!("{} to {}", start, end),
            (Some(start), None) => format!("started {}", start),
            (None, Some(end)) => format!("finished {}", end),
            (None, None) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReading {
    pub publication_id: i64,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_granularity: DateGranularity,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_granularity: DateGranularity,
    #[serde(default)]
    pub is_finished: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadingWithPublication {
    #[serde(flatten)]
    pub reading: Reading,
    pub publication: Publication,
}
