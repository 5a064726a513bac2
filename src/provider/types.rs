extern crate serde;
extern crate serde_json;

use crate::error::{Error, Kind, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicTag {
    pub name: String,
    pub slug: String,
}

/// One problem as returned by the question and question list queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemRecord {
    #[serde(rename = "titleSlug")]
    pub slug: String,
    #[serde(rename = "questionFrontendId")]
    pub frontend_id: String,
    pub title: String,
    #[serde(rename = "categoryTitle", default)]
    pub category: String,
    #[serde(default)]
    pub content: Option<String>,
    pub difficulty: String,
    #[serde(rename = "isPaidOnly", default)]
    pub paid_only: bool,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub dislikes: Option<i64>,
    /// JSON encoded object, the remote sends it as a string.
    #[serde(default)]
    pub stats: String,
    #[serde(rename = "freqBar", default)]
    pub freq_bar: Option<f64>,
    #[serde(rename = "topicTags", default)]
    pub topic_tags: Vec<TopicTag>,
    #[serde(default)]
    pub hints: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}
impl Difficulty {
    /// Coloured html, ready to be put into a card.
    pub fn html(self) -> &'static str {
        match self {
            Self::Easy => "<font color='green'>Easy</font>",
            Self::Medium => "<font color='orange'>Medium</font>",
            Self::Hard => "<font color='red'>Hard</font>",
        }
    }
}
impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(Error::with_kind(Kind::Difficulty(other.to_string()))),
        }
    }
}
impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: u64,
    pub accepted: u64,
}
impl Stats {
    pub fn parse(blob: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(blob).map_err(|e| {
            Error::with_description(Kind::Counter("stats"), e.to_string())
        })?;
        Ok(Stats {
            total: counter(&value, "totalSubmissionRaw")?,
            accepted: counter(&value, "totalAcceptedRaw")?,
        })
    }
    /// Percentage of accepted submissions, rounded down. `None` when there
    /// are no submissions at all.
    pub fn accept_rate(&self) -> Result<Option<u64>> {
        if self.total == 0 {
            return Ok(None);
        }
        self.accepted
            .checked_mul(100)
            .map(|scaled| Some(scaled / self.total))
            .ok_or_else(|| {
                Error::with_description(
                    Kind::Counter("totalAcceptedRaw"),
                    self.accepted.to_string(),
                )
            })
    }
}

fn counter(stats: &Value, field: &'static str) -> Result<u64> {
    match stats.get(field) {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| Error::with_kind(Kind::Counter(field)))
}
