extern crate csv;
extern crate serde;

use crate::{
    config::remote::PROBLEM_URL_PREFIX,
    error::{input_error, Result},
};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A problem named by the one-line-leet collection, with its annotations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub slug: String,
    /// Bracketed, comma separated short tags, e.g. `[dp,greedy]`.
    pub short: String,
    pub description: String,
}
impl ManifestEntry {
    pub fn new<S: Into<String>>(slug: S, short: S, description: S) -> Self {
        Self {
            slug: slug.into(),
            short: short.into(),
            description: description.into(),
        }
    }
    pub fn short_tags(&self) -> Vec<String> {
        let stripped = self.short.replace('[', "").replace(']', "");
        if stripped.trim().is_empty() {
            Vec::new()
        } else {
            stripped.split(',').map(|s| s.trim().to_string()).collect()
        }
    }
}

#[derive(Deserialize)]
struct Row {
    #[allow(dead_code)]
    title: String,
    url: String,
    #[allow(dead_code)]
    level: String,
    #[allow(dead_code)]
    category: String,
    oll_short: String,
    oll_desc: String,
}

pub fn slug_from_url(url: &str) -> Result<String> {
    url.trim()
        .strip_prefix(PROBLEM_URL_PREFIX)
        .map(|rest| rest.replace('/', ""))
        .filter(|slug| !slug.is_empty())
        .ok_or_else(|| input_error(format!("{} is not a problem url", url)))
}

/// Read a manifest CSV; the first row is a header and is skipped.
pub fn from_reader<R: Read>(rdr: R) -> Result<Vec<ManifestEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .quote(b'"')
        .from_reader(rdr);
    let mut ret = Vec::new();
    for row in reader.records() {
        let row: Row = row?.deserialize(None)?;
        ret.push(ManifestEntry {
            slug: slug_from_url(&row.url)?,
            short: row.oll_short,
            description: row.oll_desc,
        });
    }
    Ok(ret)
}
