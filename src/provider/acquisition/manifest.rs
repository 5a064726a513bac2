extern crate async_trait;
extern crate log;

use super::Acquisition;
use crate::{
    client::{
        query::{self, QuestionData},
        Fetcher, RemoteClient,
    },
    error::{Error, Kind, Result},
    manifest::ManifestEntry,
    types::ProblemRecord,
};
use async_trait::async_trait;
use log::{info, warn};

/// A fetched problem together with the manifest entry that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedProblem {
    pub details: ProblemRecord,
    pub annotation: ManifestEntry,
}
impl AsRef<ProblemRecord> for AnnotatedProblem {
    fn as_ref(&self) -> &ProblemRecord {
        &self.details
    }
}

/// Resolves a known list of slugs one request at a time.
pub struct ManifestAcquisition {
    entries: Vec<ManifestEntry>,
    limit: Option<usize>,
}
impl ManifestAcquisition {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self {
            entries,
            limit: None,
        }
    }
    /// Only resolve the first `limit` entries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
    pub fn entries(&self) -> &[ManifestEntry] {
        let end = self
            .limit
            .map_or(self.entries.len(), |l| l.min(self.entries.len()));
        &self.entries[..end]
    }
}

#[async_trait]
impl Acquisition for ManifestAcquisition {
    type Record = AnnotatedProblem;

    async fn acquire<C: RemoteClient>(&self, fetcher: &Fetcher<C>) -> Result<Vec<AnnotatedProblem>> {
        let entries = self.entries();
        let mut problems = Vec::with_capacity(entries.len());
        for entry in entries {
            info!("Get problem: {}", entry.slug);
            let data: QuestionData = fetcher.fetch(&query::question(&entry.slug)?).await?;
            let details = data
                .question
                .ok_or_else(|| Error::with_kind(Kind::Missing(entry.slug.clone())))?;
            if details.slug != entry.slug {
                warn!(
                    "Requested {} but remote answered {}, caching under the latter",
                    entry.slug, details.slug
                );
            }
            problems.push(AnnotatedProblem {
                details,
                annotation: entry.clone(),
            });
        }
        info!("Problems count: {}", problems.len());
        Ok(problems)
    }
}
