extern crate log;
extern crate tokio;

use crate::{
    acquisition::{AnnotatedProblem, Acquisition, ManifestAcquisition, PagedAcquisition},
    cache::Cache,
    client::{Fetcher, RateGate, RemoteClient, RetryPolicy},
    error::{not_cached, Error, Kind, Result},
    types::{Difficulty, ProblemRecord, Stats},
};
use log::{error, info};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::OnceCell;

/// Read access to problems fetched by one acquisition strategy.
///
/// Construction does no I/O. [`Provider::populate`] runs the strategy once;
/// every accessor fails until it has completed.
pub struct Provider<A: Acquisition, C> {
    fetcher: Fetcher<C>,
    strategy: A,
    cache: OnceCell<Cache<A::Record>>,
    failed: AtomicBool,
}

pub type PagedProvider<C> = Provider<PagedAcquisition, C>;
pub type ManifestProvider<C> = Provider<ManifestAcquisition, C>;

impl<A: Acquisition, C: RemoteClient> Provider<A, C> {
    pub fn new(client: Arc<C>, strategy: A) -> Self {
        Self {
            fetcher: Fetcher::new(client),
            strategy,
            cache: OnceCell::new(),
            failed: AtomicBool::new(false),
        }
    }
    pub fn with_gate(mut self, gate: RateGate) -> Self {
        self.fetcher = self.fetcher.with_gate(gate);
        self
    }
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.fetcher = self.fetcher.with_retry(retry);
        self
    }

    /// Fill the cache. Concurrent and repeated calls share a single
    /// acquisition; after a failed one the provider refuses to populate again.
    pub async fn populate(&self) -> Result<&Cache<A::Record>> {
        if self.failed.load(Ordering::Acquire) {
            return Err(Error::with_kind(Kind::Abandoned));
        }
        self.cache
            .get_or_try_init(|| async {
                // A caller queued behind a failed acquisition must not start another.
                if self.failed.load(Ordering::Acquire) {
                    return Err(Error::with_kind(Kind::Abandoned));
                }
                match self.strategy.acquire(&self.fetcher).await {
                    Ok(records) => {
                        let cache = Cache::from_records(records, |r| r.as_ref().slug.as_str());
                        info!("Cached {} problems", cache.len());
                        Ok(cache)
                    }
                    Err(e) => {
                        error!("Acquisition failed: {}", e);
                        self.failed.store(true, Ordering::Release);
                        Err(e)
                    }
                }
            })
            .await
    }
    pub fn is_populated(&self) -> bool {
        self.cache.initialized()
    }

    fn cache(&self) -> Result<&Cache<A::Record>> {
        self.cache
            .get()
            .ok_or_else(|| Error::with_kind(Kind::NotPopulated))
    }
    fn record(&self, slug: &str) -> Result<&A::Record> {
        self.cache()?.get(slug).ok_or_else(|| not_cached(slug))
    }
    fn problem(&self, slug: &str) -> Result<&ProblemRecord> {
        self.record(slug).map(|r| r.as_ref())
    }

    /// Every cached slug, e.g. `["two-sum", "three-sum"]`.
    pub fn all_problems_handles(&self) -> Result<Vec<String>> {
        Ok(self.cache()?.slugs().to_vec())
    }
    pub fn contains(&self, slug: &str) -> Result<bool> {
        Ok(self.cache()?.contains(slug))
    }

    pub fn description(&self, slug: &str) -> Result<String> {
        Ok(self
            .problem(slug)?
            .content
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| String::from("No content")))
    }
    pub fn difficulty(&self, slug: &str) -> Result<Difficulty> {
        self.problem(slug)?.difficulty.parse()
    }
    pub fn paid(&self, slug: &str) -> Result<bool> {
        Ok(self.problem(slug)?.paid_only)
    }
    pub fn problem_id(&self, slug: &str) -> Result<String> {
        Ok(self.problem(slug)?.frontend_id.clone())
    }
    pub fn title(&self, slug: &str) -> Result<String> {
        Ok(self.problem(slug)?.title.clone())
    }
    pub fn category(&self, slug: &str) -> Result<String> {
        Ok(self.problem(slug)?.category.clone())
    }
    pub fn likes(&self, slug: &str) -> Result<u64> {
        vote_count(self.problem(slug)?.likes, "likes")
    }
    pub fn dislikes(&self, slug: &str) -> Result<u64> {
        vote_count(self.problem(slug)?.dislikes, "dislikes")
    }

    /// Topic tag slugs plus a synthesized `difficulty-<level>-tag`.
    pub fn tags(&self, slug: &str) -> Result<Vec<String>> {
        let problem = self.problem(slug)?;
        let mut tags: Vec<String> = problem.topic_tags.iter().map(|t| t.slug.clone()).collect();
        tags.push(format!(
            "difficulty-{}-tag",
            problem.difficulty.to_lowercase()
        ));
        Ok(tags)
    }
    pub fn freq_bar(&self, slug: &str) -> Result<f64> {
        Ok(self.problem(slug)?.freq_bar.unwrap_or(0.0))
    }
    /// Hints joined as html lines, empty when the problem has none.
    pub fn hint(&self, slug: &str) -> Result<String> {
        Ok(self
            .problem(slug)?
            .hints
            .as_ref()
            .map(|h| h.join("<br/>"))
            .unwrap_or_default())
    }

    pub fn stats(&self, slug: &str) -> Result<Stats> {
        Stats::parse(&self.problem(slug)?.stats)
    }
    pub fn submissions_total(&self, slug: &str) -> Result<u64> {
        Ok(self.stats(slug)?.total)
    }
    pub fn submissions_accepted(&self, slug: &str) -> Result<u64> {
        Ok(self.stats(slug)?.accepted)
    }
    /// Accepted share of all submissions in whole percent, rounded down.
    /// Fails for a problem nobody has submitted to.
    pub fn accept_rate(&self, slug: &str) -> Result<u64> {
        self.stats(slug)?
            .accept_rate()?
            .ok_or_else(|| Error::with_kind(Kind::ZeroSubmissions(slug.to_string())))
    }
}

impl<C: RemoteClient> Provider<ManifestAcquisition, C> {
    fn annotated(&self, slug: &str) -> Result<&AnnotatedProblem> {
        self.record(slug)
    }
    pub fn oll_short(&self, slug: &str) -> Result<Vec<String>> {
        Ok(self.annotated(slug)?.annotation.short_tags())
    }
    pub fn oll_desc(&self, slug: &str) -> Result<String> {
        Ok(self.annotated(slug)?.annotation.description.clone())
    }
}

fn vote_count(value: Option<i64>, field: &'static str) -> Result<u64> {
    match value {
        Some(v) if v >= 0 => Ok(v as u64),
        Some(v) => Err(Error::with_description(Kind::Counter(field), v.to_string())),
        None => Err(Error::with_kind(Kind::Counter(field))),
    }
}
