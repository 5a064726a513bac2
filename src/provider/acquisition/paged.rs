extern crate async_trait;
extern crate log;

use super::Acquisition;
use crate::{
    client::{
        query::{self, QuestionListData},
        Fetcher, RemoteClient,
    },
    error::{input_error, Error, Kind, Result},
    types::ProblemRecord,
};
use async_trait::async_trait;
use log::{debug, info};
use std::cmp::min;

/// Inclusive range of problem positions to fetch from a question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionRange {
    start: usize,
    stop: usize,
    page_size: usize,
    list_id: String,
}

/// Page layout computed once the remote total is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub start: usize,
    pub stop: usize,
    pub page_size: usize,
    pub pages: usize,
}
impl PagePlan {
    pub fn count(&self) -> usize {
        self.stop - self.start + 1
    }
    pub fn skip(&self, page: usize) -> usize {
        self.start + page * self.page_size
    }
    /// Problems requested for `page`; the last page stops at `stop`.
    pub fn limit(&self, page: usize) -> usize {
        min(self.page_size, self.stop + 1 - self.skip(page))
    }
}

impl AcquisitionRange {
    pub fn new<S: Into<String>>(
        start: usize,
        stop: usize,
        page_size: usize,
        list_id: S,
    ) -> Result<Self> {
        if page_size == 0 {
            return Err(input_error("page size must be greater than 0"));
        }
        if start > stop {
            return Err(input_error(format!(
                "start ({}) must not be greater than stop ({})",
                start, stop
            )));
        }
        Ok(AcquisitionRange {
            start,
            stop,
            page_size,
            list_id: list_id.into(),
        })
    }

    pub fn plan(&self, total: usize) -> Result<PagePlan> {
        if self.start > total {
            return Err(input_error(format!(
                "start ({}) is greater than problems count ({})",
                self.start, total
            )));
        }
        let stop = min(self.stop, total);
        let count = stop - self.start + 1;
        let page_size = min(self.page_size, count);
        Ok(PagePlan {
            start: self.start,
            stop,
            page_size,
            pages: (count + page_size - 1) / page_size,
        })
    }
}

/// Walks a question list page by page.
pub struct PagedAcquisition {
    range: AcquisitionRange,
}
impl PagedAcquisition {
    pub fn new(range: AcquisitionRange) -> Self {
        Self { range }
    }

    async fn total<C: RemoteClient>(&self, fetcher: &Fetcher<C>) -> Result<usize> {
        let data: QuestionListData = fetcher.fetch(&query::count(&self.range.list_id)?).await?;
        Ok(data.list.total.unwrap_or(0))
    }
}

#[async_trait]
impl Acquisition for PagedAcquisition {
    type Record = ProblemRecord;

    async fn acquire<C: RemoteClient>(&self, fetcher: &Fetcher<C>) -> Result<Vec<ProblemRecord>> {
        let plan = self.range.plan(self.total(fetcher).await?)?;
        info!(
            "Fetching {} problems {} per page",
            plan.count(),
            plan.page_size
        );
        let mut problems = Vec::with_capacity(plan.count());
        for page in 0..plan.pages {
            let data: QuestionListData = fetcher
                .fetch(&query::page(
                    &self.range.list_id,
                    plan.skip(page),
                    plan.limit(page),
                )?)
                .await?;
            let questions = data.list.questions.ok_or_else(|| {
                Error::with_description(Kind::Remote, format!("page {} has no questions", page))
            })?;
            debug!("Page {}/{}: {} problems", page + 1, plan.pages, questions.len());
            problems.extend(questions);
        }
        info!("Fetched {} problems", problems.len());
        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Class;

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            AcquisitionRange::new(0, 10, 0, "").unwrap_err().class(),
            Class::Validation
        );
        assert!(AcquisitionRange::new(5, 4, 10, "").is_err());
        assert!(AcquisitionRange::new(4, 4, 10, "").is_ok());
    }

    #[test]
    fn plan_clamps_stop_and_page_size() {
        let range = AcquisitionRange::new(0, 4096, 100, "").unwrap();
        assert_eq!(
            range.plan(49).unwrap(),
            PagePlan {
                start: 0,
                stop: 49,
                page_size: 50,
                pages: 1
            }
        );
    }

    #[test]
    fn plan_rounds_pages_up() {
        let plan = AcquisitionRange::new(10, 34, 10, "").unwrap().plan(3000).unwrap();
        assert_eq!(plan.count(), 25);
        assert_eq!(plan.pages, 3);
        assert_eq!(plan.skip(0), 10);
        assert_eq!(plan.skip(2), 30);
        assert_eq!(plan.limit(0), 10);
        assert_eq!(plan.limit(2), 5);
    }

    #[test]
    fn last_page_stops_at_range_end() {
        let plan = AcquisitionRange::new(0, 9, 3, "").unwrap().plan(50).unwrap();
        assert_eq!(plan.pages, 4);
        let limits: Vec<usize> = (0..plan.pages).map(|p| plan.limit(p)).collect();
        assert_eq!(limits, vec![3, 3, 3, 1]);
        assert_eq!(limits.iter().sum::<usize>(), plan.count());
    }

    #[test]
    fn one_per_page() {
        let plan = AcquisitionRange::new(0, 2, 1, "").unwrap().plan(100).unwrap();
        assert_eq!(plan.pages, 3);
        assert_eq!(plan.page_size, 1);
    }

    #[test]
    fn start_past_total() {
        let err = AcquisitionRange::new(20, 30, 10, "").unwrap().plan(10).unwrap_err();
        assert_eq!(err.class(), Class::Validation);
    }
}
