extern crate async_trait;

use crate::{
    client::{Fetcher, RemoteClient},
    error::Result,
    types::ProblemRecord,
};
use async_trait::async_trait;

pub mod manifest;
pub mod paged;

pub use manifest::{AnnotatedProblem, ManifestAcquisition};
pub use paged::{AcquisitionRange, PagePlan, PagedAcquisition};

/// A way of filling a problem cache.
///
/// `acquire` is all or nothing: the first error that survives the retry
/// policy aborts it, and nothing fetched so far is returned.
#[async_trait]
pub trait Acquisition: Send + Sync {
    type Record: AsRef<ProblemRecord> + Send + Sync;

    async fn acquire<C: RemoteClient>(&self, fetcher: &Fetcher<C>) -> Result<Vec<Self::Record>>;
}

impl AsRef<ProblemRecord> for ProblemRecord {
    fn as_ref(&self) -> &ProblemRecord {
        self
    }
}
