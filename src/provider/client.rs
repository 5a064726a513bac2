extern crate async_trait;
extern crate serde;
extern crate serde_json;

use crate::error::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub mod gate;
pub mod query;
pub mod retry;
pub mod session;

pub use gate::RateGate;
pub use retry::RetryPolicy;
pub use session::Session;

/// A GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: Value,
}
impl Query {
    pub fn new<V: Serialize>(
        operation_name: &'static str,
        query: &'static str,
        variables: &V,
    ) -> Result<Self> {
        Ok(Query {
            operation_name,
            query,
            variables: serde_json::to_value(variables)?,
        })
    }
}

/// Performs exactly one network call per invocation and never retries.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Send `query` and return the `data` object of the answer.
    async fn post(&self, query: &Query) -> Result<Value>;
}

#[async_trait]
impl<C: RemoteClient + ?Sized> RemoteClient for Arc<C> {
    async fn post(&self, query: &Query) -> Result<Value> {
        self.as_ref().post(query).await
    }
}

/// Paces and retries every call sent through a [`RemoteClient`].
///
/// The gate sits inside the retry loop, so each attempt waits for it.
pub struct Fetcher<C> {
    client: Arc<C>,
    gate: RateGate,
    retry: RetryPolicy,
}
impl<C: RemoteClient> Fetcher<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            gate: RateGate::default(),
            retry: RetryPolicy::default(),
        }
    }
    pub fn with_gate(mut self, gate: RateGate) -> Self {
        self.gate = gate;
        self
    }
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub async fn fetch<T: DeserializeOwned>(&self, query: &Query) -> Result<T> {
        let client = &self.client;
        let gate = &self.gate;
        let data = self
            .retry
            .run(query.operation_name, move || async move {
                gate.pass().await;
                client.post(query).await
            })
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
