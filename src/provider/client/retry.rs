extern crate log;
extern crate tokio;

use crate::{
    config::retry::{RETRY_COUNT, RETRY_DELAY},
    error::{Class, Result},
};
use log::{error, warn};
use std::{future::Future, time::Duration};
use tokio::time::sleep;

/// Bounded re-attempts with a fixed delay, applied only to the listed error classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    times: u32,
    delay: Duration,
    retry_on: Vec<Class>,
}
impl RetryPolicy {
    pub fn new(times: u32, delay: Duration) -> Self {
        Self {
            times: times.max(1),
            delay,
            retry_on: vec![Class::Transient],
        }
    }
    pub fn retry_on(mut self, classes: &[Class]) -> Self {
        self.retry_on = classes.to_vec();
        self
    }
    pub fn times(&self) -> u32 {
        self.times
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `fun` until it succeeds, fails with an unlisted class, or the last
    /// attempt is used. The last attempt's error is returned whatever its class.
    pub async fn run<F, U, Out>(&self, what: &str, fun: F) -> Result<Out>
    where
        F: Fn() -> U,
        U: Future<Output = Result<Out>>,
    {
        for attempt in 1..self.times {
            match fun().await {
                Ok(v) => return Ok(v),
                Err(e) if self.retry_on.contains(&e.class()) => {
                    warn!("{} failed, try {}/{}: {}", what, attempt, self.times, e);
                    sleep(self.delay).await;
                }
                Err(e) => return Err(e),
            }
        }
        if self.times > 1 {
            error!("{}: last try", what);
        }
        fun().await
    }
}
impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_COUNT, RETRY_DELAY)
    }
}
