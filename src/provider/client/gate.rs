extern crate tokio;

use crate::config::gate::REQUEST_DELAY;
use std::time::Duration;
use tokio::time::sleep;

/// Fixed pause taken before every outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateGate {
    interval: Duration,
}
impl RateGate {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
    pub async fn pass(&self) {
        if !self.interval.is_zero() {
            sleep(self.interval).await;
        }
    }
}
impl Default for RateGate {
    fn default() -> Self {
        Self::new(REQUEST_DELAY)
    }
}
