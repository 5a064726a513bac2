pub mod acquisition;
pub mod cache;
pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod manifest;
pub mod types;

pub use acquisition::{AcquisitionRange, ManifestAcquisition, PagedAcquisition};
pub use client::{RateGate, RemoteClient, RetryPolicy, Session};
pub use data::{ManifestProvider, PagedProvider, Provider};
pub use error::{Error, Result};
