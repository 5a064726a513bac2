extern crate csv;
extern crate reqwest;
extern crate serde_json;

use reqwest::StatusCode;
use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

/// How an error should be treated by callers and by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    /// Connection resets and protocol level I/O failures, worth another attempt.
    Transient,
    /// Credentials, malformed queries and remote side rejections.
    Fatal,
    /// Faults in caller supplied input or in the shape of a cached record.
    Validation,
}

#[derive(Debug)]
pub enum Kind {
    Network(reqwest::Error),
    Io(io::Error),
    Status(StatusCode),
    Credential,
    Remote,
    Decode(serde_json::Error),
    Missing(String),
    Input,
    Manifest(csv::Error),
    NotCached(String),
    NotPopulated,
    Abandoned,
    Difficulty(String),
    Counter(&'static str),
    ZeroSubmissions(String),
}

#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

#[derive(Debug)]
pub struct Error(Box<Inner>);

pub type Result<T> = StdResult<T, Error>;

impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }

    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    pub fn class(&self) -> Class {
        match &self.0.kind {
            Kind::Network(e) => network_class(e),
            Kind::Io(_) => Class::Transient,
            Kind::Status(s) => status_class(*s),
            Kind::Credential
            | Kind::Remote
            | Kind::Decode(_)
            | Kind::Missing(_)
            | Kind::Abandoned => Class::Fatal,
            Kind::Input
            | Kind::Manifest(_)
            | Kind::NotCached(_)
            | Kind::NotPopulated
            | Kind::Difficulty(_)
            | Kind::Counter(_)
            | Kind::ZeroSubmissions(_) => Class::Validation,
        }
    }
    pub fn is_transient(&self) -> bool {
        self.class() == Class::Transient
    }

    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

fn status_class(status: StatusCode) -> Class {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Class::Transient
    } else {
        Class::Fatal
    }
}
fn network_class(err: &reqwest::Error) -> Class {
    if err.is_builder() || err.is_redirect() || err.is_decode() {
        Class::Fatal
    } else if let Some(s) = err.status() {
        status_class(s)
    } else {
        Class::Transient
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Network(e) => write!(f, "Error sending request: {}", e),
            Kind::Io(e) => write!(f, "Connection failed: {}", e),
            Kind::Status(s) => write!(f, "Remote answered with status {}", s),
            Kind::Credential => {
                write!(f, "Invalid session credential")?;
                self.write_description(f)
            }
            Kind::Remote => {
                write!(f, "Remote rejected query")?;
                self.write_description(f)
            }
            Kind::Decode(e) => write!(f, "Malformed response: {}", e),
            Kind::Missing(slug) => write!(f, "Remote has no problem {}", slug),
            Kind::Input => {
                write!(f, "Invalid input")?;
                self.write_description(f)
            }
            Kind::Manifest(e) => write!(f, "Error reading manifest: {}", e),
            Kind::NotCached(slug) => write!(f, "Problem {} is not in cache", slug),
            Kind::NotPopulated => write!(f, "Problem cache is not populated yet"),
            Kind::Abandoned => write!(f, "A previous acquisition failed, provider is unusable"),
            Kind::Difficulty(d) => write!(f, "Incorrect difficulty: {}", d),
            Kind::Counter(field) => {
                write!(f, "Counter {} is missing or not a non-negative integer", field)?;
                self.write_description(f)
            }
            Kind::ZeroSubmissions(slug) => {
                write!(f, "Problem {} has no submissions, accept rate undefined", slug)
            }
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Network(e) => Some(e),
            Kind::Io(e) => Some(e),
            Kind::Decode(e) => Some(e),
            Kind::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::with_kind(Kind::Network(err))
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::with_kind(Kind::Io(err))
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_kind(Kind::Decode(err))
    }
}
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::with_kind(Kind::Manifest(err))
    }
}

pub(crate) fn not_cached(slug: &str) -> Error {
    Error::with_kind(Kind::NotCached(slug.to_string()))
}
pub(crate) fn input_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Input, description)
}
