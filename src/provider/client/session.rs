extern crate async_trait;
extern crate log;
extern crate regex;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::{Query, RemoteClient};
use crate::{
    config::{
        remote::{BASE_URL, GRAPHQL_URL},
        session::{SESSION_ENV, VERBOSE},
    },
    error::{Error, Kind, Result},
};
use async_trait::async_trait;
use log::{debug, info};
use regex::Regex;
use reqwest::{
    cookie::{CookieStore, Jar},
    header::REFERER,
    Client, Url,
};
use serde::Deserialize;
use serde_json::Value;
use std::{env, sync::Arc};

fn csrf_pattern() -> Regex {
    Regex::new("csrftoken=([^;]+)").unwrap()
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}
#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}
impl Response {
    fn into_data(self) -> Result<Value> {
        if !self.errors.is_empty() {
            return Err(Error::with_description(
                Kind::Remote,
                self.errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; "),
            ));
        }
        match self.data {
            Some(Value::Null) | None => {
                Err(Error::with_description(Kind::Remote, "response has no data"))
            }
            Some(v) => Ok(v),
        }
    }
}

/// Logged in connection to leetcode.com.
pub struct Session {
    client: Client,
    csrf: String,
}
impl Session {
    pub async fn from_env() -> Result<Self> {
        match env::var(SESSION_ENV) {
            Ok(id) if !id.trim().is_empty() => Self::login(id.trim()).await,
            _ => Err(Error::with_description(
                Kind::Credential,
                format!("{} is not set", SESSION_ENV),
            )),
        }
    }

    /// Exchange a session id for a csrf token.
    pub async fn login(session_id: &str) -> Result<Self> {
        let base = Url::parse(BASE_URL)
            .map_err(|e| Error::with_description(Kind::Credential, e.to_string()))?;
        let jar = Arc::new(Jar::default());
        jar.add_cookie_str(
            &format!("LEETCODE_SESSION={}; Domain=leetcode.com; Path=/", session_id),
            &base,
        );
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .connection_verbose(VERBOSE)
            .build()?;
        let status = client.get(base.clone()).send().await?.status();
        if !status.is_success() {
            return Err(Error::with_kind(Kind::Status(status)));
        }
        let pattern = csrf_pattern();
        let csrf = jar
            .cookies(&base)
            .and_then(|v| v.to_str().ok().and_then(|c| search_csrf(&pattern, c)))
            .ok_or_else(|| {
                Error::with_description(Kind::Credential, "no csrftoken cookie in response")
            })?;
        info!("Obtained csrf token for {}", BASE_URL);
        Ok(Session { client, csrf })
    }
}

fn search_csrf(pattern: &Regex, cookies: &str) -> Option<String> {
    pattern
        .captures(cookies)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_owned())
}

#[async_trait]
impl RemoteClient for Session {
    async fn post(&self, query: &Query) -> Result<Value> {
        debug!("POST {} {}", GRAPHQL_URL, query.operation_name);
        let response = self
            .client
            .post(GRAPHQL_URL)
            .header("x-csrftoken", self.csrf.as_str())
            .header(REFERER, BASE_URL)
            .json(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::with_kind(Kind::Status(status)));
        }
        response.json::<Response>().await?.into_data()
    }
}
