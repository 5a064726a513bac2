#![allow(dead_code)]

use async_trait::async_trait;
use leetcode_anki::{
    client::{Query, RemoteClient},
    error::Result,
    RateGate, RetryPolicy,
};
use serde_json::{json, Value};
use std::{
    cmp::min,
    io,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::time::Instant;

pub struct Call {
    pub operation: &'static str,
    pub variables: Value,
    pub at: Instant,
}

type Responder = Box<dyn Fn(&Query, usize) -> Result<Value> + Send + Sync>;

/// Answers queries from a closure and remembers every call it saw.
pub struct ScriptedClient {
    responder: Responder,
    calls: Mutex<Vec<Call>>,
}
impl ScriptedClient {
    /// `responder` gets the query and the number of calls made before it.
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&Query, usize) -> Result<Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
    pub fn with_calls<T>(&self, fun: impl FnOnce(&[Call]) -> T) -> T {
        fun(&self.calls.lock().unwrap())
    }
}

#[async_trait]
impl RemoteClient for ScriptedClient {
    async fn post(&self, query: &Query) -> Result<Value> {
        let seen = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Call {
                operation: query.operation_name,
                variables: query.variables.clone(),
                at: Instant::now(),
            });
            calls.len() - 1
        };
        (self.responder)(query, seen)
    }
}

pub fn gate() -> RateGate {
    RateGate::new(Duration::from_secs(2))
}
pub fn retry() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_secs(5))
}

pub fn connection_reset() -> leetcode_anki::Error {
    io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer").into()
}

pub fn problem(slug: &str) -> Value {
    json!({
        "titleSlug": slug,
        "questionFrontendId": "1",
        "title": slug.replace('-', " "),
        "categoryTitle": "Algorithms",
        "content": format!("<p>{}</p>", slug),
        "difficulty": "Medium",
        "isPaidOnly": false,
        "likes": 120,
        "dislikes": 7,
        "stats": "{\"totalSubmissionRaw\": 200, \"totalAcceptedRaw\": 50}",
        "freqBar": 12.5,
        "topicTags": [{"name": "Array", "slug": "array"}],
        "hints": ["Use a map."]
    })
}

pub fn is_count(query: &Query) -> bool {
    query.query.contains("totalNum")
}

/// A question list of `total` problems named `problem-<position>`.
pub fn problem_set(total: usize) -> impl Fn(&Query, usize) -> Result<Value> + Send + Sync + 'static {
    move |query, _| {
        if is_count(query) {
            return Ok(json!({"problemsetQuestionList": {"totalNum": total}}));
        }
        let skip = query.variables["skip"].as_u64().unwrap() as usize;
        let limit = query.variables["limit"].as_u64().unwrap() as usize;
        let questions: Vec<Value> = (min(skip, total)..min(skip + limit, total))
            .map(|i| problem(&format!("problem-{}", i)))
            .collect();
        Ok(json!({"problemsetQuestionList": {"questions": questions}}))
    }
}

/// Answers every single problem query with a generated record.
pub fn by_slug(query: &Query, _: usize) -> Result<Value> {
    let slug = query.variables["titleSlug"].as_str().unwrap();
    Ok(json!({"question": problem(slug)}))
}
