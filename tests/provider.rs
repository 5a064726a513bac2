mod common;

use common::{gate, problem, retry, ScriptedClient};
use futures::future::join_all;
use leetcode_anki::{
    error::{Class, Kind},
    types::Difficulty,
    ManifestAcquisition, ManifestProvider,
};
use serde_json::{json, Value};

/// A provider whose single manifest entry resolves to `record`.
async fn populated(record: Value) -> ManifestProvider<ScriptedClient> {
    let slug = record["titleSlug"].as_str().unwrap().to_string();
    let client = ScriptedClient::new(move |_, _| Ok(json!({ "question": record.clone() })));
    let provider = ManifestProvider::new(
        client,
        ManifestAcquisition::new(vec![leetcode_anki::manifest::ManifestEntry::new(
            slug.as_str(),
            "[]",
            "",
        )]),
    )
    .with_gate(gate())
    .with_retry(retry());
    provider.populate().await.unwrap();
    provider
}

#[tokio::test(start_paused = true)]
async fn plain_fields() {
    let p = populated(problem("two-sum")).await;
    assert_eq!(p.title("two-sum").unwrap(), "two sum");
    assert_eq!(p.category("two-sum").unwrap(), "Algorithms");
    assert_eq!(p.problem_id("two-sum").unwrap(), "1");
    assert_eq!(p.description("two-sum").unwrap(), "<p>two-sum</p>");
    assert!(!p.paid("two-sum").unwrap());
    assert_eq!(p.likes("two-sum").unwrap(), 120);
    assert_eq!(p.dislikes("two-sum").unwrap(), 7);
    assert_eq!(p.freq_bar("two-sum").unwrap(), 12.5);
    assert_eq!(p.hint("two-sum").unwrap(), "Use a map.");
}

#[tokio::test(start_paused = true)]
async fn derived_fields() {
    let p = populated(problem("two-sum")).await;
    assert_eq!(p.submissions_total("two-sum").unwrap(), 200);
    assert_eq!(p.submissions_accepted("two-sum").unwrap(), 50);
    assert_eq!(p.accept_rate("two-sum").unwrap(), 25);
    assert_eq!(
        p.tags("two-sum").unwrap(),
        vec!["array", "difficulty-medium-tag"]
    );
    assert_eq!(p.difficulty("two-sum").unwrap(), Difficulty::Medium);
    assert_eq!(
        p.difficulty("two-sum").unwrap().html(),
        "<font color='orange'>Medium</font>"
    );
}

#[tokio::test(start_paused = true)]
async fn accept_rate_without_submissions_fails() {
    let mut record = problem("new-problem");
    record["stats"] = json!("{\"totalSubmissionRaw\": 0, \"totalAcceptedRaw\": 0}");
    let p = populated(record).await;
    let err = p.accept_rate("new-problem").unwrap_err();
    assert!(matches!(err.kind(), Kind::ZeroSubmissions(_)));
    assert_eq!(err.class(), Class::Validation);
    assert_eq!(p.submissions_total("new-problem").unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn oversized_counters_are_validation_errors() {
    let mut record = problem("popular");
    record["stats"] = json!(
        "{\"totalSubmissionRaw\": 1000000000000000000, \"totalAcceptedRaw\": 900000000000000000}"
    );
    let p = populated(record).await;
    let err = p.accept_rate("popular").unwrap_err();
    assert!(matches!(err.kind(), Kind::Counter("totalAcceptedRaw")));
    assert_eq!(err.class(), Class::Validation);
    assert_eq!(p.submissions_accepted("popular").unwrap(), 900_000_000_000_000_000);
}

#[tokio::test(start_paused = true)]
async fn omitted_fields_have_defaults() {
    let mut record = problem("sparse");
    record["freqBar"] = Value::Null;
    record["hints"] = Value::Null;
    record["content"] = Value::Null;
    record["topicTags"] = json!([]);
    let p = populated(record).await;
    assert_eq!(p.freq_bar("sparse").unwrap(), 0.0);
    assert_eq!(p.hint("sparse").unwrap(), "");
    assert_eq!(p.description("sparse").unwrap(), "No content");
    assert_eq!(p.tags("sparse").unwrap(), vec!["difficulty-medium-tag"]);
}

#[tokio::test(start_paused = true)]
async fn bad_values_are_validation_errors() {
    let mut record = problem("odd");
    record["difficulty"] = json!("Extreme");
    record["likes"] = json!(-3);
    record["dislikes"] = Value::Null;
    record["stats"] = json!("{\"totalSubmissionRaw\": \"many\", \"totalAcceptedRaw\": 1}");
    let p = populated(record).await;

    assert!(matches!(
        p.difficulty("odd").unwrap_err().kind(),
        Kind::Difficulty(d) if d == "Extreme"
    ));
    assert_eq!(p.likes("odd").unwrap_err().class(), Class::Validation);
    assert_eq!(p.dislikes("odd").unwrap_err().class(), Class::Validation);
    assert_eq!(p.accept_rate("odd").unwrap_err().class(), Class::Validation);
    // the record is still readable through other accessors
    assert_eq!(p.tags("odd").unwrap(), vec!["array", "difficulty-extreme-tag"]);
}

#[tokio::test(start_paused = true)]
async fn unknown_slug_is_not_found() {
    let p = populated(problem("two-sum")).await;
    let err = p.title("three-sum").unwrap_err();
    assert!(matches!(err.kind(), Kind::NotCached(slug) if slug == "three-sum"));
    assert_eq!(p.title("two-sum").unwrap(), "two sum");
}

#[tokio::test(start_paused = true)]
async fn accessors_are_idempotent() {
    let p = populated(problem("two-sum")).await;
    assert_eq!(p.tags("two-sum").unwrap(), p.tags("two-sum").unwrap());
    assert_eq!(p.accept_rate("two-sum").unwrap(), p.accept_rate("two-sum").unwrap());
    assert_eq!(p.description("two-sum").unwrap(), p.description("two-sum").unwrap());
}

#[tokio::test(start_paused = true)]
async fn accessors_require_population() {
    let client = ScriptedClient::new(|_, _| Ok(json!({"question": problem("two-sum")})));
    let p = ManifestProvider::new(
        client.clone(),
        ManifestAcquisition::new(vec![leetcode_anki::manifest::ManifestEntry::new(
            "two-sum", "[]", "",
        )]),
    );
    assert!(!p.is_populated());
    assert!(matches!(
        p.title("two-sum").unwrap_err().kind(),
        Kind::NotPopulated
    ));
    assert_eq!(client.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn population_runs_once() {
    let client = ScriptedClient::new(|_, _| Ok(json!({"question": problem("two-sum")})));
    let p = ManifestProvider::new(
        client.clone(),
        ManifestAcquisition::new(vec![leetcode_anki::manifest::ManifestEntry::new(
            "two-sum", "[]", "",
        )]),
    )
    .with_gate(gate())
    .with_retry(retry());

    let shared = &p;
    let results = join_all((0..4).map(|_| shared.populate())).await;
    assert!(results.iter().all(|r| r.is_ok()));
    p.populate().await.unwrap();
    assert_eq!(client.call_count(), 1);
    assert_eq!(p.all_problems_handles().unwrap(), vec!["two-sum"]);
}
