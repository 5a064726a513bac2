extern crate serde;
extern crate termcolor;

use crate::write::{write_result, write_yaml};
use leetcode_anki::{
    acquisition::Acquisition,
    error::{Kind, Result},
    Provider, RemoteClient,
};
use serde::Serialize;
use std::io::Write;
use termcolor::StandardStream;

#[derive(Serialize)]
pub struct Annotation {
    pub short: Vec<String>,
    pub description: String,
}

/// Everything a card needs about one problem.
#[derive(Serialize)]
pub struct Note {
    slug: String,
    id: String,
    title: String,
    category: String,
    difficulty: String,
    paid: bool,
    likes: u64,
    dislikes: u64,
    submissions_total: u64,
    submissions_accepted: u64,
    accept_rate: Option<u64>,
    freq_bar: f64,
    tags: Vec<String>,
    hint: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotation: Option<Annotation>,
}

fn note<A: Acquisition, C: RemoteClient>(provider: &Provider<A, C>, slug: &str) -> Result<Note> {
    let accept_rate = match provider.accept_rate(slug) {
        Ok(v) => Some(v),
        Err(e) if matches!(e.kind(), Kind::ZeroSubmissions(_)) => None,
        Err(e) => return Err(e),
    };
    Ok(Note {
        slug: slug.to_string(),
        id: provider.problem_id(slug)?,
        title: provider.title(slug)?,
        category: provider.category(slug)?,
        difficulty: provider.difficulty(slug)?.html().to_string(),
        paid: provider.paid(slug)?,
        likes: provider.likes(slug)?,
        dislikes: provider.dislikes(slug)?,
        submissions_total: provider.submissions_total(slug)?,
        submissions_accepted: provider.submissions_accepted(slug)?,
        accept_rate,
        freq_bar: provider.freq_bar(slug)?,
        tags: provider.tags(slug)?,
        hint: provider.hint(slug)?,
        description: provider.description(slug)?,
        annotation: None,
    })
}

/// Populate `provider` and build a note for every cached problem. `annotate`
/// runs on each note before it is kept. Returns `None` when nothing could be
/// acquired.
#[allow(unused_must_use)]
pub async fn collect<A, C, F>(
    stderr: &mut StandardStream,
    provider: &Provider<A, C>,
    annotate: F,
) -> Option<Vec<Note>>
where
    A: Acquisition,
    C: RemoteClient,
    F: Fn(&str) -> Result<Option<Annotation>>,
{
    write_info!(stderr, "Info", "Acquiring problems...");
    if let Err(e) = provider.populate().await {
        write_error!(stderr, "Error", "{}", e);
        write_error!(
            stderr,
            "Fail",
            "could not complete acquisition, no cards generated"
        );
        return None;
    }
    let slugs = provider.all_problems_handles().ok()?;
    let mut notes = Vec::with_capacity(slugs.len());
    for slug in slugs.iter() {
        let built = note(provider, slug).and_then(|mut n| {
            n.annotation = annotate(slug)?;
            Ok(n)
        });
        match built {
            Ok(n) => notes.push(n),
            Err(e) => write_warn!(stderr, "Warning", "skipped {}: {}", slug, e),
        }
    }
    write_ok!(stderr, "Success", "Built {} of {} notes", notes.len(), slugs.len());
    Some(notes)
}

pub fn export(stderr: &mut StandardStream, output: Option<&str>, notes: &[Note]) {
    write_result(
        stderr,
        write_yaml(output, notes),
        &format!("Written {} notes to {}", notes.len(), output.unwrap_or("stdout")),
    );
}
