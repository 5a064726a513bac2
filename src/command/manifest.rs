extern crate termcolor;

use super::{
    export::{collect, export, Annotation},
    session::connect,
};
use leetcode_anki::{manifest, ManifestAcquisition, ManifestProvider, Result};
use std::{fs::File, io::Write};
use termcolor::StandardStream;

/// Export every problem listed in the manifest at `path`, up to `limit`.
#[allow(unused_must_use)]
pub async fn manifest(
    stderr: &mut StandardStream,
    path: &str,
    limit: Option<usize>,
    output: Option<&str>,
) -> bool {
    let entries = match File::open(path)
        .map_err(Into::into)
        .and_then(manifest::from_reader)
    {
        Ok(v) => v,
        Err(e) => {
            write_error!(stderr, "Error", "Error load manifest {}: {}", path, e);
            return false;
        }
    };
    write_info!(stderr, "Info", "Loaded {} manifest entries", entries.len());
    let mut acquisition = ManifestAcquisition::new(entries);
    if let Some(l) = limit {
        acquisition = acquisition.with_limit(l);
    }
    let session = match connect(stderr).await {
        Some(s) => s,
        None => return false,
    };
    let provider = ManifestProvider::new(session, acquisition);
    let annotate = |slug: &str| -> Result<Option<Annotation>> {
        Ok(Some(Annotation {
            short: provider.oll_short(slug)?,
            description: provider.oll_desc(slug)?,
        }))
    };
    match collect(stderr, &provider, annotate).await {
        Some(notes) => {
            export(stderr, output, &notes);
            true
        }
        None => false,
    }
}
