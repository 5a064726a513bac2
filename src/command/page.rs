extern crate termcolor;

use super::{
    export::{collect, export},
    session::connect,
};
use leetcode_anki::{AcquisitionRange, PagedAcquisition, PagedProvider};
use std::io::Write;
use termcolor::StandardStream;

pub struct PageArgs<'a> {
    pub start: usize,
    pub stop: usize,
    pub page_size: usize,
    pub list_id: &'a str,
    pub output: Option<&'a str>,
}

/// Export problems `start..=stop` of a problem list. Returns false on failure.
#[allow(unused_must_use)]
pub async fn page(stderr: &mut StandardStream, args: PageArgs<'_>) -> bool {
    let range = match AcquisitionRange::new(args.start, args.stop, args.page_size, args.list_id) {
        Ok(r) => r,
        Err(e) => {
            write_error!(stderr, "Error", "{}", e);
            return false;
        }
    };
    let session = match connect(stderr).await {
        Some(s) => s,
        None => return false,
    };
    let provider = PagedProvider::new(session, PagedAcquisition::new(range));
    match collect(stderr, &provider, |_| Ok(None)).await {
        Some(notes) => {
            export(stderr, args.output, &notes);
            true
        }
        None => false,
    }
}
