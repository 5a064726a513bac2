extern crate termcolor;

use leetcode_anki::Session;
use std::{io::Write, sync::Arc};
use termcolor::StandardStream;

#[allow(unused_must_use)]
pub async fn connect(stderr: &mut StandardStream) -> Option<Arc<Session>> {
    write_info!(stderr, "Info", "Logging in...");
    match Session::from_env().await {
        Ok(s) => {
            write_ok!(stderr, "Success", "Logged into leetcode.com");
            Some(Arc::new(s))
        }
        Err(e) => {
            write_error!(stderr, "Error", "login: {}", e);
            None
        }
    }
}
