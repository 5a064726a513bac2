extern crate serde;
extern crate serde_yaml;
extern crate termcolor;

use serde::Serialize;
use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
};
use termcolor::StandardStream;

/// Write `items` as a YAML sequence to `path`, or to stdout without one.
pub fn write_yaml<T: Serialize>(path: Option<&str>, items: &[T]) -> io::Result<()> {
    let mut dest: Box<dyn Write> = match path {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(io::stdout()),
    };
    serde_yaml::to_writer(&mut dest, items)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(dest)?;
    dest.flush()
}

#[allow(unused_must_use)]
pub fn write_result<E: Display>(stdout: &mut StandardStream, result: Result<(), E>, success: &str) {
    match result {
        Ok(_) => write_ok!(stdout, "Success", "{}", success),
        Err(e) => write_error!(stdout, "Error", "{}", e),
    }
}
