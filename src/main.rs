extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, value_parser, Arg, ArgMatches, Command};
use leetcode_anki::config::page;
use pretty_env_logger::init_timed;
use std::process::exit;
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod export;
    pub mod manifest;
    pub mod page;
    pub mod session;
}
mod write;

use command::{
    manifest::manifest,
    page::{page as acquire_pages, PageArgs},
};

fn count_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .long(name)
        .takes_value(true)
        .value_parser(value_parser!(usize))
        .help(help)
}
fn output_arg() -> Arg<'static> {
    Arg::new("output")
        .long("output")
        .short('o')
        .takes_value(true)
        .help("Write notes to this file instead of stdout")
}

fn get_count(matches: &ArgMatches, name: &str, default: usize) -> usize {
    matches.get_one::<usize>(name).copied().unwrap_or(default)
}
fn get_str<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    matches.get_one::<String>(name).map(String::as_str)
}

#[tokio::main]
async fn main() {
    init_timed();
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let app = Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("page")
                .about("Export a contiguous range of a problem list")
                .arg(count_arg("start", "Index of the first problem"))
                .arg(count_arg("stop", "Index of the last problem, inclusive"))
                .arg(count_arg("page-size", "Problems requested per page"))
                .arg(
                    Arg::new("list-id")
                        .long("list-id")
                        .takes_value(true)
                        .help("Problem list to page through, all problems if empty"),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("manifest")
                .about("Export the problems named by a CSV manifest")
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .takes_value(true)
                        .required(true)
                        .help("Path to manifest"),
                )
                .arg(count_arg("limit", "Only fetch the first N entries"))
                .arg(output_arg()),
        )
        .get_matches();

    let ok = match app.subcommand() {
        Some(("page", m)) => {
            acquire_pages(
                &mut stderr,
                PageArgs {
                    start: get_count(m, "start", page::DEFAULT_START),
                    stop: get_count(m, "stop", page::DEFAULT_STOP),
                    page_size: get_count(m, "page-size", page::DEFAULT_PAGE_SIZE),
                    list_id: get_str(m, "list-id").unwrap_or(""),
                    output: get_str(m, "output"),
                },
            )
            .await
        }
        Some(("manifest", m)) => {
            manifest(
                &mut stderr,
                get_str(m, "csv").unwrap_or_default(),
                m.get_one::<usize>("limit").copied(),
                get_str(m, "output"),
            )
            .await
        }
        _ => false,
    };
    let _ = stderr.reset();
    if !ok {
        exit(1);
    }
}
