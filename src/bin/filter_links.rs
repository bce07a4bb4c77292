//! Reads raw links from stdin (one per line) and prints the ones worth
//! crawling as JSON.
//!
//! Usage: `filter_links <reference-domain> [--subdomains] [--keep-images] [--save <ext>]`

use std::env;
use std::io::{self, Read};
use std::process;

use linkscope::{create_result_file, logging, prepare_links, Options};
use serde::Serialize;
use tracing::{error, info};

#[derive(Serialize)]
struct Output<'a> {
    domain: &'a str,
    links: Vec<String>,
}

struct Args {
    domain: String,
    save_ext: Option<String>,
    options: Options,
}

fn usage() -> ! {
    eprintln!(
        "usage: filter_links <reference-domain> [--subdomains] [--keep-images] [--save <ext>]"
    );
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let Some(domain) = args.next() else { usage() };

    let mut options = Options::default();
    let mut save_ext = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--subdomains" => options.include_subdomains = true,
            "--keep-images" => options.exclude_images = false,
            "--save" => {
                let Some(ext) = args.next() else { usage() };
                save_ext = Some(if ext.starts_with('.') { ext } else { format!(".{ext}") });
            }
            _ => usage(),
        }
    }

    Args {
        domain,
        save_ext,
        options,
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let raw: Vec<&str> = input.lines().collect();

    let links = prepare_links(&args.domain, &raw, &args.options)?;
    info!(raw = raw.len(), kept = links.len(), "filtered links");

    let output = Output {
        domain: &args.domain,
        links,
    };
    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");

    if let Some(ext) = &args.save_ext {
        let url = if linkscope::is_url(&args.domain) {
            args.domain.clone()
        } else {
            format!("http://{}/", args.domain)
        };
        let path = create_result_file(&url, ext, &args.options)?.write_and_close(json.as_bytes())?;
        info!(path = %path.display(), "saved results");
    }

    Ok(())
}

fn main() {
    logging::init();
    let args = parse_args();

    if let Err(err) = run(&args) {
        error!("{err}");
        process::exit(1);
    }
}
