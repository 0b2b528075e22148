//! Terminal front-end for the event registry.

use std::{env, path::PathBuf, process, sync::Once};

use registry_core::app::RegistryApp;
use registry_storage::{default_item_list_path, default_log_path, load_item_lines, FileTranscriptLog};

mod clock;
mod error;
mod messages;
mod output;
mod render;
mod ui;

use error::CliError;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("event_registry=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

fn run() -> Result<(), CliError> {
    let options = Options::parse(env::args().skip(1))?;

    let item_list_path = options
        .item_list
        .or_else(default_item_list_path)
        .ok_or_else(|| usage_error("could not resolve a home directory; pass --items <path>"))?;
    let log_path = options
        .log
        .or_else(default_log_path)
        .ok_or_else(|| usage_error("could not resolve a home directory; pass --log <path>"))?;

    let app = match load_item_lines(&item_list_path)
        .and_then(|lines| RegistryApp::from_lines(&lines))
    {
        Ok(app) => {
            tracing::info!(path = %item_list_path.display(), "item list loaded");
            app
        }
        Err(err) => {
            // The application stays usable without an item list: guests can
            // still submit their names.
            tracing::warn!(%err, "continuing without an item list");
            output::error(&err);
            println!("\n{}\n", messages::SETUP_HELP);
            println!("{}\n", messages::SAMPLE_ITEM_LIST);
            RegistryApp::without_items()
        }
    };

    let log = FileTranscriptLog::new(log_path);
    ui::run_loop(app, &log)
}

struct Options {
    item_list: Option<PathBuf>,
    log: Option<PathBuf>,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut options = Self {
            item_list: None,
            log: None,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--items" => options.item_list = Some(next_path(&mut args, "--items")?),
                "--log" => options.log = Some(next_path(&mut args, "--log")?),
                "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                }
                other => return Err(usage_error(format!("unknown argument: {}", other))),
            }
        }
        Ok(options)
    }
}

fn next_path(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<PathBuf, CliError> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| usage_error(format!("{} requires a path", flag)))
}

fn usage_error(message: impl Into<String>) -> CliError {
    CliError::Usage(message.into())
}

fn print_usage() {
    eprintln!(
        "Usage: event-registry [options]\n\
         Options:\n  \
         --items <path>   item list file (default: {{home}}/Documents/EventRegistry/ItemList.txt)\n  \
         --log <path>     transcript log file (default: {{home}}/Documents/EventRegistry/EventRegistry.log)"
    );
}
