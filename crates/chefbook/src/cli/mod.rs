//! # CLI
//!
//! - `args.rs`: clap definitions.
//! - `handlers.rs`: one handler per command, run against injected services.
//! - `render.rs`: turns records into terminal text.
//! - `logging.rs`: the stderr tracing subscriber.
//!
//! `run` is the only place that knows about files: it resolves configuration,
//! builds CSV-backed services and hands them to [`handlers::App`].

mod args;
mod handlers;
mod logging;
mod render;

use anyhow::{Context, Result};
use args::Cli;
use chefbookapp::config::ChefbookConfig;
use chefbookapp::service::Service;
use chefbookapp::store::CsvFileStore;
use chrono::Local;
use clap::Parser;
use handlers::App;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config =
        ChefbookConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let paths = config.paths();
    debug!(
        customers = %paths.customers.display(),
        bookings = %paths.bookings.display(),
        "resolved store paths"
    );

    let mut app = App::new(
        Service::new(CsvFileStore::new(paths.customers)),
        Service::new(CsvFileStore::new(paths.bookings)),
        config.birthday_window,
        Local::now().naive_local(),
    );

    let output = app.dispatch(cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
