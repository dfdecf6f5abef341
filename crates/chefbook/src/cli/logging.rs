//! Diagnostics on stderr.
//!
//! Lines look like `warning store::csv_file: skipping unreadable row line=3`.
//! The module path drops the crate name, since every event comes from either
//! `chefbookapp` or this binary.

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

pub struct ChefbookFormatter;

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::ERROR => "error".red().bold(),
        Level::WARN => "warning".yellow().bold(),
        Level::INFO => "info".green(),
        _ => "debug".blue(),
    }
}

fn module_of(target: &str) -> &str {
    target
        .split_once("::")
        .map(|(_, module)| module)
        .unwrap_or(target)
}

impl<S, N> FormatEvent<S, N> for ChefbookFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} {} ",
            level_label(*meta.level()),
            format!("{}:", module_of(meta.target())).as_str().dimmed()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the stderr subscriber. `-v` forces debug output; otherwise
/// `RUST_LOG` is honoured and defaults to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ChefbookFormatter)
        .try_init();
}
