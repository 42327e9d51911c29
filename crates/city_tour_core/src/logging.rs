use std::{fs::File, io::Write};

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, Record};

use crate::{Error, LogFormat, Result, Stage, TourOptions};

/// Installs the global logger for one `city-tour` run.
///
/// Compact lines are `LEVEL message`. Pretty lines split the leading
/// `component:` off each message and tag it with the stage being printed,
/// e.g. `INFO  mst/solver  mst candidates=190 edges=19`, padded into columns.
pub fn init_logger(options: &TourOptions) -> Result<()> {
    let log_format = options.log_format;
    let log_timestamp = options.log_timestamp;
    let stage = options.stage;

    let mut builder = Builder::new();
    builder
        .filter_level(options.log_level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            match log_format {
                LogFormat::Compact => {
                    writeln!(buf, "{} {}", level_tag(record.level()), record.args())
                }
                LogFormat::Pretty => writeln!(buf, "{}", pretty_line(stage, record)),
            }
        });

    if let Some(log_path) = options.log_output_path() {
        let log_file = File::create(log_path).map_err(|e| {
            Error::other(format!(
                "failed to create log output file {}: {e}",
                log_path.display()
            ))
        })?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| Error::other(format!("logger init failed: {e}")))
}

fn pretty_line(stage: Stage, record: &Record<'_>) -> String {
    let message = record.args().to_string();
    let (component, fields) = split_component(&message, record.target());
    let scope = format!("{stage}/{component}");
    format!("{:<5} {scope:<16} {fields}", level_tag(record.level()))
}

/// Splits `"solver: tour stops=5"` into `("solver", "tour stops=5")`.
/// Messages without a one-word prefix fall back to the last segment of the
/// log target.
fn split_component<'a>(message: &'a str, target: &'a str) -> (&'a str, &'a str) {
    match message.split_once(": ") {
        Some((component, rest))
            if !component.is_empty()
                && component.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') =>
        {
            (component, rest)
        }
        _ => (target.rsplit("::").next().unwrap_or(target), message),
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
