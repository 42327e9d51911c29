use std::{
    env, fmt,
    iter::Peekable,
    path::Path,
    str::FromStr,
};

use log::LevelFilter;

use crate::{Error, Result};

/// Runtime options for the `city-tour` binary.
#[derive(Clone, Debug, PartialEq)]
pub struct TourOptions {
    /// Phase whose result is printed.
    pub stage: Stage,
    /// Legs longer than `outlier_threshold` times the average leg count as spikes.
    pub outlier_threshold: f64,
    /// Structured logging level.
    pub log_level: LogLevel,
    /// Logging output format.
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs and metrics. Empty means stderr.
    pub log_output: String,
    /// Optional input file path for the city map. Empty means stdin.
    pub input: String,
    /// Optional output file path for results. Empty means stdout.
    pub output: String,
}

/// Declares a CLI value enum with a case-insensitive `parse` and a `Display`
/// that prints the canonical spelling. Aliases follow the canonical name after `|`.
macro_rules! cli_value {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $option:literal {
            $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub fn parse(raw: &str) -> Result<Self> {
                match raw.to_ascii_lowercase().as_str() {
                    $($text $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(invalid_value($option, raw, &[$($text),+].join("|"))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let value = match self {
                    $(Self::$variant => $text,)+
                };
                write!(f, "{value}")
            }
        }
    };
}

cli_value! {
    /// Which solver phase to run and print.
    pub enum Stage for "stage" {
        Closure => "closure" | "shortest-paths",
        Mst => "mst",
        Tour => "tour",
    }
}

cli_value! {
    pub enum LogLevel for "log-level" {
        Error => "error",
        Warn => "warn" | "warning",
        Info => "info",
        Debug => "debug",
        Trace => "trace",
        Off => "off",
    }
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

cli_value! {
    pub enum LogFormat for "log-format" {
        Compact => "compact",
        Pretty => "pretty",
    }
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            stage: Stage::Tour,
            outlier_threshold: 10.0,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            input: String::new(),
            output: String::new(),
        }
    }
}

impl fmt::Display for TourOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\tstage             = {}\
             \n\toutlier_threshold = {}\
             \n\tlog_level         = {}\
             \n\tlog_format        = {}\
             \n\tlog_timestamp     = {}\
             \n\tlog_output        = {}\
             \n\tinput             = {}\
             \n\toutput            = {}",
            self.stage,
            self.outlier_threshold,
            self.log_level,
            self.log_format,
            self.log_timestamp,
            self.log_output,
            self.input,
            self.output,
        )
    }
}

impl TourOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    pub fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::HelpRequested);
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = split_arg(raw_name, &mut args);
            match name.as_str() {
                "stage" => options.stage = Stage::parse(&required(&name, value)?)?,
                "outlier-threshold" => {
                    options.outlier_threshold = parse_value(&name, &required(&name, value)?)?;
                }
                "log-level" => options.log_level = LogLevel::parse(&required(&name, value)?)?,
                "log-format" => options.log_format = LogFormat::parse(&required(&name, value)?)?,
                "log-output" => options.log_output = required(&name, value)?,
                "input" => options.input = required(&name, value)?,
                "output" => options.output = required(&name, value)?,
                "log-timestamp" => {
                    options.log_timestamp = match value {
                        Some(v) => parse_bool(&name, &v)?,
                        None => true,
                    };
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  city-tour [options] [--input cities.txt]\n",
            "  city-tour [options] < cities.txt\n\n",
            "Options:\n",
            "  --stage <closure|mst|tour>\n",
            "  --outlier-threshold <f64>\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  city-tour --input data/romania.txt\n",
            "  city-tour --stage mst --output mst.txt < data/romania.txt\n",
            "  city-tour --log-level=info --log-format=pretty --input data/romania.txt\n",
        )
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.log_output)
    }

    pub fn output_path(&self) -> Option<&Path> {
        non_stdio_path(&self.output)
    }

    pub fn input_path(&self) -> Option<&Path> {
        non_stdio_path(&self.input)
    }
}

fn non_stdio_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn split_arg(
    raw_name: &str,
    args: &mut Peekable<impl Iterator<Item = String>>,
) -> (String, Option<String>) {
    if let Some((k, v)) = raw_name.split_once('=') {
        return (k.to_string(), Some(v.to_string()));
    }

    let value = match args.peek() {
        Some(next) if !next.starts_with("--") => args.next(),
        _ => None,
    };

    (raw_name.to_string(), value)
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::invalid_input(format!("Missing value for --{name}")))
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| Error::invalid_input(format!("Invalid value for --{name}: {raw} ({e})")))
}

fn invalid_value(option: &str, raw: &str, expected: &str) -> Error {
    Error::invalid_input(format!(
        "Invalid value for --{option}: {raw} (expected {expected})"
    ))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
