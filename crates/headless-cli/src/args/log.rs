use std::fmt;

use clap::ValueEnum;

/// How much the headless crates log. Dependencies stay silent below `trace`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    /// Everything, dependencies included
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "headless=error,off",
            LogLevel::Warn => "headless=warn,off",
            LogLevel::Info => "headless=info,off",
            LogLevel::Debug => "headless=debug,off",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogStyle {
    /// Human readable lines, colored on a terminal
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogStyle::Text => "text",
            LogStyle::Json => "json",
        })
    }
}
