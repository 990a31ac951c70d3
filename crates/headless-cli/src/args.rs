use std::{fmt, fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use headless_config::Config;
use headless_runtime_local::StaticClassRegistry;
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, Layer};

mod log;

pub(crate) use log::{LogLevel, LogStyle};

pub(crate) fn parse() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(name = "headless", version)]
#[command(arg_required_else_help = true)]
/// Schema extensions and field resolvers for a headless CMS
pub(crate) struct Args {
    /// Path to the TOML configuration file. Built-in defaults apply when omitted.
    #[arg(long, short, env = "HEADLESS_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// Path to the JSON class registry of the host
    #[arg(long, short, env = "HEADLESS_REGISTRY_PATH")]
    pub registry: PathBuf,
    /// Set the logging level
    #[arg(long = "log", env = "HEADLESS_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, env = "HEADLESS_LOG_STYLE", default_value_t = LogStyle::Text)]
    pub log_style: LogStyle,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the extended schema
    Schema {
        /// Output format
        #[arg(long, default_value_t = SchemaFormat::Sdl)]
        format: SchemaFormat,
    },
    /// Resolve one field against a JSON fixture store
    Resolve(ResolveArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct ResolveArgs {
    /// Path to the JSON fixture with records, relations and site configuration
    #[arg(long)]
    pub fixtures: PathBuf,
    /// Class the record is loaded as
    #[arg(long)]
    pub class: String,
    /// Record id
    #[arg(long)]
    pub id: u64,
    /// Field name as exposed in the schema
    #[arg(long)]
    pub field: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum SchemaFormat {
    /// GraphQL SDL with field directives
    Sdl,
    /// The type descriptors as JSON
    Json,
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SchemaFormat::Sdl => "sdl",
            SchemaFormat::Json => "json",
        })
    }
}

impl Args {
    pub fn config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Ok(Config::load(path)?),
            None => Ok(Config::default()),
        }
    }

    pub fn class_registry(&self) -> anyhow::Result<StaticClassRegistry> {
        let json = fs::read_to_string(&self.registry)
            .with_context(|| format!("reading class registry '{}'", self.registry.display()))?;

        StaticClassRegistry::from_json(&json).context("parsing class registry")
    }

    pub fn log_format<S>(&self) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        // stdout carries the command output
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        match self.log_style {
            LogStyle::Text if atty::is(atty::Stream::Stderr) => layer.with_ansi(true).boxed(),
            LogStyle::Text => layer.with_ansi(false).boxed(),
            LogStyle::Json => layer.json().boxed(),
        }
    }
}
