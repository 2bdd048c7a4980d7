//! CLI argument definitions for dayahead.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Fetch prices and print or save them as JSON |
//! | `publish` | Fetch prices and publish them to an MQTT broker |
//! | `domains` | List known bidding-zone aliases |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--token` | `$ENTSOE_TOKEN` | ENTSO-E security token |
//! | `--domain` | `FI` | Zone alias or EIC code |
//! | `--hours` | `24` | Lookahead window length |
//! | `--vat` | `0.24` | VAT rate |
//! | `--timeout-ms` | `10000` | Upstream request timeout |
//!
//! # Examples
//!
//! ```bash
//! # Next 24 hours of Finnish prices
//! dayahead fetch --pretty
//!
//! # Danish prices with 25% VAT, published to a local broker
//! dayahead --domain DK1 --vat 0.25 publish localhost --prefix entsoe
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dayahead_core::DEFAULT_BASE_URL;

/// File written when `--output` is given without a path.
pub const DEFAULT_OUTPUT_FILE: &str = "timeprice.json";

/// Day-ahead electricity prices from the ENTSO-E transparency platform.
#[derive(Debug, Parser)]
#[command(
    name = "dayahead",
    author,
    version,
    about = "Day-ahead electricity prices from ENTSO-E",
    long_about = "Fetches day-ahead prices for one bidding zone, clips them to the requested \
window, adds VAT and converts them to EUR/Wh.\n\
\n\
Use 'dayahead <command> --help' for command-specific help."
)]
pub struct Cli {
    /// ENTSO-E security token.
    #[arg(long, global = true, env = "ENTSOE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Bidding zone: alias such as FI or DK1, or a 16-character EIC code.
    #[arg(long, global = true, default_value = "FI")]
    pub domain: String,

    /// Number of hours to fetch, starting now.
    #[arg(long, global = true, default_value_t = 24)]
    pub hours: u32,

    /// VAT rate added to wholesale prices (0.24 = 24%).
    #[arg(long, global = true, default_value_t = 0.24)]
    pub vat: f64,

    /// Upstream request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Transparency platform base URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch prices and print them, or save them with --output.
    ///
    /// # Examples
    ///
    ///   dayahead fetch
    ///   dayahead fetch --output timeprice.json
    ///   dayahead fetch --start 2016-01-01T05:00:00Z --end 2016-01-01T20:00:00Z
    Fetch(FetchArgs),

    /// Fetch prices and publish them to an MQTT broker.
    ///
    /// Publishes the whole series to <prefix>/<domain>/day-ahead and the
    /// first record to <prefix>/<domain>/current.
    ///
    /// # Examples
    ///
    ///   dayahead publish
    ///   dayahead publish broker.local --port 1884 --prefix home/energy
    Publish(PublishArgs),

    /// List known bidding-zone aliases and their EIC codes.
    Domains,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Write records to this file instead of stdout (bare flag: timeprice.json).
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Window start (RFC3339). Defaults to now.
    #[arg(long)]
    pub start: Option<String>,

    /// Window end (RFC3339). Defaults to start + --hours.
    #[arg(long)]
    pub end: Option<String>,
}

/// Arguments for the `publish` command.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// MQTT broker hostname.
    #[arg(default_value = "localhost")]
    pub broker: String,

    /// MQTT broker port.
    #[arg(long, default_value_t = 1883)]
    pub port: u16,

    /// MQTT topic prefix; empty publishes under the domain code directly.
    #[arg(long, default_value = "entsoe")]
    pub prefix: String,

    /// Also write records to this file before publishing (bare flag: timeprice.json).
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
    pub output: Option<PathBuf>,
}
