//! CLI argument parsing using clap.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use reqwest::Url;

use crate::fs::AppPaths;

/// Default generation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://AnandVishesh1301-tweet-prediction-hf.hf.space/generate";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// `tweetgen` - tweet generator client
///
/// Tune temperature, top-k and max tokens, then ask the remote model for a tweet.
#[derive(Parser, Debug)]
#[command(name = "tweetgen", version, about, long_about = None)]
pub struct Args {
    /// Generation endpoint (http or https URL)
    #[arg(long, env = "TWEETGEN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "TWEETGEN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Directory for persisted state and logs
    #[arg(long, env = "TWEETGEN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    pub paths: AppPaths,
}

impl ClientConfig {
    /// Validates `args` into a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an http(s) URL or the timeout is zero.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&args.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", args.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!(
                "Endpoint must use http or https, got {}://",
                endpoint.scheme()
            );
        }
        if args.timeout_secs == 0 {
            bail!("Timeout must be greater than zero");
        }

        let paths = args
            .data_dir
            .as_deref()
            .map_or_else(AppPaths::from_platform, AppPaths::new);

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(args.timeout_secs),
            paths,
        })
    }
}
