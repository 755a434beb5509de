//! Run configuration
//!
//! Validates CLI input once at startup and selects the source client. A bad
//! value here is the only thing that stops a run before it starts.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use source_client::{
    ClientConfig, GeneratorConfig, GeneratorSourceClient, HttpSourceClient, SourceClient,
};

use crate::cli::{Cli, ClientMode};

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub source_count: u32,
    pub mode: ClientMode,
    pub client: ClientConfig,
    pub generator: GeneratorConfig,
    pub json_path: Option<PathBuf>,
}

impl PollerConfig {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        if !cli.timeout.is_finite() || cli.timeout <= 0.0 {
            bail!("timeout must be a positive number of seconds, got {}", cli.timeout);
        }

        let mut generator = GeneratorConfig {
            seed: cli.seed,
            ..GeneratorConfig::default()
        };
        if let Some(max_records) = cli.max_records {
            generator.max_records = max_records;
        }

        Ok(Self {
            source_count: cli.sources,
            mode: cli.mode,
            client: ClientConfig::new(cli.base_url, Duration::from_secs_f64(cli.timeout)),
            generator,
            json_path: cli.json,
        })
    }

    /// Build the client selected by `mode`.
    pub fn build_client(&self) -> anyhow::Result<Box<dyn SourceClient>> {
        match self.mode {
            ClientMode::Live => {
                let client = HttpSourceClient::new(self.client.clone())
                    .context("failed to build HTTP client")?;
                Ok(Box::new(client))
            }
            ClientMode::Simulated => {
                Ok(Box::new(GeneratorSourceClient::new(self.generator.clone())))
            }
        }
    }
}
