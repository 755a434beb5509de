//! Simulated source client
//!
//! Produces payloads in the same shape a live source serves. Each source
//! draws from its own ChaCha8 stream seeded from the configured seed and the
//! source id, so a given (seed, id) always yields the same payload.

use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use types::ids::SourceId;
use types::payload::RawPayload;

use crate::client::SourceClient;
use crate::config::GeneratorConfig;
use crate::error::FetchError;

#[derive(Debug, Clone, Default)]
pub struct GeneratorSourceClient {
    config: GeneratorConfig,
}

impl GeneratorSourceClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    fn rng_for(&self, source_id: SourceId) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.config.seed ^ u64::from(source_id.as_u32()))
    }

    /// Generate a payload with a random number of records.
    pub fn generate(&self, source_id: SourceId) -> RawPayload {
        let mut rng = self.rng_for(source_id);
        let count = rng.gen_range(0..=self.config.max_records);
        self.fill(source_id, count, &mut rng)
    }

    /// Generate a payload with exactly `count` records.
    pub fn generate_exact(&self, source_id: SourceId, count: usize) -> RawPayload {
        let mut rng = self.rng_for(source_id);
        self.fill(source_id, count, &mut rng)
    }

    fn fill(&self, source_id: SourceId, count: usize, rng: &mut ChaCha8Rng) -> RawPayload {
        let (min, max) = (self.config.min_size, self.config.max_size.max(self.config.min_size));
        // Sizes are drawn well below i64::MAX.
        let sizes = (0..count).map(|_| rng.gen_range(min..=max) as i64);
        RawPayload::new(i64::from(source_id.as_u32()), sizes)
    }
}

#[async_trait]
impl SourceClient for GeneratorSourceClient {
    async fn fetch(&self, source_id: SourceId) -> Result<RawPayload, FetchError> {
        let payload = self.generate(source_id);
        debug!(source_id = %source_id, entries = payload.len(), "Generated source payload");
        Ok(payload)
    }

    fn label(&self) -> &'static str {
        "generator"
    }
}
