use async_trait::async_trait;
use types::ids::SourceId;
use types::payload::RawPayload;

use crate::error::FetchError;

/// Retrieves one source's raw dataset.
#[async_trait]
pub trait SourceClient: Send + Sync {
    /// Fetch the full payload for `source_id`.
    ///
    /// Every failure is local to the source; callers mark it invalid and
    /// carry on with the rest of the fleet.
    async fn fetch(&self, source_id: SourceId) -> Result<RawPayload, FetchError>;

    /// Short label for logs.
    fn label(&self) -> &'static str;
}
