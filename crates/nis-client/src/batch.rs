use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::client::NodeClient;
use crate::error::ClientError;
use crate::types::{AccountId, AccountMetadataPair};

// ==============================================================================
// Batch Account Lookup
// ==============================================================================

impl NodeClient {
    /// Look up many accounts, one independent request per identifier.
    ///
    /// `result[i]` always belongs to `ids[i]`, whatever order the requests
    /// complete in. Repeated identifiers are fetched again, never coalesced.
    /// The first failing item fails the whole batch as
    /// [`ClientError::Batch`]; the remaining in-flight lookups are dropped.
    ///
    /// At most `batch_concurrency` lookups are in flight at once. All of them
    /// run inside the returned future, so dropping it (e.g. on a caller
    /// timeout) cancels every outstanding request.
    pub async fn batch_account_data(
        &self,
        ids: &[AccountId],
    ) -> Result<Vec<AccountMetadataPair>, ClientError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            batch.size = ids.len(),
            batch.concurrency = self.batch_concurrency,
            "batch account lookup"
        );
        let semaphore = Semaphore::new(self.batch_concurrency);
        let lookups = ids
            .iter()
            .enumerate()
            .map(|(index, id)| self.fetch_batch_item(&semaphore, index, id));
        let pairs = try_join_all(lookups).await?;

        debug!(batch.size = pairs.len(), "batch account lookup complete");
        Ok(pairs)
    }

    async fn fetch_batch_item(
        &self,
        semaphore: &Semaphore,
        index: usize,
        id: &AccountId,
    ) -> Result<AccountMetadataPair, ClientError> {
        // The semaphore is local to this batch and never closed, so `acquire`
        // cannot fail.
        let _permit = semaphore.acquire().await.ok();

        self.account_data(id).await.map_err(|source| {
            warn!(batch.index = index, account = %id, error = %source, "batch item failed");
            ClientError::Batch {
                index,
                identifier: id.to_string(),
                source: Box::new(source),
            }
        })
    }
}
