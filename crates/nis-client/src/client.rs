use std::sync::Arc;

use reqwest::{Method, Url};
use tracing::debug;

use crate::config::{ClientConfig, DEFAULT_BATCH_CONCURRENCY};
use crate::decode::{decode, Decode, Wrapped};
use crate::error::ClientError;
use crate::rpc::{build_request, parse_base_url, HttpTransport, Query, RequestBody, Transport};
use crate::types::{
    AccountId, AccountMetadata, AccountMetadataPair, Block, BlockHeight, ChainScore,
    CommunicationTimeStamps, HarvestInfo, OwnedMosaic,
};

// ==============================================================================
// NodeClient: typed NIS queries over a pluggable transport
// ==============================================================================

/// Typed client for a NIS node's read endpoints.
///
/// Cheap to clone; clones share the transport. Holds no state besides the
/// base URL, the transport and the batch concurrency limit, so concurrent
/// calls never contend.
#[derive(Clone)]
pub struct NodeClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
    pub(crate) batch_concurrency: usize,
}

impl NodeClient {
    /// Validate `config` and connect through an [`HttpTransport`].
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let base_url = parse_base_url(&config.base_url)?;
        let transport = HttpTransport::new(
            config.connect_timeout(),
            config.request_timeout(),
            config.requests_per_second,
        )?;

        Ok(Self {
            base_url,
            transport: Arc::new(transport),
            batch_concurrency: config.batch_concurrency,
        })
    }

    pub fn with_transport(base_url: &str, transport: Arc<dyn Transport>) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            transport,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        })
    }

    pub fn with_batch_concurrency(mut self, limit: usize) -> Result<Self, ClientError> {
        if limit == 0 {
            return Err(ClientError::Configuration(
                "batch_concurrency must be at least 1".to_owned(),
            ));
        }
        self.batch_concurrency = limit;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn execute<T: Decode>(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: Option<RequestBody>,
    ) -> Result<T, ClientError> {
        let request = build_request(&self.base_url, path, &query, body, method);
        let bytes = self.transport.send(&request).await?;
        decode(&bytes).map_err(|err| {
            debug!(node.path = path, error = %err, "node response did not decode");
            ClientError::from(err)
        })
    }

    async fn get<T: Decode>(&self, path: &str, query: Query) -> Result<T, ClientError> {
        self.execute(Method::GET, path, query, None).await
    }

    // ==========================================================================
    // Chain
    // ==========================================================================

    pub async fn height(&self) -> Result<BlockHeight, ClientError> {
        self.get("/chain/height", Query::new()).await
    }

    /// The higher the score, the better the chain.
    pub async fn score(&self) -> Result<ChainScore, ClientError> {
        self.get("/chain/score", Query::new()).await
    }

    pub async fn last_block(&self) -> Result<Block, ClientError> {
        self.get("/chain/last-block", Query::new()).await
    }

    pub async fn block_at(&self, height: u64) -> Result<Block, ClientError> {
        self.get("/block/at/public", query([("height", height.to_string())]))
            .await
    }

    pub async fn network_time(&self) -> Result<CommunicationTimeStamps, ClientError> {
        self.get("/time-sync/network-time", Query::new()).await
    }

    // ==========================================================================
    // Accounts
    // ==========================================================================

    pub async fn account_data(&self, id: &AccountId) -> Result<AccountMetadataPair, ClientError> {
        let (path, query) = account_route(id, "/account/get", "/account/get/from-public-key");
        self.get(path, query).await
    }

    /// Account data of the remote harvesting account `id` forwards to.
    pub async fn forwarded_account_data(
        &self,
        id: &AccountId,
    ) -> Result<AccountMetadataPair, ClientError> {
        let (path, query) = account_route(
            id,
            "/account/get/forwarded",
            "/account/get/forwarded/from-public-key",
        );
        self.get(path, query).await
    }

    pub async fn account_status(&self, address: &str) -> Result<AccountMetadata, ClientError> {
        self.get("/account/status", query([("address", address.to_owned())]))
            .await
    }

    /// Blocks harvested by `address`, newest first. Pass the hash of the last
    /// block of the previous page to continue paging.
    pub async fn harvested_blocks(
        &self,
        address: &str,
        hash: Option<&str>,
    ) -> Result<Vec<HarvestInfo>, ClientError> {
        let mut query = query([("address", address.to_owned())]);
        if let Some(hash) = hash {
            query.insert("hash".to_owned(), hash.to_owned());
        }
        let page: Wrapped<Vec<HarvestInfo>> = self.get("/account/harvests", query).await?;
        Ok(page.into_inner())
    }

    pub async fn mosaics_owned(&self, address: &str) -> Result<Vec<OwnedMosaic>, ClientError> {
        let owned: Wrapped<Vec<OwnedMosaic>> = self
            .get("/account/mosaic/owned", query([("address", address.to_owned())]))
            .await?;
        Ok(owned.into_inner())
    }
}

fn query<const N: usize>(pairs: [(&str, String); N]) -> Query {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Pick endpoint and query key for an address or public-key lookup.
fn account_route(
    id: &AccountId,
    by_address: &'static str,
    by_public_key: &'static str,
) -> (&'static str, Query) {
    match id {
        AccountId::Address(address) => (by_address, query([("address", address.clone())])),
        AccountId::PublicKey(key) => (by_public_key, query([("publicKey", key.clone())])),
    }
}
