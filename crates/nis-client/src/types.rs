//! Domain records returned by the node client.
//!
//! Wire names are lower camelCase; fields here are snake_case. Every record
//! is a plain value built fresh per query. `Block` is the one record whose
//! decoding is not purely structural; see `crate::decode`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decode::{deserialize_integral, null_as_default};

// ==============================================================================
// Account Identifiers
// ==============================================================================

/// An account reference accepted by lookups that resolve either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountId {
    Address(String),
    PublicKey(String),
}

impl AccountId {
    pub fn address(address: impl Into<String>) -> Self {
        Self::Address(address.into())
    }

    pub fn public_key(key: impl Into<String>) -> Self {
        Self::PublicKey(key.into())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "address {address}"),
            Self::PublicKey(key) => write!(f, "public key {key}"),
        }
    }
}

// ==============================================================================
// Accounts
// ==============================================================================

/// Snapshot of an account as the node reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub address: String,
    pub balance: u64,
    pub vested_balance: u64,
    pub importance: f64,
    /// Empty when the account has never sent a transaction.
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_key: String,
    #[serde(default)]
    pub label: Option<String>,
    pub harvested_blocks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multisig_info: Option<MultisigInfo>,
}

/// Multisig parameters; the node omits or empties this for plain accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultisigInfo {
    pub cosignatories_count: u32,
    pub min_cosignatories: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Locked,
    Unlocked,
    #[serde(other)]
    Unknown,
}

/// Remote (delegated) harvesting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteStatus {
    Active,
    Inactive,
    Activating,
    Deactivating,
    #[serde(other)]
    Unknown,
}

/// Account state beyond balances. Both cosignatory lists are empty when the
/// node leaves them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetadata {
    pub status: AccountStatus,
    pub remote_status: RemoteStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cosignatory_of: Vec<AccountInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cosignatories: Vec<AccountInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMetadataPair {
    pub account: AccountInfo,
    pub meta: AccountMetadata,
}

// ==============================================================================
// Harvests and Mosaics
// ==============================================================================

/// One block harvested by the queried account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestInfo {
    pub time_stamp: u64,
    pub difficulty: u64,
    pub total_fee: u64,
    /// Node-local sequence id, usable as a paging hint.
    pub id: u64,
    pub height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicId {
    pub namespace_id: String,
    pub name: String,
}

impl fmt::Display for MosaicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedMosaic {
    pub mosaic_id: MosaicId,
    pub quantity: u64,
}

// ==============================================================================
// Blocks
// ==============================================================================

/// A block as served by `/chain/last-block` and `/block/at/public`.
///
/// Decoded by `crate::decode`, not by serde: the node sends the integer
/// fields as floats and nests `prevBlockHash` one level deep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub time_stamp: u64,
    pub signature: String,
    pub prev_block_hash: String,
    /// `-1` for the nemesis block, `1` for every other block.
    #[serde(rename = "type")]
    pub block_type: i32,
    pub transactions: Vec<Transaction>,
    /// Network-tagged version, e.g. `-1744830463` on testnet.
    pub version: i32,
    pub signer: String,
    pub height: u64,
}

impl Block {
    pub const NEMESIS_TYPE: i32 = -1;

    pub fn is_nemesis(&self) -> bool {
        self.block_type == Self::NEMESIS_TYPE
    }
}

/// A transaction inside a block. Only the common header is typed; the
/// type-specific body is kept as the node sent it, in wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub time_stamp: u64,
    #[serde(rename = "type")]
    pub tx_type: u32,
    pub version: i32,
    pub signer: String,
    /// Absent on inner transactions of a multisig wrapper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub fee: u64,
    pub deadline: u64,
    #[serde(flatten)]
    pub body: serde_json::Map<String, serde_json::Value>,
}

// ==============================================================================
// Chain Scalars
// ==============================================================================

/// Current chain height. The first block has height one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockHeight {
    #[serde(deserialize_with = "deserialize_integral")]
    pub height: u64,
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.height.fmt(f)
    }
}

/// Relative chain strength, a hex-encoded big integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainScore {
    pub score: String,
}

/// Network time at the node, in milliseconds since the nemesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationTimeStamps {
    #[serde(deserialize_with = "deserialize_integral")]
    pub send_time_stamp: u64,
    #[serde(deserialize_with = "deserialize_integral")]
    pub receive_time_stamp: u64,
}
