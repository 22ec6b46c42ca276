//! Shared fixtures for `nis-client` unit tests.
//!
//! Canned node payloads shaped like real NIS testnet responses, plus the
//! typed records they are expected to decode into.

use std::sync::Arc;

use crate::client::NodeClient;
use crate::rpc::mock::MockTransport;
use crate::types::{AccountInfo, AccountMetadata, AccountMetadataPair, AccountStatus, RemoteStatus};

pub const MOCK_NODE_URL: &str = "http://mock.node:7890";

/// A client wired to `mock`, plus a handle for inspecting recorded requests.
pub fn mock_client(mock: MockTransport) -> (NodeClient, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client =
        NodeClient::with_transport(MOCK_NODE_URL, mock.clone()).expect("static url must parse");
    (client, mock)
}

// ==============================================================================
// Accounts
// ==============================================================================

pub const ACCOUNT_ADDRESS: &str = "TBCI2A67UQZAKCR6NS4JWAEICEIGEIM72G3MVW5S";
pub const ACCOUNT_PUBLIC_KEY: &str =
    "a11a1a6c17a24252e674d151713cdf51991ad101751e4af02a20c61b59f1fe1a";
pub const OTHER_ADDRESS: &str = "TALICEROONSJCPHC63F52V6FY3SDMSVAEUGHMB7C";

pub const ACCOUNT_PAIR_JSON: &str = r#"{
    "meta": {
        "cosignatories": [],
        "cosignatoryOf": [],
        "status": "LOCKED",
        "remoteStatus": "ACTIVE"
    },
    "account": {
        "address": "TBCI2A67UQZAKCR6NS4JWAEICEIGEIM72G3MVW5S",
        "harvestedBlocks": 645,
        "balance": 124446551689680,
        "importance": 0.010263666447108395,
        "vestedBalance": 1041345514976241,
        "publicKey": "a11a1a6c17a24252e674d151713cdf51991ad101751e4af02a20c61b59f1fe1a",
        "label": null,
        "multisigInfo": {}
    }
}"#;

/// A second, distinguishable account for ordering checks.
pub const OTHER_PAIR_JSON: &str = r#"{
    "meta": {
        "status": "UNLOCKED",
        "remoteStatus": "INACTIVE"
    },
    "account": {
        "address": "TALICEROONSJCPHC63F52V6FY3SDMSVAEUGHMB7C",
        "harvestedBlocks": 0,
        "balance": 5000000,
        "importance": 0.0,
        "vestedBalance": 4000000,
        "publicKey": null,
        "label": null
    }
}"#;

pub const ACCOUNT_META_JSON: &str = r#"{
    "cosignatories": [],
    "cosignatoryOf": [],
    "status": "LOCKED",
    "remoteStatus": "ACTIVE"
}"#;

pub fn expected_pair() -> AccountMetadataPair {
    AccountMetadataPair {
        account: AccountInfo {
            address: ACCOUNT_ADDRESS.to_owned(),
            balance: 124446551689680,
            vested_balance: 1041345514976241,
            importance: 0.010263666447108395,
            public_key: ACCOUNT_PUBLIC_KEY.to_owned(),
            label: None,
            harvested_blocks: 645,
            multisig_info: Some(Default::default()),
        },
        meta: expected_meta(),
    }
}

pub fn expected_meta() -> AccountMetadata {
    AccountMetadata {
        status: AccountStatus::Locked,
        remote_status: RemoteStatus::Active,
        cosignatory_of: Vec::new(),
        cosignatories: Vec::new(),
    }
}

// ==============================================================================
// Harvests and Mosaics
// ==============================================================================

pub const HARVESTS_JSON: &str = r#"{
    "data": [
        {
            "timeStamp": 8879051,
            "difficulty": 26453656336676,
            "totalFee": 102585065,
            "id": 1262068,
            "height": 37015
        },
        {
            "timeStamp": 8878980,
            "difficulty": 26453656336676,
            "totalFee": 0,
            "id": 1262067,
            "height": 37014
        }
    ]
}"#;

pub const MOSAICS_JSON: &str = r#"{
    "data": [
        {
            "mosaicId": { "namespaceId": "alice.drinks", "name": "orange juice" },
            "quantity": 123
        },
        {
            "mosaicId": { "namespaceId": "nem", "name": "xem" },
            "quantity": 124446551689680
        }
    ]
}"#;

// ==============================================================================
// Blocks
// ==============================================================================

pub const PREV_BLOCK_HASH: &str =
    "8f1a5e2d44e1bd94d1f0c4e7ee1e1b9b0a7da5dd0c8f20c3bbbd7e21bba2e5c1";

pub const LAST_BLOCK_JSON: &str = r#"{
    "timeStamp": 95225155.0,
    "signature": "4a2b0b2e3ecf0d1fcac2b0e73d2c9e8ed3f2ac2c0fa4e3a6b28dbfd7f5a9bb5f1c0b6f1e7a4c6d1f7fa3bd5c47cda1ccbbda24d3cd6f6b1a8e4a1c2a7b0e9c01",
    "prevBlockHash": {
        "data": "8f1a5e2d44e1bd94d1f0c4e7ee1e1b9b0a7da5dd0c8f20c3bbbd7e21bba2e5c1"
    },
    "type": 1.0,
    "transactions": [
        {
            "timeStamp": 95225100,
            "amount": 1000000,
            "signature": "d0b1f0f8e6b0c9d3c5a1e0f2b7a6c4d8e9f1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f80",
            "fee": 50000,
            "recipient": "TALICEROONSJCPHC63F52V6FY3SDMSVAEUGHMB7C",
            "type": 257,
            "deadline": 95228700,
            "message": { "payload": "68656c6c6f", "type": 1 },
            "version": -1744830463,
            "signer": "a11a1a6c17a24252e674d151713cdf51991ad101751e4af02a20c61b59f1fe1a"
        },
        {
            "timeStamp": 95225120.0,
            "signature": "e1c2a0f9f7c1d0e4d6b2f1a3c8b7d5e9fa02b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f8091",
            "fee": 150000,
            "mode": 1,
            "remoteAccount": "cc6c9485d15b992501e57fe3799487e99de272f79c5442de94eeb998b45e0144",
            "type": 2049,
            "deadline": 95228720,
            "version": -1744830463,
            "signer": "a11a1a6c17a24252e674d151713cdf51991ad101751e4af02a20c61b59f1fe1a"
        }
    ],
    "version": -1744830463.0,
    "signer": "f9bd190dd0c364261f5c8a74870cc7f7374e631352293c62ecc437657e5de2cd",
    "height": 1234567.0
}"#;

pub const NEMESIS_BLOCK_JSON: &str = r#"{
    "timeStamp": 0.0,
    "signature": "0a1351368bfc5d07d1ff5ec7c1ee06d7b0cfb0f8a4e2ac8e1eb3a1f7a7c0b0d9a4d42ab6c8e0f3e2b1ca4f1e5ad3c7e4b5f9d0a1c2e3f4a5b6c7d8e9f0a1b20c",
    "prevBlockHash": {
        "data": "0000000000000000000000000000000000000000000000000000000000000000"
    },
    "type": -1.0,
    "transactions": [],
    "version": -1744830463.0,
    "signer": "8d07f90fb4bbe7715fa327c926770166a11be2e494a970605f2e12557f66c9b9",
    "height": 1.0
}"#;
