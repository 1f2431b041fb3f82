#![allow(dead_code)]

use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use alloy::{
    primitives::{address, b256, Address, Bytes, Log, LogData, B256, U256},
    sol_types::{SolCall, SolEvent},
};
use async_trait::async_trait;
use orbit_deployment::{
    abi::{v2, RollupCreated},
    config::{Endpoint, PARENT_CHAIN_RPC_VAR},
    errors::FetchError,
    keys::PrivateKey,
    types::{DeploymentReceipt, DeploymentTransaction},
    ChainReader, DeploymentConfig, ParentChain,
};
use serde_json::json;

pub const TX_HASH: B256 =
    b256!("22bb24020ee839e4a266960aa73c6bf5b02621e2de3f2a755c9f2869014140d7");
pub const CHAIN_ID: u64 = 97_400_766_948;
pub const CHAIN_OWNER: Address = address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
pub const ROLLUP_CREATOR: Address = address!("06E341073b2749e0Bb9912461351f716DeCDa9b0");
pub const DEPLOYED_AT: u64 = 52_184_437;
pub const NATIVE_TOKEN: Address = address!("3C8e9A0f1B2c3D4e5F6a7B8c9D0e1F2a3B4c5D6e");

/// Address of private key `0x1`.
pub const VALIDATOR: Address = address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
/// Address of private key `0x2`.
pub const BATCH_POSTER: Address = address!("2B5AD5c4795c026514f8317c7a215E218DcCD6cF");

pub fn chain_config_json(data_availability_committee: bool) -> String {
    json!({
        "chainId": CHAIN_ID,
        "homesteadBlock": 0,
        "daoForkSupport": true,
        "berlinBlock": 0,
        "londonBlock": 0,
        "clique": { "period": 0, "epoch": 0 },
        "arbitrum": {
            "EnableArbOS": true,
            "AllowDebugPrecompiles": false,
            "DataAvailabilityCommittee": data_availability_committee,
            "InitialArbOSVersion": 20,
            "InitialChainOwner": CHAIN_OWNER,
            "GenesisBlockNum": 0,
            "MaxCodeSize": 24576,
            "MaxInitCodeSize": 49152
        }
    })
    .to_string()
}

pub fn create_rollup_input(chain_config: String) -> Bytes {
    let call = v2::createRollupCall {
        deployParams: v2::RollupDeploymentParams {
            config: v2::Config {
                confirmPeriodBlocks: 150,
                extraChallengeTimeBlocks: 0,
                stakeToken: address!("980B62Da83eFf3D4576C647993b0c1D7faf17c73"),
                baseStake: U256::from(100_000_000_000_000_000u64),
                wasmModuleRoot: b256!(
                    "8b104a2e80ac6165dc58b9048de12f301d70b02a0ab51396c22b4b4b802a16a4"
                ),
                owner: CHAIN_OWNER,
                loserStakeEscrow: Address::ZERO,
                chainId: U256::from(CHAIN_ID),
                chainConfig: chain_config,
                genesisBlockNum: 0,
                sequencerInboxMaxTimeVariation: v2::MaxTimeVariation {
                    delayBlocks: U256::from(5760),
                    futureBlocks: U256::from(48),
                    delaySeconds: U256::from(86400),
                    futureSeconds: U256::from(3600),
                },
            },
            validators: vec![VALIDATOR],
            maxDataSize: U256::from(104_857),
            nativeToken: NATIVE_TOKEN,
            deployFactoriesToL2: true,
            maxFeePerGasForRetryables: U256::from(100_000_000),
            batchPosters: vec![BATCH_POSTER],
            batchPosterManager: CHAIN_OWNER,
        },
    };
    Bytes::from(call.abi_encode())
}

pub fn rollup_created() -> RollupCreated {
    RollupCreated {
        rollupAddress: address!("1D901DD7A5eFE421C3C437B147040E5AF22E6A43"),
        nativeToken: NATIVE_TOKEN,
        inboxAddress: address!("EfB2b3a1D2c0F9Fa5E2d2A0e7aC4A0a1E35E1cF9"),
        outbox: address!("63B5C5A1B0fC4e0a4aB0c0F4d36C5aF1e3AaB0d1"),
        rollupEventInbox: address!("5C4dA9b5A3F8e7C1B6d2A0E9F8c7B6A5d4E3F2a1"),
        challengeManager: address!("7a8B9c0D1e2F3a4B5c6D7e8F9a0B1c2D3e4F5a6B"),
        adminProxy: address!("9E8d7C6b5A4f3E2d1C0b9A8f7E6d5C4b3A2f1E0d"),
        sequencerInbox: address!("2F3e4D5c6B7a8F9e0D1c2B3a4F5e6D7c8B9a0F1e"),
        bridge: address!("4a5B6c7D8e9F0a1B2c3D4e5F6a7B8c9D0e1F2a3B"),
        upgradeExecutor: address!("6C7d8E9f0A1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d"),
        validatorUtils: address!("8E9f0A1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f"),
        validatorWalletCreator: address!("0A1b2C3d4E5f6A7b8C9d0E1f2A3b4C5d6E7f8A9b"),
    }
}

pub fn deployment_transaction(input: Bytes) -> DeploymentTransaction {
    DeploymentTransaction {
        hash: TX_HASH,
        from: CHAIN_OWNER,
        block_number: Some(DEPLOYED_AT),
        input,
    }
}

pub fn deployment_receipt(event: &RollupCreated) -> DeploymentReceipt {
    // An unrelated log ahead of the one that matters.
    let noise = Log {
        address: ROLLUP_CREATOR,
        data: LogData::new_unchecked(vec![B256::repeat_byte(0xaa)], Bytes::new()),
    };
    let created = Log { address: ROLLUP_CREATOR, data: event.encode_log_data() };

    DeploymentReceipt {
        transaction_hash: TX_HASH,
        success: true,
        block_number: Some(DEPLOYED_AT),
        logs: vec![noise, created],
    }
}

pub fn endpoint(url: &str) -> Endpoint {
    Endpoint::parse(PARENT_CHAIN_RPC_VAR, url).unwrap()
}

pub fn deployment_config(parent_chain: ParentChain, output_dir: &Path) -> DeploymentConfig {
    DeploymentConfig {
        transaction_hash: TX_HASH,
        batch_poster_private_key: PrivateKey::parse("0x2").unwrap(),
        validator_private_key: PrivateKey::parse("0x1").unwrap(),
        chain_name: "My Arbitrum L3 Chain".to_string(),
        parent_chain,
        parent_chain_rpc: endpoint("http://localhost:8547"),
        beacon_rpc_url: None,
        output_dir: output_dir.to_path_buf(),
    }
}

/// A [ChainReader] serving canned responses and counting calls.
#[derive(Clone)]
pub struct MockChainReader {
    transaction: Option<DeploymentTransaction>,
    receipt: Option<DeploymentReceipt>,
    pub calls: Arc<AtomicUsize>,
}

impl MockChainReader {
    pub fn new(transaction: DeploymentTransaction, receipt: DeploymentReceipt) -> Self {
        Self {
            transaction: Some(transaction),
            receipt: Some(receipt),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A reader for a standard v2 deployment.
    pub fn deployment(data_availability_committee: bool) -> Self {
        let input = create_rollup_input(chain_config_json(data_availability_committee));
        Self::new(deployment_transaction(input), deployment_receipt(&rollup_created()))
    }

    pub fn without_receipt(mut self) -> Self {
        self.receipt = None;
        self
    }

    pub fn without_transaction(mut self) -> Self {
        self.transaction = None;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    async fn transaction(&self, hash: B256) -> Result<DeploymentTransaction, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.transaction.clone().ok_or(FetchError::TransactionNotFound(hash))
    }

    async fn receipt(&self, hash: B256) -> Result<DeploymentReceipt, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.receipt.clone().ok_or(FetchError::ReceiptNotFound(hash))
    }
}
