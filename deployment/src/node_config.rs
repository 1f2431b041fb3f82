//! The Nitro node configuration written to `nodeConfig.json`.
//!
//! Keys follow Nitro's kebab-case flag names. `chain.info-json` is itself a JSON document,
//! stored as a string.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{params::NodeConfigParameters, types::ChainConfig, utils::checksummed};

const HTTP_PORT: u16 = 8449;
const BATCH_POSTER_MAX_SIZE: u64 = 90_000;
const SEQUENCER_MAX_TX_DATA_SIZE: u64 = 85_000;
const SEQUENCER_MAX_BLOCK_SPEED: &str = "250ms";
const STAKER_STRATEGY: &str = "MakeNodes";
const DAS_LOCAL_URL: &str = "http://localhost:9876";
// BLS public key placeholder for a local single-member committee.
const DAS_PLACEHOLDER_PUBKEY: &str = "YAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeConfig {
    pub chain: ChainSection,
    pub parent_chain: ParentChainSection,
    pub http: HttpSection,
    pub node: NodeSection,
    pub execution: ExecutionSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainSection {
    pub info_json: String,
    pub name: String,
}

/// One entry of `chain.info-json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainInfo {
    pub chain_id: u64,
    pub parent_chain_id: u64,
    pub parent_chain_is_arbitrum: bool,
    pub chain_name: String,
    pub chain_config: ChainConfig,
    pub rollup: RollupAddresses,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RollupAddresses {
    #[serde(with = "checksummed")]
    pub bridge: Address,
    #[serde(with = "checksummed")]
    pub inbox: Address,
    #[serde(with = "checksummed")]
    pub sequencer_inbox: Address,
    #[serde(with = "checksummed")]
    pub rollup: Address,
    #[serde(with = "checksummed")]
    pub validator_utils: Address,
    #[serde(with = "checksummed")]
    pub validator_wallet_creator: Address,
    pub deployed_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParentChainSection {
    pub connection: Connection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob_client: Option<BlobClient>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BlobClient {
    pub beacon_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSection {
    pub addr: String,
    pub port: u16,
    pub vhosts: Vec<String>,
    pub corsdomain: Vec<String>,
    pub api: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeSection {
    pub sequencer: bool,
    pub delayed_sequencer: DelayedSequencer,
    pub batch_poster: BatchPoster,
    pub staker: Staker,
    pub dangerous: Dangerous,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_availability: Option<DataAvailability>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DelayedSequencer {
    pub enable: bool,
    pub use_merge_finality: bool,
    pub finalize_distance: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BatchPoster {
    pub max_size: u64,
    pub enable: bool,
    pub parent_chain_wallet: Wallet,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Staker {
    pub enable: bool,
    pub strategy: String,
    pub parent_chain_wallet: Wallet,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wallet {
    pub private_key: String,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet").field("private_key", &"<redacted>").finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dangerous {
    pub no_sequencer_coordinator: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataAvailability {
    pub enable: bool,
    #[serde(with = "checksummed")]
    pub sequencer_inbox_address: Address,
    pub parent_chain_node_url: String,
    pub rest_aggregator: RestAggregator,
    pub rpc_aggregator: RpcAggregator,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestAggregator {
    pub enable: bool,
    pub urls: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RpcAggregator {
    pub enable: bool,
    pub assumed_honest: u64,
    /// JSON-encoded list of [DasBackend].
    pub backends: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DasBackend {
    pub url: String,
    pub pubkey: String,
    pub signermask: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExecutionSection {
    pub forwarding_target: String,
    pub sequencer: ExecutionSequencer,
    pub caching: Caching,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExecutionSequencer {
    pub enable: bool,
    pub max_tx_data_size: u64,
    pub max_block_speed: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caching {
    pub archive: bool,
}

impl NodeConfig {
    /// Decodes the `chain.info-json` string.
    pub fn chain_info(&self) -> Result<Vec<ChainInfo>, serde_json::Error> {
        serde_json::from_str(&self.chain.info_json)
    }
}

pub fn prepare_node_config(params: &NodeConfigParameters) -> Result<NodeConfig, serde_json::Error> {
    let contracts = &params.core_contracts;
    let parent_chain_url = params.parent_chain_rpc_url.to_string();

    let info = ChainInfo {
        chain_id: params.chain_id,
        parent_chain_id: params.parent_chain_id,
        parent_chain_is_arbitrum: params.parent_chain_is_arbitrum,
        chain_name: params.chain_name.clone(),
        chain_config: params.chain_config.clone(),
        rollup: RollupAddresses {
            bridge: contracts.bridge,
            inbox: contracts.inbox,
            sequencer_inbox: contracts.sequencer_inbox,
            rollup: contracts.rollup,
            validator_utils: contracts.validator_utils,
            validator_wallet_creator: contracts.validator_wallet_creator,
            deployed_at: contracts.deployed_at_block_number,
        },
    };

    let data_availability = if params.chain_config.arbitrum.data_availability_committee {
        let backends = vec![DasBackend {
            url: DAS_LOCAL_URL.to_string(),
            pubkey: DAS_PLACEHOLDER_PUBKEY.to_string(),
            signermask: 1,
        }];
        Some(DataAvailability {
            enable: true,
            sequencer_inbox_address: contracts.sequencer_inbox,
            parent_chain_node_url: parent_chain_url.clone(),
            rest_aggregator: RestAggregator { enable: true, urls: vec![DAS_LOCAL_URL.to_string()] },
            rpc_aggregator: RpcAggregator {
                enable: true,
                assumed_honest: 1,
                backends: serde_json::to_string(&backends)?,
            },
        })
    } else {
        None
    };

    Ok(NodeConfig {
        chain: ChainSection {
            info_json: serde_json::to_string(&[info])?,
            name: params.chain_name.clone(),
        },
        parent_chain: ParentChainSection {
            connection: Connection { url: parent_chain_url },
            blob_client: params
                .parent_chain_beacon_rpc_url
                .as_ref()
                .map(|url| BlobClient { beacon_url: url.to_string() }),
        },
        http: HttpSection {
            addr: "0.0.0.0".to_string(),
            port: HTTP_PORT,
            vhosts: vec!["*".to_string()],
            corsdomain: vec!["*".to_string()],
            api: ["eth", "net", "web3", "arb", "debug"].map(String::from).to_vec(),
        },
        node: NodeSection {
            sequencer: true,
            delayed_sequencer: DelayedSequencer {
                enable: true,
                use_merge_finality: false,
                finalize_distance: 1,
            },
            batch_poster: BatchPoster {
                max_size: BATCH_POSTER_MAX_SIZE,
                enable: true,
                parent_chain_wallet: Wallet {
                    private_key: params.batch_poster_private_key.to_unprefixed_hex(),
                },
            },
            staker: Staker {
                enable: true,
                strategy: STAKER_STRATEGY.to_string(),
                parent_chain_wallet: Wallet {
                    private_key: params.validator_private_key.to_unprefixed_hex(),
                },
            },
            dangerous: Dangerous { no_sequencer_coordinator: true },
            data_availability,
        },
        execution: ExecutionSection {
            forwarding_target: String::new(),
            sequencer: ExecutionSequencer {
                enable: true,
                max_tx_data_size: SEQUENCER_MAX_TX_DATA_SIZE,
                max_block_speed: SEQUENCER_MAX_BLOCK_SPEED.to_string(),
            },
            caching: Caching { archive: true },
        },
    })
}
