use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    config::{DeploymentConfig, Endpoint},
    errors::PrepareError,
    extract::ExtractedDeployment,
    keys::{AccountDeriver, LocalKeyDeriver, PrivateKey},
    layer::{KnownChains, LayerClassifier, SettlementLayer},
    types::{ChainConfig, CoreContracts},
    utils::checksummed,
};

/// Minimum L2 base fee handed to the setup script, in wei. Fixed, not configurable.
pub const MIN_L2_BASE_FEE: u64 = 100_000_000;

/// Inputs to node-config preparation.
#[derive(Clone, Debug)]
pub struct NodeConfigParameters {
    pub chain_name: String,
    pub chain_id: u64,
    pub chain_owner: Address,
    pub chain_config: ChainConfig,
    pub core_contracts: CoreContracts,
    pub batch_poster_private_key: PrivateKey,
    pub batch_poster: Address,
    pub validator_private_key: PrivateKey,
    pub validator: Address,
    pub parent_chain_id: u64,
    pub parent_chain_is_arbitrum: bool,
    pub parent_chain_rpc_url: Endpoint,
    pub parent_chain_beacon_rpc_url: Option<Endpoint>,
}

/// Parameters for the Orbit setup script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitSetupScriptConfig {
    #[serde(with = "checksummed")]
    pub network_fee_receiver: Address,
    #[serde(with = "checksummed")]
    pub infrastructure_fee_collector: Address,
    #[serde(with = "checksummed")]
    pub staker: Address,
    #[serde(with = "checksummed")]
    pub batch_poster: Address,
    #[serde(with = "checksummed")]
    pub chain_owner: Address,
    pub chain_id: u64,
    pub chain_name: String,
    #[serde(rename = "minL2BaseFee")]
    pub min_l2_base_fee: u64,
    pub parent_chain_id: u64,
    #[serde(rename = "parent-chain-node-url")]
    pub parent_chain_node_url: String,
    // NOTE: `utils` duplicates `validatorUtils`; the setup script reads both keys.
    #[serde(with = "checksummed")]
    pub utils: Address,
    #[serde(with = "checksummed")]
    pub rollup: Address,
    #[serde(with = "checksummed")]
    pub inbox: Address,
    #[serde(with = "checksummed")]
    pub native_token: Address,
    #[serde(with = "checksummed")]
    pub outbox: Address,
    #[serde(with = "checksummed")]
    pub rollup_event_inbox: Address,
    #[serde(with = "checksummed")]
    pub challenge_manager: Address,
    #[serde(with = "checksummed")]
    pub admin_proxy: Address,
    #[serde(with = "checksummed")]
    pub sequencer_inbox: Address,
    #[serde(with = "checksummed")]
    pub bridge: Address,
    #[serde(with = "checksummed")]
    pub upgrade_executor: Address,
    #[serde(with = "checksummed")]
    pub validator_utils: Address,
    #[serde(with = "checksummed")]
    pub validator_wallet_creator: Address,
    pub deployed_at_block_number: u64,
}

/// Derives both output structures from extracted deployment data.
#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder<D = LocalKeyDeriver, C = KnownChains> {
    deriver: D,
    classifier: C,
}

impl<D: AccountDeriver, C: LayerClassifier> ParameterBuilder<D, C> {
    pub const fn new(deriver: D, classifier: C) -> Self {
        Self { deriver, classifier }
    }

    pub fn node_config_parameters(
        &self,
        config: &DeploymentConfig,
        deployment: &ExtractedDeployment,
    ) -> Result<NodeConfigParameters, PrepareError> {
        let chain_config = deployment.chain_config.clone();
        let parent_chain_id = config.parent_chain.chain_id();

        let parent_chain_beacon_rpc_url = match self.classifier.layer(parent_chain_id)? {
            SettlementLayer::Base => config.beacon_rpc_url.clone(),
            SettlementLayer::Rollup => None,
        };

        Ok(NodeConfigParameters {
            chain_name: config.chain_name.clone(),
            chain_id: chain_config.chain_id,
            chain_owner: chain_config.arbitrum.initial_chain_owner,
            core_contracts: deployment.core_contracts.clone(),
            batch_poster_private_key: config.batch_poster_private_key.clone(),
            batch_poster: self.deriver.address(&config.batch_poster_private_key)?,
            validator_private_key: config.validator_private_key.clone(),
            validator: self.deriver.address(&config.validator_private_key)?,
            parent_chain_id,
            parent_chain_is_arbitrum: config.parent_chain.is_arbitrum(),
            parent_chain_rpc_url: config.parent_chain_rpc.clone(),
            parent_chain_beacon_rpc_url,
            chain_config,
        })
    }

    /// Flattens node parameters into the setup-script shape.
    pub fn setup_script_config(&self, params: &NodeConfigParameters) -> OrbitSetupScriptConfig {
        let contracts = &params.core_contracts;

        OrbitSetupScriptConfig {
            network_fee_receiver: params.chain_owner,
            infrastructure_fee_collector: params.chain_owner,
            staker: params.validator,
            batch_poster: params.batch_poster,
            chain_owner: params.chain_owner,
            chain_id: params.chain_id,
            chain_name: params.chain_name.clone(),
            min_l2_base_fee: MIN_L2_BASE_FEE,
            parent_chain_id: params.parent_chain_id,
            parent_chain_node_url: params.parent_chain_rpc_url.to_string(),
            utils: contracts.validator_utils,
            rollup: contracts.rollup,
            inbox: contracts.inbox,
            native_token: contracts.native_token,
            outbox: contracts.outbox,
            rollup_event_inbox: contracts.rollup_event_inbox,
            challenge_manager: contracts.challenge_manager,
            admin_proxy: contracts.admin_proxy,
            sequencer_inbox: contracts.sequencer_inbox,
            bridge: contracts.bridge,
            upgrade_executor: contracts.upgrade_executor,
            validator_utils: contracts.validator_utils,
            validator_wallet_creator: contracts.validator_wallet_creator,
            deployed_at_block_number: contracts.deployed_at_block_number,
        }
    }
}
