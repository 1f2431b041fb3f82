use alloy::{
    hex,
    primitives::{Address, U256},
    sol_types::{SolCall, SolEvent},
};

use crate::{
    abi::{v1, v2, RollupCreated},
    errors::ExtractError,
    types::{ChainConfig, CoreContracts, DeploymentReceipt, DeploymentTransaction},
};

/// The first `createRollup` argument, normalized over both ABI generations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollupDeploymentInput {
    pub chain_id: U256,
    pub owner: Address,
    pub chain_config: String,
    pub validators: Vec<Address>,
    pub batch_posters: Vec<Address>,
    pub native_token: Address,
    pub max_data_size: U256,
}

impl From<v1::RollupDeploymentParams> for RollupDeploymentInput {
    fn from(params: v1::RollupDeploymentParams) -> Self {
        Self {
            chain_id: params.config.chainId,
            owner: params.config.owner,
            chain_config: params.config.chainConfig,
            validators: params.validators,
            batch_posters: vec![params.batchPoster],
            native_token: params.nativeToken,
            max_data_size: params.maxDataSize,
        }
    }
}

impl From<v2::RollupDeploymentParams> for RollupDeploymentInput {
    fn from(params: v2::RollupDeploymentParams) -> Self {
        Self {
            chain_id: params.config.chainId,
            owner: params.config.owner,
            chain_config: params.config.chainConfig,
            validators: params.validators,
            batch_posters: params.batchPosters,
            native_token: params.nativeToken,
            max_data_size: params.maxDataSize,
        }
    }
}

/// Everything read out of one transaction/receipt pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractedDeployment {
    pub input: RollupDeploymentInput,
    pub chain_config: ChainConfig,
    pub core_contracts: CoreContracts,
}

pub fn decode_deployment_input(
    tx: &DeploymentTransaction,
) -> Result<RollupDeploymentInput, ExtractError> {
    let input = tx.input.as_ref();
    let selector = input.get(..4).ok_or(ExtractError::InputTooShort(input.len()))?;

    if selector == v2::createRollupCall::SELECTOR.as_slice() {
        Ok(v2::createRollupCall::abi_decode(input, true)?.deployParams.into())
    } else if selector == v1::createRollupCall::SELECTOR.as_slice() {
        Ok(v1::createRollupCall::abi_decode(input, true)?.deployParams.into())
    } else {
        Err(ExtractError::UnknownSelector(hex::encode(selector)))
    }
}

pub fn chain_config_from_transaction(
    tx: &DeploymentTransaction,
) -> Result<ChainConfig, ExtractError> {
    let input = decode_deployment_input(tx)?;
    parse_chain_config(&input)
}

fn parse_chain_config(input: &RollupDeploymentInput) -> Result<ChainConfig, ExtractError> {
    let chain_config: ChainConfig = serde_json::from_str(&input.chain_config)?;
    if input.chain_id != U256::from(chain_config.chain_id) {
        tracing::warn!(
            "createRollup chain id {} differs from the embedded chain config id {}",
            input.chain_id,
            chain_config.chain_id
        );
    }
    Ok(chain_config)
}

pub fn core_contracts_from_receipt(
    receipt: &DeploymentReceipt,
) -> Result<CoreContracts, ExtractError> {
    if !receipt.success {
        return Err(ExtractError::Reverted(receipt.transaction_hash));
    }

    let log = receipt
        .logs
        .iter()
        .find(|log| log.data.topics().first() == Some(&RollupCreated::SIGNATURE_HASH))
        .ok_or(ExtractError::MissingRollupCreated(receipt.transaction_hash))?;
    let event = RollupCreated::decode_log_data(&log.data, true)?;

    let deployed_at_block_number =
        receipt.block_number.ok_or(ExtractError::MissingBlockNumber(receipt.transaction_hash))?;

    Ok(CoreContracts {
        rollup: event.rollupAddress,
        native_token: event.nativeToken,
        inbox: event.inboxAddress,
        outbox: event.outbox,
        rollup_event_inbox: event.rollupEventInbox,
        challenge_manager: event.challengeManager,
        admin_proxy: event.adminProxy,
        sequencer_inbox: event.sequencerInbox,
        bridge: event.bridge,
        upgrade_executor: event.upgradeExecutor,
        validator_utils: event.validatorUtils,
        validator_wallet_creator: event.validatorWalletCreator,
        deployed_at_block_number,
    })
}

pub fn extract(
    tx: &DeploymentTransaction,
    receipt: &DeploymentReceipt,
) -> Result<ExtractedDeployment, ExtractError> {
    let input = decode_deployment_input(tx)?;
    let chain_config = parse_chain_config(&input)?;
    let core_contracts = core_contracts_from_receipt(receipt)?;

    tracing::debug!("chain config: {:#?}", chain_config);
    tracing::debug!("core contracts: {:#?}", core_contracts);

    Ok(ExtractedDeployment { input, chain_config, core_contracts })
}
