use std::{fmt, path::PathBuf};

use alloy::primitives::B256;
use reqwest::Url;

use crate::{
    errors::ConfigError,
    keys::PrivateKey,
    layer::{LayerClassifier, ParentChain, SettlementLayer},
    utils::b256_from_str,
};

pub const TRANSACTION_HASH_VAR: &str = "ORBIT_DEPLOYMENT_TRANSACTION_HASH";
pub const BATCH_POSTER_KEY_VAR: &str = "BATCH_POSTER_PRIVATE_KEY";
pub const VALIDATOR_KEY_VAR: &str = "VALIDATOR_PRIVATE_KEY";
pub const CHAIN_NAME_VAR: &str = "CHAIN_NAME";
pub const PARENT_CHAIN_RPC_VAR: &str = "PARENT_CHAIN_RPC";
pub const BEACON_RPC_VAR: &str = "ETHEREUM_BEACON_RPC_URL";

/// An endpoint URL, validated but written back exactly as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
    text: String,
}

impl Endpoint {
    pub fn parse(var: &'static str, value: &str) -> Result<Self, ConfigError> {
        let text = value.trim();
        let url =
            Url::parse(text).map_err(|e| ConfigError::Invalid { var, reason: e.to_string() })?;
        Ok(Self { url, text: text.to_string() })
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Deployment inputs as read from the environment, before any validation.
#[derive(Clone, Default)]
pub struct RawEnvironment {
    pub transaction_hash: Option<String>,
    pub batch_poster_private_key: Option<String>,
    pub validator_private_key: Option<String>,
    pub chain_name: Option<String>,
    pub parent_chain_rpc: Option<String>,
    pub beacon_rpc_url: Option<String>,
    pub parent_chain: ParentChain,
    pub output_dir: PathBuf,
}

/// Validated inputs for one run. Built once and passed to every stage.
#[derive(Clone, Debug)]
pub struct DeploymentConfig {
    pub transaction_hash: B256,
    pub batch_poster_private_key: PrivateKey,
    pub validator_private_key: PrivateKey,
    pub chain_name: String,
    pub parent_chain: ParentChain,
    pub parent_chain_rpc: Endpoint,
    /// Only set when the parent chain settles to layer 1.
    pub beacon_rpc_url: Option<Endpoint>,
    pub output_dir: PathBuf,
}

impl DeploymentConfig {
    pub fn resolve<C: LayerClassifier>(
        raw: RawEnvironment,
        classifier: &C,
    ) -> Result<Self, ConfigError> {
        let transaction_hash = b256_from_str(
            TRANSACTION_HASH_VAR,
            &required(TRANSACTION_HASH_VAR, raw.transaction_hash)?,
        )?;
        let batch_poster_private_key = private_key(
            BATCH_POSTER_KEY_VAR,
            required(BATCH_POSTER_KEY_VAR, raw.batch_poster_private_key)?,
        )?;
        let validator_private_key = private_key(
            VALIDATOR_KEY_VAR,
            required(VALIDATOR_KEY_VAR, raw.validator_private_key)?,
        )?;
        let chain_name = required(CHAIN_NAME_VAR, raw.chain_name)?.trim().to_string();

        let parent_chain = raw.parent_chain;
        let parent_chain_rpc = match present(raw.parent_chain_rpc) {
            Some(rpc) => Endpoint::parse(PARENT_CHAIN_RPC_VAR, &rpc)?,
            None => {
                tracing::warn!(
                    "you may encounter timeout errors with the default {} endpoint, please provide the \"{}\" environment variable",
                    parent_chain,
                    PARENT_CHAIN_RPC_VAR
                );
                Endpoint::parse(PARENT_CHAIN_RPC_VAR, parent_chain.default_rpc_url())?
            }
        };

        let beacon_rpc_url = match classifier.layer(parent_chain.chain_id())? {
            SettlementLayer::Base => match present(raw.beacon_rpc_url) {
                Some(beacon) => Some(Endpoint::parse(BEACON_RPC_VAR, &beacon)?),
                None => return Err(ConfigError::MissingBeaconRpc(parent_chain.to_string())),
            },
            SettlementLayer::Rollup => None,
        };

        Ok(Self {
            transaction_hash,
            batch_poster_private_key,
            validator_private_key,
            chain_name,
            parent_chain,
            parent_chain_rpc,
            beacon_rpc_url,
            output_dir: raw.output_dir,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(var: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    present(value).ok_or(ConfigError::Missing(var))
}

fn private_key(var: &'static str, value: String) -> Result<PrivateKey, ConfigError> {
    PrivateKey::parse(&value).map_err(|e| ConfigError::Invalid { var, reason: e.to_string() })
}
