use alloy::primitives::{Address, Bytes, Log, B256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::checksummed;

/// The `createRollup` transaction as read from the parent chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentTransaction {
    pub hash: B256,
    pub from: Address,
    pub block_number: Option<u64>,
    pub input: Bytes,
}

/// The mined receipt of the `createRollup` transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentReceipt {
    pub transaction_hash: B256,
    pub success: bool,
    pub block_number: Option<u64>,
    pub logs: Vec<Log>,
}

/// Chain parameters embedded as JSON in the deployment calldata.
///
/// Only the fields the pipeline reads are typed. The decoded document is kept whole so it
/// reaches the node config with its keys in their original order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ChainConfig {
    pub chain_id: u64,
    pub arbitrum: ArbitrumChainParams,
    document: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArbitrumChainParams {
    #[serde(rename = "EnableArbOS")]
    pub enable_arb_os: bool,
    pub allow_debug_precompiles: bool,
    pub data_availability_committee: bool,
    #[serde(rename = "InitialArbOSVersion")]
    pub initial_arb_os_version: u64,
    #[serde(with = "checksummed")]
    pub initial_chain_owner: Address,
    pub genesis_block_num: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypedChainConfig {
    chain_id: u64,
    arbitrum: ArbitrumChainParams,
}

impl ChainConfig {
    /// A top-level key of the document, typed or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }
}

impl TryFrom<Map<String, Value>> for ChainConfig {
    type Error = serde_json::Error;

    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let typed: TypedChainConfig = serde_json::from_value(Value::Object(document.clone()))?;
        Ok(Self { chain_id: typed.chain_id, arbitrum: typed.arbitrum, document })
    }
}

impl From<ChainConfig> for Map<String, Value> {
    fn from(config: ChainConfig) -> Self {
        let mut document = config.document;
        // Existing keys keep their position on insert.
        document.insert("chainId".to_string(), Value::from(config.chain_id));

        let typed = match serde_json::to_value(&config.arbitrum) {
            Ok(Value::Object(typed)) => typed,
            _ => Map::new(),
        };
        match document.get_mut("arbitrum") {
            Some(Value::Object(arbitrum)) => arbitrum.extend(typed),
            _ => {
                document.insert("arbitrum".to_string(), Value::Object(typed));
            }
        }
        document
    }
}

impl PartialEq for ChainConfig {
    fn eq(&self, other: &Self) -> bool {
        Map::from(self.clone()) == Map::from(other.clone())
    }
}

/// Contracts created by `createRollup`, as emitted in `RollupCreated`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreContracts {
    #[serde(with = "checksummed")]
    pub rollup: Address,
    #[serde(with = "checksummed")]
    pub native_token: Address,
    #[serde(with = "checksummed")]
    pub inbox: Address,
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

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_chain_config_keeps_unknown_keys() {
        let raw = json!({
            "homesteadBlock": 0,
            "chainId": 412346,
            "clique": { "period": 0, "epoch": 0 },
            "arbitrum": {
                "EnableArbOS": true,
                "AllowDebugPrecompiles": false,
                "DataAvailabilityCommittee": true,
                "InitialArbOSVersion": 20,
                "InitialChainOwner": "0x3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e",
                "MaxCodeSize": 24576,
                "GenesisBlockNum": 0
            },
            "berlinBlock": 0
        });

        let config: ChainConfig = serde_json::from_value(raw).unwrap();
        assert_eq!(config.chain_id, 412346);
        assert!(config.arbitrum.data_availability_committee);
        assert_eq!(
            config.arbitrum.initial_chain_owner,
            address!("3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E")
        );
        assert_eq!(config.get("homesteadBlock"), Some(&json!(0)));
        assert_eq!(config.get("arbitrum").unwrap()["MaxCodeSize"], json!(24576));

        // Key order survives and the owner comes back checksummed.
        let written = serde_json::to_string(&config).unwrap();
        assert_eq!(
            written,
            concat!(
                r#"{"homesteadBlock":0,"chainId":412346,"clique":{"period":0,"epoch":0},"#,
                r#""arbitrum":{"EnableArbOS":true,"AllowDebugPrecompiles":false,"#,
                r#""DataAvailabilityCommittee":true,"InitialArbOSVersion":20,"#,
                r#""InitialChainOwner":"0x3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E","#,
                r#""MaxCodeSize":24576,"GenesisBlockNum":0},"berlinBlock":0}"#
            )
        );
    }

    #[test]
    fn test_chain_config_writes_back_typed_fields() {
        let raw = json!({
            "chainId": 412346,
            "arbitrum": {
                "EnableArbOS": true,
                "AllowDebugPrecompiles": false,
                "DataAvailabilityCommittee": false,
                "InitialArbOSVersion": 20,
                "InitialChainOwner": "0x3f1eae7d46d88f08fc2f8ed27fcb2ab183eb2d0e",
                "GenesisBlockNum": 0
            }
        });

        let mut config: ChainConfig = serde_json::from_value(raw).unwrap();
        config.arbitrum.data_availability_committee = true;

        let written = serde_json::to_value(&config).unwrap();
        assert_eq!(written["arbitrum"]["DataAvailabilityCommittee"], json!(true));
        assert_eq!(serde_json::from_value::<ChainConfig>(written).unwrap(), config);
    }

    #[test]
    fn test_chain_config_requires_chain_id() {
        let raw = json!({ "arbitrum": {} });
        assert!(serde_json::from_value::<ChainConfig>(raw).is_err());
    }
}
