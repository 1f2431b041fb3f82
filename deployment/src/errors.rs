use std::path::PathBuf;

use alloy::{primitives::B256, transports::TransportError};
use thiserror::Error;

/// Missing or malformed deployment input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("please provide the \"{0}\" environment variable")]
    Missing(&'static str),
    #[error("invalid \"{var}\": {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("please provide the \"ETHEREUM_BEACON_RPC_URL\" environment variable, required when the parent chain ({0}) settles to layer 1")]
    MissingBeaconRpc(String),
    #[error("parent chain {0} is not supported")]
    UnsupportedParentChain(u64),
    #[error("parent chain \"{0}\" is not recognized")]
    UnknownParentChain(String),
}

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("private key is empty")]
    Empty,
    #[error("private key contains a non-hex character")]
    InvalidHex,
    #[error("private key has {0} hex digits, at most 64 are allowed")]
    TooLong(usize),
    #[error("private key is not a valid secp256k1 scalar: {0}")]
    InvalidScalar(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transaction {0} was not found on the parent chain")]
    TransactionNotFound(B256),
    #[error("receipt for transaction {0} was not found on the parent chain")]
    ReceiptNotFound(B256),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failures while decoding the deployment transaction or its receipt.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("transaction input is {0} bytes long, too short for a function call")]
    InputTooShort(usize),
    #[error("transaction input selector 0x{0} is not a createRollup call")]
    UnknownSelector(String),
    #[error("cannot decode createRollup input: {0}")]
    Abi(#[from] alloy::sol_types::Error),
    #[error("cannot parse the embedded chain config: {0}")]
    ChainConfig(#[from] serde_json::Error),
    #[error("deployment transaction {0} reverted")]
    Reverted(B256),
    #[error("receipt for {0} does not contain a RollupCreated event")]
    MissingRollupCreated(B256),
    #[error("receipt for {0} has no block number")]
    MissingBlockNumber(B256),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot serialize {path}: {source}")]
    Serialize { path: PathBuf, source: serde_json::Error },
    #[error("cannot write {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

/// Any failure of a node-config preparation run.
#[derive(Debug, Error)]
pub enum PrepareError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Key(#[from] KeyError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("cannot build the node config: {0}")]
    NodeConfig(serde_json::Error),
    #[error(transparent)]
    Write(#[from] WriteError),
}
