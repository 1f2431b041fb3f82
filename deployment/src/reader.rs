use alloy::{
    consensus::Transaction as _,
    primitives::{Bytes, B256},
    providers::{Provider, ReqwestProvider},
    rpc::types::{Transaction, TransactionReceipt},
};
use async_trait::async_trait;

use crate::{
    errors::FetchError,
    types::{DeploymentReceipt, DeploymentTransaction},
};

/// Read access to the parent chain.
#[async_trait]
pub trait ChainReader {
    async fn transaction(&self, hash: B256) -> Result<DeploymentTransaction, FetchError>;

    async fn receipt(&self, hash: B256) -> Result<DeploymentReceipt, FetchError>;
}

/// A [ChainReader] over Ethereum JSON-RPC.
#[derive(Debug, Clone)]
pub struct RpcChainReader {
    inner: ReqwestProvider,
}

impl RpcChainReader {
    pub fn new(inner: ReqwestProvider) -> Self {
        Self { inner }
    }

    pub fn new_http(url: reqwest::Url) -> Self {
        Self::new(ReqwestProvider::new_http(url))
    }
}

#[async_trait]
impl ChainReader for RpcChainReader {
    async fn transaction(&self, hash: B256) -> Result<DeploymentTransaction, FetchError> {
        let tx = self
            .inner
            .get_transaction_by_hash(hash)
            .await?
            .ok_or(FetchError::TransactionNotFound(hash))?;
        Ok(to_deployment_transaction(hash, &tx))
    }

    async fn receipt(&self, hash: B256) -> Result<DeploymentReceipt, FetchError> {
        let receipt = self
            .inner
            .get_transaction_receipt(hash)
            .await?
            .ok_or(FetchError::ReceiptNotFound(hash))?;
        Ok(to_deployment_receipt(&receipt))
    }
}

fn to_deployment_transaction(hash: B256, tx: &Transaction) -> DeploymentTransaction {
    DeploymentTransaction {
        hash,
        from: tx.from,
        block_number: tx.block_number,
        input: Bytes::copy_from_slice(tx.input()),
    }
}

fn to_deployment_receipt(receipt: &TransactionReceipt) -> DeploymentReceipt {
    DeploymentReceipt {
        transaction_hash: receipt.transaction_hash,
        success: receipt.status(),
        block_number: receipt.block_number,
        logs: receipt.inner.logs().iter().map(|log| log.inner.clone()).collect(),
    }
}
