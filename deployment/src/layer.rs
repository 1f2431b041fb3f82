use std::{fmt::Display, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};

use crate::errors::ConfigError;

/// Where a parent chain itself settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementLayer {
    /// A base (layer-1) chain. Orbit chains on top of it post blobs and need a beacon endpoint.
    Base,
    /// A layer-2 chain settling to some base chain.
    Rollup,
}

/// Classifies a parent chain by id.
pub trait LayerClassifier {
    fn layer(&self, parent_chain_id: u64) -> Result<SettlementLayer, ConfigError>;
}

/// Parent chains an Orbit chain can be deployed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum ParentChain {
    Mainnet,
    Sepolia,
    Holesky,
    #[default]
    ArbitrumOne,
    ArbitrumNova,
    ArbitrumSepolia,
    Base,
    BaseSepolia,
}

impl ParentChain {
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Sepolia => 11155111,
            Self::Holesky => 17000,
            Self::ArbitrumOne => 42161,
            Self::ArbitrumNova => 42170,
            Self::ArbitrumSepolia => 421614,
            Self::Base => 8453,
            Self::BaseSepolia => 84532,
        }
    }

    pub fn from_chain_id(id: u64) -> Result<Self, ConfigError> {
        Self::iter()
            .find(|chain| chain.chain_id() == id)
            .ok_or(ConfigError::UnsupportedParentChain(id))
    }

    pub const fn layer(&self) -> SettlementLayer {
        match self {
            Self::Mainnet | Self::Sepolia | Self::Holesky => SettlementLayer::Base,
            Self::ArbitrumOne
            | Self::ArbitrumNova
            | Self::ArbitrumSepolia
            | Self::Base
            | Self::BaseSepolia => SettlementLayer::Rollup,
        }
    }

    /// Whether the parent chain runs ArbOS, which Nitro needs to know to read its inbox.
    pub const fn is_arbitrum(&self) -> bool {
        matches!(self, Self::ArbitrumOne | Self::ArbitrumNova | Self::ArbitrumSepolia)
    }

    /// Public endpoint used when no `PARENT_CHAIN_RPC` is given.
    pub const fn default_rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://cloudflare-eth.com",
            Self::Sepolia => "https://rpc.sepolia.org",
            Self::Holesky => "https://ethereum-holesky-rpc.publicnode.com",
            Self::ArbitrumOne => "https://arb1.arbitrum.io/rpc",
            Self::ArbitrumNova => "https://nova.arbitrum.io/rpc",
            Self::ArbitrumSepolia => "https://sepolia-rollup.arbitrum.io/rpc",
            Self::Base => "https://mainnet.base.org",
            Self::BaseSepolia => "https://sepolia.base.org",
        }
    }
}

impl FromStr for ParentChain {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "holesky" => Ok(Self::Holesky),
            "arbitrum-one" => Ok(Self::ArbitrumOne),
            "arbitrum-nova" => Ok(Self::ArbitrumNova),
            "arbitrum-sepolia" => Ok(Self::ArbitrumSepolia),
            "base" => Ok(Self::Base),
            "base-sepolia" => Ok(Self::BaseSepolia),
            _ => Err(ConfigError::UnknownParentChain(s.to_string())),
        }
    }
}

impl Display for ParentChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Holesky => "holesky",
            Self::ArbitrumOne => "arbitrum-one",
            Self::ArbitrumNova => "arbitrum-nova",
            Self::ArbitrumSepolia => "arbitrum-sepolia",
            Self::Base => "base",
            Self::BaseSepolia => "base-sepolia",
        };

        f.write_str(name)
    }
}

/// The built-in [ParentChain] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownChains;

impl LayerClassifier for KnownChains {
    fn layer(&self, parent_chain_id: u64) -> Result<SettlementLayer, ConfigError> {
        ParentChain::from_chain_id(parent_chain_id).map(|chain| chain.layer())
    }
}
