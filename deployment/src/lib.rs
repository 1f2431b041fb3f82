pub mod abi;
pub mod config;
pub mod errors;
pub mod extract;
pub mod keys;
pub mod layer;
pub mod node_config;
pub mod params;
pub mod pipeline;
pub mod reader;
pub mod types;
pub mod utils;
pub mod writer;

pub use config::{DeploymentConfig, RawEnvironment};
pub use errors::PrepareError;
pub use layer::{KnownChains, ParentChain, SettlementLayer};
pub use pipeline::{Artifacts, Pipeline};
pub use reader::{ChainReader, RpcChainReader};
