use std::path::PathBuf;

use clap::Parser;
use orbit_deployment::{
    config::{
        BATCH_POSTER_KEY_VAR, BEACON_RPC_VAR, CHAIN_NAME_VAR, PARENT_CHAIN_RPC_VAR,
        TRANSACTION_HASH_VAR, VALIDATOR_KEY_VAR,
    },
    ParentChain, RawEnvironment,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Loads `.env` and installs the global logger.
pub fn init_env() {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Prepares nodeConfig.json and orbitSetupScriptConfig.json from an Orbit deployment transaction.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Hash of the createRollup transaction.
    #[arg(long, env = TRANSACTION_HASH_VAR)]
    pub transaction_hash: Option<String>,

    /// Batch poster private key.
    #[arg(long, env = BATCH_POSTER_KEY_VAR, hide_env_values = true)]
    pub batch_poster_private_key: Option<String>,

    /// Validator private key.
    #[arg(long, env = VALIDATOR_KEY_VAR, hide_env_values = true)]
    pub validator_private_key: Option<String>,

    /// Name of the Orbit chain.
    #[arg(long, env = CHAIN_NAME_VAR)]
    pub chain_name: Option<String>,

    /// Parent chain RPC endpoint. Falls back to the parent chain's public endpoint.
    #[arg(long, env = PARENT_CHAIN_RPC_VAR)]
    pub parent_chain_rpc: Option<String>,

    /// Beacon chain RPC endpoint, required when the parent chain is a layer-1 chain.
    #[arg(long, env = BEACON_RPC_VAR)]
    pub beacon_rpc_url: Option<String>,

    /// Parent chain the rollup was deployed on.
    #[arg(long, env = "PARENT_CHAIN", default_value_t = ParentChain::ArbitrumOne)]
    pub parent_chain: ParentChain,

    /// Directory the two configuration files are written to.
    #[arg(long, env = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl From<Args> for RawEnvironment {
    fn from(args: Args) -> Self {
        Self {
            transaction_hash: args.transaction_hash,
            batch_poster_private_key: args.batch_poster_private_key,
            validator_private_key: args.validator_private_key,
            chain_name: args.chain_name,
            parent_chain_rpc: args.parent_chain_rpc,
            beacon_rpc_url: args.beacon_rpc_url,
            parent_chain: args.parent_chain,
            output_dir: args.output_dir,
        }
    }
}
