use anyhow::Result;
use clap::Parser;
use orbit_deployment::{DeploymentConfig, KnownChains, Pipeline, RpcChainReader};
use script::{init_env, Args};

#[tokio::main]
async fn main() -> Result<()> {
    init_env();
    let args = Args::parse();

    let config = DeploymentConfig::resolve(args.into(), &KnownChains)?;
    let reader = RpcChainReader::new_http(config.parent_chain_rpc.url().clone());
    let artifacts = Pipeline::new(reader).run(&config).await?;

    println!("> Node config written to {:?}", artifacts.paths.node_config);
    println!("> Orbit setup script config written to {:?}", artifacts.paths.setup_script_config);

    Ok(())
}
