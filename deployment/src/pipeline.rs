use crate::{
    config::DeploymentConfig,
    errors::PrepareError,
    extract::{extract, ExtractedDeployment},
    keys::{AccountDeriver, LocalKeyDeriver},
    layer::{KnownChains, LayerClassifier},
    node_config::{prepare_node_config, NodeConfig},
    params::{NodeConfigParameters, OrbitSetupScriptConfig, ParameterBuilder},
    reader::ChainReader,
    writer::{write_json, OutputPaths},
};

/// Everything a successful run produced.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub deployment: ExtractedDeployment,
    pub parameters: NodeConfigParameters,
    pub node_config: NodeConfig,
    pub setup_script_config: OrbitSetupScriptConfig,
    pub paths: OutputPaths,
}

/// Turns one deployment transaction into `nodeConfig.json` and `orbitSetupScriptConfig.json`.
#[derive(Debug)]
pub struct Pipeline<R, D = LocalKeyDeriver, C = KnownChains> {
    reader: R,
    builder: ParameterBuilder<D, C>,
}

impl<R: ChainReader> Pipeline<R> {
    pub fn new(reader: R) -> Self {
        Self::with_builder(reader, ParameterBuilder::new(LocalKeyDeriver, KnownChains))
    }
}

impl<R, D, C> Pipeline<R, D, C>
where
    R: ChainReader,
    D: AccountDeriver,
    C: LayerClassifier,
{
    pub const fn with_builder(reader: R, builder: ParameterBuilder<D, C>) -> Self {
        Self { reader, builder }
    }

    pub async fn run(&self, config: &DeploymentConfig) -> Result<Artifacts, PrepareError> {
        let hash = config.transaction_hash;
        tracing::info!("fetching deployment transaction {} from {}", hash, config.parent_chain);

        let (tx, receipt) =
            tokio::try_join!(self.reader.transaction(hash), self.reader.receipt(hash))?;

        let deployment = extract(&tx, &receipt)?;
        tracing::info!(
            "rollup {} for chain {} deployed at block {}",
            deployment.core_contracts.rollup,
            deployment.chain_config.chain_id,
            deployment.core_contracts.deployed_at_block_number
        );

        let parameters = self.builder.node_config_parameters(config, &deployment)?;
        let setup_script_config = self.builder.setup_script_config(&parameters);
        let node_config = prepare_node_config(&parameters).map_err(PrepareError::NodeConfig)?;

        let paths = OutputPaths::in_dir(&config.output_dir);
        write_json(&paths.node_config, &node_config)?;
        tracing::info!("node config written to {:?}", paths.node_config);
        write_json(&paths.setup_script_config, &setup_script_config)?;
        tracing::info!("setup script config written to {:?}", paths.setup_script_config);

        Ok(Artifacts { deployment, parameters, node_config, setup_script_config, paths })
    }
}
