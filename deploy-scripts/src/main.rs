//! Entrypoint for the contract deployment dispatcher

use std::{env, path::Path};

use deploy_scripts::{
    cli::{parse_params, ParamValue},
    constants::{DEFAULT_DEPLOYMENTS_PATH, DEPLOYMENTS_PARAM, PRIV_KEY_PARAM, RPC_URL_PARAM},
    deployer::CommandDeployer,
    deployments::record_deployment,
    dispatch::{dispatch, DispatchOutcome},
    errors::ScriptError,
    registry::ContractRegistry,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    tracing_subscriber::fmt().pretty().init();

    let params = parse_params(env::args().skip(1));
    let registry = ContractRegistry::new();

    let deployer = CommandDeployer::new(
        params
            .get(RPC_URL_PARAM)
            .and_then(ParamValue::as_str)
            .map(str::to_string),
        params
            .get(PRIV_KEY_PARAM)
            .and_then(ParamValue::as_str)
            .map(str::to_string),
    );

    match dispatch(&registry, &params, &deployer).await? {
        DispatchOutcome::NoOp => {}
        DispatchOutcome::Deployed {
            contract_kind,
            address,
        } => {
            let deployments_path = params
                .get(DEPLOYMENTS_PARAM)
                .and_then(ParamValue::as_str)
                .unwrap_or(DEFAULT_DEPLOYMENTS_PATH);

            record_deployment(Path::new(deployments_path), contract_kind, &address)?;

            info!("`{}` contract deployed at {}", contract_kind, address);
        }
    }

    Ok(())
}
