//! Record-keeping for deployed contract addresses

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{deployer::DeployedAddress, errors::ScriptError};

/// The contents of the `deployments.json` file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DeploymentsFile {
    /// Deployed addresses keyed by contract kind
    #[serde(default)]
    pub deployments: BTreeMap<String, String>,
}

/// Read the deployments file, or an empty record if the file is absent
pub fn read_deployments(path: &Path) -> Result<DeploymentsFile, ScriptError> {
    if !path.exists() {
        return Ok(DeploymentsFile::default());
    }

    let contents =
        fs::read_to_string(path).map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
}

/// Record the deployed address for a contract kind, merging with any
/// existing records in the file
pub fn record_deployment(
    path: &Path,
    contract_kind: &str,
    address: &DeployedAddress,
) -> Result<(), ScriptError> {
    let mut file = read_deployments(path)?;
    file.deployments
        .insert(contract_kind.to_string(), address.clone());

    let contents = serde_json::to_string_pretty(&file)
        .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

    fs::write(path, contents).map_err(|e| ScriptError::WriteDeployments(e.to_string()))
}
