//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::registry::ValueKind;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// A required constructor parameter is absent or empty
    MissingParameter(String),
    /// A bound constructor parameter does not match its declared value kind
    InvalidParameter {
        /// The offending parameter name
        name: String,
        /// The value kind the schema declares for the slot
        expected: ValueKind,
    },
    /// Error initializing the deployment client
    ClientInitialization(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::MissingParameter(name) => {
                write!(f, "missing required parameter: {}", name)
            }
            ScriptError::InvalidParameter { name, expected } => {
                write!(f, "invalid value for parameter {}: expected {}", name, expected)
            }
            ScriptError::ClientInitialization(s) => {
                write!(f, "error initializing client: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
