//! The external deployment collaborator interface

use tokio::process::Command;

use crate::{
    constants::{CARGO_COMMAND, DEPLOY_COMMAND, STYLUS_COMMAND},
    errors::ScriptError,
    registry::ValueKind,
};

/// The address at which a contract was deployed
pub type DeployedAddress = String;

/// One fully resolved constructor argument, in positional order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorArg {
    /// A string value bound from the invocation parameters
    Value(String),
    /// An optional slot with no usable value, left for the collaborator
    /// to default
    Unset,
}

/// The external system responsible for submitting a constructor invocation
/// to the target chain.
///
/// Invoked exactly once per valid dispatch; failures are surfaced to the
/// operator unchanged, with no retries at this layer.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Deploy the given contract kind with its positionally ordered
    /// constructor arguments
    async fn deploy(
        &self,
        contract_kind: &str,
        ordered_args: &[ConstructorArg],
    ) -> Result<DeployedAddress, ScriptError>;
}

/// A deployer that shells out to `cargo stylus deploy` against the
/// configured endpoint.
///
/// The endpoint and key are optional at construction so that no-op
/// invocations need no client configuration; they are demanded only when a
/// deployment is actually issued.
pub struct CommandDeployer {
    /// The target network RPC URL
    rpc_url: Option<String>,
    /// The deployer's private key
    // TODO: Better key management
    priv_key: Option<String>,
}

impl CommandDeployer {
    /// Construct a deployer from the reserved configuration parameters
    pub fn new(rpc_url: Option<String>, priv_key: Option<String>) -> Self {
        CommandDeployer { rpc_url, priv_key }
    }
}

impl Deployer for CommandDeployer {
    async fn deploy(
        &self,
        contract_kind: &str,
        ordered_args: &[ConstructorArg],
    ) -> Result<DeployedAddress, ScriptError> {
        let rpc_url = self.rpc_url.as_deref().ok_or_else(|| {
            ScriptError::ClientInitialization("rpc-url parameter is required".to_string())
        })?;
        let priv_key = self.priv_key.as_deref().ok_or_else(|| {
            ScriptError::ClientInitialization("priv-key parameter is required".to_string())
        })?;

        let output = Command::new(CARGO_COMMAND)
            .args(deploy_args(rpc_url, priv_key, contract_kind, ordered_args))
            .output()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        if !output.status.success() {
            return Err(ScriptError::ContractDeployment(
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        parse_deployed_address(&String::from_utf8_lossy(&output.stdout)).ok_or_else(|| {
            ScriptError::ContractDeployment(
                "no deployed address found in deploy output".to_string(),
            )
        })
    }
}

/// Assemble the argument vector for the spawned deploy tool.
///
/// Every constructor slot is emitted, one token per slot: an unset slot
/// becomes an explicit `--constructor-default` placeholder rather than being
/// omitted, so the tool's positional view of the arguments always matches
/// the schema's slot order.
fn deploy_args(
    rpc_url: &str,
    priv_key: &str,
    contract_kind: &str,
    ordered_args: &[ConstructorArg],
) -> Vec<String> {
    let mut args = vec![
        STYLUS_COMMAND.to_string(),
        DEPLOY_COMMAND.to_string(),
        format!("--endpoint={}", rpc_url),
        format!("--private-key={}", priv_key),
        format!("--contract={}", contract_kind),
    ];

    for arg in ordered_args {
        match arg {
            ConstructorArg::Value(value) => args.push(format!("--constructor-arg={}", value)),
            ConstructorArg::Unset => args.push("--constructor-default".to_string()),
        }
    }

    args
}

/// Extract the deployed contract address from the deploy tool's output.
///
/// The tool reports the address as the last address-shaped token it prints.
fn parse_deployed_address(stdout: &str) -> Option<DeployedAddress> {
    stdout
        .split_whitespace()
        .rev()
        .find(|token| ValueKind::Address.matches(token))
        .map(|token| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::{deploy_args, parse_deployed_address, ConstructorArg};

    #[test]
    fn test_deploy_args_one_token_per_slot() {
        let ordered_args = vec![
            ConstructorArg::Value("Foo".to_string()),
            ConstructorArg::Value("FOO".to_string()),
            ConstructorArg::Value("18".to_string()),
        ];
        let args = deploy_args("http://localhost:8547", "0xkey", "token", &ordered_args);

        let constructor_args: Vec<&str> = args
            .iter()
            .filter(|a| a.starts_with("--constructor"))
            .map(|a| a.as_str())
            .collect();
        assert_eq!(
            constructor_args,
            vec![
                "--constructor-arg=Foo",
                "--constructor-arg=FOO",
                "--constructor-arg=18",
            ]
        );
    }

    #[test]
    fn test_deploy_args_unset_slot_holds_its_position() {
        // A middle unset slot must not shift the arguments after it
        let muon = format!("0x{}", "ab".repeat(20));
        let ordered_args = vec![
            ConstructorArg::Value(muon.clone()),
            ConstructorArg::Unset,
            ConstructorArg::Value("5".to_string()),
        ];
        let args = deploy_args("http://localhost:8547", "0xkey", "bridge", &ordered_args);

        let constructor_args: Vec<&str> = args
            .iter()
            .filter(|a| a.starts_with("--constructor"))
            .map(|a| a.as_str())
            .collect();
        assert_eq!(constructor_args.len(), ordered_args.len());
        assert_eq!(constructor_args[0], format!("--constructor-arg={}", muon));
        assert_eq!(constructor_args[1], "--constructor-default");
        assert_eq!(constructor_args[2], "--constructor-arg=5");
    }

    #[test]
    fn test_parse_deployed_address() {
        let addr = format!("0x{}", "ab".repeat(20));
        let stdout = format!("compiling...\ndeployed code at address {}\nfinished", addr);
        assert_eq!(parse_deployed_address(&stdout), Some(addr));
    }

    #[test]
    fn test_parse_deployed_address_none() {
        assert_eq!(parse_deployed_address("nothing deployed here"), None);
        assert_eq!(parse_deployed_address(""), None);
    }

    #[test]
    fn test_parse_deployed_address_picks_last() {
        let first = format!("0x{}", "11".repeat(20));
        let last = format!("0x{}", "22".repeat(20));
        let stdout = format!("activated {}\ndeployed {}", first, last);
        assert_eq!(parse_deployed_address(&stdout), Some(last));
    }
}
