//! Constants used in the deploy scripts

/// The two-character prefix marking an invocation token as a parameter
pub const PARAM_PREFIX: &str = "--";

/// The reserved parameter selecting which contract kind to deploy
pub const CONTRACT_SELECTOR_PARAM: &str = "contract";

/// The reserved parameter carrying the network RPC URL
pub const RPC_URL_PARAM: &str = "rpc-url";

/// The reserved parameter carrying the deployer's private key
pub const PRIV_KEY_PARAM: &str = "priv-key";

/// The reserved parameter overriding the path of the deployments file
pub const DEPLOYMENTS_PARAM: &str = "deployments";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The name of the Cargo command
pub const CARGO_COMMAND: &str = "cargo";

/// The name of the stylus command
pub const STYLUS_COMMAND: &str = "stylus";

/// The name of the deploy command
pub const DEPLOY_COMMAND: &str = "deploy";

/// The `0x` prefix of hex-encoded addresses
pub const HEX_PREFIX: &str = "0x";

/// The number of hex characters in an Ethereum address, excluding the prefix
pub const ADDRESS_HEX_CHARS: usize = 40;
