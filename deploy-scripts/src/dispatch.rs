//! Dispatch of a parsed invocation to the deployment collaborator

use tracing::{debug, info};

use crate::{
    cli::{ParamValue, ParameterMap},
    constants::CONTRACT_SELECTOR_PARAM,
    deployer::{ConstructorArg, DeployedAddress, Deployer},
    errors::ScriptError,
    registry::ContractRegistry,
    validate::validate,
};

/// The terminal outcome of one dispatch
#[derive(Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No registered contract kind was selected; nothing was deployed
    NoOp,
    /// A contract was deployed
    Deployed {
        /// The deployed contract kind
        contract_kind: &'static str,
        /// The address reported by the collaborator
        address: DeployedAddress,
    },
}

/// Resolve the selected contract kind, validate its parameters, and invoke
/// the deployment collaborator exactly once.
///
/// An absent or unregistered `contract` selector is a deliberate no-op, not
/// an error. Validation failures are fatal and reported before any
/// collaborator call is made; collaborator failures are propagated unchanged.
pub async fn dispatch(
    registry: &ContractRegistry,
    params: &ParameterMap,
    deployer: &impl Deployer,
) -> Result<DispatchOutcome, ScriptError> {
    let Some(kind) = params
        .get(CONTRACT_SELECTOR_PARAM)
        .and_then(ParamValue::as_str)
    else {
        debug!("no contract selected, skipping deployment");
        return Ok(DispatchOutcome::NoOp);
    };

    let Some(schema) = registry.lookup(kind) else {
        debug!("no schema registered for contract kind `{}`, skipping", kind);
        return Ok(DispatchOutcome::NoOp);
    };

    validate(schema, params)?;

    // Constructor arguments are read back in the schema's declared slot
    // order, which maps 1:1 onto the constructor's positional signature.
    // Validation guarantees every required slot a non-empty, kind-conforming
    // string; an optional slot bound to the bare-flag sentinel or the empty
    // string has no usable value and degrades to `Unset`
    let ordered_args: Vec<ConstructorArg> = schema
        .slots
        .iter()
        .map(
            |slot| match params.get(slot.name).and_then(ParamValue::as_str) {
                Some("") | None => ConstructorArg::Unset,
                Some(value) => ConstructorArg::Value(value.to_string()),
            },
        )
        .collect();

    info!("deploying `{}` contract", schema.contract_kind);
    let address = deployer.deploy(schema.contract_kind, &ordered_args).await?;

    Ok(DispatchOutcome::Deployed {
        contract_kind: schema.contract_kind,
        address,
    })
}
