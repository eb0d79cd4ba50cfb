//! Static schemas for the deployable contract kinds
//!
//! Slot order in each schema is the target constructor's positional
//! signature, so reordering a schema silently deploys a contract with
//! swapped arguments. Any schema change must be a reviewed diff of the
//! declarations below, never a reordering of call-site arguments.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::constants::{ADDRESS_HEX_CHARS, HEX_PREFIX};

/// The expected shape of a bound parameter value.
///
/// Values stay strings at this layer; the deployment collaborator performs
/// any further coercion a specific constructor needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Any non-empty string
    Text,
    /// A base-10 unsigned integer
    Number,
    /// A `0x`-prefixed 20-byte hex address
    Address,
}

impl ValueKind {
    /// Whether the given string value has this kind's shape
    pub fn matches(&self, value: &str) -> bool {
        match self {
            ValueKind::Text => true,
            ValueKind::Number => {
                !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
            }
            ValueKind::Address => value
                .strip_prefix(HEX_PREFIX)
                .is_some_and(|digits| {
                    digits.len() == ADDRESS_HEX_CHARS && hex::decode(digits).is_ok()
                }),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => write!(f, "text"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Address => write!(f, "address"),
        }
    }
}

/// One named constructor argument position for a contract kind
#[derive(Debug, Copy, Clone)]
pub struct ParameterSlot {
    /// The parameter name, matching a key in the parsed parameter map
    pub name: &'static str,
    /// Whether the slot must resolve to a value before dispatch
    pub required: bool,
    /// The expected shape of the bound value
    pub kind: ValueKind,
}

impl ParameterSlot {
    /// A slot that must be bound before dispatch
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        ParameterSlot {
            name,
            required: true,
            kind,
        }
    }

    /// A slot the collaborator defaults when unbound
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        ParameterSlot {
            name,
            required: false,
            kind,
        }
    }
}

/// The ordered constructor signature of one contract kind
#[derive(Debug, Clone)]
pub struct ContractSchema {
    /// The identifier selecting this schema
    pub contract_kind: &'static str,
    /// Constructor argument slots, in positional order
    pub slots: Vec<ParameterSlot>,
}

/// The registry of contract kinds supported by this deployment target.
///
/// Built once at startup and read-only thereafter; the supported set differs
/// across deployment targets but is fixed within one process run.
pub struct ContractRegistry {
    /// Schemas keyed by contract kind
    schemas: HashMap<&'static str, ContractSchema>,
}

impl ContractRegistry {
    /// Build the registry for the current deployment target
    pub fn new() -> Self {
        Self::from_schemas(vec![
            ContractSchema {
                contract_kind: "token",
                slots: vec![
                    ParameterSlot::required("name", ValueKind::Text),
                    ParameterSlot::required("symbol", ValueKind::Text),
                    ParameterSlot::required("decimals", ValueKind::Number),
                ],
            },
            ContractSchema {
                contract_kind: "bridge",
                slots: vec![
                    ParameterSlot::required("muonAddress", ValueKind::Address),
                    ParameterSlot::optional("minReqSigs", ValueKind::Number),
                    ParameterSlot::optional("fee", ValueKind::Number),
                ],
            },
            ContractSchema {
                contract_kind: "presale",
                slots: vec![ParameterSlot::required("muonAddress", ValueKind::Address)],
            },
        ])
    }

    /// Build a registry from an explicit schema list
    pub fn from_schemas(schemas: Vec<ContractSchema>) -> Self {
        ContractRegistry {
            schemas: schemas
                .into_iter()
                .map(|schema| (schema.contract_kind, schema))
                .collect(),
        }
    }

    /// Look up the schema for a contract kind.
    ///
    /// `None` is a legitimate "no action" outcome, not an error.
    pub fn lookup(&self, kind: &str) -> Option<&ContractSchema> {
        self.schemas.get(kind)
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self::new()
    }
}
