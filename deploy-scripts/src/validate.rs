//! Validation of parsed parameters against a contract schema

use crate::{cli::ParameterMap, errors::ScriptError, registry::ContractSchema};

/// Check that every required slot of the schema resolves to a usable value.
///
/// Slots are checked in declared order and validation fails fast on the first
/// offending slot, so error messages are deterministic and stable under the
/// schema's ordering. A required slot fails as missing when it is unbound,
/// bound to the bare-flag sentinel, or bound to the empty string; a bound
/// value of the wrong shape fails as invalid. Optional slots may be absent;
/// a bound optional value is still shape-checked.
pub fn validate(schema: &ContractSchema, params: &ParameterMap) -> Result<(), ScriptError> {
    for slot in &schema.slots {
        let value = params.get(slot.name).and_then(|v| v.as_str());

        if slot.required {
            match value {
                None | Some("") => {
                    return Err(ScriptError::MissingParameter(slot.name.to_string()))
                }
                Some(value) if !slot.kind.matches(value) => {
                    return Err(ScriptError::InvalidParameter {
                        name: slot.name.to_string(),
                        expected: slot.kind,
                    })
                }
                Some(_) => {}
            }
        } else if let Some(value) = value {
            if !value.is_empty() && !slot.kind.matches(value) {
                return Err(ScriptError::InvalidParameter {
                    name: slot.name.to_string(),
                    expected: slot.kind,
                });
            }
        }
    }

    Ok(())
}
