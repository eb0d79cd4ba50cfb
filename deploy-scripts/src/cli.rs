//! Parsing of raw invocation tokens into a parameter map

use std::collections::HashMap;

use crate::constants::PARAM_PREFIX;

/// The value bound to a parameter name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// The parameter appeared as a bare `--key` with no value
    Present,
    /// The parameter appeared as `--key=value`
    Value(String),
}

impl ParamValue {
    /// Returns the bound string value, or `None` for the presence sentinel
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Present => None,
            ParamValue::Value(value) => Some(value),
        }
    }
}

/// The parameters parsed from one invocation, keyed by name with the
/// `--` prefix stripped. Built once per invocation and not mutated after.
pub type ParameterMap = HashMap<String, ParamValue>;

/// Parse raw invocation tokens into a [`ParameterMap`].
///
/// Tokens not starting with `--` are silently dropped. Each retained token is
/// split on the first `=`: `--key=value` binds `key -> value`, and a bare
/// `--key` binds the presence sentinel. Later duplicates overwrite earlier
/// bindings. Malformed input never errors, it degrades to a partial or empty
/// map.
pub fn parse_params(tokens: impl IntoIterator<Item = String>) -> ParameterMap {
    let mut params = ParameterMap::new();
    for token in tokens {
        let Some(param) = token.strip_prefix(PARAM_PREFIX) else {
            continue;
        };

        match param.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), ParamValue::Value(value.to_string()))
            }
            None => params.insert(param.to_string(), ParamValue::Present),
        };
    }

    params
}

#[cfg(test)]
mod tests {
    use super::{parse_params, ParamValue};

    /// Convenience constructor for owned token lists
    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_non_prefixed_tokens_dropped() {
        let params = parse_params(tokens(&["positional", "-s", "network", "--kept=1"]));
        assert_eq!(params.len(), 1);
        assert_eq!(params["kept"], ParamValue::Value("1".to_string()));
    }

    #[test]
    fn test_key_value_split_on_first_equals() {
        let params = parse_params(tokens(&["--name=Foo", "--data=a=b=c", "--empty="]));
        assert_eq!(params["name"], ParamValue::Value("Foo".to_string()));
        assert_eq!(params["data"], ParamValue::Value("a=b=c".to_string()));
        assert_eq!(params["empty"], ParamValue::Value(String::new()));
    }

    #[test]
    fn test_bare_flag_binds_presence_sentinel() {
        let params = parse_params(tokens(&["--verbose"]));
        assert_eq!(params["verbose"], ParamValue::Present);
        assert_eq!(params["verbose"].as_str(), None);
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let params = parse_params(tokens(&["--fee=0", "--fee=100", "--fee"]));
        assert_eq!(params["fee"], ParamValue::Present);
    }

    #[test]
    fn test_values_remain_uncoerced_strings() {
        let params = parse_params(tokens(&["--decimals=18"]));
        assert_eq!(params["decimals"].as_str(), Some("18"));
    }
}
