//! Encoder configuration.

use serde::{Deserialize, Serialize};

/// How parameter lists of header-carrying gates are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterArity {
    /// Reject any list outside the accepted shapes (`ry`/`cp`: 1 value,
    /// `u`/`cu`: 3 or 4 values).
    #[default]
    Strict,
    /// Legacy pass-through: take the first three values and pad missing
    /// slots with zero.
    Lenient,
}

/// Options for [`Encoder`](crate::Encoder).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Parameter list validation policy.
    pub parameter_arity: ParameterArity,
}

impl EncoderConfig {
    /// Configuration matching the legacy translator output for malformed
    /// parameter lists.
    pub fn lenient() -> Self {
        Self {
            parameter_arity: ParameterArity::Lenient,
        }
    }

    /// Set the parameter validation policy.
    #[must_use]
    pub fn with_parameter_arity(mut self, parameter_arity: ParameterArity) -> Self {
        self.parameter_arity = parameter_arity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(EncoderConfig::default().parameter_arity, ParameterArity::Strict);
        assert_eq!(EncoderConfig::lenient().parameter_arity, ParameterArity::Lenient);
    }

    #[test]
    fn test_config_from_json() {
        let config: EncoderConfig =
            serde_json::from_str(r#"{ "parameter_arity": "lenient" }"#).unwrap();
        assert_eq!(config, EncoderConfig::lenient());

        let config: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EncoderConfig::default());
    }
}
