// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Default-configuration production and typed config parsing.
//!
//! User configuration travels through the factory as an untyped
//! [`serde_json::Value`]; plugins declare their typed config with serde
//! derives and deserialize it inside their constructors via [`parse_config`].

use crate::error::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Zero-argument producer of a fresh default configuration value.
///
/// Invoked once per [`Factory::create_default_config`] call and never cached,
/// so every caller receives an independent value it may freely mutate.
///
/// [`Factory::create_default_config`]: crate::factory::Factory::create_default_config
pub type DefaultConfigFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Deserializes a user-supplied configuration value into a typed config.
///
/// Maps deserialization failures to [`Error::InvalidUserConfig`] so
/// constructors can propagate them with `?`.
pub fn parse_config<T: DeserializeOwned>(config: &Value) -> Result<T, Error> {
    serde_json::from_value(config.clone()).map_err(|e| Error::InvalidUserConfig {
        error: format!("failed to parse processor configuration: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct SampleConfig {
        #[serde(default)]
        send_batch_size: u32,
        timeout: String,
    }

    #[test]
    fn parses_typed_config() {
        let cfg: SampleConfig =
            parse_config(&json!({"send_batch_size": 512, "timeout": "200ms"})).unwrap();
        assert_eq!(
            cfg,
            SampleConfig {
                send_batch_size: 512,
                timeout: "200ms".to_string(),
            }
        );
    }

    #[test]
    fn applies_serde_defaults() {
        let cfg: SampleConfig = parse_config(&json!({"timeout": "1s"})).unwrap();
        assert_eq!(cfg.send_batch_size, 0);
    }

    #[test]
    fn reports_shape_mismatch_as_invalid_user_config() {
        let err = parse_config::<SampleConfig>(&json!({"timeout": 7})).unwrap_err();
        assert!(matches!(err, Error::InvalidUserConfig { .. }));
        assert!(err.to_string().contains("invalid user config"));
    }
}
