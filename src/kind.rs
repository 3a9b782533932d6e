// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Validated processor type token.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Immutable token naming a processor kind, e.g. `batch` or `attributes`.
///
/// Tokens are lowercase and restricted to `[a-z0-9._-]`. Uniqueness across a
/// registry is enforced by whichever registry holds the factories, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProcessorType(Cow<'static, str>);

impl ProcessorType {
    /// Parses and validates a processor type token.
    pub fn new(token: &str) -> Result<Self, Error> {
        let token = token.trim();
        validate_token(token)?;
        Ok(Self(Cow::Owned(token.to_string())))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProcessorType {
    fn default() -> Self {
        Self(Cow::Borrowed("unknown"))
    }
}

impl std::fmt::Display for ProcessorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ProcessorType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for ProcessorType {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<ProcessorType> for String {
    fn from(value: ProcessorType) -> Self {
        value.0.into_owned()
    }
}

impl TryFrom<String> for ProcessorType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.as_str())
    }
}

impl From<&'static str> for ProcessorType {
    fn from(value: &'static str) -> Self {
        Self::new(value).expect("invalid static processor type literal")
    }
}

fn validate_token(token: &str) -> Result<(), Error> {
    if token.is_empty() {
        return Err(invalid(token, "token must be non-empty"));
    }
    if !token
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
    {
        return Err(invalid(token, "token must match [a-z0-9._-]"));
    }
    Ok(())
}

fn invalid(token: &str, details: &str) -> Error {
    Error::InvalidProcessorType {
        kind: token.to_string(),
        details: details.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_patterns() {
        assert_eq!(ProcessorType::new("batch").unwrap().as_str(), "batch");
        assert!(ProcessorType::new("attributes").is_ok());
        assert!(ProcessorType::new("memory_limiter").is_ok());

        // Hyphen and dot allowed
        assert!(ProcessorType::new("tail-sampling").is_ok());
        assert!(ProcessorType::new("debug.log").is_ok());

        // Surrounding whitespace is trimmed away
        assert_eq!(ProcessorType::new("  batch ").unwrap().as_str(), "batch");
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert!(ProcessorType::new("").is_err());
        assert!(ProcessorType::new("   ").is_err());

        // Uppercase rejected
        assert!(ProcessorType::new("Batch").is_err());

        // Separators and inner whitespace rejected
        assert!(ProcessorType::new("batch processor").is_err());
        assert!(ProcessorType::new("batch/processor").is_err());
        assert!(ProcessorType::new("batch:processor").is_err());
    }

    #[test]
    fn static_literal_conversion() {
        let kind: ProcessorType = "sample".into();
        assert_eq!(kind.as_str(), "sample");
        assert_eq!(kind.to_string(), "sample");
    }

    #[test]
    fn serde_roundtrip_revalidates() {
        let kind = ProcessorType::new("batch").unwrap();
        let encoded = serde_json::to_string(&kind).unwrap();
        assert_eq!(encoded, "\"batch\"");
        let decoded: ProcessorType = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, kind);

        let bad: Result<ProcessorType, _> = serde_json::from_str("\"Not Valid\"");
        assert!(bad.is_err());
    }

    #[test]
    fn defaults_to_unknown() {
        assert_eq!(ProcessorType::default().as_str(), "unknown");
    }
}
