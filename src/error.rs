// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared across the crate.

use crate::kind::ProcessorType;
use crate::signal::SignalType;

/// Errors surfaced by factories and by the constructors they invoke.
///
/// Creation methods return errors to the immediate caller and never log or
/// wrap a constructor's own error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The factory has no constructor registered for the requested signal
    /// kind. Deterministic and not retryable; the pipeline asked this
    /// processor type for a signal it does not implement.
    #[error("telemetry signal `{signal}` is not supported by processor `{processor_type}`")]
    UnsupportedSignal {
        /// Type token of the factory that rejected the request.
        processor_type: ProcessorType,
        /// Signal kind that was requested.
        signal: SignalType,
    },

    /// A processor type token failed validation.
    #[error("invalid processor type `{kind}`: {details}")]
    InvalidProcessorType {
        /// The rejected token.
        kind: String,
        /// What was wrong with it.
        details: String,
    },

    /// A user-supplied configuration value could not be interpreted.
    #[error("invalid user config: {error}")]
    InvalidUserConfig {
        /// Human-readable description of the problem.
        error: String,
    },

    /// A constructor rejected its arguments for a non-config reason.
    #[error("processor creation failed: {error}")]
    ProcessorCreation {
        /// Human-readable description of the failure.
        error: String,
    },
}

impl Error {
    /// Returns whether this error reports a signal kind the processor type
    /// does not implement.
    #[must_use]
    pub const fn is_unsupported_signal(&self) -> bool {
        matches!(self, Self::UnsupportedSignal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_signal_names_both_parties() {
        let err = Error::UnsupportedSignal {
            processor_type: "batch".into(),
            signal: SignalType::Metrics,
        };
        assert!(err.is_unsupported_signal());
        assert_eq!(
            err.to_string(),
            "telemetry signal `metrics` is not supported by processor `batch`"
        );
    }
}
