// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-signal processor factory for telemetry pipelines.
//!
//! A processor plugin exposes itself to a pipeline engine through a single
//! immutable [`Factory`] value: a validated [`ProcessorType`] token, a
//! producer of fresh default configurations, and up to three per-signal
//! constructors (traces, metrics, logs), each tagged with a
//! [`StabilityLevel`]. Plugins register the signal kinds they implement with
//! the functional options [`with_traces`], [`with_metrics`] and
//! [`with_logs`]; requesting any other signal kind fails with
//! [`Error::UnsupportedSignal`].
//!
//! The crate is generic over the pipeline data type `P`, so the same factory
//! machinery serves engines with different in-flight representations.
//!
//! ```
//! use processor_factory::{with_traces, Factory, StabilityLevel};
//! use serde_json::json;
//!
//! struct Span;
//!
//! let factory: Factory<Span> = Factory::new(
//!     "noop",
//!     || json!({}),
//!     [with_traces(
//!         |_settings, _config, next| Ok(processor_factory::testing::traces_passthrough(next)),
//!         StabilityLevel::Alpha,
//!     )],
//! );
//! assert_eq!(factory.traces_stability(), StabilityLevel::Alpha);
//! ```

#![deny(missing_docs)]

/// Default-configuration production and typed config parsing.
pub mod config;
/// Per-signal consumer traits a processor forwards its output to.
pub mod consumer;
/// Error type shared across the crate.
pub mod error;
/// Factory value, builder and per-signal registration options.
pub mod factory;
/// Validated processor type token.
pub mod kind;
/// Component lifecycle and per-signal processor traits.
pub mod processor;
/// Context value passed to every constructor invocation.
pub mod settings;
/// Telemetry signal kinds.
pub mod signal;
/// Stability classification of per-signal implementations.
pub mod stability;
/// Trivial processor implementations for tests and examples.
pub mod testing;

pub use config::{parse_config, DefaultConfigFn};
pub use consumer::{
    LogsConsumer, LogsConsumerBox, MetricsConsumer, MetricsConsumerBox, TracesConsumer,
    TracesConsumerBox,
};
pub use error::Error;
pub use factory::{
    with_logs, with_metrics, with_traces, CreateLogsFn, CreateMetricsFn, CreateTracesFn, Factory,
    FactoryOption,
};
pub use kind::ProcessorType;
pub use processor::{
    Component, LogsProcessor, LogsProcessorBox, MetricsProcessor, MetricsProcessorBox,
    TracesProcessor, TracesProcessorBox,
};
pub use settings::{BuildInfo, CreateSettings, ProcessorId};
pub use signal::SignalType;
pub use stability::StabilityLevel;
