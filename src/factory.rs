// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Factory value, builder and per-signal registration options.
//!
//! [`Factory::new`] assembles an immutable factory from a processor type
//! token, a default-config producer and an ordered list of
//! [`FactoryOption`]s. Each option fills exactly one signal slot; options
//! supplied later for the same signal overwrite earlier ones. Once returned,
//! a factory is never mutated again and is safe to share across threads
//! without synchronization.

use crate::config::DefaultConfigFn;
use crate::consumer::{LogsConsumerBox, MetricsConsumerBox, TracesConsumerBox};
use crate::error::Error;
use crate::kind::ProcessorType;
use crate::processor::{LogsProcessorBox, MetricsProcessorBox, TracesProcessorBox};
use crate::settings::CreateSettings;
use crate::signal::SignalType;
use crate::stability::StabilityLevel;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Constructor invoked by [`Factory::create_traces_processor`].
pub type CreateTracesFn<P> = Arc<
    dyn Fn(
            CreateSettings,
            &Value,
            Option<TracesConsumerBox<P>>,
        ) -> Result<TracesProcessorBox<P>, Error>
        + Send
        + Sync,
>;

/// Constructor invoked by [`Factory::create_metrics_processor`].
pub type CreateMetricsFn<P> = Arc<
    dyn Fn(
            CreateSettings,
            &Value,
            Option<MetricsConsumerBox<P>>,
        ) -> Result<MetricsProcessorBox<P>, Error>
        + Send
        + Sync,
>;

/// Constructor invoked by [`Factory::create_logs_processor`].
pub type CreateLogsFn<P> = Arc<
    dyn Fn(
            CreateSettings,
            &Value,
            Option<LogsConsumerBox<P>>,
        ) -> Result<LogsProcessorBox<P>, Error>
        + Send
        + Sync,
>;

/// One registered signal kind: its constructor and declared stability.
///
/// A slot is either fully absent or fully present; there is no state with a
/// constructor but no stability, or the other way around.
struct SignalSupport<F> {
    create: F,
    stability: StabilityLevel,
}

impl<F: Clone> Clone for SignalSupport<F> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            stability: self.stability,
        }
    }
}

/// Immutable per-processor-type bundle of default-config producer and
/// per-signal constructors.
///
/// Generic over the pipeline data type `P` flowing between stages. Built
/// exactly once via [`Factory::new`], then read-only: every method takes
/// `&self` and the value is `Send + Sync` regardless of `P`.
pub struct Factory<P: 'static> {
    kind: ProcessorType,
    default_config: DefaultConfigFn,
    traces: Option<SignalSupport<CreateTracesFn<P>>>,
    metrics: Option<SignalSupport<CreateMetricsFn<P>>>,
    logs: Option<SignalSupport<CreateLogsFn<P>>>,
}

impl<P: 'static> Clone for Factory<P> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            default_config: self.default_config.clone(),
            traces: self.traces.clone(),
            metrics: self.metrics.clone(),
            logs: self.logs.clone(),
        }
    }
}

impl<P: 'static> std::fmt::Debug for Factory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("kind", &self.kind)
            .field("traces_stability", &self.traces_stability())
            .field("metrics_stability", &self.metrics_stability())
            .field("logs_stability", &self.logs_stability())
            .finish()
    }
}

/// One mutation applied to a factory while it is being built.
///
/// Produced only by [`with_traces`], [`with_metrics`] and [`with_logs`];
/// applied in the order supplied to [`Factory::new`].
pub struct FactoryOption<P: 'static>(Box<dyn FnOnce(&mut Factory<P>) + Send>);

/// Registers a traces constructor with its declared stability.
pub fn with_traces<P: 'static, F>(create: F, stability: StabilityLevel) -> FactoryOption<P>
where
    F: Fn(
            CreateSettings,
            &Value,
            Option<TracesConsumerBox<P>>,
        ) -> Result<TracesProcessorBox<P>, Error>
        + Send
        + Sync
        + 'static,
{
    let create: CreateTracesFn<P> = Arc::new(create);
    FactoryOption(Box::new(move |factory| {
        factory.traces = Some(SignalSupport { create, stability });
    }))
}

/// Registers a metrics constructor with its declared stability.
pub fn with_metrics<P: 'static, F>(create: F, stability: StabilityLevel) -> FactoryOption<P>
where
    F: Fn(
            CreateSettings,
            &Value,
            Option<MetricsConsumerBox<P>>,
        ) -> Result<MetricsProcessorBox<P>, Error>
        + Send
        + Sync
        + 'static,
{
    let create: CreateMetricsFn<P> = Arc::new(create);
    FactoryOption(Box::new(move |factory| {
        factory.metrics = Some(SignalSupport { create, stability });
    }))
}

/// Registers a logs constructor with its declared stability.
pub fn with_logs<P: 'static, F>(create: F, stability: StabilityLevel) -> FactoryOption<P>
where
    F: Fn(
            CreateSettings,
            &Value,
            Option<LogsConsumerBox<P>>,
        ) -> Result<LogsProcessorBox<P>, Error>
        + Send
        + Sync
        + 'static,
{
    let create: CreateLogsFn<P> = Arc::new(create);
    FactoryOption(Box::new(move |factory| {
        factory.logs = Some(SignalSupport { create, stability });
    }))
}

impl<P: 'static> Factory<P> {
    /// Builds a factory for the given processor type.
    ///
    /// Seeds all three signal slots empty, applies `options` in order, then
    /// freezes the result. Building never fails: invalid type tokens are
    /// rejected earlier, at [`ProcessorType`] construction.
    pub fn new<D>(
        kind: impl Into<ProcessorType>,
        default_config: D,
        options: impl IntoIterator<Item = FactoryOption<P>>,
    ) -> Self
    where
        D: Fn() -> Value + Send + Sync + 'static,
    {
        let mut factory = Self {
            kind: kind.into(),
            default_config: Arc::new(default_config),
            traces: None,
            metrics: None,
            logs: None,
        };
        for option in options {
            (option.0)(&mut factory);
        }
        debug!(
            kind = %factory.kind,
            signals = ?factory.supported_signals(),
            "processor factory built"
        );
        factory
    }

    /// Returns the processor type token this factory constructs.
    #[must_use]
    pub fn kind(&self) -> &ProcessorType {
        &self.kind
    }

    /// Produces a fresh default configuration value.
    ///
    /// Each call invokes the producer anew, so callers may mutate the
    /// returned value without affecting anyone else.
    #[must_use]
    pub fn create_default_config(&self) -> Value {
        (self.default_config)()
    }

    /// Returns the signal kinds this factory has constructors for.
    #[must_use]
    pub fn supported_signals(&self) -> Vec<SignalType> {
        let mut signals = Vec::with_capacity(3);
        if self.traces.is_some() {
            signals.push(SignalType::Traces);
        }
        if self.metrics.is_some() {
            signals.push(SignalType::Metrics);
        }
        if self.logs.is_some() {
            signals.push(SignalType::Logs);
        }
        signals
    }

    /// Declared stability of the traces implementation, or `Undefined` when
    /// no traces constructor was registered.
    #[must_use]
    pub fn traces_stability(&self) -> StabilityLevel {
        self.traces
            .as_ref()
            .map_or(StabilityLevel::Undefined, |s| s.stability)
    }

    /// Declared stability of the metrics implementation, or `Undefined` when
    /// no metrics constructor was registered.
    #[must_use]
    pub fn metrics_stability(&self) -> StabilityLevel {
        self.metrics
            .as_ref()
            .map_or(StabilityLevel::Undefined, |s| s.stability)
    }

    /// Declared stability of the logs implementation, or `Undefined` when no
    /// logs constructor was registered.
    #[must_use]
    pub fn logs_stability(&self) -> StabilityLevel {
        self.logs
            .as_ref()
            .map_or(StabilityLevel::Undefined, |s| s.stability)
    }

    /// Constructs a traces processor forwarding to `next`.
    ///
    /// Fails with [`Error::UnsupportedSignal`] when no traces constructor was
    /// registered; otherwise invokes the constructor with the arguments
    /// verbatim and passes its result through unchanged. `next` is `None` for
    /// a terminal stage; whether that is acceptable is the constructor's
    /// call.
    pub fn create_traces_processor(
        &self,
        settings: CreateSettings,
        config: &Value,
        next: Option<TracesConsumerBox<P>>,
    ) -> Result<TracesProcessorBox<P>, Error> {
        match &self.traces {
            Some(support) => (support.create)(settings, config, next),
            None => Err(self.unsupported(SignalType::Traces)),
        }
    }

    /// Constructs a metrics processor forwarding to `next`.
    ///
    /// Same contract as [`Factory::create_traces_processor`], for metrics.
    pub fn create_metrics_processor(
        &self,
        settings: CreateSettings,
        config: &Value,
        next: Option<MetricsConsumerBox<P>>,
    ) -> Result<MetricsProcessorBox<P>, Error> {
        match &self.metrics {
            Some(support) => (support.create)(settings, config, next),
            None => Err(self.unsupported(SignalType::Metrics)),
        }
    }

    /// Constructs a logs processor forwarding to `next`.
    ///
    /// Same contract as [`Factory::create_traces_processor`], for logs.
    pub fn create_logs_processor(
        &self,
        settings: CreateSettings,
        config: &Value,
        next: Option<LogsConsumerBox<P>>,
    ) -> Result<LogsProcessorBox<P>, Error> {
        match &self.logs {
            Some(support) => (support.create)(settings, config, next),
            None => Err(self.unsupported(SignalType::Logs)),
        }
    }

    fn unsupported(&self, signal: SignalType) -> Error {
        Error::UnsupportedSignal {
            processor_type: self.kind.clone(),
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use serde_json::json;

    struct Span;

    #[test]
    fn empty_factory_supports_nothing() {
        let factory: Factory<Span> = Factory::new("noop", || json!({}), []);
        assert!(factory.supported_signals().is_empty());
        assert_eq!(factory.traces_stability(), StabilityLevel::Undefined);
        assert_eq!(factory.metrics_stability(), StabilityLevel::Undefined);
        assert_eq!(factory.logs_stability(), StabilityLevel::Undefined);
    }

    #[test]
    fn later_option_for_same_signal_wins() {
        let factory: Factory<Span> = Factory::new(
            "noop",
            || json!({}),
            [
                with_traces(
                    |_, _, _| {
                        Err(Error::ProcessorCreation {
                            error: "first registration must not survive".to_string(),
                        })
                    },
                    StabilityLevel::Deprecated,
                ),
                with_traces(
                    |_, _, next| Ok(testing::traces_passthrough(next)),
                    StabilityLevel::Beta,
                ),
            ],
        );

        assert_eq!(factory.traces_stability(), StabilityLevel::Beta);
        let created = factory.create_traces_processor(CreateSettings::default(), &json!({}), None);
        assert!(created.is_ok());
    }

    #[test]
    fn debug_output_reports_stabilities() {
        let factory: Factory<Span> = Factory::new(
            "noop",
            || json!({}),
            [with_logs(
                |_, _, next| Ok(testing::logs_passthrough(next)),
                StabilityLevel::Alpha,
            )],
        );
        let rendered = format!("{factory:?}");
        assert!(rendered.contains("noop"));
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains("Undefined"));
    }

    #[test]
    fn factory_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Factory<Span>>();
    }
}
