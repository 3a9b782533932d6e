// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-signal consumer traits a processor forwards its output to.
//!
//! All three traits are generic over the pipeline data type `P` and follow
//! the thread-per-core model: futures they return are not required to be
//! `Send`.

use crate::error::Error;
use async_trait::async_trait;

/// Receives batches of trace data from an upstream pipeline stage.
#[async_trait(?Send)]
pub trait TracesConsumer<P> {
    /// Consumes one batch of trace data.
    async fn consume_traces(&mut self, traces: P) -> Result<(), Error>;
}

/// Receives batches of metric data from an upstream pipeline stage.
#[async_trait(?Send)]
pub trait MetricsConsumer<P> {
    /// Consumes one batch of metric data.
    async fn consume_metrics(&mut self, metrics: P) -> Result<(), Error>;
}

/// Receives batches of log data from an upstream pipeline stage.
#[async_trait(?Send)]
pub trait LogsConsumer<P> {
    /// Consumes one batch of log data.
    async fn consume_logs(&mut self, logs: P) -> Result<(), Error>;
}

/// Boxed trace consumer, as handed to traces constructors.
pub type TracesConsumerBox<P> = Box<dyn TracesConsumer<P>>;

/// Boxed metric consumer, as handed to metrics constructors.
pub type MetricsConsumerBox<P> = Box<dyn MetricsConsumer<P>>;

/// Boxed log consumer, as handed to logs constructors.
pub type LogsConsumerBox<P> = Box<dyn LogsConsumer<P>>;
