// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Trivial processor implementations for tests and examples.
//!
//! A passthrough forwards every batch to the next consumer unchanged, or
//! drops it when constructed as a terminal stage. Useful as the body of a
//! constructor in factory tests and doc examples.

use crate::consumer::{
    LogsConsumer, LogsConsumerBox, MetricsConsumer, MetricsConsumerBox, TracesConsumer,
    TracesConsumerBox,
};
use crate::error::Error;
use crate::processor::{Component, LogsProcessorBox, MetricsProcessorBox, TracesProcessorBox};
use async_trait::async_trait;

/// Forwards batches to `next` unchanged; drops them when `next` is absent.
pub struct Passthrough<C> {
    next: Option<C>,
}

impl<C> Component for Passthrough<C> {}

#[async_trait(?Send)]
impl<P: 'static> TracesConsumer<P> for Passthrough<TracesConsumerBox<P>> {
    async fn consume_traces(&mut self, traces: P) -> Result<(), Error> {
        match self.next.as_mut() {
            Some(next) => next.consume_traces(traces).await,
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<P: 'static> MetricsConsumer<P> for Passthrough<MetricsConsumerBox<P>> {
    async fn consume_metrics(&mut self, metrics: P) -> Result<(), Error> {
        match self.next.as_mut() {
            Some(next) => next.consume_metrics(metrics).await,
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<P: 'static> LogsConsumer<P> for Passthrough<LogsConsumerBox<P>> {
    async fn consume_logs(&mut self, logs: P) -> Result<(), Error> {
        match self.next.as_mut() {
            Some(next) => next.consume_logs(logs).await,
            None => Ok(()),
        }
    }
}

/// Boxes a traces passthrough around the given next consumer.
#[must_use]
pub fn traces_passthrough<P: 'static>(next: Option<TracesConsumerBox<P>>) -> TracesProcessorBox<P> {
    Box::new(Passthrough { next })
}

/// Boxes a metrics passthrough around the given next consumer.
#[must_use]
pub fn metrics_passthrough<P: 'static>(
    next: Option<MetricsConsumerBox<P>>,
) -> MetricsProcessorBox<P> {
    Box::new(Passthrough { next })
}

/// Boxes a logs passthrough around the given next consumer.
#[must_use]
pub fn logs_passthrough<P: 'static>(next: Option<LogsConsumerBox<P>>) -> LogsProcessorBox<P> {
    Box::new(Passthrough { next })
}
