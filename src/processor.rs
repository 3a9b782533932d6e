// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Component lifecycle and per-signal processor traits.
//!
//! A processor for some signal kind is simply a [`Component`] that also
//! consumes that signal: the per-signal traits carry blanket impls, so
//! implementing the two supertraits is all a plugin has to do.

use crate::consumer::{LogsConsumer, MetricsConsumer, TracesConsumer};
use crate::error::Error;
use async_trait::async_trait;

/// Lifecycle shared by every constructed processor.
///
/// Both hooks default to no-ops; stateless processors rarely override them.
#[async_trait(?Send)]
pub trait Component {
    /// Prepares the component to receive data.
    async fn start(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Flushes in-flight state and releases resources.
    async fn shutdown(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// A pipeline stage consuming trace data.
pub trait TracesProcessor<P>: Component + TracesConsumer<P> {}

/// A pipeline stage consuming metric data.
pub trait MetricsProcessor<P>: Component + MetricsConsumer<P> {}

/// A pipeline stage consuming log data.
pub trait LogsProcessor<P>: Component + LogsConsumer<P> {}

impl<P, T> TracesProcessor<P> for T where T: Component + TracesConsumer<P> {}
impl<P, T> MetricsProcessor<P> for T where T: Component + MetricsConsumer<P> {}
impl<P, T> LogsProcessor<P> for T where T: Component + LogsConsumer<P> {}

impl<P> std::fmt::Debug for dyn TracesProcessor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TracesProcessor")
    }
}

impl<P> std::fmt::Debug for dyn MetricsProcessor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MetricsProcessor")
    }
}

impl<P> std::fmt::Debug for dyn LogsProcessor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LogsProcessor")
    }
}

/// Boxed traces processor, as returned by traces constructors.
pub type TracesProcessorBox<P> = Box<dyn TracesProcessor<P>>;

/// Boxed metrics processor, as returned by metrics constructors.
pub type MetricsProcessorBox<P> = Box<dyn MetricsProcessor<P>>;

/// Boxed logs processor, as returned by logs constructors.
pub type LogsProcessorBox<P> = Box<dyn LogsProcessor<P>>;
