// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Context value passed to every constructor invocation.

use crate::kind::ProcessorType;

/// Identity of one processor instance inside a pipeline.
///
/// Two instances of the same processor type are told apart by `name`; a
/// single unnamed instance leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProcessorId {
    /// Type token of the processor.
    pub kind: ProcessorType,
    /// Optional instance name distinguishing multiple instances of one type.
    pub name: String,
}

impl ProcessorId {
    /// Creates an identity for a named instance of the given processor type.
    #[must_use]
    pub fn new(kind: ProcessorType, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ProcessorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}/{}", self.kind, self.name)
        }
    }
}

/// Build metadata of the host binary, surfaced to constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    /// Executable name of the host.
    pub command: String,
    /// Human-readable description of the host.
    pub description: String,
    /// Version of the host.
    pub version: String,
}

/// Settings handed to a constructor each time a processor is created.
///
/// Opaque to the factory itself: it forwards the value verbatim to whichever
/// constructor is registered for the requested signal kind.
#[derive(Debug, Clone, Default)]
pub struct CreateSettings {
    /// Identity of the processor instance being created.
    pub id: ProcessorId,
    /// Build metadata of the host binary.
    pub build_info: BuildInfo,
}
