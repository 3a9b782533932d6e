// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Stability classification for per-signal processor implementations.

use serde::{Deserialize, Serialize};

/// Declared maturity of one signal-kind implementation of a processor type.
///
/// A factory reports [`StabilityLevel::Undefined`] for every signal kind it
/// never registered a constructor for; registered kinds carry whatever level
/// the plugin author declared at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StabilityLevel {
    /// No stability was declared for this signal kind.
    #[default]
    Undefined,
    /// The implementation exists but nobody maintains it.
    Unmaintained,
    /// Scheduled for removal; avoid new usage.
    Deprecated,
    /// Early implementation, breaking changes expected.
    Alpha,
    /// Stabilizing, breaking changes still possible but rare.
    Beta,
    /// Covered by compatibility guarantees.
    Stable,
}

impl StabilityLevel {
    /// Returns whether a stability was explicitly declared.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Returns the level name as used in documentation and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Unmaintained => "Unmaintained",
            Self::Deprecated => "Deprecated",
            Self::Alpha => "Alpha",
            Self::Beta => "Beta",
            Self::Stable => "Stable",
        }
    }
}

impl std::fmt::Display for StabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
