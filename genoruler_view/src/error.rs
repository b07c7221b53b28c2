// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The requested chromosome is not in the engine's catalog.
///
/// The viewport is left at its previous state when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownChromosome {
    /// The chromosome name that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnknownChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown chromosome: {}", self.name)
    }
}

impl core::error::Error for UnknownChromosome {}
