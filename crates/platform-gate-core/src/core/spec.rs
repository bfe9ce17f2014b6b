// platform-gate-core/src/core/spec.rs
// ============================================================================
// Module: Platform Specification
// Description: Declarative include/exclude platform requirement carrier.
// Purpose: Define the serializable specification attached to a test or fixture.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A platform specification carries the two independent comma-delimited token
//! lists attached to a test: the platforms it may run on and the platforms it
//! must be skipped on. Tokens are validated against the vocabulary at load
//! time by the resolver; the carrier itself stays inert.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Platform Specification
// ============================================================================

/// Declarative platform requirement attached to a test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlatformSpec {
    /// Comma-delimited platforms the test may run on; absent means no
    /// include restriction.
    pub include: Option<String>,
    /// Comma-delimited platforms the test must be skipped on; absent means
    /// no exclusion.
    pub exclude: Option<String>,
}

impl PlatformSpec {
    /// Creates a specification from optional include and exclude lists.
    #[must_use]
    pub const fn new(include: Option<String>, exclude: Option<String>) -> Self {
        Self {
            include,
            exclude,
        }
    }

    /// Creates an include-only specification.
    #[must_use]
    pub fn including(include: impl Into<String>) -> Self {
        Self {
            include: Some(include.into()),
            exclude: None,
        }
    }

    /// Creates an exclude-only specification.
    #[must_use]
    pub fn excluding(exclude: impl Into<String>) -> Self {
        Self {
            include: None,
            exclude: Some(exclude.into()),
        }
    }
}
