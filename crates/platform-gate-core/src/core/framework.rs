// platform-gate-core/src/core/framework.rs
// ============================================================================
// Module: Runtime Framework Model
// Description: Managed runtime family and partial-precision version matching.
// Purpose: Decide whether the current runtime supports a requested target runtime.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Runtime frameworks pair a family tag with a dotted numeric version of up
//! to four components. Targets may specify fewer components than the current
//! runtime reports; omitted components widen the match, so a target of `4`
//! accepts any 4.x-or-later runtime while `4.5` pins the minor bound as well.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Runtime Kind
// ============================================================================

/// Managed runtime family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeKind {
    /// Standard CLR.
    Net,
    /// Compact framework CLR.
    NetCf,
    /// Shared-source CLI (Rotor).
    Sscli,
    /// Mono runtime.
    Mono,
    /// Silverlight runtime.
    Silverlight,
    /// Mobile Mono variant.
    MonoTouch,
    /// Unrecognized runtime; never matches a requested family.
    #[default]
    Unknown,
}

// ============================================================================
// SECTION: Version Parse Errors
// ============================================================================

/// Errors produced while parsing a dotted framework version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    /// The version specification was empty.
    #[error("empty version specification")]
    Empty,
    /// A version component was not a base-10 number.
    #[error("version component `{component}` is not numeric")]
    NotNumeric {
        /// The offending component text.
        component: String,
    },
    /// The version carried more than four components.
    #[error("version `{version}` has more than four components")]
    TooManyComponents {
        /// The full version text.
        version: String,
    },
}

// ============================================================================
// SECTION: Framework Version
// ============================================================================

/// Dotted numeric framework version with one to four components.
///
/// The empty component list is the "unspecified" sentinel meaning any
/// version of the family is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FrameworkVersion(Vec<u32>);

impl FrameworkVersion {
    /// Sentinel accepting any version of a runtime family.
    pub const UNSPECIFIED: Self = Self(Vec::new());

    /// Creates a version from explicit components.
    #[must_use]
    pub fn from_parts(parts: &[u32]) -> Self {
        Self(parts.to_vec())
    }

    /// True when no components were specified.
    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the specified components.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// Returns the component at `index`, or zero when unreported.
    fn component_or_zero(&self, index: usize) -> u32 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Decides whether this version satisfies a requested target version.
    ///
    /// Comparison is greater-than-or-equal over exactly the components the
    /// target specifies: an earlier component that differs decides the match
    /// without consulting later components, and components this version does
    /// not report compare as zero. An unspecified target matches everything.
    #[must_use]
    pub fn satisfies(&self, target: &Self) -> bool {
        for (index, requirement) in target.0.iter().enumerate() {
            match self.component_or_zero(index).cmp(requirement) {
                Ordering::Greater => return true,
                Ordering::Less => return false,
                Ordering::Equal => {}
            }
        }
        true
    }
}

impl FromStr for FrameworkVersion {
    type Err = VersionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut components = Vec::new();
        for component in value.split('.') {
            let parsed =
                component.parse::<u32>().map_err(|_| VersionParseError::NotNumeric {
                    component: component.to_string(),
                })?;
            components.push(parsed);
        }

        if components.len() > 4 {
            return Err(VersionParseError::TooManyComponents {
                version: value.to_string(),
            });
        }

        Ok(Self(components))
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Runtime Framework
// ============================================================================

/// Managed runtime framework as a family tag plus version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RuntimeFramework {
    /// Runtime family tag.
    pub kind: RuntimeKind,
    /// Reported or requested version.
    pub version: FrameworkVersion,
}

impl RuntimeFramework {
    /// Creates a runtime framework from its parts.
    #[must_use]
    pub const fn new(kind: RuntimeKind, version: FrameworkVersion) -> Self {
        Self {
            kind,
            version,
        }
    }

    /// Decides whether this runtime supports the requested target.
    ///
    /// Families must be equal and the current version must satisfy the
    /// target's partial-precision version bound.
    #[must_use]
    pub fn supports(&self, target: &Self) -> bool {
        self.kind == target.kind && self.version.satisfies(&target.version)
    }
}
