// platform-gate-core/src/runtime/evaluator.rs
// ============================================================================
// Module: Platform Specification Evaluator
// Description: Include/exclude specification evaluation with failure reasons.
// Purpose: Decide whether the current environment supports a platform requirement.
// Dependencies: crate::{core, interfaces, runtime::{probe, resolver}}
// ============================================================================

//! ## Overview
//! The evaluator composes per-token verdicts into the include/exclude rule:
//! a specification is satisfied when any one of its tokens resolves true, and
//! the final verdict is include-satisfied AND NOT exclude-satisfied. Token
//! errors never escape; they convert into a negative verdict whose reason is
//! the error text, so a malformed specification skips a test instead of
//! aborting the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Environment;
use crate::core::PlatformSpec;
use crate::interfaces::EnvironmentProbe;
use crate::runtime::probe::LiveProbe;
use crate::runtime::resolver;
use crate::runtime::resolver::TokenError;

// ============================================================================
// SECTION: Platform Evaluator
// ============================================================================

/// Evaluates platform specifications against one environment snapshot.
///
/// The snapshot is captured at construction and never refreshed, so repeated
/// evaluations of identical arguments return identical verdicts. The only
/// mutable state is the last-failure reason, which makes a single instance
/// unsuitable for unsynchronized sharing across threads.
#[derive(Debug, Clone)]
pub struct PlatformEvaluator {
    /// Environment snapshot all tokens resolve against.
    environment: Environment,
    /// Reason for the most recent negative verdict; contents are
    /// unspecified before the first failing evaluation.
    reason: String,
}

impl PlatformEvaluator {
    /// Creates an evaluator over the live environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(LiveProbe.snapshot())
    }

    /// Creates an evaluator over an explicitly supplied environment.
    #[must_use]
    pub const fn with_environment(environment: Environment) -> Self {
        Self {
            environment,
            reason: String::new(),
        }
    }

    /// Returns the environment snapshot evaluations run against.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the reason for the most recent negative verdict.
    ///
    /// Contents are unspecified until an evaluation has returned false.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Evaluates an include/exclude specification pair.
    ///
    /// An absent include list places no restriction; an absent exclude list
    /// never triggers exclusion. The include list is evaluated first, and a
    /// failing include short-circuits the exclude check. Token errors fail
    /// closed with the error text as the reason.
    pub fn is_supported(&mut self, include: Option<&str>, exclude: Option<&str>) -> bool {
        match self.check_pair(include, exclude) {
            Ok(verdict) => verdict,
            Err(error) => {
                self.reason = error.to_string();
                false
            }
        }
    }

    /// Evaluates a platform specification carrier.
    pub fn is_spec_supported(&mut self, spec: &PlatformSpec) -> bool {
        self.is_supported(spec.include.as_deref(), spec.exclude.as_deref())
    }

    /// Evaluates a single specification (comma-delimited, OR semantics).
    ///
    /// On a negative verdict the reason names the specification; token
    /// errors fail closed with the error text as the reason.
    pub fn is_platform_supported(&mut self, specification: &str) -> bool {
        match self.check_specification(specification) {
            Ok(true) => true,
            Ok(false) => {
                self.reason = format!("Only supported on {specification}");
                false
            }
            Err(error) => {
                self.reason = error.to_string();
                false
            }
        }
    }

    /// Evaluates a sequence of raw specifications, true when any one is
    /// satisfied.
    pub fn is_any_supported(&mut self, specifications: &[impl AsRef<str>]) -> bool {
        for specification in specifications {
            if self.is_platform_supported(specification.as_ref()) {
                return true;
            }
        }
        false
    }

    /// Applies the include-AND-NOT-exclude rule, propagating token errors.
    fn check_pair(
        &mut self,
        include: Option<&str>,
        exclude: Option<&str>,
    ) -> Result<bool, TokenError> {
        if let Some(include) = include
            && !self.check_specification(include)?
        {
            self.reason = format!("Only supported on {include}");
            return Ok(false);
        }

        if let Some(exclude) = exclude
            && self.check_specification(exclude)?
        {
            self.reason = format!("Not supported on {exclude}");
            return Ok(false);
        }

        Ok(true)
    }

    /// True when at least one token of the specification resolves true.
    fn check_specification(&self, specification: &str) -> Result<bool, TokenError> {
        for token in specification.split(',') {
            if resolver::resolve_token(token, &self.environment)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for PlatformEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
