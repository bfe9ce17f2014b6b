// platform-gate-core/src/core/environment.rs
// ============================================================================
// Module: Environment Snapshot
// Description: Immutable snapshot of the host OS, runtime, and bitness.
// Purpose: Provide the single source of truth a token resolution runs against.
// Dependencies: crate::core::{framework, os}, serde
// ============================================================================

//! ## Overview
//! An environment is captured once, either from a live probe or from
//! explicitly supplied parts, and is immutable thereafter. Evaluation never
//! re-detects the host mid-run, which keeps repeated verdicts identical.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::framework::RuntimeFramework;
use crate::core::os::OsPlatform;

// ============================================================================
// SECTION: Bitness
// ============================================================================

/// Pointer width of a process or operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bitness {
    /// 32-bit, four-byte pointers.
    Bits32,
    /// 64-bit, eight-byte pointers.
    Bits64,
}

impl Bitness {
    /// Returns the pointer size in bytes.
    #[must_use]
    pub const fn pointer_bytes(self) -> usize {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }

    /// Bitness of the currently running process.
    #[must_use]
    pub const fn of_current_process() -> Self {
        if size_of::<usize>() == 8 {
            Self::Bits64
        } else {
            Self::Bits32
        }
    }
}

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Immutable snapshot of the execution environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Operating system classification.
    os: OsPlatform,
    /// Managed runtime identity.
    runtime: RuntimeFramework,
    /// Pointer width of the running process.
    process_bitness: Bitness,
    /// Pointer width of the operating system, when resolvable.
    os_bitness: Option<Bitness>,
}

impl Environment {
    /// Creates a snapshot from explicit parts.
    #[must_use]
    pub const fn new(
        os: OsPlatform,
        runtime: RuntimeFramework,
        process_bitness: Bitness,
        os_bitness: Option<Bitness>,
    ) -> Self {
        Self {
            os,
            runtime,
            process_bitness,
            os_bitness,
        }
    }

    /// Returns the operating system classification.
    #[must_use]
    pub const fn os(&self) -> &OsPlatform {
        &self.os
    }

    /// Returns the managed runtime identity.
    #[must_use]
    pub const fn runtime(&self) -> &RuntimeFramework {
        &self.runtime
    }

    /// Returns the process pointer width.
    #[must_use]
    pub const fn process_bitness(&self) -> Bitness {
        self.process_bitness
    }

    /// Returns the OS pointer width, when the probe could resolve it.
    #[must_use]
    pub const fn os_bitness(&self) -> Option<Bitness> {
        self.os_bitness
    }
}
