// platform-gate-core/src/runtime/probe.rs
// ============================================================================
// Module: Environment Probes
// Description: Live host detection and fixed-environment probe implementations.
// Purpose: Supply environment snapshots to the evaluator.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The live probe reads what the running process can observe: the OS family
//! from the compile-time target and the pointer width of the process. Windows
//! generation, product type, and managed-runtime identity are not observable
//! from here; they degrade to unknown tags, so the corresponding tokens
//! resolve false rather than erroring. Deterministic evaluation injects a
//! fixed probe instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Bitness;
use crate::core::Environment;
use crate::core::FrameworkVersion;
use crate::core::OsKind;
use crate::core::OsPlatform;
use crate::core::OsVersion;
use crate::core::ProductType;
use crate::core::RuntimeFramework;
use crate::core::RuntimeKind;
use crate::interfaces::EnvironmentProbe;

// ============================================================================
// SECTION: Live Probe
// ============================================================================

/// Probe reading the environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveProbe;

impl EnvironmentProbe for LiveProbe {
    fn os_platform(&self) -> OsPlatform {
        let kind = match std::env::consts::OS {
            "windows" => OsKind::Win32Nt,
            "macos" => OsKind::MacOsX,
            "linux" | "android" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" | "solaris"
            | "illumos" => OsKind::Unix,
            _ => OsKind::Unknown,
        };
        OsPlatform::new(kind, OsVersion::UNKNOWN, ProductType::Unknown)
    }

    fn process_bitness(&self) -> Bitness {
        Bitness::of_current_process()
    }

    fn os_bitness(&self) -> Option<Bitness> {
        // A 64-bit process implies a 64-bit OS; a 32-bit process is
        // inconclusive.
        match Bitness::of_current_process() {
            Bitness::Bits64 => Some(Bitness::Bits64),
            Bitness::Bits32 => None,
        }
    }

    fn runtime_framework(&self) -> RuntimeFramework {
        RuntimeFramework::new(RuntimeKind::Unknown, FrameworkVersion::UNSPECIFIED)
    }
}

// ============================================================================
// SECTION: Fixed Probe
// ============================================================================

/// Probe wrapping an explicitly supplied environment.
#[derive(Debug, Clone)]
pub struct FixedProbe {
    /// The environment reported verbatim.
    environment: Environment,
}

impl FixedProbe {
    /// Creates a probe reporting the supplied environment.
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self {
            environment,
        }
    }
}

impl EnvironmentProbe for FixedProbe {
    fn os_platform(&self) -> OsPlatform {
        *self.environment.os()
    }

    fn process_bitness(&self) -> Bitness {
        self.environment.process_bitness()
    }

    fn os_bitness(&self) -> Option<Bitness> {
        self.environment.os_bitness()
    }

    fn runtime_framework(&self) -> RuntimeFramework {
        self.environment.runtime().clone()
    }
}
