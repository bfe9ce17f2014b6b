// platform-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Platform Gate Interfaces
// Description: Host-agnostic contract for environment detection.
// Purpose: Define the probe surface the evaluator builds its snapshot from.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The probe interface decouples evaluation from host detection. A live probe
//! reads the running process; fixed probes inject explicit environments for
//! deterministic testing. Probes are infallible by contract: anything the
//! host cannot report degrades to an unknown tag whose predicates are false.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Bitness;
use crate::core::Environment;
use crate::core::OsPlatform;
use crate::core::RuntimeFramework;

// ============================================================================
// SECTION: Environment Probe
// ============================================================================

/// Host-agnostic environment detection surface.
pub trait EnvironmentProbe {
    /// Reports the operating system classification.
    fn os_platform(&self) -> OsPlatform;

    /// Reports the pointer width of the running process.
    fn process_bitness(&self) -> Bitness;

    /// Reports the operating system pointer width, when resolvable.
    fn os_bitness(&self) -> Option<Bitness>;

    /// Reports the managed runtime identity.
    fn runtime_framework(&self) -> RuntimeFramework;

    /// Captures an immutable snapshot of everything the probe reports.
    fn snapshot(&self) -> Environment {
        Environment::new(
            self.os_platform(),
            self.runtime_framework(),
            self.process_bitness(),
            self.os_bitness(),
        )
    }
}
