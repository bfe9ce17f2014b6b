// crates/platform-gate-core/examples/minimal.rs
// ============================================================================
// Module: Platform Gate Minimal Example
// Description: Minimal end-to-end platform evaluation using injected environments.
// Purpose: Demonstrate include/exclude evaluation and reason reporting.
// Dependencies: platform-gate-core
// ============================================================================

//! ## Overview
//! Evaluates a few representative platform specifications against injected
//! environment snapshots. This example is host-agnostic and suitable for
//! quick verification.

use platform_gate_core::Bitness;
use platform_gate_core::Environment;
use platform_gate_core::FrameworkVersion;
use platform_gate_core::OsKind;
use platform_gate_core::OsPlatform;
use platform_gate_core::OsVersion;
use platform_gate_core::PlatformEvaluator;
use platform_gate_core::PlatformSpec;
use platform_gate_core::ProductType;
use platform_gate_core::RuntimeFramework;
use platform_gate_core::RuntimeKind;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Ensures an expectation holds, failing the example otherwise.
fn ensure(condition: bool, message: &'static str) -> Result<(), ExampleError> {
    if condition { Ok(()) } else { Err(ExampleError(message)) }
}

/// Builds a Windows 7 snapshot carrying a .NET 4.0 runtime.
fn windows7() -> Environment {
    Environment::new(
        OsPlatform::new(OsKind::Win32Nt, OsVersion::new(6, 1), ProductType::Workstation),
        RuntimeFramework::new(RuntimeKind::Net, FrameworkVersion::from_parts(&[4, 0])),
        Bitness::Bits64,
        Some(Bitness::Bits64),
    )
}

/// Builds a Linux snapshot carrying a Mono 4.0 runtime.
fn linux() -> Environment {
    Environment::new(
        OsPlatform::new(OsKind::Unix, OsVersion::UNKNOWN, ProductType::Unknown),
        RuntimeFramework::new(RuntimeKind::Mono, FrameworkVersion::from_parts(&[4, 0])),
        Bitness::Bits64,
        Some(Bitness::Bits64),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = PlatformSpec::new(Some("WIN,LINUX".to_string()), Some("NET-4.5".to_string()));

    let mut on_windows = PlatformEvaluator::with_environment(windows7());
    ensure(on_windows.is_spec_supported(&spec), "spec should pass on Windows 7 with .NET 4.0")?;

    let mut on_linux = PlatformEvaluator::with_environment(linux());
    ensure(on_linux.is_spec_supported(&spec), "spec should pass on Linux with Mono")?;

    ensure(!on_linux.is_supported(Some("WIN7"), None), "include WIN7 should fail on Linux")?;
    ensure(
        on_linux.reason() == "Only supported on WIN7",
        "reason should name the include list",
    )?;

    ensure(!on_linux.is_supported(Some("NET-abc"), None), "malformed versions fail closed")?;

    Ok(())
}
