// platform-gate-core/tests/support/environments.rs
// ============================================================================
// Module: Environment Fixtures
// Description: Injected environment snapshots for deterministic evaluation.
// ============================================================================
//! ## Overview
//! Purpose-built environment snapshots covering the OS generations and
//! runtime families exercised by the integration tests.

#![allow(
    dead_code,
    reason = "Each integration test binary uses a subset of the shared fixtures."
)]

use platform_gate_core::Bitness;
use platform_gate_core::Environment;
use platform_gate_core::FrameworkVersion;
use platform_gate_core::OsKind;
use platform_gate_core::OsPlatform;
use platform_gate_core::OsVersion;
use platform_gate_core::ProductType;
use platform_gate_core::RuntimeFramework;
use platform_gate_core::RuntimeKind;

// ========================================================================
// Composition Helpers
// ========================================================================

/// Builds an environment from an OS classification and runtime identity.
///
/// Defaults to a 64-bit process on a 64-bit OS.
pub fn environment(os: OsPlatform, runtime: RuntimeFramework) -> Environment {
    Environment::new(os, runtime, Bitness::Bits64, Some(Bitness::Bits64))
}

/// Standard CLR at the given version components.
pub fn net(parts: &[u32]) -> RuntimeFramework {
    RuntimeFramework::new(RuntimeKind::Net, FrameworkVersion::from_parts(parts))
}

/// Mono runtime at the given version components.
pub fn mono(parts: &[u32]) -> RuntimeFramework {
    RuntimeFramework::new(RuntimeKind::Mono, FrameworkVersion::from_parts(parts))
}

/// Runtime identity reported when no managed runtime is detectable.
pub fn unknown_runtime() -> RuntimeFramework {
    RuntimeFramework::new(RuntimeKind::Unknown, FrameworkVersion::UNSPECIFIED)
}

/// Windows NT classification at the given version and product type.
pub fn windows_nt(major: u32, minor: u32, product: ProductType) -> OsPlatform {
    OsPlatform::new(OsKind::Win32Nt, OsVersion::new(major, minor), product)
}

/// Windows 9x-line classification at the given minor version.
pub fn win9x(minor: u32) -> OsPlatform {
    OsPlatform::new(OsKind::Win32Windows, OsVersion::new(4, minor), ProductType::Unknown)
}

// ========================================================================
// OS Fixtures
// ========================================================================

/// Windows 7 (NT 6.1 workstation) with a .NET 4.0 runtime.
pub fn windows7() -> Environment {
    environment(windows_nt(6, 1, ProductType::Workstation), net(&[4, 0]))
}

/// Windows 10 (NT 10 workstation) with a .NET 4.8 runtime.
pub fn windows10() -> Environment {
    environment(windows_nt(10, 0, ProductType::Workstation), net(&[4, 8]))
}

/// Windows XP (NT 5.1 workstation) with a .NET 2.0 runtime.
pub fn windows_xp() -> Environment {
    environment(windows_nt(5, 1, ProductType::Workstation), net(&[2, 0]))
}

/// Windows Server 2012 R2 (NT 6.3 server) with a .NET 4.5 runtime.
pub fn server2012_r2() -> Environment {
    environment(windows_nt(6, 3, ProductType::Server), net(&[4, 5]))
}

/// Windows Server 2012 R1 (NT 6.2 server) with a .NET 4.5 runtime.
pub fn server2012_r1() -> Environment {
    environment(windows_nt(6, 2, ProductType::Server), net(&[4, 5]))
}

/// Linux with a Mono 4.0 runtime.
pub fn linux() -> Environment {
    environment(
        OsPlatform::new(OsKind::Unix, OsVersion::UNKNOWN, ProductType::Unknown),
        mono(&[4, 0]),
    )
}

/// macOS with a Mono 4.0 runtime.
pub fn macos() -> Environment {
    environment(
        OsPlatform::new(OsKind::MacOsX, OsVersion::UNKNOWN, ProductType::Unknown),
        mono(&[4, 0]),
    )
}

/// 32-bit Linux process on an OS of unresolvable bitness.
pub fn linux_32bit() -> Environment {
    Environment::new(
        OsPlatform::new(OsKind::Unix, OsVersion::UNKNOWN, ProductType::Unknown),
        mono(&[4, 0]),
        Bitness::Bits32,
        None,
    )
}

/// Windows environment whose runtime is the given framework.
pub fn windows_with_runtime(runtime: RuntimeFramework) -> Environment {
    environment(windows_nt(6, 1, ProductType::Workstation), runtime)
}
