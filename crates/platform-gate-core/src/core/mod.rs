// platform-gate-core/src/core/mod.rs
// ============================================================================
// Module: Platform Gate Core Types
// Description: Canonical environment, runtime, and specification structures.
// Purpose: Provide stable, serializable types for platform evaluation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types model the execution environment (operating system, managed
//! runtime, bitness) and the declarative platform specifications evaluated
//! against it. These types are the canonical source of truth for any derived
//! surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod environment;
pub mod framework;
pub mod os;
pub mod spec;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use environment::Bitness;
pub use environment::Environment;
pub use framework::FrameworkVersion;
pub use framework::RuntimeFramework;
pub use framework::RuntimeKind;
pub use framework::VersionParseError;
pub use os::OsKind;
pub use os::OsPlatform;
pub use os::OsVersion;
pub use os::ProductType;
pub use spec::PlatformSpec;
