// platform-gate-core/src/runtime/resolver.rs
// ============================================================================
// Module: Platform Token Resolver
// Description: Classification and resolution of platform/runtime tokens.
// Purpose: Map one specification token to a verdict against an environment.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Token resolution runs in two stages. Classification normalizes a raw token
//! (trim, case-fold) and maps it into the vocabulary through a static
//! name-to-predicate table, the bitness keywords, or the runtime family alias
//! table; anything outside the vocabulary is an error. Resolution then
//! evaluates the classified token against an environment snapshot. The split
//! lets specifications be vocabulary-checked at load time without an
//! environment in hand.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use thiserror::Error;

use crate::core::Bitness;
use crate::core::Environment;
use crate::core::FrameworkVersion;
use crate::core::OsPlatform;
use crate::core::PlatformSpec;
use crate::core::RuntimeFramework;
use crate::core::RuntimeKind;
use crate::core::VersionParseError;

// ============================================================================
// SECTION: Token Vocabulary
// ============================================================================

/// Comma-delimited list of all supported OS platform constants.
pub const OS_PLATFORMS: &str = "Win,Win32,Win32S,Win32NT,Win32Windows,WinCE,Win95,Win98,WinMe,\
                                NT3,NT4,NT5,NT6,Win2K,WinXP,Win2003Server,Vista,\
                                Win2008Server,Win2008ServerR2,Win2012Server,Win2012ServerR2,\
                                Win7,Windows7,Win8,Windows8,Win8.1,Windows8.1,Win10,Windows10,\
                                WindowsServer,Unix,Linux,Xbox,MacOSX";

/// Comma-delimited list of all supported runtime platform constants.
pub const RUNTIME_PLATFORMS: &str = "Net,NetCF,SSCLI,Rotor,Mono,SL,Silverlight,MonoTouch";

/// Predicate accessor over an OS classification.
type OsPredicate = fn(&OsPlatform) -> bool;

/// Normalized OS token names mapped to their platform predicates.
///
/// Aliases share a predicate entry; adding a platform is a table change.
const OS_TOKENS: &[(&str, OsPredicate)] = &[
    ("WIN", OsPlatform::is_windows),
    ("WIN32", OsPlatform::is_windows),
    ("WIN32S", OsPlatform::is_win32s),
    ("WIN32WINDOWS", OsPlatform::is_win32_windows),
    ("WIN32NT", OsPlatform::is_win32_nt),
    ("WINCE", OsPlatform::is_win_ce),
    ("WIN95", OsPlatform::is_win95),
    ("WIN98", OsPlatform::is_win98),
    ("WINME", OsPlatform::is_win_me),
    ("NT3", OsPlatform::is_nt3),
    ("NT4", OsPlatform::is_nt4),
    ("NT5", OsPlatform::is_nt5),
    ("NT6", OsPlatform::is_nt6),
    ("WIN2K", OsPlatform::is_win2k),
    ("WINXP", OsPlatform::is_win_xp),
    ("WIN2003SERVER", OsPlatform::is_win2003_server),
    ("VISTA", OsPlatform::is_vista),
    ("WIN2008SERVER", OsPlatform::is_win2008_server),
    ("WIN2008SERVERR2", OsPlatform::is_win2008_server_r2),
    ("WIN2012SERVER", OsPlatform::is_win2012_server),
    ("WIN2012SERVERR2", OsPlatform::is_win2012_server_r2),
    ("WIN7", OsPlatform::is_windows7),
    ("WINDOWS7", OsPlatform::is_windows7),
    ("WIN8", OsPlatform::is_windows8),
    ("WINDOWS8", OsPlatform::is_windows8),
    ("WIN8.1", OsPlatform::is_windows81),
    ("WINDOWS8.1", OsPlatform::is_windows81),
    ("WIN10", OsPlatform::is_windows10),
    ("WINDOWS10", OsPlatform::is_windows10),
    ("WINDOWSSERVER", OsPlatform::is_windows_server10),
    ("UNIX", OsPlatform::is_unix),
    ("LINUX", OsPlatform::is_unix),
    ("XBOX", OsPlatform::is_xbox),
    ("MACOSX", OsPlatform::is_mac_os_x),
];

// ============================================================================
// SECTION: Token Errors
// ============================================================================

/// Errors produced while classifying a specification token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not a recognized OS, bitness, or runtime-family name.
    #[error("invalid platform name: {token}")]
    UnknownToken {
        /// The offending token, trimmed.
        token: String,
    },
    /// The runtime token's version segment failed to parse.
    #[error("malformed version in platform token {token}: {source}")]
    MalformedVersion {
        /// The offending token, trimmed.
        token: String,
        /// The underlying parse failure.
        source: VersionParseError,
    },
}

// ============================================================================
// SECTION: Token Classification
// ============================================================================

/// A specification token mapped into the vocabulary.
#[derive(Debug, Clone)]
pub enum TokenKind {
    /// OS-generation predicate resolved against the OS classification.
    Os(OsPredicate),
    /// Pointer-width requirement on the running process.
    ProcessBitness(Bitness),
    /// Pointer-width requirement on the operating system.
    OsBitness(Bitness),
    /// Runtime family and partial-precision version requirement.
    Runtime(RuntimeFramework),
}

/// Classifies one raw token into the vocabulary.
///
/// The token is trimmed and case-folded before lookup.
///
/// # Errors
///
/// Returns [`TokenError::UnknownToken`] for names outside the vocabulary and
/// [`TokenError::MalformedVersion`] for runtime tokens whose version segment
/// does not parse.
pub fn classify(token: &str) -> Result<TokenKind, TokenError> {
    let trimmed = token.trim();
    let normalized = trimmed.to_ascii_uppercase();

    if let Some((_, predicate)) = OS_TOKENS.iter().find(|(name, _)| *name == normalized) {
        return Ok(TokenKind::Os(*predicate));
    }

    // Bitness keywords contain `-`, so they are matched before the
    // runtime-token split.
    match normalized.as_str() {
        "64-BIT" | "64-BIT-PROCESS" => return Ok(TokenKind::ProcessBitness(Bitness::Bits64)),
        "32-BIT" | "32-BIT-PROCESS" => return Ok(TokenKind::ProcessBitness(Bitness::Bits32)),
        "64-BIT-OS" => return Ok(TokenKind::OsBitness(Bitness::Bits64)),
        "32-BIT-OS" => return Ok(TokenKind::OsBitness(Bitness::Bits32)),
        _ => {}
    }

    classify_runtime(&normalized, trimmed)
}

/// Classifies a normalized token as a runtime family with optional version.
fn classify_runtime(normalized: &str, original: &str) -> Result<TokenKind, TokenError> {
    let (family, version) = match normalized.split_once('-') {
        Some((family, version)) => (family, Some(version)),
        None => (normalized, None),
    };

    let kind = runtime_kind(family).ok_or_else(|| TokenError::UnknownToken {
        token: original.to_string(),
    })?;

    let version = match version {
        Some(version) => {
            FrameworkVersion::from_str(version).map_err(|source| TokenError::MalformedVersion {
                token: original.to_string(),
                source,
            })?
        }
        None => FrameworkVersion::UNSPECIFIED,
    };

    Ok(TokenKind::Runtime(RuntimeFramework::new(kind, version)))
}

/// Maps a normalized runtime family alias to its tag.
fn runtime_kind(name: &str) -> Option<RuntimeKind> {
    match name {
        "NET" => Some(RuntimeKind::Net),
        "NETCF" => Some(RuntimeKind::NetCf),
        "SSCLI" | "ROTOR" => Some(RuntimeKind::Sscli),
        "MONO" => Some(RuntimeKind::Mono),
        "SL" | "SILVERLIGHT" => Some(RuntimeKind::Silverlight),
        "MONOTOUCH" => Some(RuntimeKind::MonoTouch),
        _ => None,
    }
}

// ============================================================================
// SECTION: Token Resolution
// ============================================================================

/// Evaluates a classified token against an environment snapshot.
#[must_use]
pub fn resolve(kind: &TokenKind, environment: &Environment) -> bool {
    match kind {
        TokenKind::Os(predicate) => predicate(environment.os()),
        TokenKind::ProcessBitness(bitness) => environment.process_bitness() == *bitness,
        TokenKind::OsBitness(bitness) => environment.os_bitness() == Some(*bitness),
        TokenKind::Runtime(target) => environment.runtime().supports(target),
    }
}

/// Classifies and resolves one raw token in a single step.
///
/// # Errors
///
/// Returns [`TokenError`] when classification fails; see [`classify`].
pub fn resolve_token(token: &str, environment: &Environment) -> Result<bool, TokenError> {
    Ok(resolve(&classify(token)?, environment))
}

// ============================================================================
// SECTION: Specification Validation
// ============================================================================

/// Vocabulary-checks every token of a comma-delimited specification.
///
/// # Errors
///
/// Returns the first [`TokenError`] encountered, in token order.
pub fn validate_specification(specification: &str) -> Result<(), TokenError> {
    for token in specification.split(',') {
        classify(token)?;
    }
    Ok(())
}

/// Vocabulary-checks both lists of a platform specification at load time.
///
/// # Errors
///
/// Returns the first [`TokenError`] encountered, include list first.
pub fn validate_spec(spec: &PlatformSpec) -> Result<(), TokenError> {
    if let Some(include) = spec.include.as_deref() {
        validate_specification(include)?;
    }
    if let Some(exclude) = spec.exclude.as_deref() {
        validate_specification(exclude)?;
    }
    Ok(())
}
