// platform-gate-core/src/core/os.rs
// ============================================================================
// Module: Operating System Platform Model
// Description: Operating system family, version, and product classification.
// Purpose: Expose generation predicates derived from a detected or injected OS triple.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Operating system platforms are classified by a `(kind, version, product)`
//! triple. Every generation predicate is derived from the triple at query
//! time; unknown kinds or versions make the predicates false rather than
//! erroring, which keeps evaluation fail-closed on unrecognized hosts.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: OS Kind
// ============================================================================

/// Operating system family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OsKind {
    /// Win32S subsystem on 16-bit Windows.
    Win32S,
    /// Windows 95/98/ME product line.
    Win32Windows,
    /// Windows NT product line.
    Win32Nt,
    /// Windows CE.
    WinCe,
    /// Unix or Linux.
    Unix,
    /// Apple macOS.
    MacOsX,
    /// Xbox console platform.
    Xbox,
    /// Unrecognized platform; every generation predicate is false.
    #[default]
    Unknown,
}

// ============================================================================
// SECTION: Product Type
// ============================================================================

/// Windows product classification for NT releases that share a kernel version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    /// Product type is not known.
    #[default]
    Unknown,
    /// Client (workstation) release.
    Workstation,
    /// Server release.
    Server,
}

// ============================================================================
// SECTION: OS Version
// ============================================================================

/// Operating system version as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct OsVersion {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
}

impl OsVersion {
    /// Version placeholder used when the host does not report one.
    ///
    /// No generation predicate matches version zero.
    pub const UNKNOWN: Self = Self {
        major: 0,
        minor: 0,
    };

    /// Creates a version from major and minor components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
        }
    }
}

// ============================================================================
// SECTION: OS Platform
// ============================================================================

/// Immutable operating system classification.
///
/// Generation predicates are derived from the stored triple and are never
/// independently settable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct OsPlatform {
    /// Operating system family tag.
    kind: OsKind,
    /// Reported kernel version.
    version: OsVersion,
    /// Product classification for NT releases.
    product: ProductType,
}

impl OsPlatform {
    /// Creates a platform classification from its parts.
    #[must_use]
    pub const fn new(kind: OsKind, version: OsVersion, product: ProductType) -> Self {
        Self {
            kind,
            version,
            product,
        }
    }

    /// Returns the family tag.
    #[must_use]
    pub const fn kind(&self) -> OsKind {
        self.kind
    }

    /// Returns the reported version.
    #[must_use]
    pub const fn version(&self) -> OsVersion {
        self.version
    }

    /// Returns the product classification.
    #[must_use]
    pub const fn product(&self) -> ProductType {
        self.product
    }

    /// True when the product is a server release.
    const fn is_server(&self) -> bool {
        matches!(self.product, ProductType::Server)
    }

    /// True when the product is a client (workstation) release.
    const fn is_workstation(&self) -> bool {
        matches!(self.product, ProductType::Workstation)
    }

    /// True on any Windows family.
    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(
            self.kind,
            OsKind::Win32S | OsKind::Win32Windows | OsKind::Win32Nt | OsKind::WinCe
        )
    }

    /// True on the Win32S subsystem.
    #[must_use]
    pub const fn is_win32s(&self) -> bool {
        matches!(self.kind, OsKind::Win32S)
    }

    /// True on the Windows 95/98/ME product line.
    #[must_use]
    pub const fn is_win32_windows(&self) -> bool {
        matches!(self.kind, OsKind::Win32Windows)
    }

    /// True on the Windows NT product line.
    #[must_use]
    pub const fn is_win32_nt(&self) -> bool {
        matches!(self.kind, OsKind::Win32Nt)
    }

    /// True on Windows CE.
    #[must_use]
    pub const fn is_win_ce(&self) -> bool {
        matches!(self.kind, OsKind::WinCe)
    }

    /// True on Windows 95 (9x line, version 4.0).
    #[must_use]
    pub const fn is_win95(&self) -> bool {
        self.is_win32_windows() && self.version.major == 4 && self.version.minor == 0
    }

    /// True on Windows 98 (9x line, version 4.10).
    #[must_use]
    pub const fn is_win98(&self) -> bool {
        self.is_win32_windows() && self.version.major == 4 && self.version.minor == 10
    }

    /// True on Windows ME (9x line, version 4.90).
    #[must_use]
    pub const fn is_win_me(&self) -> bool {
        self.is_win32_windows() && self.version.major == 4 && self.version.minor == 90
    }

    /// True on NT 3 kernels.
    #[must_use]
    pub const fn is_nt3(&self) -> bool {
        self.is_win32_nt() && self.version.major == 3
    }

    /// True on NT 4 kernels.
    #[must_use]
    pub const fn is_nt4(&self) -> bool {
        self.is_win32_nt() && self.version.major == 4
    }

    /// True on NT 5 kernels (Windows 2000 through Server 2003).
    #[must_use]
    pub const fn is_nt5(&self) -> bool {
        self.is_win32_nt() && self.version.major == 5
    }

    /// True on Windows 2000 (NT 5.0).
    #[must_use]
    pub const fn is_win2k(&self) -> bool {
        self.is_nt5() && self.version.minor == 0
    }

    /// True on Windows XP (NT 5.1, or NT 5.2 workstation for 64-bit XP).
    #[must_use]
    pub const fn is_win_xp(&self) -> bool {
        self.is_nt5()
            && (self.version.minor == 1 || (self.version.minor == 2 && self.is_workstation()))
    }

    /// True on Windows Server 2003 (NT 5.2 server).
    #[must_use]
    pub const fn is_win2003_server(&self) -> bool {
        self.is_nt5() && self.version.minor == 2 && self.is_server()
    }

    /// True on NT 6 kernels (Vista through Windows 8.1).
    #[must_use]
    pub const fn is_nt6(&self) -> bool {
        self.is_win32_nt() && self.version.major == 6
    }

    /// True on Windows Vista (NT 6.0 workstation).
    #[must_use]
    pub const fn is_vista(&self) -> bool {
        self.is_nt6() && self.version.minor == 0 && self.is_workstation()
    }

    /// True on Windows Server 2008 R1 (NT 6.0 server).
    #[must_use]
    pub const fn is_win2008_server_r1(&self) -> bool {
        self.is_nt6() && self.version.minor == 0 && self.is_server()
    }

    /// True on Windows Server 2008 R2 (NT 6.1 server).
    #[must_use]
    pub const fn is_win2008_server_r2(&self) -> bool {
        self.is_nt6() && self.version.minor == 1 && self.is_server()
    }

    /// True on either Windows Server 2008 release.
    #[must_use]
    pub const fn is_win2008_server(&self) -> bool {
        self.is_win2008_server_r1() || self.is_win2008_server_r2()
    }

    /// True on Windows Server 2012 R1 (NT 6.2 server).
    #[must_use]
    pub const fn is_win2012_server_r1(&self) -> bool {
        self.is_nt6() && self.version.minor == 2 && self.is_server()
    }

    /// True on Windows Server 2012 R2 (NT 6.3 server).
    #[must_use]
    pub const fn is_win2012_server_r2(&self) -> bool {
        self.is_nt6() && self.version.minor == 3 && self.is_server()
    }

    /// True on either Windows Server 2012 release.
    #[must_use]
    pub const fn is_win2012_server(&self) -> bool {
        self.is_win2012_server_r1() || self.is_win2012_server_r2()
    }

    /// True on Windows 7 (NT 6.1 workstation).
    #[must_use]
    pub const fn is_windows7(&self) -> bool {
        self.is_nt6() && self.version.minor == 1 && self.is_workstation()
    }

    /// True on Windows 8 (NT 6.2 workstation).
    #[must_use]
    pub const fn is_windows8(&self) -> bool {
        self.is_nt6() && self.version.minor == 2 && self.is_workstation()
    }

    /// True on Windows 8.1 (NT 6.3 workstation).
    #[must_use]
    pub const fn is_windows81(&self) -> bool {
        self.is_nt6() && self.version.minor == 3 && self.is_workstation()
    }

    /// True on Windows 10 (NT 10 workstation).
    #[must_use]
    pub const fn is_windows10(&self) -> bool {
        self.is_win32_nt() && self.version.major == 10 && self.is_workstation()
    }

    /// True on Windows Server 2016 and later (NT 10 server).
    #[must_use]
    pub const fn is_windows_server10(&self) -> bool {
        self.is_win32_nt() && self.version.major == 10 && self.is_server()
    }

    /// True on Unix or Linux.
    #[must_use]
    pub const fn is_unix(&self) -> bool {
        matches!(self.kind, OsKind::Unix)
    }

    /// True on macOS.
    #[must_use]
    pub const fn is_mac_os_x(&self) -> bool {
        matches!(self.kind, OsKind::MacOsX)
    }

    /// True on the Xbox console platform.
    #[must_use]
    pub const fn is_xbox(&self) -> bool {
        matches!(self.kind, OsKind::Xbox)
    }
}
